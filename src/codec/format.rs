use crate::core::constants::{
    FLEXIBLE_ALPHABET, FLEXIBLE_DECODING_TABLE, POLYLINE_ALPHABET, POLYLINE_DECODING_TABLE,
};
use serde::{Deserialize, Serialize};

/// Wire format of an encoded string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Encoded Polyline: `?`..`~` alphabet, no header, 2D only
    Polyline,
    /// Flexible Polyline: URL-safe alphabet, self-describing header, 2D or 3D
    Flexible,
}

impl Format {
    pub fn alphabet(self) -> &'static [u8; 64] {
        match self {
            Format::Polyline => POLYLINE_ALPHABET,
            Format::Flexible => FLEXIBLE_ALPHABET,
        }
    }

    pub fn decoding_table(self) -> &'static [i8; 128] {
        match self {
            Format::Polyline => &POLYLINE_DECODING_TABLE,
            Format::Flexible => &FLEXIBLE_DECODING_TABLE,
        }
    }

    pub fn has_header(self) -> bool {
        self == Format::Flexible
    }
}
