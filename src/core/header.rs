use crate::core::constants::{FLEXIBLE_ALPHABET, FLEXIBLE_DECODING_TABLE, FORMAT_VERSION};
use crate::core::varint::{decode_unsigned, encode_unsigned};
use crate::error::PolylineError;
use serde::{Deserialize, Serialize};

/// Meaning of the optional third value of each coordinate.
///
/// The discriminants are the 3-bit codes stored in the flexible header.
/// Codes 4 and 5 are reserved by the format but still carry a third value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThirdDimension {
    /// 2D data
    #[default]
    Absent = 0,
    Level = 1,
    Altitude = 2,
    Elevation = 3,
    Reserved1 = 4,
    Reserved2 = 5,
    Custom1 = 6,
    Custom2 = 7,
}

impl ThirdDimension {
    /// Returns the third dimension for a header code; only the low 3 bits are read.
    pub fn from_code(code: u8) -> Self {
        match code & 0x7 {
            0 => ThirdDimension::Absent,
            1 => ThirdDimension::Level,
            2 => ThirdDimension::Altitude,
            3 => ThirdDimension::Elevation,
            4 => ThirdDimension::Reserved1,
            5 => ThirdDimension::Reserved2,
            6 => ThirdDimension::Custom1,
            _ => ThirdDimension::Custom2,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_present(self) -> bool {
        self != ThirdDimension::Absent
    }

    /// Number of values per coordinate.
    pub fn dimensions(self) -> usize {
        if self.is_present() { 3 } else { 2 }
    }
}

/// Flexible Polyline header: version plus packed precision metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub precision: u8,
    pub third_dimension: ThirdDimension,
    pub third_dimension_precision: u8,
}

impl Header {
    /// Packs the metadata as `(third_precision << 7) | (third_dim << 4) | precision`.
    pub fn pack(&self) -> u64 {
        ((self.third_dimension_precision as u64) << 7)
            | ((self.third_dimension.code() as u64) << 4)
            | self.precision as u64
    }

    pub fn unpack(metadata: u64) -> Self {
        Self {
            precision: (metadata & 0xF) as u8,
            third_dimension: ThirdDimension::from_code(((metadata >> 4) & 0x7) as u8),
            third_dimension_precision: ((metadata >> 7) & 0xF) as u8,
        }
    }

    /// Appends the version and packed metadata varints to `out`.
    pub fn write(&self, out: &mut String) {
        encode_unsigned(FORMAT_VERSION, FLEXIBLE_ALPHABET, out);
        encode_unsigned(self.pack(), FLEXIBLE_ALPHABET, out);
    }

    /// Reads the header at the start of `encoded`.
    ///
    /// Returns the header and the index of the first coordinate character.
    pub fn read(encoded: &str) -> Result<(Self, usize), PolylineError> {
        let (version, next) = decode_unsigned(encoded, 0, &FLEXIBLE_DECODING_TABLE)?;
        if version != FORMAT_VERSION {
            return Err(PolylineError::InvalidHeaderVersion(version));
        }
        let (metadata, next) = decode_unsigned(encoded, next, &FLEXIBLE_DECODING_TABLE)?;
        Ok((Self::unpack(metadata), next))
    }
}
