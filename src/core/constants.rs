/// Flexible Polyline format version carried in the header
pub const FORMAT_VERSION: u64 = 1;

/// Highest precision (decimal digits) either format can carry
pub const MAX_PRECISION: u8 = 15;

/// Default longitude/latitude precision for the flexible format
pub const DEFAULT_PRECISION: u8 = 6;

/// Default third dimension precision for the flexible format
pub const DEFAULT_THIRD_DIMENSION_PRECISION: u8 = 0;

/// Longitude bound, inclusive
pub const MAX_LONGITUDE: f64 = 180.0;

/// Latitude bound, inclusive
pub const MAX_LATITUDE: f64 = 90.0;

/// Scaled third dimension values must stay below this magnitude so that
/// deltas and their zigzag form fit in 64 bits
pub(crate) const MAX_SCALED_MAGNITUDE: f64 = (1u64 << 61) as f64;

/// Bits carried by one encoded character
pub(crate) const CHUNK_BITS: u32 = 5;

/// Payload mask for one encoded character
pub(crate) const CHUNK_MASK: u64 = 0x1F;

/// Continuation flag of one encoded character
pub(crate) const CONTINUATION_BIT: u64 = 0x20;

/// Alphabet of the Flexible Polyline format
pub const FLEXIBLE_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Alphabet of the Encoded Polyline format (ASCII 63 `?` through 126 `~`)
pub const POLYLINE_ALPHABET: &[u8; 64] = &polyline_alphabet();

/// ASCII code to 6-bit value for the flexible alphabet, -1 for unused codes
pub const FLEXIBLE_DECODING_TABLE: [i8; 128] = decoding_table(FLEXIBLE_ALPHABET);

/// ASCII code to 6-bit value for the polyline alphabet, -1 for unused codes
pub const POLYLINE_DECODING_TABLE: [i8; 128] = decoding_table(POLYLINE_ALPHABET);

/// Powers of ten for every supported precision
pub(crate) const POWERS_OF_TEN: [f64; 16] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15,
];

const fn polyline_alphabet() -> [u8; 64] {
    let mut alphabet = [0u8; 64];
    let mut i = 0;
    while i < 64 {
        alphabet[i] = 63 + i as u8;
        i += 1;
    }
    alphabet
}

const fn decoding_table(alphabet: &[u8; 64]) -> [i8; 128] {
    let mut table = [-1i8; 128];
    let mut i = 0;
    while i < 64 {
        table[alphabet[i] as usize] = i as i8;
        i += 1;
    }
    table
}
