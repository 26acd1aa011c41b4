pub mod constants;
pub mod header;
pub mod varint;

pub use constants::{
    DEFAULT_PRECISION, DEFAULT_THIRD_DIMENSION_PRECISION, FLEXIBLE_ALPHABET,
    FLEXIBLE_DECODING_TABLE, FORMAT_VERSION, MAX_LATITUDE, MAX_LONGITUDE, MAX_PRECISION,
    POLYLINE_ALPHABET, POLYLINE_DECODING_TABLE,
};
pub use header::{Header, ThirdDimension};
pub use varint::{
    decode_signed, decode_unsigned, encode_signed, encode_unsigned, round_half_away, unzigzag,
    zigzag,
};
