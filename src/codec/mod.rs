pub mod algorithm;
pub mod decoder;
pub mod encoder;
pub mod format;

pub use algorithm::{Algorithm, PolylineCodec};
pub use decoder::{
    DecodedPolyline, decode, decode_flexible, decode_polyline, get_third_dimension,
};
pub use encoder::{encode, encode_flexible, encode_polyline};
pub use format::Format;
