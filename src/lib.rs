//! # polycodec-rs
//!
//! Encodes coordinate sequences into compact ASCII strings and back, using
//! either the fixed-precision Encoded Polyline format or the Flexible
//! Polyline format with its self-describing header and optional third
//! dimension.
//!
//! ### 1. Free functions
//!
//! ```
//! use polycodec_rs::{CompressionParameters, decode_flexible, encode_flexible};
//!
//! # fn main() -> Result<(), polycodec_rs::PolylineError> {
//! let path = [(8.6982122, 50.1022829), (8.6956695, 50.1020076)];
//! let encoded = encode_flexible(&path, &CompressionParameters::new(5))?;
//! assert_eq!(encoded, "BFoz5xJ67i1B1B7P");
//!
//! let decoded = decode_flexible(&encoded)?;
//! assert_eq!(decoded.parameters.precision, 5);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `Algorithm` - Choosing a Format
//!
//! ```
//! use polycodec_rs::{Algorithm, PolylineCodec};
//!
//! # fn main() -> Result<(), polycodec_rs::PolylineError> {
//! let algorithm = Algorithm::from_json(r#"{"algorithm": "polyline5"}"#)?;
//! let encoded = algorithm.encode(&[(-120.2, 38.5), (-120.95, 40.7)])?;
//! let decoded = algorithm.decode(&encoded)?;
//! assert_eq!(decoded.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `CsvToPolyline` - CSV File Conversion
//!
//! ```no_run
//! use polycodec_rs::{Algorithm, CsvPolylineConfig, CsvToPolyline};
//!
//! let config = CsvPolylineConfig::from_coords("track_id", "lon", "lat")
//!     .algorithm(Algorithm::Polyline6);
//!
//! "gps_points.csv".to_polyline_csv("tracks.csv", &config).unwrap();
//! ```
//!

pub mod codec;
pub mod coord;
pub mod core;
pub mod error;
pub mod geom;
pub mod io;
pub mod params;

pub use codec::{
    Algorithm, DecodedPolyline, Format, PolylineCodec, decode, decode_flexible, decode_polyline,
    encode, encode_flexible, encode_polyline, get_third_dimension,
};
pub use coord::{Coordinate, Position};
pub use self::core::{
    DEFAULT_PRECISION, FLEXIBLE_ALPHABET, FORMAT_VERSION, MAX_LATITUDE, MAX_LONGITUDE,
    MAX_PRECISION, POLYLINE_ALPHABET, ThirdDimension,
};
pub use error::PolylineError;
pub use geom::{geometry_to_positions, parse_path};
pub use io::{CoordinateSource, CsvPolylineConfig, CsvToPolyline, csv_to_polyline_csv};
pub use params::CompressionParameters;

pub use geo_types;
