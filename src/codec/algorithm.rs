use crate::codec::decoder::{DecodedPolyline, decode};
use crate::codec::encoder::encode_with;
use crate::codec::format::Format;
use crate::coord::Coordinate;
use crate::error::PolylineError;
use crate::params::CompressionParameters;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Encode/decode capability shared by every supported algorithm.
pub trait PolylineCodec {
    /// Encodes a coordinate sequence. An empty sequence encodes to `""`.
    fn encode<C: Coordinate>(&self, coordinates: &[C]) -> Result<String, PolylineError>;
    /// Decodes an encoded string back into coordinates and the parameters used.
    fn decode(&self, encoded: &str) -> Result<DecodedPolyline, PolylineError>;
}

/// The supported encodings, chosen by the caller and passed to every call site.
///
/// # Example
/// ```
/// use polycodec_rs::{Algorithm, CompressionParameters, PolylineCodec};
///
/// # fn main() -> Result<(), polycodec_rs::PolylineError> {
/// let path = [(-120.2, 38.5), (-120.95, 40.7), (-126.453, 43.252)];
///
/// let encoded = Algorithm::Polyline5.encode(&path)?;
/// assert_eq!(encoded, "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
///
/// let flexible = Algorithm::Flexible(CompressionParameters::new(5));
/// let decoded = flexible.decode(&flexible.encode(&path)?)?;
/// assert_eq!(decoded.len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "lowercase")]
pub enum Algorithm {
    /// Encoded Polyline with 5 decimal digits
    Polyline5,
    /// Encoded Polyline with 6 decimal digits
    Polyline6,
    /// Flexible Polyline with the given parameters
    Flexible(CompressionParameters),
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Flexible(CompressionParameters::default())
    }
}

impl Algorithm {
    pub fn format(&self) -> Format {
        match self {
            Algorithm::Polyline5 | Algorithm::Polyline6 => Format::Polyline,
            Algorithm::Flexible(_) => Format::Flexible,
        }
    }

    /// Parameters used when encoding.
    pub fn parameters(&self) -> CompressionParameters {
        match self {
            Algorithm::Polyline5 => CompressionParameters::new(5),
            Algorithm::Polyline6 => CompressionParameters::new(6),
            Algorithm::Flexible(params) => *params,
        }
    }

    /// Loads an algorithm from JSON, e.g. `{"algorithm": "polyline5"}` or
    /// `{"algorithm": "flexible", "precision": 5}`.
    pub fn from_json(json: &str) -> Result<Self, PolylineError> {
        let algorithm: Self =
            serde_json::from_str(json).map_err(|e| PolylineError::ConfigError(e.to_string()))?;
        algorithm.parameters().validate()?;
        Ok(algorithm)
    }

    /// Encodes many coordinate sequences in parallel, preserving input order.
    pub fn encode_batch<C>(&self, paths: &[Vec<C>]) -> Result<Vec<String>, PolylineError>
    where
        C: Coordinate + Sync,
    {
        debug!("encoding batch of {} paths with {:?}", paths.len(), self);
        paths.par_iter().map(|path| self.encode(path.as_slice())).collect()
    }

    /// Decodes many encoded strings in parallel, preserving input order.
    pub fn decode_batch<S>(&self, encoded: &[S]) -> Result<Vec<DecodedPolyline>, PolylineError>
    where
        S: AsRef<str> + Sync,
    {
        debug!("decoding batch of {} strings with {:?}", encoded.len(), self);
        encoded.par_iter().map(|s| self.decode(s.as_ref())).collect()
    }
}

impl PolylineCodec for Algorithm {
    fn encode<C: Coordinate>(&self, coordinates: &[C]) -> Result<String, PolylineError> {
        encode_with(coordinates, self.format(), &self.parameters())
    }

    fn decode(&self, encoded: &str) -> Result<DecodedPolyline, PolylineError> {
        let fallback = self.parameters().precision;
        decode(encoded, self.format(), fallback).map(DecodedPolyline::from)
    }
}
