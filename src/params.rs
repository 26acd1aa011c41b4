use crate::core::constants::{DEFAULT_PRECISION, DEFAULT_THIRD_DIMENSION_PRECISION, MAX_PRECISION};
use crate::core::header::{Header, ThirdDimension};
use crate::error::PolylineError;
use serde::{Deserialize, Serialize};

/// Precision and third dimension settings for one encoded polyline.
///
/// Only the flexible format stores these in-band; the fixed-precision
/// formats use `precision` 5 or 6 and never carry a third dimension.
///
/// # Example
///
/// ```
/// use polycodec_rs::{CompressionParameters, ThirdDimension};
///
/// # fn main() -> Result<(), polycodec_rs::PolylineError> {
/// let params = CompressionParameters::new(5)
///     .third_dimension(ThirdDimension::Altitude, 2)
///     .validated()?;
/// assert_eq!(params.precision, 5);
///
/// let params = CompressionParameters::from_json(r#"{"precision": 7}"#)?;
/// assert_eq!(params.third_dimension, ThirdDimension::Absent);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionParameters {
    /// Decimal digits kept for longitude and latitude (0-15)
    pub precision: u8,
    /// Meaning of the third value, `Absent` for 2D data
    pub third_dimension: ThirdDimension,
    /// Decimal digits kept for the third value (0-15)
    pub third_dimension_precision: u8,
}

impl Default for CompressionParameters {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            third_dimension: ThirdDimension::Absent,
            third_dimension_precision: DEFAULT_THIRD_DIMENSION_PRECISION,
        }
    }
}

impl CompressionParameters {
    /// 2D parameters with the given longitude/latitude precision.
    pub fn new(precision: u8) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }

    pub fn precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    pub fn third_dimension(mut self, third_dimension: ThirdDimension, precision: u8) -> Self {
        self.third_dimension = third_dimension;
        self.third_dimension_precision = precision;
        self
    }

    /// Rejects precisions outside 0-15.
    pub fn validate(&self) -> Result<(), PolylineError> {
        for precision in [self.precision, self.third_dimension_precision] {
            if precision > MAX_PRECISION {
                return Err(PolylineError::InvalidPrecisionValue(precision));
            }
        }
        Ok(())
    }

    pub fn validated(self) -> Result<Self, PolylineError> {
        self.validate()?;
        Ok(self)
    }

    /// Loads and validates parameters from a JSON object. Missing fields take
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, PolylineError> {
        let params: Self =
            serde_json::from_str(json).map_err(|e| PolylineError::ConfigError(e.to_string()))?;
        params.validated()
    }

    pub fn to_json(&self) -> Result<String, PolylineError> {
        serde_json::to_string(self).map_err(|e| PolylineError::ConfigError(e.to_string()))
    }

    /// Number of values per coordinate.
    pub fn dimensions(&self) -> usize {
        self.third_dimension.dimensions()
    }

    pub(crate) fn header(&self) -> Header {
        Header {
            precision: self.precision,
            third_dimension: self.third_dimension,
            third_dimension_precision: self.third_dimension_precision,
        }
    }
}

impl From<Header> for CompressionParameters {
    fn from(header: Header) -> Self {
        Self {
            precision: header.precision,
            third_dimension: header.third_dimension,
            third_dimension_precision: header.third_dimension_precision,
        }
    }
}
