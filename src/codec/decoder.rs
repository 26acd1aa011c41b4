use crate::codec::format::Format;
use crate::coord::{Position, check_latitude, check_longitude};
use crate::core::header::{Header, ThirdDimension};
use crate::core::varint::{decode_signed, precision_factor};
use crate::error::PolylineError;
use crate::params::CompressionParameters;
use geo_types::LineString;
use log::trace;

/// Result of decoding: the coordinates plus the parameters they were encoded with.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPolyline {
    pub positions: Vec<Position>,
    pub parameters: CompressionParameters,
}

impl DecodedPolyline {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the coordinates as `[lng, lat]` or `[lng, lat, z]` arrays.
    pub fn to_vecs(&self) -> Vec<Vec<f64>> {
        self.positions.iter().map(Position::to_vec).collect()
    }

    /// Converts the path to a 2D `geo_types::LineString`, dropping any third value.
    pub fn to_line_string(&self) -> LineString<f64> {
        self.positions.iter().copied().map(geo_types::Coord::from).collect()
    }
}

impl From<(Vec<Position>, CompressionParameters)> for DecodedPolyline {
    fn from((positions, parameters): (Vec<Position>, CompressionParameters)) -> Self {
        Self {
            positions,
            parameters,
        }
    }
}

/// Decodes an encoded string.
///
/// With [`Format::Flexible`] the parameters come from the header and
/// `fallback_precision` is ignored. With [`Format::Polyline`] there is no header:
/// the data is 2D at `fallback_precision`.
///
/// # Example
/// ```
/// use polycodec_rs::{Format, ThirdDimension, decode};
///
/// # fn main() -> Result<(), polycodec_rs::PolylineError> {
/// let (positions, params) = decode("BFoz5xJ67i1B1B7PzIhaxL7Y", Format::Flexible, 0)?;
/// assert_eq!(positions.len(), 4);
/// assert_eq!(params.precision, 5);
/// assert_eq!(params.third_dimension, ThirdDimension::Absent);
/// # Ok(())
/// # }
/// ```
pub fn decode(
    encoded: &str,
    format: Format,
    fallback_precision: u8,
) -> Result<(Vec<Position>, CompressionParameters), PolylineError> {
    if encoded.is_empty() {
        return Err(PolylineError::EmptyInput);
    }
    let (params, mut index) = if format.has_header() {
        let (header, next) = Header::read(encoded)?;
        (CompressionParameters::from(header), next)
    } else {
        (CompressionParameters::new(fallback_precision), 0)
    };

    let factor = precision_factor(params.precision)?;
    let third_factor = precision_factor(params.third_dimension_precision)?;
    let table = format.decoding_table();
    let has_third = params.third_dimension.is_present();

    let mut positions = Vec::with_capacity(encoded.len() / 4);
    let mut lat = 0i64;
    let mut lng = 0i64;
    let mut third = 0i64;

    while index < encoded.len() {
        let (delta, next) = decode_signed(encoded, index, table)?;
        lat = accumulate(lat, delta)?;
        let lat_value = lat as f64 / factor;
        check_latitude(lat_value)?;

        let (delta, next) = next_delta(encoded, next, table)?;
        lng = accumulate(lng, delta)?;
        index = next;
        let lng_value = lng as f64 / factor;
        check_longitude(lng_value)?;

        let z = if has_third {
            let (delta, next) = next_delta(encoded, index, table)?;
            third = accumulate(third, delta)?;
            index = next;
            Some(third as f64 / third_factor)
        } else {
            None
        };

        positions.push(Position {
            lng: lng_value,
            lat: lat_value,
            z,
        });
    }

    trace!(
        "decoded {} coordinates from {} characters as {:?}",
        positions.len(),
        encoded.len(),
        format
    );
    Ok((positions, params))
}

/// Decodes a Flexible Polyline string.
pub fn decode_flexible(encoded: &str) -> Result<DecodedPolyline, PolylineError> {
    decode(encoded, Format::Flexible, 0).map(DecodedPolyline::from)
}

/// Decodes a fixed-precision Encoded Polyline string.
///
/// # Example
/// ```
/// use polycodec_rs::decode_polyline;
///
/// # fn main() -> Result<(), polycodec_rs::PolylineError> {
/// let decoded = decode_polyline("_p~iF~ps|U_ulLnnqC_mqNvxq`@", 5)?;
/// assert_eq!(decoded.to_vecs()[0], vec![-120.2, 38.5]);
/// # Ok(())
/// # }
/// ```
pub fn decode_polyline(encoded: &str, precision: u8) -> Result<DecodedPolyline, PolylineError> {
    decode(encoded, Format::Polyline, precision).map(DecodedPolyline::from)
}

/// Reads only the header of a Flexible Polyline string and returns its third dimension.
pub fn get_third_dimension(encoded: &str) -> Result<ThirdDimension, PolylineError> {
    if encoded.is_empty() {
        return Err(PolylineError::EmptyInput);
    }
    let (header, _) = Header::read(encoded)?;
    Ok(header.third_dimension)
}

fn next_delta(
    encoded: &str,
    index: usize,
    table: &[i8; 128],
) -> Result<(i64, usize), PolylineError> {
    if index >= encoded.len() {
        return Err(PolylineError::MissingCoordinateDimension);
    }
    decode_signed(encoded, index, table)
}

fn accumulate(total: i64, delta: i64) -> Result<i64, PolylineError> {
    total.checked_add(delta).ok_or(PolylineError::IntegerOverflow)
}
