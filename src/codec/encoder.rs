use crate::codec::format::Format;
use crate::coord::{Coordinate, check_latitude, check_longitude, check_third};
use crate::core::constants::MAX_SCALED_MAGNITUDE;
use crate::core::header::ThirdDimension;
use crate::core::varint::{encode_signed, precision_factor, scale};
use crate::error::PolylineError;
use crate::params::CompressionParameters;
use log::trace;

/// Encodes coordinates in the Flexible Polyline format.
///
/// This is the positional form of [`encode_flexible`].
///
/// # Example
/// ```
/// use polycodec_rs::{ThirdDimension, encode};
///
/// # fn main() -> Result<(), polycodec_rs::PolylineError> {
/// let encoded = encode(&[(5.0, 0.0), (10.0, 5.0)], 6, ThirdDimension::Absent, 0)?;
/// assert!(encoded.starts_with("BG"));
/// # Ok(())
/// # }
/// ```
pub fn encode<C: Coordinate>(
    coordinates: &[C],
    precision: u8,
    third_dimension: ThirdDimension,
    third_dimension_precision: u8,
) -> Result<String, PolylineError> {
    let params = CompressionParameters::new(precision)
        .third_dimension(third_dimension, third_dimension_precision);
    encode_flexible(coordinates, &params)
}

/// Encodes coordinates in the Flexible Polyline format with a header
/// describing `params`.
///
/// 3D coordinates require a third dimension in `params`, 2D coordinates
/// require none.
pub fn encode_flexible<C: Coordinate>(
    coordinates: &[C],
    params: &CompressionParameters,
) -> Result<String, PolylineError> {
    encode_with(coordinates, Format::Flexible, params)
}

/// Encodes 2D coordinates in the fixed-precision Encoded Polyline format.
///
/// # Example
/// ```
/// use polycodec_rs::encode_polyline;
///
/// # fn main() -> Result<(), polycodec_rs::PolylineError> {
/// let path = [(-120.2, 38.5), (-120.95, 40.7), (-126.453, 43.252)];
/// assert_eq!(encode_polyline(&path, 5)?, "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
/// # Ok(())
/// # }
/// ```
pub fn encode_polyline<C: Coordinate>(
    coordinates: &[C],
    precision: u8,
) -> Result<String, PolylineError> {
    encode_with(coordinates, Format::Polyline, &CompressionParameters::new(precision))
}

pub(crate) fn encode_with<C: Coordinate>(
    coordinates: &[C],
    format: Format,
    params: &CompressionParameters,
) -> Result<String, PolylineError> {
    let Some(first) = coordinates.first() else {
        return Ok(String::new());
    };

    let dimensions = first.dimensions();
    check_dimensions(dimensions, format, params)?;

    let factor = precision_factor(params.precision)?;
    let third_factor = precision_factor(params.third_dimension_precision)?;
    let alphabet = format.alphabet();

    let mut out = String::with_capacity(4 + coordinates.len() * dimensions * 4);
    if format.has_header() {
        params.header().write(&mut out);
    }

    let mut last_lat = 0i64;
    let mut last_lng = 0i64;
    let mut last_third = 0i64;

    for coordinate in coordinates {
        if coordinate.dimensions() != dimensions {
            return Err(PolylineError::InconsistentCoordinateDimensions(format!(
                "expected {} values per coordinate, found {}",
                dimensions,
                coordinate.dimensions()
            )));
        }

        let (lng, lat) = (coordinate.lng(), coordinate.lat());
        check_longitude(lng)?;
        check_latitude(lat)?;

        let lat = scale(lat, factor);
        let lng = scale(lng, factor);
        encode_signed(lat - last_lat, alphabet, &mut out);
        encode_signed(lng - last_lng, alphabet, &mut out);
        last_lat = lat;
        last_lng = lng;

        if let Some(third) = coordinate.third() {
            let third = scale_third(third, third_factor)?;
            encode_signed(third - last_third, alphabet, &mut out);
            last_third = third;
        }
    }

    trace!(
        "encoded {} coordinates as {:?} into {} characters",
        coordinates.len(),
        format,
        out.len()
    );
    Ok(out)
}

fn check_dimensions(
    dimensions: usize,
    format: Format,
    params: &CompressionParameters,
) -> Result<(), PolylineError> {
    if dimensions != 2 && dimensions != 3 {
        return Err(PolylineError::InconsistentCoordinateDimensions(format!(
            "coordinates must have 2 or 3 values, found {}",
            dimensions
        )));
    }
    match format {
        Format::Polyline if dimensions == 3 => Err(
            PolylineError::InconsistentCoordinateDimensions(
                "the fixed-precision format only supports 2D coordinates".to_string(),
            ),
        ),
        Format::Flexible if dimensions != params.dimensions() => Err(
            PolylineError::InconsistentCoordinateDimensions(format!(
                "third dimension {:?} expects {} values per coordinate, found {}",
                params.third_dimension,
                params.dimensions(),
                dimensions
            )),
        ),
        _ => Ok(()),
    }
}

fn scale_third(value: f64, factor: f64) -> Result<i64, PolylineError> {
    check_third(value)?;
    let scaled = value * factor;
    if scaled.abs() >= MAX_SCALED_MAGNITUDE {
        return Err(PolylineError::IntegerOverflow);
    }
    Ok(scale(value, factor))
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE_PATH: [(f64, f64); 3] = [(-120.2, 38.5), (-120.95, 40.7), (-126.453, 43.252)];

    const FRANKFURT: [(f64, f64); 4] = [
        (8.6982122, 50.1022829),
        (8.6956695, 50.1020076),
        (8.6914960, 50.1006313),
        (8.6875156, 50.0987800),
    ];

    #[test]
    fn test_polyline5_reference_vector() -> Result<(), PolylineError> {
        assert_eq!(
            encode_polyline(&REFERENCE_PATH, 5)?,
            "_p~iF~ps|U_ulLnnqC_mqNvxq`@"
        );
        Ok(())
    }

    #[test]
    fn test_polyline6_reference_path() -> Result<(), PolylineError> {
        assert_eq!(
            encode_polyline(&REFERENCE_PATH, 6)?,
            "_izlhA~rlgdF_{geC~ywl@_kwzCn`{nI"
        );
        Ok(())
    }

    #[test]
    fn test_flexible_reference_vector() -> Result<(), PolylineError> {
        let encoded = encode_flexible(&FRANKFURT, &CompressionParameters::new(5))?;
        assert_eq!(encoded, "BFoz5xJ67i1B1B7PzIhaxL7Y");
        Ok(())
    }

    #[test]
    fn test_flexible_3d() -> Result<(), PolylineError> {
        let path: Vec<[f64; 3]> = FRANKFURT
            .iter()
            .zip([10.5, 11.25, 12.0, -3.0])
            .map(|(&(lng, lat), z)| [lng, lat, z])
            .collect();
        let params = CompressionParameters::new(5).third_dimension(ThirdDimension::Elevation, 2);
        assert_eq!(
            encode_flexible(&path, &params)?,
            "B1Joz5xJ67i1B0hC1B7P2EzIha2ExL7Y39C"
        );

        let constant: Vec<(f64, f64, f64)> =
            FRANKFURT.iter().map(|&(lng, lat)| (lng, lat, 10.0)).collect();
        let encoded = encode(&constant, 5, ThirdDimension::Altitude, 0)?;
        assert_eq!(encoded, "BlBoz5xJ67i1BU1B7PAzIhaAxL7YA");
        Ok(())
    }

    #[test]
    fn test_default_parameters_header() -> Result<(), PolylineError> {
        let encoded = encode_flexible(&[(5.0, 0.0), (10.0, 5.0), (10.0, 10.0)], &Default::default())?;
        assert_eq!(encoded, "BGAg0lxJg0lxJg0lxJg0lxJA");
        Ok(())
    }

    #[test]
    fn test_empty_input() -> Result<(), PolylineError> {
        let empty: [(f64, f64); 0] = [];
        assert_eq!(encode_polyline(&empty, 5)?, "");
        assert_eq!(encode_flexible(&empty, &CompressionParameters::default())?, "");
        // Nothing is validated for an empty sequence
        assert_eq!(encode(&empty, 99, ThirdDimension::Absent, 0)?, "");
        Ok(())
    }

    #[test]
    fn test_boundary_values() -> Result<(), PolylineError> {
        let corners = [(180.0, 90.0), (-180.0, -90.0)];
        assert_eq!(encode_polyline(&corners, 5)?, "_cidP_gsia@~fsia@~ngtcA");
        assert_eq!(
            encode_flexible(&corners, &CompressionParameters::default())?,
            "BGgol1rFgwqq3K_vqq3K__00uV"
        );
        Ok(())
    }

    #[test]
    fn test_out_of_range_values() {
        let params = CompressionParameters::default();
        for path in [[(180.0001, 0.0)], [(0.0, 90.0001)], [(-180.5, 0.0)], [(f64::NAN, 0.0)]] {
            assert!(matches!(
                encode_flexible(&path, &params),
                Err(PolylineError::InvalidCoordinateValue(_))
            ));
            assert!(matches!(
                encode_polyline(&path, 5),
                Err(PolylineError::InvalidCoordinateValue(_))
            ));
        }
    }

    #[test]
    fn test_mixed_dimensions() {
        let path = [vec![5.0, 5.0], vec![10.0, 10.0, 10.0]];
        assert!(matches!(
            encode_polyline(&path, 5),
            Err(PolylineError::InconsistentCoordinateDimensions(_))
        ));
        assert!(matches!(
            encode_flexible(&path, &CompressionParameters::default()),
            Err(PolylineError::InconsistentCoordinateDimensions(_))
        ));
        let params = CompressionParameters::default().third_dimension(ThirdDimension::Level, 0);
        let path = [vec![5.0, 5.0, 1.0], vec![10.0, 10.0]];
        assert!(matches!(
            encode_flexible(&path, &params),
            Err(PolylineError::InconsistentCoordinateDimensions(_))
        ));
    }

    #[test]
    fn test_unsupported_dimension_counts() {
        let path = [vec![5.0, 5.0, 1.0, 2.0]];
        assert!(matches!(
            encode_flexible(&path, &CompressionParameters::default()),
            Err(PolylineError::InconsistentCoordinateDimensions(_))
        ));
        let path = [vec![5.0]];
        assert!(matches!(
            encode_polyline(&path, 5),
            Err(PolylineError::InconsistentCoordinateDimensions(_))
        ));
    }

    #[test]
    fn test_3d_rejected_by_fixed_precision() {
        let path = [(1.0, 2.0, 3.0)];
        assert!(matches!(
            encode_polyline(&path, 6),
            Err(PolylineError::InconsistentCoordinateDimensions(_))
        ));
    }

    #[test]
    fn test_third_dimension_without_3d_values() {
        let params = CompressionParameters::default().third_dimension(ThirdDimension::Altitude, 1);
        assert!(matches!(
            encode_flexible(&[(1.0, 2.0)], &params),
            Err(PolylineError::InconsistentCoordinateDimensions(_))
        ));
    }

    #[test]
    fn test_invalid_precision() {
        let path = [(1.0, 2.0)];
        assert_eq!(
            encode(&path, 16, ThirdDimension::Absent, 0),
            Err(PolylineError::InvalidPrecisionValue(16))
        );
        assert_eq!(
            encode(&[(1.0, 2.0, 3.0)], 5, ThirdDimension::Altitude, 16),
            Err(PolylineError::InvalidPrecisionValue(16))
        );
        assert_eq!(
            encode_polyline(&path, 200),
            Err(PolylineError::InvalidPrecisionValue(200))
        );
    }

    #[test]
    fn test_third_dimension_overflow() {
        let path = [(1.0, 2.0, 1e10)];
        assert_eq!(
            encode(&path, 5, ThirdDimension::Altitude, 15),
            Err(PolylineError::IntegerOverflow)
        );
        let path = [(1.0, 2.0, f64::INFINITY)];
        assert!(matches!(
            encode(&path, 5, ThirdDimension::Altitude, 0),
            Err(PolylineError::InvalidCoordinateValue(_))
        ));
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() -> Result<(), PolylineError> {
        // 2.5 -> 3 and -2.5 -> -3, not banker's rounding
        let encoded = encode(&[(1.5, 2.5), (-1.5, -2.5)], 0, ThirdDimension::Absent, 0)?;
        assert_eq!(encoded, "BAGELH");
        Ok(())
    }

    #[test]
    fn test_deterministic() -> Result<(), PolylineError> {
        let params = CompressionParameters::new(7);
        let first = encode_flexible(&FRANKFURT, &params)?;
        let second = encode_flexible(&FRANKFURT, &params)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_accepts_geo_types() -> Result<(), PolylineError> {
        let points: Vec<geo_types::Point<f64>> = REFERENCE_PATH
            .iter()
            .map(|&(x, y)| geo_types::Point::new(x, y))
            .collect();
        assert_eq!(encode_polyline(&points, 5)?, "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
        Ok(())
    }
}
