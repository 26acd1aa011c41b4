use crate::coord::Position;
use crate::error::PolylineError;
use geo_types::{Coord, Geometry};
use geojson::{GeoJson, Value};
use std::str::FromStr;
use wkt::Wkt;

/// Parses a geometry cell into an ordered coordinate path.
///
/// A leading `{` selects GeoJSON, anything else is read as WKT. GeoJSON
/// positions keep their third ordinate; WKT paths are always 2D.
pub fn parse_path(s: &str) -> Result<Vec<Position>, PolylineError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        geojson_path(trimmed)
    } else {
        wkt_path(trimmed)
    }
}

/// Extracts the ordered coordinate path of a geometry.
///
/// Points, MultiPoints and LineStrings describe a single path; other
/// geometry types are rejected.
pub fn geometry_to_positions(geom: &Geometry<f64>) -> Result<Vec<Position>, PolylineError> {
    let from_coord = |c: &Coord<f64>| Position::new(c.x, c.y);
    match geom {
        Geometry::Point(pt) => Ok(vec![from_coord(&pt.0)]),
        Geometry::MultiPoint(mp) => Ok(mp.0.iter().map(|pt| from_coord(&pt.0)).collect()),
        Geometry::LineString(line) => Ok(line.0.iter().map(from_coord).collect()),
        Geometry::Line(line) => Ok(vec![from_coord(&line.start), from_coord(&line.end)]),
        _ => Err(not_a_path("this geometry")),
    }
}

fn geojson_path(s: &str) -> Result<Vec<Position>, PolylineError> {
    let geojson = GeoJson::from_str(s).map_err(geometry_error)?;
    let geometry = match geojson {
        GeoJson::Geometry(geometry) => geometry,
        GeoJson::Feature(feature) => feature.geometry.ok_or_else(|| {
            PolylineError::GeometryParseError("Feature has no geometry".to_string())
        })?,
        GeoJson::FeatureCollection(_) => return Err(not_a_path("FeatureCollection")),
    };

    match &geometry.value {
        Value::Point(point) => Ok(vec![position_from_slice(point)?]),
        Value::MultiPoint(points) | Value::LineString(points) => {
            points.iter().map(|p| position_from_slice(p)).collect()
        }
        other => Err(not_a_path(other.type_name())),
    }
}

fn wkt_path(s: &str) -> Result<Vec<Position>, PolylineError> {
    let wkt = Wkt::<f64>::from_str(s).map_err(geometry_error)?;
    let geometry: Geometry<f64> = wkt.try_into().map_err(geometry_error)?;
    geometry_to_positions(&geometry)
}

fn position_from_slice(values: &[f64]) -> Result<Position, PolylineError> {
    match *values {
        [lng, lat] => Ok(Position::new(lng, lat)),
        [lng, lat, z] => Ok(Position::with_z(lng, lat, z)),
        _ => Err(PolylineError::GeometryParseError(format!(
            "Position must have 2 or 3 values, got {}",
            values.len()
        ))),
    }
}

fn not_a_path(kind: &str) -> PolylineError {
    PolylineError::GeometryParseError(format!(
        "{} is not a path, expected Point, MultiPoint or LineString",
        kind
    ))
}

fn geometry_error(e: impl ToString) -> PolylineError {
    PolylineError::GeometryParseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geojson_linestring() -> Result<(), PolylineError> {
        let json = r#"{"type":"LineString","coordinates":[[-0.1,51.5],[-0.2,51.6]]}"#;
        assert_eq!(
            parse_path(json)?,
            vec![Position::new(-0.1, 51.5), Position::new(-0.2, 51.6)]
        );
        Ok(())
    }

    #[test]
    fn test_geojson_keeps_third_value() -> Result<(), PolylineError> {
        let json = r#"{"type":"LineString","coordinates":[[8.69821,50.10228,10],[8.69567,50.10201,20]]}"#;
        let path = parse_path(json)?;
        assert_eq!(path[0], Position::with_z(8.69821, 50.10228, 10.0));
        assert_eq!(path[1].z, Some(20.0));
        Ok(())
    }

    #[test]
    fn test_geojson_feature() -> Result<(), PolylineError> {
        let json = r#"{"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[-0.1,51.5]}}"#;
        assert_eq!(parse_path(json)?, vec![Position::new(-0.1, 51.5)]);
        Ok(())
    }

    #[test]
    fn test_geojson_non_path_rejected() {
        for json in [
            r#"{"type":"FeatureCollection","features":[]}"#,
            r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}"#,
            r#"{"type":"Feature","properties":{},"geometry":null}"#,
        ] {
            assert!(
                matches!(parse_path(json), Err(PolylineError::GeometryParseError(_))),
                "{}",
                json
            );
        }
    }

    #[test]
    fn test_wkt_linestring() -> Result<(), PolylineError> {
        let path = parse_path("LINESTRING(-0.1 51.5, -0.2 51.6, -0.3 51.7)")?;
        assert_eq!(path.len(), 3);
        assert_eq!(path[2], Position::new(-0.3, 51.7));
        Ok(())
    }

    #[test]
    fn test_wkt_point() -> Result<(), PolylineError> {
        assert_eq!(parse_path(" POINT(-0.1 51.5) ")?, vec![Position::new(-0.1, 51.5)]);
        Ok(())
    }

    #[test]
    fn test_wkt_polygon_rejected() {
        assert!(matches!(
            parse_path("POLYGON((0 0, 1 0, 1 1, 0 0))"),
            Err(PolylineError::GeometryParseError(_))
        ));
    }

    #[test]
    fn test_invalid_geometry_string() {
        assert!(parse_path("not a geometry").is_err());
        assert!(parse_path("{broken").is_err());
    }
}
