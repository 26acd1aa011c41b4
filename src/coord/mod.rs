use crate::core::constants::{MAX_LATITUDE, MAX_LONGITUDE};
use crate::error::PolylineError;
use geo_types::{Coord, Point};
use serde::{Deserialize, Serialize};

/// Trait for types that can provide a longitude/latitude coordinate with an
/// optional third value.
///
/// Implemented for 2- and 3-tuples, arrays, `Vec<f64>`, slices,
/// `geo_types::Point<f64>`, `geo_types::Coord<f64>` and [`Position`].
/// Values are always read in `[longitude, latitude, third]` order.
pub trait Coordinate {
    /// Number of values in this coordinate (2 or 3 when valid).
    fn dimensions(&self) -> usize;
    /// Returns the value at `index`, NaN when out of range.
    fn value(&self, index: usize) -> f64;

    fn lng(&self) -> f64 {
        self.value(0)
    }

    fn lat(&self) -> f64 {
        self.value(1)
    }

    fn third(&self) -> Option<f64> {
        (self.dimensions() == 3).then(|| self.value(2))
    }
}

impl Coordinate for (f64, f64) {
    fn dimensions(&self) -> usize {
        2
    }
    fn value(&self, index: usize) -> f64 {
        match index {
            0 => self.0,
            1 => self.1,
            _ => f64::NAN,
        }
    }
}

impl Coordinate for (f64, f64, f64) {
    fn dimensions(&self) -> usize {
        3
    }
    fn value(&self, index: usize) -> f64 {
        match index {
            0 => self.0,
            1 => self.1,
            2 => self.2,
            _ => f64::NAN,
        }
    }
}

impl Coordinate for [f64] {
    fn dimensions(&self) -> usize {
        self.len()
    }
    fn value(&self, index: usize) -> f64 {
        self.get(index).copied().unwrap_or(f64::NAN)
    }
}

impl<const N: usize> Coordinate for [f64; N] {
    fn dimensions(&self) -> usize {
        N
    }
    fn value(&self, index: usize) -> f64 {
        self.as_slice().value(index)
    }
}

impl Coordinate for Vec<f64> {
    fn dimensions(&self) -> usize {
        self.len()
    }
    fn value(&self, index: usize) -> f64 {
        self.as_slice().value(index)
    }
}

impl<C: Coordinate + ?Sized> Coordinate for &C {
    fn dimensions(&self) -> usize {
        (**self).dimensions()
    }
    fn value(&self, index: usize) -> f64 {
        (**self).value(index)
    }
}

impl Coordinate for Point<f64> {
    fn dimensions(&self) -> usize {
        2
    }
    fn value(&self, index: usize) -> f64 {
        (self.x(), self.y()).value(index)
    }
}

impl Coordinate for Coord<f64> {
    fn dimensions(&self) -> usize {
        2
    }
    fn value(&self, index: usize) -> f64 {
        (self.x, self.y).value(index)
    }
}

/// A decoded coordinate: longitude, latitude and the optional third value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lng: f64,
    pub lat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Position {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat, z: None }
    }

    pub fn with_z(lng: f64, lat: f64, z: f64) -> Self {
        Self { lng, lat, z: Some(z) }
    }

    /// Returns the values as `[lng, lat]` or `[lng, lat, z]`.
    pub fn to_vec(&self) -> Vec<f64> {
        match self.z {
            Some(z) => vec![self.lng, self.lat, z],
            None => vec![self.lng, self.lat],
        }
    }
}

impl Coordinate for Position {
    fn dimensions(&self) -> usize {
        if self.z.is_some() { 3 } else { 2 }
    }
    fn value(&self, index: usize) -> f64 {
        match (index, self.z) {
            (0, _) => self.lng,
            (1, _) => self.lat,
            (2, Some(z)) => z,
            _ => f64::NAN,
        }
    }
}

impl From<Position> for Coord<f64> {
    fn from(position: Position) -> Self {
        Coord {
            x: position.lng,
            y: position.lat,
        }
    }
}

impl From<Position> for Point<f64> {
    fn from(position: Position) -> Self {
        Point::new(position.lng, position.lat)
    }
}

/// Checks that a longitude lies within ±180.
pub fn check_longitude(lng: f64) -> Result<(), PolylineError> {
    // NaN fails the comparison as well
    if !(lng.abs() <= MAX_LONGITUDE) {
        return Err(PolylineError::InvalidCoordinateValue(format!(
            "longitude {} outside ±{}",
            lng, MAX_LONGITUDE
        )));
    }
    Ok(())
}

/// Checks that a latitude lies within ±90.
pub fn check_latitude(lat: f64) -> Result<(), PolylineError> {
    if !(lat.abs() <= MAX_LATITUDE) {
        return Err(PolylineError::InvalidCoordinateValue(format!(
            "latitude {} outside ±{}",
            lat, MAX_LATITUDE
        )));
    }
    Ok(())
}

/// Checks that a third dimension value is finite.
pub fn check_third(value: f64) -> Result<(), PolylineError> {
    if !value.is_finite() {
        return Err(PolylineError::InvalidCoordinateValue(format!(
            "third dimension {} is not finite",
            value
        )));
    }
    Ok(())
}
