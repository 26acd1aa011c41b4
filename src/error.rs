use thiserror::Error;

/// Error type for polycodec-rs operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolylineError {
    /// Decode was called with an empty string.
    #[error("Empty input")]
    EmptyInput,
    /// A character outside the format's alphabet.
    #[error("Invalid encoded character: {0:?}")]
    InvalidEncodedCharacter(char),
    /// The input ended while a continuation bit was still pending.
    #[error("Extra continue bit: encoded value is truncated")]
    ExtraContinueBit,
    /// The flexible header carries a version other than 1.
    #[error("Invalid header version: {0}")]
    InvalidHeaderVersion(u64),
    /// The input ended part way through a coordinate.
    #[error("Missing coordinate dimension")]
    MissingCoordinateDimension,
    /// Longitude outside ±180, latitude outside ±90 or a non-finite value.
    #[error("Invalid coordinate value: {0}")]
    InvalidCoordinateValue(String),
    /// Precision outside 0-15.
    #[error("Invalid precision value: {0}")]
    InvalidPrecisionValue(u8),
    /// Mixed 2D/3D input, an unsupported dimension count, or 3D for a 2D-only format.
    #[error("Inconsistent coordinate dimensions: {0}")]
    InconsistentCoordinateDimensions(String),
    /// A scaled value or varint does not fit in 64 bits.
    #[error("Integer overflow")]
    IntegerOverflow,
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(String),
    /// CSV parsing or writing error.
    #[error("CSV error: {0}")]
    CsvError(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    #[error("Geometry parse error: {0}")]
    GeometryParseError(String),
    /// Invalid serialized configuration.
    #[error("Config error: {0}")]
    ConfigError(String),
}
