use crate::codec::{Algorithm, PolylineCodec};
use crate::coord::Position;
use crate::error::PolylineError;
use crate::geom::parse_path;
use csv::StringRecord;
use log::debug;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

enum SourceIndices {
    Geometry(usize),
    Coordinates {
        track_idx: usize,
        x_idx: usize,
        y_idx: usize,
        z_idx: Option<usize>,
    },
}

#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing a WKT or GeoJSON Point, MultiPoint or LineString
    GeometryColumn(String),
    /// One vertex per row; consecutive rows sharing a track value form one path
    CoordinateColumns {
        track_column: String,
        x_column: String,
        y_column: String,
        z_column: Option<String>,
    },
}

#[derive(Debug, Clone)]
pub struct CsvPolylineConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    pub algorithm: Algorithm,
    pub output_column: String,
}

impl CsvPolylineConfig {
    /// Create config for a CSV with a geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use polycodec_rs::CsvPolylineConfig;
    ///
    /// let config = CsvPolylineConfig::new("geometry");
    /// ```
    pub fn new(geometry_column: impl Into<String>) -> Self {
        Self::with_source(CoordinateSource::GeometryColumn(geometry_column.into()))
    }

    /// Create config for a CSV of track vertices in separate X/Y columns.
    ///
    /// # Example
    /// ```
    /// use polycodec_rs::{Algorithm, CsvPolylineConfig};
    ///
    /// let config = CsvPolylineConfig::from_coords("track_id", "Longitude", "Latitude")
    ///     .algorithm(Algorithm::Polyline5);
    /// ```
    pub fn from_coords(
        track_column: impl Into<String>,
        x_column: impl Into<String>,
        y_column: impl Into<String>,
    ) -> Self {
        Self::with_source(CoordinateSource::CoordinateColumns {
            track_column: track_column.into(),
            x_column: x_column.into(),
            y_column: y_column.into(),
            z_column: None,
        })
    }

    fn with_source(source: CoordinateSource) -> Self {
        Self {
            source,
            exclude_columns: Vec::new(),
            algorithm: Algorithm::default(),
            output_column: "polyline".to_string(),
        }
    }

    /// Read a third value per vertex from `z_column`. Only meaningful for
    /// coordinate columns with a flexible algorithm carrying a third dimension.
    pub fn z_column(mut self, column: impl Into<String>) -> Self {
        if let CoordinateSource::CoordinateColumns { z_column, .. } = &mut self.source {
            *z_column = Some(column.into());
        }
        self
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn output_column(mut self, name: impl Into<String>) -> Self {
        self.output_column = name.into();
        self
    }
}

pub trait CsvToPolyline {
    fn to_polyline_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvPolylineConfig,
    ) -> Result<(), PolylineError>;
}

impl<P: AsRef<Path>> CsvToPolyline for P {
    fn to_polyline_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvPolylineConfig,
    ) -> Result<(), PolylineError> {
        csv_to_polyline_csv(self, output_path, config)
    }
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize, PolylineError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| PolylineError::CsvError(format!("Column '{}' not found", name)))
}

fn parse_field(record: &StringRecord, idx: usize) -> Result<f64, PolylineError> {
    let field = record
        .get(idx)
        .ok_or_else(|| PolylineError::CsvError(format!("Missing column at index {}", idx)))?
        .trim();
    field
        .parse()
        .map_err(|_| PolylineError::CsvError(format!("Invalid coordinate: '{}'", field)))
}

fn kept_fields(record: &StringRecord, exclude: &HashSet<usize>) -> Vec<String> {
    record
        .iter()
        .enumerate()
        .filter(|(i, _)| !exclude.contains(i))
        .map(|(_, field)| field.to_string())
        .collect()
}

/// Converts a CSV file with geometry or track coordinate columns to a CSV
/// file with an encoded polyline column.
///
/// With a geometry column every row becomes one output row. With coordinate
/// columns every run of consecutive rows sharing a track value becomes one
/// output row, carrying a `point_count` column and the remaining fields of
/// the track's first row.
///
/// # Example
///
/// ```no_run
/// use polycodec_rs::{Algorithm, CsvPolylineConfig, csv_to_polyline_csv};
///
/// let config = CsvPolylineConfig::new("geometry")
///     .exclude(vec!["notes".into()])
///     .algorithm(Algorithm::Polyline6);
///
/// csv_to_polyline_csv("routes.csv", "encoded.csv", &config).unwrap();
/// ```
pub fn csv_to_polyline_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvPolylineConfig,
) -> Result<(), PolylineError> {
    let file = File::open(csv_path).map_err(|e| PolylineError::IoError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| PolylineError::CsvError(e.to_string()))?
        .clone();

    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            let idx = column_index(&headers, col)?;
            (SourceIndices::Geometry(idx), HashSet::from([idx]))
        }
        CoordinateSource::CoordinateColumns {
            track_column,
            x_column,
            y_column,
            z_column,
        } => {
            let track_idx = column_index(&headers, track_column)?;
            let x_idx = column_index(&headers, x_column)?;
            let y_idx = column_index(&headers, y_column)?;
            let z_idx = z_column
                .as_deref()
                .map(|z| column_index(&headers, z))
                .transpose()?;
            let mut exclude = HashSet::from([x_idx, y_idx]);
            exclude.extend(z_idx);
            (
                SourceIndices::Coordinates {
                    track_idx,
                    x_idx,
                    y_idx,
                    z_idx,
                },
                exclude,
            )
        }
    };

    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let out_file = File::create(output_path).map_err(|e| PolylineError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<String> = vec![config.output_column.clone()];
    if matches!(source_indices, SourceIndices::Coordinates { .. }) {
        header_row.push("point_count".to_string());
    }
    header_row.extend(kept_fields(&headers, &exclude_indices));
    writer
        .write_record(&header_row)
        .map_err(|e| PolylineError::CsvError(e.to_string()))?;

    let mut rows_written = 0usize;
    match source_indices {
        SourceIndices::Geometry(idx) => {
            for result in reader.records() {
                let record = result.map_err(|e| PolylineError::CsvError(e.to_string()))?;
                let geom_str = record.get(idx).ok_or_else(|| {
                    PolylineError::CsvError(format!("Missing geometry column at index {}", idx))
                })?;
                let positions = parse_path(geom_str)?;
                let encoded = config.algorithm.encode(positions.as_slice())?;

                let mut row = vec![encoded];
                row.extend(kept_fields(&record, &exclude_indices));
                writer
                    .write_record(&row)
                    .map_err(|e| PolylineError::CsvError(e.to_string()))?;
                rows_written += 1;
            }
        }
        SourceIndices::Coordinates {
            track_idx,
            x_idx,
            y_idx,
            z_idx,
        } => {
            let mut current: Option<(String, StringRecord)> = None;
            let mut positions: Vec<Position> = Vec::new();

            for result in reader.records() {
                let record = result.map_err(|e| PolylineError::CsvError(e.to_string()))?;
                let track = record.get(track_idx).unwrap_or_default().to_string();

                let starts_new_track = current.as_ref().is_none_or(|(id, _)| *id != track);
                if starts_new_track {
                    if let Some((_, first)) = current.take() {
                        write_track(&mut writer, config, &positions, &first, &exclude_indices)?;
                        rows_written += 1;
                    }
                    positions.clear();
                    current = Some((track, record.clone()));
                }

                let x = parse_field(&record, x_idx)?;
                let y = parse_field(&record, y_idx)?;
                let position = match z_idx {
                    Some(z_idx) => Position::with_z(x, y, parse_field(&record, z_idx)?),
                    None => Position::new(x, y),
                };
                positions.push(position);
            }

            if let Some((_, first)) = current {
                write_track(&mut writer, config, &positions, &first, &exclude_indices)?;
                rows_written += 1;
            }
        }
    }

    writer
        .flush()
        .map_err(|e| PolylineError::CsvError(e.to_string()))?;
    debug!(
        "wrote {} encoded rows with {:?}",
        rows_written, config.algorithm
    );

    Ok(())
}

fn write_track(
    writer: &mut csv::Writer<File>,
    config: &CsvPolylineConfig,
    positions: &[Position],
    first: &StringRecord,
    exclude: &HashSet<usize>,
) -> Result<(), PolylineError> {
    let encoded = config.algorithm.encode(positions)?;
    let mut row = vec![encoded, positions.len().to_string()];
    row.extend(kept_fields(first, exclude));
    writer
        .write_record(&row)
        .map_err(|e| PolylineError::CsvError(e.to_string()))
}
