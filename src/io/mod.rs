pub mod csv;

pub use self::csv::{CoordinateSource, CsvPolylineConfig, CsvToPolyline, csv_to_polyline_csv};
