pub mod parse;

pub use parse::{geometry_to_positions, parse_path};
