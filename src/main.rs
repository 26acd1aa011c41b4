use polycodec_rs::{Algorithm, CompressionParameters, PolylineCodec, PolylineError};
use std::process::ExitCode;

const USAGE: &str = "usage: polycodec <encode|decode> <flexible|polyline5|polyline6> <input>\n\
    \n\
    encode: <input> is a JSON array of [lng, lat] or [lng, lat, z] arrays\n\
    decode: <input> is an encoded string";

fn parse_algorithm(name: &str) -> Result<Algorithm, PolylineError> {
    match name {
        "flexible" => Ok(Algorithm::Flexible(CompressionParameters::default())),
        "polyline5" => Ok(Algorithm::Polyline5),
        "polyline6" => Ok(Algorithm::Polyline6),
        // Anything else is treated as a JSON algorithm description
        other => Algorithm::from_json(other),
    }
}

fn run(command: &str, algorithm: &str, input: &str) -> Result<String, PolylineError> {
    let algorithm = parse_algorithm(algorithm)?;
    match command {
        "encode" => {
            let coordinates: Vec<Vec<f64>> = serde_json::from_str(input)
                .map_err(|e| PolylineError::ConfigError(e.to_string()))?;
            algorithm.encode(&coordinates)
        }
        "decode" => {
            let decoded = algorithm.decode(input)?;
            serde_json::to_string(&decoded.to_vecs())
                .map_err(|e| PolylineError::ConfigError(e.to_string()))
        }
        other => Err(PolylineError::ConfigError(format!(
            "unknown command '{}'",
            other
        ))),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [command, algorithm, input] = args.as_slice() else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };

    match run(command, algorithm, input) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
