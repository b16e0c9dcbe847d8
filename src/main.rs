use pagebuilder::{BuildError, PipelineBuilder};
use serde_json::Value;
use std::env;
use std::fs;

/// Lays out a data file with a map and prints the resulting draw operations.
fn main() -> Result<(), BuildError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if !(3..=4).contains(&args.len()) {
        eprintln!("Lays out JSON data with an XML page map and prints the draw operations.");
        eprintln!();
        eprintln!(
            "Usage: {} <path/to/map.xml> <path/to/data.json> [path/to/config.json]",
            args[0]
        );
        eprintln!();
        eprintln!("A top-level JSON array is laid out one record per part.");
        std::process::exit(1);
    }

    let map_path = &args[1];
    let data_path = &args[2];

    log::info!("Loading map from {}", map_path);
    let mut builder = PipelineBuilder::new().with_map_file(map_path)?;
    if let Some(config_path) = args.get(3) {
        log::info!("Loading configuration from {}", config_path);
        builder = builder.with_config_file(config_path)?;
    }
    let pipeline = builder.build()?;

    log::info!("Loading data from {}", data_path);
    let data: Value = serde_json::from_str(&fs::read_to_string(data_path)?)?;
    let records = match data {
        Value::Array(records) => records,
        record => vec![record],
    };

    let ops = pipeline.generate_ops(&records)?;
    println!("{}", serde_json::to_string_pretty(&ops)?);
    Ok(())
}
