mod common;

use common::fixtures::{INVOICE_MAP, invoice};
use common::{TestResult, fixed_collaborators, page_count};
use pagebuilder::{BuildError, PipelineBuilder};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_map_and_config_from_files() -> TestResult {
    let dir = tempdir()?;
    let map_path = dir.path().join("invoice.xml");
    let config_path = dir.path().join("config.json");
    fs::write(&map_path, INVOICE_MAP)?;
    fs::write(&config_path, r#"{ "formats": { "currencySymbol": "£" } }"#)?;

    let pipeline = PipelineBuilder::new()
        .with_map_file(&map_path)?
        .with_config_file(&config_path)?
        .with_collaborators(fixed_collaborators(10.0))
        .build()?;
    assert_eq!(pipeline.map().name(), "Page");

    let ops = pipeline.generate_ops(&[invoice("Grace", 99.0)])?;
    let contents: Vec<String> = ops
        .iter()
        .filter_map(|op| match op {
            pagebuilder::DrawOp::Text { content, .. } => Some(content.clone()),
            _ => None,
        })
        .collect();
    assert!(contents.contains(&"£99.00".to_string()));
    assert_eq!(page_count(&ops), 1);
    Ok(())
}

#[test]
fn test_missing_files_are_io_errors() -> TestResult {
    let dir = tempdir()?;
    let missing = dir.path().join("nope.xml");
    assert!(matches!(
        PipelineBuilder::new().with_map_file(&missing),
        Err(BuildError::Io(_))
    ));
    assert!(matches!(
        PipelineBuilder::new().with_config_file(&missing),
        Err(BuildError::Io(_))
    ));
    Ok(())
}
