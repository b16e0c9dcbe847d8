mod common;

use common::fixtures::{INVOICE_MAP, LINE_MAP, invoice};
use common::{TestResult, mm, page_count, pipeline_for, texts};
use pagebuilder::{BuildError, PipelineBuilder, PipelineConfig};
use serde_json::json;

#[test]
fn test_invoice_header_stacks_lines() -> TestResult {
    let pipeline = pipeline_for(INVOICE_MAP, 12.0)?.build()?;
    let ops = pipeline.generate_ops(&[invoice("Ada Lovelace", 1234.5)])?;
    let lines = texts(&ops);

    let contents: Vec<&str> = lines.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(
        contents,
        vec!["Acme Trading", "Ada Lovelace", "$1,234.50", "05/03/2024"]
    );

    let step = 12.0 + mm(2.0) + 0.0;
    assert_eq!(lines[0].1.x, mm(10.0) + 0.0);
    assert_eq!(lines[0].1.y, mm(10.0) + 0.0);
    assert_eq!(lines[1].1.y, mm(10.0) + step);
    assert_eq!(lines[2].1.y, mm(10.0) + (step + step));
    assert_eq!(page_count(&ops), 1);
    Ok(())
}

#[test]
fn test_constant_style_fallback_reaches_text() -> TestResult {
    let pipeline = pipeline_for(INVOICE_MAP, 12.0)?.build()?;
    let document = pipeline.generate(&[invoice("Ada", 1.0)])?;
    let items = document.page(0).ok_or("no page")?.items();
    let first = items[0].as_text().ok_or("not text")?;
    assert_eq!(first.style().font_family, "Times");
    assert_eq!(first.style().font_size, mm(5.0));
    assert_eq!(items[1].as_text().ok_or("not text")?.style().font_size, 12.0);
    Ok(())
}

#[test]
fn test_records_share_pages_by_part() -> TestResult {
    let config: PipelineConfig = PipelineConfig::from_json(
        r#"{ "recordsPerPage": 2, "document": { "partHeight": 300 } }"#,
    )?;
    let pipeline = pipeline_for(LINE_MAP, 10.0)?.with_config(config).build()?;
    let records = vec![json!({"name": "a"}), json!({"name": "b"}), json!({"name": "c"})];

    let document = pipeline.generate(&records)?;
    assert_eq!(document.len(), 2);
    assert_eq!(document.page(0).ok_or("no page")?.items().len(), 2);

    let ops = pipeline.generate_ops(&records)?;
    let lines = texts(&ops);
    assert_eq!(page_count(&ops), 2);
    assert_eq!(lines[0].1.y, mm(5.0) + 0.0);
    assert_eq!(lines[1].1.y, mm(5.0) + 300.0);
    assert_eq!(lines[2].1.y, mm(5.0) + 0.0);
    Ok(())
}

#[test]
fn test_constants_map_is_loaded_per_page() -> TestResult {
    let constants = pagebuilder::xml::parse_map(
        r#"<Constants><Footer>Page footer</Footer></Constants>"#,
    )?;
    let pipeline = pipeline_for(r#"<Text Constant="Footer" Y="280" Height="5"/>"#, 10.0)?
        .with_constants_map(constants)
        .build()?;
    let ops = pipeline.generate_ops(&[json!({}), json!({})])?;
    let contents: Vec<String> = texts(&ops).into_iter().map(|(c, _)| c).collect();
    assert_eq!(contents, vec!["Page footer", "Page footer"]);
    assert_eq!(page_count(&ops), 2);
    Ok(())
}

#[test]
fn test_config_formats_and_scales() -> TestResult {
    let config = PipelineConfig::from_json(
        r#"{
            "scales": { "geometry": 2.0 },
            "formats": { "decimalPattern": "0.0", "currencySymbol": "EUR " },
            "highlightContainerRects": true
        }"#,
    )?;
    let map = r#"<Container Y="10"><Property Property="n"/><Property Property="n" Format="¤0"/></Container>"#;
    let pipeline = pipeline_for(map, 10.0)?.with_config(config).build()?;
    let ops = pipeline.generate_ops(&[json!({ "n": 2.25 })])?;
    let lines = texts(&ops);
    assert_eq!(lines[0].0, "2.3");
    assert_eq!(lines[1].0, "EUR 2");
    assert_eq!(lines[0].1.y, 10.0 * pagebuilder::MM_TO_PT * 2.0 + 0.0);
    let highlights = ops
        .iter()
        .filter(|op| matches!(op, pagebuilder::DrawOp::StrokeRect { .. }))
        .count();
    assert_eq!(highlights, 2);
    Ok(())
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let bad_pattern = PipelineConfig::from_json(r#"{ "formats": { "decimalPattern": "abc" } }"#)
        .and_then(|config| {
            PipelineBuilder::new()
                .with_map_source("<Text/>")?
                .with_config(config)
                .build()
        });
    assert!(matches!(bad_pattern, Err(BuildError::Format(_))));

    let zero_per_page = PipelineConfig::from_json(r#"{ "recordsPerPage": 0 }"#).and_then(|config| {
        PipelineBuilder::new()
            .with_map_source("<Text/>")?
            .with_config(config)
            .build()
    });
    assert!(matches!(zero_per_page, Err(BuildError::Config(_))));

    assert!(matches!(PipelineBuilder::new().build(), Err(BuildError::Config(_))));
    assert!(matches!(
        PipelineBuilder::new().with_map_source("<Text>"),
        Err(BuildError::Xml(_))
    ));
    assert!(matches!(
        PipelineConfig::from_json("{ not json"),
        Err(BuildError::Json(_))
    ));
}

#[test]
fn test_no_records_produces_no_pages() -> TestResult {
    let pipeline = pipeline_for(LINE_MAP, 10.0)?.build()?;
    assert!(pipeline.generate(&[])?.is_empty());
    assert!(pipeline.generate_ops(&[])?.is_empty());
    Ok(())
}
