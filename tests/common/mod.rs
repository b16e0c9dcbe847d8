#![allow(dead_code)]

pub mod fixtures;

use pagebuilder::{Collaborators, DrawOp, PipelineBuilder, Rect, Size};
use pagebuilder_traits::FixedSizeTextComposer;
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Collaborators whose composer measures every non-empty text as 100pt x `height`.
pub fn fixed_collaborators(height: f32) -> Collaborators {
    Collaborators::default().with_text_composer(Arc::new(FixedSizeTextComposer {
        size: Size::new(100.0, height),
    }))
}

/// A pipeline builder for `map` with deterministic text measurement.
pub fn pipeline_for(map: &str, height: f32) -> Result<PipelineBuilder, pagebuilder::BuildError> {
    Ok(PipelineBuilder::new()
        .with_map_source(map)?
        .with_collaborators(fixed_collaborators(height)))
}

/// `(content, rect)` of every recorded text operation.
pub fn texts(ops: &[DrawOp]) -> Vec<(String, Rect)> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Text { content, rect, .. } => Some((content.clone(), *rect)),
            _ => None,
        })
        .collect()
}

pub fn page_count(ops: &[DrawOp]) -> usize {
    ops.iter()
        .filter(|op| matches!(op, DrawOp::BeginPage { .. }))
        .count()
}

pub fn mm(v: f32) -> f32 {
    v * pagebuilder::MM_TO_PT * 1.0
}
