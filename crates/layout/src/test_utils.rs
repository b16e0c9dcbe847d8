use crate::{LayoutConfig, PageBuilder, PageItem};
use pagebuilder_markup::MarkupNode;
use pagebuilder_traits::{Collaborators, FixedSizeTextComposer};
use pagebuilder_types::{MM_TO_PT, Size};
use std::sync::Arc;

/// A builder whose composer measures every non-empty text as 50pt x `height`.
pub fn fixed_height_builder(height: f32) -> PageBuilder {
    let collaborators = Collaborators::default().with_text_composer(Arc::new(
        FixedSizeTextComposer {
            size: Size::new(50.0, height),
        },
    ));
    PageBuilder::new(LayoutConfig::default(), collaborators)
}

/// Millimetres to points at unit scale.
pub fn mm(v: f32) -> f32 {
    v * MM_TO_PT * 1.0
}

pub fn text(content: &str) -> MarkupNode {
    MarkupNode::new("Text").with_text(content)
}

pub fn contents(items: &[PageItem]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.as_text().map(|t| t.content().to_string()))
        .collect()
}
