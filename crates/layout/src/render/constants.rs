use super::{ElementRenderer, RenderContext, RenderOutcome};
use crate::LayoutError;
use crate::constants::ConstantElementDictionary;
use pagebuilder_markup::MarkupNode;
use pagebuilder_markup::text::clean_content;
use serde_json::Value;

const VALUE: &str = "Value";

/// `Constants`: each child `<Name>value</Name>` (or `<Name Value="..."/>`)
/// defines a constant.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantsRenderer;

impl ConstantsRenderer {
    fn entries(node: &MarkupNode) -> Vec<(String, String)> {
        node.children()
            .iter()
            .map(|child| {
                let value = match child.attr(VALUE) {
                    Some(v) => v.to_string(),
                    None => clean_content(child.text(), true),
                };
                (child.name().to_string(), value)
            })
            .collect()
    }
}

impl ElementRenderer for ConstantsRenderer {
    fn render(
        &self,
        node: &MarkupNode,
        _data: &Value,
        _ctx: &RenderContext<'_>,
    ) -> Result<RenderOutcome, LayoutError> {
        Ok(RenderOutcome {
            constants: Self::entries(node),
            ..RenderOutcome::empty()
        })
    }

    fn load(&self, node: &MarkupNode, constants: &mut ConstantElementDictionary) -> Vec<String> {
        Self::entries(node)
            .into_iter()
            .map(|(name, value)| {
                constants.insert(name.clone(), value);
                name
            })
            .collect()
    }
}
