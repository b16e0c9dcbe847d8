use super::{ElementRenderer, FlowSpec, RenderContext, RenderOutcome};
use crate::LayoutError;
use crate::attributes::{HEIGHT, WIDTH};
use pagebuilder_markup::MarkupNode;
use serde_json::Value;

/// `Container` and `StackPanel`: stacks children vertically and cascades the
/// style keys declared on the element.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowContainerRenderer;

impl ElementRenderer for FlowContainerRenderer {
    fn render(
        &self,
        node: &MarkupNode,
        _data: &Value,
        ctx: &RenderContext<'_>,
    ) -> Result<RenderOutcome, LayoutError> {
        let origin = ctx.place(node);
        let width = ctx
            .styles
            .geometry(node, WIDTH)
            .unwrap_or_else(|| ctx.available_width(origin.x));
        Ok(RenderOutcome {
            pushes: ctx.styles.declared(node),
            visit_children: true,
            flow: Some(FlowSpec {
                x: origin.x,
                top: origin.y,
                width,
                height: ctx.styles.geometry(node, HEIGHT),
            }),
            ..RenderOutcome::default()
        })
    }
}

/// `Group` and `Style`: cascades the declared style keys without placing anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleScopeRenderer;

impl ElementRenderer for StyleScopeRenderer {
    fn render(
        &self,
        node: &MarkupNode,
        _data: &Value,
        ctx: &RenderContext<'_>,
    ) -> Result<RenderOutcome, LayoutError> {
        Ok(RenderOutcome {
            pushes: ctx.styles.declared(node),
            ..RenderOutcome::pass_through()
        })
    }
}
