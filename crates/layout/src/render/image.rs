use super::{ElementRenderer, RenderContext, RenderOutcome};
use crate::LayoutError;
use crate::attributes::{HEIGHT, WIDTH};
use crate::items::PageItem;
use pagebuilder_markup::MarkupNode;
use pagebuilder_types::Rect;
use serde_json::Value;

const SOURCE: &str = "Source";

/// `Image`: looks up `Source` (or the image key bound through `Property`)
/// in the image provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageRenderer;

impl ImageRenderer {
    fn key(&self, node: &MarkupNode, data: &Value, ctx: &RenderContext<'_>) -> Option<String> {
        if let Some(source) = node.attr(SOURCE) {
            return Some(source.trim().to_string());
        }
        let path = ctx.styles.key_path(node)?;
        ctx.collaborators
            .fields
            .resolve(&path, data)
            .map(|value| value.to_string())
    }
}

impl ElementRenderer for ImageRenderer {
    fn render(
        &self,
        node: &MarkupNode,
        data: &Value,
        ctx: &RenderContext<'_>,
    ) -> Result<RenderOutcome, LayoutError> {
        let Some(key) = self.key(node, data, ctx) else {
            log::debug!("<{}> has no image source", node.name());
            return Ok(RenderOutcome::empty());
        };
        let image = match ctx.collaborators.images.image(&key, data) {
            Ok(image) => image,
            Err(e) => {
                log::debug!("<{}>: {}", node.name(), e);
                return Ok(RenderOutcome::empty());
            }
        };

        let origin = ctx.place(node);
        let intrinsic = image.size;
        let aspect = if intrinsic.width > 0.0 {
            intrinsic.height / intrinsic.width
        } else {
            0.0
        };
        let width = ctx.styles.geometry(node, WIDTH);
        let height = ctx.styles.geometry(node, HEIGHT);
        let (width, height) = match (width, height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, w * aspect),
            (None, Some(h)) if aspect > 0.0 => (h / aspect, h),
            (None, Some(h)) => (intrinsic.width, h),
            (None, None) => (intrinsic.width, intrinsic.height),
        };
        let rect = Rect::new(origin.x, origin.y, width, height);
        let item = PageItem::image(key, image, ctx.frame(node, rect));
        Ok(RenderOutcome::item(item, height))
    }
}
