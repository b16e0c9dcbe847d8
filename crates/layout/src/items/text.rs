use super::ItemFrame;
use pagebuilder_traits::{ComposedText, DrawSurface, TextComposer, TextStyle};
use pagebuilder_types::{Rect, Size};

#[derive(Debug, Clone)]
pub struct TextItem {
    content: String,
    style: TextStyle,
    composed: Option<ComposedText>,
}

impl TextItem {
    pub fn new(content: impl Into<String>, style: TextStyle) -> Self {
        Self {
            content: content.into(),
            style,
            composed: None,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Present once the item has been laid out.
    pub fn composed(&self) -> Option<&ComposedText> {
        self.composed.as_ref()
    }

    pub(super) fn measure(&self, frame: &ItemFrame, composer: &dyn TextComposer) -> Size {
        let width = frame.content_rect().width;
        composer.compose(&self.content, &self.style, Some(width)).size
    }

    pub(super) fn layout(&mut self, frame: &ItemFrame, composer: &dyn TextComposer) -> Rect {
        let area = frame.content_rect();
        let composed = composer.compose(&self.content, &self.style, Some(area.width));
        let used = frame.align(area, composed.size);
        self.composed = Some(composed);
        used
    }

    pub(super) fn draw(&self, surface: &mut dyn DrawSurface, used: Rect, rotation: f32) {
        if let Some(composed) = &self.composed {
            surface.draw_text(&self.content, composed, &self.style, used, rotation);
        }
    }
}
