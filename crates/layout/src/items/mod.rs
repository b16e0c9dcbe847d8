//! Positioned page content and its layout/draw protocol.
//!
//! Items are created with a container rect. The rect their content actually
//! occupies (`used_rect`) is computed lazily by [`PageItem::do_layout`], which
//! [`PageItem::draw`] runs first when the item still needs layout.

mod image;
mod text;

pub use self::image::ImageItem;
pub use self::text::TextItem;

use pagebuilder_style::{HorizontalAlignment, VerticalAlignment};
use pagebuilder_traits::{DrawSurface, ResolvedImage, TextComposer, TextStyle};
use pagebuilder_types::{Color, Rect, Size};

/// Stroke color of diagnostic container rects.
pub const HIGHLIGHT_COLOR: Color = Color::rgb(255, 0, 255);

#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub brush: Color,
    /// Points.
    pub thickness: f32,
}

/// Everything about an item except its content.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFrame {
    pub container_rect: Rect,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    /// Degrees.
    pub rotation: f32,
    pub background: Option<Color>,
    pub border: Option<Border>,
    /// Inset of the content rect inside the container rect, in points.
    pub padding: f32,
    pub highlight_container: bool,
}

impl ItemFrame {
    pub fn new(container_rect: Rect) -> Self {
        Self {
            container_rect,
            horizontal_alignment: HorizontalAlignment::Leading,
            vertical_alignment: VerticalAlignment::Top,
            rotation: 0.0,
            background: None,
            border: None,
            padding: 0.0,
            highlight_container: false,
        }
    }

    pub fn content_rect(&self) -> Rect {
        self.container_rect.inset(self.padding)
    }

    /// Places content of `size` inside `area` according to the alignments.
    /// `Fill` stretches the content to `area` on that axis.
    pub fn align(&self, area: Rect, size: Size) -> Rect {
        let width = match self.horizontal_alignment {
            HorizontalAlignment::Fill => area.width,
            _ => size.width,
        };
        let height = match self.vertical_alignment {
            VerticalAlignment::Fill => area.height,
            _ => size.height,
        };
        Rect::new(
            area.x + self.horizontal_alignment.offset(area.width, width),
            area.y + self.vertical_alignment.offset(area.height, height),
            width,
            height,
        )
    }
}

#[derive(Debug, Clone)]
pub enum ItemContent {
    Text(TextItem),
    Image(ImageItem),
}

#[derive(Debug, Clone)]
pub struct PageItem {
    frame: ItemFrame,
    needs_layout: bool,
    used_rect: Rect,
    content: ItemContent,
}

impl PageItem {
    pub fn text(content: impl Into<String>, style: TextStyle, frame: ItemFrame) -> Self {
        Self::with_content(frame, ItemContent::Text(TextItem::new(content, style)))
    }

    pub fn image(key: impl Into<String>, image: ResolvedImage, frame: ItemFrame) -> Self {
        Self::with_content(frame, ItemContent::Image(ImageItem::new(key, image)))
    }

    fn with_content(frame: ItemFrame, content: ItemContent) -> Self {
        Self {
            used_rect: frame.container_rect,
            frame,
            needs_layout: true,
            content,
        }
    }

    pub fn frame(&self) -> &ItemFrame {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut ItemFrame {
        self.needs_layout = true;
        &mut self.frame
    }

    pub fn container_rect(&self) -> Rect {
        self.frame.container_rect
    }

    pub fn used_rect(&self) -> Rect {
        self.used_rect
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    pub fn content(&self) -> &ItemContent {
        &self.content
    }

    pub fn as_text(&self) -> Option<&TextItem> {
        match &self.content {
            ItemContent::Text(t) => Some(t),
            ItemContent::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageItem> {
        match &self.content {
            ItemContent::Image(i) => Some(i),
            ItemContent::Text(_) => None,
        }
    }

    pub fn set_highlight_container(&mut self, highlight: bool) {
        self.frame.highlight_container = highlight;
    }

    /// Moves the item by `dy` points.
    pub fn offset_by(&mut self, dy: f32) {
        self.frame.container_rect = self.frame.container_rect.translate(0.0, dy);
        self.used_rect = self.used_rect.translate(0.0, dy);
    }

    /// Computes `used_rect` and clears the layout flag.
    pub fn do_layout(&mut self, composer: &dyn TextComposer) {
        self.used_rect = match &mut self.content {
            ItemContent::Text(text) => text.layout(&self.frame, composer),
            ItemContent::Image(image) => image.layout(&self.frame),
        };
        self.needs_layout = false;
        log::trace!("Laid out item in {:?}: used {:?}", self.frame.container_rect, self.used_rect);
    }

    /// Shrinks or grows the container height to the composed text height
    /// plus padding, then lays the item out. Returns the new height.
    ///
    /// Images already have a definite height; for them this only lays out.
    pub fn fit_height_to_content(&mut self, composer: &dyn TextComposer) -> f32 {
        if let ItemContent::Text(text) = &self.content {
            let content_height = text.measure(&self.frame, composer).height;
            self.frame.container_rect.height = content_height + 2.0 * self.frame.padding;
        }
        self.do_layout(composer);
        self.frame.container_rect.height
    }

    pub fn draw(&mut self, surface: &mut dyn DrawSurface, composer: &dyn TextComposer) {
        if self.needs_layout {
            self.do_layout(composer);
        }
        self.draw_background(surface);
        self.draw_content(surface);
        self.draw_border(surface);
        if self.frame.highlight_container {
            self.draw_container_rect(surface, &HIGHLIGHT_COLOR);
        }
    }

    pub fn draw_background(&self, surface: &mut dyn DrawSurface) {
        if let Some(color) = &self.frame.background {
            surface.fill_rect(self.frame.container_rect, color);
        }
    }

    pub fn draw_content(&self, surface: &mut dyn DrawSurface) {
        match &self.content {
            ItemContent::Text(text) => text.draw(surface, self.used_rect, self.frame.rotation),
            ItemContent::Image(image) => image.draw(surface, self.used_rect, self.frame.rotation),
        }
    }

    pub fn draw_border(&self, surface: &mut dyn DrawSurface) {
        if let Some(border) = &self.frame.border {
            if border.thickness > 0.0 {
                surface.stroke_rect(self.frame.container_rect, &border.brush, border.thickness);
            }
        }
    }

    pub fn draw_container_rect(&self, surface: &mut dyn DrawSurface, color: &Color) {
        surface.stroke_rect(self.frame.container_rect, color, 0.5);
    }
}
