use pagebuilder_layout::{LayoutConfig, LayoutError, PageBuilder, PageItem};
use pagebuilder_markup::MarkupNode;
use pagebuilder_style::PageSize;
use pagebuilder_traits::{Collaborators, DrawSurface};
use pagebuilder_types::{Rect, Size};
use serde_json::Value;

/// One page: a media rect and the builder holding its items.
#[derive(Debug)]
pub struct Page {
    size: PageSize,
    media: Rect,
    builder: PageBuilder,
    laid_out: bool,
}

impl Page {
    pub fn new(size: PageSize, mut config: LayoutConfig, collaborators: Collaborators) -> Self {
        let media = size.dimensions_pt();
        config.page_size = media;
        Self {
            size,
            media: Rect::new(0.0, 0.0, media.width, media.height),
            builder: PageBuilder::new(config, collaborators),
            laid_out: false,
        }
    }

    pub fn size(&self) -> PageSize {
        self.size
    }

    /// Media box in points.
    pub fn media_rect(&self) -> Rect {
        self.media
    }

    pub fn width(&self) -> f32 {
        self.media.width
    }

    pub fn height(&self) -> f32 {
        self.media.height
    }

    /// Sets the media box from a size in map units (millimetres times the
    /// geometry scale).
    pub fn set_media_bounds_in_map_units(&mut self, size: Size) {
        let points = self.builder.config().scales.size_to_points(size);
        self.media = Rect::new(0.0, 0.0, points.width, points.height);
        self.size = PageSize::Custom {
            width: points.width,
            height: points.height,
        };
        self.builder.config_mut().page_size = points;
    }

    pub fn builder(&self) -> &PageBuilder {
        &self.builder
    }

    pub fn builder_mut(&mut self) -> &mut PageBuilder {
        &mut self.builder
    }

    pub fn items(&self) -> &[PageItem] {
        self.builder.items()
    }

    /// Whether a layout walk has run on this page.
    pub fn is_laid_out(&self) -> bool {
        self.laid_out
    }

    /// Walks `map` against `object`, appending the produced items.
    pub fn layout_for_object(
        &mut self,
        object: &Value,
        map: &MarkupNode,
    ) -> Result<Vec<PageItem>, LayoutError> {
        self.laid_out = true;
        self.builder.layout(map, object)
    }

    /// Registers the constants in `map` without producing items.
    pub fn load(&mut self, map: &MarkupNode) -> Vec<String> {
        self.builder.load(map)
    }

    pub fn draw(&mut self, index: usize, surface: &mut dyn DrawSurface) {
        surface.begin_page(index, self.media.size());
        self.builder.draw(surface);
        surface.end_page(index);
    }
}
