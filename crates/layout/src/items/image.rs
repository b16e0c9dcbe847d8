use super::ItemFrame;
use pagebuilder_style::{HorizontalAlignment, VerticalAlignment};
use pagebuilder_traits::{DrawSurface, ResolvedImage};
use pagebuilder_types::{Rect, Size};

#[derive(Debug, Clone)]
pub struct ImageItem {
    key: String,
    image: ResolvedImage,
}

impl ImageItem {
    pub fn new(key: impl Into<String>, image: ResolvedImage) -> Self {
        Self {
            key: key.into(),
            image,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn image(&self) -> &ResolvedImage {
        &self.image
    }

    pub fn intrinsic_size(&self) -> Size {
        self.image.size
    }

    /// Scales the image down (never up) to fit the container, keeping its
    /// aspect ratio, then aligns it. `Fill` stretches that axis to the container.
    pub(super) fn layout(&self, frame: &ItemFrame) -> Rect {
        let area = frame.container_rect;
        let intrinsic = self.image.size;
        let mut scale: f32 = 1.0;
        if intrinsic.width > 0.0 {
            scale = scale.min(area.width / intrinsic.width);
        }
        if intrinsic.height > 0.0 {
            scale = scale.min(area.height / intrinsic.height);
        }
        let scale = scale.max(0.0);
        let fitted = Size::new(intrinsic.width * scale, intrinsic.height * scale);
        let fitted = Size::new(
            if frame.horizontal_alignment == HorizontalAlignment::Fill {
                area.width
            } else {
                fitted.width
            },
            if frame.vertical_alignment == VerticalAlignment::Fill {
                area.height
            } else {
                fitted.height
            },
        );
        frame.align(area, fitted)
    }

    pub(super) fn draw(&self, surface: &mut dyn DrawSurface, used: Rect, rotation: f32) {
        surface.draw_image(&self.image, used, rotation);
    }
}
