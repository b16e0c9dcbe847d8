//! The drawing surface items paint onto.

use crate::resource::ResolvedImage;
use crate::text::{ComposedLines, ComposedText, TextStyle};
use pagebuilder_types::{Color, Rect, Size};
use serde::Serialize;

/// Receives draw calls from page items. Coordinates are points, top-left origin.
pub trait DrawSurface {
    fn begin_page(&mut self, _index: usize, _size: Size) {}

    fn end_page(&mut self, _index: usize) {}

    fn fill_rect(&mut self, rect: Rect, color: &Color);

    fn stroke_rect(&mut self, rect: Rect, color: &Color, thickness: f32);

    /// `rect` is the used rect the composed text was aligned into.
    fn draw_text(
        &mut self,
        content: &str,
        composed: &ComposedText,
        style: &TextStyle,
        rect: Rect,
        rotation: f32,
    );

    fn draw_image(&mut self, image: &ResolvedImage, rect: Rect, rotation: f32);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawOp {
    BeginPage {
        index: usize,
        size: Size,
    },
    EndPage {
        index: usize,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        thickness: f32,
    },
    Text {
        content: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        lines: Vec<String>,
        rect: Rect,
        font_family: String,
        font_size: f32,
        color: Color,
        #[serde(skip_serializing_if = "is_zero")]
        rotation: f32,
    },
    Image {
        rect: Rect,
        intrinsic: Size,
        #[serde(skip_serializing_if = "is_zero")]
        rotation: f32,
    },
}

fn is_zero(v: &f32) -> bool {
    *v == 0.0
}

/// A surface that records every call, for tests and the command-line tool.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Text contents in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn begin_page(&mut self, index: usize, size: Size) {
        self.ops.push(DrawOp::BeginPage { index, size });
    }

    fn end_page(&mut self, index: usize) {
        self.ops.push(DrawOp::EndPage { index });
    }

    fn fill_rect(&mut self, rect: Rect, color: &Color) {
        self.ops.push(DrawOp::FillRect {
            rect,
            color: color.clone(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: &Color, thickness: f32) {
        self.ops.push(DrawOp::StrokeRect {
            rect,
            color: color.clone(),
            thickness,
        });
    }

    fn draw_text(
        &mut self,
        content: &str,
        composed: &ComposedText,
        style: &TextStyle,
        rect: Rect,
        rotation: f32,
    ) {
        let lines = composed
            .handle
            .downcast_ref::<ComposedLines>()
            .map(|c| c.lines.clone())
            .unwrap_or_default();
        self.ops.push(DrawOp::Text {
            content: content.to_string(),
            lines,
            rect,
            font_family: style.font_family.clone(),
            font_size: style.font_size,
            color: style.foreground.clone(),
            rotation,
        });
    }

    fn draw_image(&mut self, image: &ResolvedImage, rect: Rect, rotation: f32) {
        self.ops.push(DrawOp::Image {
            rect,
            intrinsic: image.size,
            rotation,
        });
    }
}
