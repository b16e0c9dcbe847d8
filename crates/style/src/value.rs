use crate::alignment::{HorizontalAlignment, TextWrapping, VerticalAlignment};
use crate::font::{FontStretch, FontStyle, FontWeight};
use pagebuilder_types::Color;

/// A parsed, already-scaled style value. Lengths are in points.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Length(f32),
    Angle(f32),
    Color(Color),
    HorizontalAlignment(HorizontalAlignment),
    VerticalAlignment(VerticalAlignment),
    Wrapping(TextWrapping),
    FontFamily(String),
    FontStretch(FontStretch),
    FontStyle(FontStyle),
    FontWeight(FontWeight),
    KeyPath(String),
}

impl StyleValue {
    pub fn as_length(&self) -> Option<f32> {
        match self {
            StyleValue::Length(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_angle(&self) -> Option<f32> {
        match self {
            StyleValue::Angle(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<&Color> {
        match self {
            StyleValue::Color(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_horizontal_alignment(&self) -> Option<HorizontalAlignment> {
        match self {
            StyleValue::HorizontalAlignment(a) => Some(*a),
            _ => None,
        }
    }

    pub fn as_vertical_alignment(&self) -> Option<VerticalAlignment> {
        match self {
            StyleValue::VerticalAlignment(a) => Some(*a),
            _ => None,
        }
    }

    pub fn as_wrapping(&self) -> Option<TextWrapping> {
        match self {
            StyleValue::Wrapping(w) => Some(*w),
            _ => None,
        }
    }

    pub fn as_font_stretch(&self) -> Option<FontStretch> {
        match self {
            StyleValue::FontStretch(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_font_style(&self) -> Option<FontStyle> {
        match self {
            StyleValue::FontStyle(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_font_weight(&self) -> Option<FontWeight> {
        match self {
            StyleValue::FontWeight(w) => Some(*w),
            _ => None,
        }
    }

    /// The string payload of family names and key paths.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::FontFamily(s) | StyleValue::KeyPath(s) => Some(s),
            _ => None,
        }
    }
}
