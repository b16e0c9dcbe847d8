//! The fixed set of cascading map attributes.
use crate::alignment::{HorizontalAlignment, TextWrapping, VerticalAlignment};
use crate::dimension::ScaleKind;
use crate::font::{FontStretch, FontStyle, FontWeight};
use crate::value::StyleValue;
use pagebuilder_types::Color;
use std::fmt;

/// A recognized style attribute. Only these names take part in the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleKey {
    YIncrement,
    YSpacing,
    Rotation,
    BorderBrush,
    BorderThickness,
    BorderBackground,
    TextPadding,
    TextAlignment,
    TextVerticalAlignment,
    TextWrapping,
    FontFamily,
    FontSize,
    FontStretch,
    FontStyle,
    FontWeight,
    LineHeight,
    Foreground,
    Property,
}

/// How the raw attribute string of a key is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Length(ScaleKind),
    Angle,
    Color,
    HorizontalAlignment,
    VerticalAlignment,
    Wrapping,
    FontFamily,
    FontStretch,
    FontStyle,
    FontWeight,
    KeyPath,
}

impl StyleKey {
    pub const ALL: [StyleKey; 18] = [
        StyleKey::YIncrement,
        StyleKey::YSpacing,
        StyleKey::Rotation,
        StyleKey::BorderBrush,
        StyleKey::BorderThickness,
        StyleKey::BorderBackground,
        StyleKey::TextPadding,
        StyleKey::TextAlignment,
        StyleKey::TextVerticalAlignment,
        StyleKey::TextWrapping,
        StyleKey::FontFamily,
        StyleKey::FontSize,
        StyleKey::FontStretch,
        StyleKey::FontStyle,
        StyleKey::FontWeight,
        StyleKey::LineHeight,
        StyleKey::Foreground,
        StyleKey::Property,
    ];

    /// The attribute name as written in a map.
    pub fn name(&self) -> &'static str {
        match self {
            StyleKey::YIncrement => "YIncrement",
            StyleKey::YSpacing => "YSpacing",
            StyleKey::Rotation => "Rotation",
            StyleKey::BorderBrush => "BorderBrush",
            StyleKey::BorderThickness => "BorderThickness",
            StyleKey::BorderBackground => "BorderBackground",
            StyleKey::TextPadding => "TextPadding",
            StyleKey::TextAlignment => "TextAlignment",
            StyleKey::TextVerticalAlignment => "TextVerticalAlignment",
            StyleKey::TextWrapping => "TextWrapping",
            StyleKey::FontFamily => "FontFamily",
            StyleKey::FontSize => "FontSize",
            StyleKey::FontStretch => "FontStretch",
            StyleKey::FontStyle => "FontStyle",
            StyleKey::FontWeight => "FontWeight",
            StyleKey::LineHeight => "LineHeight",
            StyleKey::Foreground => "Foreground",
            StyleKey::Property => "Property",
        }
    }

    pub fn from_name(name: &str) -> Option<StyleKey> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    pub fn value_kind(&self) -> ValueKind {
        match self {
            StyleKey::YIncrement => ValueKind::Length(ScaleKind::YIncrement),
            StyleKey::YSpacing => ValueKind::Length(ScaleKind::YSpacing),
            StyleKey::FontSize => ValueKind::Length(ScaleKind::FontSize),
            StyleKey::BorderThickness | StyleKey::TextPadding | StyleKey::LineHeight => {
                ValueKind::Length(ScaleKind::Geometry)
            }
            StyleKey::Rotation => ValueKind::Angle,
            StyleKey::BorderBrush | StyleKey::BorderBackground | StyleKey::Foreground => {
                ValueKind::Color
            }
            StyleKey::TextAlignment => ValueKind::HorizontalAlignment,
            StyleKey::TextVerticalAlignment => ValueKind::VerticalAlignment,
            StyleKey::TextWrapping => ValueKind::Wrapping,
            StyleKey::FontFamily => ValueKind::FontFamily,
            StyleKey::FontStretch => ValueKind::FontStretch,
            StyleKey::FontStyle => ValueKind::FontStyle,
            StyleKey::FontWeight => ValueKind::FontWeight,
            StyleKey::Property => ValueKind::KeyPath,
        }
    }

    /// The built-in value used when nothing else supplies one. `None` means unset.
    pub fn default_value(&self) -> Option<StyleValue> {
        match self {
            StyleKey::YIncrement
            | StyleKey::YSpacing
            | StyleKey::BorderThickness
            | StyleKey::TextPadding => Some(StyleValue::Length(0.0)),
            StyleKey::Rotation => Some(StyleValue::Angle(0.0)),
            StyleKey::FontSize => Some(StyleValue::Length(12.0)),
            StyleKey::TextAlignment => {
                Some(StyleValue::HorizontalAlignment(HorizontalAlignment::default()))
            }
            StyleKey::TextVerticalAlignment => {
                Some(StyleValue::VerticalAlignment(VerticalAlignment::default()))
            }
            StyleKey::TextWrapping => Some(StyleValue::Wrapping(TextWrapping::default())),
            StyleKey::FontFamily => Some(StyleValue::FontFamily("Helvetica".to_string())),
            StyleKey::FontStretch => Some(StyleValue::FontStretch(FontStretch::default())),
            StyleKey::FontStyle => Some(StyleValue::FontStyle(FontStyle::default())),
            StyleKey::FontWeight => Some(StyleValue::FontWeight(FontWeight::default())),
            StyleKey::Foreground => Some(StyleValue::Color(Color::black())),
            StyleKey::BorderBrush
            | StyleKey::BorderBackground
            | StyleKey::LineHeight
            | StyleKey::Property => None,
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
