use serde::{Deserialize, Serialize};

/// Placement of an item's used rect along the horizontal axis of its container.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    #[default]
    Leading,
    Center,
    Trailing,
    Fill,
}

impl HorizontalAlignment {
    /// Offset of a span of `used` length inside a span of `available` length.
    pub fn offset(self, available: f32, used: f32) -> f32 {
        match self {
            HorizontalAlignment::Leading | HorizontalAlignment::Fill => 0.0,
            HorizontalAlignment::Center => (available - used) / 2.0,
            HorizontalAlignment::Trailing => available - used,
        }
    }
}

/// Placement of an item's used rect along the vertical axis of its container.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    #[default]
    Top,
    Center,
    Bottom,
    Fill,
}

impl VerticalAlignment {
    pub fn offset(self, available: f32, used: f32) -> f32 {
        match self {
            VerticalAlignment::Top | VerticalAlignment::Fill => 0.0,
            VerticalAlignment::Center => (available - used) / 2.0,
            VerticalAlignment::Bottom => available - used,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TextWrapping {
    #[default]
    Wrap,
    NoWrap,
    /// Wraps at word boundaries but lets a single overlong word overflow.
    WrapWithOverflow,
}

impl TextWrapping {
    pub fn wraps(self) -> bool {
        !matches!(self, TextWrapping::NoWrap)
    }
}
