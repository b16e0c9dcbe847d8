//! Typeface selectors carried by the `FontWeight`, `FontStyle` and
//! `FontStretch` keys. Keyword spellings follow XAML maps.

use serde::Serialize;

/// Named weights map onto the OpenType 1-999 scale; `Numeric` carries any
/// other value written as a number in the map.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    Thin,
    ExtraLight,
    Light,
    #[default]
    Normal,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
    ExtraBlack,
    Numeric(u16),
}

impl FontWeight {
    pub fn numeric_value(&self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::ExtraLight => 200,
            FontWeight::Light => 300,
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
            FontWeight::Black => 900,
            FontWeight::ExtraBlack => 950,
            FontWeight::Numeric(n) => *n,
        }
    }

    /// The named weight for `n`, or `Numeric(n)` when no name matches.
    pub fn from_numeric(n: u16) -> Self {
        match n {
            100 => FontWeight::Thin,
            200 => FontWeight::ExtraLight,
            300 => FontWeight::Light,
            400 => FontWeight::Normal,
            500 => FontWeight::Medium,
            600 => FontWeight::SemiBold,
            700 => FontWeight::Bold,
            800 => FontWeight::ExtraBold,
            900 => FontWeight::Black,
            950 => FontWeight::ExtraBlack,
            other => FontWeight::Numeric(other),
        }
    }

    pub fn is_bold(&self) -> bool {
        self.numeric_value() >= 600
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum FontStretch {
    UltraCondensed,
    ExtraCondensed,
    Condensed,
    SemiCondensed,
    #[default]
    Normal,
    SemiExpanded,
    Expanded,
    ExtraExpanded,
    UltraExpanded,
}

impl FontStretch {
    /// Advance width relative to the normal face.
    pub fn width_factor(&self) -> f32 {
        match self {
            FontStretch::UltraCondensed => 0.5,
            FontStretch::ExtraCondensed => 0.625,
            FontStretch::Condensed => 0.75,
            FontStretch::SemiCondensed => 0.875,
            FontStretch::Normal => 1.0,
            FontStretch::SemiExpanded => 1.125,
            FontStretch::Expanded => 1.25,
            FontStretch::ExtraExpanded => 1.5,
            FontStretch::UltraExpanded => 2.0,
        }
    }
}
