//! Page sizes and the unit scales applied to numeric map attributes.
use pagebuilder_types::geometry::{mm_to_pt, Size, MM_TO_PT};
use serde::{de, ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};

/// Which caller-configured factor a numeric attribute is scaled by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleKind {
    Geometry,
    FontSize,
    YIncrement,
    YSpacing,
}

/// Scale factors applied to raw map values at parse time.
///
/// Every raw value, font sizes included, is in millimetres by default and is
/// converted with `72 / 25.4` before the factor is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributeScales {
    pub geometry: f32,
    pub font_size: f32,
    pub y_increment: f32,
    pub y_spacing: f32,
}

impl Default for AttributeScales {
    fn default() -> Self {
        Self {
            geometry: 1.0,
            font_size: 1.0,
            y_increment: 1.0,
            y_spacing: 1.0,
        }
    }
}

impl AttributeScales {
    /// Scales that treat every geometry value as points instead of millimetres.
    pub fn points() -> Self {
        let inverse = 1.0 / MM_TO_PT;
        Self {
            geometry: inverse,
            font_size: inverse,
            y_increment: inverse,
            y_spacing: inverse,
        }
    }

    /// The multiplier turning a raw map value of `kind` into points.
    pub fn factor(&self, kind: ScaleKind) -> f32 {
        match kind {
            ScaleKind::Geometry => MM_TO_PT * self.geometry,
            ScaleKind::FontSize => MM_TO_PT * self.font_size,
            ScaleKind::YIncrement => MM_TO_PT * self.y_increment,
            ScaleKind::YSpacing => MM_TO_PT * self.y_spacing,
        }
    }

    pub fn apply(&self, kind: ScaleKind, raw: f32) -> f32 {
        match kind {
            ScaleKind::Geometry => raw * MM_TO_PT * self.geometry,
            ScaleKind::FontSize => raw * MM_TO_PT * self.font_size,
            ScaleKind::YIncrement => raw * MM_TO_PT * self.y_increment,
            ScaleKind::YSpacing => raw * MM_TO_PT * self.y_spacing,
        }
    }

    /// Converts a size given in map units into points.
    pub fn size_to_points(&self, size: Size) -> Size {
        Size::new(
            self.apply(ScaleKind::Geometry, size.width),
            self.apply(ScaleKind::Geometry, size.height),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    A5,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    /// Media box size in points.
    pub fn dimensions_pt(&self) -> Size {
        match self {
            PageSize::A4 => Size::new(mm_to_pt(210.0), mm_to_pt(297.0)),
            PageSize::A5 => Size::new(mm_to_pt(148.0), mm_to_pt(210.0)),
            PageSize::Custom { width, height } => Size::new(*width, *height),
        }
    }

    /// Parse a page size name (e.g., "A4", "A5").
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "a5" => Ok(PageSize::A5),
            _ => Err(format!("Unknown page size: {}", s)),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::A5 => serializer.serialize_str("A5"),
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: f32, height: f32 },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => Ok(PageSize::Custom { width, height }),
        }
    }
}
