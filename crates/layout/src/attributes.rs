//! Attribute resolution: explicit attribute, then cascade, then constant,
//! then built-in default.

use crate::cascade::CascadeSet;
use crate::constants::ConstantElementDictionary;
use pagebuilder_markup::MarkupNode;
use pagebuilder_style::parsers::{parse_bool, parse_length, parse_style_value};
use pagebuilder_style::{
    AttributeScales, FontStretch, FontStyle, FontWeight, HorizontalAlignment, ScaleKind,
    StyleKey, StyleParseError, StyleValue, TextWrapping, VerticalAlignment,
};
use pagebuilder_traits::{Collaborators, TextStyle};
use pagebuilder_types::Color;

/// Geometry attribute names shared by all built-in elements.
pub const X: &str = "X";
pub const Y: &str = "Y";
pub const WIDTH: &str = "Width";
pub const HEIGHT: &str = "Height";

/// Read-only view over everything that can supply a style value.
#[derive(Clone, Copy)]
pub struct StyleResolver<'a> {
    cascade: &'a CascadeSet,
    constants: &'a ConstantElementDictionary,
    scales: &'a AttributeScales,
    collaborators: &'a Collaborators,
}

impl<'a> StyleResolver<'a> {
    pub fn new(
        cascade: &'a CascadeSet,
        constants: &'a ConstantElementDictionary,
        scales: &'a AttributeScales,
        collaborators: &'a Collaborators,
    ) -> Self {
        Self {
            cascade,
            constants,
            scales,
            collaborators,
        }
    }

    pub fn constants(&self) -> &'a ConstantElementDictionary {
        self.constants
    }

    pub fn scales(&self) -> &'a AttributeScales {
        self.scales
    }

    /// Parses a raw value for `key`, resolving colors and font families
    /// through the collaborators.
    pub fn parse(&self, key: StyleKey, raw: &str) -> Result<StyleValue, StyleParseError> {
        let value = parse_style_value(key, raw, self.scales, |token| {
            self.collaborators.colors.resolve_color(key.name(), token)
        })?;
        match value {
            StyleValue::FontFamily(token) => self
                .collaborators
                .font_families
                .resolve_family(key.name(), &token)
                .map(StyleValue::FontFamily)
                .ok_or_else(|| StyleParseError::InvalidValue {
                    property: key.name().to_string(),
                    value: token,
                }),
            other => Ok(other),
        }
    }

    /// The effective value of `key` at `node`. `None` means unset.
    pub fn resolve(&self, key: StyleKey, node: &MarkupNode) -> Option<StyleValue> {
        if let Some(raw) = node.attr(key.name()) {
            match self.parse(key, raw) {
                Ok(value) => return Some(value),
                Err(e) => {
                    log::warn!("<{}>: {}; using the default", node.name(), e);
                    return key.default_value();
                }
            }
        }
        self.inherited(key)
    }

    /// The value `key` has without looking at any element's own attributes.
    pub fn inherited(&self, key: StyleKey) -> Option<StyleValue> {
        if let Some(value) = self.cascade.peek(key) {
            return Some(value.clone());
        }
        if let Some(raw) = self.constants.get(key.name()) {
            match self.parse(key, raw) {
                Ok(value) => return Some(value),
                Err(e) => log::warn!("Constant {}: {}; using the default", key.name(), e),
            }
        }
        key.default_value()
    }

    /// Every style key `node` declares, parsed. Malformed values are skipped.
    pub fn declared(&self, node: &MarkupNode) -> Vec<(StyleKey, StyleValue)> {
        node.attributes()
            .iter()
            .filter_map(|(name, raw)| {
                let key = StyleKey::from_name(name)?;
                match self.parse(key, raw) {
                    Ok(value) => Some((key, value)),
                    Err(e) => {
                        log::warn!("<{}>: {}; not cascaded", node.name(), e);
                        None
                    }
                }
            })
            .collect()
    }

    pub fn length(&self, key: StyleKey, node: &MarkupNode) -> f32 {
        self.resolve(key, node)
            .and_then(|v| v.as_length())
            .unwrap_or(0.0)
    }

    pub fn color(&self, key: StyleKey, node: &MarkupNode) -> Option<Color> {
        self.resolve(key, node).and_then(|v| v.as_color().cloned())
    }

    pub fn key_path(&self, node: &MarkupNode) -> Option<String> {
        self.resolve(StyleKey::Property, node)
            .and_then(|v| v.as_str().map(str::to_string))
    }

    /// A geometry attribute (`X`, `Y`, `Width`, `Height`) in points.
    pub fn geometry(&self, node: &MarkupNode, name: &str) -> Option<f32> {
        let raw = node.attr(name)?;
        match parse_length(raw, ScaleKind::Geometry, self.scales) {
            Ok(v) => Some(v),
            Err(e) => {
                log::warn!("<{}> {}=\"{}\": {}", node.name(), name, raw, e);
                None
            }
        }
    }

    /// A boolean attribute, or `default` when absent or malformed.
    pub fn flag(&self, node: &MarkupNode, name: &str, default: bool) -> bool {
        match node.attr(name).map(parse_bool) {
            Some(Ok(v)) => v,
            Some(Err(e)) => {
                log::warn!("<{}> {}: {}", node.name(), name, e);
                default
            }
            None => default,
        }
    }

    pub fn horizontal_alignment(&self, node: &MarkupNode) -> HorizontalAlignment {
        self.resolve(StyleKey::TextAlignment, node)
            .and_then(|v| v.as_horizontal_alignment())
            .unwrap_or_default()
    }

    pub fn vertical_alignment(&self, node: &MarkupNode) -> VerticalAlignment {
        self.resolve(StyleKey::TextVerticalAlignment, node)
            .and_then(|v| v.as_vertical_alignment())
            .unwrap_or_default()
    }

    /// The font and paragraph attributes in effect at `node`.
    pub fn text_style(&self, node: &MarkupNode) -> TextStyle {
        let defaults = TextStyle::default();
        TextStyle {
            font_family: self
                .resolve(StyleKey::FontFamily, node)
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or(defaults.font_family),
            font_size: self
                .resolve(StyleKey::FontSize, node)
                .and_then(|v| v.as_length())
                .unwrap_or(defaults.font_size),
            font_weight: self
                .resolve(StyleKey::FontWeight, node)
                .and_then(|v| v.as_font_weight())
                .unwrap_or(FontWeight::Normal),
            font_style: self
                .resolve(StyleKey::FontStyle, node)
                .and_then(|v| v.as_font_style())
                .unwrap_or(FontStyle::Normal),
            font_stretch: self
                .resolve(StyleKey::FontStretch, node)
                .and_then(|v| v.as_font_stretch())
                .unwrap_or(FontStretch::Normal),
            line_height: self
                .resolve(StyleKey::LineHeight, node)
                .and_then(|v| v.as_length()),
            foreground: self
                .color(StyleKey::Foreground, node)
                .unwrap_or(defaults.foreground),
            alignment: self.horizontal_alignment(node),
            vertical_alignment: self.vertical_alignment(node),
            wrapping: self
                .resolve(StyleKey::TextWrapping, node)
                .and_then(|v| v.as_wrapping())
                .unwrap_or(TextWrapping::Wrap),
        }
    }
}
