use pagebuilder_format::FormatError;
use pagebuilder_style::StyleParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Unknown style key '{0}'")]
    UnknownStyleKey(String),
    #[error("Invalid style value: {0}")]
    Style(#[from] StyleParseError),
    #[error("Invalid format pattern: {0}")]
    Format(#[from] FormatError),
    #[error("Renderer for <{element}> failed: {message}")]
    Renderer { element: String, message: String },
    #[error("Generic layout error: {0}")]
    Generic(String),
}

pub mod attributes;
pub mod builder;
pub mod cascade;
pub mod config;
pub mod constants;
pub mod items;
pub mod render;
pub mod spacing;

pub use self::attributes::StyleResolver;
pub use self::builder::PageBuilder;
pub use self::cascade::{CascadeSet, CascadeStack};
pub use self::config::LayoutConfig;
pub use self::constants::ConstantElementDictionary;
pub use self::items::{Border, ImageItem, ItemContent, ItemFrame, PageItem, TextItem};
pub use self::render::{
    ElementRenderDictionary, ElementRenderer, FlowFrame, FlowSpec, RenderContext, RenderOutcome,
    TextSource,
};
pub use self::spacing::SpacingAggregator;

#[cfg(test)]
mod builder_test;
#[cfg(test)]
mod test_utils;
