//! Template-driven page layout.
//!
//! A map (an XML tree of `Text`, `Property`, `Image`, `Container` and style
//! elements) is walked against a data object. Style attributes cascade from
//! parents to children, flow containers stack their children vertically, and
//! the result is a list of positioned page items that can be drawn onto any
//! [`DrawSurface`].
//!
//! ```no_run
//! use pagebuilder::PipelineBuilder;
//! use serde_json::json;
//!
//! let pipeline = PipelineBuilder::new()
//!     .with_map_source(r#"<Container><Property Property="name"/></Container>"#)?
//!     .build()?;
//! let ops = pipeline.generate_ops(&[json!({ "name": "Ada" })])?;
//! # Ok::<(), pagebuilder::BuildError>(())
//! ```

pub mod error;
pub mod pipeline;
pub mod xml;

pub use error::BuildError;
pub use pipeline::{Pipeline, PipelineBuilder, PipelineConfig};

pub use pagebuilder_document::{Document, DocumentConfig, DocumentError, NoHooks, Page, PageHooks};
pub use pagebuilder_format::{
    DateFormatter, FormatError, FormatSettings, Formatters, PatternNumberFormatter,
};
pub use pagebuilder_layout::{
    ElementRenderDictionary, ElementRenderer, ItemContent, ItemFrame, LayoutConfig, LayoutError,
    PageBuilder, PageItem, RenderContext, RenderOutcome,
};
pub use pagebuilder_markup::MarkupNode;
pub use pagebuilder_style::{AttributeScales, PageSize, StyleKey, StyleValue};
pub use pagebuilder_traits::{
    Collaborators, DrawOp, DrawSurface, ImageProvider, InMemoryImageProvider, RecordingSurface,
    TextComposer,
};
pub use pagebuilder_types::{Color, MM_TO_PT, Point, Rect, Size};
