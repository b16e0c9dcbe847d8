//! Interfaces to the services the page builder delegates to, plus simple
//! reference implementations of each.

use std::any::Any;
use std::sync::Arc;

pub mod collaborators;
pub mod color;
pub mod field;
pub mod font;
pub mod resource;
pub mod surface;
pub mod text;
pub mod validate;

/// An opaque value produced by a collaborator and handed back to it later.
pub type ContentHandle = Arc<dyn Any + Send + Sync>;

pub use collaborators::Collaborators;
pub use color::{ColorResolver, HexColorResolver};
pub use field::{FieldResolver, FieldValue, JsonFieldResolver};
pub use font::{AliasFontFamilyResolver, FontFamilyResolver};
pub use resource::{
    ImageProvider, InMemoryImageProvider, ResolvedImage, ResourceError, SharedImageData,
    StoredImage,
};
pub use surface::{DrawOp, DrawSurface, RecordingSurface};
pub use text::{
    ComposedLines, ComposedText, FixedSizeTextComposer, HeuristicTextComposer, TextComposer,
    TextStyle,
};
pub use validate::{AcceptAllValidator, PrintableValidator, StringValidator};
