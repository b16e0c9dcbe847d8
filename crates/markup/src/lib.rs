//! The markup tree consumed by the page builder.
//!
//! Trees are produced by an external parser (the root crate ships an XML adapter)
//! and are never mutated by the engine.

pub mod node;
pub mod text;

pub use node::MarkupNode;
