//! Page sequencing for the page builder.
//!
//! A [`Document`] owns an ordered list of [`Page`]s. Each page carries its own
//! [`PageBuilder`](pagebuilder_layout::PageBuilder), so cascades and constants
//! never leak between pages.

mod document;
mod error;
mod hooks;
mod page;

pub use document::{Document, DocumentConfig};
pub use error::DocumentError;
pub use hooks::{NoHooks, PageHooks};
pub use page::Page;
