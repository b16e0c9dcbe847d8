use crate::page::Page;
use std::fmt::Debug;

/// Caller callbacks around the page lifecycle. Both methods default to no-ops.
pub trait PageHooks: Send + Sync + Debug {
    /// Runs after a page and its builder are created, before any walk.
    /// A typical use is registering custom renderers or pushing page-wide
    /// cascade values.
    fn page_builder_loaded(&self, _page: &mut Page) {}

    /// Runs once per page, before its first layout walk.
    fn will_layout_page(&self, _page_index: usize, _page: &mut Page) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl PageHooks for NoHooks {}
