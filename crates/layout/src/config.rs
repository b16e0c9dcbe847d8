use pagebuilder_format::Formatters;
use pagebuilder_style::{AttributeScales, PageSize};
use pagebuilder_types::Size;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Factors applied to raw geometry, font size and spacing attributes.
    pub scales: AttributeScales,
    /// Formatters applied to bound numbers and dates.
    pub formatters: Formatters,
    /// Page media size in points. Auto-height text outside a flow container
    /// extends to the bottom of this size.
    pub page_size: Size,
    /// When set, every produced item also strokes its container rect.
    ///
    /// Defaults to `false`.
    pub highlight_container_rects: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scales: AttributeScales::default(),
            formatters: Formatters::default(),
            page_size: PageSize::A4.dimensions_pt(),
            highlight_container_rects: false,
        }
    }
}
