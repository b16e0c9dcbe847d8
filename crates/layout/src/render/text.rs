use super::{ElementRenderer, RenderContext, RenderOutcome};
use crate::LayoutError;
use crate::attributes::{HEIGHT, WIDTH};
use crate::items::PageItem;
use pagebuilder_format::PatternNumberFormatter;
use pagebuilder_markup::MarkupNode;
use pagebuilder_markup::text::{clean_content, is_blank};
use pagebuilder_traits::FieldValue;
use pagebuilder_types::Rect;
use serde_json::Value;

/// Where a text element takes its content from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    /// An explicit `Property` binding, then a `Constant` reference, then the
    /// element's own text, then a cascaded `Property` binding.
    Auto,
    /// Always the `Property` (or `Path`) binding.
    Binding,
}

const PROPERTY: &str = "Property";
const PATH: &str = "Path";
const CONSTANT: &str = "Constant";
const FORMAT: &str = "Format";
const DATE_FORMAT: &str = "DateFormat";
const TRIM: &str = "Trim";

#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    source: TextSource,
}

impl TextRenderer {
    pub fn new(source: TextSource) -> Self {
        Self { source }
    }

    fn content(&self, node: &MarkupNode, data: &Value, ctx: &RenderContext<'_>) -> String {
        let explicit_path = match self.source {
            TextSource::Auto => node.attr(PROPERTY),
            TextSource::Binding => node.attr_any(&[PROPERTY, PATH]),
        };
        if let Some(path) = explicit_path {
            return bound_text(path.trim(), node, data, ctx);
        }
        if self.source == TextSource::Auto {
            if let Some(name) = node.attr(CONSTANT) {
                return match ctx.styles.constants().get(name.trim()) {
                    Some(value) => value.to_string(),
                    None => {
                        log::debug!("<{}>: constant '{}' is not defined", node.name(), name);
                        String::new()
                    }
                };
            }
            if !is_blank(node.text()) {
                return node.text().to_string();
            }
        }
        match ctx.styles.key_path(node) {
            Some(path) => bound_text(&path, node, data, ctx),
            None => {
                if self.source == TextSource::Binding {
                    log::debug!("<{}> has no Property to bind", node.name());
                }
                String::new()
            }
        }
    }
}

/// Resolves `path` against `data` and formats the result for display.
fn bound_text(path: &str, node: &MarkupNode, data: &Value, ctx: &RenderContext<'_>) -> String {
    match ctx.collaborators.fields.resolve(path, data) {
        Some(FieldValue::Number(n)) => number_formatter(node, ctx).format(n),
        Some(FieldValue::Text(s)) => format_string(s, node, ctx),
        Some(FieldValue::Bool(b)) => b.to_string(),
        None => {
            log::debug!("<{}>: nothing bound at '{}'", node.name(), path);
            String::new()
        }
    }
}

fn number_formatter(node: &MarkupNode, ctx: &RenderContext<'_>) -> PatternNumberFormatter {
    let formatters = &ctx.config.formatters;
    match node.attr(FORMAT) {
        Some(pattern) => formatters.number_pattern(pattern).unwrap_or_else(|e| {
            log::warn!("<{}>: {}; using the decimal formatter", node.name(), e);
            formatters.decimal.clone()
        }),
        None => formatters.decimal.clone(),
    }
}

/// Applies `DateFormat` to date strings and `Format` to numeric strings. A
/// blank `DateFormat` selects the configured date formatter.
fn format_string(s: String, node: &MarkupNode, ctx: &RenderContext<'_>) -> String {
    if let Some(pattern) = node.attr(DATE_FORMAT) {
        let formatters = &ctx.config.formatters;
        let date = if pattern.trim().is_empty() {
            Ok(formatters.date.clone())
        } else {
            formatters.date_pattern(pattern)
        };
        match date {
            Ok(formatter) => {
                if let Some(formatted) = formatter.format_str(&s) {
                    return formatted;
                }
            }
            Err(e) => log::warn!("<{}>: {}", node.name(), e),
        }
    }
    if node.has_attr(FORMAT) {
        if let Ok(n) = s.trim().parse::<f64>() {
            return number_formatter(node, ctx).format(n);
        }
    }
    s
}

impl ElementRenderer for TextRenderer {
    fn render(
        &self,
        node: &MarkupNode,
        data: &Value,
        ctx: &RenderContext<'_>,
    ) -> Result<RenderOutcome, LayoutError> {
        let trim = ctx.styles.flag(node, TRIM, true);
        let content = clean_content(&self.content(node, data, ctx), trim);
        if !ctx.collaborators.validator.is_valid(&content) {
            log::debug!("<{}>: content rejected by the validator", node.name());
            return Ok(RenderOutcome::empty());
        }

        let origin = ctx.place(node);
        let width = ctx
            .styles
            .geometry(node, WIDTH)
            .unwrap_or_else(|| ctx.available_width(origin.x));
        let explicit_height = ctx.styles.geometry(node, HEIGHT);
        let height = explicit_height.unwrap_or_else(|| ctx.remaining_height(origin.y));
        let rect = Rect::new(origin.x, origin.y, width, height);

        let mut item = PageItem::text(content, ctx.styles.text_style(node), ctx.frame(node, rect));
        let extent = match explicit_height {
            Some(h) => h,
            None if ctx.in_flow() => {
                item.fit_height_to_content(ctx.collaborators.text_composer.as_ref())
            }
            None => height,
        };
        log::trace!("<{}> placed at {:?}", node.name(), item.container_rect());
        Ok(RenderOutcome::item(item, extent))
    }
}
