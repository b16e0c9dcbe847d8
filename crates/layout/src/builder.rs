//! The markup interpreter.

use crate::LayoutError;
use crate::attributes::StyleResolver;
use crate::cascade::CascadeSet;
use crate::config::LayoutConfig;
use crate::constants::ConstantElementDictionary;
use crate::items::{ItemFrame, PageItem};
use crate::render::{ElementRenderDictionary, ElementRenderer, FlowFrame, RenderContext, RenderOutcome};
use pagebuilder_format::Formatters;
use pagebuilder_markup::MarkupNode;
use pagebuilder_style::{StyleKey, StyleValue};
use pagebuilder_traits::{Collaborators, DrawSurface, ResolvedImage};
use pagebuilder_types::Rect;
use serde_json::Value;
use std::sync::Arc;

/// Walks map trees against data objects and accumulates the resulting items.
///
/// One builder belongs to one page. Its cascades, constants and renderer
/// dictionary are its own.
#[derive(Debug)]
pub struct PageBuilder {
    config: LayoutConfig,
    collaborators: Collaborators,
    renderers: ElementRenderDictionary,
    cascade: CascadeSet,
    constants: ConstantElementDictionary,
    flows: Vec<FlowFrame>,
    items: Vec<PageItem>,
    layout_offset: f32,
}

/// Per-element spacing, resolved before the element's own pushes.
struct FlowSpacing {
    y_spacing: f32,
    y_increment: f32,
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self::new(LayoutConfig::default(), Collaborators::default())
    }
}

impl PageBuilder {
    pub fn new(config: LayoutConfig, collaborators: Collaborators) -> Self {
        Self {
            config,
            collaborators,
            renderers: ElementRenderDictionary::with_builtins(),
            cascade: CascadeSet::new(),
            constants: ConstantElementDictionary::new(),
            flows: Vec::new(),
            items: Vec::new(),
            layout_offset: 0.0,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut LayoutConfig {
        &mut self.config
    }

    pub fn collaborators(&self) -> &Collaborators {
        &self.collaborators
    }

    pub fn formatters(&self) -> &Formatters {
        &self.config.formatters
    }

    pub fn set_formatters(&mut self, formatters: Formatters) {
        self.config.formatters = formatters;
    }

    pub fn renderers(&self) -> &ElementRenderDictionary {
        &self.renderers
    }

    /// Registers a renderer for `name`, replacing any existing one.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        renderer: Arc<dyn ElementRenderer>,
    ) -> Option<Arc<dyn ElementRenderer>> {
        self.renderers.register(name, renderer)
    }

    pub fn constants(&self) -> &ConstantElementDictionary {
        &self.constants
    }

    pub fn cascade(&self) -> &CascadeSet {
        &self.cascade
    }

    /// Points added to every absolute vertical position.
    pub fn layout_offset(&self) -> f32 {
        self.layout_offset
    }

    pub fn set_layout_offset(&mut self, offset: f32) {
        self.layout_offset = offset;
    }

    pub fn set_highlight_container_rects(&mut self, highlight: bool) {
        self.config.highlight_container_rects = highlight;
        for item in &mut self.items {
            item.set_highlight_container(highlight);
        }
    }

    pub fn items(&self) -> &[PageItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [PageItem] {
        &mut self.items
    }

    /// Pushes a cascade value for `key_name` outside of any walk.
    pub fn push(&mut self, key_name: &str, raw_value: &str) -> Result<(), LayoutError> {
        let key = Self::key(key_name)?;
        let value = self.resolver().parse(key, raw_value)?;
        self.cascade.push(key, value);
        Ok(())
    }

    pub fn pop(&mut self, key_name: &str) -> Result<Option<StyleValue>, LayoutError> {
        let key = Self::key(key_name)?;
        Ok(self.cascade.pop(key))
    }

    fn key(key_name: &str) -> Result<StyleKey, LayoutError> {
        StyleKey::from_name(key_name).ok_or_else(|| LayoutError::UnknownStyleKey(key_name.to_string()))
    }

    fn resolver(&self) -> StyleResolver<'_> {
        StyleResolver::new(
            &self.cascade,
            &self.constants,
            &self.config.scales,
            &self.collaborators,
        )
    }

    /// Registers the constants found in `node` without producing any items.
    /// Returns the registered names in document order.
    pub fn load(&mut self, node: &MarkupNode) -> Vec<String> {
        let mut names = Vec::new();
        self.load_node(node, &mut names);
        log::debug!("Loaded {} constants from <{}>", names.len(), node.name());
        names
    }

    fn load_node(&mut self, node: &MarkupNode, names: &mut Vec<String>) {
        if let Some(renderer) = self.renderers.get(node.name()) {
            names.extend(renderer.load(node, &mut self.constants));
        }
        for child in node.children() {
            self.load_node(child, names);
        }
    }

    /// Lays out `node` against `data`. The produced items are appended to the
    /// builder and also returned.
    pub fn layout(&mut self, node: &MarkupNode, data: &Value) -> Result<Vec<PageItem>, LayoutError> {
        let first = self.items.len();
        self.visit(node, data)?;
        Ok(self.items[first..].to_vec())
    }

    fn visit(&mut self, node: &MarkupNode, data: &Value) -> Result<(), LayoutError> {
        let (outcome, spacing) = {
            let ctx = RenderContext::new(
                self.resolver(),
                &self.collaborators,
                &self.config,
                self.flows.last(),
                self.layout_offset,
            );
            let spacing = FlowSpacing {
                y_spacing: ctx.styles.length(StyleKey::YSpacing, node),
                y_increment: ctx.styles.length(StyleKey::YIncrement, node),
            };
            let outcome = match self.renderers.get(node.name()) {
                Some(renderer) => renderer.render(node, data, &ctx)?,
                None => {
                    log::debug!("No renderer for <{}>; visiting its children", node.name());
                    RenderOutcome::pass_through()
                }
            };
            (outcome, spacing)
        };

        let RenderOutcome {
            items,
            pushes,
            visit_children,
            flow,
            extent,
            constants,
        } = outcome;
        for (name, value) in constants {
            self.constants.insert(name, value);
        }
        self.items.extend(items);
        for (key, value) in &pushes {
            self.cascade.push(*key, value.clone());
        }
        if let Some(spec) = flow {
            self.flows.push(FlowFrame::new(spec));
        }

        let children = if visit_children {
            node.children()
                .iter()
                .try_for_each(|child| self.visit(child, data))
        } else {
            Ok(())
        };

        let nested = match flow {
            Some(_) => self.flows.pop().map(|frame| frame.extent()),
            None => None,
        };
        for (key, _) in pushes.iter().rev() {
            self.cascade.pop(*key);
        }
        children?;

        // A nested flow's usage already carries its children's spacing.
        let consumed = match (nested, extent) {
            (Some(usage), _) => Some(usage),
            (None, Some(extent)) => Some(extent + spacing.y_spacing + spacing.y_increment),
            (None, None) => None,
        };
        if let (Some(consumed), Some(parent)) = (consumed, self.flows.last_mut()) {
            parent.spacing.add(consumed);
        }
        Ok(())
    }

    /// Appends a text item at the absolute `rect` (points), styled by the
    /// current cascade.
    pub fn add_text_item(&mut self, text: &str, rect: Rect) -> &PageItem {
        let anonymous = MarkupNode::new("Text");
        let ctx = RenderContext::new(
            self.resolver(),
            &self.collaborators,
            &self.config,
            None,
            self.layout_offset,
        );
        let item = PageItem::text(text, ctx.styles.text_style(&anonymous), ctx.frame(&anonymous, rect));
        self.push_item(item)
    }

    /// Appends an image item at `rect` (points), aligned by the current cascade.
    pub fn add_image_item(&mut self, key: &str, image: ResolvedImage, rect: Rect) -> &PageItem {
        let anonymous = MarkupNode::new("Image");
        let ctx = RenderContext::new(
            self.resolver(),
            &self.collaborators,
            &self.config,
            None,
            self.layout_offset,
        );
        let frame: ItemFrame = ctx.frame(&anonymous, rect);
        let item = PageItem::image(key, image, frame);
        self.push_item(item)
    }

    fn push_item(&mut self, item: PageItem) -> &PageItem {
        self.items.push(item);
        let last = self.items.len() - 1;
        &self.items[last]
    }

    /// Lays out (where needed) and paints every item in order.
    pub fn draw(&mut self, surface: &mut dyn DrawSurface) {
        let composer = self.collaborators.text_composer.clone();
        for item in &mut self.items {
            item.draw(surface, composer.as_ref());
        }
    }

    /// Clears cascades, constants and items.
    pub fn reset(&mut self) {
        self.cascade.clear();
        self.constants.clear();
        self.flows.clear();
        self.items.clear();
        self.layout_offset = 0.0;
    }
}
