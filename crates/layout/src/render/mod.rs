//! Element renderers: the handlers that turn a tag into items and cascade
//! changes.

mod constants;
mod container;
mod image;
mod text;

pub use self::constants::ConstantsRenderer;
pub use self::container::{FlowContainerRenderer, StyleScopeRenderer};
pub use self::image::ImageRenderer;
pub use self::text::{TextRenderer, TextSource};

use crate::LayoutError;
use crate::attributes::{StyleResolver, X, Y};
use crate::config::LayoutConfig;
use crate::constants::ConstantElementDictionary;
use crate::items::{Border, ItemFrame, PageItem};
use crate::spacing::SpacingAggregator;
use pagebuilder_markup::MarkupNode;
use pagebuilder_style::{StyleKey, StyleValue};
use pagebuilder_traits::Collaborators;
use pagebuilder_types::{Point, Rect};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Where a flow container places its children, as returned by its renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowSpec {
    pub x: f32,
    pub top: f32,
    pub width: f32,
    /// An explicit height replaces the children's total usage in the parent flow.
    pub height: Option<f32>,
}

/// An open flow container during the walk.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowFrame {
    pub x: f32,
    pub width: f32,
    pub height: Option<f32>,
    pub spacing: SpacingAggregator,
}

impl FlowFrame {
    pub fn new(spec: FlowSpec) -> Self {
        Self {
            x: spec.x,
            width: spec.width,
            height: spec.height,
            spacing: SpacingAggregator::new(spec.top),
        }
    }

    /// The extent this container contributes to its parent flow.
    pub fn extent(&self) -> f32 {
        self.height.unwrap_or(self.spacing.usage())
    }
}

/// What a renderer hands back to the interpreter for one element.
#[derive(Debug, Default)]
pub struct RenderOutcome {
    pub items: Vec<PageItem>,
    /// Values cascaded to descendants; popped again after the subtree.
    pub pushes: Vec<(StyleKey, StyleValue)>,
    pub visit_children: bool,
    /// Opens a flow container around the children.
    pub flow: Option<FlowSpec>,
    /// Vertical extent this element consumes in an enclosing flow container.
    pub extent: Option<f32>,
    /// Constants to register.
    pub constants: Vec<(String, String)>,
}

impl RenderOutcome {
    /// Produces nothing and skips the subtree.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Produces nothing; children are visited under the current cascade.
    pub fn pass_through() -> Self {
        Self {
            visit_children: true,
            ..Self::default()
        }
    }

    pub fn item(item: PageItem, extent: f32) -> Self {
        Self {
            items: vec![item],
            extent: Some(extent),
            ..Self::default()
        }
    }
}

/// The interpreter state a renderer may read.
pub struct RenderContext<'a> {
    pub styles: StyleResolver<'a>,
    pub collaborators: &'a Collaborators,
    pub config: &'a LayoutConfig,
    flow: Option<&'a FlowFrame>,
    layout_offset: f32,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        styles: StyleResolver<'a>,
        collaborators: &'a Collaborators,
        config: &'a LayoutConfig,
        flow: Option<&'a FlowFrame>,
        layout_offset: f32,
    ) -> Self {
        Self {
            styles,
            collaborators,
            config,
            flow,
            layout_offset,
        }
    }

    /// The innermost open flow container, if any.
    pub fn flow(&self) -> Option<&FlowFrame> {
        self.flow
    }

    pub fn in_flow(&self) -> bool {
        self.flow.is_some()
    }

    pub fn layout_offset(&self) -> f32 {
        self.layout_offset
    }

    /// Absolute top-left of `node` in points.
    ///
    /// Inside a flow container `X` is relative to the container's left edge
    /// and `Y` to the flow cursor. Elsewhere both are page coordinates, shifted
    /// down by the layout offset.
    pub fn place(&self, node: &MarkupNode) -> Point {
        let x = self.styles.geometry(node, X).unwrap_or(0.0);
        let y = self.styles.geometry(node, Y).unwrap_or(0.0);
        match self.flow {
            Some(frame) => Point::new(frame.x + x, frame.spacing.offset() + y),
            None => Point::new(x, y + self.layout_offset),
        }
    }

    /// Width left to the right of `x`, bounded by the flow container or page.
    pub fn available_width(&self, x: f32) -> f32 {
        let right = match self.flow {
            Some(frame) => frame.x + frame.width,
            None => self.config.page_size.width,
        };
        (right - x).max(0.0)
    }

    /// Page height left below `y`.
    pub fn remaining_height(&self, y: f32) -> f32 {
        (self.config.page_size.height - y).max(0.0)
    }

    /// The frame attributes (alignment, rotation, border, padding) of `node`.
    pub fn frame(&self, node: &MarkupNode, container_rect: Rect) -> ItemFrame {
        let styles = &self.styles;
        let border = styles
            .color(StyleKey::BorderBrush, node)
            .map(|brush| Border {
                brush,
                thickness: styles.length(StyleKey::BorderThickness, node),
            })
            .filter(|b| b.thickness > 0.0);
        ItemFrame {
            container_rect,
            horizontal_alignment: styles.horizontal_alignment(node),
            vertical_alignment: styles.vertical_alignment(node),
            rotation: styles
                .resolve(StyleKey::Rotation, node)
                .and_then(|v| v.as_angle())
                .unwrap_or(0.0),
            background: styles.color(StyleKey::BorderBackground, node),
            border,
            padding: styles.length(StyleKey::TextPadding, node),
            highlight_container: self.config.highlight_container_rects,
        }
    }
}

/// Handles one tag name.
pub trait ElementRenderer: Send + Sync + Debug {
    fn render(
        &self,
        node: &MarkupNode,
        data: &Value,
        ctx: &RenderContext<'_>,
    ) -> Result<RenderOutcome, LayoutError>;

    /// Constant-only pass. Returns the names of the constants registered.
    fn load(&self, _node: &MarkupNode, _constants: &mut ConstantElementDictionary) -> Vec<String> {
        Vec::new()
    }
}

/// Tag name to renderer. Names are case-sensitive.
#[derive(Debug, Clone)]
pub struct ElementRenderDictionary {
    renderers: HashMap<String, Arc<dyn ElementRenderer>>,
}

impl Default for ElementRenderDictionary {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl ElementRenderDictionary {
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    pub fn with_builtins() -> Self {
        let mut dictionary = Self::empty();
        dictionary.register("Text", Arc::new(TextRenderer::new(TextSource::Auto)));
        dictionary.register("Property", Arc::new(TextRenderer::new(TextSource::Binding)));
        dictionary.register("Image", Arc::new(ImageRenderer));
        dictionary.register("Container", Arc::new(FlowContainerRenderer));
        dictionary.register("StackPanel", Arc::new(FlowContainerRenderer));
        dictionary.register("Group", Arc::new(StyleScopeRenderer));
        dictionary.register("Style", Arc::new(StyleScopeRenderer));
        dictionary.register("Constants", Arc::new(ConstantsRenderer));
        dictionary
    }

    /// Registers `renderer` for `name`, returning the renderer it replaces.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        renderer: Arc<dyn ElementRenderer>,
    ) -> Option<Arc<dyn ElementRenderer>> {
        self.renderers.insert(name.into(), renderer)
    }

    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn ElementRenderer>> {
        self.renderers.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn ElementRenderer>> {
        self.renderers.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    /// Registered tag names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
