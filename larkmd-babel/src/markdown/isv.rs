//! Embedded component (ISV) rendering.
//!
//! Component source content is not retrievable through the document API, so
//! export can only emit documented placeholders. Rendering dispatches on the
//! component type tag through a registry, keeping new component renderers
//! additive: register another implementation instead of growing a match.

use std::collections::HashMap;

use crate::block::Isv;

/// Component type tag for text-drawing (mermaid-style) components.
pub const COMPONENT_TYPE_TEXT_DRAWING: &str = "blk_drawing";

/// Component type tag for timeline components.
pub const COMPONENT_TYPE_TIMELINE: &str = "blk_timeline";

/// Renderer for one embedded component type.
pub trait ComponentRenderer: Send + Sync {
    /// The component type tag this renderer handles.
    fn component_type(&self) -> &str;

    /// Produce the Markdown placeholder for a component instance.
    fn render(&self, isv: &Isv) -> String;
}

/// Registry of component renderers keyed by component type tag.
///
/// Unknown tags fall back to an HTML comment naming the component; that is
/// the documented degradation, not an error.
pub struct ComponentRegistry {
    renderers: HashMap<String, Box<dyn ComponentRenderer>>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        ComponentRegistry {
            renderers: HashMap::new(),
        }
    }

    /// Register a renderer. An existing renderer for the same tag is replaced.
    pub fn register<R: ComponentRenderer + 'static>(&mut self, renderer: R) {
        self.renderers
            .insert(renderer.component_type().to_string(), Box::new(renderer));
    }

    /// Check whether a tag has a dedicated renderer.
    pub fn has(&self, component_type: &str) -> bool {
        self.renderers.contains_key(component_type)
    }

    /// Render a component, falling back to the unknown-component comment.
    pub fn render(&self, isv: &Isv) -> String {
        let tag = isv.component_type_id.as_deref().unwrap_or("");
        match self.renderers.get(tag) {
            Some(renderer) => renderer.render(isv),
            None => format!("<!-- ISV 应用块 {tag}: 内容不可获取 -->"),
        }
    }

    /// A registry with the built-in component renderers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(TextDrawingRenderer);
        registry.register(TimelineRenderer);
        registry
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Text drawings export as an empty mermaid fence; the drawing source is not
/// retrievable, only its presence.
struct TextDrawingRenderer;

impl ComponentRenderer for TextDrawingRenderer {
    fn component_type(&self) -> &str {
        COMPONENT_TYPE_TEXT_DRAWING
    }

    fn render(&self, _isv: &Isv) -> String {
        "```mermaid\n%% 绘图源码不可导出\n```".to_string()
    }
}

/// Timelines export as a marker comment carrying the component ID.
struct TimelineRenderer;

impl ComponentRenderer for TimelineRenderer {
    fn component_type(&self) -> &str {
        COMPONENT_TYPE_TIMELINE
    }

    fn render(&self, isv: &Isv) -> String {
        let id = isv.component_id.as_deref().unwrap_or("");
        format!("<!-- timeline 组件 {id}: 内容不可获取 -->")
    }
}
