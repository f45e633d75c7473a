//! Component Renderer.
//!
//! [`Renderer`] walks a component tree depth-first, in declared order, and
//! builds one native subtree per entry. Failures stay inside the entry that
//! caused them:
//!
//! - an entry without `component`/`props` is skipped and yields `None`;
//! - an unrecognized kind becomes a red `[UNKNOWN: kind]` text;
//! - any [`NodeBuildError`] becomes a red `[ERROR: kind]` text.
//!
//! Everything that went wrong is collected in [`Diagnostics`] so the caller
//! can report it once per request.
//!
//! # Example
//!
//! ```
//! use protoframe::{BuiltinIcons, Catalog, RendererConfig, StaticFonts};
//! use protoframe::render::Renderer;
//! use protoframe::scene::IdAllocator;
//! use serde_json::json;
//!
//! let config = RendererConfig::default();
//! let catalog = Catalog::builtin();
//! let fonts = StaticFonts::family("Inter");
//! let mut ids = IdAllocator::new();
//!
//! let mut renderer = Renderer::new(&config, &catalog, &fonts, &BuiltinIcons, &mut ids);
//! let nodes = renderer
//!     .render_tree(&json!([{ "component": "Label", "props": { "text": "Hi" } }]))
//!     .unwrap();
//! assert_eq!(nodes.len(), 1);
//! assert!(renderer.diagnostics().is_clean());
//! ```

mod button;
mod container;
mod field;
mod media;
mod text;
mod toggle;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::catalog::Catalog;
use crate::component::{Component, RawNode};
use crate::config::RendererConfig;
use crate::error::{FontError, NodeBuildError, StructuralError};
use crate::icons::IconRegistry;
use crate::primitive::{self, FontProvider, ShapeKind, TextSpec};
use crate::scene::{
    Color, Container, FontStyle, IdAllocator, NativeNode, NodeKind, Size, Stroke, TextAlign,
};
use crate::vector;

// ============================================================================
// Diagnostics
// ============================================================================

/// The kinds of trouble reported to the user, at most once each per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FailureClass {
    /// A component failed to build and was replaced by a placeholder.
    NodeBuild,
    /// Vector markup could not be parsed; the icon was left out.
    Vector,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeFailure {
    pub kind: String,
    pub message: String,
}

/// What happened during one render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    /// Components built successfully, at any depth.
    pub built: usize,
    pub failures: Vec<NodeFailure>,
    /// Names of icons whose markup did not parse.
    pub vector_failures: Vec<String>,
    /// Unrecognized kinds; these are neither successes nor failures.
    pub unknown_kinds: Vec<String>,
    /// Entries skipped for missing `component` or `props`.
    pub skipped: usize,
}

impl Diagnostics {
    /// Distinct failure classes, in a stable order.
    pub fn failure_classes(&self) -> Vec<FailureClass> {
        let mut classes = Vec::new();
        if !self.failures.is_empty() {
            classes.push(FailureClass::NodeBuild);
        }
        if !self.vector_failures.is_empty() {
            classes.push(FailureClass::Vector);
        }
        classes
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
            && self.vector_failures.is_empty()
            && self.unknown_kinds.is_empty()
            && self.skipped == 0
    }
}

// ============================================================================
// Renderer
// ============================================================================

/// Icon requested by a component: a registry name, inline markup, or both.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct IconRef<'p> {
    pub name: Option<&'p str>,
    pub markup: Option<&'p str>,
}

impl<'p> IconRef<'p> {
    pub fn new(name: Option<&'p str>, markup: Option<&'p str>) -> Self {
        Self { name, markup }
    }
}

/// Recursive interpreter from component entries to native nodes.
pub struct Renderer<'a> {
    config: &'a RendererConfig,
    catalog: &'a Catalog,
    fonts: &'a dyn FontProvider,
    icons: &'a dyn IconRegistry,
    ids: &'a mut IdAllocator,
    depth: usize,
    diagnostics: Diagnostics,
}

impl<'a> Renderer<'a> {
    pub fn new(
        config: &'a RendererConfig,
        catalog: &'a Catalog,
        fonts: &'a dyn FontProvider,
        icons: &'a dyn IconRegistry,
        ids: &'a mut IdAllocator,
    ) -> Self {
        Self {
            config,
            catalog,
            fonts,
            icons,
            ids,
            depth: 0,
            diagnostics: Diagnostics::default(),
        }
    }

    /// Renders a top-level tree, which must be a JSON array.
    ///
    /// Returns the built nodes in order, skipped entries left out.
    pub fn render_tree(&mut self, input: &Value) -> Result<Vec<NativeNode>, StructuralError> {
        let Some(entries) = input.as_array() else {
            let found = json_type(input);
            error!(found, "render input is not an array");
            return Err(StructuralError::NotASequence { found });
        };
        let nodes: Vec<NativeNode> = self.render(entries).into_iter().flatten().collect();
        info!(
            entries = entries.len(),
            nodes = nodes.len(),
            built = self.diagnostics.built,
            failures = self.diagnostics.failures.len(),
            "rendered component tree"
        );
        Ok(nodes)
    }

    /// Renders a sequence of entries, one output per input.
    pub fn render(&mut self, entries: &[Value]) -> Vec<Option<NativeNode>> {
        entries.iter().map(|entry| self.render_entry(entry)).collect()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    fn render_entry(&mut self, entry: &Value) -> Option<NativeNode> {
        let Some(raw) = RawNode::read(entry) else {
            warn!(depth = self.depth, "skipping entry without component or props");
            self.diagnostics.skipped += 1;
            return None;
        };
        debug!(component = raw.tag, depth = self.depth, "processing component");

        match self.build(&raw) {
            Ok(mut node) => {
                if node.name.is_empty() {
                    node.name = raw.tag.to_string();
                }
                Some(node)
            }
            Err(err) => {
                error!(component = raw.tag, error = %err, "component failed to build");
                self.diagnostics.failures.push(NodeFailure {
                    kind: raw.tag.to_string(),
                    message: err.to_string(),
                });
                self.error_placeholder(raw.tag)
            }
        }
    }

    fn build(&mut self, raw: &RawNode<'_>) -> Result<NativeNode, NodeBuildError> {
        if self.depth > self.config.max_depth {
            return Err(NodeBuildError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }
        let component = Component::parse(raw)?;
        let node = match &component {
            Component::Header(props) => text::header(self, props)?,
            Component::Label(props) => text::label(self, props)?,
            Component::LinkText(props) => text::link(self, props)?,
            Component::Button(props) => button::button(self, props)?,
            Component::SocialButton(props) => button::social(self, props)?,
            Component::TextField(props) => field::text_field(self, props)?,
            Component::Checkbox(props) => toggle::checkbox(self, props)?,
            Component::RadioButton(props) => toggle::radio(self, props)?,
            Component::Switch(props) => toggle::switch(self, props)?,
            Component::Image(props) => media::image(self, props)?,
            Component::ColorSwatch(props) => media::color_swatch(self, props),
            Component::Icon(props) => media::icon(self, props)?,
            Component::Slider(props) => media::slider(self, props),
            Component::Placeholder(props) => media::placeholder(self, props)?,
            Component::Row(nested) => container::row(self, nested),
            Component::Column(nested) => container::column(self, nested),
            Component::Card(nested) => container::card(self, nested),
            Component::Unknown(tag) => {
                warn!(component = *tag, "unknown component kind");
                self.diagnostics.unknown_kinds.push(tag.to_string());
                return Ok(self.unknown_placeholder(tag)?);
            }
        };
        self.diagnostics.built += 1;
        Ok(node)
    }

    /// Renders the children of a container one level deeper, dropping
    /// skipped entries.
    pub(crate) fn render_children(&mut self, children: &[Value]) -> Vec<NativeNode> {
        self.depth += 1;
        let nodes = self.render(children).into_iter().flatten().collect();
        self.depth -= 1;
        nodes
    }

    // ------------------------------------------------------------------------
    // Construction helpers shared by the builders
    // ------------------------------------------------------------------------

    pub(crate) fn config(&self) -> &'a RendererConfig {
        self.config
    }

    pub(crate) fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub(crate) fn text(
        &mut self,
        content: &str,
        size: f32,
        style: FontStyle,
        align: TextAlign,
    ) -> Result<NativeNode, FontError> {
        primitive::create_text(
            self.ids,
            self.fonts,
            &self.config.font_families,
            TextSpec {
                content,
                size,
                style,
                align,
            },
        )
    }

    pub(crate) fn shape(
        &mut self,
        kind: ShapeKind,
        size: Size,
        corner_radius: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    ) -> NativeNode {
        primitive::create_shape(self.ids, kind, size, corner_radius, fill, stroke)
    }

    pub(crate) fn frame(&mut self, name: impl Into<String>, container: Container) -> NativeNode {
        NativeNode::new(self.ids.next_id(), name, NodeKind::Container(container))
    }

    /// Builds a recolored icon, or `None` when there is no markup for it or
    /// the markup does not parse.
    ///
    /// Unparsable markup is recorded as a vector failure; the enclosing
    /// component still builds.
    pub(crate) fn icon(&mut self, icon: IconRef<'_>, size: f32, color: Color) -> Option<NativeNode> {
        match self.build_icon(icon, size, color) {
            Ok(node) => node,
            Err(err) => {
                warn!(error = %err, "icon skipped");
                self.diagnostics
                    .vector_failures
                    .push(icon.name.unwrap_or("Icon").to_string());
                None
            }
        }
    }

    /// Like [`Renderer::icon`], but hands a markup failure back to the
    /// caller instead of recording it.
    ///
    /// Multi-tone registry icons keep their own colours.
    pub(crate) fn build_icon(
        &mut self,
        icon: IconRef<'_>,
        size: f32,
        color: Color,
    ) -> Result<Option<NativeNode>, NodeBuildError> {
        let label = icon.name.unwrap_or("Icon");
        let markup = match (icon.markup, icon.name) {
            (Some(markup), _) => markup,
            (None, Some(name)) => match self.icons.lookup(name) {
                Some(markup) => markup,
                None => {
                    debug!(icon = name, "icon not in registry");
                    return Ok(None);
                }
            },
            (None, None) => return Ok(None),
        };
        let mut node = primitive::create_vector(self.ids, label, markup, Size::square(size))
            .ok_or_else(|| NodeBuildError::InvalidMarkup {
                name: label.to_string(),
            })?;
        if let NodeKind::Vector(vector) = &mut node.kind {
            vector.preserve_colors = icon.name.is_some_and(|name| self.icons.is_multi_tone(name));
            vector::recolor(vector, color);
        }
        Ok(Some(node))
    }

    pub(crate) fn has_icon(&self, name: &str) -> bool {
        self.icons.lookup(name).is_some()
    }

    // ------------------------------------------------------------------------
    // Placeholders
    // ------------------------------------------------------------------------

    fn unknown_placeholder(&mut self, tag: &str) -> Result<NativeNode, FontError> {
        let mut node = self.red_text(&format!("[UNKNOWN: {tag}]"), 16.0, FontStyle::Bold)?;
        node.name = tag.to_string();
        Ok(node)
    }

    fn error_placeholder(&mut self, tag: &str) -> Option<NativeNode> {
        match self.red_text(&format!("[ERROR: {tag}]"), 12.0, FontStyle::Regular) {
            Ok(mut node) => {
                node.name = format!("Error ({tag})");
                Some(node)
            }
            Err(err) => {
                error!(component = tag, error = %err, "could not build error placeholder");
                None
            }
        }
    }

    fn red_text(
        &mut self,
        content: &str,
        size: f32,
        style: FontStyle,
    ) -> Result<NativeNode, FontError> {
        let error_color = self.config.palette.error;
        let mut node = self.text(content, size, style, TextAlign::Left)?;
        if let Some(text) = node.as_text_mut() {
            text.fill = error_color;
        }
        Ok(node)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::icons::BuiltinIcons;
    use crate::primitive::StaticFonts;
    use serde_json::json;

    /// Renders `input` with the default config, Inter fonts and the
    /// built-in icons.
    pub(crate) fn render_with(
        config: &RendererConfig,
        fonts: &StaticFonts,
        input: Value,
    ) -> (Result<Vec<NativeNode>, StructuralError>, Diagnostics) {
        let catalog = Catalog::builtin();
        let mut ids = IdAllocator::new();
        let mut renderer = Renderer::new(config, &catalog, fonts, &BuiltinIcons, &mut ids);
        let result = renderer.render_tree(&input);
        (result, renderer.into_diagnostics())
    }

    pub(crate) fn render_json(input: Value) -> (Vec<NativeNode>, Diagnostics) {
        let (result, diagnostics) = render_with(
            &RendererConfig::default(),
            &StaticFonts::family("Inter"),
            input,
        );
        (result.unwrap(), diagnostics)
    }

    /// Renders a single entry and returns its node.
    pub(crate) fn render_one(entry: Value) -> NativeNode {
        let (mut nodes, _) = render_json(json!([entry]));
        assert_eq!(nodes.len(), 1);
        nodes.remove(0)
    }

    fn texts(node: &NativeNode) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(text) = node.as_text() {
            out.push(text.characters.clone());
        }
        for child in node.children() {
            out.extend(texts(child));
        }
        out
    }

    #[test]
    fn top_level_must_be_an_array() {
        let (result, diagnostics) = render_with(
            &RendererConfig::default(),
            &StaticFonts::family("Inter"),
            json!({ "component": "Header", "props": {} }),
        );
        assert!(matches!(
            result,
            Err(StructuralError::NotASequence { found: "object" })
        ));
        assert_eq!(diagnostics, Diagnostics::default());
    }

    #[test]
    fn skipped_entries_yield_none_in_place() {
        let catalog = Catalog::builtin();
        let config = RendererConfig::default();
        let fonts = StaticFonts::family("Inter");
        let mut ids = IdAllocator::new();
        let mut renderer = Renderer::new(&config, &catalog, &fonts, &BuiltinIcons, &mut ids);
        let entries = vec![
            json!({ "component": "Label", "props": { "text": "a" } }),
            json!({ "component": "Label" }),
            json!(null),
            json!({ "component": "Label", "props": { "text": "b" } }),
        ];
        let out = renderer.render(&entries);
        assert_eq!(out.len(), 4);
        assert!(out[0].is_some() && out[3].is_some());
        assert!(out[1].is_none() && out[2].is_none());
        assert_eq!(renderer.diagnostics().skipped, 2);
    }

    #[test]
    fn unknown_kind_becomes_placeholder() {
        let (nodes, diagnostics) = render_json(json!([
            { "component": "Carousel", "props": {} },
            { "component": "Label", "props": { "text": "after" } }
        ]));
        assert_eq!(nodes.len(), 2);
        let text = nodes[0].as_text().unwrap();
        assert_eq!(text.characters, "[UNKNOWN: Carousel]");
        assert_eq!(text.fill, RendererConfig::default().palette.error);
        assert_eq!(text.font.style, FontStyle::Bold);
        assert_eq!(nodes[0].name, "Carousel");
        assert_eq!(diagnostics.unknown_kinds, vec!["Carousel".to_string()]);
        assert!(diagnostics.failures.is_empty());
        assert_eq!(diagnostics.built, 1);
    }

    #[test]
    fn build_failure_becomes_placeholder() {
        let (nodes, diagnostics) = render_json(json!([
            { "component": "Checkbox", "props": { "checked": "maybe" } },
            { "component": "Label", "props": { "text": "still here" } }
        ]));
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].as_text().unwrap().characters, "[ERROR: Checkbox]");
        assert_eq!(nodes[0].as_text().unwrap().font_size, 12.0);
        assert_eq!(nodes[1].as_text().unwrap().characters, "still here");
        assert_eq!(diagnostics.failures.len(), 1);
        assert_eq!(diagnostics.failures[0].kind, "Checkbox");
        assert_eq!(diagnostics.failure_classes(), vec![FailureClass::NodeBuild]);
    }

    #[test]
    fn containers_keep_child_count_and_order() {
        let (nodes, _) = render_json(json!([{
            "component": "Column",
            "props": { "children": [
                { "component": "Label", "props": { "text": "one" } },
                { "component": "Mystery", "props": {} },
                { "component": "Switch", "props": { "checked": 3 } },
                { "component": "Label", "props": { "text": "four" } }
            ] }
        }]));
        let column = &nodes[0];
        assert_eq!(column.children().len(), 4);
        let first: Vec<String> = column.children().iter().flat_map(texts).collect();
        assert_eq!(
            first,
            vec!["one", "[UNKNOWN: Mystery]", "[ERROR: Switch]", "four"]
        );
    }

    #[test]
    fn depth_guard_stops_runaway_nesting() {
        let mut tree = json!({ "component": "Label", "props": { "text": "leaf" } });
        for _ in 0..5 {
            tree = json!({ "component": "Column", "props": { "children": [tree] } });
        }
        let config = RendererConfig {
            max_depth: 2,
            ..RendererConfig::default()
        };
        let (result, diagnostics) =
            render_with(&config, &StaticFonts::family("Inter"), json!([tree]));
        let nodes = result.unwrap();

        let mut node = &nodes[0];
        for _ in 0..3 {
            assert_eq!(node.children().len(), 1);
            node = &node.children()[0];
        }
        assert_eq!(node.as_text().unwrap().characters, "[ERROR: Column]");
        assert!(diagnostics.failures[0].message.contains("deeper than 2"));
    }

    #[test]
    fn missing_fonts_fail_only_text_nodes() {
        let (result, diagnostics) = render_with(
            &RendererConfig::default(),
            &StaticFonts::default(),
            json!([
                { "component": "Label", "props": { "text": "x" } },
                { "component": "Placeholder", "props": {} }
            ]),
        );
        let nodes = result.unwrap();
        // The label and its placeholder both need a font; the box does not.
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name, "Placeholder");
        assert_eq!(diagnostics.failures.len(), 1);
    }

    #[test]
    fn broken_inline_markup_is_a_vector_failure() {
        let (nodes, diagnostics) = render_json(json!([
            { "component": "Button", "props": { "label": "Go", "icon": "bad", "svgData": "<svg" } }
        ]));
        assert_eq!(nodes.len(), 1);
        assert_eq!(texts(&nodes[0]), vec!["Go"]);
        assert_eq!(nodes[0].children().len(), 1);
        assert_eq!(diagnostics.vector_failures, vec!["bad".to_string()]);
        assert_eq!(diagnostics.failure_classes(), vec![FailureClass::Vector]);
    }

    #[test]
    fn rendering_is_deterministic() {
        let tree = json!([
            { "component": "Header", "props": { "text": "Hi" } },
            { "component": "Row", "props": { "children": [
                { "component": "Button", "props": { "label": "A", "icon": "add" } },
                { "component": "Switch", "props": { "checked": true } }
            ] } }
        ]);
        let (a, _) = render_json(tree.clone());
        let (b, _) = render_json(tree);
        let outline = |nodes: &[NativeNode]| nodes.iter().map(NativeNode::outline).collect::<String>();
        assert_eq!(outline(&a), outline(&b));
    }
}
