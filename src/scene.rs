//! Native node model produced by the renderer.
//!
//! This module provides the closed set of host primitives (text, rectangle,
//! ellipse, vector, container) together with the paint, stroke and layout
//! vocabulary they share. A [`Container`] exclusively owns its children, so
//! a node always belongs to exactly one parent.

use std::fmt::{self, Display, Formatter, Write as _};

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::layout::LayoutDecision;
use crate::vector::VectorNode;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of a native node, unique within one [`IdAllocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(u64);

impl NodeId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out monotonically increasing [`NodeId`]s.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> NodeId {
        self.next += 1;
        NodeId(self.next)
    }
}

// ============================================================================
// Geometry and Paint
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn square(side: f32) -> Self {
        Self::new(side, side)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An sRGB colour with channels in `0.0..=1.0`, as the host expects them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns true only for pure white; near-white colours are not white.
    pub fn is_white(&self) -> bool {
        self.r >= 1.0 && self.g >= 1.0 && self.b >= 1.0
    }

    /// Parses `#rrggbb`, `rrggbb` or the three digit short form.
    pub fn from_hex(hex: &str) -> Option<Self> {
        hex.trim().parse::<Srgb<u8>>().ok().map(Self::from)
    }

    /// Looks up a CSS colour keyword such as `teal` or `salmon`.
    pub fn from_css_name(name: &str) -> Option<Self> {
        palette::named::from_str(&name.trim().to_ascii_lowercase()).map(Self::from)
    }

    pub fn to_hex(&self) -> String {
        let rgb: Srgb<u8> = Srgb::new(self.r, self.g, self.b).into_format();
        format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
    }
}

impl From<Srgb<u8>> for Color {
    fn from(rgb: Srgb<u8>) -> Self {
        let rgb: Srgb<f32> = rgb.into_format();
        Self::rgb(rgb.red, rgb.green, rgb.blue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    pub position: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid { color: Color },
    GradientLinear { stops: Vec<GradientStop> },
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Self::Solid { color }
    }

    pub fn solid_color(&self) -> Option<Color> {
        match self {
            Self::Solid { color } => Some(*color),
            Self::GradientLinear { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    pub weight: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadow {
    pub color: Color,
    pub offset: Point,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub fn uniform(value: f32) -> Self {
        Self::symmetric(value, value)
    }

    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

// ============================================================================
// Layout vocabulary
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutAxis {
    /// Children are placed at explicit positions.
    #[default]
    None,
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SizingMode {
    #[default]
    Fixed,
    Hug,
    Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Alignment {
    #[default]
    Min,
    Center,
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Distribution {
    #[default]
    Min,
    Center,
    Max,
    SpaceBetween,
}

/// How a node sits on its parent's counter axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutAlign {
    #[default]
    Inherit,
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAutoResize {
    None,
    /// Width is given by the parent, the box grows downwards (wrapping).
    #[default]
    Height,
    WidthAndHeight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum FontStyle {
    #[default]
    Regular,
    Medium,
    Bold,
}

impl FontStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Medium => "Medium",
            Self::Bold => "Bold",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FontName {
    pub family: String,
    pub style: FontStyle,
}

impl Display for FontName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.style.as_str())
    }
}

// ============================================================================
// Nodes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    pub characters: String,
    pub font: FontName,
    pub font_size: f32,
    pub fill: Color,
    pub align: TextAlign,
    pub vertical_align: Alignment,
    pub auto_resize: TextAutoResize,
    pub decoration: TextDecoration,
}

/// Geometry shared by rectangles and ellipses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeNode {
    pub size: Size,
    pub corner_radius: f32,
    pub fills: Vec<Paint>,
    pub stroke: Option<Stroke>,
}

/// A frame owning an ordered list of children and applying auto-layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub size: Size,
    pub layout: LayoutAxis,
    pub primary_sizing: SizingMode,
    pub counter_sizing: SizingMode,
    pub primary_align: Distribution,
    pub counter_align: Alignment,
    pub spacing: f32,
    pub padding: Padding,
    pub corner_radius: f32,
    pub fills: Vec<Paint>,
    pub stroke: Option<Stroke>,
    pub shadow: Option<Shadow>,
    pub clips_content: bool,
    children: Vec<NativeNode>,
}

impl Container {
    /// A fixed-size frame without auto-layout, fills or decoration.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            layout: LayoutAxis::None,
            primary_sizing: SizingMode::Fixed,
            counter_sizing: SizingMode::Fixed,
            primary_align: Distribution::Min,
            counter_align: Alignment::Min,
            spacing: 0.0,
            padding: Padding::default(),
            corner_radius: 0.0,
            fills: Vec::new(),
            stroke: None,
            shadow: None,
            clips_content: false,
            children: Vec::new(),
        }
    }

    /// Copies the auto-layout part of a decision onto this frame.
    pub fn apply_layout(&mut self, decision: &LayoutDecision) {
        self.layout = decision.axis;
        self.primary_sizing = decision.primary_sizing;
        self.counter_sizing = decision.counter_sizing;
        self.primary_align = decision.primary_align;
        self.counter_align = decision.counter_align;
        self.spacing = decision.spacing;
    }

    /// Appends a child, taking ownership of it.
    pub fn append(&mut self, child: NativeNode) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[NativeNode] {
        &self.children
    }

    /// Removes the child with the given id, returning it.
    pub fn remove_child(&mut self, id: NodeId) -> Option<NativeNode> {
        let index = self.children.iter().position(|c| c.id == id)?;
        Some(self.children.remove(index))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Text(TextNode),
    Rectangle(ShapeNode),
    Ellipse(ShapeNode),
    Vector(VectorNode),
    Container(Container),
}

impl NodeKind {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Text(_) => "TEXT",
            Self::Rectangle(_) => "RECTANGLE",
            Self::Ellipse(_) => "ELLIPSE",
            Self::Vector(_) => "VECTOR",
            Self::Container(_) => "CONTAINER",
        }
    }
}

/// A host primitive plus the properties every node carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeNode {
    pub id: NodeId,
    pub name: String,
    pub layout_align: LayoutAlign,
    pub layout_grow: f32,
    /// Explicit offset inside a parent without auto-layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl NativeNode {
    pub fn new(id: NodeId, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id,
            name: name.into(),
            layout_align: LayoutAlign::Inherit,
            layout_grow: 0.0,
            position: None,
            kind,
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match &self.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextNode> {
        match &mut self.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match &self.kind {
            NodeKind::Container(container) => Some(container),
            _ => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match &mut self.kind {
            NodeKind::Container(container) => Some(container),
            _ => None,
        }
    }

    pub fn as_shape(&self) -> Option<&ShapeNode> {
        match &self.kind {
            NodeKind::Rectangle(shape) | NodeKind::Ellipse(shape) => Some(shape),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&VectorNode> {
        match &self.kind {
            NodeKind::Vector(vector) => Some(vector),
            _ => None,
        }
    }

    /// Direct children; empty for anything but containers.
    pub fn children(&self) -> &[NativeNode] {
        self.as_container().map(Container::children).unwrap_or(&[])
    }

    /// Finds the first descendant (or self) with the given name, depth first.
    pub fn find_by_name(&self, name: &str) -> Option<&NativeNode> {
        if self.name == name {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find_by_name(name))
    }

    /// Renders an indented, id-free outline of the subtree.
    ///
    /// Two trees with the same outline have the same node kinds, names,
    /// text content and layout settings in the same order.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, 0);
        out
    }

    fn write_outline(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}{} \"{}\"", self.kind.tag(), self.name);
        if self.layout_align == LayoutAlign::Stretch {
            out.push_str(" stretch");
        }
        match &self.kind {
            NodeKind::Text(text) => {
                let _ = write!(out, " {:?} {:?}", text.characters, text.align);
            }
            NodeKind::Container(c) => {
                let _ = write!(
                    out,
                    " {:?} {:?}/{:?} {:?}/{:?} spacing={}",
                    c.layout,
                    c.primary_sizing,
                    c.counter_sizing,
                    c.primary_align,
                    c.counter_align,
                    c.spacing
                );
            }
            _ => {}
        }
        if let Some(p) = self.position {
            let _ = write!(out, " at ({}, {})", p.x, p.y);
        }
        out.push('\n');
        for child in self.children() {
            child.write_outline(out, depth + 1);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
