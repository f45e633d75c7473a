//! Primitive Factory.
//!
//! Builds single host primitives with baseline styling. The factory never
//! attaches anything itself: callers append the returned node to a
//! [`Container`](crate::scene::Container) or keep it as a top-level result.

use std::collections::HashSet;

use resvg::usvg::fontdb::{Database, Family, Query, Weight};
use tracing::{debug, warn};

use crate::error::FontError;
use crate::scene::{
    Alignment, Color, FontName, FontStyle, IdAllocator, NativeNode, NodeKind, Paint, ShapeNode,
    Size, Stroke, TextAlign, TextAutoResize, TextDecoration, TextNode,
};
use crate::vector::{self, VectorNode};

// ============================================================================
// Fonts
// ============================================================================

/// Answers whether a font face can be used for text.
pub trait FontProvider {
    fn is_available(&self, font: &FontName) -> bool;
}

/// A fixed set of available faces.
#[derive(Debug, Clone, Default)]
pub struct StaticFonts {
    faces: HashSet<FontName>,
}

impl StaticFonts {
    pub fn new(faces: impl IntoIterator<Item = FontName>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }

    /// Every style of the given family.
    pub fn family(family: &str) -> Self {
        Self::new(
            [FontStyle::Regular, FontStyle::Medium, FontStyle::Bold].map(|style| FontName {
                family: family.to_string(),
                style,
            }),
        )
    }

    pub fn with(mut self, family: &str, style: FontStyle) -> Self {
        self.faces.insert(FontName {
            family: family.to_string(),
            style,
        });
        self
    }
}

impl FontProvider for StaticFonts {
    fn is_available(&self, font: &FontName) -> bool {
        self.faces.contains(font)
    }
}

/// Faces installed on the system, looked up through fontdb.
pub struct SystemFonts {
    db: Database,
}

impl SystemFonts {
    pub fn load() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        debug!(faces = db.len(), "loaded system fonts");
        Self { db }
    }

    pub fn from_database(db: Database) -> Self {
        Self { db }
    }
}

impl FontProvider for SystemFonts {
    fn is_available(&self, font: &FontName) -> bool {
        let weight = match font.style {
            FontStyle::Regular => Weight::NORMAL,
            FontStyle::Medium => Weight::MEDIUM,
            FontStyle::Bold => Weight::BOLD,
        };
        let query = Query {
            families: &[Family::Name(&font.family)],
            weight,
            ..Query::default()
        };
        // fontdb returns the closest weight; only an exact face counts.
        self.db
            .query(&query)
            .and_then(|id| self.db.face(id))
            .is_some_and(|face| face.weight == weight)
    }
}

/// Picks the first usable face: each family with `style`, then `Regular`.
pub fn resolve_font(
    fonts: &dyn FontProvider,
    families: &[String],
    style: FontStyle,
) -> Result<FontName, FontError> {
    for family in families {
        let mut styles = vec![style];
        if style != FontStyle::Regular {
            styles.push(FontStyle::Regular);
        }
        for candidate in styles {
            let font = FontName {
                family: family.clone(),
                style: candidate,
            };
            if fonts.is_available(&font) {
                if candidate != style {
                    warn!(requested = style.as_str(), font = %font, "falling back to regular style");
                }
                return Ok(font);
            }
        }
        debug!(family = family.as_str(), "font family unavailable");
    }
    Err(FontError::NoFontAvailable {
        requested: match families.first() {
            Some(family) => format!("{family} {}", style.as_str()),
            None => style.as_str().to_string(),
        },
    })
}

// ============================================================================
// Primitives
// ============================================================================

/// Content and typography of a text primitive.
#[derive(Debug, Clone, Copy)]
pub struct TextSpec<'a> {
    pub content: &'a str,
    pub size: f32,
    pub style: FontStyle,
    pub align: TextAlign,
}

/// Creates a black, wrapping text node.
pub fn create_text(
    ids: &mut IdAllocator,
    fonts: &dyn FontProvider,
    families: &[String],
    spec: TextSpec<'_>,
) -> Result<NativeNode, FontError> {
    let font = resolve_font(fonts, families, spec.style)?;
    let text = TextNode {
        characters: spec.content.to_string(),
        font,
        font_size: spec.size,
        fill: Color::BLACK,
        align: spec.align,
        vertical_align: Alignment::Min,
        auto_resize: TextAutoResize::Height,
        decoration: TextDecoration::None,
    };
    Ok(NativeNode::new(ids.next_id(), spec.content, NodeKind::Text(text)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
}

pub fn create_shape(
    ids: &mut IdAllocator,
    kind: ShapeKind,
    size: Size,
    corner_radius: f32,
    fill: Option<Color>,
    stroke: Option<Stroke>,
) -> NativeNode {
    let shape = ShapeNode {
        size,
        corner_radius,
        fills: fill.map(Paint::solid).into_iter().collect(),
        stroke,
    };
    let (name, kind) = match kind {
        ShapeKind::Rectangle => ("Rectangle", NodeKind::Rectangle(shape)),
        ShapeKind::Ellipse => ("Ellipse", NodeKind::Ellipse(shape)),
    };
    NativeNode::new(ids.next_id(), name, kind)
}

/// Parses `markup` into a vector node; `None` on malformed markup.
pub fn create_vector(
    ids: &mut IdAllocator,
    name: &str,
    markup: &str,
    size: Size,
) -> Option<NativeNode> {
    let vector: VectorNode = vector::create_from_vector_markup(markup, size)?;
    Some(NativeNode::new(ids.next_id(), name, NodeKind::Vector(vector)))
}

// ============================================================================
// Tests
// ============================================================================
