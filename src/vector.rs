//! Vector primitives built from SVG markup.
//!
//! Markup is parsed with usvg and copied into an owned [`VectorNode`] so the
//! renderer can recolor it and the host can read plain path data. usvg
//! resolves CSS, `use` references and shape elements into paths, so the
//! owned tree only needs groups and paths.

use std::fmt::Write as _;

use resvg::usvg::tiny_skia_path::{self, PathSegment};
use resvg::usvg::{self, Node, Options, Tree};
use serde::Serialize;
use tracing::{debug, warn};

use crate::scene::{Color, Size};

// ============================================================================
// Vector tree
// ============================================================================

/// An owned, mutable copy of a parsed SVG document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorNode {
    /// Size the vector is drawn at.
    pub size: Size,
    /// Intrinsic size of the markup; the root transform maps into it.
    pub view_box: Size,
    pub root: VectorElement,
    /// Set for multi-tone artwork whose own colours must survive recoloring.
    #[serde(skip)]
    pub preserve_colors: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "element", rename_all = "camelCase")]
pub enum VectorElement {
    #[serde(rename_all = "camelCase")]
    Group {
        id: String,
        /// `[a, b, c, d, e, f]` as in SVG `matrix()`.
        #[serde(skip_serializing_if = "Option::is_none")]
        transform: Option<[f32; 6]>,
        opacity: f32,
        children: Vec<VectorElement>,
    },
    #[serde(rename_all = "camelCase")]
    Path {
        id: String,
        data: String,
        fill: Option<VectorPaint>,
        stroke: Option<VectorStroke>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VectorPaint {
    Solid { color: Color },
    /// Gradients and patterns; kept opaque and never recolored.
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VectorStroke {
    pub paint: VectorPaint,
    pub width: f32,
}

// ============================================================================
// Construction
// ============================================================================

/// Parses `markup` into a vector drawn at `target_size`.
///
/// Returns `None` if the markup cannot be parsed; the caller decides how to
/// report it.
///
/// # Example
///
/// ```
/// use protoframe::scene::Size;
/// use protoframe::vector::create_from_vector_markup;
///
/// let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M0 0h24v24H0z"/></svg>"#;
/// let vector = create_from_vector_markup(svg, Size::square(18.0)).unwrap();
/// assert_eq!(vector.size, Size::square(18.0));
///
/// assert!(create_from_vector_markup("<svg", Size::square(18.0)).is_none());
/// ```
pub fn create_from_vector_markup(markup: &str, target_size: Size) -> Option<VectorNode> {
    let tree = match Tree::from_str(markup, &Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            warn!(error = %err, "could not parse vector markup");
            return None;
        }
    };
    let view_box = Size::new(tree.size().width(), tree.size().height());
    let root = convert_group(tree.root());
    debug!(
        width = view_box.width,
        height = view_box.height,
        paths = count_paths(&root),
        "parsed vector markup"
    );
    Some(VectorNode {
        size: target_size,
        view_box,
        root,
        preserve_colors: false,
    })
}

fn convert_group(group: &usvg::Group) -> VectorElement {
    let mut children = Vec::with_capacity(group.children().len());
    for node in group.children() {
        match node {
            Node::Group(child) => children.push(convert_group(child)),
            Node::Path(path) if path.is_visible() => children.push(convert_path(path)),
            Node::Path(_) => {}
            Node::Text(text) => children.push(convert_group(text.flattened())),
            Node::Image(_) => debug!("skipping raster image inside vector markup"),
        }
    }
    let transform = group.transform();
    VectorElement::Group {
        id: group.id().to_string(),
        transform: (!transform.is_identity()).then(|| {
            [
                transform.sx,
                transform.ky,
                transform.kx,
                transform.sy,
                transform.tx,
                transform.ty,
            ]
        }),
        opacity: group.opacity().get(),
        children,
    }
}

fn convert_path(path: &usvg::Path) -> VectorElement {
    VectorElement::Path {
        id: path.id().to_string(),
        data: path_data(path.data()),
        fill: path
            .fill()
            .map(|fill| convert_paint(fill.paint(), fill.opacity().get())),
        stroke: path.stroke().map(|stroke| VectorStroke {
            paint: convert_paint(stroke.paint(), stroke.opacity().get()),
            width: stroke.width().get(),
        }),
    }
}

fn convert_paint(paint: &usvg::Paint, opacity: f32) -> VectorPaint {
    match paint {
        usvg::Paint::Color(c) => VectorPaint::Solid {
            color: Color::rgba(
                f32::from(c.red) / 255.0,
                f32::from(c.green) / 255.0,
                f32::from(c.blue) / 255.0,
                opacity,
            ),
        },
        _ => VectorPaint::Other,
    }
}

fn path_data(path: &tiny_skia_path::Path) -> String {
    let mut out = String::new();
    for segment in path.segments() {
        if !out.is_empty() {
            out.push(' ');
        }
        let _ = match segment {
            PathSegment::MoveTo(p) => write!(out, "M {} {}", p.x, p.y),
            PathSegment::LineTo(p) => write!(out, "L {} {}", p.x, p.y),
            PathSegment::QuadTo(c, p) => write!(out, "Q {} {} {} {}", c.x, c.y, p.x, p.y),
            PathSegment::CubicTo(c1, c2, p) => write!(
                out,
                "C {} {} {} {} {} {}",
                c1.x, c1.y, c2.x, c2.y, p.x, p.y
            ),
            PathSegment::Close => write!(out, "Z"),
        };
    }
    out
}

fn count_paths(element: &VectorElement) -> usize {
    match element {
        VectorElement::Group { children, .. } => children.iter().map(count_paths).sum(),
        VectorElement::Path { .. } => 1,
    }
}

// ============================================================================
// Recoloring
// ============================================================================

/// Replaces every solid, non-white fill in the tree with `color`.
///
/// White fills are left alone so highlight regions of two-tone icons keep
/// their shape. Vectors marked with `preserve_colors` are not touched at
/// all. Returns the number of fills replaced.
pub fn recolor(vector: &mut VectorNode, color: Color) -> usize {
    if vector.preserve_colors {
        return 0;
    }
    recolor_element(&mut vector.root, color)
}

fn recolor_element(element: &mut VectorElement, color: Color) -> usize {
    match element {
        VectorElement::Group { children, .. } => children
            .iter_mut()
            .map(|child| recolor_element(child, color))
            .sum(),
        VectorElement::Path {
            fill: Some(VectorPaint::Solid { color: existing }),
            ..
        } if !existing.is_white() => {
            *existing = color;
            1
        }
        VectorElement::Path { .. } => 0,
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl VectorNode {
    /// Number of path elements in the tree.
    pub fn path_count(&self) -> usize {
        count_paths(&self.root)
    }

    /// Solid fill colours in document order; `None` for unfilled paths.
    pub fn fill_colors(&self) -> Vec<Option<Color>> {
        let mut out = Vec::new();
        collect_fills(&self.root, &mut out);
        out
    }

    /// Writes the tree back out as standalone SVG markup.
    pub fn to_svg_markup(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.size.width, self.size.height, self.view_box.width, self.view_box.height
        );
        write_element(&self.root, &mut out);
        out.push_str("</svg>");
        out
    }
}

fn collect_fills(element: &VectorElement, out: &mut Vec<Option<Color>>) {
    match element {
        VectorElement::Group { children, .. } => {
            children.iter().for_each(|child| collect_fills(child, out));
        }
        VectorElement::Path { fill, .. } => out.push(match fill {
            Some(VectorPaint::Solid { color }) => Some(*color),
            _ => None,
        }),
    }
}

fn write_element(element: &VectorElement, out: &mut String) {
    match element {
        VectorElement::Group {
            transform,
            opacity,
            children,
            ..
        } => {
            out.push_str("<g");
            if let Some([a, b, c, d, e, f]) = transform {
                let _ = write!(out, r#" transform="matrix({a} {b} {c} {d} {e} {f})""#);
            }
            if *opacity < 1.0 {
                let _ = write!(out, r#" opacity="{opacity}""#);
            }
            out.push('>');
            children.iter().for_each(|child| write_element(child, out));
            out.push_str("</g>");
        }
        VectorElement::Path {
            data, fill, stroke, ..
        } => {
            let _ = write!(out, r#"<path d="{data}""#);
            write_paint(out, "fill", fill.as_ref());
            if let Some(stroke) = stroke {
                write_paint(out, "stroke", Some(&stroke.paint));
                let _ = write!(out, r#" stroke-width="{}""#, stroke.width);
            }
            out.push_str("/>");
        }
    }
}

fn write_paint(out: &mut String, attr: &str, paint: Option<&VectorPaint>) {
    match paint {
        Some(VectorPaint::Solid { color }) => {
            let _ = write!(out, r#" {attr}="{}""#, color.to_hex());
            if color.a < 1.0 {
                let _ = write!(out, r#" {attr}-opacity="{}""#, color.a);
            }
        }
        // Non-solid paints are not carried over.
        Some(VectorPaint::Other) | None => {
            let _ = write!(out, r#" {attr}="none""#);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
