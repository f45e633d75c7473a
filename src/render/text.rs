//! Text-bearing kinds: `Header`, `Label` and `Link Text`.

use crate::component::{ComponentKind, HeaderProps, LabelProps, LinkTextProps};
use crate::error::NodeBuildError;
use crate::layout::{self, LayoutProps};
use crate::scene::{FontStyle, NativeNode, TextAlign, TextDecoration};

use super::Renderer;

/// Parses `LEFT`/`CENTER`/`RIGHT` in any case.
pub(crate) fn parse_align(value: Option<&str>, fallback: TextAlign) -> TextAlign {
    match value.map(|v| v.trim().to_ascii_uppercase()).as_deref() {
        Some("LEFT") => TextAlign::Left,
        Some("CENTER") => TextAlign::Center,
        Some("RIGHT") => TextAlign::Right,
        _ => fallback,
    }
}

pub(crate) fn parse_weight(value: Option<&str>, fallback: FontStyle) -> FontStyle {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("regular" | "normal") => FontStyle::Regular,
        Some("medium") => FontStyle::Medium,
        Some("bold") => FontStyle::Bold,
        _ => fallback,
    }
}

fn text_node(
    r: &mut Renderer<'_>,
    kind: ComponentKind,
    content: &str,
    size: f32,
    style: FontStyle,
    align: TextAlign,
) -> Result<NativeNode, NodeBuildError> {
    let mut node = r.text(content, size, style, align)?;
    node.name = kind.tag().to_string();
    node.layout_align = layout::select(kind, &LayoutProps::default()).layout_align;
    Ok(node)
}

pub(super) fn header(r: &mut Renderer<'_>, props: &HeaderProps) -> Result<NativeNode, NodeBuildError> {
    text_node(
        r,
        ComponentKind::Header,
        props.text.as_deref().unwrap_or("Header"),
        24.0,
        parse_weight(props.font_weight.as_deref(), FontStyle::Bold),
        parse_align(props.text_align.as_deref(), TextAlign::Center),
    )
}

pub(super) fn label(r: &mut Renderer<'_>, props: &LabelProps) -> Result<NativeNode, NodeBuildError> {
    text_node(
        r,
        ComponentKind::Label,
        props.text.as_deref().unwrap_or("Label"),
        14.0,
        parse_weight(props.font_weight.as_deref(), FontStyle::Regular),
        parse_align(props.text_align.as_deref(), TextAlign::Left),
    )
}

pub(super) fn link(r: &mut Renderer<'_>, props: &LinkTextProps) -> Result<NativeNode, NodeBuildError> {
    let fallback = parse_align(
        r.catalog().default_str(ComponentKind::LinkText, "align"),
        TextAlign::Left,
    );
    let align = parse_align(
        props.align.as_deref().or(props.text_align.as_deref()),
        fallback,
    );
    let link_color = r.config().palette.link;
    let mut node = text_node(
        r,
        ComponentKind::LinkText,
        props.text.as_deref().unwrap_or("Link"),
        14.0,
        parse_weight(props.font_weight.as_deref(), FontStyle::Regular),
        align,
    )?;
    if let Some(text) = node.as_text_mut() {
        text.fill = link_color;
        text.decoration = TextDecoration::Underline;
    }
    Ok(node)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RendererConfig;
    use crate::render::tests::render_one;
    use crate::scene::{LayoutAlign, TextAutoResize};
    use serde_json::json;

    #[test]
    fn header_defaults_to_centered_bold() {
        let node = render_one(json!({ "component": "Header", "props": {} }));
        let text = node.as_text().unwrap();
        assert_eq!(text.characters, "Header");
        assert_eq!(text.align, TextAlign::Center);
        assert_eq!(text.font.style, FontStyle::Bold);
        assert_eq!(text.font_size, 24.0);
        assert_eq!(text.auto_resize, TextAutoResize::Height);
        assert_eq!(node.layout_align, LayoutAlign::Stretch);
    }

    #[test]
    fn label_alignment_and_weight_override() {
        let node = render_one(json!({
            "component": "Label",
            "props": { "text": "Note", "textAlign": "right", "fontWeight": "Bold" }
        }));
        let text = node.as_text().unwrap();
        assert_eq!(text.align, TextAlign::Right);
        assert_eq!(text.font.style, FontStyle::Bold);
        assert_eq!(node.name, "Label");
    }

    #[test]
    fn label_unknown_alignment_falls_back_left() {
        let node = render_one(json!({ "component": "Label", "props": { "textAlign": "JUSTIFY" } }));
        assert_eq!(node.as_text().unwrap().align, TextAlign::Left);
    }

    #[test]
    fn link_is_underlined_and_colored() {
        let node = render_one(json!({
            "component": "Link Text",
            "props": { "text": "Forgot password?", "align": "CENTER" }
        }));
        let text = node.as_text().unwrap();
        assert_eq!(text.decoration, TextDecoration::Underline);
        assert_eq!(text.fill, RendererConfig::default().palette.link);
        assert_eq!(text.align, TextAlign::Center);
        assert_eq!(node.layout_align, LayoutAlign::Inherit);
    }

    #[test]
    fn link_accepts_text_align() {
        let node = render_one(json!({ "component": "Link Text", "props": { "textAlign": "RIGHT" } }));
        let text = node.as_text().unwrap();
        assert_eq!(text.align, TextAlign::Right);
        assert_eq!(text.characters, "Link");
    }
}
