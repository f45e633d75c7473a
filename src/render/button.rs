//! `Button` and `Social Button`: a filled horizontal pill holding an
//! optional icon followed by a label.

use crate::component::{ButtonProps, ComponentKind, SocialButtonProps};
use crate::error::NodeBuildError;
use crate::layout::{self, LayoutProps};
use crate::scene::{Color, Container, FontStyle, NativeNode, Padding, Paint, Size, TextAlign};

use super::{IconRef, Renderer};

const ICON_SIZE: f32 = 18.0;
const LABEL_SIZE: f32 = 16.0;

struct Pill<'p> {
    kind: ComponentKind,
    label: &'p str,
    width: Option<&'p str>,
    background: Color,
    foreground: Color,
    icon: IconRef<'p>,
    icon_color: Color,
}

fn pill(r: &mut Renderer<'_>, pill: Pill<'_>) -> Result<NativeNode, NodeBuildError> {
    let width = pill
        .width
        .or_else(|| r.catalog().default_str(pill.kind, "width"));
    let decision = layout::select(
        pill.kind,
        &LayoutProps {
            width,
            ..LayoutProps::default()
        },
    );

    let mut frame = Container::new(Size::default());
    frame.apply_layout(&decision);
    frame.padding = Padding::symmetric(16.0, 12.0);
    frame.corner_radius = 8.0;
    frame.fills = vec![Paint::solid(pill.background)];

    if let Some(icon) = r.icon(pill.icon, ICON_SIZE, pill.icon_color) {
        frame.append(icon);
    }
    let mut label = r.text(pill.label, LABEL_SIZE, FontStyle::Medium, TextAlign::Left)?;
    if let Some(text) = label.as_text_mut() {
        text.fill = pill.foreground;
    }
    frame.append(label);

    let mut node = r.frame(format!("{} ({})", pill.label, pill.kind.tag()), frame);
    node.layout_align = decision.layout_align;
    Ok(node)
}

pub(super) fn button(r: &mut Renderer<'_>, props: &ButtonProps) -> Result<NativeNode, NodeBuildError> {
    let config = r.config();
    pill(
        r,
        Pill {
            kind: ComponentKind::Button,
            label: props.label.as_deref().unwrap_or("Button"),
            width: props.width.as_deref(),
            background: config.button_fill(props.color.as_deref()),
            foreground: config.palette.on_fill,
            icon: IconRef::new(props.icon.as_deref(), props.svg_data.as_deref()),
            icon_color: config.palette.on_fill,
        },
    )
}

pub(super) fn social(
    r: &mut Renderer<'_>,
    props: &SocialButtonProps,
) -> Result<NativeNode, NodeBuildError> {
    let provider = props
        .provider
        .as_deref()
        .or(props.icon.as_deref())
        .unwrap_or("google")
        .to_ascii_lowercase();
    let default_label = format!("Continue with {}", capitalize(&provider));
    let label = props.label.as_deref().unwrap_or(&default_label);
    let style = r.config().social_style(&provider);

    // Without an explicit icon the provider's own mark is used, if known.
    let icon_name = match props.icon.as_deref() {
        Some(name) => Some(name),
        None if r.has_icon(&provider) => Some(provider.as_str()),
        None => None,
    };

    pill(
        r,
        Pill {
            kind: ComponentKind::SocialButton,
            label,
            width: props.width.as_deref(),
            background: style.background,
            foreground: style.text,
            icon: IconRef::new(icon_name, props.svg_data.as_deref()),
            icon_color: style.icon,
        },
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RendererConfig;
    use crate::render::tests::render_one;
    use crate::scene::{Alignment, Distribution, LayoutAlign, LayoutAxis, SizingMode};
    use serde_json::json;

    #[test]
    fn button_structure() {
        let node = render_one(json!({
            "component": "Button",
            "props": { "label": "Go", "color": "primary" }
        }));
        let config = RendererConfig::default();
        let frame = node.as_container().unwrap();
        assert_eq!(node.name, "Go (Button)");
        assert_eq!(node.layout_align, LayoutAlign::Stretch);
        assert_eq!(frame.layout, LayoutAxis::Horizontal);
        assert_eq!(frame.primary_align, Distribution::Center);
        assert_eq!(frame.counter_align, Alignment::Center);
        assert_eq!(frame.padding, Padding::symmetric(16.0, 12.0));
        assert_eq!(frame.fills, vec![Paint::solid(config.palette.primary)]);

        assert_eq!(frame.children().len(), 1);
        let label = frame.children()[0].as_text().unwrap();
        assert_eq!(label.characters, "Go");
        assert_eq!(label.fill, config.palette.on_fill);
        assert_eq!(label.font.style, FontStyle::Medium);
    }

    #[test]
    fn hug_button_with_icon() {
        let node = render_one(json!({
            "component": "Button",
            "props": { "label": "Add", "icon": "add", "width": "HUG" }
        }));
        let frame = node.as_container().unwrap();
        assert_eq!(node.layout_align, LayoutAlign::Inherit);
        assert_eq!(frame.primary_sizing, SizingMode::Hug);
        assert_eq!(frame.children().len(), 2);

        let icon = frame.children()[0].as_vector().unwrap();
        assert_eq!(icon.size, Size::square(ICON_SIZE));
        assert!(icon.fill_colors().iter().flatten().all(|c| *c == Color::WHITE));
    }

    #[test]
    fn unknown_icon_name_is_not_an_error() {
        let node = render_one(json!({
            "component": "Button",
            "props": { "label": "Go", "icon": "rocket_launch" }
        }));
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn social_button_uses_provider_style() {
        let node = render_one(json!({ "component": "Social Button", "props": { "provider": "Apple" } }));
        let config = RendererConfig::default();
        let style = config.social_style("apple");
        let frame = node.as_container().unwrap();
        assert_eq!(node.name, "Continue with Apple (Social Button)");
        assert_eq!(frame.fills, vec![Paint::solid(style.background)]);

        let children = frame.children();
        assert_eq!(children.len(), 2);
        assert!(children[0].as_vector().unwrap().preserve_colors);
        assert_eq!(children[1].as_text().unwrap().fill, style.text);
    }

    #[test]
    fn social_brand_icon_keeps_its_colors() {
        let node = render_one(json!({ "component": "Social Button", "props": { "icon": "google" } }));
        let icon = node.children()[0].as_vector().unwrap();
        let colors: Vec<Color> = icon.fill_colors().into_iter().flatten().collect();
        assert!(colors.contains(&Color::WHITE));
        assert!(colors.iter().any(|c| c.b > c.r));
        assert_eq!(node.name, "Continue with Google (Social Button)");
    }

    #[test]
    fn social_button_without_known_provider_icon() {
        let node = render_one(json!({
            "component": "Social Button",
            "props": { "provider": "github", "label": "GitHub" }
        }));
        assert_eq!(node.name, "GitHub (Social Button)");
        assert_eq!(node.children().len(), 1);
        assert_eq!(
            node.as_container().unwrap().fills,
            vec![Paint::solid(RendererConfig::default().social_fallback.background)]
        );
    }

    #[test]
    fn capitalize_handles_empty() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("facebook"), "Facebook");
    }
}
