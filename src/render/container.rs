//! `Row`, `Column` and `Card`: auto-layout containers around rendered
//! children.

use tracing::warn;

use crate::component::{CardProps, ColumnProps, ComponentKind, Nested, RowProps};
use crate::layout::{self, LayoutProps};
use crate::scene::{Container, NativeNode, Padding, Paint, Point, Shadow, Size, Stroke};

use super::Renderer;

const CARD_PADDING: f32 = 16.0;
const CARD_RADIUS: f32 = 12.0;

/// Builds the container for `kind` and fills it with the rendered children.
fn assemble<F>(
    r: &mut Renderer<'_>,
    kind: ComponentKind,
    props: LayoutProps<'_>,
    children: &[serde_json::Value],
    style: F,
) -> NativeNode
where
    F: FnOnce(&mut Container),
{
    let decision = layout::select(kind, &props);
    let mut frame = Container::new(Size::default());
    frame.apply_layout(&decision);
    style(&mut frame);

    if children.is_empty() {
        warn!(component = kind.tag(), "container has no children");
    }
    for child in r.render_children(children) {
        frame.append(child);
    }

    let mut node = r.frame(kind.tag(), frame);
    node.layout_align = decision.layout_align;
    node
}

pub(super) fn row(r: &mut Renderer<'_>, nested: &Nested<'_, RowProps>) -> NativeNode {
    let props = &nested.props;
    let layout = LayoutProps {
        alignment: props.alignment.as_deref(),
        justify: props.justify.as_deref(),
        spacing: props.spacing,
        ..LayoutProps::default()
    };
    assemble(r, ComponentKind::Row, layout, nested.children, |_| {})
}

pub(super) fn column(r: &mut Renderer<'_>, nested: &Nested<'_, ColumnProps>) -> NativeNode {
    let props = &nested.props;
    let layout = LayoutProps {
        alignment: props.alignment.as_deref(),
        spacing: props.spacing,
        ..LayoutProps::default()
    };
    assemble(r, ComponentKind::Column, layout, nested.children, |_| {})
}

pub(super) fn card(r: &mut Renderer<'_>, nested: &Nested<'_, CardProps>) -> NativeNode {
    let props = &nested.props;
    let config = r.config();
    let palette = &config.palette;
    let layout = LayoutProps {
        alignment: props.alignment.as_deref(),
        spacing: props.spacing,
        ..LayoutProps::default()
    };
    assemble(r, ComponentKind::Card, layout, nested.children, |frame| {
        frame.padding = Padding::uniform(props.padding.unwrap_or(CARD_PADDING));
        frame.corner_radius = CARD_RADIUS;
        frame.fills = vec![Paint::solid(
            config.card_background(props.background_color.as_deref()),
        )];
        if props.has_border.unwrap_or(true) {
            frame.stroke = Some(Stroke {
                color: palette.card_border,
                weight: 1.0,
            });
        }
        if props.has_shadow.unwrap_or(true) {
            frame.shadow = Some(Shadow {
                color: palette.shadow,
                offset: Point::new(0.0, 2.0),
                radius: 8.0,
            });
        }
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RendererConfig;
    use crate::render::tests::{render_json, render_one};
    use crate::scene::{Alignment, Distribution, LayoutAlign, LayoutAxis, SizingMode};
    use serde_json::json;

    #[test]
    fn row_layout_from_props() {
        let node = render_one(json!({
            "component": "Row",
            "props": {
                "spacing": 4,
                "alignment": "BOTTOM",
                "justify": "SPACE_BETWEEN",
                "children": [
                    { "component": "Label", "props": { "text": "a" } },
                    { "component": "Label", "props": { "text": "b" } }
                ]
            }
        }));
        assert_eq!(node.name, "Row");
        assert_eq!(node.layout_align, LayoutAlign::Stretch);
        let frame = node.as_container().unwrap();
        assert_eq!(frame.layout, LayoutAxis::Horizontal);
        assert_eq!(frame.primary_sizing, SizingMode::Fill);
        assert_eq!(frame.primary_align, Distribution::SpaceBetween);
        assert_eq!(frame.counter_align, Alignment::Max);
        assert_eq!(frame.spacing, 4.0);
        assert_eq!(frame.children().len(), 2);
    }

    #[test]
    fn row_without_children_prop_is_empty() {
        let (nodes, diagnostics) = render_json(json!([{ "component": "Row", "props": {} }]));
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name, "Row");
        assert_eq!(nodes[0].layout_align, LayoutAlign::Stretch);
        let frame = nodes[0].as_container().unwrap();
        assert!(frame.children().is_empty());
        assert_eq!(frame.layout, LayoutAxis::Horizontal);
        assert_eq!(frame.primary_sizing, SizingMode::Fill);
        assert_eq!(frame.primary_align, Distribution::Min);
        assert_eq!(frame.counter_align, Alignment::Center);
        assert_eq!(frame.spacing, 8.0);
        assert_eq!(diagnostics.built, 1);
        assert!(diagnostics.is_clean());
    }

    #[test]
    fn column_defaults_and_zero_spacing() {
        let node = render_one(json!({
            "component": "Column",
            "props": { "spacing": 0, "children": [] }
        }));
        let frame = node.as_container().unwrap();
        assert_eq!(frame.layout, LayoutAxis::Vertical);
        assert_eq!(frame.counter_sizing, SizingMode::Fill);
        assert_eq!(frame.counter_align, Alignment::Min);
        assert_eq!(frame.spacing, 0.0);
        assert!(frame.children().is_empty());
    }

    #[test]
    fn card_styling() {
        let config = RendererConfig::default();
        let node = render_one(json!({
            "component": "Card",
            "props": {
                "backgroundColor": "dark",
                "children": [{ "component": "Label", "props": { "text": "inside" } }]
            }
        }));
        assert_eq!(node.name, "Card");
        let frame = node.as_container().unwrap();
        assert_eq!(frame.padding, Padding::uniform(16.0));
        assert_eq!(frame.spacing, 12.0);
        assert_eq!(frame.corner_radius, 12.0);
        assert_eq!(frame.fills, vec![Paint::solid(config.palette.card_dark)]);
        assert_eq!(frame.stroke.unwrap().color, config.palette.card_border);
        assert_eq!(frame.shadow.unwrap().offset, Point::new(0.0, 2.0));
    }

    #[test]
    fn card_without_border_or_shadow() {
        let node = render_one(json!({
            "component": "Card",
            "props": { "padding": 0, "hasBorder": false, "hasShadow": false, "children": [] }
        }));
        let frame = node.as_container().unwrap();
        assert_eq!(frame.padding, Padding::uniform(0.0));
        assert!(frame.stroke.is_none());
        assert!(frame.shadow.is_none());
        assert_eq!(
            frame.fills,
            vec![Paint::solid(RendererConfig::default().palette.card_white)]
        );
    }

    #[test]
    fn nested_containers_count_every_built_node() {
        let (nodes, diagnostics) = render_json(json!([{
            "component": "Card",
            "props": { "children": [
                { "component": "Row", "props": { "children": [
                    { "component": "Label", "props": { "text": "x" } }
                ] } }
            ] }
        }]));
        assert_eq!(nodes.len(), 1);
        assert_eq!(diagnostics.built, 3);
        assert!(diagnostics.is_clean());
    }
}
