//! `Checkbox`, `RadioButton` and `Switch`: a control followed by a label.
//!
//! Overlays (checkmark, dot, thumb) are centred on their control. The
//! checkmark uses auto-layout centering; dot and thumb are placed at explicit
//! offsets inside a control without auto-layout.

use tracing::debug;

use crate::component::{ComponentKind, ToggleProps};
use crate::error::NodeBuildError;
use crate::icons::CHECKMARK;
use crate::layout::{self, LayoutProps};
use crate::primitive::ShapeKind;
use crate::scene::{
    Alignment, Color, Container, Distribution, FontStyle, LayoutAxis, NativeNode, Paint, Point,
    Size, Stroke, TextAlign,
};

use super::{IconRef, Renderer};

const BOX_SIZE: f32 = 20.0;
const CHECK_SIZE: f32 = 16.0;
const RING_SIZE: f32 = 20.0;
const DOT_SIZE: f32 = 8.0;
const TRACK: Size = Size {
    width: 44.0,
    height: 24.0,
};
const THUMB_SIZE: f32 = 18.0;
const THUMB_MARGIN: f32 = 3.0;

/// Horizontal offset of the switch thumb inside its track.
pub(crate) fn thumb_offset(checked: bool) -> f32 {
    if checked {
        TRACK.width - THUMB_SIZE - THUMB_MARGIN
    } else {
        THUMB_MARGIN
    }
}

fn border(r: &Renderer<'_>) -> Option<Stroke> {
    Some(Stroke {
        color: r.config().palette.control_border,
        weight: 2.0,
    })
}

/// Wraps `control` and a label in the shared horizontal row.
fn labeled(
    r: &mut Renderer<'_>,
    kind: ComponentKind,
    control: NativeNode,
    props: &ToggleProps,
    default_label: &str,
) -> Result<NativeNode, NodeBuildError> {
    let decision = layout::select(kind, &LayoutProps::default());
    let mut row = Container::new(Size::default());
    row.apply_layout(&decision);
    row.append(control);

    let label = props.label.as_deref().unwrap_or(default_label);
    row.append(r.text(label, 14.0, FontStyle::Regular, TextAlign::Left)?);
    debug!(
        component = kind.tag(),
        label,
        checked = props.checked.unwrap_or(false),
        "built toggle"
    );

    let mut node = r.frame(format!("{label} ({})", kind.tag()), row);
    node.layout_align = decision.layout_align;
    Ok(node)
}

pub(super) fn checkbox(r: &mut Renderer<'_>, props: &ToggleProps) -> Result<NativeNode, NodeBuildError> {
    let checked = props.checked.unwrap_or(false);
    let palette = &r.config().palette;

    let mut control = Container::new(Size::square(BOX_SIZE));
    control.layout = LayoutAxis::Horizontal;
    control.primary_align = Distribution::Center;
    control.counter_align = Alignment::Center;
    control.corner_radius = 4.0;
    control.stroke = border(r);
    if checked {
        control.fills = vec![Paint::solid(palette.selection)];
        let mark = IconRef::new(Some("Checkmark"), Some(CHECKMARK));
        if let Some(mark) = r.icon(mark, CHECK_SIZE, palette.on_fill) {
            control.append(mark);
        }
    } else {
        control.fills = vec![Paint::solid(Color::WHITE)];
    }
    let control = r.frame("Box", control);
    labeled(r, ComponentKind::Checkbox, control, props, "Checkbox")
}

pub(super) fn radio(r: &mut Renderer<'_>, props: &ToggleProps) -> Result<NativeNode, NodeBuildError> {
    let checked = props.checked.unwrap_or(false);
    let palette = &r.config().palette;

    let mut ring = Container::new(Size::square(RING_SIZE));
    ring.corner_radius = RING_SIZE / 2.0;
    ring.stroke = border(r);
    ring.fills = vec![Paint::solid(Color::WHITE)];
    if checked {
        let mut dot = r.shape(
            ShapeKind::Ellipse,
            Size::square(DOT_SIZE),
            0.0,
            Some(palette.selection),
            None,
        );
        let inset = (RING_SIZE - DOT_SIZE) / 2.0;
        dot.name = "Dot".into();
        dot.position = Some(Point::new(inset, inset));
        ring.append(dot);
    }
    if let Some(group) = props.group_name.as_deref() {
        debug!(group, "radio button group");
    }
    let ring = r.frame("Circle", ring);
    labeled(r, ComponentKind::RadioButton, ring, props, "Radio")
}

pub(super) fn switch(r: &mut Renderer<'_>, props: &ToggleProps) -> Result<NativeNode, NodeBuildError> {
    let checked = props.checked.unwrap_or(false);
    let palette = &r.config().palette;

    let mut track = Container::new(TRACK);
    track.corner_radius = TRACK.height / 2.0;
    track.fills = vec![Paint::solid(if checked {
        palette.selection
    } else {
        palette.toggle_off
    })];

    let mut thumb = r.shape(
        ShapeKind::Ellipse,
        Size::square(THUMB_SIZE),
        0.0,
        Some(Color::WHITE),
        None,
    );
    thumb.name = "Thumb".into();
    thumb.position = Some(Point::new(
        thumb_offset(checked),
        (TRACK.height - THUMB_SIZE) / 2.0,
    ));
    track.append(thumb);

    let track = r.frame("Track", track);
    labeled(r, ComponentKind::Switch, track, props, "Switch")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RendererConfig;
    use crate::render::tests::render_one;
    use crate::scene::LayoutAlign;
    use serde_json::json;

    fn control(entry: serde_json::Value) -> NativeNode {
        let node = render_one(entry);
        assert_eq!(node.children().len(), 2);
        node.children()[0].clone()
    }

    fn center_x(parent: Size, child: &NativeNode) -> (f32, f32) {
        let size = child.as_shape().unwrap().size;
        let at = child.position.unwrap();
        (parent.width / 2.0, at.x + size.width / 2.0)
    }

    #[test]
    fn switch_thumb_bounds() {
        assert_eq!(thumb_offset(true), 23.0);
        assert_eq!(thumb_offset(false), 3.0);

        let on = control(json!({ "component": "Switch", "props": { "checked": true } }));
        let thumb = &on.children()[0];
        assert_eq!(thumb.position, Some(Point::new(23.0, 3.0)));
        assert_eq!(
            on.as_container().unwrap().fills,
            vec![Paint::solid(RendererConfig::default().palette.selection)]
        );

        let off = control(json!({ "component": "Switch", "props": { "checked": false } }));
        assert_eq!(off.children()[0].position, Some(Point::new(3.0, 3.0)));
    }

    #[test]
    fn radio_dot_is_centered() {
        let ring = control(json!({ "component": "RadioButton", "props": { "checked": true, "label": "A" } }));
        assert_eq!(ring.name, "Circle");
        assert_eq!(ring.as_container().unwrap().layout, LayoutAxis::None);
        let dot = &ring.children()[0];
        let (expected, actual) = center_x(Size::square(RING_SIZE), dot);
        assert_eq!(expected, actual);
        assert_eq!(dot.position.unwrap().y + DOT_SIZE / 2.0, RING_SIZE / 2.0);

        let empty = control(json!({ "component": "RadioButton", "props": {} }));
        assert!(empty.children().is_empty());
    }

    #[test]
    fn checkbox_checkmark_only_when_checked() {
        let checked = control(json!({ "component": "Checkbox", "props": { "checked": true } }));
        let boxed = checked.as_container().unwrap();
        assert_eq!(boxed.primary_align, Distribution::Center);
        assert_eq!(boxed.counter_align, Alignment::Center);
        assert_eq!(boxed.children().len(), 1);
        assert_eq!(boxed.children()[0].as_vector().unwrap().size, Size::square(CHECK_SIZE));

        let unchecked = control(json!({ "component": "Checkbox", "props": {} }));
        assert!(unchecked.children().is_empty());
        assert_eq!(
            unchecked.as_container().unwrap().fills,
            vec![Paint::solid(Color::WHITE)]
        );
    }

    #[test]
    fn toggle_row_layout_and_label() {
        let node = render_one(json!({ "component": "Checkbox", "props": { "label": "I agree" } }));
        assert_eq!(node.name, "I agree (Checkbox)");
        assert_eq!(node.layout_align, LayoutAlign::Inherit);
        let row = node.as_container().unwrap();
        assert_eq!(row.layout, LayoutAxis::Horizontal);
        assert_eq!(row.counter_align, Alignment::Center);
        assert_eq!(row.spacing, 8.0);
        assert_eq!(row.children()[1].as_text().unwrap().characters, "I agree");
    }
}
