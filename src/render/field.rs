//! `Text Field`: optional label above a fixed-height input row.

use crate::component::{ComponentKind, TextFieldProps};
use crate::error::NodeBuildError;
use crate::layout::{self, LayoutProps};
use crate::scene::{
    Alignment, Container, FontStyle, LayoutAlign, LayoutAxis, NativeNode, Padding, Paint, Size,
    TextAlign,
};

use super::{IconRef, Renderer};

const INPUT_HEIGHT: f32 = 48.0;
const ICON_SIZE: f32 = 20.0;

pub(super) fn text_field(
    r: &mut Renderer<'_>,
    props: &TextFieldProps,
) -> Result<NativeNode, NodeBuildError> {
    let palette = &r.config().palette;
    let decision = layout::select(ComponentKind::TextField, &LayoutProps::default());
    let mut field = Container::new(Size::default());
    field.apply_layout(&decision);

    if let Some(label) = props.label.as_deref() {
        let mut node = r.text(label, 14.0, FontStyle::Regular, TextAlign::Left)?;
        node.layout_align = LayoutAlign::Stretch;
        field.append(node);
    }

    let mut input = Container::new(Size::new(100.0, INPUT_HEIGHT));
    input.layout = LayoutAxis::Horizontal;
    input.spacing = 8.0;
    input.padding = Padding::symmetric(12.0, 0.0);
    input.counter_align = Alignment::Center;
    input.corner_radius = 8.0;
    input.fills = vec![Paint::solid(palette.input_fill)];

    let start = IconRef::new(props.icon.as_deref(), props.svg_data.as_deref());
    if let Some(icon) = r.icon(start, ICON_SIZE, palette.field_icon) {
        input.append(icon);
    }

    match props.placeholder.as_deref() {
        Some(placeholder) => {
            let mut node = r.text(placeholder, 16.0, FontStyle::Regular, TextAlign::Left)?;
            if let Some(text) = node.as_text_mut() {
                text.fill = palette.placeholder_text;
                text.vertical_align = Alignment::Center;
            }
            node.name = "Placeholder".into();
            node.layout_align = LayoutAlign::Stretch;
            node.layout_grow = 1.0;
            input.append(node);
        }
        None => {
            let mut spacer = r.frame("Spacer", Container::new(Size::new(1.0, 16.0)));
            spacer.layout_grow = 1.0;
            input.append(spacer);
        }
    }

    let end = IconRef::new(props.end_icon.as_deref(), props.end_svg_data.as_deref());
    if let Some(icon) = r.icon(end, ICON_SIZE, palette.field_icon) {
        input.append(icon);
    }

    let mut input = r.frame("Input Area", input);
    input.layout_align = LayoutAlign::Stretch;
    field.append(input);

    let name = format!("{} (Field)", props.label.as_deref().unwrap_or("TextField"));
    let mut node = r.frame(name, field);
    node.layout_align = decision.layout_align;
    Ok(node)
}

// ============================================================================
// Tests
// ============================================================================
