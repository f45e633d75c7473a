//! Fixed-size visual kinds: `Image`, `ColorSwatch`, `Icon`, `Slider` and
//! `Placeholder`.

use crate::component::{
    ColorSwatchProps, ComponentKind, IconProps, ImageProps, PlaceholderProps, SliderProps,
};
use crate::error::NodeBuildError;
use crate::icons::IMAGE_GLYPH;
use crate::layout::{self, LayoutProps};
use crate::primitive::ShapeKind;
use crate::scene::{
    Color, Container, FontStyle, GradientStop, LayoutAlign, NativeNode, Paint, Size, Stroke,
    TextAlign,
};

use super::{IconRef, Renderer};

/// Share of the smaller image side taken by the placeholder glyph.
const GLYPH_RATIO: f32 = 0.3;

fn number(r: &Renderer<'_>, value: Option<f32>, kind: ComponentKind, prop: &str, fallback: f32) -> f32 {
    value
        .or_else(|| r.catalog().default_f32(kind, prop))
        .unwrap_or(fallback)
}

pub(super) fn image(r: &mut Renderer<'_>, props: &ImageProps) -> Result<NativeNode, NodeBuildError> {
    let kind = ComponentKind::Image;
    let width = number(r, props.width, kind, "width", 100.0);
    let height = number(r, props.height, kind, "height", 100.0);
    let palette = &r.config().palette;
    let decision = layout::select(
        kind,
        &LayoutProps {
            fit: props.fit.as_deref(),
            ..LayoutProps::default()
        },
    );

    let mut frame = Container::new(Size::new(width, height));
    frame.apply_layout(&decision);
    frame.corner_radius = number(r, props.corner_radius, kind, "cornerRadius", 8.0);
    frame.clips_content = true;
    frame.fills = vec![Paint::GradientLinear {
        stops: vec![
            GradientStop {
                position: 0.0,
                color: palette.gradient_start,
            },
            GradientStop {
                position: 1.0,
                color: palette.gradient_end,
            },
        ],
    }];

    let glyph = IconRef::new(Some("Image Glyph"), Some(IMAGE_GLYPH));
    if let Some(icon) = r.icon(glyph, width.min(height) * GLYPH_RATIO, Color::WHITE) {
        frame.append(icon);
    }

    let name = props
        .alt
        .as_deref()
        .or_else(|| r.catalog().default_str(kind, "alt"))
        .unwrap_or("Image")
        .to_string();
    let mut node = r.frame(name, frame);
    node.layout_align = decision.layout_align;
    Ok(node)
}

pub(super) fn color_swatch(r: &mut Renderer<'_>, props: &ColorSwatchProps) -> NativeNode {
    let kind = ComponentKind::ColorSwatch;
    let size = number(r, props.size, kind, "size", 40.0);
    let selected = props.selected.unwrap_or(false);
    let config = r.config();
    let (color, light) = config.swatch_color(props.color.as_deref().unwrap_or("gray"));

    let mut frame = Container::new(Size::square(size));
    frame.corner_radius = match props.shape.as_deref().map(str::to_ascii_lowercase).as_deref() {
        Some("square") => 8.0,
        _ => size / 2.0,
    };
    frame.fills = vec![Paint::solid(color)];
    frame.stroke = if selected {
        Some(Stroke {
            color: config.palette.selection,
            weight: 3.0,
        })
    } else if light {
        Some(Stroke {
            color: config.palette.swatch_border,
            weight: 1.0,
        })
    } else {
        None
    };
    r.frame(kind.tag(), frame)
}

pub(super) fn icon(r: &mut Renderer<'_>, props: &IconProps) -> Result<NativeNode, NodeBuildError> {
    let kind = ComponentKind::Icon;
    let name = props.icon.as_deref().unwrap_or("icon");
    if props.svg_data.is_none() && !r.has_icon(name) {
        return Err(NodeBuildError::MissingIcon {
            name: name.to_string(),
        });
    }
    let size = number(r, props.size, kind, "size", 24.0);
    let color = props
        .color
        .as_deref()
        .and_then(|c| Color::from_hex(c).or_else(|| Color::from_css_name(c)))
        .unwrap_or(r.config().palette.icon);

    let mut node = r
        .build_icon(IconRef::new(Some(name), props.svg_data.as_deref()), size, color)?
        .ok_or_else(|| NodeBuildError::MissingIcon {
            name: name.to_string(),
        })?;
    node.layout_align = layout::select(kind, &LayoutProps::default()).layout_align;
    Ok(node)
}

pub(super) fn slider(r: &mut Renderer<'_>, props: &SliderProps) -> NativeNode {
    let kind = ComponentKind::Slider;
    let value = number(r, props.value, kind, "value", 30.0).clamp(0.0, 100.0);
    let decision = layout::select(kind, &LayoutProps::default());
    let track_color = r.config().palette.toggle_off;

    let mut frame = Container::new(Size::new(100.0, 20.0));
    frame.apply_layout(&decision);

    let mut track = r.shape(
        ShapeKind::Rectangle,
        Size::new(100.0, 8.0),
        4.0,
        Some(track_color),
        None,
    );
    track.name = format!("Track ({value}%)");
    track.layout_grow = 1.0;
    frame.append(track);

    let mut node = r.frame(kind.tag(), frame);
    node.layout_align = decision.layout_align;
    node.layout_grow = 1.0;
    node
}

pub(super) fn placeholder(
    r: &mut Renderer<'_>,
    props: &PlaceholderProps,
) -> Result<NativeNode, NodeBuildError> {
    let kind = ComponentKind::Placeholder;
    let width = number(r, props.width, kind, "width", 100.0);
    let height = number(r, props.height, kind, "height", 100.0);
    let palette = &r.config().palette;
    let decision = layout::select(kind, &LayoutProps::default());

    let mut frame = Container::new(Size::new(width, height));
    frame.fills = vec![Paint::solid(palette.neutral)];
    if let Some(label) = props.label.as_deref() {
        frame.apply_layout(&decision);
        let mut text = r.text(label, 14.0, FontStyle::Regular, TextAlign::Left)?;
        if let Some(t) = text.as_text_mut() {
            t.fill = palette.muted_text;
        }
        frame.append(text);
    }

    let mut node = r.frame(kind.tag(), frame);
    node.layout_align = LayoutAlign::Stretch;
    Ok(node)
}

// ============================================================================
// Tests
// ============================================================================
