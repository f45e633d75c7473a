//! Layout Mode Selector.
//!
//! A pure mapping from a component kind and its declarative layout props to
//! the auto-layout settings of the container that kind builds. Nothing here
//! touches nodes; builders apply the result with
//! [`Container::apply_layout`](crate::scene::Container::apply_layout).

use crate::component::ComponentKind;
use crate::scene::{Alignment, Distribution, LayoutAlign, LayoutAxis, SizingMode};

const DEFAULT_SPACING: f32 = 8.0;
const CARD_SPACING: f32 = 12.0;

/// Auto-layout settings for one container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutDecision {
    pub axis: LayoutAxis,
    pub primary_sizing: SizingMode,
    pub counter_sizing: SizingMode,
    pub primary_align: Distribution,
    pub counter_align: Alignment,
    pub spacing: f32,
    /// How the container itself sits in its parent.
    pub layout_align: LayoutAlign,
}

impl Default for LayoutDecision {
    fn default() -> Self {
        Self {
            axis: LayoutAxis::None,
            primary_sizing: SizingMode::Fixed,
            counter_sizing: SizingMode::Fixed,
            primary_align: Distribution::Min,
            counter_align: Alignment::Min,
            spacing: 0.0,
            layout_align: LayoutAlign::Inherit,
        }
    }
}

/// The layout-relevant subset of a component's props, as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutProps<'a> {
    pub alignment: Option<&'a str>,
    pub justify: Option<&'a str>,
    pub width: Option<&'a str>,
    pub fit: Option<&'a str>,
    pub spacing: Option<f32>,
}

/// Which counter axis an alignment value applies to.
///
/// Rows align children vertically and accept `TOP`/`BOTTOM`; columns align
/// horizontally and accept `LEFT`/`RIGHT`. The fallback differs as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossAxis {
    Vertical,
    Horizontal,
}

/// `FULL` stretches across the parent, `HUG` wraps the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthMode {
    Full,
    Hug,
}

impl WidthMode {
    /// Anything other than `FULL` hugs; absent means `FULL`.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::to_ascii_uppercase).as_deref() {
            None | Some("FULL") => Self::Full,
            Some(_) => Self::Hug,
        }
    }
}

/// Collapses an alignment value and its synonyms onto `MIN`/`CENTER`/`MAX`.
///
/// Absent or unrecognized values fall back to `CENTER` on a vertical
/// counter axis and to `MIN` on a horizontal one.
pub fn normalize_alignment(value: Option<&str>, axis: CrossAxis) -> Alignment {
    let fallback = match axis {
        CrossAxis::Vertical => Alignment::Center,
        CrossAxis::Horizontal => Alignment::Min,
    };
    let Some(value) = value else {
        return fallback;
    };
    match (value.trim().to_ascii_uppercase().as_str(), axis) {
        ("MIN", _) => Alignment::Min,
        ("CENTER", _) => Alignment::Center,
        ("MAX", _) => Alignment::Max,
        ("TOP", CrossAxis::Vertical) | ("LEFT", CrossAxis::Horizontal) => Alignment::Min,
        ("BOTTOM", CrossAxis::Vertical) | ("RIGHT", CrossAxis::Horizontal) => Alignment::Max,
        _ => fallback,
    }
}

/// Maps a `justify` value onto the primary-axis distribution.
pub fn normalize_justify(value: Option<&str>) -> Distribution {
    match value.map(|v| v.trim().to_ascii_uppercase()).as_deref() {
        Some("START" | "MIN") => Distribution::Min,
        Some("END" | "MAX") => Distribution::Max,
        Some("CENTER") => Distribution::Center,
        Some("SPACE_BETWEEN") => Distribution::SpaceBetween,
        _ => Distribution::Min,
    }
}

/// Computes the layout of the container built for `kind`.
///
/// Kinds that do not build an auto-layout container (plain text, icons,
/// swatches) get the default decision apart from how they sit in the parent.
pub fn select(kind: ComponentKind, props: &LayoutProps<'_>) -> LayoutDecision {
    let spacing = |default: f32| props.spacing.unwrap_or(default);
    match kind {
        ComponentKind::Row => LayoutDecision {
            axis: LayoutAxis::Horizontal,
            primary_sizing: SizingMode::Fill,
            counter_sizing: SizingMode::Hug,
            primary_align: normalize_justify(props.justify),
            counter_align: normalize_alignment(props.alignment, CrossAxis::Vertical),
            spacing: spacing(DEFAULT_SPACING),
            layout_align: LayoutAlign::Stretch,
        },
        ComponentKind::Column => LayoutDecision {
            axis: LayoutAxis::Vertical,
            primary_sizing: SizingMode::Hug,
            counter_sizing: SizingMode::Fill,
            primary_align: Distribution::Min,
            counter_align: normalize_alignment(props.alignment, CrossAxis::Horizontal),
            spacing: spacing(DEFAULT_SPACING),
            layout_align: LayoutAlign::Stretch,
        },
        ComponentKind::Card => LayoutDecision {
            axis: LayoutAxis::Vertical,
            primary_sizing: SizingMode::Hug,
            counter_sizing: SizingMode::Fill,
            primary_align: Distribution::Min,
            counter_align: normalize_alignment(props.alignment, CrossAxis::Horizontal),
            spacing: spacing(CARD_SPACING),
            layout_align: LayoutAlign::Stretch,
        },
        ComponentKind::Button | ComponentKind::SocialButton => {
            let (primary_sizing, primary_align, layout_align) = match WidthMode::parse(props.width)
            {
                WidthMode::Full => (SizingMode::Fill, Distribution::Center, LayoutAlign::Stretch),
                WidthMode::Hug => (SizingMode::Hug, Distribution::Min, LayoutAlign::Inherit),
            };
            LayoutDecision {
                axis: LayoutAxis::Horizontal,
                primary_sizing,
                counter_sizing: SizingMode::Hug,
                primary_align,
                counter_align: Alignment::Center,
                spacing: DEFAULT_SPACING,
                layout_align,
            }
        }
        ComponentKind::TextField => LayoutDecision {
            axis: LayoutAxis::Vertical,
            primary_sizing: SizingMode::Hug,
            counter_sizing: SizingMode::Fill,
            spacing: DEFAULT_SPACING,
            layout_align: LayoutAlign::Stretch,
            ..LayoutDecision::default()
        },
        ComponentKind::Checkbox | ComponentKind::RadioButton | ComponentKind::Switch => {
            LayoutDecision {
                axis: LayoutAxis::Horizontal,
                primary_sizing: SizingMode::Hug,
                counter_sizing: SizingMode::Hug,
                primary_align: Distribution::Min,
                counter_align: Alignment::Center,
                spacing: DEFAULT_SPACING,
                layout_align: LayoutAlign::Inherit,
            }
        }
        ComponentKind::Image => {
            let layout_align = match props.fit.map(str::to_ascii_uppercase).as_deref() {
                None | Some("FILL") => LayoutAlign::Stretch,
                Some(_) => LayoutAlign::Inherit,
            };
            LayoutDecision {
                axis: LayoutAxis::Horizontal,
                primary_align: Distribution::Center,
                counter_align: Alignment::Center,
                layout_align,
                ..LayoutDecision::default()
            }
        }
        ComponentKind::Placeholder => LayoutDecision {
            axis: LayoutAxis::Horizontal,
            primary_align: Distribution::Center,
            counter_align: Alignment::Center,
            layout_align: LayoutAlign::Stretch,
            ..LayoutDecision::default()
        },
        ComponentKind::Slider => LayoutDecision {
            axis: LayoutAxis::Horizontal,
            primary_sizing: SizingMode::Fill,
            counter_align: Alignment::Center,
            layout_align: LayoutAlign::Stretch,
            ..LayoutDecision::default()
        },
        ComponentKind::Header | ComponentKind::Label => LayoutDecision {
            layout_align: LayoutAlign::Stretch,
            ..LayoutDecision::default()
        },
        ComponentKind::LinkText | ComponentKind::ColorSwatch | ComponentKind::Icon => {
            LayoutDecision::default()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn row(alignment: Option<&str>, justify: Option<&str>) -> LayoutDecision {
        select(
            ComponentKind::Row,
            &LayoutProps {
                alignment,
                justify,
                ..LayoutProps::default()
            },
        )
    }

    #[test]
    fn row_alignment_synonyms() {
        assert_eq!(row(Some("TOP"), None).counter_align, Alignment::Min);
        assert_eq!(row(Some("BOTTOM"), None).counter_align, Alignment::Max);
        assert_eq!(row(Some("max"), None).counter_align, Alignment::Max);
        assert_eq!(row(None, None).counter_align, Alignment::Center);
    }

    #[test]
    fn row_rejects_horizontal_synonyms() {
        assert_eq!(row(Some("LEFT"), None).counter_align, Alignment::Center);
        assert_eq!(row(Some("sideways"), None).counter_align, Alignment::Center);
    }

    #[test]
    fn column_alignment_falls_back_to_min() {
        let column = |alignment| {
            select(
                ComponentKind::Column,
                &LayoutProps {
                    alignment,
                    ..LayoutProps::default()
                },
            )
        };
        assert_eq!(column(Some("RIGHT")).counter_align, Alignment::Max);
        assert_eq!(column(Some("LEFT")).counter_align, Alignment::Min);
        assert_eq!(column(Some("TOP")).counter_align, Alignment::Min);
        assert_eq!(column(None).counter_align, Alignment::Min);
    }

    #[test]
    fn justify_normalization() {
        assert_eq!(row(None, Some("START")).primary_align, Distribution::Min);
        assert_eq!(row(None, Some("END")).primary_align, Distribution::Max);
        assert_eq!(
            row(None, Some("SPACE_BETWEEN")).primary_align,
            Distribution::SpaceBetween
        );
        assert_eq!(row(None, Some("EVENLY")).primary_align, Distribution::Min);
        assert_eq!(row(None, None).primary_align, Distribution::Min);
    }

    #[test]
    fn explicit_zero_spacing_is_kept() {
        let decision = select(
            ComponentKind::Card,
            &LayoutProps {
                spacing: Some(0.0),
                ..LayoutProps::default()
            },
        );
        assert_eq!(decision.spacing, 0.0);
        assert_eq!(
            select(ComponentKind::Card, &LayoutProps::default()).spacing,
            CARD_SPACING
        );
    }

    #[test]
    fn buttons_default_to_full_width() {
        let full = select(ComponentKind::Button, &LayoutProps::default());
        assert_eq!(full.layout_align, LayoutAlign::Stretch);
        assert_eq!(full.primary_align, Distribution::Center);

        let hug = select(
            ComponentKind::SocialButton,
            &LayoutProps {
                width: Some("hug"),
                ..LayoutProps::default()
            },
        );
        assert_eq!(hug.layout_align, LayoutAlign::Inherit);
        assert_eq!(hug.primary_sizing, SizingMode::Hug);
        assert_eq!(hug.primary_align, Distribution::Min);
    }

    #[test]
    fn toggles_hug_and_center() {
        for kind in [
            ComponentKind::Checkbox,
            ComponentKind::RadioButton,
            ComponentKind::Switch,
        ] {
            let decision = select(kind, &LayoutProps::default());
            assert_eq!(decision.axis, LayoutAxis::Horizontal);
            assert_eq!(decision.counter_align, Alignment::Center);
            assert_eq!(decision.layout_align, LayoutAlign::Inherit);
        }
    }

    #[test]
    fn image_fit_controls_stretch() {
        let fit = |fit| {
            select(
                ComponentKind::Image,
                &LayoutProps {
                    fit,
                    ..LayoutProps::default()
                },
            )
            .layout_align
        };
        assert_eq!(fit(None), LayoutAlign::Stretch);
        assert_eq!(fit(Some("CONTAIN")), LayoutAlign::Inherit);
    }
}
