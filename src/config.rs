//! Renderer configuration.
//!
//! Styling constants, font fallbacks, device sizes and limits live here
//! rather than in the builders. Every field has a default, so a partial
//! JSON document only overrides what it names:
//!
//! ```
//! use protoframe::RendererConfig;
//!
//! let config = RendererConfig::from_json(r#"{ "maxDepth": 8 }"#).unwrap();
//! assert_eq!(config.max_depth, 8);
//! assert_eq!(config.font_families, ["Inter", "Arial"]);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scene::{Color, Size};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RendererConfig {
    /// Tried in order; each family is tried with the requested style, then
    /// with `Regular`.
    pub font_families: Vec<String>,
    /// Deepest nesting the renderer descends into.
    pub max_depth: usize,
    pub palette: Palette,
    /// Keyed by lowercase provider name.
    pub social: BTreeMap<String, SocialStyle>,
    /// Used for providers missing from `social`.
    pub social_fallback: SocialStyle,
    /// Checked in order by substring of the requested colour name.
    pub swatches: Vec<SwatchColor>,
    pub devices: Vec<DeviceClass>,
    pub frame: FrameStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub destructive: Color,
    pub neutral: Color,
    /// Labels and icons drawn on a filled button.
    pub on_fill: Color,
    pub text: Color,
    pub link: Color,
    pub muted_text: Color,
    pub placeholder_text: Color,
    pub icon: Color,
    pub field_icon: Color,
    pub input_fill: Color,
    pub control_border: Color,
    pub toggle_off: Color,
    pub selection: Color,
    pub error: Color,
    pub swatch_default: Color,
    pub swatch_border: Color,
    pub card_white: Color,
    pub card_light: Color,
    pub card_dark: Color,
    pub card_border: Color,
    pub shadow: Color,
    pub gradient_start: Color,
    pub gradient_end: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::rgb(0.25, 0.5, 1.0),
            secondary: Color::rgb(0.6, 0.6, 0.6),
            destructive: Color::rgb(0.9, 0.2, 0.2),
            neutral: Color::rgb(0.9, 0.9, 0.9),
            on_fill: Color::WHITE,
            text: Color::BLACK,
            link: Color::rgb(0.1, 0.35, 0.9),
            muted_text: Color::rgb(0.4, 0.4, 0.4),
            placeholder_text: Color::rgb(0.6, 0.6, 0.6),
            icon: Color::rgb(0.1, 0.1, 0.1),
            field_icon: Color::rgb(0.3, 0.3, 0.3),
            input_fill: Color::rgb(0.9, 0.9, 0.9),
            control_border: Color::rgb(0.5, 0.5, 0.5),
            toggle_off: Color::rgb(0.8, 0.8, 0.8),
            selection: Color::rgb(0.25, 0.5, 1.0),
            error: Color::rgb(1.0, 0.0, 0.0),
            swatch_default: Color::rgb(0.5, 0.5, 0.5),
            swatch_border: Color::rgb(0.8, 0.8, 0.8),
            card_white: Color::WHITE,
            card_light: Color::rgb(0.95, 0.95, 0.95),
            card_dark: Color::rgb(0.2, 0.2, 0.2),
            card_border: Color::rgb(0.9, 0.9, 0.9),
            shadow: Color::rgba(0.0, 0.0, 0.0, 0.1),
            gradient_start: Color::rgb(0.8, 0.8, 0.9),
            gradient_end: Color::rgb(0.6, 0.6, 0.8),
        }
    }
}

/// Colours of a social sign-in button.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialStyle {
    pub background: Color,
    pub text: Color,
    pub icon: Color,
}

impl Default for SocialStyle {
    fn default() -> Self {
        Self {
            background: Color::rgb(0.9, 0.9, 0.9),
            text: Color::BLACK,
            icon: Color::BLACK,
        }
    }
}

/// A named swatch colour, matched when any keyword occurs in the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwatchColor {
    pub keywords: Vec<String>,
    pub color: Color,
    /// Light colours get a thin border so they stay visible on white.
    #[serde(default)]
    pub light: bool,
}

impl SwatchColor {
    fn new(keywords: &[&str], color: Color) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            color,
            light: false,
        }
    }

    fn light(mut self) -> Self {
        self.light = true;
        self
    }
}

/// A destination frame size class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceClass {
    pub name: String,
    pub size: Size,
}

impl DeviceClass {
    pub fn new(name: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            size: Size::new(width, height),
        }
    }
}

/// Styling of the destination frame a session renders into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrameStyle {
    pub padding: f32,
    pub spacing: f32,
    /// Horizontal gap left between neighbouring frames on the canvas.
    pub gap: f32,
    pub background: Color,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            padding: 24.0,
            spacing: 16.0,
            gap: 100.0,
            background: Color::WHITE,
        }
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        let social = [
            (
                "google",
                SocialStyle {
                    background: Color::WHITE,
                    text: Color::rgb(0.2, 0.2, 0.2),
                    icon: Color::BLACK,
                },
            ),
            (
                "apple",
                SocialStyle {
                    background: Color::BLACK,
                    text: Color::WHITE,
                    icon: Color::WHITE,
                },
            ),
            (
                "facebook",
                SocialStyle {
                    background: Color::rgb(0.09, 0.3, 0.65),
                    text: Color::WHITE,
                    icon: Color::WHITE,
                },
            ),
        ]
        .into_iter()
        .map(|(name, style)| (name.to_string(), style))
        .collect();

        Self {
            font_families: vec!["Inter".into(), "Arial".into()],
            max_depth: 32,
            palette: Palette::default(),
            social,
            social_fallback: SocialStyle::default(),
            swatches: vec![
                SwatchColor::new(&["red"], Color::rgb(0.9, 0.2, 0.2)),
                SwatchColor::new(&["blue"], Color::rgb(0.2, 0.4, 0.9)),
                SwatchColor::new(&["green"], Color::rgb(0.2, 0.8, 0.3)),
                SwatchColor::new(&["yellow"], Color::rgb(0.95, 0.85, 0.2)),
                SwatchColor::new(&["orange"], Color::rgb(1.0, 0.6, 0.2)),
                SwatchColor::new(&["purple", "violet"], Color::rgb(0.6, 0.3, 0.9)),
                SwatchColor::new(&["pink"], Color::rgb(1.0, 0.4, 0.7)),
                SwatchColor::new(&["black"], Color::rgb(0.1, 0.1, 0.1)),
                SwatchColor::new(&["white"], Color::WHITE).light(),
                SwatchColor::new(&["brown"], Color::rgb(0.6, 0.4, 0.2)),
                SwatchColor::new(&["beige", "tan"], Color::rgb(0.96, 0.87, 0.7)).light(),
            ],
            devices: vec![
                DeviceClass::new("Mobile", 375.0, 812.0),
                DeviceClass::new("Tablet", 768.0, 1024.0),
                DeviceClass::new("Desktop", 1440.0, 900.0),
            ],
            frame: FrameStyle::default(),
        }
    }
}

impl RendererConfig {
    /// Fill of a `Button` for its `color` prop.
    pub fn button_fill(&self, color: Option<&str>) -> Color {
        match color.map(str::to_ascii_lowercase).as_deref() {
            Some("primary") => self.palette.primary,
            Some("secondary") => self.palette.secondary,
            Some("destructive") => self.palette.destructive,
            _ => self.palette.neutral,
        }
    }

    /// Colours for a social provider, by case-insensitive name.
    pub fn social_style(&self, provider: &str) -> SocialStyle {
        self.social
            .get(&provider.to_ascii_lowercase())
            .copied()
            .unwrap_or(self.social_fallback)
    }

    /// Background of a `Card` for its `backgroundColor` prop.
    pub fn card_background(&self, name: Option<&str>) -> Color {
        match name {
            Some("light") => self.palette.card_light,
            Some("dark") => self.palette.card_dark,
            _ => self.palette.card_white,
        }
    }

    /// Resolves a swatch colour name.
    ///
    /// The keyword table wins, then CSS colour keywords and hex codes, then
    /// the default grey. The flag tells whether the colour needs a border.
    pub fn swatch_color(&self, name: &str) -> (Color, bool) {
        let lower = name.trim().to_ascii_lowercase();
        if let Some(swatch) = self
            .swatches
            .iter()
            .find(|s| s.keywords.iter().any(|k| lower.contains(k.as_str())))
        {
            return (swatch.color, swatch.light);
        }
        match Color::from_css_name(&lower).or_else(|| Color::from_hex(&lower)) {
            Some(color) => (color, false),
            None => (self.palette.swatch_default, false),
        }
    }

    /// Picks the device class whose name prefixes `requested`, falling back
    /// to the first configured class.
    pub fn device(&self, requested: &str) -> DeviceClass {
        let requested = requested.trim().to_ascii_lowercase();
        self.devices
            .iter()
            .skip(1)
            .find(|d| requested.starts_with(&d.name.to_ascii_lowercase()))
            .or_else(|| self.devices.first())
            .cloned()
            .unwrap_or_else(|| DeviceClass::new("Mobile", 375.0, 812.0))
    }

    /// Serializes the configuration to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the configuration to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================
