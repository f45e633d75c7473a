//! Component catalog.
//!
//! Names, props, types and defaults of every component kind. The catalog
//! documents the tree format for whoever produces it and supplies a few
//! defaults to the renderer; it is never used to validate input.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::component::ComponentKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum PropType {
    String,
    Number,
    Boolean,
}

impl PropType {
    fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PropSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropType,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl PropSpec {
    fn new(name: &str, kind: PropType, description: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            description: description.to_string(),
            options: None,
            required: false,
            default: None,
        }
    }

    fn string(name: &str, description: &str) -> Self {
        Self::new(name, PropType::String, description)
    }

    fn number(name: &str, description: &str) -> Self {
        Self::new(name, PropType::Number, description)
    }

    fn boolean(name: &str, description: &str) -> Self {
        Self::new(name, PropType::Boolean, description)
    }

    fn options(mut self, options: &[&str]) -> Self {
        self.options = Some(options.iter().map(|o| o.to_string()).collect());
        self
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    pub name: String,
    pub description: String,
    pub props: Vec<PropSpec>,
    /// Whether the kind nests other components under `children`.
    #[serde(default)]
    pub children: bool,
}

impl ComponentSpec {
    fn new(kind: ComponentKind, description: &str, props: Vec<PropSpec>) -> Self {
        Self {
            name: kind.tag().to_string(),
            description: description.to_string(),
            children: kind.is_container(),
            props,
        }
    }

    pub fn prop(&self, name: &str) -> Option<&PropSpec> {
        self.props.iter().find(|p| p.name == name)
    }
}

/// An ordered list of component descriptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct Catalog {
    components: Vec<ComponentSpec>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn new(components: Vec<ComponentSpec>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[ComponentSpec] {
        &self.components
    }

    pub fn get(&self, name: &str) -> Option<&ComponentSpec> {
        self.components.iter().find(|c| c.name == name)
    }

    /// The declared default of `prop` on `component`.
    pub fn default_for(&self, component: &str, prop: &str) -> Option<&Value> {
        self.get(component)?.prop(prop)?.default.as_ref()
    }

    pub fn default_str(&self, kind: ComponentKind, prop: &str) -> Option<&str> {
        self.default_for(kind.tag(), prop)?.as_str()
    }

    pub fn default_f32(&self, kind: ComponentKind, prop: &str) -> Option<f32> {
        self.default_for(kind.tag(), prop)?
            .as_f64()
            .map(|n| n as f32)
    }

    /// Renders the catalog as the annotated schema text handed to the tree
    /// producer.
    ///
    /// ```
    /// use protoframe::Catalog;
    ///
    /// let text = Catalog::builtin().describe();
    /// assert!(text.starts_with("[\n  {\n    \"component\": \"Header\""));
    /// assert!(text.ends_with("}\n]"));
    /// ```
    pub fn describe(&self) -> String {
        let mut out = String::from("[\n");
        for (i, component) in self.components.iter().enumerate() {
            out.push_str("  {\n");
            let _ = writeln!(
                out,
                "    \"component\": \"{}\", // {}",
                component.name, component.description
            );
            out.push_str("    \"props\": {\n");
            for (j, prop) in component.props.iter().enumerate() {
                let _ = write!(out, "      \"{}\": {}", prop.name, prop.kind.as_str());
                if let Some(options) = &prop.options {
                    let quoted: Vec<String> = options.iter().map(|o| format!("\"{o}\"")).collect();
                    let _ = write!(out, " ({})", quoted.join(" | "));
                }
                let _ = write!(out, " // {}", prop.description);
                if !prop.required {
                    match &prop.default {
                        Some(default) => {
                            let _ = write!(out, " (optional, default: {})", plain(default));
                        }
                        None => out.push_str(" (optional)"),
                    }
                }
                if j + 1 < component.props.len() || component.children {
                    out.push(',');
                }
                out.push('\n');
            }
            if component.children {
                out.push_str(
                    "      \"children\": [ ... (Array of component objects as defined in this schema) ... ] // Nested components\n",
                );
            }
            out.push_str("    }\n  }");
            if i + 1 < self.components.len() {
                out.push(',');
            }
            out.push('\n');
        }
        out.push(']');
        out
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The catalog of every kind the renderer builds.
    pub fn builtin() -> Self {
        use ComponentKind as K;
        use PropSpec as P;

        let align = ["LEFT", "CENTER", "RIGHT"];
        let width = ["FULL", "HUG"];
        Self::new(vec![
            ComponentSpec::new(K::Header, "For screen titles or section headings.", vec![
                P::string("text", "The heading text").required(),
                P::string("textAlign", "Text alignment (default CENTER for headers)").options(&align),
            ]),
            ComponentSpec::new(
                K::TextField,
                "For user text input. This component renders a label and input box together.",
                vec![
                    P::string("label", "Label text displayed above the field"),
                    P::string("placeholder", "Placeholder text inside the input area"),
                    P::string("icon", "Optional icon name (from available icons)"),
                    P::string("endIcon", "Icon name for the END/RIGHT of the input (e.g., visibility toggle)"),
                ],
            ),
            ComponentSpec::new(K::Button, "For user actions like submit, save, cancel.", vec![
                P::string("label", "Text displayed on the button").required(),
                P::string("color", "Color hint for button style")
                    .options(&["primary", "secondary", "destructive"]),
                P::string("icon", "Optional icon name (from available icons)"),
                P::string("width", "Set button width: FULL stretches, HUG fits content")
                    .options(&width)
                    .default(json!("FULL")),
            ]),
            ComponentSpec::new(
                K::SocialButton,
                "Branded button for social authentication (e.g., Continue with Google, Apple, Facebook).",
                vec![
                    P::string("provider", "Social provider identifier")
                        .options(&["google", "apple", "facebook"])
                        .required(),
                    P::string("label", "Button label. Defaults to 'Continue with <Provider>' if omitted."),
                    P::string("width", "Width behavior of the button")
                        .options(&width)
                        .default(json!("FULL")),
                    P::string("icon", "Icon name (usually same as provider, e.g. 'google')"),
                ],
            ),
            ComponentSpec::new(
                K::Checkbox,
                "For agreeing to terms or selecting multiple options. Renders a box and a label.",
                vec![
                    P::string("label", "Text label next to the checkbox").required(),
                    P::boolean("checked", "Initial state (true/false)").default(json!(false)),
                ],
            ),
            ComponentSpec::new(
                K::RadioButton,
                "For selecting a single option from a group. Renders a circle and a label.",
                vec![
                    P::string("label", "Text label next to the radio button").required(),
                    P::boolean("checked", "Initial state (true/false)").default(json!(false)),
                    P::string("groupName", "Identifier grouping related radio buttons").required(),
                ],
            ),
            ComponentSpec::new(
                K::Switch,
                "For toggling settings on/off. Renders a switch and a label.",
                vec![
                    P::string("label", "Text label next to the switch").required(),
                    P::boolean("checked", "Initial state (true/false)").default(json!(false)),
                ],
            ),
            ComponentSpec::new(K::Label, "For simple, non-interactive text display.", vec![
                P::string("text", "The text content").required(),
                P::string("textAlign", "Text alignment (default LEFT)").options(&align),
            ]),
            ComponentSpec::new(K::Icon, "For displaying a standalone icon.", vec![
                P::string("icon", "Icon name (from available icons)").required(),
                P::number("size", "Optional size hint (e.g., 24, 32)"),
            ]),
            ComponentSpec::new(
                K::LinkText,
                "Inline or standalone clickable text link for secondary navigation (e.g., Forgot password?, Sign up).",
                vec![
                    P::string("text", "Link label text").required(),
                    P::string("align", "Horizontal alignment of the link")
                        .options(&align)
                        .default(json!("LEFT")),
                    P::string("variant", "Visual emphasis level of the link")
                        .options(&["PRIMARY", "SECONDARY", "SUBTLE"])
                        .default(json!("SECONDARY")),
                ],
            ),
            ComponentSpec::new(
                K::Row,
                "A container that arranges items HORIZONTALLY. Use this for controls, items side-by-side, etc.",
                vec![
                    P::number("spacing", "Space between items (e.g., 8, 16)").default(json!(8)),
                    P::string("alignment", "Vertical alignment of items")
                        .options(&["TOP", "CENTER", "BOTTOM"])
                        .default(json!("CENTER")),
                    P::string("justify", "Horizontal distribution (MIN=start, MAX=end)")
                        .options(&["MIN", "CENTER", "MAX", "SPACE_BETWEEN"])
                        .default(json!("MIN")),
                ],
            ),
            ComponentSpec::new(
                K::Column,
                "A container that arranges items VERTICALLY. Use this to group items in a card, etc.",
                vec![
                    P::number("spacing", "Space between items (e.g., 8, 16)").default(json!(8)),
                    P::string("alignment", "Horizontal alignment (MIN=left, MAX=right)")
                        .options(&["MIN", "CENTER", "MAX"])
                        .default(json!("MIN")),
                ],
            ),
            ComponentSpec::new(
                K::Card,
                "A container with padding, background, border, and shadow for grouping related content. Perfect for product cards, info panels, etc.",
                vec![
                    P::number("padding", "Internal padding (default 16)").default(json!(16)),
                    P::number("spacing", "Space between child items (default 12)").default(json!(12)),
                    P::string("backgroundColor", "Card background color (default white)")
                        .options(&["white", "light", "dark"])
                        .default(json!("white")),
                    P::boolean("hasBorder", "Show border around card (default true)").default(json!(true)),
                    P::boolean("hasShadow", "Show drop shadow (default true)").default(json!(true)),
                ],
            ),
            ComponentSpec::new(
                K::Slider,
                "A horizontal slider for progress bars, volume, etc. Renders a track and a thumb.",
                vec![P::number("value", "Position of thumb (0 to 100)").default(json!(30))],
            ),
            ComponentSpec::new(
                K::Placeholder,
                "A simple gray box to represent an image, album art, or other media.",
                vec![
                    P::number("width", "Width of the box (default 100)").default(json!(100)),
                    P::number("height", "Height of the box (default 100)").default(json!(100)),
                    P::string("label", "Optional text inside the box"),
                ],
            ),
            ComponentSpec::new(
                K::Image,
                "Displays an image with proper sizing and corner radius. Use this for photos, product images, avatars, etc.",
                vec![
                    P::number("width", "Image width in pixels (default 100)").default(json!(100)),
                    P::number("height", "Image height in pixels (default 100)").default(json!(100)),
                    P::string("alt", "Alternative text description of the image").default(json!("Image")),
                    P::number("cornerRadius", "Corner roundness (0=square, 50+=circle, default 8)")
                        .default(json!(8)),
                    P::string("fit", "How image fills container (default FILL)")
                        .options(&["FILL", "FIT", "CROP"])
                        .default(json!("FILL")),
                ],
            ),
            ComponentSpec::new(
                K::ColorSwatch,
                "A colored circle or square for color selection UI. Better than Image for color pickers.",
                vec![
                    P::string("color", "Color name or hint (red, blue, green, black, white, etc.)").required(),
                    P::number("size", "Size of the swatch (default 40)").default(json!(40)),
                    P::boolean("selected", "Whether this color is selected (shows border)")
                        .default(json!(false)),
                    P::string("shape", "Shape of swatch (default circle)")
                        .options(&["circle", "square"])
                        .default(json!("circle")),
                ],
            ),
        ])
    }
}

/// Defaults are written bare: `FULL`, `8`, `true`.
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_kind() {
        let catalog = Catalog::builtin();
        for kind in ComponentKind::ALL {
            let spec = catalog.get(kind.tag()).unwrap();
            assert_eq!(spec.children, kind.is_container(), "{kind}");
        }
        assert_eq!(catalog.components().len(), ComponentKind::ALL.len());
    }

    #[test]
    fn default_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.default_str(ComponentKind::Button, "width"), Some("FULL"));
        assert_eq!(catalog.default_f32(ComponentKind::Slider, "value"), Some(30.0));
        assert_eq!(catalog.default_for("Button", "label"), None);
        assert_eq!(catalog.default_for("Carousel", "width"), None);
    }

    #[test]
    fn describe_formats_props() {
        let text = Catalog::builtin().describe();
        assert!(text.contains(
            "      \"width\": string (\"FULL\" | \"HUG\") // Set button width: FULL stretches, HUG fits content (optional, default: FULL)\n"
        ));
        assert!(text.contains("      \"label\": string // Text displayed on the button,\n"));
        assert!(text.contains(
            "      \"hasShadow\": boolean // Show drop shadow (default true) (optional, default: true),\n      \"children\": ["
        ));
        assert!(text.contains("      \"endIcon\": string // Icon name for the END/RIGHT of the input (e.g., visibility toggle) (optional)\n"));
    }

    #[test]
    fn describe_has_no_trailing_comma() {
        let catalog = Catalog::new(vec![ComponentSpec::new(
            ComponentKind::Slider,
            "A slider.",
            vec![PropSpec::number("value", "Position").default(json!(30))],
        )]);
        assert_eq!(
            catalog.describe(),
            "[\n  {\n    \"component\": \"Slider\", // A slider.\n    \"props\": {\n      \"value\": number // Position (optional, default: 30)\n    }\n  }\n]"
        );
    }

    #[test]
    fn json_round_trip() {
        let catalog = Catalog::builtin();
        let json = catalog.to_json_pretty().unwrap();
        assert!(json.contains("\"type\": \"boolean\""));
        assert_eq!(Catalog::from_json(&json).unwrap(), catalog);
    }
}
