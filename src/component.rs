//! Untrusted component tree input.
//!
//! Each entry of the tree is `{ "component": <kind>, "props": { .. } }`.
//! Entries are read lazily from the borrowed JSON so that a container's
//! `children` are never copied; props are deserialized into one typed
//! struct per kind only when that entry is built.

use std::fmt::{self, Display, Formatter};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::NodeBuildError;

/// The closed set of kinds the renderer knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Header,
    Label,
    LinkText,
    Button,
    SocialButton,
    TextField,
    Checkbox,
    RadioButton,
    Switch,
    Image,
    ColorSwatch,
    Icon,
    Slider,
    Placeholder,
    Row,
    Column,
    Card,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 17] = [
        Self::Header,
        Self::Label,
        Self::LinkText,
        Self::Button,
        Self::SocialButton,
        Self::TextField,
        Self::Checkbox,
        Self::RadioButton,
        Self::Switch,
        Self::Image,
        Self::ColorSwatch,
        Self::Icon,
        Self::Slider,
        Self::Placeholder,
        Self::Row,
        Self::Column,
        Self::Card,
    ];

    /// Resolves a tag exactly as it appears in the tree.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Header => "Header",
            Self::Label => "Label",
            Self::LinkText => "Link Text",
            Self::Button => "Button",
            Self::SocialButton => "Social Button",
            Self::TextField => "Text Field",
            Self::Checkbox => "Checkbox",
            Self::RadioButton => "RadioButton",
            Self::Switch => "Switch",
            Self::Image => "Image",
            Self::ColorSwatch => "ColorSwatch",
            Self::Icon => "Icon",
            Self::Slider => "Slider",
            Self::Placeholder => "Placeholder",
            Self::Row => "Row",
            Self::Column => "Column",
            Self::Card => "Card",
        }
    }

    /// Kinds that recurse into a `children` prop.
    pub fn is_container(self) -> bool {
        matches!(self, Self::Row | Self::Column | Self::Card)
    }
}

impl Display for ComponentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ============================================================================
// Raw entries
// ============================================================================

/// A structurally valid entry: a string tag plus a props object.
#[derive(Debug, Clone, Copy)]
pub struct RawNode<'a> {
    pub tag: &'a str,
    props: &'a Value,
}

impl<'a> RawNode<'a> {
    /// Returns `None` for entries missing `component` or `props`, or whose
    /// values have the wrong JSON type.
    pub fn read(entry: &'a Value) -> Option<Self> {
        let tag = entry.get("component")?.as_str()?;
        let props = entry.get("props").filter(|p| p.is_object())?;
        Some(Self { tag, props })
    }

    pub fn props(&self) -> &'a Value {
        self.props
    }

    /// The nested entries under `children`, or an empty slice when the prop
    /// is absent or not an array.
    pub fn children(&self) -> &'a [Value] {
        self.props
            .get("children")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn props_as<T: DeserializeOwned>(&self) -> Result<T, NodeBuildError> {
        T::deserialize(self.props).map_err(|source| NodeBuildError::InvalidProps {
            kind: self.tag.to_string(),
            source,
        })
    }
}

// ============================================================================
// Typed props
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderProps {
    pub text: Option<String>,
    pub text_align: Option<String>,
    pub font_weight: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelProps {
    pub text: Option<String>,
    pub text_align: Option<String>,
    pub font_weight: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkTextProps {
    pub text: Option<String>,
    pub align: Option<String>,
    pub text_align: Option<String>,
    pub font_weight: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonProps {
    pub label: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub svg_data: Option<String>,
    pub width: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialButtonProps {
    pub provider: Option<String>,
    pub label: Option<String>,
    pub icon: Option<String>,
    pub svg_data: Option<String>,
    pub width: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextFieldProps {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub icon: Option<String>,
    pub svg_data: Option<String>,
    pub end_icon: Option<String>,
    pub end_svg_data: Option<String>,
}

/// Shared by `Checkbox`, `RadioButton` and `Switch`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToggleProps {
    pub label: Option<String>,
    pub checked: Option<bool>,
    pub group_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageProps {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub alt: Option<String>,
    pub corner_radius: Option<f32>,
    pub fit: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorSwatchProps {
    pub color: Option<String>,
    pub size: Option<f32>,
    pub shape: Option<String>,
    pub selected: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconProps {
    pub icon: Option<String>,
    pub svg_data: Option<String>,
    pub size: Option<f32>,
    /// Hex (`#3366ff`) or CSS colour name.
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SliderProps {
    pub value: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceholderProps {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RowProps {
    pub spacing: Option<f32>,
    pub alignment: Option<String>,
    pub justify: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnProps {
    pub spacing: Option<f32>,
    pub alignment: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardProps {
    pub padding: Option<f32>,
    pub spacing: Option<f32>,
    pub background_color: Option<String>,
    pub has_border: Option<bool>,
    pub has_shadow: Option<bool>,
    pub alignment: Option<String>,
}

/// Container props plus the borrowed child entries.
#[derive(Debug, Clone)]
pub struct Nested<'a, P> {
    pub props: P,
    pub children: &'a [Value],
}

// ============================================================================
// Component
// ============================================================================

/// One parsed entry, carrying the prop shape of its kind.
#[derive(Debug, Clone)]
pub enum Component<'a> {
    Header(HeaderProps),
    Label(LabelProps),
    LinkText(LinkTextProps),
    Button(ButtonProps),
    SocialButton(SocialButtonProps),
    TextField(TextFieldProps),
    Checkbox(ToggleProps),
    RadioButton(ToggleProps),
    Switch(ToggleProps),
    Image(ImageProps),
    ColorSwatch(ColorSwatchProps),
    Icon(IconProps),
    Slider(SliderProps),
    Placeholder(PlaceholderProps),
    Row(Nested<'a, RowProps>),
    Column(Nested<'a, ColumnProps>),
    Card(Nested<'a, CardProps>),
    /// A tag outside the known set; rendered as a visible placeholder.
    Unknown(&'a str),
}

impl<'a> Component<'a> {
    /// Deserializes the props of `raw` into the shape of its kind.
    pub fn parse(raw: &RawNode<'a>) -> Result<Self, NodeBuildError> {
        let Some(kind) = ComponentKind::from_tag(raw.tag) else {
            return Ok(Self::Unknown(raw.tag));
        };
        let children = raw.children();
        Ok(match kind {
            ComponentKind::Header => Self::Header(raw.props_as()?),
            ComponentKind::Label => Self::Label(raw.props_as()?),
            ComponentKind::LinkText => Self::LinkText(raw.props_as()?),
            ComponentKind::Button => Self::Button(raw.props_as()?),
            ComponentKind::SocialButton => Self::SocialButton(raw.props_as()?),
            ComponentKind::TextField => Self::TextField(raw.props_as()?),
            ComponentKind::Checkbox => Self::Checkbox(raw.props_as()?),
            ComponentKind::RadioButton => Self::RadioButton(raw.props_as()?),
            ComponentKind::Switch => Self::Switch(raw.props_as()?),
            ComponentKind::Image => Self::Image(raw.props_as()?),
            ComponentKind::ColorSwatch => Self::ColorSwatch(raw.props_as()?),
            ComponentKind::Icon => Self::Icon(raw.props_as()?),
            ComponentKind::Slider => Self::Slider(raw.props_as()?),
            ComponentKind::Placeholder => Self::Placeholder(raw.props_as()?),
            ComponentKind::Row => Self::Row(Nested {
                props: raw.props_as()?,
                children,
            }),
            ComponentKind::Column => Self::Column(Nested {
                props: raw.props_as()?,
                children,
            }),
            ComponentKind::Card => Self::Card(Nested {
                props: raw.props_as()?,
                children,
            }),
        })
    }

    /// `None` for [`Component::Unknown`].
    pub fn kind(&self) -> Option<ComponentKind> {
        Some(match self {
            Self::Header(_) => ComponentKind::Header,
            Self::Label(_) => ComponentKind::Label,
            Self::LinkText(_) => ComponentKind::LinkText,
            Self::Button(_) => ComponentKind::Button,
            Self::SocialButton(_) => ComponentKind::SocialButton,
            Self::TextField(_) => ComponentKind::TextField,
            Self::Checkbox(_) => ComponentKind::Checkbox,
            Self::RadioButton(_) => ComponentKind::RadioButton,
            Self::Switch(_) => ComponentKind::Switch,
            Self::Image(_) => ComponentKind::Image,
            Self::ColorSwatch(_) => ComponentKind::ColorSwatch,
            Self::Icon(_) => ComponentKind::Icon,
            Self::Slider(_) => ComponentKind::Slider,
            Self::Placeholder(_) => ComponentKind::Placeholder,
            Self::Row(_) => ComponentKind::Row,
            Self::Column(_) => ComponentKind::Column,
            Self::Card(_) => ComponentKind::Card,
            Self::Unknown(_) => return None,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tags_round_trip() {
        for kind in ComponentKind::ALL {
            assert_eq!(ComponentKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(ComponentKind::from_tag("link text"), None);
    }

    #[test]
    fn entries_without_props_are_rejected() {
        assert!(RawNode::read(&json!({ "component": "Header" })).is_none());
        assert!(RawNode::read(&json!({ "props": {} })).is_none());
        assert!(RawNode::read(&json!({ "component": 3, "props": {} })).is_none());
        assert!(RawNode::read(&json!({ "component": "Header", "props": [] })).is_none());
        assert!(RawNode::read(&json!("Header")).is_none());
    }

    #[test]
    fn children_are_borrowed_not_parsed() {
        let entry = json!({
            "component": "Row",
            "props": { "spacing": 4, "children": [{ "component": "Label", "props": {} }] }
        });
        let raw = RawNode::read(&entry).unwrap();
        let Component::Row(row) = Component::parse(&raw).unwrap() else {
            panic!("expected a row");
        };
        assert_eq!(row.props.spacing, Some(4.0));
        assert_eq!(row.children.len(), 1);
    }

    #[test]
    fn non_array_children_read_as_empty() {
        let entry = json!({ "component": "Column", "props": { "children": "oops" } });
        let raw = RawNode::read(&entry).unwrap();
        assert!(raw.children().is_empty());
    }

    #[test]
    fn unknown_tags_are_not_errors() {
        let entry = json!({ "component": "Carousel", "props": {} });
        let raw = RawNode::read(&entry).unwrap();
        let component = Component::parse(&raw).unwrap();
        assert!(matches!(component, Component::Unknown("Carousel")));
        assert_eq!(component.kind(), None);
    }

    #[test]
    fn mistyped_props_are_build_errors() {
        let entry = json!({ "component": "Switch", "props": { "checked": "yes" } });
        let raw = RawNode::read(&entry).unwrap();
        let err = Component::parse(&raw).unwrap_err();
        assert!(matches!(err, NodeBuildError::InvalidProps { ref kind, .. } if kind == "Switch"));
    }

    #[test]
    fn null_props_fall_back_to_defaults() {
        let entry = json!({ "component": "Button", "props": { "label": null, "width": "HUG" } });
        let raw = RawNode::read(&entry).unwrap();
        let Component::Button(props) = Component::parse(&raw).unwrap() else {
            panic!("expected a button");
        };
        assert!(props.label.is_none());
        assert_eq!(props.width.as_deref(), Some("HUG"));
    }
}
