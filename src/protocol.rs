//! Messages exchanged with the UI layer.
//!
//! Requests and responses are tagged by a kebab-case `type` field:
//!
//! ```
//! use protoframe::protocol::Request;
//!
//! let request = Request::from_json(r#"{ "type": "start-generation", "prompt": "Login", "device": "Tablet" }"#).unwrap();
//! assert!(matches!(request, Request::StartGeneration { .. }));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StructuralError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Request {
    /// Open a destination frame for the given prompt and device class.
    #[serde(rename_all = "camelCase")]
    StartGeneration {
        #[serde(default)]
        prompt: String,
        #[serde(default)]
        device: String,
    },
    /// Render a component tree into the open destination.
    RenderDesign {
        #[serde(default)]
        json: Option<RenderPayload>,
    },
    /// Discard the open destination.
    CancelGeneration,
    /// Close the session, keeping the destination.
    FinishGeneration,
}

impl Request {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Answer to one [`Request`].
///
/// Every variant carries the notifications raised while handling that
/// request, and only those.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Response {
    #[serde(rename_all = "camelCase")]
    GenerationStarted {
        frame_id: u64,
        frame_name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        notifications: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    GenerationComplete {
        node_count: usize,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        notifications: Vec<String>,
    },
    Cancelled {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        notifications: Vec<String>,
    },
    Finished {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        notifications: Vec<String>,
    },
    Error {
        message: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        notifications: Vec<String>,
    },
}

impl Response {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn notifications(&self) -> &[String] {
        match self {
            Self::GenerationStarted { notifications, .. }
            | Self::GenerationComplete { notifications, .. }
            | Self::Cancelled { notifications }
            | Self::Finished { notifications }
            | Self::Error { notifications, .. } => notifications,
        }
    }

    pub(crate) fn with_notifications(mut self, messages: Vec<String>) -> Self {
        match &mut self {
            Self::GenerationStarted { notifications, .. }
            | Self::GenerationComplete { notifications, .. }
            | Self::Cancelled { notifications }
            | Self::Finished { notifications }
            | Self::Error { notifications, .. } => *notifications = messages,
        }
        self
    }
}

/// Render input: an already-parsed tree or raw generator output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum RenderPayload {
    Text(String),
    Tree(Value),
}

impl RenderPayload {
    /// Resolves the payload to a JSON value.
    ///
    /// Raw text is trimmed and stripped of Markdown code fences first.
    pub fn into_tree(self) -> Result<Value, StructuralError> {
        match self {
            Self::Tree(value) => Ok(value),
            Self::Text(text) => Ok(serde_json::from_str(strip_code_fence(&text))?),
        }
    }
}

impl From<Value> for RenderPayload {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            other => Self::Tree(other),
        }
    }
}

/// Strips a surrounding ```` ``` ```` or ```` ```json ```` fence, if any.
pub fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(body) = text.strip_prefix("```") else {
        return text;
    };
    let body = body.strip_prefix("json").unwrap_or(body);
    body.strip_suffix("```").unwrap_or(body).trim()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_tags() {
        let start: Request = serde_json::from_value(json!({
            "type": "start-generation", "prompt": "Sign up", "device": "Desktop"
        }))
        .unwrap();
        assert_eq!(
            start,
            Request::StartGeneration {
                prompt: "Sign up".into(),
                device: "Desktop".into()
            }
        );
        assert_eq!(
            Request::from_json(r#"{"type":"cancel-generation"}"#).unwrap(),
            Request::CancelGeneration
        );
        assert!(Request::from_json(r#"{"type":"explode"}"#).is_err());
    }

    #[test]
    fn render_request_accepts_tree_text_or_nothing() {
        let tree = Request::from_json(r#"{"type":"render-design","json":[{"component":"Label","props":{}}]}"#)
            .unwrap();
        assert!(matches!(
            tree,
            Request::RenderDesign { json: Some(RenderPayload::Tree(Value::Array(_))) }
        ));

        let text = Request::from_json(r#"{"type":"render-design","json":"[]"}"#).unwrap();
        assert_eq!(
            text,
            Request::RenderDesign {
                json: Some(RenderPayload::Text("[]".into()))
            }
        );

        let empty = Request::from_json(r#"{"type":"render-design"}"#).unwrap();
        assert_eq!(empty, Request::RenderDesign { json: None });
    }

    #[test]
    fn response_serializes_with_type_tag() {
        let json = Response::Error {
            message: "nope".into(),
            notifications: Vec::new(),
        }
        .to_json()
        .unwrap();
        assert_eq!(json, r#"{"type":"error","message":"nope"}"#);

        let cancelled = serde_json::to_value(Response::Cancelled {
            notifications: vec!["bye".into()],
        })
        .unwrap();
        assert_eq!(cancelled, json!({ "type": "cancelled", "notifications": ["bye"] }));
        assert_eq!(
            serde_json::from_value::<Response>(json!({ "type": "finished" })).unwrap(),
            Response::Finished {
                notifications: Vec::new()
            }
        );

        let done = serde_json::to_value(Response::GenerationComplete {
            node_count: 2,
            notifications: vec!["ok".into()],
        })
        .unwrap();
        assert_eq!(done["type"], "generation-complete");
        assert_eq!(done["nodeCount"], 2);
        assert_eq!(done["notifications"], json!(["ok"]));
    }

    #[test]
    fn code_fences_are_stripped() {
        assert_eq!(strip_code_fence("  []  "), "[]");
        assert_eq!(strip_code_fence("```json\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fence("```\n[2]\n```\n"), "[2]");
    }

    #[test]
    fn text_payload_parses_or_fails_structurally() {
        let value = RenderPayload::Text("```json\n[{\"a\":1}]\n```".into())
            .into_tree()
            .unwrap();
        assert_eq!(value, json!([{ "a": 1 }]));
        assert!(matches!(
            RenderPayload::Text("not json".into()).into_tree(),
            Err(StructuralError::Parse(_))
        ));
        assert_eq!(
            RenderPayload::from(json!("[]")),
            RenderPayload::Text("[]".into())
        );
    }
}
