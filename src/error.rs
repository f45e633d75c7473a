//! Error taxonomy for rendering and session handling.
//!
//! Only [`StructuralError`] and [`SessionStateError`] stop a request.
//! [`NodeBuildError`]s are contained at the node boundary by the renderer and
//! turned into inline placeholders.

use thiserror::Error;

use crate::scene::NodeId;

/// The render input as a whole is unusable.
#[derive(Debug, Error)]
pub enum StructuralError {
    /// Top-level input parsed, but is not a sequence of nodes.
    #[error("render input must be a JSON array, found {found}")]
    NotASequence { found: &'static str },

    /// Raw text input is not valid JSON.
    #[error("render input is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The request carried no render input at all.
    #[error("render request carried no design data")]
    MissingPayload,
}

/// No font in the fallback chain could be loaded.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("could not load any font for \"{requested}\"")]
    NoFontAvailable { requested: String },
}

/// A single component failed to build.
#[derive(Debug, Error)]
pub enum NodeBuildError {
    #[error("invalid props for {kind}: {source}")]
    InvalidProps {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Font(#[from] FontError),

    #[error("icon \"{name}\" has no vector markup")]
    MissingIcon { name: String },

    #[error("vector markup for \"{name}\" could not be parsed")]
    InvalidMarkup { name: String },

    #[error("nesting deeper than {limit} levels")]
    DepthExceeded { limit: usize },
}

/// A request referenced a destination that does not exist (anymore).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionStateError {
    #[error("no active destination frame; start a new generation first")]
    NoActiveDestination,

    #[error("destination frame {id} was removed")]
    DestinationRemoved { id: NodeId },

    #[error("destination frame already holds a rendered design")]
    AlreadyRendered,
}

/// Anything that stops a session request.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    State(#[from] SessionStateError),

    #[error(transparent)]
    Structural(#[from] StructuralError),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_error_names_found_type() {
        let err = StructuralError::NotASequence { found: "object" };
        assert_eq!(err.to_string(), "render input must be a JSON array, found object");
    }

    #[test]
    fn session_error_is_transparent() {
        let err: SessionError = SessionStateError::NoActiveDestination.into();
        assert_eq!(
            err.to_string(),
            "no active destination frame; start a new generation first"
        );
    }

    #[test]
    fn font_error_converts_into_node_error() {
        let err: NodeBuildError = FontError::NoFontAvailable {
            requested: "Inter Bold".into(),
        }
        .into();
        assert!(err.to_string().contains("Inter Bold"));
    }
}
