//! protoframe: declarative UI trees rendered into design-tool nodes
//!
//! This crate takes a JSON description of a screen (a sequence of
//! `{ "component": ..., "props": ... }` entries, nested through a `children`
//! prop) and builds a tree of native nodes from it: frames with auto-layout,
//! text, shapes and recoloured vector icons.
//!
//! # Example
//!
//! ```
//! use protoframe::{BuiltinIcons, RendererConfig, SessionController, StaticFonts};
//! use protoframe::protocol::RenderPayload;
//! use serde_json::json;
//!
//! let mut session = SessionController::new(
//!     RendererConfig::default(),
//!     StaticFonts::family("Inter"),
//!     BuiltinIcons,
//! );
//!
//! let frame = session.start("Sign in", "Mobile");
//! let report = session
//!     .render(RenderPayload::Tree(json!([
//!         { "component": "Header", "props": { "text": "Welcome back" } },
//!         { "component": "Button", "props": { "label": "Sign in" } }
//!     ])))
//!     .unwrap();
//! assert_eq!(report.node_count, 2);
//!
//! let frame = session.canvas().frame(frame).unwrap();
//! assert_eq!(frame.children().len(), 2);
//! ```
//!
//! # Rendering without a session
//!
//! The [`render::Renderer`] can be driven directly when no page or session
//! is needed:
//!
//! ```
//! use protoframe::{BuiltinIcons, Catalog, RendererConfig, StaticFonts};
//! use protoframe::render::Renderer;
//! use protoframe::scene::IdAllocator;
//! use serde_json::json;
//!
//! let config = RendererConfig::default();
//! let catalog = Catalog::builtin();
//! let fonts = StaticFonts::family("Inter");
//! let mut ids = IdAllocator::new();
//! let mut renderer = Renderer::new(&config, &catalog, &fonts, &BuiltinIcons, &mut ids);
//!
//! let nodes = renderer
//!     .render_tree(&json!([{ "component": "Carousel", "props": {} }]))
//!     .unwrap();
//! assert_eq!(nodes[0].as_text().unwrap().characters, "[UNKNOWN: Carousel]");
//! ```

pub mod canvas;
pub mod catalog;
pub mod component;
pub mod config;
pub mod error;
pub mod icons;
pub mod layout;
mod logging;
pub mod primitive;
pub mod protocol;
pub mod render;
pub mod scene;
pub mod session;
pub mod vector;

pub use canvas::{Canvas, Viewport};
pub use catalog::{Catalog, ComponentSpec, PropSpec, PropType};
pub use component::{Component, ComponentKind};
pub use config::RendererConfig;
pub use error::{
    FontError, NodeBuildError, SessionError, SessionStateError, StructuralError,
};
pub use icons::{BuiltinIcons, IconMap, IconRegistry};
pub use layout::LayoutDecision;
pub use logging::init_logging;
pub use primitive::{FontProvider, StaticFonts, SystemFonts};
pub use render::{Diagnostics, FailureClass};
pub use scene::{NativeNode, NodeId, NodeKind};
pub use session::{RenderReport, SessionController, SessionState};
pub use vector::{VectorNode, create_from_vector_markup, recolor};
