//! Session Controller.
//!
//! A [`SessionController`] owns the page and at most one open destination
//! frame. Its lifecycle is a three-state machine:
//!
//! ```text
//!   Idle --start--> Awaiting --render--> Populated
//!    ^                 |                    |
//!    +----cancel-------+------finish--------+
//! ```
//!
//! `cancel` removes the destination from the page, `finish` keeps it. A
//! render that fails structurally discards the still-empty destination.
//! Requests that need a destination fail with a [`SessionStateError`] when
//! there is none.

use tracing::{debug, error, info, warn};

use crate::canvas::{Canvas, Viewport};
use crate::catalog::Catalog;
use crate::config::RendererConfig;
use crate::error::{SessionError, SessionStateError, StructuralError};
use crate::icons::IconRegistry;
use crate::primitive::FontProvider;
use crate::protocol::{RenderPayload, Request, Response};
use crate::render::{Diagnostics, FailureClass, Renderer};
use crate::scene::{Container, LayoutAxis, NativeNode, NodeId, NodeKind, Padding, Paint};

/// How much of the prompt goes into the frame name.
const PROMPT_PREVIEW_CHARS: usize = 20;

pub const FRAME_LOST: &str = "Target frame lost. Please start over.";
pub const RENDERED: &str = "Feature rendered!";
pub const INVALID_DATA: &str = "Invalid data.";
pub const CANCELLED: &str = "Cancelled and frame removed.";
pub const FINISHED: &str = "Prototype finished. Ready for a new design.";
pub const ALREADY_RENDERED: &str = "Design already rendered. Start a new generation.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    /// A destination frame exists and waits for its design.
    Awaiting { frame: NodeId },
    /// The destination holds a rendered design.
    Populated { frame: NodeId },
}

impl SessionState {
    pub fn frame(self) -> Option<NodeId> {
        match self {
            Self::Idle => None,
            Self::Awaiting { frame } | Self::Populated { frame } => Some(frame),
        }
    }
}

/// Outcome of a successful render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    pub frame: NodeId,
    /// Top-level nodes attached to the destination.
    pub node_count: usize,
    pub diagnostics: Diagnostics,
}

pub struct SessionController {
    config: RendererConfig,
    catalog: Catalog,
    fonts: Box<dyn FontProvider>,
    icons: Box<dyn IconRegistry>,
    canvas: Canvas,
    state: SessionState,
    notifications: Vec<String>,
}

impl SessionController {
    pub fn new(
        config: RendererConfig,
        fonts: impl FontProvider + 'static,
        icons: impl IconRegistry + 'static,
    ) -> Self {
        let canvas = Canvas::new(Viewport::default(), config.frame.gap);
        Self {
            config,
            catalog: Catalog::builtin(),
            fonts: Box::new(fonts),
            icons: Box::new(icons),
            canvas,
            state: SessionState::Idle,
            notifications: Vec::new(),
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replaces the (still empty) page with one showing `viewport`.
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.canvas = Canvas::new(viewport, self.config.frame.gap);
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Mutable page access, for edits made outside the session.
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Drains the user-facing notifications queued since the last call.
    pub fn take_notifications(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notifications)
    }

    fn notify(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!(%message, "notification");
        self.notifications.push(message);
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// Opens a destination frame sized for `device` and places it on the page.
    ///
    /// An open session is released first: a populated destination stays on
    /// the page, an empty one is removed.
    pub fn start(&mut self, prompt: &str, device: &str) -> NodeId {
        match self.state {
            SessionState::Awaiting { frame } => {
                warn!(%frame, "discarding unused destination");
                self.canvas.remove(frame);
            }
            SessionState::Populated { frame } => {
                info!(%frame, "releasing previous destination");
            }
            SessionState::Idle => {}
        }

        let device = self.config.device(device);
        let style = &self.config.frame;
        let mut frame = Container::new(device.size);
        frame.layout = LayoutAxis::Vertical;
        frame.padding = Padding::uniform(style.padding);
        frame.spacing = style.spacing;
        frame.fills = vec![Paint::solid(style.background)];
        frame.clips_content = true;

        let preview: String = prompt.chars().take(PROMPT_PREVIEW_CHARS).collect();
        let name = format!("AI Proto - {preview}... ({})", device.name);
        let id = self.canvas.ids_mut().next_id();
        let id = self
            .canvas
            .add_frame(NativeNode::new(id, name, NodeKind::Container(frame)));

        info!(frame = %id, device = %device.name, "generation started");
        self.state = SessionState::Awaiting { frame: id };
        id
    }

    /// Renders `payload` into the open destination.
    ///
    /// Per-node failures do not fail the request; they are reported in the
    /// returned [`Diagnostics`] and as one notification per failure class.
    pub fn render(&mut self, payload: RenderPayload) -> Result<RenderReport, SessionError> {
        let frame = self.destination()?;

        let tree = match payload.into_tree() {
            Ok(tree) => tree,
            Err(err) => return Err(self.abort(frame, err)),
        };

        let mut renderer = Renderer::new(
            &self.config,
            &self.catalog,
            &*self.fonts,
            &*self.icons,
            self.canvas.ids_mut(),
        );
        let result = renderer.render_tree(&tree);
        let diagnostics = renderer.into_diagnostics();
        let nodes = match result {
            Ok(nodes) => nodes,
            Err(err) => return Err(self.abort(frame, err)),
        };

        let Some(destination) = self
            .canvas
            .frame_mut(frame)
            .and_then(NativeNode::as_container_mut)
        else {
            return Err(self.lost(frame).into());
        };
        let node_count = nodes.len();
        for node in nodes {
            destination.append(node);
        }

        for class in diagnostics.failure_classes() {
            let message = failure_message(class, &diagnostics);
            self.notify(message);
        }
        self.notify(RENDERED);
        info!(%frame, node_count, built = diagnostics.built, "generation complete");
        self.state = SessionState::Populated { frame };

        Ok(RenderReport {
            frame,
            node_count,
            diagnostics,
        })
    }

    /// Removes the destination and closes the session.
    pub fn cancel(&mut self) -> Result<(), SessionStateError> {
        let frame = self.open_frame()?;
        self.canvas.remove(frame);
        self.state = SessionState::Idle;
        info!(%frame, "generation cancelled");
        self.notify(CANCELLED);
        Ok(())
    }

    /// Closes the session, leaving the destination on the page.
    pub fn finish(&mut self) -> Result<(), SessionStateError> {
        let frame = self.open_frame()?;
        self.state = SessionState::Idle;
        info!(%frame, "generation finished");
        self.notify(FINISHED);
        Ok(())
    }

    /// Runs one request and answers it.
    ///
    /// The response carries exactly the notifications raised by this
    /// request; anything queued before it is dropped.
    pub fn handle(&mut self, request: Request) -> Response {
        let stale = self.take_notifications();
        if !stale.is_empty() {
            debug!(count = stale.len(), "dropping notifications from earlier calls");
        }

        let result = match request {
            Request::StartGeneration { prompt, device } => {
                let id = self.start(&prompt, &device);
                let frame_name = self
                    .canvas
                    .frame(id)
                    .map(|f| f.name.clone())
                    .unwrap_or_default();
                Ok(Response::GenerationStarted {
                    frame_id: id.get(),
                    frame_name,
                    notifications: Vec::new(),
                })
            }
            Request::RenderDesign { json: Some(payload) } => {
                self.render(payload).map(|report| Response::GenerationComplete {
                    node_count: report.node_count,
                    notifications: Vec::new(),
                })
            }
            Request::RenderDesign { json: None } => self.reject_missing_payload(),
            Request::CancelGeneration => self
                .cancel()
                .map(|()| Response::Cancelled {
                    notifications: Vec::new(),
                })
                .map_err(Into::into),
            Request::FinishGeneration => self
                .finish()
                .map(|()| Response::Finished {
                    notifications: Vec::new(),
                })
                .map_err(Into::into),
        };

        let response = result.unwrap_or_else(|err| Response::Error {
            message: err.to_string(),
            notifications: Vec::new(),
        });
        response.with_notifications(self.take_notifications())
    }

    // ------------------------------------------------------------------------
    // Failure paths
    // ------------------------------------------------------------------------

    /// The frame a render should go into, if the session has one.
    fn destination(&mut self) -> Result<NodeId, SessionStateError> {
        match self.state {
            SessionState::Idle => Err(self.refuse(SessionStateError::NoActiveDestination)),
            SessionState::Populated { .. } => Err(self.refuse(SessionStateError::AlreadyRendered)),
            SessionState::Awaiting { frame } if self.canvas.frame(frame).is_none() => {
                Err(self.lost(frame))
            }
            SessionState::Awaiting { frame } => Ok(frame),
        }
    }

    /// The destination cancel and finish act on.
    fn open_frame(&mut self) -> Result<NodeId, SessionStateError> {
        self.state
            .frame()
            .ok_or_else(|| self.refuse(SessionStateError::NoActiveDestination))
    }

    fn lost(&mut self, frame: NodeId) -> SessionStateError {
        error!(%frame, "destination frame was removed");
        self.state = SessionState::Idle;
        self.refuse(SessionStateError::DestinationRemoved { id: frame })
    }

    /// Tells the user why a request was refused.
    fn refuse(&mut self, err: SessionStateError) -> SessionStateError {
        warn!(error = %err, "request refused");
        self.notify(match err {
            SessionStateError::AlreadyRendered => ALREADY_RENDERED,
            SessionStateError::NoActiveDestination | SessionStateError::DestinationRemoved { .. } => {
                FRAME_LOST
            }
        });
        err
    }

    /// Tears the empty destination down after a structural failure.
    fn abort(&mut self, frame: NodeId, err: StructuralError) -> SessionError {
        error!(%frame, error = %err, "render aborted");
        self.canvas.remove(frame);
        self.state = SessionState::Idle;
        self.notify(format!("Render error: {err}."));
        err.into()
    }

    /// A render request without data leaves the destination open for a retry.
    fn reject_missing_payload(&mut self) -> Result<Response, SessionError> {
        self.destination()?;
        warn!("render request carried no design data");
        self.notify(INVALID_DATA);
        Err(StructuralError::MissingPayload.into())
    }
}

fn failure_message(class: FailureClass, diagnostics: &Diagnostics) -> String {
    match class {
        FailureClass::NodeBuild => match diagnostics.failures.as_slice() {
            [only] => format!("Render error on {}. Check console.", only.kind),
            many => format!("Render errors on {} components. Check console.", many.len()),
        },
        FailureClass::Vector => "Error creating SVG icon. See console.".to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::BuiltinIcons;
    use crate::primitive::StaticFonts;
    use crate::scene::{Point, Size, TextAlign};
    use serde_json::json;

    fn controller() -> SessionController {
        SessionController::new(
            RendererConfig::default(),
            StaticFonts::family("Inter"),
            BuiltinIcons,
        )
    }

    fn destination(session: &SessionController, id: NodeId) -> &NativeNode {
        session.canvas().frame(id).unwrap()
    }

    // ========================================================================
    // End-to-end
    // ========================================================================

    #[test]
    fn header_and_button_render_into_destination() {
        let mut session = controller();
        let id = session.start("A login screen for a bank app", "Mobile");
        let report = session
            .render(RenderPayload::Tree(json!([
                { "component": "Header", "props": { "text": "Hi", "textAlign": "CENTER" } },
                { "component": "Button", "props": { "label": "Go", "color": "primary" } }
            ])))
            .unwrap();
        assert_eq!(report.node_count, 2);
        assert!(report.diagnostics.is_clean());
        assert_eq!(session.state(), SessionState::Populated { frame: id });

        let frame = destination(&session, id);
        assert_eq!(frame.children().len(), 2);
        let header = frame.children()[0].as_text().unwrap();
        assert_eq!(header.characters, "Hi");
        assert_eq!(header.align, TextAlign::Center);
        let button = &frame.children()[1];
        assert_eq!(button.name, "Go (Button)");
        assert_eq!(button.find_by_name("Go").unwrap().as_text().unwrap().characters, "Go");
        assert_eq!(session.take_notifications(), vec![RENDERED.to_string()]);
    }

    #[test]
    fn bare_object_is_one_structural_failure() {
        let mut session = controller();
        session.start("x", "Mobile");
        let err = session
            .render(RenderPayload::Tree(json!({ "component": "Header", "props": {} })))
            .unwrap_err();
        assert!(matches!(
            err,
            SessionError::Structural(StructuralError::NotASequence { .. })
        ));
        assert_eq!(session.take_notifications().len(), 1);
        assert!(session.canvas().frames().is_empty());
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn same_tree_renders_identically() {
        let tree = json!([
            { "component": "Card", "props": { "children": [
                { "component": "Text Field", "props": { "label": "Email", "icon": "email" } },
                { "component": "Switch", "props": { "checked": true, "label": "Remember" } }
            ] } }
        ]);
        let mut session = controller();
        let first = session.start("one", "Mobile");
        session.render(RenderPayload::Tree(tree.clone())).unwrap();
        session.finish().unwrap();
        let second = session.start("two", "Mobile");
        session.render(RenderPayload::Tree(tree)).unwrap();

        let outline = |id| {
            destination(&session, id)
                .children()
                .iter()
                .map(NativeNode::outline)
                .collect::<String>()
        };
        assert_eq!(outline(first), outline(second));
    }

    #[test]
    fn failures_notify_once_per_class() {
        let mut session = controller();
        session.start("x", "Mobile");
        let report = session
            .render(RenderPayload::Tree(json!([
                { "component": "Checkbox", "props": { "checked": "no" } },
                { "component": "Switch", "props": { "checked": "no" } },
                { "component": "Button", "props": { "icon": "x", "svgData": "<svg" } },
                { "component": "Gizmo", "props": {} }
            ])))
            .unwrap();
        assert_eq!(report.node_count, 4);
        assert_eq!(
            session.take_notifications(),
            vec![
                "Render errors on 2 components. Check console.".to_string(),
                "Error creating SVG icon. See console.".to_string(),
                RENDERED.to_string(),
            ]
        );
    }

    #[test]
    fn raw_text_payload_with_fences() {
        let mut session = controller();
        let id = session.start("x", "Desktop");
        session
            .render(RenderPayload::Text(
                "```json\n[{\"component\":\"Label\",\"props\":{\"text\":\"ok\"}}]\n```".into(),
            ))
            .unwrap();
        assert_eq!(destination(&session, id).children().len(), 1);
    }

    // ========================================================================
    // Session state
    // ========================================================================

    #[test]
    fn destination_frame_setup() {
        let mut session = controller();
        let id = session.start("Checkout flow with saved cards", "Tablet (iPad)");
        let frame = destination(&session, id);
        assert_eq!(frame.name, "AI Proto - Checkout flow with s... (Tablet)");
        let container = frame.as_container().unwrap();
        assert_eq!(container.size, Size::new(768.0, 1024.0));
        assert_eq!(container.layout, LayoutAxis::Vertical);
        assert_eq!(container.padding, Padding::uniform(24.0));
        assert_eq!(container.spacing, 16.0);
        assert!(container.clips_content);
    }

    #[test]
    fn requests_without_a_session_fail_explicitly() {
        let mut session = controller();
        let err = session.render(RenderPayload::Tree(json!([]))).unwrap_err();
        assert!(matches!(
            err,
            SessionError::State(SessionStateError::NoActiveDestination)
        ));
        assert_eq!(session.take_notifications(), vec![FRAME_LOST.to_string()]);
        assert_eq!(session.cancel(), Err(SessionStateError::NoActiveDestination));
        assert_eq!(session.finish(), Err(SessionStateError::NoActiveDestination));
        assert_eq!(
            session.take_notifications(),
            vec![FRAME_LOST.to_string(), FRAME_LOST.to_string()]
        );
    }

    #[test]
    fn second_render_is_rejected() {
        let mut session = controller();
        session.start("x", "Mobile");
        session.render(RenderPayload::Tree(json!([]))).unwrap();
        let err = session.render(RenderPayload::Tree(json!([]))).unwrap_err();
        assert!(matches!(
            err,
            SessionError::State(SessionStateError::AlreadyRendered)
        ));
        assert_eq!(
            session.take_notifications(),
            vec![RENDERED.to_string(), ALREADY_RENDERED.to_string()]
        );
    }

    #[test]
    fn removed_destination_is_reported() {
        let mut session = controller();
        let id = session.start("x", "Mobile");
        session.canvas_mut().remove(id);
        let err = session.render(RenderPayload::Tree(json!([]))).unwrap_err();
        assert!(matches!(
            err,
            SessionError::State(SessionStateError::DestinationRemoved { .. })
        ));
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.take_notifications(), vec![FRAME_LOST.to_string()]);
    }

    #[test]
    fn cancel_removes_and_finish_keeps() {
        let mut session = controller();
        let cancelled = session.start("a", "Mobile");
        session.cancel().unwrap();
        assert!(session.canvas().frame(cancelled).is_none());

        let kept = session.start("b", "Mobile");
        session.render(RenderPayload::Tree(json!([]))).unwrap();
        session.finish().unwrap();
        assert!(session.canvas().frame(kept).is_some());
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn restart_discards_only_empty_destinations() {
        let mut session = controller();
        let empty = session.start("a", "Mobile");
        let populated = session.start("b", "Mobile");
        assert!(session.canvas().frame(empty).is_none());
        session.render(RenderPayload::Tree(json!([]))).unwrap();
        session.start("c", "Mobile");
        assert!(session.canvas().frame(populated).is_some());
        assert_eq!(session.canvas().frames().len(), 2);
    }

    #[test]
    fn custom_viewport_and_catalog() {
        let mut specs = Catalog::builtin().components().to_vec();
        let image = specs.iter_mut().find(|spec| spec.name == "Image").unwrap();
        image.props.iter_mut().find(|p| p.name == "alt").unwrap().default = Some(json!("Photo"));
        let catalog = Catalog::new(specs);

        let viewport = Viewport {
            center: Point::new(500.0, 0.0),
            top: -50.0,
        };
        let mut session = controller().with_catalog(catalog).with_viewport(viewport);
        assert_eq!(session.canvas().viewport(), viewport);

        let id = session.start("x", "Mobile");
        let frame = destination(&session, id);
        let width = frame.as_container().unwrap().size.width;
        assert_eq!(frame.position, Some(Point::new(500.0 - width / 2.0, 50.0)));

        session
            .render(RenderPayload::Tree(json!([{ "component": "Image", "props": {} }])))
            .unwrap();
        assert_eq!(destination(&session, id).children()[0].name, "Photo");
    }

    // ========================================================================
    // Requests
    // ========================================================================

    #[test]
    fn handle_runs_a_full_exchange() {
        let mut session = controller();
        let started = session.handle(Request::StartGeneration {
            prompt: "Profile".into(),
            device: "Mobile".into(),
        });
        assert!(matches!(started, Response::GenerationStarted { ref frame_name, .. } if frame_name == "AI Proto - Profile... (Mobile)"));

        let missing = session.handle(Request::RenderDesign { json: None });
        assert!(matches!(missing, Response::Error { .. }));
        assert_eq!(missing.notifications(), [INVALID_DATA.to_string()]);
        assert!(session.take_notifications().is_empty());

        let done = session.handle(Request::RenderDesign {
            json: Some(RenderPayload::Tree(json!([{ "component": "Label", "props": { "text": "x" } }]))),
        });
        assert_eq!(
            done,
            Response::GenerationComplete {
                node_count: 1,
                notifications: vec![RENDERED.to_string()]
            }
        );
        assert_eq!(
            session.handle(Request::FinishGeneration),
            Response::Finished {
                notifications: vec![FINISHED.to_string()]
            }
        );
        let refused = session.handle(Request::CancelGeneration);
        assert!(matches!(refused, Response::Error { .. }));
        assert_eq!(refused.notifications(), [FRAME_LOST.to_string()]);
    }

    #[test]
    fn responses_carry_only_their_own_notifications() {
        let mut session = controller();
        let start = || Request::StartGeneration {
            prompt: "Feed".into(),
            device: "Mobile".into(),
        };
        let render = |tree| Request::RenderDesign {
            json: Some(RenderPayload::Tree(tree)),
        };

        assert!(session.handle(start()).notifications().is_empty());
        session.handle(render(json!([])));
        session.handle(Request::FinishGeneration);
        session.handle(start());
        let done = session.handle(render(json!([{ "component": "Label", "props": {} }])));
        assert_eq!(
            done,
            Response::GenerationComplete {
                node_count: 1,
                notifications: vec![RENDERED.to_string()]
            }
        );

        // A structural failure does not leak into the next exchange.
        session.handle(start());
        let failed = session.handle(render(json!({ "not": "a list" })));
        assert_eq!(failed.notifications().len(), 1);
        assert!(failed.notifications()[0].starts_with("Render error:"));
        let restarted = session.handle(start());
        assert!(restarted.notifications().is_empty());
    }

    #[test]
    fn queued_direct_call_notifications_are_dropped_by_handle() {
        let mut session = controller();
        session.start("x", "Mobile");
        session.cancel().unwrap();
        let response = session.handle(Request::StartGeneration {
            prompt: "y".into(),
            device: "Mobile".into(),
        });
        assert!(response.notifications().is_empty());
    }
}
