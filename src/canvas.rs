//! The host page: top-level frames and their placement.
//!
//! [`Canvas`] owns every frame placed on the page along with the
//! [`IdAllocator`] that numbers their nodes. New frames are placed to the
//! right of existing work so that successive generations line up in a row.

use serde::Serialize;
use tracing::debug;

use crate::scene::{IdAllocator, NativeNode, NodeId, Point, Size};

/// Offset of the first frame below the top of the viewport.
const FIRST_FRAME_OFFSET: f32 = 100.0;

/// Visible region of the page, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Viewport {
    pub center: Point,
    pub top: f32,
}

#[derive(Debug, Default)]
pub struct Canvas {
    frames: Vec<NativeNode>,
    ids: IdAllocator,
    viewport: Viewport,
    gap: f32,
}

impl Canvas {
    /// Creates an empty page leaving `gap` between neighbouring frames.
    pub fn new(viewport: Viewport, gap: f32) -> Self {
        Self {
            frames: Vec::new(),
            ids: IdAllocator::new(),
            viewport,
            gap,
        }
    }

    pub fn ids_mut(&mut self) -> &mut IdAllocator {
        &mut self.ids
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Where the next frame goes: right of the right-most frame, level with
    /// the top-most one; on an empty page, centred on the viewport.
    pub fn next_position(&self, size: Size) -> Point {
        let mut right = f32::NEG_INFINITY;
        let mut top = f32::INFINITY;
        for frame in &self.frames {
            let at = frame.position.unwrap_or_default();
            let width = frame.as_container().map_or(0.0, |c| c.size.width);
            right = right.max(at.x + width);
            top = top.min(at.y);
        }
        if self.frames.is_empty() {
            Point::new(
                self.viewport.center.x - size.width / 2.0,
                self.viewport.top + FIRST_FRAME_OFFSET,
            )
        } else {
            Point::new(right + self.gap, top)
        }
    }

    /// Places `frame` on the page and returns its id.
    pub fn add_frame(&mut self, mut frame: NativeNode) -> NodeId {
        let size = frame.as_container().map(|c| c.size).unwrap_or_default();
        let position = self.next_position(size);
        debug!(frame = %frame.id, x = position.x, y = position.y, "placing frame");
        frame.position = Some(position);
        let id = frame.id;
        self.frames.push(frame);
        id
    }

    pub fn frame(&self, id: NodeId) -> Option<&NativeNode> {
        self.frames.iter().find(|f| f.id == id)
    }

    pub fn frame_mut(&mut self, id: NodeId) -> Option<&mut NativeNode> {
        self.frames.iter_mut().find(|f| f.id == id)
    }

    /// Removes a frame and everything in it.
    pub fn remove(&mut self, id: NodeId) -> Option<NativeNode> {
        let index = self.frames.iter().position(|f| f.id == id)?;
        Some(self.frames.remove(index))
    }

    pub fn frames(&self) -> &[NativeNode] {
        &self.frames
    }
}

// ============================================================================
// Tests
// ============================================================================
