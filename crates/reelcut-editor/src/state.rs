//! Explicit interaction state.
//!
//! The transient fields of an in-progress drag or resize live in one value
//! object rather than ad-hoc instance fields, so the state machines can be
//! driven and inspected in isolation.

use reelcut_core::Vec2;
use uuid::Uuid;

/// Which edge of a clip a resize affordance grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Left,
    Right,
}

/// Captured at pointer-down on a clip body.
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    pub clip_id: Uuid,
    /// Pointer position at drag start.
    pub pointer_origin: Vec2,
    /// Clip's rendered left offset at drag start.
    pub origin_left: f32,
    /// Clip's rendered top offset at drag start, relative to the track area.
    pub origin_top: f32,
    /// Clip's rendered width; fixed for the duration of the drag.
    pub clip_width: f32,
}

/// Captured at pointer-down on a resize handle.
#[derive(Debug, Clone, Copy)]
pub struct ResizeState {
    pub clip_id: Uuid,
    pub edge: ResizeEdge,
    /// Pointer x at resize start.
    pub pointer_origin_x: f32,
    /// Clip's rendered left offset at resize start.
    pub origin_left: f32,
    /// Clip's rendered width at resize start.
    pub origin_width: f32,
    /// Clip timing at resize start.
    pub origin_start: f64,
    pub origin_duration: f64,
}

/// The editor's interaction state machine.
///
/// Drag and resize are mutually exclusive per editor instance; the editor
/// asserts against initiating one while the other is active.
#[derive(Debug, Clone, Copy, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Drag(DragState),
    Resize(ResizeState),
}

/// Editor interaction state value object.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditorState {
    pub interaction: Interaction,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.interaction, Interaction::Idle)
    }

    /// Return the current interaction, leaving the state Idle.
    pub fn take(&mut self) -> Interaction {
        std::mem::take(&mut self.interaction)
    }
}
