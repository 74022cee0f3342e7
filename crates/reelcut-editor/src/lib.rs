//! ReelCut Editor - Interaction engine for the timeline
//!
//! Converts pointer input into model mutations and drives the simulated
//! playback cursor:
//! - Snapping during drag
//! - Drag state machine with cross-track reassignment
//! - Resize state machine (left/right edge)
//! - Wall-clock-driven playback controller
//! - Render bridge onto an abstract host surface

pub mod config;
pub mod drag;
pub mod editor;
pub mod playback;
pub mod resize;
pub mod snap;
pub mod state;
pub mod surface;

pub use config::{BoundsPolicy, EditorConfig};
pub use editor::Editor;
pub use playback::{Clock, ManualClock, PlaybackController, PlaybackState, SystemClock, TICK_INTERVAL};
pub use snap::{SnapEngine, SnapKind, SnapPoint};
pub use state::{DragState, EditorState, Interaction, ResizeEdge, ResizeState};
pub use surface::{HeadlessSurface, RenderBridge, RenderSurface};
