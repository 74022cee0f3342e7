//! Drag state machine: pointer motion → clip repositioning.
//!
//! Each move recomputes the clip's left offset from the drag origin, offers
//! the corresponding time to the snap engine, clamps to the track width, and
//! reassigns the clip across tracks when the pointer has left its lane by
//! more than half a track height. The model is the source of truth
//! throughout; surface geometry is read once, at drag start.

use reelcut_core::Vec2;
use reelcut_timeline::{Clip, TimelineModel};
use tracing::debug;
use uuid::Uuid;

use crate::config::EditorConfig;
use crate::snap::SnapEngine;
use crate::state::DragState;

/// Capture the drag origin at pointer-down on a clip body.
///
/// `origin` is the clip's rendered top-left, with `y` relative to the track
/// area (ruler excluded).
pub fn begin(clip: &Clip, pointer: Vec2, origin: Vec2, config: &EditorConfig) -> DragState {
    let width = config.scale().seconds_to_offset(clip.duration) as f32;
    DragState {
        clip_id: clip.id,
        pointer_origin: pointer,
        origin_left: origin.x,
        origin_top: origin.y,
        clip_width: width,
    }
}

/// Apply one pointer move to an active drag.
///
/// A clip that can no longer be resolved makes this frame a no-op; the drag
/// itself stays active.
pub fn update(
    model: &mut TimelineModel,
    snap: &SnapEngine,
    config: &EditorConfig,
    drag: &DragState,
    pointer: Vec2,
    track_width: f32,
) {
    let Some(clip) = model.clip(drag.clip_id) else {
        return;
    };
    let clip_kind = clip.kind;
    let current_track = clip.track_id;
    let scale = config.scale();

    let delta = pointer - drag.pointer_origin;

    // Horizontal: snap, then clamp to the visible track width.
    let mut left = drag.origin_left + delta.x;
    let proposed = scale.offset_to_seconds(left as f64);
    if let Some(snapped) = snap.snap(model, drag.clip_id, proposed, scale) {
        left = scale.seconds_to_offset(snapped) as f32;
    }
    let max_left = (track_width - drag.clip_width).max(0.0);
    left = left.clamp(0.0, max_left);

    // Vertical: reassign only past half a lane, and only onto a compatible
    // track. An incompatible target leaves the clip where it is.
    let mut target_track = None;
    if delta.y.abs() > config.track_height / 2.0 {
        let top = drag.origin_top + delta.y;
        if top >= 0.0 {
            let index = (top / config.track_height).floor() as usize;
            if let Some(track) = model.track_at_index(index) {
                if clip_kind == track.kind && track.id != current_track {
                    target_track = Some(track.id);
                }
            }
        }
    }

    let start_time = scale.offset_to_seconds(left as f64);
    if let Some(clip) = model.clip_mut(drag.clip_id) {
        clip.start_time = start_time;
        if let Some(track_id) = target_track {
            debug!(clip_id = %drag.clip_id, to_track = %track_id, "clip reassigned");
            clip.track_id = track_id;
        }
    }
}

/// Commit an ended drag: fire the change callback with the full timeline.
pub fn finish(model: &mut TimelineModel, clip_id: Uuid) {
    debug!(clip_id = %clip_id, "drag committed");
    model.emit_change();
}
