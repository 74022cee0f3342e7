//! Resize state machine: pointer motion on a clip edge → timing changes.
//!
//! Right-edge resize recomputes the duration from the new width; left-edge
//! resize moves the start while holding the right edge's absolute time
//! fixed. No snapping here — that asymmetry with drag is observable source
//! behavior and is kept.

use reelcut_core::Vec2;
use reelcut_timeline::{Clip, TimelineModel};
use tracing::debug;
use uuid::Uuid;

use crate::config::{BoundsPolicy, EditorConfig};
use crate::state::{ResizeEdge, ResizeState};

/// Capture the resize origin at pointer-down on a handle.
///
/// `origin_left` is the clip's rendered left offset at grab time.
pub fn begin(clip: &Clip, edge: ResizeEdge, pointer: Vec2, origin_left: f32, config: &EditorConfig) -> ResizeState {
    ResizeState {
        clip_id: clip.id,
        edge,
        pointer_origin_x: pointer.x,
        origin_left,
        origin_width: config.scale().seconds_to_offset(clip.duration) as f32,
        origin_start: clip.start_time,
        origin_duration: clip.duration,
    }
}

/// Apply one pointer move to an active resize.
pub fn update(model: &mut TimelineModel, config: &EditorConfig, resize: &ResizeState, pointer_x: f32) {
    let scale = config.scale();
    let min_width = config.min_clip_width_px as f32;
    let dx = pointer_x - resize.pointer_origin_x;

    let Some(clip) = model.clip_mut(resize.clip_id) else {
        return;
    };

    match resize.edge {
        ResizeEdge::Right => {
            let width = (resize.origin_width + dx).max(min_width);
            let mut duration = scale.offset_to_seconds(width as f64);
            if config.bounds == BoundsPolicy::Strict {
                let min_duration = scale.offset_to_seconds(min_width as f64);
                duration = duration.min((config.max_duration - clip.start_time).max(min_duration));
            }
            clip.duration = duration;
        }
        ResizeEdge::Left => {
            let width = (resize.origin_width - dx).max(min_width);
            let left = (resize.origin_left + (resize.origin_width - width)).max(0.0);
            let start = scale.offset_to_seconds(left as f64);
            clip.start_time = start;
            clip.duration = resize.origin_duration + (resize.origin_start - start);
        }
    }
}

/// Commit an ended resize: fire the change callback with the full timeline.
pub fn finish(model: &mut TimelineModel, clip_id: Uuid) {
    debug!(clip_id = %clip_id, "resize committed");
    model.emit_change();
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelcut_timeline::ClipSpec;

    fn setup(start: f64, duration: f64, bounds: BoundsPolicy) -> (TimelineModel, EditorConfig, Uuid) {
        let mut model = TimelineModel::with_default_tracks(60.0);
        let track_id = model.tracks()[0].id;
        let clip_id = model.add_clip(
            track_id,
            ClipSpec {
                start_time: start,
                duration: Some(duration),
                ..Default::default()
            },
        );
        let config = EditorConfig {
            bounds,
            ..Default::default()
        };
        (model, config, clip_id)
    }

    fn resize_for(
        model: &TimelineModel,
        clip_id: Uuid,
        edge: ResizeEdge,
        config: &EditorConfig,
    ) -> ResizeState {
        let clip = model.clip(clip_id).unwrap();
        let left = config.scale().seconds_to_offset(clip.start_time) as f32;
        let grab_x = match edge {
            ResizeEdge::Left => left,
            ResizeEdge::Right => left + config.scale().seconds_to_offset(clip.duration) as f32,
        };
        begin(clip, edge, Vec2::new(grab_x, 10.0), left, config)
    }

    #[test]
    fn test_right_resize_keeps_start() {
        let (mut model, config, clip_id) = setup(2.0, 5.0, BoundsPolicy::Permissive);
        let resize = resize_for(&model, clip_id, ResizeEdge::Right, &config);

        update(&mut model, &config, &resize, resize.pointer_origin_x + 150.0);

        let clip = model.clip(clip_id).unwrap();
        assert_eq!(clip.start_time, 2.0);
        assert!((clip.duration - 6.5).abs() < 1e-6);
    }

    #[test]
    fn test_right_resize_minimum_width() {
        let (mut model, config, clip_id) = setup(2.0, 5.0, BoundsPolicy::Permissive);
        let resize = resize_for(&model, clip_id, ResizeEdge::Right, &config);

        update(&mut model, &config, &resize, resize.pointer_origin_x - 9999.0);

        // 50 px minimum at 100 px/s is half a second
        let clip = model.clip(clip_id).unwrap();
        assert!((clip.duration - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_left_resize_holds_right_edge() {
        let (mut model, config, clip_id) = setup(2.0, 5.0, BoundsPolicy::Permissive);
        let end_before = model.clip(clip_id).unwrap().end_time();
        let resize = resize_for(&model, clip_id, ResizeEdge::Left, &config);

        update(&mut model, &config, &resize, resize.pointer_origin_x + 120.0);

        let clip = model.clip(clip_id).unwrap();
        assert!((clip.start_time - 3.2).abs() < 1e-6);
        assert!((clip.end_time() - end_before).abs() < 1e-9);
    }

    #[test]
    fn test_left_resize_clamps_offset_at_zero() {
        let (mut model, config, clip_id) = setup(2.0, 5.0, BoundsPolicy::Permissive);
        let end_before = model.clip(clip_id).unwrap().end_time();
        let resize = resize_for(&model, clip_id, ResizeEdge::Left, &config);

        update(&mut model, &config, &resize, resize.pointer_origin_x - 9999.0);

        let clip = model.clip(clip_id).unwrap();
        assert_eq!(clip.start_time, 0.0);
        assert!((clip.end_time() - end_before).abs() < 1e-9);
    }

    #[test]
    fn test_permissive_right_edge_may_pass_span() {
        let (mut model, config, clip_id) = setup(55.0, 4.0, BoundsPolicy::Permissive);
        let resize = resize_for(&model, clip_id, ResizeEdge::Right, &config);

        update(&mut model, &config, &resize, resize.pointer_origin_x + 500.0);

        // 55 + 9 = 64 s, past the 60 s span: allowed under Permissive
        let clip = model.clip(clip_id).unwrap();
        assert!((clip.end_time() - 64.0).abs() < 1e-6);
    }

    #[test]
    fn test_strict_right_edge_capped_at_span() {
        let (mut model, config, clip_id) = setup(55.0, 4.0, BoundsPolicy::Strict);
        let resize = resize_for(&model, clip_id, ResizeEdge::Right, &config);

        update(&mut model, &config, &resize, resize.pointer_origin_x + 500.0);

        let clip = model.clip(clip_id).unwrap();
        assert!((clip.end_time() - 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_resize_never_snaps() {
        // A drag to 4.95 s would snap to 5.0; a left resize landing the edge
        // at 4.95 s must stay at 4.95.
        let (mut model, config, clip_id) = setup(2.0, 5.0, BoundsPolicy::Permissive);
        let track_id = model.tracks()[0].id;
        model.add_clip(
            track_id,
            ClipSpec {
                start_time: 5.0,
                duration: Some(3.0),
                ..Default::default()
            },
        );
        let resize = resize_for(&model, clip_id, ResizeEdge::Left, &config);

        update(&mut model, &config, &resize, resize.pointer_origin_x + 295.0);

        let clip = model.clip(clip_id).unwrap();
        assert!((clip.start_time - 4.95).abs() < 1e-6);
    }

    #[test]
    fn test_missing_clip_is_noop_frame() {
        let (mut model, config, clip_id) = setup(2.0, 5.0, BoundsPolicy::Permissive);
        let resize = resize_for(&model, clip_id, ResizeEdge::Right, &config);
        model.remove_clip(clip_id);

        update(&mut model, &config, &resize, resize.pointer_origin_x + 100.0);
        assert!(model.clip(clip_id).is_none());
    }
}
