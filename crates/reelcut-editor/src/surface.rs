//! Render bridge between the model and the host surface.
//!
//! The surface is whatever the host renders with; the engine only needs it
//! to place rectangles, report a clip's rendered origin, and move the cursor
//! marker. All geometry is computed here from the model — the model is the
//! source of truth, and surface geometry is consulted only once, at the
//! start of a drag or resize.

use std::collections::HashMap;

use reelcut_core::{Rect, Vec2};
use reelcut_timeline::{Clip, TimelineModel};
use uuid::Uuid;

use crate::config::EditorConfig;
use crate::state::ResizeEdge;

/// Vertical inset of a clip rectangle within its lane.
const CLIP_PAD: f32 = 3.0;

/// Width of the resize affordance at each clip edge.
const HANDLE_PX: f32 = 5.0;

/// Host rendering surface: positioned rectangles plus a cursor marker.
pub trait RenderSurface {
    /// Width in pixels of the track content area.
    fn track_width(&self) -> f32;

    /// Place or move a track lane rectangle.
    fn place_track(&mut self, id: Uuid, rect: Rect);

    /// Place or move a clip rectangle.
    fn place_clip(&mut self, id: Uuid, rect: Rect);

    /// Remove a clip element.
    fn remove_clip(&mut self, id: Uuid);

    /// Remove all clip elements (timeline replaced wholesale).
    fn clear_clips(&mut self);

    /// Rendered top-left of a clip element, if the surface still has it.
    fn clip_origin(&self, id: Uuid) -> Option<Vec2>;

    /// Move the playback cursor marker to a horizontal offset.
    fn set_cursor(&mut self, x: f32);
}

/// Computes layout from the model and keeps the surface in step with it.
#[derive(Debug, Clone, Copy)]
pub struct RenderBridge {
    track_height: f32,
    ruler_height: f32,
}

impl RenderBridge {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            track_height: config.track_height,
            ruler_height: config.ruler_height,
        }
    }

    /// Lane rectangle for a track index.
    pub fn track_rect(&self, index: usize, width: f32) -> Rect {
        Rect::new(
            0.0,
            self.ruler_height + index as f32 * self.track_height,
            width,
            self.track_height,
        )
    }

    /// Rendered rectangle for a clip on a lane.
    pub fn clip_rect(&self, clip: &Clip, track_index: usize, config: &EditorConfig) -> Rect {
        let scale = config.scale();
        Rect::new(
            scale.seconds_to_offset(clip.start_time) as f32,
            self.ruler_height + track_index as f32 * self.track_height + CLIP_PAD,
            scale.seconds_to_offset(clip.duration) as f32,
            self.track_height - 2.0 * CLIP_PAD,
        )
    }

    /// Push every track lane and clip rectangle to the surface.
    pub fn sync(&self, model: &TimelineModel, config: &EditorConfig, surface: &mut dyn RenderSurface) {
        let width = surface.track_width();
        for track in model.tracks() {
            surface.place_track(track.id, self.track_rect(track.index, width));
        }
        for clip in model.clips() {
            if let Some(track) = model.track(clip.track_id) {
                surface.place_clip(clip.id, self.clip_rect(clip, track.index, config));
            }
        }
    }

    /// Push one clip's rectangle to the surface (per-frame drag/resize path).
    pub fn sync_clip(
        &self,
        model: &TimelineModel,
        config: &EditorConfig,
        surface: &mut dyn RenderSurface,
        clip_id: Uuid,
    ) {
        if let Some(clip) = model.clip(clip_id) {
            if let Some(track) = model.track(clip.track_id) {
                surface.place_clip(clip.id, self.clip_rect(clip, track.index, config));
            }
        }
    }

    /// Move the cursor marker to a time position.
    pub fn set_cursor(&self, config: &EditorConfig, surface: &mut dyn RenderSurface, seconds: f64) {
        surface.set_cursor(config.scale().seconds_to_offset(seconds) as f32);
    }

    // ── Hit testing ─────────────────────────────────────────────

    /// Topmost clip under the pointer (latest-placed wins, like the DOM).
    pub fn clip_at(&self, model: &TimelineModel, config: &EditorConfig, pos: Vec2) -> Option<Uuid> {
        model.clips().iter().rev().find_map(|clip| {
            let track = model.track(clip.track_id)?;
            self.clip_rect(clip, track.index, config)
                .contains(pos)
                .then_some(clip.id)
        })
    }

    /// Resize affordance under the pointer, if any.
    pub fn resize_handle_at(
        &self,
        model: &TimelineModel,
        config: &EditorConfig,
        pos: Vec2,
    ) -> Option<(Uuid, ResizeEdge)> {
        model.clips().iter().rev().find_map(|clip| {
            let track = model.track(clip.track_id)?;
            let rect = self.clip_rect(clip, track.index, config);
            if !rect.contains(pos) {
                return None;
            }
            if pos.x < rect.x + HANDLE_PX {
                Some((clip.id, ResizeEdge::Left))
            } else if pos.x >= rect.right() - HANDLE_PX {
                Some((clip.id, ResizeEdge::Right))
            } else {
                None
            }
        })
    }

    /// Track index under a vertical position, `None` within the ruler band.
    pub fn track_index_at(&self, y: f32) -> Option<usize> {
        if y < self.ruler_height {
            return None;
        }
        Some(((y - self.ruler_height) / self.track_height).floor() as usize)
    }

    /// Whether a vertical position falls in the ruler band.
    pub fn in_ruler(&self, y: f32) -> bool {
        (0.0..self.ruler_height).contains(&y)
    }

    /// A clip's lane-relative top at its current track (drag-origin capture
    /// fallback when the surface no longer has the element).
    pub fn clip_origin_fallback(
        &self,
        model: &TimelineModel,
        config: &EditorConfig,
        clip_id: Uuid,
    ) -> Option<Vec2> {
        let clip = model.clip(clip_id)?;
        let track = model.track(clip.track_id)?;
        let rect = self.clip_rect(clip, track.index, config);
        Some(rect.min())
    }
}

/// In-memory surface used by tests and the headless demo: records every
/// placed rectangle and the cursor offset.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    width: f32,
    tracks: HashMap<Uuid, Rect>,
    clips: HashMap<Uuid, Rect>,
    cursor_x: f32,
}

impl HeadlessSurface {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            tracks: HashMap::new(),
            clips: HashMap::new(),
            cursor_x: 0.0,
        }
    }

    pub fn clip_rect(&self, id: Uuid) -> Option<Rect> {
        self.clips.get(&id).copied()
    }

    pub fn track_rect(&self, id: Uuid) -> Option<Rect> {
        self.tracks.get(&id).copied()
    }

    pub fn cursor_x(&self) -> f32 {
        self.cursor_x
    }
}

impl RenderSurface for HeadlessSurface {
    fn track_width(&self) -> f32 {
        self.width
    }

    fn place_track(&mut self, id: Uuid, rect: Rect) {
        self.tracks.insert(id, rect);
    }

    fn place_clip(&mut self, id: Uuid, rect: Rect) {
        self.clips.insert(id, rect);
    }

    fn remove_clip(&mut self, id: Uuid) {
        self.clips.remove(&id);
    }

    fn clear_clips(&mut self) {
        self.clips.clear();
    }

    fn clip_origin(&self, id: Uuid) -> Option<Vec2> {
        self.clips.get(&id).map(|rect| rect.min())
    }

    fn set_cursor(&mut self, x: f32) {
        self.cursor_x = x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelcut_timeline::ClipSpec;

    fn setup() -> (TimelineModel, EditorConfig, RenderBridge) {
        let model = TimelineModel::with_default_tracks(60.0);
        let config = EditorConfig::default();
        let bridge = RenderBridge::new(&config);
        (model, config, bridge)
    }

    #[test]
    fn test_clip_rect_layout() {
        let (mut model, config, bridge) = setup();
        let track_id = model.tracks()[1].id; // Audio lane, index 1
        let clip_id = model.add_clip(
            track_id,
            ClipSpec {
                start_time: 2.0,
                duration: Some(5.0),
                ..Default::default()
            },
        );

        let clip = model.clip(clip_id).unwrap();
        let rect = bridge.clip_rect(clip, 1, &config);
        assert_eq!(rect.x, 200.0);
        assert_eq!(rect.y, 20.0 + 40.0 + 3.0);
        assert_eq!(rect.width, 500.0);
        assert_eq!(rect.height, 34.0);
    }

    #[test]
    fn test_sync_places_everything() {
        let (mut model, config, bridge) = setup();
        let track_id = model.tracks()[0].id;
        let clip_id = model.add_clip(track_id, ClipSpec::default());

        let mut surface = HeadlessSurface::new(6000.0);
        bridge.sync(&model, &config, &mut surface);

        assert!(surface.track_rect(track_id).is_some());
        assert_eq!(surface.clip_rect(clip_id).unwrap().x, 0.0);
    }

    #[test]
    fn test_clip_hit_testing() {
        let (mut model, config, bridge) = setup();
        let track_id = model.tracks()[0].id;
        let clip_id = model.add_clip(
            track_id,
            ClipSpec {
                start_time: 1.0,
                duration: Some(5.0),
                ..Default::default()
            },
        );

        // Center of the clip body
        assert_eq!(
            bridge.clip_at(&model, &config, Vec2::new(350.0, 40.0)),
            Some(clip_id)
        );
        // Empty lane space
        assert_eq!(bridge.clip_at(&model, &config, Vec2::new(900.0, 40.0)), None);
        // Same x, but in the ruler band
        assert_eq!(bridge.clip_at(&model, &config, Vec2::new(350.0, 10.0)), None);
    }

    #[test]
    fn test_resize_handle_hit_testing() {
        let (mut model, config, bridge) = setup();
        let track_id = model.tracks()[0].id;
        let clip_id = model.add_clip(
            track_id,
            ClipSpec {
                start_time: 1.0,
                duration: Some(5.0),
                ..Default::default()
            },
        );

        // Clip spans x ∈ [100, 600); handles are 5 px at each end
        assert_eq!(
            bridge.resize_handle_at(&model, &config, Vec2::new(102.0, 40.0)),
            Some((clip_id, ResizeEdge::Left))
        );
        assert_eq!(
            bridge.resize_handle_at(&model, &config, Vec2::new(598.0, 40.0)),
            Some((clip_id, ResizeEdge::Right))
        );
        assert_eq!(
            bridge.resize_handle_at(&model, &config, Vec2::new(350.0, 40.0)),
            None
        );
    }

    #[test]
    fn test_track_index_at() {
        let (_, _, bridge) = setup();
        assert_eq!(bridge.track_index_at(10.0), None); // ruler
        assert_eq!(bridge.track_index_at(25.0), Some(0));
        assert_eq!(bridge.track_index_at(20.0 + 40.0 * 2.0 + 5.0), Some(2));
        assert!(bridge.in_ruler(10.0));
        assert!(!bridge.in_ruler(25.0));
    }
}
