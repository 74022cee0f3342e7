//! The editor facade.
//!
//! Owns the model, interaction state, snap engine, playback controller, and
//! the host surface, and exposes the full host-facing API: timeline CRUD,
//! serialization, transport, and raw pointer events. Pointer events are
//! routed through hit testing into the drag and resize state machines; the
//! model stays the source of truth and the surface is re-laid-out from it.

use reelcut_core::{ReelCutError, Result, Vec2};
use reelcut_timeline::{ClipSpec, MediaKind, TimelineData, TimelineModel};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::EditorConfig;
use crate::playback::{Clock, PlaybackController, PlaybackState, SystemClock};
use crate::snap::SnapEngine;
use crate::state::{EditorState, Interaction};
use crate::surface::{RenderBridge, RenderSurface};
use crate::{drag, resize};

/// Interactive timeline editor bound to one host surface.
pub struct Editor<S: RenderSurface> {
    config: EditorConfig,
    model: TimelineModel,
    state: EditorState,
    snap: SnapEngine,
    playback: PlaybackController,
    bridge: RenderBridge,
    surface: S,
}

impl<S: RenderSurface> Editor<S> {
    /// Build an editor over a surface, with the three default lanes placed.
    pub fn new(config: EditorConfig, surface: S, clock: Box<dyn Clock>) -> Result<Self> {
        config.validate()?;
        if surface.track_width() <= 0.0 {
            return Err(ReelCutError::Config(
                "surface track width must be positive".into(),
            ));
        }
        let model = TimelineModel::with_default_tracks(config.max_duration);
        let snap = SnapEngine::new(config.snap_tolerance_px);
        let playback = PlaybackController::new(config.max_duration, clock);
        let bridge = RenderBridge::new(&config);

        let mut editor = Self {
            config,
            model,
            state: EditorState::new(),
            snap,
            playback,
            bridge,
            surface,
        };
        editor.sync();
        info!("editor initialized");
        Ok(editor)
    }

    /// [`Editor::new`] with the real host clock.
    pub fn with_system_clock(config: EditorConfig, surface: S) -> Result<Self> {
        Self::new(config, surface, Box::new(SystemClock::new()))
    }

    // ── Accessors ───────────────────────────────────────────────

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn model(&self) -> &TimelineModel {
        &self.model
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    // ── Timeline CRUD ───────────────────────────────────────────

    /// Append a track lane below the existing ones.
    pub fn create_track(&mut self, name: impl Into<String>, kind: MediaKind) -> Uuid {
        let id = self.model.create_track(name, kind).id;
        self.sync();
        id
    }

    /// Add a clip to a track; the new clip becomes the selection.
    ///
    /// A spec without a duration gets the configured default.
    pub fn add_clip(&mut self, track_id: Uuid, mut spec: ClipSpec) -> Uuid {
        spec.duration.get_or_insert(self.config.default_clip_duration);
        let id = self.model.add_clip(track_id, spec);
        self.bridge
            .sync_clip(&self.model, &self.config, &mut self.surface, id);
        id
    }

    /// Remove a clip from the model and the surface. No-op on unknown id.
    pub fn remove_clip(&mut self, id: Uuid) {
        self.model.remove_clip(id);
        self.surface.remove_clip(id);
    }

    pub fn select_clip(&mut self, id: Option<Uuid>) {
        self.model.select_clip(id);
    }

    pub fn selected_clip(&self) -> Option<Uuid> {
        self.model.selected_clip()
    }

    // ── Serialization boundary ──────────────────────────────────

    /// Snapshot the timeline as the host payload.
    pub fn timeline_data(&self) -> TimelineData {
        self.model.timeline_data()
    }

    /// Replace the timeline wholesale from a host payload.
    ///
    /// Clears the surface, relays every lane and clip, and adopts the
    /// payload's span for playback. Not echoed through the change callback.
    pub fn load_timeline_data(&mut self, data: TimelineData) {
        self.model.load_timeline_data(data);
        self.playback.set_max_duration(self.model.max_duration());
        self.surface.clear_clips();
        self.sync();
    }

    /// Install the host change callback.
    pub fn on_change(&mut self, callback: reelcut_timeline::ChangeCallback) {
        self.model.on_change(callback);
    }

    // ── Transport ───────────────────────────────────────────────

    pub fn play(&mut self) {
        self.playback.play();
    }

    pub fn pause(&mut self) {
        self.playback.pause();
    }

    pub fn stop(&mut self) {
        self.playback.stop();
        self.place_cursor();
    }

    /// Manual seek in seconds; clamps to the displayable span.
    pub fn set_current_time(&mut self, seconds: f64) {
        self.playback.set_current_time(seconds);
        self.place_cursor();
    }

    /// Current cursor position in seconds.
    pub fn current_time(&self) -> f64 {
        self.playback.cursor()
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.playback.state()
    }

    /// Advance the playback simulation one timer tick.
    pub fn tick(&mut self) {
        self.playback.tick();
        self.place_cursor();
    }

    // ── Pointer events ──────────────────────────────────────────

    /// Pointer press: grab a resize handle, start a drag, or seek.
    pub fn pointer_down(&mut self, pos: Vec2) {
        debug_assert!(self.state.is_idle(), "pointer_down during an interaction");
        if !self.state.is_idle() {
            return;
        }

        if let Some((clip_id, edge)) = self.bridge.resize_handle_at(&self.model, &self.config, pos)
        {
            self.model.select_clip(Some(clip_id));
            let Some(origin) = self.clip_origin(clip_id) else {
                return;
            };
            let clip = self.model.clip(clip_id).expect("hit-tested clip exists");
            debug!(clip_id = %clip_id, ?edge, "resize started");
            self.state.interaction =
                Interaction::Resize(resize::begin(clip, edge, pos, origin.x, &self.config));
            return;
        }

        if let Some(clip_id) = self.bridge.clip_at(&self.model, &self.config, pos) {
            self.model.select_clip(Some(clip_id));
            let Some(origin) = self.clip_origin(clip_id) else {
                return;
            };
            // Drag origins are lane-relative: the ruler band is excluded.
            let origin = Vec2::new(origin.x, origin.y - self.config.ruler_height);
            let clip = self.model.clip(clip_id).expect("hit-tested clip exists");
            debug!(clip_id = %clip_id, "drag started");
            self.state.interaction = Interaction::Drag(drag::begin(clip, pos, origin, &self.config));
            return;
        }

        // Ruler or empty lane space: deselect and move the cursor there.
        if !self.bridge.in_ruler(pos.y) {
            self.model.select_clip(None);
        }
        self.set_current_time(self.config.scale().offset_to_seconds(pos.x as f64));
    }

    /// Pointer move: advance whichever interaction is active.
    pub fn pointer_move(&mut self, pos: Vec2) {
        match self.state.interaction {
            Interaction::Idle => {}
            Interaction::Drag(drag_state) => {
                let track_width = self.surface.track_width();
                drag::update(
                    &mut self.model,
                    &self.snap,
                    &self.config,
                    &drag_state,
                    pos,
                    track_width,
                );
                self.bridge
                    .sync_clip(&self.model, &self.config, &mut self.surface, drag_state.clip_id);
            }
            Interaction::Resize(resize_state) => {
                resize::update(&mut self.model, &self.config, &resize_state, pos.x);
                self.bridge.sync_clip(
                    &self.model,
                    &self.config,
                    &mut self.surface,
                    resize_state.clip_id,
                );
            }
        }
    }

    /// Pointer release: commit the active interaction, if any.
    pub fn pointer_up(&mut self) {
        match self.state.take() {
            Interaction::Idle => {}
            Interaction::Drag(drag_state) => {
                drag::finish(&mut self.model, drag_state.clip_id);
                self.bridge
                    .sync_clip(&self.model, &self.config, &mut self.surface, drag_state.clip_id);
            }
            Interaction::Resize(resize_state) => {
                resize::finish(&mut self.model, resize_state.clip_id);
                self.bridge.sync_clip(
                    &self.model,
                    &self.config,
                    &mut self.surface,
                    resize_state.clip_id,
                );
            }
        }
    }

    /// Double-click in a lane inserts a clip just before the click point.
    pub fn double_click(&mut self, pos: Vec2) {
        let Some(index) = self.bridge.track_index_at(pos.y) else {
            return;
        };
        let Some(track) = self.model.track_at_index(index) else {
            return;
        };
        let track_id = track.id;
        let kind = track.kind;
        let start = (self.config.scale().offset_to_seconds(pos.x as f64)
            - self.config.double_click_lead)
            .max(0.0);
        self.add_clip(
            track_id,
            ClipSpec {
                start_time: start,
                duration: Some(self.config.double_click_duration),
                kind,
                ..Default::default()
            },
        );
    }

    // ── Internal ────────────────────────────────────────────────

    /// Relay every lane and clip from the model.
    fn sync(&mut self) {
        self.bridge.sync(&self.model, &self.config, &mut self.surface);
        self.place_cursor();
    }

    fn place_cursor(&mut self) {
        self.bridge
            .set_cursor(&self.config, &mut self.surface, self.playback.cursor());
    }

    /// Rendered top-left of a clip, preferring what the surface reports.
    fn clip_origin(&self, clip_id: Uuid) -> Option<Vec2> {
        self.surface
            .clip_origin(clip_id)
            .or_else(|| self.bridge.clip_origin_fallback(&self.model, &self.config, clip_id))
    }
}

impl<S: RenderSurface + std::fmt::Debug> std::fmt::Debug for Editor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("playback", &self.playback)
            .field("surface", &self.surface)
            .finish()
    }
}
