//! The mutable timeline model.
//!
//! Owns the track and clip collections, the current selection, and the
//! change notifier. All mutation happens in place on the owned records;
//! operations referencing an unknown id degrade to no-ops so interactive
//! paths stay resilient to transient desync.

use tracing::debug;
use uuid::Uuid;

use crate::clip::{Clip, ClipSpec};
use crate::data::TimelineData;
use crate::notify::{ChangeCallback, ChangeNotifier};
use crate::track::{MediaKind, Track};

/// Default total displayable span in seconds.
pub const DEFAULT_MAX_DURATION: f64 = 60.0;

/// The timeline model: tracks, clips, selection, notifier.
#[derive(Debug)]
pub struct TimelineModel {
    tracks: Vec<Track>,
    clips: Vec<Clip>,
    max_duration: f64,
    selected: Option<Uuid>,
    notifier: ChangeNotifier,
}

impl TimelineModel {
    /// Create an empty model with the given displayable span.
    pub fn new(max_duration: f64) -> Self {
        Self {
            tracks: Vec::new(),
            clips: Vec::new(),
            max_duration,
            selected: None,
            notifier: ChangeNotifier::new(),
        }
    }

    /// Create a model pre-populated with the three default lanes.
    pub fn with_default_tracks(max_duration: f64) -> Self {
        let mut model = Self::new(max_duration);
        model.create_track("Video", MediaKind::Video);
        model.create_track("Audio", MediaKind::Audio);
        model.create_track("Overlays", MediaKind::Overlay);
        model
    }
}

impl Default for TimelineModel {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DURATION)
    }
}

impl TimelineModel {
    // ── Tracks ──────────────────────────────────────────────────


    /// Append a track; its index is the current track count. Always succeeds.
    pub fn create_track(&mut self, name: impl Into<String>, kind: MediaKind) -> &Track {
        self.create_track_with_id(Uuid::new_v4(), name, kind)
    }

    /// Append a track with an explicit ID (hosts rebuilding known layouts).
    pub fn create_track_with_id(
        &mut self,
        id: Uuid,
        name: impl Into<String>,
        kind: MediaKind,
    ) -> &Track {
        let track = Track::with_id(id, name, kind, self.tracks.len());
        debug!(track_id = %track.id, kind = ?track.kind, index = track.index, "track created");
        self.tracks.push(track);
        self.tracks.last().expect("track just pushed")
    }

    /// Look up a track by ID.
    pub fn track(&self, id: Uuid) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Look up a track by visual stacking index.
    pub fn track_at_index(&self, index: usize) -> Option<&Track> {
        self.tracks.iter().find(|t| t.index == index)
    }

    /// All tracks in stacking order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Whether a clip may be moved onto a track.
    pub fn is_track_compatible(clip: &Clip, track: &Track) -> bool {
        clip.fits_track(track)
    }

    // ── Clips ───────────────────────────────────────────────────

    /// Construct and store a clip, select it, and notify.
    ///
    /// Creation trusts the caller: neither the track id nor kind
    /// compatibility is validated here. Reassignment during drag is where
    /// compatibility is enforced.
    pub fn add_clip(&mut self, track_id: Uuid, spec: ClipSpec) -> Uuid {
        let clip = Clip::from_spec(track_id, spec);
        let id = clip.id;
        debug!(clip_id = %id, track_id = %track_id, start = clip.start_time, duration = clip.duration, "clip added");
        self.clips.push(clip);
        self.selected = Some(id);
        self.emit_change();
        id
    }

    /// Delete a clip if present; clears selection if it was selected.
    /// Silent no-op on an unknown id.
    pub fn remove_clip(&mut self, id: Uuid) {
        let before = self.clips.len();
        self.clips.retain(|c| c.id != id);
        if self.clips.len() == before {
            return;
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        debug!(clip_id = %id, "clip removed");
        self.emit_change();
    }

    /// Look up a clip by ID.
    pub fn clip(&self, id: Uuid) -> Option<&Clip> {
        self.clips.iter().find(|c| c.id == id)
    }

    /// Look up a clip mutably by ID.
    pub fn clip_mut(&mut self, id: Uuid) -> Option<&mut Clip> {
        self.clips.iter_mut().find(|c| c.id == id)
    }

    /// All clips, in insertion order.
    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    // ── Selection ───────────────────────────────────────────────

    /// Select a clip (or clear the selection with `None`).
    /// Selecting an unknown id is a no-op.
    pub fn select_clip(&mut self, id: Option<Uuid>) {
        match id {
            Some(id) if self.clip(id).is_none() => {}
            other => self.selected = other,
        }
    }

    /// Currently selected clip, if any.
    pub fn selected_clip(&self) -> Option<Uuid> {
        self.selected
    }

    // ── Serialization and notification ──────────────────────────

    /// Total displayable span in seconds.
    pub fn max_duration(&self) -> f64 {
        self.max_duration
    }

    /// Snapshot the model as the host payload.
    pub fn timeline_data(&self) -> TimelineData {
        TimelineData {
            tracks: self.tracks.clone(),
            clips: self.clips.clone(),
            duration: self.max_duration,
        }
    }

    /// Replace all tracks and clips with the given payload.
    ///
    /// The selection is cleared. The host initiated this, so no change
    /// notification is echoed back.
    pub fn load_timeline_data(&mut self, data: TimelineData) {
        debug!(
            tracks = data.tracks.len(),
            clips = data.clips.len(),
            "timeline loaded"
        );
        self.tracks = data.tracks;
        self.clips = data.clips;
        self.max_duration = data.duration;
        self.selected = None;
    }

    /// Install the host change callback.
    pub fn on_change(&mut self, callback: ChangeCallback) {
        self.notifier.set(callback);
    }

    /// Fire the change callback with the current serialized model.
    ///
    /// Called by the model's own mutations and by the interaction
    /// controllers when a drag or resize commits.
    pub fn emit_change(&mut self) {
        let data = self.timeline_data();
        self.notifier.emit(&data);
    }
}
