//! Clip types for the timeline.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::track::{MediaKind, Track};

/// A timed, positioned unit of content placed on exactly one track.
///
/// The clip is the sole record of its own timing; there is no separate
/// scheduling ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clip {
    /// Unique clip ID
    pub id: Uuid,
    /// Owning track
    pub track_id: Uuid,
    /// Start time on the timeline, in seconds (kept ≥ 0 by the drag path)
    pub start_time: f64,
    /// Duration in seconds (> 0)
    pub duration: f64,
    /// Media kind, assigned at creation and never changed by later edits
    pub kind: MediaKind,
    /// Clip name (displayed in UI)
    pub name: String,
    /// Display color as a CSS hex string
    pub color: String,
    /// Free-form host metadata
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// Duration applied when a spec leaves it unset, in seconds.
pub const DEFAULT_CLIP_DURATION: f64 = 5.0;

impl Clip {
    /// Construct a clip on a track from a spec, filling in defaults.
    pub fn from_spec(track_id: Uuid, spec: ClipSpec) -> Self {
        let color = spec
            .color
            .unwrap_or_else(|| default_color(spec.kind).to_string());
        Self {
            id: Uuid::new_v4(),
            track_id,
            start_time: spec.start_time,
            duration: spec.duration.unwrap_or(DEFAULT_CLIP_DURATION),
            kind: spec.kind,
            name: spec.name,
            color,
            metadata: spec.metadata,
        }
    }

    /// End time of the clip on the timeline.
    #[inline]
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// Whether this clip may live on the given track.
    #[inline]
    pub fn fits_track(&self, track: &Track) -> bool {
        self.kind == track.kind
    }
}

/// Parameters for creating a clip; every field has the source default.
#[derive(Debug, Clone)]
pub struct ClipSpec {
    pub start_time: f64,
    /// When `None`, [`DEFAULT_CLIP_DURATION`] applies; the editor facade
    /// substitutes its configured default first.
    pub duration: Option<f64>,
    pub kind: MediaKind,
    pub name: String,
    /// When `None`, a per-kind default color is applied.
    pub color: Option<String>,
    pub metadata: serde_json::Value,
}

impl Default for ClipSpec {
    fn default() -> Self {
        Self {
            start_time: 0.0,
            duration: None,
            kind: MediaKind::Video,
            name: "Untitled Clip".into(),
            color: None,
            metadata: serde_json::Value::Null,
        }
    }
}

/// Default display color per media kind.
fn default_color(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Video => "#4f8cff",
        MediaKind::Audio => "#34d399",
        MediaKind::Overlay => "#f59e0b",
    }
}
