//! Track types for the timeline.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Media kind of a track or clip.
///
/// A clip may only live on a track of the same kind; the drag controller
/// enforces this when committing a cross-track move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
    Overlay,
}

/// A horizontal lane hosting zero or more clips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Unique track ID
    pub id: Uuid,
    /// Track name (displayed in UI)
    pub name: String,
    /// Media kind of this track
    pub kind: MediaKind,
    /// Visual stacking order, assigned at creation and never reused
    pub index: usize,
}

impl Track {
    /// Create a new track at the given stacking index.
    pub fn new(name: impl Into<String>, kind: MediaKind, index: usize) -> Self {
        Self::with_id(Uuid::new_v4(), name, kind, index)
    }

    /// Create a track with an explicit ID (used when rebuilding from a payload).
    pub fn with_id(id: Uuid, name: impl Into<String>, kind: MediaKind, index: usize) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            index,
        }
    }
}
