//! The serialized host payload.
//!
//! `TimelineData` is the `{tracks, clips, duration}` shape handed to the
//! change callback and accepted back by `load_timeline_data`. JSON is the
//! persistence format; the host SaaS stores the payload as-is.

use reelcut_core::{ReelCutError, Result};
use serde::{Deserialize, Serialize};

use crate::clip::Clip;
use crate::track::Track;

/// Full serialized timeline state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineData {
    pub tracks: Vec<Track>,
    pub clips: Vec<Clip>,
    /// Total displayable span in seconds.
    pub duration: f64,
}

impl TimelineData {
    /// Serialize to pretty JSON bytes.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
            .map_err(|e| ReelCutError::Serialization(format!("Failed to serialize timeline: {e}")))
    }

    /// Deserialize from JSON bytes.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data)
            .map_err(|e| ReelCutError::Serialization(format!("Failed to parse timeline: {e}")))
    }
}
