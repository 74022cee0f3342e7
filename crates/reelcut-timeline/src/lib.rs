//! ReelCut Timeline - Timeline data model
//!
//! Implements the timeline structure for the editor:
//! - Tracks of a fixed media kind hosting clips
//! - Clips positioned by start time and duration
//! - The mutable model with selection and change notification
//! - The `{tracks, clips, duration}` host payload

pub mod clip;
pub mod data;
pub mod model;
pub mod notify;
pub mod track;

pub use clip::{Clip, ClipSpec, DEFAULT_CLIP_DURATION};
pub use data::TimelineData;
pub use model::{TimelineModel, DEFAULT_MAX_DURATION};
pub use notify::{ChangeCallback, ChangeNotifier};
pub use track::{MediaKind, Track};
