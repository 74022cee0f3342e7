//! Editor configuration.

use reelcut_core::{PixelScale, ReelCutError, Result};
use serde::{Deserialize, Serialize};

/// Bounds policy for resize operations.
///
/// The source behavior lets a right-edge resize run past the displayable
/// span and applies only a single clamp on the left edge; `Permissive`
/// reproduces that, `Strict` additionally caps the right edge at the
/// timeline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsPolicy {
    #[default]
    Permissive,
    Strict,
}

/// Fixed configuration for one editor instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Horizontal scale of the timeline.
    pub pixels_per_second: f64,
    /// Total displayable span in seconds.
    pub max_duration: f64,
    /// Height of one track lane in pixels.
    pub track_height: f32,
    /// Height of the ruler band above the lanes.
    pub ruler_height: f32,
    /// Snap tolerance in pixels.
    pub snap_tolerance_px: f64,
    /// Minimum clip width in pixels during resize.
    pub min_clip_width_px: f64,
    /// Duration of clips created by `add_clip` when unspecified, seconds.
    pub default_clip_duration: f64,
    /// Double-click insertion places the clip this many seconds before the
    /// click point (clamped to 0).
    pub double_click_lead: f64,
    /// Duration of a double-click-inserted clip, seconds.
    pub double_click_duration: f64,
    /// Resize bounds policy.
    pub bounds: BoundsPolicy,
}

impl EditorConfig {
    /// The coordinate converter for this configuration.
    pub fn scale(&self) -> PixelScale {
        PixelScale::new(self.pixels_per_second)
    }

    /// Reject configurations the editor cannot operate under.
    pub fn validate(&self) -> Result<()> {
        if self.pixels_per_second <= 0.0 {
            return Err(ReelCutError::Config(
                "pixels_per_second must be positive".into(),
            ));
        }
        if self.max_duration <= 0.0 {
            return Err(ReelCutError::Config("max_duration must be positive".into()));
        }
        if self.track_height <= 0.0 {
            return Err(ReelCutError::Config("track_height must be positive".into()));
        }
        if self.min_clip_width_px <= 0.0 {
            return Err(ReelCutError::Config(
                "min_clip_width_px must be positive".into(),
            ));
        }
        Ok(())
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            pixels_per_second: 100.0,
            max_duration: 60.0,
            track_height: 40.0,
            ruler_height: 20.0,
            snap_tolerance_px: 10.0,
            min_clip_width_px: 50.0,
            default_clip_duration: 5.0,
            double_click_lead: 2.0,
            double_click_duration: 4.0,
            bounds: BoundsPolicy::Permissive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.pixels_per_second, 100.0);
        assert_eq!(config.max_duration, 60.0);
        assert_eq!(config.bounds, BoundsPolicy::Permissive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_scale_rejected() {
        let config = EditorConfig {
            pixels_per_second: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ReelCutError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_span_rejected() {
        let config = EditorConfig {
            max_duration: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
