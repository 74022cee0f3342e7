//! Time ⇄ pixel coordinate conversion.
//!
//! The editor lays clips out horizontally at a fixed number of pixels per
//! second. All conversions between elapsed seconds and horizontal offsets go
//! through [`PixelScale`] so the two directions stay exact inverses.

use serde::{Deserialize, Serialize};

/// Default horizontal scale: 100 pixels per second of timeline.
pub const DEFAULT_PIXELS_PER_SECOND: f64 = 100.0;

/// Bidirectional mapping between elapsed seconds and horizontal pixel offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelScale {
    /// Pixels per second of timeline.
    pixels_per_second: f64,
}

impl PixelScale {
    /// Create a scale from a pixels-per-second factor.
    ///
    /// The factor must be positive; the editor validates this at
    /// construction, so this constructor trusts the caller.
    #[inline]
    pub fn new(pixels_per_second: f64) -> Self {
        Self { pixels_per_second }
    }

    /// Pixels per second of timeline.
    #[inline]
    pub fn pixels_per_second(self) -> f64 {
        self.pixels_per_second
    }

    /// Convert a time in seconds to a horizontal pixel offset.
    #[inline]
    pub fn seconds_to_offset(self, seconds: f64) -> f64 {
        seconds * self.pixels_per_second
    }

    /// Convert a horizontal pixel offset to a time in seconds.
    #[inline]
    pub fn offset_to_seconds(self, offset: f64) -> f64 {
        offset / self.pixels_per_second
    }

    /// Convert a pixel distance to the equivalent time distance.
    ///
    /// Used to express the snap tolerance (configured in pixels) in seconds.
    #[inline]
    pub fn tolerance_seconds(self, pixels: f64) -> f64 {
        pixels / self.pixels_per_second
    }
}

impl Default for PixelScale {
    fn default() -> Self {
        Self::new(DEFAULT_PIXELS_PER_SECOND)
    }
}
