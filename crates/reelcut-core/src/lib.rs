//! ReelCut Core - Foundation types for the timeline engine
//!
//! This crate provides the fundamental types used throughout ReelCut:
//! - Error taxonomy
//! - Geometric primitives for layout and hit testing
//! - Time ⇄ pixel coordinate conversion

pub mod error;
pub mod geometry;
pub mod scale;

pub use error::{ReelCutError, Result};
pub use geometry::{Rect, Vec2};
pub use scale::PixelScale;
