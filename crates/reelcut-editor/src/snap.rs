//! Snapping engine for drag interactions.
//!
//! Candidates are the timeline start, every other clip's edges, and the
//! whole-second grid up to the displayable span. A proposed time resolves to
//! the nearest candidate strictly within tolerance, otherwise no snap.
//! Snapping applies to drag only; resize deliberately bypasses it.

use reelcut_core::PixelScale;
use reelcut_timeline::TimelineModel;
use smallvec::SmallVec;
use uuid::Uuid;

/// A time value a dragged clip is pulled toward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapPoint {
    pub time: f64,
    pub kind: SnapKind,
}

/// Kind of snap candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapKind {
    TimelineStart,
    ClipEdge,
    GridSecond,
}

/// Per-move candidate buffer; sized for a typical lane count without spilling.
pub type SnapCandidates = SmallVec<[SnapPoint; 32]>;

/// Engine for computing snap targets.
#[derive(Debug, Clone, Copy)]
pub struct SnapEngine {
    /// Snap distance in pixels, converted through the scale per query.
    pub tolerance_px: f64,
}

impl SnapEngine {
    pub fn new(tolerance_px: f64) -> Self {
        Self { tolerance_px }
    }

    /// Collect all candidates, excluding the edges of the clip being dragged.
    pub fn collect_candidates(
        model: &TimelineModel,
        exclude_clip: Uuid,
        max_duration: f64,
    ) -> SnapCandidates {
        let mut points = SnapCandidates::new();

        points.push(SnapPoint {
            time: 0.0,
            kind: SnapKind::TimelineStart,
        });

        for clip in model.clips().iter().filter(|c| c.id != exclude_clip) {
            points.push(SnapPoint {
                time: clip.start_time,
                kind: SnapKind::ClipEdge,
            });
            points.push(SnapPoint {
                time: clip.end_time(),
                kind: SnapKind::ClipEdge,
            });
        }

        let whole_seconds = max_duration.floor() as i64;
        for s in 1..=whole_seconds {
            points.push(SnapPoint {
                time: s as f64,
                kind: SnapKind::GridSecond,
            });
        }

        points
    }

    /// Resolve a proposed time against a candidate set.
    ///
    /// Returns the candidate strictly within `tolerance` seconds that is
    /// closest to `t`; the first candidate with a strictly smaller distance
    /// wins, so iteration order breaks exact ties.
    pub fn resolve(&self, t: f64, candidates: &[SnapPoint], tolerance: f64) -> Option<f64> {
        let mut best: Option<(f64, f64)> = None; // (time, distance)

        for point in candidates {
            let dist = (point.time - t).abs();
            if dist < tolerance && best.map_or(true, |(_, d)| dist < d) {
                best = Some((point.time, dist));
            }
        }

        best.map(|(time, _)| time)
    }

    /// Snap a proposed time for a dragged clip, or return `None`.
    pub fn snap(
        &self,
        model: &TimelineModel,
        dragged_clip: Uuid,
        t: f64,
        scale: PixelScale,
    ) -> Option<f64> {
        let tolerance = scale.tolerance_seconds(self.tolerance_px);
        let candidates = Self::collect_candidates(model, dragged_clip, model.max_duration());
        self.resolve(t, &candidates, tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelcut_timeline::{ClipSpec, MediaKind};

    /// Model with clips spanning [0, 5] and [7, 15] seconds.
    fn reference_model() -> (TimelineModel, Uuid) {
        let mut model = TimelineModel::with_default_tracks(60.0);
        let track_id = model.tracks()[0].id;
        model.add_clip(
            track_id,
            ClipSpec {
                start_time: 0.0,
                duration: Some(5.0),
                ..Default::default()
            },
        );
        model.add_clip(
            track_id,
            ClipSpec {
                start_time: 7.0,
                duration: Some(8.0),
                ..Default::default()
            },
        );
        // A third clip acting as the dragged one, so the first two stay in
        // the candidate set.
        let dragged = model.add_clip(
            track_id,
            ClipSpec {
                start_time: 30.0,
                duration: Some(2.0),
                kind: MediaKind::Video,
                ..Default::default()
            },
        );
        (model, dragged)
    }

    #[test]
    fn test_snaps_to_clip_edge() {
        let (model, dragged) = reference_model();
        let engine = SnapEngine::new(10.0);
        // 4.95 is within 0.1 s of the first clip's right edge at 5.0
        let snapped = engine.snap(&model, dragged, 4.95, PixelScale::default());
        assert_eq!(snapped, Some(5.0));
    }

    #[test]
    fn test_no_candidate_within_tolerance() {
        let (model, dragged) = reference_model();
        let engine = SnapEngine::new(10.0);
        // 6.5 sits 0.5 s from both the grid and the nearest edges
        let snapped = engine.snap(&model, dragged, 6.5, PixelScale::default());
        assert_eq!(snapped, None);
    }

    #[test]
    fn test_tolerance_is_strict() {
        let engine = SnapEngine::new(10.0);
        let candidates = [SnapPoint {
            time: 5.0,
            kind: SnapKind::ClipEdge,
        }];
        // Binary-exact values so the distance lands exactly on the
        // tolerance: the strict comparison must reject it.
        assert_eq!(engine.resolve(5.125, &candidates, 0.125), None);
        assert_eq!(engine.resolve(5.0625, &candidates, 0.125), Some(5.0));
    }

    #[test]
    fn test_dragged_clip_excluded() {
        let (model, dragged) = reference_model();
        let candidates = SnapEngine::collect_candidates(&model, dragged, 60.0);
        // The dragged clip's edges at 30.0 / 32.0 only appear as grid marks,
        // never as clip edges.
        assert!(!candidates
            .iter()
            .any(|p| p.kind == SnapKind::ClipEdge && (p.time == 30.0 || p.time == 32.0)));
    }

    #[test]
    fn test_grid_covers_whole_seconds() {
        let (model, dragged) = reference_model();
        let candidates = SnapEngine::collect_candidates(&model, dragged, 60.0);
        let grid: Vec<f64> = candidates
            .iter()
            .filter(|p| p.kind == SnapKind::GridSecond)
            .map(|p| p.time)
            .collect();
        assert_eq!(grid.first(), Some(&1.0));
        assert_eq!(grid.last(), Some(&60.0));
        assert_eq!(grid.len(), 60);
    }

    #[test]
    fn test_nearest_candidate_wins() {
        let engine = SnapEngine::new(10.0);
        let candidates = [
            SnapPoint {
                time: 4.0,
                kind: SnapKind::GridSecond,
            },
            SnapPoint {
                time: 4.06,
                kind: SnapKind::ClipEdge,
            },
        ];
        assert_eq!(engine.resolve(4.05, &candidates, 0.1), Some(4.06));
    }

    #[test]
    fn test_timeline_start_is_candidate() {
        let (model, dragged) = reference_model();
        let engine = SnapEngine::new(10.0);
        let snapped = engine.snap(&model, dragged, 0.04, PixelScale::default());
        assert_eq!(snapped, Some(0.0));
    }
}
