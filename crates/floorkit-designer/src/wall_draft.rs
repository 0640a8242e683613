//! Interactive wall drawing: `Idle -> Drafting -> Idle`.
//!
//! A draft starts on pointer-down, follows the pointer, and on release either
//! becomes a wall or is silently discarded when it is too short. The draft
//! locks to the horizontal or vertical axis once the pointer has moved far
//! enough, and keeps that axis until it ends.

use crate::config::InteractionConfig;
use crate::geometry::{distance, lock_to_axis, pick_axis, Axis, Point};
use crate::snapping::{AxisConstraint, Snapper};

/// An in-progress wall segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DraftSegment {
    pub start: Point,
    pub end: Point,
    pub axis: Option<Axis>,
}

impl DraftSegment {
    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }

    /// Moves the free end towards `point`, choosing the axis first if it is
    /// still open.
    fn resolve(&self, point: Point, snapper: &Snapper<'_>, threshold: f64) -> DraftSegment {
        let axis = self.axis.or_else(|| pick_axis(self.start, point, threshold));
        let locked = lock_to_axis(self.start, point, axis);
        let constraint = axis.map(|axis| AxisConstraint::new(axis, self.start));
        let snapped = snapper.snap(locked, constraint);
        DraftSegment {
            start: self.start,
            end: lock_to_axis(self.start, snapped, axis),
            axis,
        }
    }
}

/// State of the wall drawing tool.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WallDraft {
    #[default]
    Idle,
    Drafting(DraftSegment),
}

impl WallDraft {
    pub fn is_drafting(&self) -> bool {
        matches!(self, WallDraft::Drafting(_))
    }

    /// The current segment, if drafting.
    pub fn segment(&self) -> Option<&DraftSegment> {
        match self {
            WallDraft::Drafting(segment) => Some(segment),
            WallDraft::Idle => None,
        }
    }

    /// Starts a draft at the snapped `point`. Restarts if already drafting.
    pub fn begin(&mut self, point: Point, snapper: &Snapper<'_>) {
        let start = snapper.snap(point, None);
        *self = WallDraft::Drafting(DraftSegment {
            start,
            end: start,
            axis: None,
        });
    }

    /// Follows the pointer. Ignored while idle.
    pub fn update(&mut self, point: Point, snapper: &Snapper<'_>, config: &InteractionConfig) {
        if let WallDraft::Drafting(segment) = self {
            *segment = segment.resolve(point, snapper, config.axis_lock_threshold_px);
        }
    }

    /// Ends the draft and returns the segment to turn into a wall.
    ///
    /// With a final `point` the draft is resolved once more first. Returns
    /// `None` when idle or when the resolved segment is shorter than the
    /// minimum wall length. The draft is idle afterwards in every case.
    pub fn commit(
        &mut self,
        point: Option<Point>,
        snapper: &Snapper<'_>,
        config: &InteractionConfig,
    ) -> Option<DraftSegment> {
        let WallDraft::Drafting(segment) = std::mem::take(self) else {
            return None;
        };
        let resolved = match point {
            Some(point) => segment.resolve(point, snapper, config.axis_lock_threshold_px),
            None => segment,
        };
        if resolved.length() < config.min_wall_length_px {
            tracing::debug!(length = resolved.length(), "discarding short wall draft");
            return None;
        }
        Some(resolved)
    }

    /// Drops the draft without side effects.
    pub fn cancel(&mut self) {
        *self = WallDraft::Idle;
    }
}
