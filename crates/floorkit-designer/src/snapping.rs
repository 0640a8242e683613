//! Pointer snapping against existing walls.
//!
//! Candidates are every wall endpoint followed by the projection of the
//! pointer onto every wall segment, in wall order. The closest candidate
//! within the tolerance wins; on equal distance the earlier candidate wins.

use crate::geometry::{distance, project_onto_segment, Axis, CanvasSize, Point};
use crate::model::Wall;

/// Restricts snap candidates to those lying on the locked axis through
/// `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisConstraint {
    pub axis: Axis,
    pub origin: Point,
}

impl AxisConstraint {
    pub fn new(axis: Axis, origin: Point) -> Self {
        Self { axis, origin }
    }

    fn admits(&self, candidate: Point, tolerance: f64) -> bool {
        match self.axis {
            Axis::X => (candidate.y - self.origin.y).abs() <= tolerance,
            Axis::Y => (candidate.x - self.origin.x).abs() <= tolerance,
        }
    }
}

/// Snaps pixel points onto the walls of a layout.
#[derive(Debug, Clone, Copy)]
pub struct Snapper<'a> {
    walls: &'a [Wall],
    canvas: CanvasSize,
    tolerance_px: f64,
}

impl<'a> Snapper<'a> {
    pub fn new(walls: &'a [Wall], canvas: CanvasSize, tolerance_px: f64) -> Self {
        Self {
            walls,
            canvas,
            tolerance_px,
        }
    }

    /// All snap candidates for `point`, in pixel space.
    pub fn candidates(&self, point: Point) -> Vec<Point> {
        let segments: Vec<(Point, Point)> = self
            .walls
            .iter()
            .map(|wall| wall.endpoints_px(self.canvas))
            .collect();

        let mut candidates = Vec::with_capacity(segments.len() * 3);
        for &(start, end) in &segments {
            candidates.push(start);
            candidates.push(end);
        }
        for &(start, end) in &segments {
            candidates.push(project_onto_segment(point, start, end));
        }
        candidates
    }

    /// Returns the best snap target for `point`, or `point` itself when no
    /// candidate lies within the tolerance.
    pub fn snap(&self, point: Point, constraint: Option<AxisConstraint>) -> Point {
        let tolerance = self.tolerance_px;
        let mut best = point;
        let mut best_distance = f64::INFINITY;

        for candidate in self.candidates(point) {
            if let Some(constraint) = constraint {
                if !constraint.admits(candidate, tolerance) {
                    continue;
                }
            }
            let d = distance(candidate, point);
            if d <= tolerance && d < best_distance {
                best = candidate;
                best_distance = d;
            }
        }

        if best != point {
            tracing::trace!(?point, snapped = ?best, "snapped to wall");
        }
        best
    }
}

/// Convenience wrapper around [`Snapper::snap`].
pub fn snap(
    point: Point,
    walls: &[Wall],
    canvas: CanvasSize,
    tolerance_px: f64,
    constraint: Option<AxisConstraint>,
) -> Point {
    Snapper::new(walls, canvas, tolerance_px).snap(point, constraint)
}
