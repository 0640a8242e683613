//! Coordinate math shared by the snapping engine, the wall draft and the
//! object model.
//!
//! Two coordinate spaces exist on the canvas:
//!
//! - **Pixel space**: what pointer events report, origin at the top-left of the
//!   canvas, y growing downwards.
//! - **Normalized space**: every stored position or size is a fraction (0..1)
//!   of the canvas width (x) or height (y), so a layout survives a change of
//!   canvas resolution.

use serde::{Deserialize, Serialize};

/// A 2D point. Used for both pixel and normalized coordinates; which space a
/// value lives in is determined by where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        distance(*self, *other)
    }

    /// Returns this point moved by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Pixel dimensions of the editing canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are usable for normalization.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Converts a pixel point into normalized canvas coordinates.
///
/// Each axis is scaled independently. A zero-sized axis maps to `0.0`.
pub fn to_normalized(point: Point, size: CanvasSize) -> Point {
    Point::new(ratio(point.x, size.width), ratio(point.y, size.height))
}

/// Converts a normalized point into pixel coordinates.
pub fn to_pixels(point: Point, size: CanvasSize) -> Point {
    Point::new(point.x * size.width, point.y * size.height)
}

fn ratio(value: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        value / extent
    } else {
        0.0
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Closest point to `point` on the closed segment `start..end`.
///
/// A zero-length segment returns `start`.
pub fn project_onto_segment(point: Point, start: Point, end: Point) -> Point {
    let vx = end.x - start.x;
    let vy = end.y - start.y;
    let len_sq = vx * vx + vy * vy;
    if len_sq == 0.0 {
        return start;
    }

    let t = ((point.x - start.x) * vx + (point.y - start.y) * vy) / len_sq;
    let t = t.clamp(0.0, 1.0);
    Point::new(start.x + vx * t, start.y + vy * t)
}

/// Drawing axis for a locked wall draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal: x follows the pointer, y stays at the start point.
    X,
    /// Vertical: y follows the pointer, x stays at the start point.
    Y,
}

/// Chooses the dominant axis of the movement from `start` to `point`.
///
/// Returns `None` while the larger of `|dx|`, `|dy|` is still below
/// `threshold`. Ties go to [`Axis::X`].
pub fn pick_axis(start: Point, point: Point, threshold: f64) -> Option<Axis> {
    let dx = (point.x - start.x).abs();
    let dy = (point.y - start.y).abs();
    if dx.max(dy) < threshold {
        return None;
    }
    if dx >= dy {
        Some(Axis::X)
    } else {
        Some(Axis::Y)
    }
}

/// Projects `point` onto the line through `start` along `axis`.
pub fn lock_to_axis(start: Point, point: Point, axis: Option<Axis>) -> Point {
    match axis {
        Some(Axis::X) => Point::new(point.x, start.y),
        Some(Axis::Y) => Point::new(start.x, point.y),
        None => point,
    }
}

/// Axis-aligned rectangle given by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Builds bounds from two arbitrary corners (e.g. a drag rectangle that
    /// was drawn up or to the left).
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Bounds of a rectangle given by its top-left corner and size.
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Closed intersection test: touching edges count as intersecting, only a
    /// strict separation on some axis does not.
    pub fn intersects(&self, other: &Bounds) -> bool {
        !(self.max_x < other.min_x
            || self.min_x > other.max_x
            || self.max_y < other.min_y
            || self.min_y > other.max_y)
    }

    /// Closed containment test for a point.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Smallest bounds containing both.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }
}
