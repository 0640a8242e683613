use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

use super::{new_id, ObjectId};
use crate::geometry::{distance, to_normalized, to_pixels, CanvasSize, Point};

/// A straight wall segment with normalized endpoints.
///
/// Storage keeps the drawing direction; identity for deduplication does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub id: ObjectId,
    pub start: Point,
    pub end: Point,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Wall {
    /// Creates a wall with a fresh id from normalized endpoints.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: new_id(),
            start,
            end,
            extra: Map::new(),
        }
    }

    /// Creates a wall from pixel endpoints, normalizing them.
    pub fn from_pixels(start: Point, end: Point, canvas: CanvasSize) -> Self {
        Self::new(to_normalized(start, canvas), to_normalized(end, canvas))
    }

    /// Endpoints in pixel space.
    pub fn endpoints_px(&self, canvas: CanvasSize) -> (Point, Point) {
        (to_pixels(self.start, canvas), to_pixels(self.end, canvas))
    }

    pub fn length_px(&self, canvas: CanvasSize) -> f64 {
        let (a, b) = self.endpoints_px(canvas);
        distance(a, b)
    }

    /// Direction-independent key built from endpoints rounded to six decimals.
    pub fn segment_key(&self) -> String {
        let a = point_key(self.start);
        let b = point_key(self.end);
        if a < b {
            format!("{a}|{b}")
        } else {
            format!("{b}|{a}")
        }
    }
}

fn point_key(p: Point) -> String {
    format!("{:.6}:{:.6}", p.x, p.y)
}

/// Removes walls that cover the same segment as an earlier wall, in either
/// direction. The first occurrence is kept.
pub fn dedupe_walls(walls: &[Wall]) -> Vec<Wall> {
    let mut seen = HashSet::new();
    walls
        .iter()
        .filter(|wall| seen.insert(wall.segment_key()))
        .cloned()
        .collect()
}
