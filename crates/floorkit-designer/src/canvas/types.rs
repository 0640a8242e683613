//! Canvas type definitions: CanvasSnapshot, DrawingMode, NodeTransform.

use crate::geometry::{CanvasSize, Point};
use crate::model::{PlacedObject, Wall};

/// Deep copy of both mutable collections, used for undo.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CanvasSnapshot {
    pub objects: Vec<PlacedObject>,
    pub walls: Vec<Wall>,
}

/// Pointer interaction modes. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    /// Click, marquee, drag and transform objects.
    #[default]
    Select,
    /// Pointer gestures draw walls.
    DrawWall,
}

/// Live pixel geometry of an object while a gesture is in flight.
///
/// `scale_x`/`scale_y` multiply the object's committed pixel size; they are
/// folded into width and height when the gesture ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTransform {
    pub x: f64,
    pub y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation: f64,
}

impl NodeTransform {
    /// The untransformed node of a committed object.
    pub fn of(object: &PlacedObject, canvas: CanvasSize) -> Self {
        let origin = object.position_px(canvas);
        Self {
            x: origin.x,
            y: origin.y,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: object.rotation,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
