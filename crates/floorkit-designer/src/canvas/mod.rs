//! Canvas holding the placed objects and walls of a layout.

mod operations;
mod types;

pub use operations::clamp_position;
pub use types::{CanvasSnapshot, DrawingMode, NodeTransform};

use std::sync::LazyLock;

use regex::Regex;

use crate::geometry::{Bounds, CanvasSize, Point};
use crate::model::{new_id, ObjectId, PlacedObject, ShapeKind, Wall};

static ROOM_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("invalid room number regex"));

/// The object model: placed objects in draw order, walls, and the pixel size
/// of the canvas they are edited on.
///
/// Canvas methods mutate directly. Recording undo history is the caller's
/// job, see [`crate::DesignerState`].
#[derive(Debug, Clone)]
pub struct Canvas {
    objects: Vec<PlacedObject>,
    walls: Vec<Wall>,
    size: CanvasSize,
}

impl Canvas {
    /// Creates an empty canvas of the default size (800 x 600 px).
    pub fn new() -> Self {
        Self::with_size(CanvasSize::default())
    }

    /// Creates an empty canvas with the given pixel size.
    pub fn with_size(size: CanvasSize) -> Self {
        Self {
            objects: Vec::new(),
            walls: Vec::new(),
            size,
        }
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    /// Updates the pixel size. Stored geometry is normalized and unaffected.
    pub fn set_size(&mut self, size: CanvasSize) {
        self.size = size;
    }

    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    pub fn object(&self, id: &str) -> Option<&PlacedObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn object_mut(&mut self, id: &str) -> Option<&mut PlacedObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    /// Deep copy of objects and walls.
    pub fn snapshot(&self) -> CanvasSnapshot {
        CanvasSnapshot {
            objects: self.objects.clone(),
            walls: self.walls.clone(),
        }
    }

    /// Replaces both collections with the snapshot's contents.
    pub fn restore(&mut self, snapshot: CanvasSnapshot) {
        self.objects = snapshot.objects;
        self.walls = snapshot.walls;
    }

    /// Builds a new object of `shape` with default geometry and, for beds and
    /// room labels, the next free number. The object is not inserted.
    pub fn create_object(&self, shape: ShapeKind) -> PlacedObject {
        let mut object = PlacedObject::new(new_id(), shape);
        match shape {
            ShapeKind::Bed => object.bed_number = self.next_bed_number().to_string(),
            ShapeKind::RoomLabel => {
                object.room_label = format!("Room {}", self.next_room_number())
            }
            _ => {}
        }
        object
    }

    /// Creates and appends an object, returning its id.
    pub fn add_object(&mut self, shape: ShapeKind) -> ObjectId {
        let object = self.create_object(shape);
        let id = object.id.clone();
        tracing::debug!(%id, %shape, "object added");
        self.objects.push(object);
        id
    }

    /// Appends an already built object.
    pub fn insert_object(&mut self, object: PlacedObject) {
        self.objects.push(object);
    }

    /// One more than the largest numeric bed number. Non-numeric bed numbers
    /// count as zero.
    pub fn next_bed_number(&self) -> u64 {
        self.objects
            .iter()
            .filter(|o| o.is_bed())
            .map(|o| o.bed_number.trim().parse::<u64>().unwrap_or(0))
            .max()
            .unwrap_or(0)
            + 1
    }

    /// One more than the largest number found in any room label. Only the
    /// first run of digits in each label is considered.
    pub fn next_room_number(&self) -> u64 {
        self.objects
            .iter()
            .filter(|o| o.is_room_label())
            .map(|o| {
                ROOM_NUMBER
                    .find(&o.room_label)
                    .and_then(|m| m.as_str().parse::<u64>().ok())
                    .unwrap_or(0)
            })
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Removes the objects with the given ids. Returns how many were removed.
    pub fn remove_objects(&mut self, ids: &[ObjectId]) -> usize {
        let before = self.objects.len();
        self.objects.retain(|o| !ids.contains(&o.id));
        before - self.objects.len()
    }

    /// Appends a wall given in pixel coordinates.
    pub fn add_wall_px(&mut self, start: Point, end: Point) -> ObjectId {
        let wall = Wall::from_pixels(start, end, self.size);
        let id = wall.id.clone();
        tracing::debug!(%id, ?start, ?end, "wall added");
        self.walls.push(wall);
        id
    }

    /// Replaces both collections, e.g. after an import.
    pub fn replace_contents(&mut self, objects: Vec<PlacedObject>, walls: Vec<Wall>) {
        self.objects = objects;
        self.walls = walls;
    }

    /// Pixel bounds of an object.
    pub fn bounds_of(&self, id: &str) -> Option<Bounds> {
        self.object(id).map(|o| o.bounds_px(self.size))
    }

    /// Topmost object whose pixel bounds contain `point`.
    pub fn object_at(&self, point: Point) -> Option<&PlacedObject> {
        self.objects
            .iter()
            .rev()
            .find(|o| o.bounds_px(self.size).contains(point))
    }

    /// Ids of every object whose pixel bounds intersect `rect`, in draw order.
    pub fn objects_in_rect(&self, rect: &Bounds) -> Vec<ObjectId> {
        self.objects
            .iter()
            .filter(|o| o.bounds_px(self.size).intersects(rect))
            .map(|o| o.id.clone())
            .collect()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
