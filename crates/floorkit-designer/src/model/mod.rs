//! Layout data model: placed objects, walls, shape policies and bed status.
//!
//! All geometry stored here is normalized (see [`crate::geometry`]).

mod bed_status;
mod object;
mod shape;
mod wall;

pub use bed_status::{bed_status_field, status_counts, BedStatus};
pub use object::PlacedObject;
pub use shape::{LabelField, ShapeKind, ShapePolicy, SizeFloor};
pub use wall::{dedupe_walls, Wall};

/// Opaque identifier of an object, wall or group.
pub type ObjectId = String;

/// Generates a fresh unique identifier.
pub fn new_id() -> ObjectId {
    uuid::Uuid::new_v4().to_string()
}
