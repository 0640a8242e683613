//! Object manipulation operations for Canvas.

use std::collections::HashMap;

use super::types::NodeTransform;
use super::Canvas;
use crate::config::InteractionConfig;
use crate::geometry::{CanvasSize, Point};
use crate::model::{new_id, BedStatus, ObjectId, PlacedObject};

/// Clamps a top-left pixel position so an object of `size_px` stays inside
/// the canvas. Objects larger than the canvas are pinned to the origin.
pub fn clamp_position(position: Point, size_px: (f64, f64), canvas: CanvasSize) -> Point {
    let (width, height) = size_px;
    Point::new(
        position.x.min(canvas.width - width).max(0.0),
        position.y.min(canvas.height - height).max(0.0),
    )
}

impl Canvas {
    /// Ids of `ids` plus every object sharing a group with one of them.
    ///
    /// The given ids keep their order; group siblings follow in draw order.
    pub fn expand_with_groups(&self, ids: &[ObjectId]) -> Vec<ObjectId> {
        let mut expanded: Vec<ObjectId> = Vec::with_capacity(ids.len());
        for id in ids {
            if !expanded.contains(id) {
                expanded.push(id.clone());
            }
        }

        let groups: Vec<&ObjectId> = self
            .objects
            .iter()
            .filter(|o| ids.contains(&o.id))
            .filter_map(|o| o.group_id.as_ref())
            .collect();
        if groups.is_empty() {
            return expanded;
        }

        for object in &self.objects {
            let in_group = object
                .group_id
                .as_ref()
                .is_some_and(|gid| groups.contains(&gid));
            if in_group && !expanded.contains(&object.id) {
                expanded.push(object.id.clone());
            }
        }
        expanded
    }

    /// Ids of all objects carrying `group_id`, in draw order.
    pub fn group_members(&self, group_id: &str) -> Vec<ObjectId> {
        self.objects
            .iter()
            .filter(|o| o.group_id.as_deref() == Some(group_id))
            .map(|o| o.id.clone())
            .collect()
    }

    /// Assigns a fresh group id to the given objects. Needs at least two ids.
    pub fn group_objects(&mut self, ids: &[ObjectId]) -> Option<ObjectId> {
        if ids.len() < 2 {
            return None;
        }
        let group_id = new_id();
        for object in self.objects.iter_mut().filter(|o| ids.contains(&o.id)) {
            object.group_id = Some(group_id.clone());
        }
        tracing::debug!(%group_id, members = ids.len(), "objects grouped");
        Some(group_id)
    }

    /// Group ids carried by any of the given objects.
    pub fn groups_of(&self, ids: &[ObjectId]) -> Vec<ObjectId> {
        let mut groups: Vec<ObjectId> = Vec::new();
        for object in self.objects.iter().filter(|o| ids.contains(&o.id)) {
            if let Some(gid) = &object.group_id {
                if !groups.contains(gid) {
                    groups.push(gid.clone());
                }
            }
        }
        groups
    }

    /// Dissolves the given groups. Returns how many objects were released.
    pub fn dissolve_groups(&mut self, groups: &[ObjectId]) -> usize {
        let mut released = 0;
        for object in &mut self.objects {
            if object.group_id.as_ref().is_some_and(|gid| groups.contains(gid)) {
                object.group_id = None;
                released += 1;
            }
        }
        released
    }

    /// Writes a pixel position back to an object, clamped to the canvas.
    pub fn commit_position(&mut self, id: &str, position: Point) -> bool {
        let canvas = self.size;
        let Some(object) = self.object_mut(id) else {
            return false;
        };
        let clamped = clamp_position(position, object.size_px(canvas), canvas);
        object.set_position_px(clamped, canvas);
        true
    }

    /// Whether a live transform keeps the object at or above its size floor.
    pub fn admits_transform(
        &self,
        id: &str,
        node: &NodeTransform,
        config: &InteractionConfig,
    ) -> bool {
        let Some(object) = self.object(id) else {
            return false;
        };
        let (width, height) = object.size_px(self.size);
        let floor = config.min_size_px(object.shape);
        width * node.scale_x.abs() >= floor && height * node.scale_y.abs() >= floor
    }

    /// Folds a finished transform into an object's normalized geometry.
    ///
    /// The scaled size is raised to the shape's floor, squared up for
    /// aspect-locked shapes, and the position is clamped with the new size.
    pub fn commit_transform(
        &mut self,
        id: &str,
        node: &NodeTransform,
        config: &InteractionConfig,
    ) -> bool {
        let canvas = self.size;
        let Some(object) = self.object_mut(id) else {
            return false;
        };
        let (current_width, current_height) = object.size_px(canvas);
        let floor = config.min_size_px(object.shape);
        let mut width = (current_width * node.scale_x.abs()).max(floor);
        let mut height = (current_height * node.scale_y.abs()).max(floor);
        if object.shape.is_aspect_locked() {
            let side = width.max(height);
            width = side;
            height = side;
        }

        let position = clamp_position(node.position(), (width, height), canvas);
        object.set_bounds_px(position.x, position.y, width, height, canvas);
        object.rotation = node.rotation;
        true
    }

    /// Sets the rotation in degrees. Any value is accepted.
    pub fn set_rotation(&mut self, id: &str, degrees: f64) -> bool {
        match self.object_mut(id) {
            Some(object) => {
                object.rotation = degrees;
                true
            }
            None => false,
        }
    }

    /// Stores `text` into the label field of the object's shape.
    pub fn set_object_label(&mut self, id: &str, text: &str) -> bool {
        match self.object_mut(id) {
            Some(object) => {
                object.set_label(text);
                true
            }
            None => false,
        }
    }

    /// Sets the status of a bed. Returns `false` for non-beds and when the
    /// status is unchanged.
    pub fn set_bed_status(&mut self, id: &str, status: BedStatus) -> bool {
        let Some(object) = self.object_mut(id) else {
            return false;
        };
        if !object.is_bed() || object.bed_status.unwrap_or_default() == status {
            return false;
        }
        object.bed_status = Some(status);
        true
    }

    /// Inserts copies of `objects` offset by `offset_px` on both axes.
    ///
    /// Each copy gets a fresh id; copies that shared a group share a fresh
    /// group id. Returns the inserted copies.
    pub fn paste_objects(&mut self, objects: &[PlacedObject], offset_px: f64) -> Vec<PlacedObject> {
        let canvas = self.size;
        let mut group_map: HashMap<ObjectId, ObjectId> = HashMap::new();
        let mut pasted = Vec::with_capacity(objects.len());

        for source in objects {
            let mut copy = source.clone();
            copy.id = new_id();
            copy.group_id = source
                .group_id
                .as_ref()
                .map(|gid| group_map.entry(gid.clone()).or_insert_with(new_id).clone());

            let origin = source.position_px(canvas).offset(offset_px, offset_px);
            let position = clamp_position(origin, source.size_px(canvas), canvas);
            copy.set_position_px(position, canvas);
            pasted.push(copy);
        }

        self.objects.extend(pasted.iter().cloned());
        tracing::debug!(count = pasted.len(), "objects pasted");
        pasted
    }
}
