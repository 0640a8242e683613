//! Drag, resize and rotate gestures for designer state.
//!
//! Gestures are two-phase. While the pointer is down the live geometry lives
//! in a [`PendingGesture`] and the canvas is untouched; the gesture's end
//! folds it into the normalized object fields. The history snapshot is taken
//! once, when the gesture begins.

use super::DesignerState;
use crate::canvas::NodeTransform;
use crate::geometry::{Bounds, Point};
use crate::model::ObjectId;

/// Objects moving together during a drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragBatch {
    /// The object under the pointer.
    pub anchor: ObjectId,
    /// Committed pixel position of every moving object at drag start.
    pub origins: Vec<(ObjectId, Point)>,
    pub dx: f64,
    pub dy: f64,
    /// Where the pointer grabbed the anchor, for pointer-driven drags.
    pub pointer_start: Option<Point>,
}

impl DragBatch {
    /// Committed pixel position of a moving object at drag start.
    pub fn origin_of(&self, id: &str) -> Option<Point> {
        self.origins
            .iter()
            .find(|(moving, _)| moving == id)
            .map(|(_, origin)| *origin)
    }

    /// Live, unclamped pixel position of a moving object.
    pub fn position_of(&self, id: &str) -> Option<Point> {
        self.origin_of(id).map(|origin| origin.offset(self.dx, self.dy))
    }

    pub fn moving_ids(&self) -> impl Iterator<Item = &ObjectId> {
        self.origins.iter().map(|(id, _)| id)
    }
}

/// Live transform nodes of the selected objects.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformBatch {
    pub nodes: Vec<(ObjectId, NodeTransform)>,
}

impl TransformBatch {
    pub fn node(&self, id: &str) -> Option<&NodeTransform> {
        self.nodes.iter().find(|(n, _)| n == id).map(|(_, node)| node)
    }
}

/// A gesture in flight.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingGesture {
    /// Pointer pressed on an object. Becomes a drag on the first move, or a
    /// click when released in place.
    Press {
        id: ObjectId,
        pointer: Point,
        additive: bool,
    },
    Drag(DragBatch),
    Transform(TransformBatch),
}

impl DesignerState {
    /// Objects that move with `id`: its whole group, else the selection when
    /// `id` is part of a multi-selection, else just `id`.
    pub fn moving_ids_for(&self, id: &str) -> Vec<ObjectId> {
        let Some(object) = self.canvas.object(id) else {
            return Vec::new();
        };
        if let Some(group_id) = &object.group_id {
            return self.canvas.group_members(group_id);
        }
        if self.selection.len() > 1 && self.selection.contains(id) {
            return self.selection.selected_ids().to_vec();
        }
        vec![id.to_string()]
    }

    /// Starts dragging `id` and everything that moves with it.
    pub fn begin_drag(&mut self, id: &str) -> bool {
        let size = self.canvas.size();
        let origins: Vec<(ObjectId, Point)> = self
            .moving_ids_for(id)
            .into_iter()
            .filter_map(|moving| {
                let origin = self.canvas.object(&moving)?.position_px(size);
                Some((moving, origin))
            })
            .collect();
        if origins.is_empty() {
            return false;
        }

        self.push_snapshot();
        tracing::trace!(anchor = id, count = origins.len(), "drag started");
        self.gesture = Some(PendingGesture::Drag(DragBatch {
            anchor: id.to_string(),
            origins,
            dx: 0.0,
            dy: 0.0,
            pointer_start: None,
        }));
        true
    }

    /// Moves the dragged node of `id` to `position`. Every other moving
    /// object follows with the same delta.
    pub fn drag_to(&mut self, id: &str, position: Point) -> bool {
        let Some(PendingGesture::Drag(batch)) = &mut self.gesture else {
            return false;
        };
        let Some(origin) = batch.origin_of(id) else {
            return false;
        };
        batch.dx = position.x - origin.x;
        batch.dy = position.y - origin.y;
        true
    }

    /// Commits the drag. Each moving object is clamped to the canvas on its
    /// own. Returns the number of objects moved.
    pub fn end_drag(&mut self) -> usize {
        let batch = match self.gesture.take() {
            Some(PendingGesture::Drag(batch)) => batch,
            other => {
                self.gesture = other;
                return 0;
            }
        };
        let mut moved = 0;
        for (id, origin) in &batch.origins {
            if self
                .canvas
                .commit_position(id, origin.offset(batch.dx, batch.dy))
            {
                moved += 1;
            }
        }
        tracing::debug!(moved, dx = batch.dx, dy = batch.dy, "drag committed");
        moved
    }

    /// Drags `id` to `position` in one step.
    pub fn move_object(&mut self, id: &str, position: Point) -> bool {
        if !self.begin_drag(id) {
            return false;
        }
        self.drag_to(id, position);
        self.end_drag() > 0
    }

    /// Starts a transform of the current selection.
    pub fn begin_transform(&mut self) -> bool {
        let size = self.canvas.size();
        let nodes: Vec<(ObjectId, NodeTransform)> = self
            .selection
            .selected_ids()
            .iter()
            .filter_map(|id| {
                let object = self.canvas.object(id)?;
                Some((id.clone(), NodeTransform::of(object, size)))
            })
            .collect();
        if nodes.is_empty() {
            return false;
        }
        self.push_snapshot();
        self.gesture = Some(PendingGesture::Transform(TransformBatch { nodes }));
        true
    }

    /// Replaces the live node of one object.
    ///
    /// A node that would shrink the object below its size floor is refused
    /// and the previous node is kept.
    pub fn update_transform_node(&mut self, id: &str, node: NodeTransform) -> bool {
        if !self.canvas.admits_transform(id, &node, &self.config) {
            tracing::trace!(id, "transform below size floor refused");
            return false;
        }
        let Some(PendingGesture::Transform(batch)) = &mut self.gesture else {
            return false;
        };
        match batch.nodes.iter_mut().find(|(n, _)| n == id) {
            Some((_, current)) => {
                *current = node;
                true
            }
            None => false,
        }
    }

    /// Scales every node of the transform relative to the committed size of
    /// its object, keeping the top-left corner of the selection fixed.
    ///
    /// Refused as a whole when any object would drop below its size floor.
    pub fn scale_selection(&mut self, scale_x: f64, scale_y: f64) -> bool {
        let size = self.canvas.size();
        let Some(PendingGesture::Transform(batch)) = &self.gesture else {
            return false;
        };

        let anchor = batch
            .nodes
            .iter()
            .filter_map(|(id, _)| self.canvas.bounds_of(id))
            .reduce(|a, b| a.union(&b))
            .map(|b: Bounds| Point::new(b.min_x, b.min_y));
        let Some(anchor) = anchor else {
            return false;
        };

        let mut proposed = Vec::with_capacity(batch.nodes.len());
        for (id, node) in &batch.nodes {
            let Some(object) = self.canvas.object(id) else {
                continue;
            };
            let origin = object.position_px(size);
            let next = NodeTransform {
                x: anchor.x + (origin.x - anchor.x) * scale_x,
                y: anchor.y + (origin.y - anchor.y) * scale_y,
                scale_x,
                scale_y,
                rotation: node.rotation,
            };
            if !self.canvas.admits_transform(id, &next, &self.config) {
                tracing::trace!(id = id.as_str(), "group scale below size floor refused");
                return false;
            }
            proposed.push((id.clone(), next));
        }

        self.gesture = Some(PendingGesture::Transform(TransformBatch { nodes: proposed }));
        true
    }

    /// Rotates every node of the transform by `degrees` from its object's
    /// committed rotation. Each object pivots on its own top-left corner.
    pub fn rotate_selection(&mut self, degrees: f64) -> bool {
        let Some(PendingGesture::Transform(batch)) = &mut self.gesture else {
            return false;
        };
        for (id, node) in &mut batch.nodes {
            if let Some(object) = self.canvas.object(id) {
                node.rotation = object.rotation + degrees;
            }
        }
        true
    }

    /// Commits the transform. Returns the number of objects updated.
    pub fn end_transform(&mut self) -> usize {
        let batch = match self.gesture.take() {
            Some(PendingGesture::Transform(batch)) => batch,
            other => {
                self.gesture = other;
                return 0;
            }
        };
        let updated = batch
            .nodes
            .iter()
            .filter(|(id, node)| self.canvas.commit_transform(id, node, &self.config))
            .count();
        tracing::debug!(updated, "transform committed");
        updated
    }

    /// Resizes one object to the given pixel size in one step.
    ///
    /// A size below the shape's floor is rejected without touching history.
    pub fn resize_object(&mut self, id: &str, width_px: f64, height_px: f64) -> bool {
        let size = self.canvas.size();
        let Some(object) = self.canvas.object(id) else {
            return false;
        };
        let (width, height) = object.size_px(size);
        if width <= 0.0 || height <= 0.0 {
            return false;
        }
        let node = NodeTransform {
            scale_x: width_px / width,
            scale_y: height_px / height,
            ..NodeTransform::of(object, size)
        };
        if !self.canvas.admits_transform(id, &node, &self.config) {
            tracing::debug!(id, width_px, height_px, "resize below size floor rejected");
            return false;
        }
        self.push_snapshot();
        self.canvas.commit_transform(id, &node, &self.config)
    }

    /// Sets the rotation of one object, in degrees.
    pub fn rotate_object(&mut self, id: &str, degrees: f64) -> bool {
        if self.canvas.object(id).is_none() {
            return false;
        }
        self.push_snapshot();
        self.canvas.set_rotation(id, degrees)
    }
}
