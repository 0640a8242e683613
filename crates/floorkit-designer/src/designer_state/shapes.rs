//! Object operations (add, delete, group, copy, paste, labels) for designer state.

use super::DesignerState;
use crate::model::{BedStatus, ObjectId, ShapeKind};

impl DesignerState {
    /// Adds an object of `shape` at the default drop position.
    pub fn add_object(&mut self, shape: ShapeKind) -> ObjectId {
        self.push_snapshot();
        self.canvas.add_object(shape)
    }

    /// Check if grouping is possible (at least 2 items selected).
    pub fn can_group(&self) -> bool {
        self.selection.len() >= 2
    }

    /// Check if ungrouping is possible (any selected item has a group id).
    pub fn can_ungroup(&self) -> bool {
        !self.canvas.groups_of(self.selection.selected_ids()).is_empty()
    }

    /// Deletes the selected objects.
    pub fn delete_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        let ids = self.selection.selected_ids().to_vec();
        self.push_snapshot();
        let removed = self.canvas.remove_objects(&ids);
        self.selection.clear();
        tracing::debug!(removed, "objects deleted");
        removed
    }

    /// Copies the selected objects to the clipboard, in draw order.
    pub fn copy_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        let copied: Vec<_> = self
            .canvas
            .objects()
            .iter()
            .filter(|o| self.selection.contains(&o.id))
            .cloned()
            .collect();
        if copied.is_empty() {
            return 0;
        }
        self.clipboard = copied;
        self.clipboard.len()
    }

    /// Pastes the clipboard, offset from the copied objects.
    ///
    /// The pasted objects become both the selection and the clipboard, so
    /// repeated pastes step further each time.
    pub fn paste(&mut self) -> Vec<ObjectId> {
        if self.clipboard.is_empty() {
            return Vec::new();
        }
        self.push_snapshot();
        let pasted = self
            .canvas
            .paste_objects(&self.clipboard, self.config.paste_offset_px);
        let ids: Vec<ObjectId> = pasted.iter().map(|o| o.id.clone()).collect();
        self.selection.set(ids.clone());
        self.clipboard = pasted;
        ids
    }

    /// Groups the selected objects under a fresh group id.
    pub fn group_selected(&mut self) -> Option<ObjectId> {
        if !self.can_group() {
            return None;
        }
        let ids = self.selection.selected_ids().to_vec();
        self.push_snapshot();
        self.canvas.group_objects(&ids)
    }

    /// Dissolves every group touched by the selection.
    pub fn ungroup_selected(&mut self) -> usize {
        let groups = self.canvas.groups_of(self.selection.selected_ids());
        if groups.is_empty() {
            return 0;
        }
        self.push_snapshot();
        let released = self.canvas.dissolve_groups(&groups);
        tracing::debug!(groups = groups.len(), released, "objects ungrouped");
        released
    }

    /// Stores `text` as the label of the single selected object.
    pub fn apply_label(&mut self, text: &str) -> bool {
        let Some(id) = self.single_selected().map(|o| o.id.clone()) else {
            return false;
        };
        self.set_object_label(&id, text)
    }

    /// Stores `text` as the label of any object, e.g. from an inline edit.
    pub fn set_object_label(&mut self, id: &str, text: &str) -> bool {
        if self.canvas.object(id).is_none() {
            return false;
        }
        self.push_snapshot();
        self.canvas.set_object_label(id, text)
    }

    /// Sets the status of the single selected bed from a free-form label.
    ///
    /// Nothing happens, and no history is recorded, when the canonical status
    /// is unchanged.
    pub fn set_bed_status(&mut self, raw: &str) -> bool {
        let status = BedStatus::canonicalize(raw);
        let id = match self.single_selected() {
            Some(bed) if bed.is_bed() && bed.bed_status.unwrap_or_default() != status => {
                bed.id.clone()
            }
            _ => return false,
        };
        self.push_snapshot();
        self.canvas.set_bed_status(&id, status)
    }
}
