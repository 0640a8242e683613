//! Tunable thresholds for pointer interaction.

use serde::{Deserialize, Serialize};

use crate::model::{ShapeKind, SizeFloor};

/// Pixel thresholds used by snapping, wall drafting, resizing and selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Maximum distance at which a wall endpoint or wall segment attracts the
    /// pointer.
    pub snap_tolerance_px: f64,
    /// Movement needed before a wall draft locks to an axis.
    pub axis_lock_threshold_px: f64,
    /// Shorter wall drafts are discarded on commit.
    pub min_wall_length_px: f64,
    /// Resize floor for furniture shapes.
    pub min_object_size_px: f64,
    /// Resize floor for room labels.
    pub min_room_label_size_px: f64,
    /// A marquee smaller than this on both axes counts as a click.
    pub marquee_click_threshold_px: f64,
    /// Offset applied on each axis to pasted objects.
    pub paste_offset_px: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            snap_tolerance_px: 14.0,
            axis_lock_threshold_px: 6.0,
            min_wall_length_px: 10.0,
            min_object_size_px: 40.0,
            min_room_label_size_px: 18.0,
            marquee_click_threshold_px: 4.0,
            paste_offset_px: 24.0,
        }
    }
}

impl InteractionConfig {
    /// Minimum width and height in pixels for the given shape.
    pub fn min_size_px(&self, shape: ShapeKind) -> f64 {
        match shape.policy().floor {
            SizeFloor::Standard => self.min_object_size_px,
            SizeFloor::RoomLabel => self.min_room_label_size_px,
        }
    }
}
