use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::bed_status::{bed_status_field, BedStatus};
use super::shape::{LabelField, ShapeKind};
use super::ObjectId;
use crate::geometry::{Bounds, CanvasSize, Point};

/// A table, bed, staircase or room label placed on the canvas.
///
/// Position and size are normalized fractions of the canvas; `rotation` is in
/// degrees around the top-left corner. Fields this editor does not know about
/// (for example `floorNumber` or `linkedRoomId` written by a viewer) are kept
/// in `extra` and written back on export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedObject {
    pub id: ObjectId,
    #[serde(default)]
    pub shape: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub group_id: Option<ObjectId>,
    #[serde(default)]
    pub seats: u32,
    #[serde(default)]
    pub bed_number: String,
    #[serde(default, with = "bed_status_field")]
    pub bed_status: Option<BedStatus>,
    #[serde(default)]
    pub room_label: String,
    #[serde(default)]
    pub custom_label: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlacedObject {
    /// Creates an object of the given shape at the default drop position
    /// (0.4, 0.4) with the shape's default size and empty labels.
    pub fn new(id: impl Into<ObjectId>, shape: ShapeKind) -> Self {
        let policy = shape.policy();
        Self {
            id: id.into(),
            shape,
            x: 0.4,
            y: 0.4,
            width: policy.default_width,
            height: policy.default_height,
            rotation: 0.0,
            group_id: None,
            seats: if policy.dining { 4 } else { 0 },
            bed_number: String::new(),
            bed_status: (shape == ShapeKind::Bed).then_some(BedStatus::Vacant),
            room_label: String::new(),
            custom_label: String::new(),
            extra: Map::new(),
        }
    }

    pub fn is_bed(&self) -> bool {
        self.shape == ShapeKind::Bed
    }

    pub fn is_room_label(&self) -> bool {
        self.shape == ShapeKind::RoomLabel
    }

    pub fn is_dining(&self) -> bool {
        self.shape.is_dining()
    }

    /// Top-left corner in pixels.
    pub fn position_px(&self, canvas: CanvasSize) -> Point {
        Point::new(self.x * canvas.width, self.y * canvas.height)
    }

    /// `(width, height)` in pixels.
    pub fn size_px(&self, canvas: CanvasSize) -> (f64, f64) {
        (self.width * canvas.width, self.height * canvas.height)
    }

    /// Axis-aligned pixel bounds, ignoring rotation.
    pub fn bounds_px(&self, canvas: CanvasSize) -> Bounds {
        let origin = self.position_px(canvas);
        let (w, h) = self.size_px(canvas);
        Bounds::from_rect(origin.x, origin.y, w, h)
    }

    /// Writes pixel geometry back into the normalized fields.
    pub fn set_bounds_px(&mut self, x: f64, y: f64, width: f64, height: f64, canvas: CanvasSize) {
        self.x = ratio(x, canvas.width);
        self.y = ratio(y, canvas.height);
        self.width = ratio(width, canvas.width);
        self.height = ratio(height, canvas.height);
    }

    /// Writes a pixel position back into the normalized fields.
    pub fn set_position_px(&mut self, position: Point, canvas: CanvasSize) {
        self.x = ratio(position.x, canvas.width);
        self.y = ratio(position.y, canvas.height);
    }

    /// The label field that is meaningful for this object's shape.
    pub fn label(&self) -> &str {
        match self.shape.policy().label {
            LabelField::BedNumber => &self.bed_number,
            LabelField::RoomLabel => &self.room_label,
            LabelField::CustomLabel => &self.custom_label,
        }
    }

    /// Stores a label into the field selected by the shape.
    ///
    /// The text is trimmed. An empty room label becomes `"Room"`.
    pub fn set_label(&mut self, text: &str) {
        let text = text.trim();
        match self.shape.policy().label {
            LabelField::BedNumber => self.bed_number = text.to_string(),
            LabelField::RoomLabel => {
                self.room_label = if text.is_empty() {
                    "Room".to_string()
                } else {
                    text.to_string()
                }
            }
            LabelField::CustomLabel => self.custom_label = text.to_string(),
        }
    }

    /// Text shown on the object. `index` is the object's position in the
    /// layout and numbers unlabeled dining tables.
    pub fn display_label(&self, index: usize) -> String {
        let label = self.label();
        if !label.is_empty() {
            return label.to_string();
        }
        match self.shape.policy().fallback_label {
            Some(fallback) => fallback.to_string(),
            None => (index + 1).to_string(),
        }
    }
}

fn ratio(value: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        value / extent
    } else {
        0.0
    }
}
