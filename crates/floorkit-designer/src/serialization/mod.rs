//! Serialization and deserialization of layout files.
//!
//! Export writes a versioned document carrying two views of the layout: a
//! simplified seating list consumed by seating tools, and the full editor
//! objects and walls for lossless round-trips. Import accepts that document,
//! the older seating-only subset, or any other JSON, see [`import`].

mod coerce;
pub mod import;

pub use import::{normalize_layout, parse_layout, ImportReport, ImportSource, ImportedLayout};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::error::{DesignerError, Result};
use crate::geometry::{CanvasSize, Point};
use crate::model::{ObjectId, PlacedObject, ShapeKind, Wall};

/// Layout file schema version written on export.
pub const SCHEMA_VERSION: u32 = 2;

/// Default file name offered for exports.
pub const DEFAULT_FILE_NAME: &str = "floor-layout.json";

/// Complete layout file structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutFile {
    pub schema_version: u32,
    /// ISO-8601 UTC timestamp.
    pub exported_at: String,
    /// Informational only; all geometry in the file is normalized.
    pub canvas_px: CanvasSize,
    pub tables: Vec<SeatingTable>,
    pub walls: Vec<Wall>,
    pub editor: EditorSection,
}

/// Full-fidelity copy of the editor state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EditorSection {
    pub tables: Vec<PlacedObject>,
    pub walls: Vec<Wall>,
}

/// Seating-list shape of a dining table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatingShape {
    Round,
    Rect,
}

impl From<ShapeKind> for SeatingShape {
    fn from(shape: ShapeKind) -> Self {
        match shape {
            ShapeKind::Circle => SeatingShape::Round,
            _ => SeatingShape::Rect,
        }
    }
}

/// Size of a seating table: a radius for round tables, width and height
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeatingSize {
    Round { r: f64 },
    Rect { w: f64, h: f64 },
}

/// A dining table projected into the simplified seating list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatingTable {
    pub id: ObjectId,
    pub shape: SeatingShape,
    pub pos: Point,
    pub size: SeatingSize,
    pub rotation: f64,
    pub seats: u32,
}

impl SeatingTable {
    /// Projects a dining object. Returns `None` for beds, stairs and labels.
    pub fn from_object(object: &PlacedObject) -> Option<Self> {
        if !object.is_dining() {
            return None;
        }
        let shape = SeatingShape::from(object.shape);
        let size = match shape {
            SeatingShape::Round => SeatingSize::Round {
                r: object.width.min(object.height) / 2.0,
            },
            SeatingShape::Rect => SeatingSize::Rect {
                w: object.width,
                h: object.height,
            },
        };
        Some(Self {
            id: object.id.clone(),
            shape,
            pos: Point::new(object.x, object.y),
            size,
            rotation: object.rotation,
            seats: object.seats,
        })
    }
}

impl LayoutFile {
    /// Builds the export document for the canvas, stamped with the current
    /// time.
    pub fn from_canvas(canvas: &Canvas) -> Self {
        Self::with_timestamp(canvas, Utc::now())
    }

    pub fn with_timestamp(canvas: &Canvas, exported_at: DateTime<Utc>) -> Self {
        let objects = canvas.objects();
        let walls = canvas.walls();
        Self {
            schema_version: SCHEMA_VERSION,
            exported_at: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            canvas_px: canvas.size(),
            tables: objects.iter().filter_map(SeatingTable::from_object).collect(),
            walls: walls.to_vec(),
            editor: EditorSection {
                tables: objects.to_vec(),
                walls: walls.to_vec(),
            },
        }
    }

    /// Serializes the document, indented when `pretty` is set.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.map_err(DesignerError::Serialize)
    }
}

/// Serializes the canvas into a pretty-printed layout file.
pub fn export_layout(canvas: &Canvas) -> Result<String> {
    LayoutFile::from_canvas(canvas).to_json(true)
}
