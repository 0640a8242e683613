//! Lenient layout import.
//!
//! Import resolves objects and walls through three tiers:
//!
//! 1. **Editor**: the full-fidelity `editor.tables` / `editor.walls` lists of
//!    a current export, used when present and non-empty.
//! 2. **Seating**: the simplified top-level `tables` list of older exports,
//!    converted into editor objects. Walls fall back to the top-level
//!    `walls` list.
//! 3. **Field coercion**: every record from either tier is rebuilt field by
//!    field with defaults for anything missing or mistyped.
//!
//! Only input that is not JSON at all is rejected.

use serde_json::{Map, Value};

use super::coerce::FieldCoercer;
use crate::error::{DesignerError, Result};
use crate::geometry::{CanvasSize, Point};
use crate::model::{BedStatus, PlacedObject, ShapeKind, Wall};

/// Fields of a placed object that are rebuilt by coercion. Everything else is
/// carried over untouched.
const OBJECT_FIELDS: &[&str] = &[
    "id",
    "shape",
    "x",
    "y",
    "width",
    "height",
    "rotation",
    "groupId",
    "seats",
    "bedNumber",
    "bedStatus",
    "roomLabel",
    "customLabel",
];

const WALL_FIELDS: &[&str] = &["id", "start", "end"];

const SEATING_RADIUS: f64 = 0.06;
const SEATING_WIDTH: f64 = 0.18;
const SEATING_HEIGHT: f64 = 0.12;
const DEFAULT_POSITION: f64 = 0.4;
const DEFAULT_SEATS: f64 = 4.0;

/// Which tier a collection was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportSource {
    /// The `editor` section of a current export.
    Editor,
    /// The top-level seating list or wall list.
    Seating,
    /// Nothing usable was found.
    #[default]
    Empty,
}

/// What the import had to do to make sense of its input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub object_source: ImportSource,
    pub wall_source: ImportSource,
    /// Fields that were missing, mistyped or converted.
    pub repaired_fields: usize,
    pub generated_ids: usize,
    /// Walls without a usable start or end.
    pub dropped_walls: usize,
}

/// A normalized layout ready to replace the editor contents.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedLayout {
    pub objects: Vec<PlacedObject>,
    pub walls: Vec<Wall>,
    /// The `canvasPx` recorded by the exporter, if any.
    pub canvas_px: Option<CanvasSize>,
    pub report: ImportReport,
}

/// Parses and normalizes layout JSON.
///
/// Fails only when `input` is not valid JSON.
pub fn parse_layout(input: &str) -> Result<ImportedLayout> {
    let raw: Value = serde_json::from_str(input).map_err(DesignerError::Parse)?;
    Ok(normalize_layout(&raw))
}

/// Normalizes an already parsed JSON value. Never fails.
pub fn normalize_layout(raw: &Value) -> ImportedLayout {
    let mut coercer = FieldCoercer::default();
    let mut report = ImportReport::default();

    let editor = raw.get("editor");
    let objects = match non_empty_array(editor.and_then(|e| e.get("tables"))) {
        Some(tables) => {
            report.object_source = ImportSource::Editor;
            tables
                .iter()
                .map(|table| coerce_object(table, &mut coercer))
                .collect()
        }
        None => match raw.get("tables").and_then(Value::as_array) {
            Some(tables) => {
                report.object_source = if tables.is_empty() {
                    ImportSource::Empty
                } else {
                    ImportSource::Seating
                };
                tables
                    .iter()
                    .map(|table| {
                        coerce_object(&seating_to_editor(table, &mut coercer), &mut coercer)
                    })
                    .collect()
            }
            None => Vec::new(),
        },
    };

    let wall_values = match non_empty_array(editor.and_then(|e| e.get("walls"))) {
        Some(walls) => {
            report.wall_source = ImportSource::Editor;
            walls.as_slice()
        }
        None => match non_empty_array(raw.get("walls")) {
            Some(walls) => {
                report.wall_source = ImportSource::Seating;
                walls.as_slice()
            }
            None => &[],
        },
    };
    let mut walls = Vec::with_capacity(wall_values.len());
    for value in wall_values {
        match coerce_wall(value, &mut coercer) {
            Some(wall) => walls.push(wall),
            None => report.dropped_walls += 1,
        }
    }
    if report.dropped_walls > 0 {
        tracing::warn!(dropped = report.dropped_walls, "dropped walls without endpoints");
    }

    let canvas_px = raw.get("canvasPx").and_then(|c| {
        let size = CanvasSize::new(
            c.get("width").and_then(Value::as_f64)?,
            c.get("height").and_then(Value::as_f64)?,
        );
        size.is_valid().then_some(size)
    });

    report.repaired_fields = coercer.repaired;
    report.generated_ids = coercer.generated_ids;
    if report.repaired_fields > 0 {
        tracing::warn!(
            repaired = report.repaired_fields,
            "import replaced missing or invalid fields"
        );
    }
    tracing::info!(
        objects = objects.len(),
        walls = walls.len(),
        object_source = ?report.object_source,
        repaired = report.repaired_fields,
        "layout imported"
    );

    ImportedLayout {
        objects,
        walls,
        canvas_px,
        report,
    }
}

fn non_empty_array(value: Option<&Value>) -> Option<&Vec<Value>> {
    value.and_then(Value::as_array).filter(|a| !a.is_empty())
}

/// Converts a seating-list entry into an editor record.
///
/// Round tables become circles sized from their radius, everything else a
/// rectangle. Beds, labels and groups do not exist in the seating list.
fn seating_to_editor(table: &Value, coercer: &mut FieldCoercer) -> Value {
    let round = table.get("shape").and_then(Value::as_str) == Some("round");
    let size = table.get("size");
    let pos = table.get("pos");

    let (shape, width, height) = if round {
        let r = coercer.number(size.and_then(|s| s.get("r")), SEATING_RADIUS);
        (ShapeKind::Circle, r * 2.0, r * 2.0)
    } else {
        (
            ShapeKind::Rectangle,
            coercer.number(size.and_then(|s| s.get("w")), SEATING_WIDTH),
            coercer.number(size.and_then(|s| s.get("h")), SEATING_HEIGHT),
        )
    };

    let mut record = Map::new();
    if let Some(id) = table.get("id") {
        record.insert("id".into(), id.clone());
    }
    record.insert("shape".into(), Value::from(shape.as_str()));
    record.insert(
        "x".into(),
        Value::from(coercer.number(pos.and_then(|p| p.get("x")), DEFAULT_POSITION)),
    );
    record.insert(
        "y".into(),
        Value::from(coercer.number(pos.and_then(|p| p.get("y")), DEFAULT_POSITION)),
    );
    record.insert("width".into(), Value::from(width));
    record.insert("height".into(), Value::from(height));
    record.insert(
        "rotation".into(),
        Value::from(coercer.number(table.get("rotation"), 0.0)),
    );
    record.insert("groupId".into(), Value::Null);
    record.insert(
        "seats".into(),
        Value::from(coercer.number(table.get("seats"), DEFAULT_SEATS)),
    );
    Value::Object(record)
}

/// Rebuilds a placed object from an arbitrary JSON value.
fn coerce_object(value: &Value, coercer: &mut FieldCoercer) -> PlacedObject {
    let field = |name: &str| value.get(name);

    let shape = field("shape")
        .and_then(Value::as_str)
        .and_then(ShapeKind::parse)
        .unwrap_or_default();
    let policy = shape.policy();

    let id = coercer.id(field("id"));
    let mut object = PlacedObject::new(id, shape);
    object.x = coercer.number(field("x"), DEFAULT_POSITION);
    object.y = coercer.number(field("y"), DEFAULT_POSITION);
    object.width = coercer.number(field("width"), SEATING_WIDTH);
    object.height = coercer.number(field("height"), SEATING_HEIGHT);
    object.rotation = coercer.number(field("rotation"), 0.0);
    object.group_id = coercer.optional_id(field("groupId"));

    let default_seats = if policy.dining { DEFAULT_SEATS } else { 0.0 };
    object.seats = coercer.number(field("seats"), default_seats).round().max(0.0) as u32;

    object.bed_number = coercer.string(field("bedNumber"));
    object.bed_status = object
        .is_bed()
        .then(|| BedStatus::canonicalize(&coercer.string(field("bedStatus"))));
    object.room_label = coercer.string(field("roomLabel"));
    object.custom_label = coercer.string(field("customLabel"));

    if let Some(map) = value.as_object() {
        object.extra = unknown_fields(map, OBJECT_FIELDS);
    }
    object
}

/// Rebuilds a wall. Returns `None` when either endpoint is missing.
fn coerce_wall(value: &Value, coercer: &mut FieldCoercer) -> Option<Wall> {
    let start = value.get("start").filter(|v| v.is_object())?;
    let end = value.get("end").filter(|v| v.is_object())?;
    let mut point = |p: &Value| {
        Point::new(
            coercer.number(p.get("x"), 0.0),
            coercer.number(p.get("y"), 0.0),
        )
    };
    let start = point(start);
    let end = point(end);

    let mut wall = Wall::new(start, end);
    wall.id = coercer.id(value.get("id"));
    if let Some(map) = value.as_object() {
        wall.extra = unknown_fields(map, WALL_FIELDS);
    }
    Some(wall)
}

fn unknown_fields(map: &Map<String, Value>, known: &[&str]) -> Map<String, Value> {
    map.iter()
        .filter(|(key, _)| !known.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
