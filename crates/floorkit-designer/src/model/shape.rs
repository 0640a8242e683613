use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of placeable object shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Square,
    Circle,
    Bed,
    Stairs,
    RoomLabel,
}

/// Which minimum-size floor applies to a shape during resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeFloor {
    /// The general furniture floor (40 px by default).
    Standard,
    /// The smaller floor used by room labels (18 px by default).
    RoomLabel,
}

/// Which text field carries the visible label of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelField {
    BedNumber,
    RoomLabel,
    CustomLabel,
}

/// Per-shape creation and editing policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapePolicy {
    /// Normalized width of a freshly created object.
    pub default_width: f64,
    /// Normalized height of a freshly created object.
    pub default_height: f64,
    /// Width and height are forced equal on every resize.
    pub aspect_locked: bool,
    /// Dining shapes carry seats and appear in the seating export.
    pub dining: bool,
    pub floor: SizeFloor,
    pub label: LabelField,
    /// Label shown when the label field is empty. Dining shapes fall back to
    /// their position in the object list instead.
    pub fallback_label: Option<&'static str>,
}

const fn dining(width: f64, height: f64, aspect_locked: bool) -> ShapePolicy {
    ShapePolicy {
        default_width: width,
        default_height: height,
        aspect_locked,
        dining: true,
        floor: SizeFloor::Standard,
        label: LabelField::CustomLabel,
        fallback_label: None,
    }
}

const RECTANGLE: ShapePolicy = dining(0.18, 0.12, false);
const SQUARE: ShapePolicy = dining(0.12, 0.12, true);
const CIRCLE: ShapePolicy = dining(0.12, 0.12, true);
const BED: ShapePolicy = ShapePolicy {
    default_width: 0.22,
    default_height: 0.12,
    aspect_locked: false,
    dining: false,
    floor: SizeFloor::Standard,
    label: LabelField::BedNumber,
    fallback_label: Some("Bed"),
};
const STAIRS: ShapePolicy = ShapePolicy {
    default_width: 0.18,
    default_height: 0.16,
    aspect_locked: false,
    dining: false,
    floor: SizeFloor::Standard,
    label: LabelField::CustomLabel,
    fallback_label: Some("Stairs"),
};
const ROOM_LABEL: ShapePolicy = ShapePolicy {
    default_width: 0.10,
    default_height: 0.05,
    aspect_locked: false,
    dining: false,
    floor: SizeFloor::RoomLabel,
    label: LabelField::RoomLabel,
    fallback_label: Some("Room"),
};

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Circle,
        ShapeKind::Bed,
        ShapeKind::Stairs,
        ShapeKind::RoomLabel,
    ];

    /// Looks up the policy for this shape.
    pub const fn policy(self) -> &'static ShapePolicy {
        match self {
            ShapeKind::Rectangle => &RECTANGLE,
            ShapeKind::Square => &SQUARE,
            ShapeKind::Circle => &CIRCLE,
            ShapeKind::Bed => &BED,
            ShapeKind::Stairs => &STAIRS,
            ShapeKind::RoomLabel => &ROOM_LABEL,
        }
    }

    /// Parses the wire name of a shape (`"room-label"`, `"circle"`, ...).
    pub fn parse(name: &str) -> Option<ShapeKind> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Circle => "circle",
            ShapeKind::Bed => "bed",
            ShapeKind::Stairs => "stairs",
            ShapeKind::RoomLabel => "room-label",
        }
    }

    pub const fn is_dining(self) -> bool {
        self.policy().dining
    }

    pub const fn is_aspect_locked(self) -> bool {
        self.policy().aspect_locked
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
