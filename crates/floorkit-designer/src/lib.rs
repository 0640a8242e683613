//! # FloorKit Designer
//!
//! This crate provides the geometric interaction engine of the FloorKit floor
//! plan editor: placing tables, beds, stairs and room labels, drawing walls,
//! and exporting the layout for a read-only viewer.
//!
//! ## Core Components
//!
//! ### Geometry
//! - **Geometry**: normalized/pixel conversion, distance, segment projection
//!   and axis picking
//! - **Snapping**: attraction of the pointer to wall endpoints and segments
//! - **Wall Draft**: the begin/update/commit/cancel lifecycle of a new wall
//!
//! ### Editing
//! - **Canvas**: placed objects and walls, creation defaults, clamping,
//!   grouping, size floors and aspect lock
//! - **Selection**: click and marquee selection closed under groups
//! - **History**: linear undo of snapshots
//!
//! ### Layout Files
//! - **Serialization**: the versioned export document and lenient import of
//!   current, legacy and malformed files
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (one editing session)
//!   ├── Canvas (objects, walls, canvas size)
//!   ├── SelectionManager (selected ids, marquee)
//!   ├── WallDraft ── Snapper
//!   ├── History (snapshots)
//!   └── PendingGesture (live drag/transform geometry)
//!
//! Serialization (export / import boundary)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use floorkit_designer::{DesignerState, Point, ShapeKind};
//!
//! let mut state = DesignerState::new();
//! let id = state.add_object(ShapeKind::Circle);
//! state.move_object(&id, Point::new(100.0, 80.0));
//! assert!(state.undo());
//! ```

pub mod canvas;
pub mod commands;
pub mod config;
pub mod error;
pub mod geometry;
pub mod history;
pub mod model;
pub mod seating;
pub mod selection_manager;
pub mod serialization;
pub mod snapping;
pub mod wall_draft;

// Integration modules
pub mod designer_state;

// Re-export all public types from submodules
pub use canvas::{clamp_position, Canvas, CanvasSnapshot, DrawingMode, NodeTransform};
pub use commands::{DesignerCommand, Modifiers};
pub use config::InteractionConfig;
pub use error::{DesignerError, Result};
pub use geometry::{
    distance, lock_to_axis, pick_axis, project_onto_segment, to_normalized, to_pixels, Axis,
    Bounds, CanvasSize, Point,
};
pub use history::History;
pub use model::{
    dedupe_walls, status_counts, BedStatus, ObjectId, PlacedObject, ShapeKind, ShapePolicy, Wall,
};
pub use seating::seat_positions;
pub use selection_manager::{Marquee, SelectionManager};
pub use serialization::{
    export_layout, normalize_layout, parse_layout, ImportReport, ImportSource, ImportedLayout,
    LayoutFile, SeatingShape, SeatingSize, SeatingTable, SCHEMA_VERSION,
};
pub use snapping::{snap, AxisConstraint, Snapper};
pub use wall_draft::{DraftSegment, WallDraft};

// State and integration
pub use designer_state::{DesignerState, DragBatch, PendingGesture, TransformBatch};
