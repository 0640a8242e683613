//! Designer state manager for UI integration.
//! Owns one editing session and handles UI callbacks.
//!
//! This module is split into submodules for better organization:
//! - `history`: Snapshots and undo
//! - `pointer`: Pointer and keyboard routing
//! - `shapes`: Object creation, deletion, clipboard, grouping, labels
//! - `transforms`: Drag, resize and rotate gestures
//! - `walls`: Wall drawing
//! - `file_io`: Export, import, save, load

mod file_io;
mod history;
mod pointer;
mod shapes;
mod transforms;
mod walls;

pub use transforms::{DragBatch, PendingGesture, TransformBatch};

use std::path::PathBuf;

use crate::canvas::{Canvas, DrawingMode};
use crate::config::InteractionConfig;
use crate::geometry::CanvasSize;
use crate::history::History;
use crate::model::{ObjectId, PlacedObject};
use crate::selection_manager::SelectionManager;
use crate::wall_draft::WallDraft;

/// Designer state for UI integration.
///
/// All mutation goes through methods on this type, which take the history
/// snapshot before changing the canvas.
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub canvas: Canvas,
    pub selection: SelectionManager,
    pub history: History,
    pub wall_draft: WallDraft,
    pub config: InteractionConfig,
    pub clipboard: Vec<PlacedObject>,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
    pub(crate) mode: DrawingMode,
    pub(crate) gesture: Option<PendingGesture>,
}

impl DesignerState {
    /// Creates a new designer state with default thresholds on an 800 x 600
    /// canvas.
    pub fn new() -> Self {
        Self::with_config(InteractionConfig::default(), CanvasSize::default())
    }

    pub fn with_config(config: InteractionConfig, canvas_size: CanvasSize) -> Self {
        Self {
            canvas: Canvas::with_size(canvas_size),
            selection: SelectionManager::new(),
            history: History::new(),
            wall_draft: WallDraft::Idle,
            config,
            clipboard: Vec::new(),
            current_file_path: None,
            is_modified: false,
            mode: DrawingMode::Select,
            gesture: None,
        }
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    /// Sets the drawing mode. Leaving a mode abandons its in-flight gesture.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        if self.mode == mode {
            return;
        }
        self.wall_draft.cancel();
        self.selection.cancel_marquee();
        self.gesture = None;
        self.mode = mode;
        tracing::debug!(?mode, "drawing mode changed");
    }

    /// Flips between select and draw-wall mode.
    pub fn toggle_wall_mode(&mut self) {
        let next = match self.mode {
            DrawingMode::Select => DrawingMode::DrawWall,
            DrawingMode::DrawWall => DrawingMode::Select,
        };
        self.set_mode(next);
    }

    /// Resizes the canvas. Stored geometry is normalized, so objects scale
    /// with it.
    pub fn set_canvas_size(&mut self, size: CanvasSize) {
        if size.is_valid() {
            self.canvas.set_size(size);
        } else {
            tracing::warn!(?size, "ignoring invalid canvas size");
        }
    }

    pub fn selected_ids(&self) -> &[ObjectId] {
        self.selection.selected_ids()
    }

    /// The selected object when exactly one is selected.
    pub fn single_selected(&self) -> Option<&PlacedObject> {
        match self.selection.selected_ids() {
            [id] => self.canvas.object(id),
            _ => None,
        }
    }

    /// The in-flight drag or transform, if any.
    pub fn pending_gesture(&self) -> Option<&PendingGesture> {
        self.gesture.as_ref()
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
