//! Linear undo history of canvas snapshots.

use crate::canvas::CanvasSnapshot;

/// Push-only stack of snapshots taken before each mutation.
///
/// There is no redo and no size bound. The stack lives as long as the editing
/// session; importing a layout pushes onto it like any other mutation.
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<CanvasSnapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: CanvasSnapshot) {
        self.snapshots.push(snapshot);
        tracing::trace!(depth = self.snapshots.len(), "history snapshot pushed");
    }

    /// Removes and returns the most recent snapshot.
    pub fn pop(&mut self) -> Option<CanvasSnapshot> {
        self.snapshots.pop()
    }

    pub fn peek(&self) -> Option<&CanvasSnapshot> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.is_empty()
    }
}
