//! Undo for designer state.

use super::DesignerState;

impl DesignerState {
    /// Pushes the current objects and walls onto the history stack.
    pub(crate) fn push_snapshot(&mut self) {
        self.history.push(self.canvas.snapshot());
        self.is_modified = true;
    }

    /// Returns true if there is a snapshot to return to.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Restores the most recent snapshot.
    ///
    /// Also drops the wall draft, the selection and any pending gesture.
    /// Returns `false` when the history is empty.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            return false;
        };
        self.canvas.restore(snapshot);
        self.wall_draft.cancel();
        self.selection.clear();
        self.selection.cancel_marquee();
        self.gesture = None;
        tracing::debug!(remaining = self.history.len(), "undo");
        true
    }
}
