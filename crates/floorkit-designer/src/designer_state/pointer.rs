//! Pointer and keyboard routing for designer state.
//!
//! In draw-wall mode the pointer drives the wall draft. In select mode a
//! press on an object starts a click-or-drag, and a press on empty canvas
//! starts a marquee.

use super::{DesignerState, PendingGesture};
use crate::canvas::DrawingMode;
use crate::commands::{DesignerCommand, Modifiers};
use crate::geometry::Point;
use crate::model::ObjectId;

impl DesignerState {
    pub fn pointer_down(&mut self, point: Point, modifiers: Modifiers) {
        match self.mode {
            DrawingMode::DrawWall => self.begin_wall(point),
            DrawingMode::Select => {
                let additive = modifiers.additive();
                match self.canvas.object_at(point).map(|o| o.id.clone()) {
                    Some(id) => {
                        self.gesture = Some(PendingGesture::Press {
                            id,
                            pointer: point,
                            additive,
                        })
                    }
                    None => self.selection.begin_marquee(point, additive),
                }
            }
        }
    }

    pub fn pointer_move(&mut self, point: Point) {
        if self.wall_draft.is_drafting() {
            self.update_wall(point);
            return;
        }

        match &self.gesture {
            Some(PendingGesture::Press { id, pointer, .. }) => {
                let (id, pointer) = (id.clone(), *pointer);
                let Some(origin) = self
                    .canvas
                    .object(&id)
                    .map(|o| o.position_px(self.canvas.size()))
                else {
                    self.gesture = None;
                    return;
                };
                if self.begin_drag(&id) {
                    if let Some(PendingGesture::Drag(batch)) = &mut self.gesture {
                        batch.pointer_start = Some(pointer);
                    }
                    self.drag_to(&id, origin.offset(point.x - pointer.x, point.y - pointer.y));
                }
            }
            Some(PendingGesture::Drag(batch)) => {
                let anchor = batch.anchor.clone();
                let start = batch.pointer_start;
                let origin = batch.origin_of(&anchor);
                if let (Some(start), Some(origin)) = (start, origin) {
                    self.drag_to(&anchor, origin.offset(point.x - start.x, point.y - start.y));
                }
            }
            Some(PendingGesture::Transform(_)) => {}
            None => self.selection.update_marquee(point),
        }
    }

    pub fn pointer_up(&mut self, point: Point) {
        if self.wall_draft.is_drafting() {
            self.commit_wall(Some(point));
            return;
        }

        match self.gesture.take() {
            Some(PendingGesture::Press { id, additive, .. }) => {
                self.selection.select_object(&self.canvas, &id, additive);
            }
            Some(gesture @ PendingGesture::Drag(_)) => {
                self.gesture = Some(gesture);
                self.pointer_move(point);
                self.end_drag();
            }
            Some(gesture @ PendingGesture::Transform(_)) => {
                self.gesture = Some(gesture);
                self.end_transform();
            }
            None => {
                let threshold = self.config.marquee_click_threshold_px;
                self.selection.finish_marquee(&self.canvas, point, threshold);
            }
        }
    }

    /// Click selection at a pixel point.
    ///
    /// Selects the topmost object under `point`. Clicking empty canvas clears
    /// the selection unless `additive`. Ignored in draw-wall mode.
    pub fn select_at(&mut self, point: Point, additive: bool) -> Option<ObjectId> {
        if self.mode == DrawingMode::DrawWall {
            return None;
        }
        match self.canvas.object_at(point).map(|o| o.id.clone()) {
            Some(id) => {
                self.selection.select_object(&self.canvas, &id, additive);
                Some(id)
            }
            None => {
                if !additive {
                    self.selection.clear();
                }
                None
            }
        }
    }

    /// Click selection of an object by id. Ignored in draw-wall mode.
    pub fn select_object(&mut self, id: &str, additive: bool) {
        if self.mode == DrawingMode::DrawWall || self.canvas.object(id).is_none() {
            return;
        }
        self.selection.select_object(&self.canvas, id, additive);
    }

    /// Runs the command bound to a key press.
    ///
    /// Returns the command when it was handled. Copy and delete are not
    /// handled with an empty selection.
    pub fn handle_shortcut(&mut self, key: &str, modifiers: Modifiers) -> Option<DesignerCommand> {
        let command = DesignerCommand::from_key(key, modifiers)?;
        match command {
            DesignerCommand::Undo => {
                self.undo();
            }
            DesignerCommand::Copy => {
                if self.selection.is_empty() {
                    return None;
                }
                self.copy_selected();
            }
            DesignerCommand::Paste => {
                self.paste();
            }
            DesignerCommand::Group => {
                self.group_selected();
            }
            DesignerCommand::Ungroup => {
                self.ungroup_selected();
            }
            DesignerCommand::Delete => {
                if self.selection.is_empty() {
                    return None;
                }
                self.delete_selected();
            }
        }
        tracing::trace!(command = command.name(), "shortcut handled");
        Some(command)
    }
}
