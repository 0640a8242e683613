//! Wall drawing for designer state.

use super::DesignerState;
use crate::geometry::Point;
use crate::model::ObjectId;
use crate::snapping::Snapper;
use crate::wall_draft::DraftSegment;

impl DesignerState {
    /// Starts a wall at `point`, snapped to existing walls.
    pub fn begin_wall(&mut self, point: Point) {
        let snapper = Snapper::new(
            self.canvas.walls(),
            self.canvas.size(),
            self.config.snap_tolerance_px,
        );
        self.wall_draft.begin(point, &snapper);
    }

    /// Moves the free end of the wall draft.
    pub fn update_wall(&mut self, point: Point) {
        let snapper = Snapper::new(
            self.canvas.walls(),
            self.canvas.size(),
            self.config.snap_tolerance_px,
        );
        self.wall_draft.update(point, &snapper, &self.config);
    }

    /// Ends the wall draft, creating a wall unless it is too short.
    pub fn commit_wall(&mut self, point: Option<Point>) -> Option<ObjectId> {
        let snapper = Snapper::new(
            self.canvas.walls(),
            self.canvas.size(),
            self.config.snap_tolerance_px,
        );
        let segment = self.wall_draft.commit(point, &snapper, &self.config)?;
        self.push_snapshot();
        Some(self.canvas.add_wall_px(segment.start, segment.end))
    }

    /// Drops the wall draft without side effects.
    pub fn cancel_wall(&mut self) {
        self.wall_draft.cancel();
    }

    /// The wall being drawn, in pixels.
    pub fn draft_segment(&self) -> Option<&DraftSegment> {
        self.wall_draft.segment()
    }
}
