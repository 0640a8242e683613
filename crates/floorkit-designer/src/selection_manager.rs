use crate::canvas::Canvas;
use crate::geometry::{Bounds, Point};
use crate::model::ObjectId;

/// An in-progress rubber-band selection, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marquee {
    pub start: Point,
    pub current: Point,
    /// Union with the existing selection instead of replacing it.
    pub additive: bool,
}

impl Marquee {
    /// The marquee as a normalized rectangle.
    pub fn rect(&self) -> Bounds {
        Bounds::from_corners(self.start, self.current)
    }
}

/// Manages object selection state and selection operations.
///
/// `SelectionManager` is responsible for:
/// - Tracking the ordered set of selected object ids
/// - Handling click selection, with additive toggling
/// - Handling rectangle-based selection (marquee)
/// - Keeping the selection closed under group membership
///
/// # Selection Model
///
/// - **Expanded selection**: whenever one member of a group is selected, all
///   members are. Every entry point expands through [`Canvas::expand_with_groups`].
/// - **Additive**: with a modifier held, a click toggles the clicked group and
///   a marquee unions with the existing selection.
///
/// The selection is never persisted.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected: Vec<ObjectId>,
    marquee: Option<Marquee>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use floorkit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert!(manager.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected ids in selection order.
    pub fn selected_ids(&self) -> &[ObjectId] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Replaces the selection verbatim. Callers are expected to pass an
    /// already expanded set.
    pub fn set(&mut self, ids: Vec<ObjectId>) {
        self.selected = ids;
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drops ids that no longer name an object on the canvas.
    pub fn retain_existing(&mut self, canvas: &Canvas) {
        self.selected.retain(|id| canvas.object(id).is_some());
    }

    /// Click selection of a single object.
    ///
    /// Without `additive` the selection becomes the object's expanded group.
    /// With `additive` the expanded group is removed when it is already fully
    /// selected and added otherwise.
    ///
    /// # Arguments
    ///
    /// * `canvas` - The canvas used for group expansion
    /// * `id` - The clicked object
    /// * `additive` - Whether Shift, Ctrl or Cmd was held
    pub fn select_object(&mut self, canvas: &Canvas, id: &str, additive: bool) {
        let related = canvas.expand_with_groups(&[id.to_string()]);
        if !additive {
            self.selected = related;
            return;
        }

        if related.iter().all(|r| self.contains(r)) {
            self.selected.retain(|s| !related.contains(s));
        } else {
            for r in related {
                if !self.contains(&r) {
                    self.selected.push(r);
                }
            }
        }
    }

    /// Selects every object whose bounds intersect `rect`, expanded with
    /// groups. Returns the number of selected objects.
    pub fn select_in_rect(&mut self, canvas: &Canvas, rect: &Bounds, additive: bool) -> usize {
        let hits = canvas.expand_with_groups(&canvas.objects_in_rect(rect));
        if additive {
            for id in hits {
                if !self.contains(&id) {
                    self.selected.push(id);
                }
            }
        } else {
            self.selected = hits;
        }
        self.selected.len()
    }

    pub fn marquee(&self) -> Option<&Marquee> {
        self.marquee.as_ref()
    }

    pub fn begin_marquee(&mut self, point: Point, additive: bool) {
        self.marquee = Some(Marquee {
            start: point,
            current: point,
            additive,
        });
    }

    /// Follows the pointer. Ignored when no marquee is active.
    pub fn update_marquee(&mut self, point: Point) {
        if let Some(marquee) = &mut self.marquee {
            marquee.current = point;
        }
    }

    /// Ends the marquee at `point` and applies it.
    ///
    /// A marquee narrower than `click_threshold` on both axes counts as a
    /// click on empty canvas: it clears the selection, or does nothing when
    /// additive.
    pub fn finish_marquee(&mut self, canvas: &Canvas, point: Point, click_threshold: f64) {
        let Some(mut marquee) = self.marquee.take() else {
            return;
        };
        marquee.current = point;
        let rect = marquee.rect();
        if rect.width() < click_threshold && rect.height() < click_threshold {
            if !marquee.additive {
                self.selected.clear();
            }
            return;
        }
        let count = self.select_in_rect(canvas, &rect, marquee.additive);
        tracing::trace!(count, additive = marquee.additive, "marquee selection");
    }

    pub fn cancel_marquee(&mut self) {
        self.marquee = None;
    }
}
