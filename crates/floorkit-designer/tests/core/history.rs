use floorkit_designer::canvas::CanvasSnapshot;
use floorkit_designer::geometry::Point;
use floorkit_designer::history::History;
use floorkit_designer::model::{ShapeKind, Wall};
use floorkit_designer::{DesignerState, DrawingMode, Modifiers};

#[test]
fn test_history_is_lifo() {
    let mut history = History::new();
    assert!(!history.can_undo());

    let first = CanvasSnapshot::default();
    let second = CanvasSnapshot {
        objects: Vec::new(),
        walls: vec![Wall::new(Point::new(0.0, 0.0), Point::new(0.5, 0.0))],
    };
    history.push(first.clone());
    history.push(second.clone());

    assert_eq!(history.len(), 2);
    assert_eq!(history.peek(), Some(&second));
    assert_eq!(history.pop(), Some(second));
    assert_eq!(history.pop(), Some(first));
    assert!(history.pop().is_none());
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut state = DesignerState::new();
    assert!(!state.can_undo());
    assert!(!state.undo());
    assert_eq!(state.canvas.object_count(), 0);
}

#[test]
fn test_undo_reverts_every_operation() {
    let mut state = DesignerState::new();
    let table = state.add_object(ShapeKind::Rectangle);
    let bed = state.add_object(ShapeKind::Bed);
    state.move_object(&table, Point::new(100.0, 150.0));
    state.set_object_label(&bed, "B-12");
    state.select_object(&table, false);
    state.select_object(&bed, true);
    state.group_selected();
    state.rotate_object(&bed, 90.0);
    state.begin_wall(Point::new(0.0, 0.0));
    state.commit_wall(Some(Point::new(200.0, 0.0)));

    let mut steps = 0;
    while state.undo() {
        steps += 1;
    }
    assert_eq!(steps, 7);
    assert_eq!(state.canvas.object_count(), 0);
    assert_eq!(state.canvas.wall_count(), 0);
}

#[test]
fn test_undo_restores_previous_geometry() {
    let mut state = DesignerState::new();
    let id = state.add_object(ShapeKind::Square);
    let before = state.canvas.object(&id).cloned().unwrap();

    state.move_object(&id, Point::new(0.0, 0.0));
    state.rotate_object(&id, 45.0);
    state.undo();
    state.undo();

    assert_eq!(state.canvas.object(&id), Some(&before));
}

#[test]
fn test_undo_clears_selection_and_draft() {
    let mut state = DesignerState::new();
    let id = state.add_object(ShapeKind::Circle);
    state.select_object(&id, false);
    state.set_mode(DrawingMode::DrawWall);
    state.pointer_down(Point::new(10.0, 10.0), Modifiers::NONE);
    assert!(state.draft_segment().is_some());

    assert!(state.undo());
    assert!(state.selected_ids().is_empty());
    assert!(state.draft_segment().is_none());
    assert_eq!(state.canvas.object_count(), 0);
}

#[test]
fn test_discarded_wall_adds_no_history() {
    let mut state = DesignerState::new();
    state.begin_wall(Point::new(100.0, 100.0));
    assert!(state.commit_wall(Some(Point::new(103.0, 104.0))).is_none());
    assert!(!state.can_undo());
}
