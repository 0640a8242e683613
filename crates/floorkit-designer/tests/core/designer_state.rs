use floorkit_designer::canvas::{DrawingMode, NodeTransform};
use floorkit_designer::commands::{DesignerCommand, Modifiers};
use floorkit_designer::geometry::Point;
use floorkit_designer::model::{BedStatus, ObjectId, ShapeKind};
use floorkit_designer::{DesignerState, PendingGesture};

const CTRL: Modifiers = Modifiers {
    shift: false,
    ctrl: true,
    meta: false,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Inserts an object without recording history.
fn place(state: &mut DesignerState, shape: ShapeKind, x: f64, y: f64, w: f64, h: f64) -> ObjectId {
    let mut object = state.canvas.create_object(shape);
    object.set_bounds_px(x, y, w, h, state.canvas.size());
    let id = object.id.clone();
    state.canvas.insert_object(object);
    id
}

fn position(state: &DesignerState, id: &str) -> Point {
    state.canvas.object(id).unwrap().position_px(state.canvas.size())
}

#[test]
fn test_new_state_defaults() {
    let state = DesignerState::new();
    assert_eq!(state.mode(), DrawingMode::Select);
    assert!(state.selected_ids().is_empty());
    assert!(state.pending_gesture().is_none());
    assert!(!state.is_modified);
    assert_eq!(state.display_name(), "Untitled");
}

#[test]
fn test_add_object_marks_modified() {
    let mut state = DesignerState::new();
    state.add_object(ShapeKind::Stairs);
    assert!(state.is_modified);
    assert!(state.can_undo());
    assert_eq!(state.display_name(), "Untitled*");
}

#[test]
fn test_group_drag_moves_members_together() {
    let mut state = DesignerState::new();
    let a = place(&mut state, ShapeKind::Square, 100.0, 150.0, 100.0, 75.0);
    let b = place(&mut state, ShapeKind::Square, 600.0, 150.0, 100.0, 75.0);
    state.canvas.group_objects(&[a.clone(), b.clone()]).unwrap();

    assert!(state.begin_drag(&a));
    assert!(state.drag_to(&a, Point::new(250.0, 150.0)));

    match state.pending_gesture() {
        Some(PendingGesture::Drag(batch)) => {
            assert_eq!(batch.moving_ids().count(), 2);
            assert_eq!(batch.position_of(&b), Some(Point::new(750.0, 150.0)));
        }
        other => panic!("expected drag, got {other:?}"),
    }
    // Nothing is committed while the pointer is down.
    assert_eq!(position(&state, &a), Point::new(100.0, 150.0));

    assert_eq!(state.end_drag(), 2);
    assert_eq!(position(&state, &a), Point::new(250.0, 150.0));
    assert_eq!(position(&state, &b), Point::new(700.0, 150.0));
    assert!(state.pending_gesture().is_none());
}

#[test]
fn test_drag_moves_multi_selection() {
    let mut state = DesignerState::new();
    let a = place(&mut state, ShapeKind::Square, 100.0, 150.0, 100.0, 75.0);
    let b = place(&mut state, ShapeKind::Square, 300.0, 150.0, 100.0, 75.0);
    let c = place(&mut state, ShapeKind::Square, 500.0, 150.0, 100.0, 75.0);
    state.select_object(&a, false);
    state.select_object(&b, true);

    assert!(state.move_object(&b, Point::new(300.0, 300.0)));
    assert_eq!(position(&state, &a), Point::new(100.0, 300.0));
    assert_eq!(position(&state, &b), Point::new(300.0, 300.0));
    assert_eq!(position(&state, &c), Point::new(500.0, 150.0));
    assert_eq!(state.history.len(), 1);
}

#[test]
fn test_drag_outside_selection_moves_only_target() {
    let mut state = DesignerState::new();
    let a = place(&mut state, ShapeKind::Square, 100.0, 150.0, 100.0, 75.0);
    let b = place(&mut state, ShapeKind::Square, 300.0, 150.0, 100.0, 75.0);
    let c = place(&mut state, ShapeKind::Square, 500.0, 150.0, 100.0, 75.0);
    state.select_object(&a, false);
    state.select_object(&b, true);

    assert_eq!(state.moving_ids_for(&c), vec![c.clone()]);
    state.move_object(&c, Point::new(500.0, 300.0));
    assert_eq!(position(&state, &a), Point::new(100.0, 150.0));
    assert_eq!(state.selected_ids(), [a, b]);
}

#[test]
fn test_pointer_press_release_is_click() {
    let mut state = DesignerState::new();
    let a = place(&mut state, ShapeKind::Square, 100.0, 150.0, 100.0, 75.0);

    state.pointer_down(Point::new(150.0, 200.0), Modifiers::NONE);
    state.pointer_up(Point::new(150.0, 200.0));

    assert_eq!(state.selected_ids(), [a.clone()]);
    assert_eq!(position(&state, &a), Point::new(100.0, 150.0));
    assert!(!state.can_undo());
}

#[test]
fn test_pointer_drag_commits_on_release() {
    let mut state = DesignerState::new();
    let a = place(&mut state, ShapeKind::Square, 100.0, 150.0, 100.0, 75.0);

    state.pointer_down(Point::new(150.0, 200.0), Modifiers::NONE);
    state.pointer_move(Point::new(250.0, 250.0));
    assert!(matches!(state.pending_gesture(), Some(PendingGesture::Drag(_))));
    assert_eq!(position(&state, &a), Point::new(100.0, 150.0));

    state.pointer_move(Point::new(350.0, 350.0));
    state.pointer_up(Point::new(350.0, 350.0));

    assert_eq!(position(&state, &a), Point::new(300.0, 300.0));
    assert!(state.selected_ids().is_empty());
    assert_eq!(state.history.len(), 1);
}

#[test]
fn test_pointer_on_empty_canvas_runs_marquee() {
    let mut state = DesignerState::new();
    let a = place(&mut state, ShapeKind::Square, 100.0, 150.0, 100.0, 75.0);
    let b = place(&mut state, ShapeKind::Square, 300.0, 150.0, 100.0, 75.0);
    let _c = place(&mut state, ShapeKind::Square, 600.0, 450.0, 100.0, 75.0);

    state.pointer_down(Point::new(50.0, 50.0), Modifiers::NONE);
    assert!(state.selection.marquee().is_some());
    state.pointer_move(Point::new(400.0, 300.0));
    state.pointer_up(Point::new(400.0, 300.0));

    assert_eq!(state.selected_ids(), [a, b]);
    assert!(state.selection.marquee().is_none());
}

#[test]
fn test_click_on_empty_canvas_clears_selection() {
    let mut state = DesignerState::new();
    let a = place(&mut state, ShapeKind::Square, 100.0, 150.0, 100.0, 75.0);
    state.select_object(&a, false);

    state.pointer_down(Point::new(500.0, 500.0), Modifiers::NONE);
    state.pointer_up(Point::new(501.0, 500.0));
    assert!(state.selected_ids().is_empty());

    state.select_object(&a, false);
    assert_eq!(state.select_at(Point::new(500.0, 500.0), true), None);
    assert_eq!(state.selected_ids(), [a]);
}

#[test]
fn test_draw_wall_mode_routes_to_draft() {
    let mut state = DesignerState::new();
    let a = place(&mut state, ShapeKind::Square, 100.0, 150.0, 100.0, 75.0);
    state.toggle_wall_mode();
    assert_eq!(state.mode(), DrawingMode::DrawWall);

    state.pointer_down(Point::new(150.0, 200.0), Modifiers::NONE);
    state.pointer_move(Point::new(350.0, 204.0));
    let segment = state.draft_segment().copied().unwrap();
    assert_eq!(segment.end, Point::new(350.0, 200.0));
    state.pointer_up(Point::new(350.0, 204.0));

    assert_eq!(state.canvas.wall_count(), 1);
    assert!(state.selected_ids().is_empty());
    assert_eq!(state.select_at(Point::new(150.0, 200.0), false), None);
    assert!(state.canvas.object(&a).is_some());
}

#[test]
fn test_new_wall_snaps_to_existing_endpoint() {
    let mut state = DesignerState::new();
    state.set_mode(DrawingMode::DrawWall);
    state.pointer_down(Point::new(100.0, 150.0), Modifiers::NONE);
    state.pointer_up(Point::new(300.0, 150.0));

    state.pointer_down(Point::new(305.0, 160.0), Modifiers::NONE);
    assert_eq!(state.draft_segment().unwrap().start, Point::new(300.0, 150.0));
    state.pointer_up(Point::new(300.0, 300.0));

    let (start, end) = state.canvas.walls()[1].endpoints_px(state.canvas.size());
    assert!(approx(start.x, 300.0) && approx(start.y, 150.0));
    assert!(approx(end.x, 300.0) && approx(end.y, 300.0));
}

#[test]
fn test_set_mode_cancels_draft() {
    let mut state = DesignerState::new();
    state.set_mode(DrawingMode::DrawWall);
    state.pointer_down(Point::new(100.0, 100.0), Modifiers::NONE);
    state.pointer_move(Point::new(300.0, 100.0));

    state.set_mode(DrawingMode::Select);
    assert!(state.draft_segment().is_none());
    assert_eq!(state.canvas.wall_count(), 0);
    assert!(!state.can_undo());
}

#[test]
fn test_copy_paste_cascades() {
    let mut state = DesignerState::new();
    let a = place(&mut state, ShapeKind::Circle, 100.0, 150.0, 100.0, 75.0);
    state.select_object(&a, false);

    assert_eq!(state.handle_shortcut("c", CTRL), Some(DesignerCommand::Copy));
    assert_eq!(state.handle_shortcut("v", CTRL), Some(DesignerCommand::Paste));
    let first = state.selected_ids()[0].clone();
    assert_ne!(first, a);
    let p = position(&state, &first);
    assert!(approx(p.x, 124.0) && approx(p.y, 174.0));

    state.handle_shortcut("v", CTRL);
    let second = state.selected_ids()[0].clone();
    let p = position(&state, &second);
    assert!(approx(p.x, 148.0) && approx(p.y, 198.0));
    assert_eq!(state.canvas.object_count(), 3);
}

#[test]
fn test_paste_keeps_pasted_groups_together() {
    let mut state = DesignerState::new();
    let a = place(&mut state, ShapeKind::Square, 100.0, 150.0, 100.0, 75.0);
    let b = place(&mut state, ShapeKind::Square, 300.0, 150.0, 100.0, 75.0);
    state.select_object(&a, false);
    state.select_object(&b, true);
    state.group_selected().unwrap();

    state.copy_selected();
    let pasted = state.paste();
    assert_eq!(pasted.len(), 2);

    state.select_object(&pasted[0], false);
    assert_eq!(state.selected_ids(), pasted.as_slice());
}

#[test]
fn test_shortcuts_need_selection() {
    let mut state = DesignerState::new();
    place(&mut state, ShapeKind::Circle, 100.0, 150.0, 100.0, 75.0);

    assert_eq!(state.handle_shortcut("c", CTRL), None);
    assert_eq!(state.handle_shortcut("Delete", Modifiers::NONE), None);
    assert_eq!(state.handle_shortcut("x", CTRL), None);
    assert_eq!(state.canvas.object_count(), 1);
}

#[test]
fn test_delete_and_undo_shortcuts() {
    let mut state = DesignerState::new();
    let a = place(&mut state, ShapeKind::Circle, 100.0, 150.0, 100.0, 75.0);
    state.select_object(&a, false);

    assert_eq!(
        state.handle_shortcut("Backspace", Modifiers::NONE),
        Some(DesignerCommand::Delete)
    );
    assert_eq!(state.canvas.object_count(), 0);
    assert!(state.selected_ids().is_empty());

    assert_eq!(state.handle_shortcut("Z", CTRL), Some(DesignerCommand::Undo));
    assert!(state.canvas.object(&a).is_some());
}

#[test]
fn test_group_and_ungroup_shortcuts() {
    let mut state = DesignerState::new();
    let a = place(&mut state, ShapeKind::Square, 100.0, 150.0, 100.0, 75.0);
    let b = place(&mut state, ShapeKind::Square, 300.0, 150.0, 100.0, 75.0);
    state.select_object(&a, false);
    assert!(!state.can_group());
    state.select_object(&b, true);
    assert!(state.can_group());

    state.handle_shortcut("g", CTRL);
    assert!(state.can_ungroup());
    let shift_ctrl = Modifiers { shift: true, ..CTRL };
    assert_eq!(
        state.handle_shortcut("g", shift_ctrl),
        Some(DesignerCommand::Ungroup)
    );
    assert!(!state.can_ungroup());
    assert_eq!(state.canvas.object(&a).unwrap().group_id, None);
}

#[test]
fn test_labels_route_by_shape() {
    let mut state = DesignerState::new();
    let room = state.add_object(ShapeKind::RoomLabel);
    state.select_object(&room, false);

    assert!(state.apply_label("  Kitchen "));
    assert_eq!(state.canvas.object(&room).unwrap().room_label, "Kitchen");
    assert!(state.apply_label(""));
    assert_eq!(state.canvas.object(&room).unwrap().room_label, "Room");

    state.selection.clear();
    assert!(!state.apply_label("ignored"));
}

#[test]
fn test_set_bed_status_skips_unchanged() {
    let mut state = DesignerState::new();
    let bed = state.add_object(ShapeKind::Bed);
    state.select_object(&bed, false);
    assert_eq!(state.history.len(), 1);

    assert!(!state.set_bed_status("available"));
    assert_eq!(state.history.len(), 1);

    assert!(state.set_bed_status("Reserved"));
    assert_eq!(state.canvas.object(&bed).unwrap().bed_status, Some(BedStatus::Occupied));
    assert_eq!(state.history.len(), 2);
}

#[test]
fn test_set_bed_status_treats_missing_status_as_vacant() {
    let mut state = DesignerState::new();
    let bed = place(&mut state, ShapeKind::Bed, 100.0, 100.0, 60.0, 80.0);
    state.canvas.object_mut(&bed).unwrap().bed_status = None;
    state.select_object(&bed, false);

    assert!(!state.set_bed_status("Vacant"));
    assert!(!state.set_bed_status("available"));
    assert!(!state.can_undo());

    assert!(state.set_bed_status("maintenance"));
    assert_eq!(state.canvas.object(&bed).unwrap().bed_status, Some(BedStatus::Maintenance));
    assert_eq!(state.history.len(), 1);
}

#[test]
fn test_set_bed_status_ignores_non_beds() {
    let mut state = DesignerState::new();
    let table = state.add_object(ShapeKind::Rectangle);
    state.select_object(&table, false);
    assert!(!state.set_bed_status("Occupied"));
    assert_eq!(state.canvas.object(&table).unwrap().bed_status, None);
}

#[test]
fn test_transform_refuses_nodes_below_floor() {
    let mut state = DesignerState::new();
    let a = place(&mut state, ShapeKind::Rectangle, 100.0, 150.0, 200.0, 150.0);
    state.select_object(&a, false);
    assert!(state.begin_transform());

    let base = NodeTransform::of(state.canvas.object(&a).unwrap(), state.canvas.size());
    let tiny = NodeTransform {
        scale_x: 0.1,
        ..base
    };
    assert!(!state.update_transform_node(&a, tiny));
    let wide = NodeTransform {
        scale_x: 1.5,
        ..base
    };
    assert!(state.update_transform_node(&a, wide));

    assert_eq!(state.end_transform(), 1);
    let (w, h) = state.canvas.object(&a).unwrap().size_px(state.canvas.size());
    assert!(approx(w, 300.0));
    assert!(approx(h, 150.0));
    assert_eq!(state.history.len(), 1);
}

#[test]
fn test_scale_selection_is_all_or_nothing() {
    let mut state = DesignerState::new();
    let big = place(&mut state, ShapeKind::Rectangle, 100.0, 150.0, 200.0, 150.0);
    let small = place(&mut state, ShapeKind::Rectangle, 400.0, 150.0, 100.0, 75.0);
    state.select_object(&big, false);
    state.select_object(&small, true);
    assert!(state.begin_transform());

    assert!(!state.scale_selection(0.5, 0.5));
    assert!(state.scale_selection(0.5, 1.0));
    state.end_transform();

    let (w, _) = state.canvas.object(&small).unwrap().size_px(state.canvas.size());
    assert!(approx(w, 50.0));
    let p = position(&state, &small);
    assert!(approx(p.x, 250.0) && approx(p.y, 150.0));
}

#[test]
fn test_rotate_selection_commits() {
    let mut state = DesignerState::new();
    let a = place(&mut state, ShapeKind::Bed, 100.0, 150.0, 200.0, 150.0);
    state.select_object(&a, false);
    state.begin_transform();
    state.rotate_selection(30.0);
    state.pointer_up(Point::new(0.0, 0.0));

    assert_eq!(state.canvas.object(&a).unwrap().rotation, 30.0);
    assert!(state.pending_gesture().is_none());
}

#[test]
fn test_resize_below_floor_is_rejected() {
    let mut state = DesignerState::new();
    let a = place(&mut state, ShapeKind::Square, 100.0, 150.0, 100.0, 75.0);

    assert!(!state.resize_object(&a, 30.0, 30.0));
    assert!(!state.can_undo());

    assert!(state.resize_object(&a, 200.0, 150.0));
    let (w, h) = state.canvas.object(&a).unwrap().size_px(state.canvas.size());
    assert!(approx(w, 200.0) && approx(h, 200.0));
}

#[test]
fn test_invalid_canvas_size_is_ignored() {
    let mut state = DesignerState::new();
    state.set_canvas_size(floorkit_designer::CanvasSize::new(0.0, 300.0));
    assert_eq!(state.canvas.size(), floorkit_designer::CanvasSize::new(800.0, 600.0));
}
