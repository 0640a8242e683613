use floorkit_designer::config::InteractionConfig;
use floorkit_designer::geometry::{Axis, CanvasSize, Point};
use floorkit_designer::model::Wall;
use floorkit_designer::snapping::Snapper;
use floorkit_designer::wall_draft::WallDraft;

const UNIT: CanvasSize = CanvasSize::new(1.0, 1.0);

fn start_at(draft: &mut WallDraft, walls: &[Wall], p: Point) {
    draft.begin(p, &Snapper::new(walls, UNIT, 14.0));
}

#[test]
fn test_begin_enters_drafting() {
    let mut draft = WallDraft::default();
    assert!(!draft.is_drafting());
    start_at(&mut draft, &[], Point::new(3.0, 4.0));
    let seg = draft.segment().unwrap();
    assert_eq!(seg.start, Point::new(3.0, 4.0));
    assert_eq!(seg.end, seg.start);
    assert_eq!(seg.axis, None);
}

#[test]
fn test_begin_snaps_start() {
    let walls = vec![Wall::new(Point::new(100.0, 100.0), Point::new(200.0, 100.0))];
    let mut draft = WallDraft::default();
    start_at(&mut draft, &walls, Point::new(97.0, 103.0));
    assert_eq!(draft.segment().unwrap().start, Point::new(100.0, 100.0));
}

#[test]
fn test_axis_lock_threshold() {
    let config = InteractionConfig::default();
    let snapper = Snapper::new(&[], UNIT, 14.0);
    let mut draft = WallDraft::default();
    draft.begin(Point::new(0.0, 0.0), &snapper);

    draft.update(Point::new(5.0, 3.0), &snapper, &config);
    let seg = draft.segment().unwrap();
    assert_eq!(seg.axis, None);
    assert_eq!(seg.end, Point::new(5.0, 3.0));

    draft.update(Point::new(8.0, 2.0), &snapper, &config);
    let seg = draft.segment().unwrap();
    assert_eq!(seg.axis, Some(Axis::X));
    assert_eq!(seg.end, Point::new(8.0, 0.0));
}

#[test]
fn test_axis_stays_locked() {
    let config = InteractionConfig::default();
    let snapper = Snapper::new(&[], UNIT, 14.0);
    let mut draft = WallDraft::default();
    draft.begin(Point::new(0.0, 0.0), &snapper);
    draft.update(Point::new(20.0, 1.0), &snapper, &config);
    draft.update(Point::new(3.0, 90.0), &snapper, &config);

    let seg = draft.segment().unwrap();
    assert_eq!(seg.axis, Some(Axis::X));
    assert_eq!(seg.end, Point::new(3.0, 0.0));
}

#[test]
fn test_short_wall_is_discarded() {
    let config = InteractionConfig::default();
    let snapper = Snapper::new(&[], UNIT, 14.0);
    let mut draft = WallDraft::default();
    draft.begin(Point::new(0.0, 0.0), &snapper);

    assert!(draft.commit(Some(Point::new(0.0, 5.0)), &snapper, &config).is_none());
    assert!(!draft.is_drafting());
}

#[test]
fn test_long_enough_wall_commits() {
    let config = InteractionConfig::default();
    let snapper = Snapper::new(&[], UNIT, 14.0);
    let mut draft = WallDraft::default();
    draft.begin(Point::new(0.0, 0.0), &snapper);

    let seg = draft
        .commit(Some(Point::new(0.0, 12.0)), &snapper, &config)
        .unwrap();
    assert_eq!(seg.end, Point::new(0.0, 12.0));
    assert_eq!(seg.axis, Some(Axis::Y));
    assert!(!draft.is_drafting());
}

#[test]
fn test_commit_without_point_uses_current_end() {
    let config = InteractionConfig::default();
    let snapper = Snapper::new(&[], UNIT, 14.0);
    let mut draft = WallDraft::default();
    draft.begin(Point::new(0.0, 0.0), &snapper);
    draft.update(Point::new(30.0, 2.0), &snapper, &config);

    let seg = draft.commit(None, &snapper, &config).unwrap();
    assert_eq!(seg.end, Point::new(30.0, 0.0));
}

#[test]
fn test_commit_while_idle_is_none() {
    let config = InteractionConfig::default();
    let snapper = Snapper::new(&[], UNIT, 14.0);
    let mut draft = WallDraft::default();
    assert!(draft.commit(Some(Point::new(50.0, 0.0)), &snapper, &config).is_none());
}

#[test]
fn test_cancel_discards() {
    let snapper = Snapper::new(&[], UNIT, 14.0);
    let mut draft = WallDraft::default();
    draft.begin(Point::new(0.0, 0.0), &snapper);
    draft.cancel();
    assert_eq!(draft, WallDraft::Idle);
}

#[test]
fn test_locked_end_snaps_along_axis() {
    let config = InteractionConfig::default();
    let walls = vec![Wall::new(Point::new(100.0, -50.0), Point::new(100.0, 50.0))];
    let snapper = Snapper::new(&walls, UNIT, 14.0);
    let mut draft = WallDraft::default();
    draft.begin(Point::new(0.0, 0.0), &snapper);
    draft.update(Point::new(93.0, 4.0), &snapper, &config);

    let seg = draft.segment().unwrap();
    assert_eq!(seg.axis, Some(Axis::X));
    assert_eq!(seg.end, Point::new(100.0, 0.0));
}
