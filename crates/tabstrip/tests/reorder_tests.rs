//! Drag-reorder gestures driven through pane pointer input.

use std::cell::RefCell;
use std::rc::Rc;

use tabstrip::event::PointerEvent;
use tabstrip::reorder::{DragPhase, ReorderAnimPhase};
use tabstrip::{Side, TabId, TabListChange, TabPane};
use tabstrip_core::math::vec2;
use tabstrip_test_utils::{PaneFixture, tab_ids};

fn reorderable(side: Side) -> TabPane {
    PaneFixture::new(4).width(500.0).side(side).reorderable().build()
}

fn sliding(pane: &TabPane) -> Option<TabId> {
    pane.header_area()
        .drag_session()
        .and_then(|session| session.sliding_header())
}

#[test]
fn test_press_starts_session_without_reordering() {
    let mut pane = reorderable(Side::Top);
    assert!(pane.pointer_pressed(PointerEvent::left(150.0, 10.0)));
    assert_eq!(pane.selected(), Some(TabId::new("t1")));

    let session = pane.header_area().drag_session().unwrap();
    assert_eq!(session.dragged(), TabId::new("t1"));
    assert_eq!(session.phase(), DragPhase::Start);

    pane.pointer_released(PointerEvent::left(150.0, 10.0));
    assert!(pane.header_area().drag_session().is_none());
    assert!(!pane.header_area().headers().find(TabId::new("t1")).unwrap().is_raised());
}

#[test]
fn test_crossing_threshold_towards_end() {
    let mut pane = reorderable(Side::Top);
    pane.pointer_pressed(PointerEvent::left(50.0, 10.0));

    pane.pointer_dragged(vec2(125.0, 10.0));
    assert_eq!(pane.header_area().drag_session().unwrap().phase(), DragPhase::Reorder);
    assert_eq!(sliding(&pane), None);

    pane.pointer_dragged(vec2(125.5, 10.0));
    assert_eq!(sliding(&pane), Some(TabId::new("t1")));
    assert_eq!(
        pane.header_area().drag_session().unwrap().anim_phase(),
        ReorderAnimPhase::Sliding
    );
}

#[test]
fn test_crossing_threshold_towards_start() {
    let mut pane = reorderable(Side::Top);
    pane.pointer_pressed(PointerEvent::left(350.0, 10.0));

    pane.pointer_dragged(vec2(275.0, 10.0));
    assert_eq!(sliding(&pane), None);

    pane.pointer_dragged(vec2(274.5, 10.0));
    assert_eq!(sliding(&pane), Some(TabId::new("t2")));
}

#[test]
fn test_dragged_header_stays_inside_region() {
    let mut pane = reorderable(Side::Top);
    pane.pointer_pressed(PointerEvent::left(50.0, 10.0));
    pane.pointer_dragged(vec2(20.0, 10.0));

    let header = pane.header_area().headers().find(TabId::new("t0")).unwrap();
    assert_eq!(header.layout_x(), 0.0);
    assert_eq!(pane.header_area().drag_session().unwrap().phase(), DragPhase::Start);
}

#[test]
fn test_release_commits_with_one_move() {
    let mut pane = reorderable(Side::Top);
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    let _subscription = pane.on_tabs_changed(move |change| sink.borrow_mut().push(change.clone()));

    pane.pointer_pressed(PointerEvent::left(50.0, 10.0));
    pane.pointer_dragged(vec2(130.0, 10.0));
    pane.pointer_released(PointerEvent::left(130.0, 10.0));
    assert_eq!(
        pane.header_area().drag_session().unwrap().anim_phase(),
        ReorderAnimPhase::Settling
    );
    assert!(pane.is_animating());

    pane.tick(1.0);
    assert!(pane.header_area().drag_session().is_none());
    let order: Vec<TabId> = pane.tabs().iter().map(|tab| tab.id).collect();
    let ids = tab_ids(4);
    assert_eq!(order, vec![ids[1], ids[0], ids[2], ids[3]]);
    assert_eq!(
        *changes.borrow(),
        vec![TabListChange::Moved {
            tab: ids[0],
            from: 0,
            to: 1
        }]
    );

    let headers: Vec<TabId> = pane.header_area().headers().iter().map(|h| h.id()).collect();
    assert_eq!(headers, order);
    let header = pane.header_area().headers().find(ids[0]).unwrap();
    assert_eq!(header.layout_x(), 100.0);
    assert!(!header.is_raised());
}

#[test]
fn test_fast_drag_crosses_several_neighbors() {
    let mut pane = reorderable(Side::Top);
    pane.pointer_pressed(PointerEvent::left(50.0, 10.0));
    pane.pointer_dragged(vec2(310.0, 10.0));
    pane.pointer_released(PointerEvent::left(310.0, 10.0));
    pane.tick(1.0);

    let ids = tab_ids(4);
    let order: Vec<TabId> = pane.tabs().iter().map(|tab| tab.id).collect();
    assert_eq!(order, vec![ids[1], ids[2], ids[0], ids[3]]);
}

#[test]
fn test_release_without_crossing_resets() {
    let mut pane = reorderable(Side::Top);
    pane.pointer_pressed(PointerEvent::left(50.0, 10.0));
    pane.pointer_dragged(vec2(90.0, 10.0));
    pane.pointer_released(PointerEvent::left(90.0, 10.0));

    assert!(pane.header_area().drag_session().is_none());
    assert_eq!(pane.tabs()[0].id, TabId::new("t0"));
    let header = pane.header_area().headers().find(TabId::new("t0")).unwrap();
    assert_eq!(header.layout_x(), 0.0);
}

#[test]
fn test_cancel_restores_logical_order() {
    let mut pane = reorderable(Side::Top);
    pane.pointer_pressed(PointerEvent::left(50.0, 10.0));
    pane.pointer_dragged(vec2(130.0, 10.0));
    pane.pointer_dragged(vec2(240.0, 10.0));

    assert!(pane.cancel_drag());
    assert!(!pane.cancel_drag());
    let headers: Vec<TabId> = pane.header_area().headers().iter().map(|h| h.id()).collect();
    assert_eq!(headers, tab_ids(4));
    assert_eq!(pane.header_area().headers().get(0).unwrap().layout_x(), 0.0);
}

#[test]
fn test_bottom_strip_mirrors_drag() {
    let mut pane = reorderable(Side::Bottom);
    let first = pane.header_area().headers().find(TabId::new("t0")).unwrap().bounds();
    assert_eq!(first.x, 300.0);

    let region_x = pane.header_area().layout().region.x;
    assert_eq!(region_x, 100.0);

    pane.pointer_pressed(PointerEvent::left(region_x + 350.0, 10.0));
    pane.pointer_dragged(vec2(region_x + 270.0, 10.0));
    assert_eq!(sliding(&pane), Some(TabId::new("t1")));
    pane.pointer_released(PointerEvent::left(region_x + 270.0, 10.0));
    pane.tick(1.0);

    assert_eq!(pane.tabs()[1].id, TabId::new("t0"));
}

#[test]
fn test_fixed_policy_never_drags() {
    let mut pane = PaneFixture::new(4).width(500.0).build();
    pane.pointer_pressed(PointerEvent::left(150.0, 10.0));
    pane.pointer_dragged(vec2(400.0, 10.0));
    assert!(pane.header_area().drag_session().is_none());
    assert_eq!(pane.selected(), Some(TabId::new("t1")));
}

fn header_order(pane: &TabPane) -> Vec<TabId> {
    pane.header_area()
        .headers()
        .iter()
        .filter(|header| !header.is_closing())
        .map(|header| header.id())
        .collect()
}

fn tab_order(pane: &TabPane) -> Vec<TabId> {
    pane.tabs().iter().map(|tab| tab.id).collect()
}

/// Hold t1 past t2 so a slide is in flight.
fn mid_drag() -> TabPane {
    let mut pane = reorderable(Side::Top);
    pane.pointer_pressed(PointerEvent::left(150.0, 10.0));
    pane.pointer_dragged(vec2(240.0, 10.0));
    assert_eq!(sliding(&pane), Some(TabId::new("t2")));
    pane
}

fn release_and_settle(pane: &mut TabPane) {
    pane.pointer_dragged(vec2(260.0, 10.0));
    pane.pointer_released(PointerEvent::left(260.0, 10.0));
    pane.tick(1.0);
}

#[test]
fn test_insert_during_drag_keeps_headers_in_tab_order() {
    let mut pane = mid_drag();
    pane.insert_tab(0, tabstrip::Tab::new("t9", "t9")).unwrap();
    assert!(pane.header_area().drag_session().is_none());

    release_and_settle(&mut pane);
    let expected: Vec<TabId> = ["t9", "t0", "t1", "t2", "t3"].map(TabId::new).to_vec();
    assert_eq!(tab_order(&pane), expected);
    assert_eq!(header_order(&pane), expected);
}

#[test]
fn test_move_during_drag_keeps_headers_in_tab_order() {
    let mut pane = mid_drag();
    pane.move_tab(TabId::new("t3"), 0).unwrap();
    assert!(pane.header_area().drag_session().is_none());

    release_and_settle(&mut pane);
    let expected: Vec<TabId> = ["t3", "t0", "t1", "t2"].map(TabId::new).to_vec();
    assert_eq!(tab_order(&pane), expected);
    assert_eq!(header_order(&pane), expected);
}

#[test]
fn test_removing_other_tab_during_drag_keeps_headers_in_tab_order() {
    let mut pane = mid_drag();
    pane.remove_tab(TabId::new("t3")).unwrap();
    assert!(pane.header_area().drag_session().is_none());

    release_and_settle(&mut pane);
    let expected: Vec<TabId> = ["t0", "t1", "t2"].map(TabId::new).to_vec();
    assert_eq!(tab_order(&pane), expected);
    assert_eq!(header_order(&pane), expected);
}

#[test]
fn test_insert_while_settling_commits_first() {
    let mut pane = reorderable(Side::Top);
    pane.pointer_pressed(PointerEvent::left(50.0, 10.0));
    pane.pointer_dragged(vec2(140.0, 10.0));
    pane.pointer_released(PointerEvent::left(140.0, 10.0));
    assert!(pane.header_area().drag_session().is_some());

    pane.insert_tab(0, tabstrip::Tab::new("t9", "t9")).unwrap();
    assert!(pane.header_area().drag_session().is_none());
    let expected: Vec<TabId> = ["t9", "t1", "t0", "t2", "t3"].map(TabId::new).to_vec();
    assert_eq!(tab_order(&pane), expected);
    assert_eq!(header_order(&pane), expected);
}
