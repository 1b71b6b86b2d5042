//! Moving tabs between panes through a shared drag context.

use tabstrip::{DragAndDropContext, TAB_DRAG_FORMAT, Tab, TabError, TabId, TabPane};
use tabstrip_core::math::vec2;
use tabstrip_test_utils::PaneFixture;

fn target() -> TabPane {
    let mut pane = PaneFixture::new(0).build();
    pane.add_tab(Tab::new("b0", "b0")).unwrap();
    pane.add_tab(Tab::new("b1", "b1")).unwrap();
    pane
}

#[test]
fn test_drop_moves_tab_between_panes() {
    let context = DragAndDropContext::new();
    let mut source = PaneFixture::new(3).build();
    let mut target = target();

    let payload = source.begin_tab_drag(&context, TabId::new("t1")).unwrap();
    assert_eq!(payload.format, TAB_DRAG_FORMAT);
    assert_eq!(payload.width, 100.0);
    assert_eq!(context.source(), Some(source.id()));

    assert_eq!(target.drag_over(&context, vec2(120.0, 10.0)), Ok(1));
    assert_eq!(target.accept_drop(&context, &mut source), Ok(1));

    let ids: Vec<TabId> = target.tabs().iter().map(|tab| tab.id).collect();
    assert_eq!(ids, vec![TabId::new("b0"), TabId::new("t1"), TabId::new("b1")]);
    assert_eq!(target.selected(), Some(TabId::new("t1")));
    assert!(!source.contains(TabId::new("t1")));
    assert!(!context.is_active());
}

#[test]
fn test_drop_without_drag_is_rejected() {
    let context = DragAndDropContext::new();
    let mut source = PaneFixture::new(1).build();
    let mut target = target();
    assert_eq!(
        target.accept_drop(&context, &mut source),
        Err(TabError::EmptyDragContext)
    );
    assert_eq!(
        target.drag_over(&context, vec2(0.0, 0.0)),
        Err(TabError::EmptyDragContext)
    );
}

#[test]
fn test_drop_from_wrong_pane_changes_nothing() {
    let context = DragAndDropContext::new();
    let source = PaneFixture::new(2).build();
    let mut other = PaneFixture::new(2).build();
    let mut target = target();

    source.begin_tab_drag(&context, TabId::new("t0")).unwrap();
    assert_eq!(
        target.accept_drop(&context, &mut other),
        Err(TabError::NotDragSource)
    );
    assert_eq!(target.len(), 2);
    assert_eq!(other.len(), 2);
    assert!(context.is_active());
}

#[test]
fn test_drop_after_source_lost_tab() {
    let context = DragAndDropContext::new();
    let mut source = PaneFixture::new(2).build();
    let mut target = target();

    source.begin_tab_drag(&context, TabId::new("t0")).unwrap();
    source.remove_tab(TabId::new("t0")).unwrap();
    assert_eq!(
        target.accept_drop(&context, &mut source),
        Err(TabError::TabNotOwned(TabId::new("t0")))
    );
}

#[test]
fn test_drop_within_same_pane() {
    let context = DragAndDropContext::new();
    let mut pane = PaneFixture::new(4).build();

    pane.begin_tab_drag(&context, TabId::new("t0")).unwrap();
    assert_eq!(pane.drag_over(&context, vec2(260.0, 10.0)), Ok(2));
    assert_eq!(pane.accept_drop_within(&context), Ok(2));

    let ids: Vec<TabId> = pane.tabs().iter().map(|tab| tab.id).collect();
    assert_eq!(
        ids,
        vec![TabId::new("t1"), TabId::new("t2"), TabId::new("t0"), TabId::new("t3")]
    );
}

#[test]
fn test_unknown_tab_cannot_be_dragged() {
    let context = DragAndDropContext::new();
    let pane = PaneFixture::new(1).build();
    assert_eq!(
        pane.begin_tab_drag(&context, TabId::new("nope")),
        Err(TabError::UnknownTab(TabId::new("nope")))
    );
    assert!(!context.is_active());
}
