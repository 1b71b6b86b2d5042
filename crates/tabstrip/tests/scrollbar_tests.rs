//! Scrollbar mirroring, echo suppression and auto-hide.

use tabstrip::event::{PointerEvent, WheelEvent};
use tabstrip::{HeaderDirty, TabPane};
use tabstrip_core::geometry::Rect;
use tabstrip_core::math::vec2;
use tabstrip_test_utils::PaneFixture;

/// Four 100 px tabs in a 100 px strip, with the pointer over the headers.
fn hovered_pane() -> TabPane {
    let mut pane = PaneFixture::new(4).width(100.0).scrollbar().build();
    pane.pointer_moved(vec2(50.0, 10.0));
    pane
}

#[test]
fn test_bar_hidden_until_hovered() {
    let mut pane = PaneFixture::new(4).width(100.0).scrollbar().build();
    assert!(!pane.header_area().scrollbar().unwrap().is_visible());

    pane.pointer_moved(vec2(50.0, 10.0));
    assert!(pane.header_area().is_hovered());
    let bar = pane.header_area().scrollbar().unwrap();
    assert!(bar.is_visible());
    assert!(bar.is_fading());
    assert!(pane.take_dirty().contains(HeaderDirty::SCROLLBAR));
}

#[test]
fn test_value_mirrors_offset() {
    let mut pane = PaneFixture::new(4).width(100.0).scrollbar().build();
    pane.scroll_by(-200.0);
    pane.pointer_moved(vec2(50.0, 10.0));

    let bar = pane.header_area().scrollbar().unwrap();
    assert_eq!(bar.max(), 300.0);
    assert_eq!(bar.value(), 200.0);
    assert_eq!(bar.visible_amount(), 75.0);

    pane.set_scrollbar_value(50.0);
    assert_eq!(pane.offset(), -50.0);
    assert_eq!(pane.header_area().scrollbar().unwrap().value(), 50.0);
}

#[test]
fn test_offset_changes_do_not_echo() {
    let mut pane = hovered_pane();
    pane.scroll_by(-200.0);
    pane.wheel(WheelEvent::new(0.0, -30.0));
    assert_eq!(pane.offset(), -230.0);
    assert_eq!(pane.header_area().scrollbar().unwrap().value(), 230.0);
}

#[test]
fn test_unit_steps() {
    let mut pane = hovered_pane();
    pane.scrollbar_increment();
    assert_eq!(pane.offset(), -10.0);
    pane.scrollbar_decrement();
    pane.scrollbar_decrement();
    assert_eq!(pane.offset(), 0.0);
}

#[test]
fn test_bar_fades_out_after_exit() {
    let mut pane = hovered_pane();
    pane.tick(1.0);
    pane.pointer_exited();
    let bar = pane.header_area().scrollbar().unwrap();
    assert!(bar.is_visible());
    assert!(bar.is_fading());

    pane.tick(0.35);
    assert!(!pane.header_area().scrollbar().unwrap().is_visible());
}

#[test]
fn test_fitting_headers_hide_bar_at_once() {
    let mut pane = hovered_pane();
    pane.layout(Rect::new(0.0, 0.0, 1000.0, 300.0));
    let bar = pane.header_area().scrollbar().unwrap();
    assert!(!bar.is_visible());
    assert!(!bar.is_fading());
}

#[test]
fn test_thumb_drag_keeps_bar_until_release() {
    let mut pane = hovered_pane();
    pane.tick(1.0);

    let rect = pane.header_area().layout().scrollbar.unwrap();
    assert_eq!(rect, Rect::new(0.0, 12.0, 100.0, 8.0));
    let track = Rect::new(0.0, 0.0, rect.width, rect.height);
    let thumb = pane.header_area().scrollbar().unwrap().thumb_bounds(&track);
    let grab = vec2(thumb.x + thumb.width / 2.0, rect.y + rect.height / 2.0);

    assert!(pane.pointer_pressed(PointerEvent::left(grab.x, grab.y)));
    assert!(pane.header_area().scrollbar().unwrap().is_thumb_dragging());

    pane.pointer_dragged(vec2(grab.x + 10.0, grab.y));
    assert!(pane.offset() < 0.0);

    pane.pointer_exited();
    assert!(!pane.header_area().scrollbar().unwrap().is_fading());

    pane.pointer_released(PointerEvent::left(grab.x + 10.0, grab.y));
    let bar = pane.header_area().scrollbar().unwrap();
    assert!(!bar.is_thumb_dragging());
    assert!(bar.is_fading());
}

#[test]
fn test_disabled_bar_is_absent() {
    let mut pane = hovered_pane();
    pane.set_scrollbar_enabled(false);
    assert!(pane.header_area().scrollbar().is_none());
    assert!(pane.header_area().layout().scrollbar.is_none());
}
