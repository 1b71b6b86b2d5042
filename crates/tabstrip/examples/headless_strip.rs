//! Headless Tab Strip Demo
//!
//! This example drives a tab pane without any window:
//! - Opening tabs with the grow animation
//! - Overflow and scrolling the selection into view
//! - Reordering a header by dragging it
//! - Closing a tab and letting the shrink animation finish
//!
//! Run with `RUST_LOG=tabstrip=debug` to see the engine's own logging.

use tabstrip::event::{PointerEvent, WheelEvent};
use tabstrip::{Tab, TabDragPolicy, TabPane, TabPaneConfig};
use tabstrip_core::geometry::Rect;
use tabstrip_core::logging;
use tabstrip_core::math::vec2;
use tabstrip_core::profiling::{ProfilingBackend, init_profiling, new_frame};

const FRAME: f32 = 1.0 / 60.0;

fn run_frames(pane: &mut TabPane, count: usize) {
    for _ in 0..count {
        new_frame();
        pane.tick(FRAME);
    }
}

fn dump(pane: &TabPane, label: &str) {
    tracing::info!(
        "[{}] offset {:.1}, overflowed {}, selected {:?}",
        label,
        pane.offset(),
        pane.is_overflowed(),
        pane.selected()
    );
    for header in pane.header_area().headers().iter() {
        if header.is_placeholder() {
            continue;
        }
        let bounds = header.bounds();
        tracing::info!(
            "  {:<10} x {:>7.1} w {:>6.1}{}{}",
            header.tab().label,
            bounds.x,
            bounds.width,
            if header.is_selected() { " *" } else { "" },
            if header.is_closing() { " (closing)" } else { "" },
        );
    }
}

fn main() {
    logging::init();
    init_profiling(ProfilingBackend::PuffinHttp);

    let mut pane = TabPane::with_config(TabPaneConfig::new().drag_policy(TabDragPolicy::Reorder));
    pane.layout(Rect::new(0.0, 0.0, 480.0, 320.0));

    let _tabs = pane.on_tabs_changed(|change| tracing::info!("Tab list changed: {:?}", change));
    let _offset = pane.on_offset_changed(|change| {
        tracing::info!("Offset {:.1} -> {:.1}", change.old, change.new);
    });

    for name in [
        "main.rs", "lib.rs", "pane.rs", "layout.rs", "scroll.rs", "reorder.rs", "menu.rs",
    ] {
        if let Err(err) = pane.add_tab(Tab::new(name, name)) {
            tracing::error!("Failed to add {}: {}", name, err);
        }
    }
    run_frames(&mut pane, 30);
    dump(&pane, "opened");

    if let Err(err) = pane.select("menu.rs".into()) {
        tracing::error!("Failed to select: {}", err);
    }
    dump(&pane, "selected last");

    pane.wheel(WheelEvent::new(0.0, 120.0));
    dump(&pane, "wheel");

    pane.select_index(0);
    let first = pane.header_area().headers().get(0).map(|header| header.bounds());
    if let Some(first) = first {
        let start = vec2(first.x + 5.0, first.y + 5.0);
        pane.pointer_pressed(PointerEvent::left(start.x, start.y));
        for step in 1..=20 {
            pane.pointer_dragged(vec2(start.x + step as f32 * 8.0, start.y));
        }
        pane.pointer_released(PointerEvent::left(start.x + 160.0, start.y));
        run_frames(&mut pane, 15);
        dump(&pane, "dragged");
    }

    match pane.close_tab("lib.rs".into()) {
        Ok(closed) => tracing::info!("Closed lib.rs: {}", closed),
        Err(err) => tracing::error!("Failed to close: {}", err),
    }
    dump(&pane, "closing");
    run_frames(&mut pane, 15);
    dump(&pane, "closed");

    for event in pane.pop_events() {
        tracing::info!("Pane event: {:?}", event);
    }
}
