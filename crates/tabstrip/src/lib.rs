//! Tabstrip - a headless tab-strip header engine.
//!
//! The engine lays out a row of tab headers along one edge of a pane, keeps
//! the selected header scrolled into view when they overflow, mirrors the
//! scroll offset into an auto-hiding scrollbar, animates tabs opening and
//! closing, and lets the user reorder tabs by dragging their headers or move
//! them between panes. Drawing is left to the host: it feeds pointer input,
//! frame ticks and pane bounds, and reads back geometry, dirty flags and
//! events.
//!
//! # Quick start
//!
//! ```
//! use tabstrip::{Tab, TabPane, TabPaneConfig, TabDragPolicy};
//! use tabstrip::event::PointerEvent;
//! use tabstrip_core::geometry::Rect;
//!
//! let mut pane = TabPane::with_config(
//!     TabPaneConfig::new().drag_policy(TabDragPolicy::Reorder),
//! );
//! for name in ["one", "two", "three"] {
//!     pane.add_tab(Tab::new(name, name)).unwrap();
//! }
//! pane.layout(Rect::new(0.0, 0.0, 640.0, 480.0));
//! // Let the open animations run out.
//! pane.tick(1.0);
//!
//! let header = pane.header_area().headers().get(1).unwrap().bounds();
//! pane.pointer_pressed(PointerEvent::left(header.x + 4.0, header.y + 4.0));
//! assert_eq!(pane.selected(), Some("two".into()));
//! ```
//!
//! # Features
//!
//! - `profiling`: puffin scopes in the layout and drag paths.

pub mod animation;
pub mod config;
pub mod dirty;
pub mod dnd;
pub mod error;
pub mod event;
pub mod header;
pub mod header_area;
pub mod layout;
pub mod measure;
pub mod menu;
pub mod pane;
pub mod reorder;
pub mod scroll;
pub mod scrollbar;
pub mod tab;
mod transitions;

pub use config::{
    HeaderAreaPolicy, ScrollBarPlacement, Side, TabAnimation, TabClosingPolicy, TabDragPolicy,
    TabPaneConfig,
};
pub use dirty::HeaderDirty;
pub use dnd::{DragAndDropContext, PaneId, TAB_DRAG_FORMAT, TabDragPayload};
pub use error::{TabError, TabResult};
pub use header::{HeaderCollection, TabHeaderItem};
pub use header_area::TabHeaderArea;
pub use layout::AuxArea;
pub use measure::{EstimatedMeasure, HeaderMeasure};
pub use pane::{TabListChange, TabPane, TabPaneEvent};
pub use tab::{Tab, TabId};
