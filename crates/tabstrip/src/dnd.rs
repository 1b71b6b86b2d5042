//! Dragging tabs between panes.
//!
//! Panes that share one [`DragAndDropContext`] can exchange tabs. The drag
//! source records the tab, its own id and the header width; the drop target
//! records where the tab would land while the pointer moves and performs the
//! transfer on drop.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::tab::TabId;

/// Marker identifying a dragged-tab payload on the host's clipboard.
pub const TAB_DRAG_FORMAT: &str = "application/x-tabstrip-tab";

static NEXT_PANE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one [`TabPane`](crate::TabPane) instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaneId(u64);

impl PaneId {
    pub(crate) fn next() -> Self {
        Self(NEXT_PANE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// What the drag source hands to the host's drag-and-drop system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabDragPayload {
    pub format: &'static str,
    pub tab: TabId,
    pub source: PaneId,
    /// Width of the dragged header; hosts use it to size the drag image.
    pub width: f32,
}

#[derive(Debug, Default)]
struct DndState {
    tab: Option<TabId>,
    source: Option<PaneId>,
    source_width: f32,
    drop_index: Option<usize>,
}

/// State shared by every pane taking part in tab drag-and-drop.
///
/// Cloning shares the state.
#[derive(Debug, Clone, Default)]
pub struct DragAndDropContext {
    state: Rc<RefCell<DndState>>,
}

impl DragAndDropContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn begin(&self, tab: TabId, source: PaneId, width: f32) {
        let mut state = self.state.borrow_mut();
        state.tab = Some(tab);
        state.source = Some(source);
        state.source_width = width;
        state.drop_index = None;
    }

    pub fn dragged_tab(&self) -> Option<TabId> {
        self.state.borrow().tab
    }

    pub fn source(&self) -> Option<PaneId> {
        self.state.borrow().source
    }

    pub fn source_width(&self) -> f32 {
        self.state.borrow().source_width
    }

    pub fn drop_index(&self) -> Option<usize> {
        self.state.borrow().drop_index
    }

    pub(crate) fn set_drop_index(&self, index: Option<usize>) {
        self.state.borrow_mut().drop_index = index;
    }

    pub fn is_active(&self) -> bool {
        self.state.borrow().tab.is_some()
    }

    /// Forget the current drag.
    pub fn clear(&self) {
        *self.state.borrow_mut() = DndState::default();
    }

    /// Whether two handles share the same state.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

/// Index a dropped tab lands at, given header centers in tab order.
///
/// `centers` are along the region's local x. With `from_end` the strip is
/// built from its far edge, so indices grow towards smaller x. When the tab
/// comes from the same list, `dragged` is its current index and the result
/// accounts for its removal.
pub fn compute_drop_index(
    centers: &[f32],
    cursor: f32,
    from_end: bool,
    dragged: Option<usize>,
) -> usize {
    let target = centers
        .iter()
        .position(|&center| {
            if from_end {
                center < cursor
            } else {
                center > cursor
            }
        })
        .unwrap_or(centers.len());
    match dragged {
        Some(dragged) if target > dragged => target - 1,
        _ => target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_index_from_start() {
        let centers = [50.0, 150.0, 250.0];
        assert_eq!(compute_drop_index(&centers, 10.0, false, None), 0);
        assert_eq!(compute_drop_index(&centers, 120.0, false, None), 1);
        assert_eq!(compute_drop_index(&centers, 260.0, false, None), 3);
    }

    #[test]
    fn test_drop_index_same_list() {
        let centers = [50.0, 150.0, 250.0];
        assert_eq!(compute_drop_index(&centers, 260.0, false, Some(0)), 2);
        assert_eq!(compute_drop_index(&centers, 10.0, false, Some(2)), 0);
    }

    #[test]
    fn test_drop_index_from_end() {
        let centers = [350.0, 250.0, 150.0];
        assert_eq!(compute_drop_index(&centers, 390.0, true, None), 0);
        assert_eq!(compute_drop_index(&centers, 200.0, true, None), 2);
        assert_eq!(compute_drop_index(&centers, 0.0, true, None), 3);
    }

    #[test]
    fn test_context_is_shared() {
        let context = DragAndDropContext::new();
        let other = context.clone();
        assert!(context.ptr_eq(&other));

        let pane = PaneId::next();
        context.begin(TabId::new("a"), pane, 80.0);
        other.set_drop_index(Some(2));
        assert_eq!(other.dragged_tab(), Some(TabId::new("a")));
        assert_eq!(context.drop_index(), Some(2));
        assert_eq!(context.source(), Some(pane));

        other.clear();
        assert!(!context.is_active());
        assert_eq!(context.source_width(), 0.0);
    }

    #[test]
    fn test_pane_ids_are_unique() {
        assert_ne!(PaneId::next(), PaneId::next());
    }
}
