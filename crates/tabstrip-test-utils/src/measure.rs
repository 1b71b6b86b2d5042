//! Recording label measurement.

use std::sync::Arc;

use parking_lot::Mutex;
use tabstrip::{HeaderMeasure, Tab, TabId};
use tabstrip_core::alloc::HashMap;
use tabstrip_core::geometry::Size;

#[derive(Debug, Default)]
struct MockState {
    calls: Vec<TabId>,
    overrides: HashMap<TabId, f32>,
}

/// Measures every label as `width` x `height` unless overridden per tab.
///
/// Clones share the recorded calls, so a test can keep one handle and give
/// the other to a pane.
///
/// # Borrow Checking Pattern: Interior Mutability
///
/// [`HeaderMeasure::measure_label`] takes `&self` but the mock records the
/// call. The shared state sits behind `Arc<Mutex<_>>`.
#[derive(Debug, Clone)]
pub struct MockMeasure {
    width: f32,
    height: f32,
    close_button: Size<f32>,
    state: Arc<Mutex<MockState>>,
}

impl MockMeasure {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            close_button: Size::new(16.0, 16.0),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    pub fn with_close_button(mut self, size: Size<f32>) -> Self {
        self.close_button = size;
        self
    }

    /// Measure `tab` with a different label width from now on.
    pub fn set_width(&self, tab: impl Into<TabId>, width: f32) {
        self.state.lock().overrides.insert(tab.into(), width);
    }

    /// Ids of every measured tab, in call order.
    pub fn calls(&self) -> Vec<TabId> {
        self.state.lock().calls.clone()
    }

    pub fn count_measures(&self, tab: impl Into<TabId>) -> usize {
        let tab = tab.into();
        self.state.lock().calls.iter().filter(|id| **id == tab).count()
    }

    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }
}

impl HeaderMeasure for MockMeasure {
    fn measure_label(&self, tab: &Tab) -> Size<f32> {
        let mut state = self.state.lock();
        state.calls.push(tab.id);
        let width = state.overrides.get(&tab.id).copied().unwrap_or(self.width);
        Size::new(width, self.height)
    }

    fn close_button_size(&self) -> Size<f32> {
        self.close_button
    }
}
