//! Panes filled with uniform tabs.
//!
//! Fixture tabs are keyed `t0`, `t1`, ... and measure exactly `tab_width`
//! wide: header padding is zero, animations are off and no close button is
//! shown, so header `i` starts at `i * tab_width` before scrolling.

use tabstrip::{
    HeaderAreaPolicy, Side, Tab, TabAnimation, TabClosingPolicy, TabDragPolicy, TabId, TabPane,
    TabPaneConfig,
};
use tabstrip_core::geometry::{Insets, Rect};

use crate::measure::MockMeasure;

pub const DEFAULT_TAB_WIDTH: f32 = 100.0;
pub const DEFAULT_TAB_HEIGHT: f32 = 20.0;

/// Ids of the first `count` fixture tabs.
pub fn tab_ids(count: usize) -> Vec<TabId> {
    (0..count).map(|i| TabId::new(&format!("t{}", i))).collect()
}

pub fn fixture_tab(index: usize) -> Tab {
    let key = format!("t{}", index);
    Tab::new(&key, key.clone())
}

/// Config with zero padding, no animations and no close buttons.
pub fn fixture_config() -> TabPaneConfig {
    TabPaneConfig::new()
        .animations(TabAnimation::None)
        .closing_policy(TabClosingPolicy::None)
        .header_padding(Insets::ZERO)
}

/// Builder for a laid-out [`TabPane`] of uniform tabs.
#[derive(Debug, Clone)]
pub struct PaneFixture {
    count: usize,
    tab_width: f32,
    width: f32,
    height: f32,
    config: TabPaneConfig,
    measure: Option<MockMeasure>,
}

impl PaneFixture {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            tab_width: DEFAULT_TAB_WIDTH,
            width: 500.0,
            height: 300.0,
            config: fixture_config(),
            measure: None,
        }
    }

    pub fn tab_width(mut self, width: f32) -> Self {
        self.tab_width = width;
        self
    }

    /// Pane width; the header area length for TOP and BOTTOM.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn side(mut self, side: Side) -> Self {
        self.config = self.config.side(side);
        self
    }

    pub fn reorderable(mut self) -> Self {
        self.config = self.config.drag_policy(TabDragPolicy::Reorder);
        self
    }

    pub fn always_visible(mut self) -> Self {
        self.config = self.config.header_area_policy(HeaderAreaPolicy::AlwaysVisible);
        self
    }

    pub fn scrollbar(mut self) -> Self {
        self.config = self.config.scrollbar_enabled(true);
        self
    }

    pub fn config(mut self, config: TabPaneConfig) -> Self {
        self.config = config;
        self
    }

    /// Measure with `measure` instead of a fresh mock.
    pub fn measure(mut self, measure: MockMeasure) -> Self {
        self.measure = Some(measure);
        self
    }

    pub fn build(self) -> TabPane {
        let measure = self
            .measure
            .unwrap_or_else(|| MockMeasure::new(self.tab_width, DEFAULT_TAB_HEIGHT));
        let mut pane = TabPane::with_measure(self.config, measure);
        for i in 0..self.count {
            pane.add_tab(fixture_tab(i))
                .expect("fixture tab keys are unique");
        }
        pane.layout(Rect::new(0.0, 0.0, self.width, self.height));
        pane
    }
}
