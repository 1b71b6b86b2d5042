//! Tab pane configuration.
//!
//! [`TabPaneConfig`] carries every knob the header engine reads. Build one
//! with the chained setters and hand it to [`TabPane::with_config`], or change
//! single values later through the pane's `set_*` methods, which notify
//! subscribers with a [`ConfigChange`].
//!
//! [`TabPane::with_config`]: crate::TabPane::with_config

use tabstrip_core::geometry::{Insets, sanitize_extent, sanitize_max};

/// Default horizontal padding on each side of a tab header.
pub const DEFAULT_HEADER_PADDING_X: f32 = 8.0;

/// Default vertical padding above and below a tab label.
pub const DEFAULT_HEADER_PADDING_Y: f32 = 4.0;

/// Default scrollbar thickness in pixels.
pub const DEFAULT_SCROLLBAR_THICKNESS: f32 = 8.0;

/// Edge of the pane the header area is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    /// Rotation of the header area, in degrees, relative to a top strip.
    pub fn rotation_degrees(self) -> f32 {
        match self {
            Side::Top => 0.0,
            Side::Bottom => 180.0,
            Side::Left => -90.0,
            Side::Right => 90.0,
        }
    }

    /// `true` when headers are built from the far edge of the strip.
    ///
    /// BOTTOM and LEFT strips are rotated so that building right to left in
    /// local space puts the first tab at the visual start.
    pub fn builds_from_end(self) -> bool {
        matches!(self, Side::Bottom | Side::Left)
    }

    /// `+1.0` when local x grows with the tab index, `-1.0` otherwise.
    pub fn layout_direction(self) -> f32 {
        if self.builds_from_end() { -1.0 } else { 1.0 }
    }
}

/// When the header area is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeaderAreaPolicy {
    /// Always visible; an invisible placeholder header keeps its height when
    /// there are no tabs.
    AlwaysVisible,
    /// Hidden while the pane has no tabs.
    #[default]
    VisibleWhenTabsPresent,
}

impl HeaderAreaPolicy {
    /// Alias of [`HeaderAreaPolicy::VisibleWhenTabsPresent`].
    pub const HIDDEN_WHEN_EMPTY: Self = HeaderAreaPolicy::VisibleWhenTabsPresent;
}

/// Which tabs show a close button and may be closed from their header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabClosingPolicy {
    AllTabs,
    #[default]
    SelectedTab,
    /// No tab can be closed from the header.
    None,
}

/// Whether tabs can be reordered by dragging their header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabDragPolicy {
    #[default]
    Fixed,
    Reorder,
}

/// Transition used when a tab is opened or closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabAnimation {
    None,
    #[default]
    Grow,
}

/// Where the scrollbar sits relative to the tab headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollBarPlacement {
    AboveTabs,
    #[default]
    BelowTabs,
}

/// Configuration for a [`TabPane`](crate::TabPane).
#[derive(Debug, Clone, PartialEq)]
pub struct TabPaneConfig {
    pub side: Side,
    pub header_area_policy: HeaderAreaPolicy,
    pub scrollbar_enabled: bool,
    pub scrollbar_placement: ScrollBarPlacement,
    /// Pin the scrollbar to the outer edge of the header area, ignoring insets.
    pub scrollbar_stick_to_edge: bool,
    pub scrollbar_thickness: f32,
    pub tab_min_width: f32,
    pub tab_max_width: f32,
    pub tab_min_height: f32,
    pub tab_max_height: f32,
    pub closing_policy: TabClosingPolicy,
    pub drag_policy: TabDragPolicy,
    pub open_animation: TabAnimation,
    pub close_animation: TabAnimation,
    /// Padding inside each header around its label and close button.
    pub header_padding: Insets,
    /// Insets of the header area. The leading and trailing ones along the
    /// strip act as the first and last tab indents.
    pub header_area_insets: Insets,
}

impl Default for TabPaneConfig {
    fn default() -> Self {
        Self {
            side: Side::Top,
            header_area_policy: HeaderAreaPolicy::default(),
            scrollbar_enabled: false,
            scrollbar_placement: ScrollBarPlacement::default(),
            scrollbar_stick_to_edge: false,
            scrollbar_thickness: DEFAULT_SCROLLBAR_THICKNESS,
            tab_min_width: 0.0,
            tab_max_width: f32::MAX,
            tab_min_height: 0.0,
            tab_max_height: f32::MAX,
            closing_policy: TabClosingPolicy::default(),
            drag_policy: TabDragPolicy::default(),
            open_animation: TabAnimation::Grow,
            close_animation: TabAnimation::Grow,
            header_padding: Insets::new(
                DEFAULT_HEADER_PADDING_Y,
                DEFAULT_HEADER_PADDING_X,
                DEFAULT_HEADER_PADDING_Y,
                DEFAULT_HEADER_PADDING_X,
            ),
            header_area_insets: Insets::ZERO,
        }
    }
}

impl TabPaneConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn header_area_policy(mut self, policy: HeaderAreaPolicy) -> Self {
        self.header_area_policy = policy;
        self
    }

    pub fn scrollbar_enabled(mut self, enabled: bool) -> Self {
        self.scrollbar_enabled = enabled;
        self
    }

    pub fn scrollbar_placement(mut self, placement: ScrollBarPlacement) -> Self {
        self.scrollbar_placement = placement;
        self
    }

    pub fn scrollbar_stick_to_edge(mut self, stick: bool) -> Self {
        self.scrollbar_stick_to_edge = stick;
        self
    }

    pub fn scrollbar_thickness(mut self, thickness: f32) -> Self {
        self.scrollbar_thickness = sanitize_extent(thickness);
        self
    }

    pub fn tab_min_width(mut self, width: f32) -> Self {
        self.tab_min_width = sanitize_extent(width);
        self
    }

    pub fn tab_max_width(mut self, width: f32) -> Self {
        self.tab_max_width = sanitize_max(width);
        self
    }

    pub fn tab_min_height(mut self, height: f32) -> Self {
        self.tab_min_height = sanitize_extent(height);
        self
    }

    pub fn tab_max_height(mut self, height: f32) -> Self {
        self.tab_max_height = sanitize_max(height);
        self
    }

    pub fn closing_policy(mut self, policy: TabClosingPolicy) -> Self {
        self.closing_policy = policy;
        self
    }

    pub fn drag_policy(mut self, policy: TabDragPolicy) -> Self {
        self.drag_policy = policy;
        self
    }

    pub fn open_animation(mut self, animation: TabAnimation) -> Self {
        self.open_animation = animation;
        self
    }

    pub fn close_animation(mut self, animation: TabAnimation) -> Self {
        self.close_animation = animation;
        self
    }

    /// Set both open and close animations.
    pub fn animations(self, animation: TabAnimation) -> Self {
        self.open_animation(animation).close_animation(animation)
    }

    pub fn header_padding(mut self, padding: Insets) -> Self {
        self.header_padding = padding.sanitized();
        self
    }

    pub fn header_area_insets(mut self, insets: Insets) -> Self {
        self.header_area_insets = insets.sanitized();
        self
    }

    /// Inset before the first tab, measured along the strip.
    pub fn first_tab_indent(&self) -> f32 {
        if self.side.is_horizontal() {
            self.header_area_insets.left
        } else {
            self.header_area_insets.top
        }
    }

    /// Inset after the last tab, measured along the strip.
    pub fn last_tab_indent(&self) -> f32 {
        if self.side.is_horizontal() {
            self.header_area_insets.right
        } else {
            self.header_area_insets.bottom
        }
    }

    /// Insets across the strip (top and bottom of a TOP strip).
    pub fn cross_insets(&self) -> f32 {
        if self.side.is_horizontal() {
            self.header_area_insets.vertical()
        } else {
            self.header_area_insets.horizontal()
        }
    }

    /// Sanitize every numeric field in place.
    pub(crate) fn sanitize(&mut self) {
        self.scrollbar_thickness = sanitize_extent(self.scrollbar_thickness);
        self.tab_min_width = sanitize_extent(self.tab_min_width);
        self.tab_max_width = sanitize_max(self.tab_max_width);
        self.tab_min_height = sanitize_extent(self.tab_min_height);
        self.tab_max_height = sanitize_max(self.tab_max_height);
        self.header_padding = self.header_padding.sanitized();
        self.header_area_insets = self.header_area_insets.sanitized();
    }
}

/// A configuration value that changed on a live pane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigChange {
    Side(Side),
    HeaderAreaPolicy(HeaderAreaPolicy),
    ScrollBarEnabled(bool),
    ScrollBarPlacement(ScrollBarPlacement),
    ScrollBarStickToEdge(bool),
    TabMinWidth(f32),
    TabMaxWidth(f32),
    TabMinHeight(f32),
    TabMaxHeight(f32),
    ClosingPolicy(TabClosingPolicy),
    DragPolicy(TabDragPolicy),
    OpenAnimation(TabAnimation),
    CloseAnimation(TabAnimation),
}

impl ConfigChange {
    /// Write the changed value into `config`.
    pub(crate) fn apply_to(self, config: &mut TabPaneConfig) {
        match self {
            ConfigChange::Side(side) => config.side = side,
            ConfigChange::HeaderAreaPolicy(policy) => config.header_area_policy = policy,
            ConfigChange::ScrollBarEnabled(enabled) => config.scrollbar_enabled = enabled,
            ConfigChange::ScrollBarPlacement(placement) => config.scrollbar_placement = placement,
            ConfigChange::ScrollBarStickToEdge(stick) => config.scrollbar_stick_to_edge = stick,
            ConfigChange::TabMinWidth(width) => config.tab_min_width = sanitize_extent(width),
            ConfigChange::TabMaxWidth(width) => config.tab_max_width = sanitize_max(width),
            ConfigChange::TabMinHeight(height) => config.tab_min_height = sanitize_extent(height),
            ConfigChange::TabMaxHeight(height) => config.tab_max_height = sanitize_max(height),
            ConfigChange::ClosingPolicy(policy) => config.closing_policy = policy,
            ConfigChange::DragPolicy(policy) => config.drag_policy = policy,
            ConfigChange::OpenAnimation(animation) => config.open_animation = animation,
            ConfigChange::CloseAnimation(animation) => config.close_animation = animation,
        }
    }
}
