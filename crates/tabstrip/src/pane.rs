//! The tab pane: tab list, selection and host-facing operations.
//!
//! [`TabPane`] owns the logical tab list and the selection and forwards
//! everything header-related to its [`TabHeaderArea`]. Hosts drive it with
//! pointer input, [`TabPane::tick`] and [`TabPane::layout`], then read
//! [`TabPane::take_dirty`] and [`TabPane::pop_events`].
//!
//! # Example
//! ```
//! use tabstrip::{Tab, TabPane};
//! use tabstrip_core::geometry::Rect;
//!
//! let mut pane = TabPane::new();
//! pane.add_tab(Tab::new("main", "main.rs")).unwrap();
//! pane.add_tab(Tab::new("lib", "lib.rs")).unwrap();
//! pane.layout(Rect::new(0.0, 0.0, 400.0, 300.0));
//!
//! assert_eq!(pane.selected(), Some("main".into()));
//! assert!(!pane.is_overflowed());
//! ```

use std::cmp::Ordering;

use tabstrip_core::alloc::HashSet;
use tabstrip_core::geometry::{Rect, sanitize_coord, sanitize_extent};
use tabstrip_core::math::Vec2;
use tabstrip_core::profiling::profile_function;

use crate::config::{
    ConfigChange, HeaderAreaPolicy, ScrollBarPlacement, Side, TabAnimation, TabClosingPolicy,
    TabDragPolicy, TabPaneConfig,
};
use crate::dirty::HeaderDirty;
use crate::dnd::{DragAndDropContext, PaneId, TAB_DRAG_FORMAT, TabDragPayload, compute_drop_index};
use crate::error::{TabError, TabResult};
use crate::event::{Listeners, PointerEvent, PropertyChange, Subscription, WheelEvent};
use crate::header_area::{AuxRegion, HeaderAction, TabHeaderArea};
use crate::layout::AuxArea;
use crate::measure::{EstimatedMeasure, HeaderMeasure};
use crate::menu::TabsMenu;
use crate::tab::{Tab, TabId};

/// Notifications for the host, drained with [`TabPane::pop_events`].
#[derive(Debug, Clone, PartialEq)]
pub enum TabPaneEvent {
    /// Show the tab's context menu at `position`, in pane coordinates.
    ContextMenuRequested { tab: TabId, position: Vec2 },
    /// A tab was closed from its header.
    TabClosed(TabId),
}

/// A change of the logical tab list.
#[derive(Debug, Clone, PartialEq)]
pub enum TabListChange {
    Added { tab: TabId, index: usize },
    Removed { tab: TabId, index: usize },
    Moved { tab: TabId, from: usize, to: usize },
    /// The whole list was reordered or replaced.
    Replaced,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Observed {
    overflowed: bool,
    headers_region_width: f32,
    offset: f32,
    clip_width: f32,
}

impl Observed {
    fn of(area: &TabHeaderArea) -> Self {
        Self {
            overflowed: area.is_overflowed(),
            headers_region_width: area.headers_region_width(),
            offset: area.offset(),
            clip_width: area.clip_width(),
        }
    }
}

#[derive(Default)]
struct PaneListeners {
    overflowed: Listeners<PropertyChange<bool>>,
    headers_region_width: Listeners<PropertyChange<f32>>,
    offset: Listeners<PropertyChange<f32>>,
    clip_width: Listeners<PropertyChange<f32>>,
    selection: Listeners<PropertyChange<Option<TabId>>>,
    config: Listeners<ConfigChange>,
    tabs: Listeners<TabListChange>,
}

pub struct TabPane {
    id: PaneId,
    tabs: Vec<Tab>,
    selected: Option<TabId>,
    area: TabHeaderArea,
    bounds: Rect<f32>,
    menu: TabsMenu,
    events: Vec<TabPaneEvent>,
    observed: Observed,
    listeners: PaneListeners,
}

impl std::fmt::Debug for TabPane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabPane")
            .field("id", &self.id)
            .field("tabs", &self.tabs.len())
            .field("selected", &self.selected)
            .field("bounds", &self.bounds)
            .field("area", &self.area)
            .finish()
    }
}

impl Default for TabPane {
    fn default() -> Self {
        Self::new()
    }
}

impl TabPane {
    pub fn new() -> Self {
        Self::with_config(TabPaneConfig::default())
    }

    pub fn with_config(config: TabPaneConfig) -> Self {
        Self::with_measure(config, EstimatedMeasure::default())
    }

    pub fn with_measure(mut config: TabPaneConfig, measure: impl HeaderMeasure + 'static) -> Self {
        config.sanitize();
        let mut area = TabHeaderArea::new(config, Box::new(measure));
        area.update_no_tabs_state(true);
        area.relayout();
        area.take_dirty();
        let observed = Observed::of(&area);
        Self {
            id: PaneId::next(),
            tabs: Vec::new(),
            selected: None,
            area,
            bounds: Rect::ZERO,
            menu: TabsMenu::new(),
            events: Vec::new(),
            observed,
            listeners: PaneListeners::default(),
        }
    }

    pub fn id(&self) -> PaneId {
        self.id
    }

    pub fn config(&self) -> &TabPaneConfig {
        self.area.config()
    }

    pub fn header_area(&self) -> &TabHeaderArea {
        &self.area
    }

    pub fn tabs_menu(&self) -> &TabsMenu {
        &self.menu
    }

    /// Drain dirty flags accumulated since the last call.
    pub fn take_dirty(&mut self) -> HeaderDirty {
        self.area.take_dirty()
    }

    /// Drain host notifications.
    pub fn pop_events(&mut self) -> Vec<TabPaneEvent> {
        std::mem::take(&mut self.events)
    }

    // ---------------------------------------------------------------------
    // Tab list
    // ---------------------------------------------------------------------

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == id)
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.index_of(id).is_some()
    }

    fn order(&self) -> Vec<TabId> {
        self.tabs.iter().map(|tab| tab.id).collect()
    }

    pub fn add_tab(&mut self, tab: Tab) -> TabResult<()> {
        self.insert_tab(self.tabs.len(), tab)
    }

    /// Insert `tab` at `index`, clamped to the tab count.
    pub fn insert_tab(&mut self, index: usize, tab: Tab) -> TabResult<()> {
        if self.contains(tab.id) {
            return Err(TabError::DuplicateTab(tab.id));
        }
        self.end_drag();
        let index = index.min(self.tabs.len());
        let id = tab.id;
        tracing::debug!("Inserting tab {} at {}", id, index);

        self.area.update_no_tabs_state(false);
        self.area.add_tabs(index, std::slice::from_ref(&tab));
        self.tabs.insert(index, tab);
        self.tabs_changed(TabListChange::Added { tab: id, index });

        if self.selected.is_none() {
            self.set_selection(Some(id));
        }
        self.notify();
        Ok(())
    }

    /// Remove a tab, closing its header. Selection moves to the nearest
    /// enabled tab.
    pub fn remove_tab(&mut self, id: TabId) -> TabResult<Tab> {
        if !self.contains(id) {
            return Err(TabError::UnknownTab(id));
        }
        self.end_drag();
        let index = self.index_of(id).ok_or(TabError::UnknownTab(id))?;
        tracing::debug!("Removing tab {} at {}", id, index);
        let tab = self.tabs.remove(index);
        self.area.remove_tabs(&[id]);
        if self.tabs.is_empty() {
            self.area.update_no_tabs_state(true);
        }
        self.tabs_changed(TabListChange::Removed { tab: id, index });

        if self.selected == Some(id) {
            let next = self.nearest_enabled(index);
            self.set_selection(next);
        }
        self.notify();
        Ok(tab)
    }

    /// Close a tab the way its close button would.
    ///
    /// Returns `Ok(false)` when the tab is not closable or the closing
    /// policy forbids it.
    pub fn close_tab(&mut self, id: TabId) -> TabResult<bool> {
        let tab = self.tab(id).ok_or(TabError::UnknownTab(id))?;
        let allowed = tab.closable
            && match self.config().closing_policy {
                TabClosingPolicy::AllTabs => true,
                TabClosingPolicy::SelectedTab => self.selected == Some(id),
                TabClosingPolicy::None => false,
            };
        if !allowed {
            tracing::trace!("Close of {} declined", id);
            return Ok(false);
        }
        self.remove_tab(id)?;
        self.events.push(TabPaneEvent::TabClosed(id));
        Ok(true)
    }

    /// Replace the whole tab list.
    ///
    /// Tabs present before and after keep their header and are moved to
    /// their new index; their descriptors are updated in place.
    pub fn set_tabs(&mut self, tabs: Vec<Tab>) -> TabResult<()> {
        let mut incoming = HashSet::default();
        for tab in &tabs {
            if !incoming.insert(tab.id) {
                return Err(TabError::DuplicateTab(tab.id));
            }
        }
        self.end_drag();
        let existing: HashSet<TabId> = self.tabs.iter().map(|tab| tab.id).collect();
        let removed: Vec<TabId> = self
            .tabs
            .iter()
            .map(|tab| tab.id)
            .filter(|id| !incoming.contains(id))
            .collect();
        let kept: Vec<TabId> = tabs
            .iter()
            .map(|tab| tab.id)
            .filter(|id| existing.contains(id))
            .collect();
        tracing::debug!(
            "Replacing tab list: {} removed, {} added",
            removed.len(),
            tabs.len() - kept.len()
        );

        let old_selected_index = self.selected.and_then(|id| self.index_of(id));
        if !tabs.is_empty() {
            self.area.update_no_tabs_state(false);
        }
        self.area.remove_tabs(&removed);
        self.area.arrange(&kept);
        for (index, tab) in tabs.iter().enumerate() {
            if !existing.contains(&tab.id) {
                self.area.add_tabs(index, std::slice::from_ref(tab));
            }
        }
        self.area.update_tabs(&tabs);
        self.tabs = tabs;
        if self.tabs.is_empty() {
            self.area.update_no_tabs_state(true);
        }
        self.tabs_changed(TabListChange::Replaced);

        let still_selected = self.selected.filter(|id| self.contains(*id));
        let selection = still_selected.or_else(|| self.nearest_enabled(old_selected_index.unwrap_or(0)));
        self.set_selection(selection);
        self.notify();
        Ok(())
    }

    /// Move a tab to `index`, clamped to the last slot. Ends a drag in
    /// progress.
    pub fn move_tab(&mut self, id: TabId, index: usize) -> TabResult<()> {
        if !self.contains(id) {
            return Err(TabError::UnknownTab(id));
        }
        self.end_drag();
        let from = self.index_of(id).ok_or(TabError::UnknownTab(id))?;
        let to = index.min(self.tabs.len() - 1);
        if from == to {
            return Ok(());
        }
        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);
        let order = self.order();
        self.area.permute(&order);
        self.tabs_changed(TabListChange::Moved { tab: id, from, to });
        self.notify();
        Ok(())
    }

    /// Stable-sort the tabs. Ends a drag in progress.
    pub fn sort_tabs_by(&mut self, mut compare: impl FnMut(&Tab, &Tab) -> Ordering) {
        self.end_drag();
        let before = self.order();
        self.tabs.sort_by(|a, b| compare(a, b));
        let after = self.order();
        if before == after {
            return;
        }
        self.area.permute(&after);
        self.tabs_changed(TabListChange::Replaced);
        self.notify();
    }

    /// Settle or cancel a drag before the tab list changes under it.
    ///
    /// A released drag that is still settling commits; a held one is
    /// cancelled and the headers go back to tab order.
    fn end_drag(&mut self) {
        if self.area.drag_session().is_none() {
            return;
        }
        self.area.finish_drag_animations();
        self.process_actions();
        let order = self.order();
        self.area.cancel_drag(&order);
    }

    fn tabs_changed(&mut self, change: TabListChange) {
        self.menu.rebuild(&self.tabs);
        self.area.mark(HeaderDirty::MENU);
        self.listeners.tabs.emit(&change);
    }

    /// Nearest enabled tab at or after `index`, then before it.
    fn nearest_enabled(&self, index: usize) -> Option<TabId> {
        if self.tabs.is_empty() {
            return None;
        }
        let start = index.min(self.tabs.len() - 1);
        self.tabs[start..]
            .iter()
            .find(|tab| !tab.disabled)
            .or_else(|| self.tabs[..start].iter().rev().find(|tab| !tab.disabled))
            .or_else(|| self.tabs.get(start))
            .map(|tab| tab.id)
    }

    // ---------------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------------

    pub fn selected(&self) -> Option<TabId> {
        self.selected
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected.and_then(|id| self.index_of(id))
    }

    pub fn select(&mut self, id: TabId) -> TabResult<()> {
        if !self.contains(id) {
            return Err(TabError::UnknownTab(id));
        }
        self.set_selection(Some(id));
        self.notify();
        Ok(())
    }

    /// Select the tab at `index`; returns false if out of range.
    pub fn select_index(&mut self, index: usize) -> bool {
        let Some(id) = self.tabs.get(index).map(|tab| tab.id) else {
            return false;
        };
        self.set_selection(Some(id));
        self.notify();
        true
    }

    fn set_selection(&mut self, selected: Option<TabId>) {
        if self.selected == selected {
            return;
        }
        let old = std::mem::replace(&mut self.selected, selected);
        tracing::debug!("Selection {:?} -> {:?}", old, selected);
        self.area.set_selected(selected);
        self.listeners.selection.emit(&PropertyChange { old, new: selected });
    }

    // ---------------------------------------------------------------------
    // Configuration
    // ---------------------------------------------------------------------

    /// Apply one configuration change and notify subscribers.
    pub fn apply_config(&mut self, change: ConfigChange) {
        let mut config = self.config().clone();
        change.apply_to(&mut config);
        if config == *self.config() {
            return;
        }
        tracing::debug!("Config change: {:?}", change);
        self.area.set_config(config);
        let flags = match change {
            ConfigChange::Side(_) => HeaderDirty::LAYOUT | HeaderDirty::VISIBILITY,
            ConfigChange::HeaderAreaPolicy(_) => {
                self.area.update_no_tabs_state(self.tabs.is_empty());
                HeaderDirty::VISIBILITY
            }
            ConfigChange::ScrollBarEnabled(_)
            | ConfigChange::ScrollBarPlacement(_)
            | ConfigChange::ScrollBarStickToEdge(_) => HeaderDirty::SCROLLBAR | HeaderDirty::LAYOUT,
            _ => HeaderDirty::LAYOUT,
        };
        self.area.mark(flags);
        self.relayout();
        self.listeners.config.emit(&change);
        self.notify();
    }

    pub fn set_side(&mut self, side: Side) {
        self.apply_config(ConfigChange::Side(side));
    }

    pub fn set_header_area_policy(&mut self, policy: HeaderAreaPolicy) {
        self.apply_config(ConfigChange::HeaderAreaPolicy(policy));
    }

    pub fn set_scrollbar_enabled(&mut self, enabled: bool) {
        self.apply_config(ConfigChange::ScrollBarEnabled(enabled));
    }

    pub fn set_scrollbar_placement(&mut self, placement: ScrollBarPlacement) {
        self.apply_config(ConfigChange::ScrollBarPlacement(placement));
    }

    pub fn set_scrollbar_stick_to_edge(&mut self, stick: bool) {
        self.apply_config(ConfigChange::ScrollBarStickToEdge(stick));
    }

    pub fn set_tab_min_width(&mut self, width: f32) {
        self.apply_config(ConfigChange::TabMinWidth(width));
    }

    pub fn set_tab_max_width(&mut self, width: f32) {
        self.apply_config(ConfigChange::TabMaxWidth(width));
    }

    pub fn set_tab_min_height(&mut self, height: f32) {
        self.apply_config(ConfigChange::TabMinHeight(height));
    }

    pub fn set_tab_max_height(&mut self, height: f32) {
        self.apply_config(ConfigChange::TabMaxHeight(height));
    }

    pub fn set_closing_policy(&mut self, policy: TabClosingPolicy) {
        self.apply_config(ConfigChange::ClosingPolicy(policy));
    }

    pub fn set_drag_policy(&mut self, policy: TabDragPolicy) {
        self.apply_config(ConfigChange::DragPolicy(policy));
    }

    pub fn set_open_animation(&mut self, animation: TabAnimation) {
        self.apply_config(ConfigChange::OpenAnimation(animation));
    }

    pub fn set_close_animation(&mut self, animation: TabAnimation) {
        self.apply_config(ConfigChange::CloseAnimation(animation));
    }

    /// Replace the label measurement, e.g. after a font change.
    pub fn set_measure(&mut self, measure: impl HeaderMeasure + 'static) {
        self.area.set_measure(Box::new(measure));
        self.notify();
    }

    pub fn set_first_area(&mut self, area: AuxArea) {
        self.set_aux_area(AuxRegion::First, area);
    }

    pub fn set_sticky_area(&mut self, area: AuxArea) {
        self.set_aux_area(AuxRegion::Sticky, area);
    }

    pub fn set_last_area(&mut self, area: AuxArea) {
        self.set_aux_area(AuxRegion::Last, area);
    }

    fn set_aux_area(&mut self, region: AuxRegion, area: AuxArea) {
        self.area.set_aux_area(region, area);
        self.notify();
    }

    // ---------------------------------------------------------------------
    // Layout and geometry
    // ---------------------------------------------------------------------

    /// Lay the pane out in `bounds`.
    pub fn layout(&mut self, bounds: Rect<f32>) {
        profile_function!();
        self.bounds = Rect::new(
            sanitize_coord(bounds.x),
            sanitize_coord(bounds.y),
            sanitize_extent(bounds.width),
            sanitize_extent(bounds.height),
        );
        self.relayout();
        self.notify();
    }

    fn relayout(&mut self) {
        let length = if self.config().side.is_horizontal() {
            self.bounds.width
        } else {
            self.bounds.height
        };
        self.area.resize(length);
    }

    pub fn bounds(&self) -> Rect<f32> {
        self.bounds
    }

    /// Rotation of the header area in degrees.
    pub fn rotation(&self) -> f32 {
        self.config().side.rotation_degrees()
    }

    /// Header area bounds in pane coordinates.
    pub fn header_area_rect(&self) -> Rect<f32> {
        let Rect { x, y, width: w, height: h } = self.bounds;
        let thickness = self.area.thickness();
        match self.config().side {
            Side::Top => Rect::new(x, y, w, thickness),
            Side::Bottom => Rect::new(x, y + h - thickness, w, thickness),
            Side::Left => Rect::new(x, y, thickness, h),
            Side::Right => Rect::new(x + w - thickness, y, thickness, h),
        }
    }

    /// Bounds left for the selected tab's content.
    pub fn content_rect(&self) -> Rect<f32> {
        let Rect { x, y, width: w, height: h } = self.bounds;
        let thickness = self.area.thickness();
        match self.config().side {
            Side::Top => Rect::new(x, y + thickness, w, (h - thickness).max(0.0)),
            Side::Bottom => Rect::new(x, y, w, (h - thickness).max(0.0)),
            Side::Left => Rect::new(x + thickness, y, (w - thickness).max(0.0), h),
            Side::Right => Rect::new(x, y, (w - thickness).max(0.0), h),
        }
    }

    /// Map a header-area local point to pane coordinates.
    pub fn to_pane(&self, local: Vec2) -> Vec2 {
        let Rect { x, y, width: w, height: h } = self.bounds;
        match self.config().side {
            Side::Top => Vec2::new(x + local.x, y + local.y),
            Side::Bottom => Vec2::new(x + w - local.x, y + h - local.y),
            Side::Left => Vec2::new(x + local.y, y + h - local.x),
            Side::Right => Vec2::new(x + w - local.y, y + local.x),
        }
    }

    /// Map a pane point into header-area local coordinates.
    pub fn to_header_local(&self, point: Vec2) -> Vec2 {
        let Rect { x, y, width: w, height: h } = self.bounds;
        match self.config().side {
            Side::Top => Vec2::new(point.x - x, point.y - y),
            Side::Bottom => Vec2::new(x + w - point.x, y + h - point.y),
            Side::Left => Vec2::new(y + h - point.y, point.x - x),
            Side::Right => Vec2::new(point.y - y, x + w - point.x),
        }
    }

    pub fn is_overflowed(&self) -> bool {
        self.area.is_overflowed()
    }

    pub fn headers_region_width(&self) -> f32 {
        self.area.headers_region_width()
    }

    pub fn offset(&self) -> f32 {
        self.area.offset()
    }

    pub fn clip_width(&self) -> f32 {
        self.area.clip_width()
    }

    // ---------------------------------------------------------------------
    // Subscriptions
    // ---------------------------------------------------------------------

    pub fn on_overflowed_changed(
        &self,
        callback: impl FnMut(&PropertyChange<bool>) + 'static,
    ) -> Subscription {
        self.listeners.overflowed.subscribe(callback)
    }

    pub fn on_headers_region_width_changed(
        &self,
        callback: impl FnMut(&PropertyChange<f32>) + 'static,
    ) -> Subscription {
        self.listeners.headers_region_width.subscribe(callback)
    }

    pub fn on_offset_changed(
        &self,
        callback: impl FnMut(&PropertyChange<f32>) + 'static,
    ) -> Subscription {
        self.listeners.offset.subscribe(callback)
    }

    pub fn on_clip_width_changed(
        &self,
        callback: impl FnMut(&PropertyChange<f32>) + 'static,
    ) -> Subscription {
        self.listeners.clip_width.subscribe(callback)
    }

    pub fn on_selection_changed(
        &self,
        callback: impl FnMut(&PropertyChange<Option<TabId>>) + 'static,
    ) -> Subscription {
        self.listeners.selection.subscribe(callback)
    }

    pub fn on_config_changed(&self, callback: impl FnMut(&ConfigChange) + 'static) -> Subscription {
        self.listeners.config.subscribe(callback)
    }

    pub fn on_tabs_changed(&self, callback: impl FnMut(&TabListChange) + 'static) -> Subscription {
        self.listeners.tabs.subscribe(callback)
    }

    /// Publish changes of the read-only header properties.
    fn notify(&mut self) {
        let now = Observed::of(&self.area);
        let old = std::mem::replace(&mut self.observed, now);
        if old.overflowed != now.overflowed {
            self.listeners.overflowed.emit(&PropertyChange {
                old: old.overflowed,
                new: now.overflowed,
            });
        }
        if old.headers_region_width != now.headers_region_width {
            self.listeners.headers_region_width.emit(&PropertyChange {
                old: old.headers_region_width,
                new: now.headers_region_width,
            });
        }
        if old.offset != now.offset {
            self.listeners.offset.emit(&PropertyChange {
                old: old.offset,
                new: now.offset,
            });
        }
        if old.clip_width != now.clip_width {
            self.listeners.clip_width.emit(&PropertyChange {
                old: old.clip_width,
                new: now.clip_width,
            });
        }
    }

    // ---------------------------------------------------------------------
    // Input and animation, header-area local coordinates
    // ---------------------------------------------------------------------

    /// Returns true if the press hit the scrollbar or a header.
    pub fn pointer_pressed(&mut self, event: PointerEvent) -> bool {
        let hit = self.area.pointer_pressed(event);
        self.process_actions();
        hit
    }

    pub fn pointer_dragged(&mut self, pos: Vec2) {
        self.area.pointer_dragged(pos);
        self.process_actions();
    }

    pub fn pointer_released(&mut self, event: PointerEvent) {
        self.area.pointer_released(event);
        self.process_actions();
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.area.pointer_moved(pos);
        self.notify();
    }

    pub fn pointer_exited(&mut self) {
        self.area.pointer_exited();
        self.notify();
    }

    pub fn wheel(&mut self, event: WheelEvent) {
        self.area.wheel(event);
        self.notify();
    }

    /// Abort a drag-reorder gesture, restoring the logical order.
    pub fn cancel_drag(&mut self) -> bool {
        let order = self.order();
        let cancelled = self.area.cancel_drag(&order);
        self.notify();
        cancelled
    }

    /// Scroll the headers by `delta` along the reading direction.
    pub fn scroll_by(&mut self, delta: f32) {
        self.area.scroll_headers_by(delta);
        self.notify();
    }

    /// Set the scrollbar value as if the user moved it.
    pub fn set_scrollbar_value(&mut self, value: f32) {
        self.area.set_scrollbar_value(value);
        self.notify();
    }

    pub fn scrollbar_increment(&mut self) {
        self.area.scrollbar_step(true);
        self.notify();
    }

    pub fn scrollbar_decrement(&mut self) {
        self.area.scrollbar_step(false);
        self.notify();
    }

    pub fn is_animating(&self) -> bool {
        self.area.is_animating()
    }

    /// Advance animations by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.area.tick(dt);
        self.process_actions();
    }

    fn process_actions(&mut self) {
        for action in self.area.pop_actions() {
            match action {
                HeaderAction::Select(id) => {
                    if self.tab(id).is_some_and(|tab| !tab.disabled) {
                        self.set_selection(Some(id));
                    }
                }
                HeaderAction::Close(id) => {
                    if let Err(err) = self.close_tab(id) {
                        tracing::warn!("Close request dropped: {}", err);
                    }
                }
                HeaderAction::ContextMenu { tab, position } => {
                    let position = self.to_pane(position);
                    self.events
                        .push(TabPaneEvent::ContextMenuRequested { tab, position });
                }
                HeaderAction::Reordered(commit) => self.commit_reorder(commit.tab),
                HeaderAction::HeaderRemoved(id) => {
                    tracing::trace!("Header {} gone", id);
                }
            }
        }
        self.notify();
    }

    /// Bring the tab list in line with the header order after a drag.
    fn commit_reorder(&mut self, id: TabId) {
        let Some(from) = self.index_of(id) else {
            return;
        };
        let Some(to) = self.area.headers().logical_index_of(id) else {
            return;
        };
        if from == to {
            return;
        }
        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);
        let order = self.order();
        self.area.arrange(&order);
        self.tabs_changed(TabListChange::Moved { tab: id, from, to });
    }

    // ---------------------------------------------------------------------
    // Tabs menu
    // ---------------------------------------------------------------------

    /// Show the tabs menu at `anchor`, in pane coordinates.
    pub fn show_tabs_menu(&mut self, anchor: Vec2) {
        self.menu.show(anchor, self.selected);
        self.area.mark(HeaderDirty::MENU);
    }

    pub fn hide_tabs_menu(&mut self) {
        if self.menu.hide() {
            self.area.mark(HeaderDirty::MENU);
        }
    }

    /// Select the tab behind a menu item; disabled items do nothing.
    pub fn activate_tabs_menu_item(&mut self, index: usize) -> Option<TabId> {
        let id = self.menu.activate(index)?;
        self.area.mark(HeaderDirty::MENU);
        self.set_selection(Some(id));
        self.notify();
        Some(id)
    }

    // ---------------------------------------------------------------------
    // Drag and drop between panes
    // ---------------------------------------------------------------------

    /// Start dragging `id` out of this pane.
    pub fn begin_tab_drag(
        &self,
        context: &DragAndDropContext,
        id: TabId,
    ) -> TabResult<TabDragPayload> {
        if !self.contains(id) {
            return Err(TabError::UnknownTab(id));
        }
        let width = self
            .area
            .headers()
            .find(id)
            .map_or(0.0, |header| header.width());
        context.begin(id, self.id, width);
        tracing::debug!("Tab {} drag started from pane {:?}", id, self.id);
        Ok(TabDragPayload {
            format: TAB_DRAG_FORMAT,
            tab: id,
            source: self.id,
            width,
        })
    }

    /// Record where a drop at header-local `pos` would land.
    pub fn drag_over(&self, context: &DragAndDropContext, pos: Vec2) -> TabResult<usize> {
        let dragged = context.dragged_tab().ok_or(TabError::EmptyDragContext)?;
        let region = self.area.layout().region;
        let centers: Vec<f32> = self
            .area
            .headers()
            .iter()
            .filter(|header| !header.is_closing() && !header.is_placeholder())
            .map(|header| header.layout_x() + header.width() / 2.0)
            .collect();
        let own = if context.source() == Some(self.id) {
            self.index_of(dragged)
        } else {
            None
        };
        let index = compute_drop_index(
            &centers,
            pos.x - region.x,
            self.config().side.builds_from_end(),
            own,
        );
        context.set_drop_index(Some(index));
        Ok(index)
    }

    /// Take the dragged tab from `source` and insert it here.
    ///
    /// Returns the index the tab landed at. Nothing changes on error.
    pub fn accept_drop(
        &mut self,
        context: &DragAndDropContext,
        source: &mut TabPane,
    ) -> TabResult<usize> {
        let id = context.dragged_tab().ok_or(TabError::EmptyDragContext)?;
        if context.source() != Some(source.id) {
            return Err(TabError::NotDragSource);
        }
        if !source.contains(id) {
            return Err(TabError::TabNotOwned(id));
        }
        if self.contains(id) {
            return Err(TabError::DuplicateTab(id));
        }
        let index = context.drop_index().unwrap_or(self.tabs.len()).min(self.tabs.len());
        let tab = source.remove_tab(id)?;
        self.insert_tab(index, tab)?;
        self.select(id)?;
        context.clear();
        tracing::debug!("Tab {} dropped at {} in pane {:?}", id, index, self.id);
        Ok(index)
    }

    /// Finish a drag whose source and target are this pane.
    pub fn accept_drop_within(&mut self, context: &DragAndDropContext) -> TabResult<usize> {
        let id = context.dragged_tab().ok_or(TabError::EmptyDragContext)?;
        if context.source() != Some(self.id) {
            return Err(TabError::NotDragSource);
        }
        if !self.contains(id) {
            return Err(TabError::TabNotOwned(id));
        }
        let index = context
            .drop_index()
            .unwrap_or(self.tabs.len())
            .min(self.tabs.len() - 1);
        self.move_tab(id, index)?;
        self.select(id)?;
        context.clear();
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use tabstrip_core::geometry::{Insets, Size};

    use super::*;

    struct Fixed;

    impl HeaderMeasure for Fixed {
        fn measure_label(&self, _tab: &Tab) -> Size<f32> {
            Size::new(100.0, 20.0)
        }
    }

    fn pane(count: usize, side: Side) -> TabPane {
        let config = TabPaneConfig::new()
            .side(side)
            .animations(TabAnimation::None)
            .closing_policy(TabClosingPolicy::None)
            .header_padding(Insets::ZERO);
        let mut pane = TabPane::with_measure(config, Fixed);
        for i in 0..count {
            let key = format!("t{}", i);
            pane.add_tab(Tab::new(&key, key.clone())).unwrap();
        }
        pane.layout(Rect::new(0.0, 0.0, 400.0, 300.0));
        pane
    }

    #[test]
    fn test_first_tab_is_selected() {
        let pane = pane(3, Side::Top);
        assert_eq!(pane.selected(), Some(TabId::new("t0")));
        assert_eq!(pane.header_area().thickness(), 20.0);
    }

    #[test]
    fn test_duplicate_insert_is_rejected() {
        let mut pane = pane(1, Side::Top);
        assert_eq!(
            pane.add_tab(Tab::new("t0", "again")),
            Err(TabError::DuplicateTab(TabId::new("t0")))
        );
        assert_eq!(pane.len(), 1);
    }

    #[test]
    fn test_remove_selected_moves_to_next_enabled() {
        let mut pane = pane(0, Side::Top);
        pane.add_tab(Tab::new("a", "a")).unwrap();
        pane.add_tab(Tab::new("b", "b").disabled(true)).unwrap();
        pane.add_tab(Tab::new("c", "c")).unwrap();
        pane.remove_tab(TabId::new("a")).unwrap();
        assert_eq!(pane.selected(), Some(TabId::new("c")));
        assert_eq!(
            pane.remove_tab(TabId::new("zzz")).unwrap_err(),
            TabError::UnknownTab(TabId::new("zzz"))
        );
    }

    #[test]
    fn test_close_respects_policy() {
        let mut pane = pane(2, Side::Top);
        assert_eq!(pane.close_tab(TabId::new("t1")), Ok(false));

        pane.set_closing_policy(TabClosingPolicy::SelectedTab);
        assert_eq!(pane.close_tab(TabId::new("t1")), Ok(false));
        assert_eq!(pane.close_tab(TabId::new("t0")), Ok(true));
        assert_eq!(
            pane.pop_events(),
            vec![TabPaneEvent::TabClosed(TabId::new("t0"))]
        );
    }

    #[test]
    fn test_content_rect_per_side() {
        let pane = pane(1, Side::Top);
        assert_eq!(pane.content_rect(), Rect::new(0.0, 20.0, 400.0, 280.0));
        let pane = self::pane(1, Side::Bottom);
        assert_eq!(pane.content_rect(), Rect::new(0.0, 0.0, 400.0, 280.0));
        assert_eq!(pane.header_area_rect(), Rect::new(0.0, 280.0, 400.0, 20.0));
        let pane = self::pane(1, Side::Left);
        assert_eq!(pane.content_rect(), Rect::new(20.0, 0.0, 380.0, 300.0));
        let pane = self::pane(1, Side::Right);
        assert_eq!(pane.header_area_rect(), Rect::new(380.0, 0.0, 20.0, 300.0));
    }

    #[test]
    fn test_local_transform_round_trips() {
        for side in [Side::Top, Side::Bottom, Side::Left, Side::Right] {
            let pane = pane(1, side);
            let local = Vec2::new(37.0, 5.0);
            assert_eq!(pane.to_header_local(pane.to_pane(local)), local, "{:?}", side);
        }
        let pane = pane(1, Side::Left);
        assert_eq!(pane.to_pane(Vec2::new(0.0, 0.0)), Vec2::new(0.0, 300.0));
    }

    #[test]
    fn test_hidden_area_has_no_thickness() {
        let pane = pane(0, Side::Top);
        assert!(!pane.header_area().is_visible());
        assert_eq!(pane.content_rect(), Rect::new(0.0, 0.0, 400.0, 300.0));
    }

    #[test]
    fn test_config_change_is_published() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut pane = pane(1, Side::Top);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = pane.on_config_changed(move |change| sink.borrow_mut().push(*change));

        pane.set_side(Side::Left);
        pane.set_side(Side::Left);
        assert_eq!(*seen.borrow(), vec![ConfigChange::Side(Side::Left)]);
        assert!(pane.take_dirty().contains(HeaderDirty::VISIBILITY));
    }

    #[test]
    fn test_sort_keeps_selection() {
        let mut pane = pane(3, Side::Top);
        pane.select(TabId::new("t1")).unwrap();
        pane.sort_tabs_by(|a, b| b.label.cmp(&a.label));
        let labels: Vec<&str> = pane.tabs().iter().map(|tab| tab.label.as_str()).collect();
        assert_eq!(labels, vec!["t2", "t1", "t0"]);
        assert_eq!(pane.selected(), Some(TabId::new("t1")));
        assert_eq!(pane.header_area().headers().index_of(TabId::new("t2")), Some(0));
    }

    #[test]
    fn test_menu_activation_selects() {
        let mut pane = pane(3, Side::Top);
        pane.show_tabs_menu(Vec2::new(390.0, 10.0));
        assert!(pane.tabs_menu().is_showing());
        assert_eq!(pane.activate_tabs_menu_item(2), Some(TabId::new("t2")));
        assert_eq!(pane.selected(), Some(TabId::new("t2")));
        assert!(!pane.tabs_menu().is_showing());
    }
}
