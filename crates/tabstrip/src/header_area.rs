//! The header area: headers region, aux areas and scrollbar.
//!
//! [`TabHeaderArea`] owns every piece of header state: the header
//! collection, the scroll offset, the scrollbar and its binding, and the
//! drag-reorder session. It works in header-area local space and never
//! touches the pane's tab list; requests that change it (select, close,
//! commit a reorder) are queued as [`HeaderAction`]s and drained by the pane.

use tabstrip_core::geometry::{Rect, sanitize_extent, snap_size};
use tabstrip_core::math::Vec2;
use tabstrip_core::profiling::profile_function;

use crate::config::{HeaderAreaPolicy, TabDragPolicy, TabPaneConfig};
use crate::dirty::HeaderDirty;
use crate::event::{MouseButton, PointerEvent, PropertyChange, WheelEvent};
use crate::header::{HeaderCollection, TabHeaderItem};
use crate::layout::{
    AreaInput, AuxArea, HeaderAreaLayout, ScrollBarSpec, area_pref_size, layout_area,
    place_headers, tabs_fit, visible_width,
};
use crate::measure::HeaderMeasure;
use crate::reorder::{DragSession, ReleaseOutcome, ReorderCommit};
use crate::scroll::ScrollState;
use crate::scrollbar::{ScrollBarBinding, TabScrollBar};
use crate::tab::{Tab, TabId};
use crate::transitions;

/// Requests the header area makes of its pane.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderAction {
    /// A header was pressed with the primary button.
    Select(TabId),
    /// A close button was pressed, or a header middle-clicked.
    Close(TabId),
    /// A header with a context menu was pressed with the secondary button.
    ContextMenu { tab: TabId, position: Vec2 },
    /// A drag-reorder settled on a new index.
    Reordered(ReorderCommit),
    /// A header finished its close animation and left the collection.
    HeaderRemoved(TabId),
}

/// Which auxiliary region to set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxRegion {
    First,
    Sticky,
    Last,
}

pub struct TabHeaderArea {
    config: TabPaneConfig,
    measure: Box<dyn HeaderMeasure>,
    headers: HeaderCollection,
    scroll: ScrollState,
    scrollbar: TabScrollBar,
    binding: ScrollBarBinding,
    drag: Option<DragSession>,
    first: AuxArea,
    sticky: AuxArea,
    last: AuxArea,
    /// Length along the strip.
    length: f32,
    visible: bool,
    layout: HeaderAreaLayout,
    /// Pointer over the headers viewport.
    hovered: bool,
    selected: Option<TabId>,
    dirty: HeaderDirty,
    actions: Vec<HeaderAction>,
}

impl std::fmt::Debug for TabHeaderArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabHeaderArea")
            .field("headers", &self.headers.len())
            .field("offset", &self.scroll.offset())
            .field("visible", &self.visible)
            .field("layout", &self.layout)
            .field("drag", &self.drag)
            .finish()
    }
}

impl TabHeaderArea {
    pub fn new(config: TabPaneConfig, measure: Box<dyn HeaderMeasure>) -> Self {
        Self {
            config,
            measure,
            headers: HeaderCollection::new(),
            scroll: ScrollState::new(),
            scrollbar: TabScrollBar::new(),
            binding: ScrollBarBinding::default(),
            drag: None,
            first: AuxArea::EMPTY,
            sticky: AuxArea::EMPTY,
            last: AuxArea::EMPTY,
            length: 0.0,
            visible: false,
            layout: HeaderAreaLayout::default(),
            hovered: false,
            selected: None,
            dirty: HeaderDirty::empty(),
            actions: Vec::new(),
        }
    }

    pub fn config(&self) -> &TabPaneConfig {
        &self.config
    }

    pub fn headers(&self) -> &HeaderCollection {
        &self.headers
    }

    pub fn layout(&self) -> &HeaderAreaLayout {
        &self.layout
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn is_overflowed(&self) -> bool {
        !self.layout.fits
    }

    pub fn headers_region_width(&self) -> f32 {
        self.layout.region.width
    }

    pub fn clip_width(&self) -> f32 {
        self.layout.clip.width
    }

    pub fn scrollbar(&self) -> Option<&TabScrollBar> {
        self.config.scrollbar_enabled.then_some(&self.scrollbar)
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn aux_area(&self, region: AuxRegion) -> AuxArea {
        match region {
            AuxRegion::First => self.first,
            AuxRegion::Sticky => self.sticky,
            AuxRegion::Last => self.last,
        }
    }

    /// Scrollbar rotation inside the area, in degrees.
    pub fn scrollbar_rotation(&self) -> f32 {
        if self.config.side.builds_from_end() {
            180.0
        } else {
            0.0
        }
    }

    pub(crate) fn pop_actions(&mut self) -> Vec<HeaderAction> {
        std::mem::take(&mut self.actions)
    }

    pub(crate) fn take_dirty(&mut self) -> HeaderDirty {
        std::mem::replace(&mut self.dirty, HeaderDirty::empty())
    }

    pub(crate) fn mark(&mut self, flags: HeaderDirty) {
        self.dirty |= flags;
    }

    /// Layout inputs with the thickness left at zero.
    fn base_input(&self) -> AreaInput {
        AreaInput {
            side: self.config.side,
            width: self.length,
            height: 0.0,
            insets: self.config.header_area_insets,
            first: self.first,
            sticky: self.sticky,
            last: self.last,
            headers_width: self.headers.pref_width(false),
            headers_width_with_closing: self.headers.pref_width(true),
            headers_height: self.headers.pref_height(),
            placeholder: self.headers.has_placeholder(),
            scrollbar: self.config.scrollbar_enabled.then_some(ScrollBarSpec {
                placement: self.config.scrollbar_placement,
                stick_to_edge: self.config.scrollbar_stick_to_edge,
                thickness: self.config.scrollbar_thickness,
            }),
        }
    }

    fn input(&self) -> AreaInput {
        AreaInput {
            height: self.thickness(),
            ..self.base_input()
        }
    }

    /// Preferred thickness across the strip; zero while hidden.
    pub fn thickness(&self) -> f32 {
        if !self.visible {
            return 0.0;
        }
        snap_size(area_pref_size(&self.base_input()).height)
    }

    /// Preferred length along the strip.
    pub fn pref_length(&self) -> f32 {
        snap_size(area_pref_size(&self.base_input()).width)
    }

    /// Whether every header fits at the current length.
    pub fn tabs_fit(&self) -> bool {
        tabs_fit(&self.input())
    }

    // ---------------------------------------------------------------------
    // Layout
    // ---------------------------------------------------------------------

    pub(crate) fn resize(&mut self, length: f32) {
        let length = sanitize_extent(length);
        if length != self.length {
            self.length = length;
            self.scroll.invalidate();
            self.dirty |= HeaderDirty::LAYOUT;
        }
        self.relayout();
    }

    /// Recompute the offset, the area geometry and every header position.
    pub(crate) fn relayout(&mut self) {
        profile_function!();

        let input = self.input();
        let fits = tabs_fit(&input);
        self.scroll
            .set_metrics(visible_width(&input), self.headers.total_width());
        let selected = self.selected.and_then(|id| self.headers.extent_of(id));
        if self.scroll.recompute(fits, selected) {
            tracing::trace!("Scroll offset now {}", self.scroll.offset());
            self.dirty |= HeaderDirty::SCROLL;
        }

        let layout = layout_area(&input);
        let drag = self.drag.as_ref();
        place_headers(
            &mut self.headers,
            self.config.side,
            layout.region.width,
            self.scroll.offset(),
            |id| drag.is_some_and(|session| session.pins(id)),
        );
        if layout != self.layout {
            self.dirty |= HeaderDirty::LAYOUT;
        }
        self.layout = layout;
        self.sync_scrollbar();
    }

    /// Show, hide and re-range the scrollbar after layout or hover changes.
    fn sync_scrollbar(&mut self) {
        if !self.config.scrollbar_enabled {
            return;
        }
        let fits = self.layout.fits;
        let track = self.layout.scrollbar.map_or(0.0, |bar| bar.width);
        let mut changed = false;
        if self.scrollbar.is_visible() {
            if fits {
                changed |= self.scrollbar.hide(false);
            } else if !self.hovered && !self.scrollbar.is_thumb_dragging() {
                changed |= self.scrollbar.hide(true);
            } else {
                changed |= self.scrollbar.show();
            }
            changed |= self.update_scrollbar_metrics(track);
        } else if !fits && self.hovered {
            changed |= self.update_scrollbar_metrics(track);
            changed |= self.scrollbar.show();
        }
        if changed {
            self.dirty |= HeaderDirty::SCROLLBAR;
        }
    }

    fn update_scrollbar_metrics(&mut self, track: f32) -> bool {
        let _guard = self.binding.suppress();
        let mut changed = self
            .scrollbar
            .set_metrics(track, self.layout.region.width);
        let value = (-self.scroll.offset()).min(self.scrollbar.max());
        if let Some(change) = self.scrollbar.set_value(value) {
            self.on_scrollbar_value_changed(change);
            changed = true;
        }
        changed
    }

    fn on_scrollbar_value_changed(&mut self, change: PropertyChange<f32>) {
        self.dirty |= HeaderDirty::SCROLLBAR;
        if let Some(delta) = self.binding.offset_delta(change) {
            self.scroll_tabs_by(delta);
        }
    }

    /// Scroll by `delta` in header-area local space.
    fn scroll_tabs_by(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        if self.scroll.scroll_by(snap_size(delta)) {
            self.dirty |= HeaderDirty::SCROLL | HeaderDirty::LAYOUT;
            self.relayout();
        }
    }

    /// Scroll by `delta` along the visual reading direction.
    pub(crate) fn scroll_headers_by(&mut self, delta: f32) {
        let delta = if self.config.side.builds_from_end() {
            -delta
        } else {
            delta
        };
        self.scroll_tabs_by(delta);
    }

    /// Set the scrollbar value as the user would by dragging it.
    pub(crate) fn set_scrollbar_value(&mut self, value: f32) {
        if !self.config.scrollbar_enabled {
            return;
        }
        if let Some(change) = self.scrollbar.set_value(value) {
            self.on_scrollbar_value_changed(change);
        }
    }

    pub(crate) fn scrollbar_step(&mut self, forward: bool) {
        if !self.config.scrollbar_enabled {
            return;
        }
        let change = if forward {
            self.scrollbar.increment()
        } else {
            self.scrollbar.decrement()
        };
        if let Some(change) = change {
            self.on_scrollbar_value_changed(change);
        }
    }

    // ---------------------------------------------------------------------
    // Configuration and aux areas
    // ---------------------------------------------------------------------

    pub(crate) fn set_config(&mut self, mut config: TabPaneConfig) {
        config.sanitize();
        let old = std::mem::replace(&mut self.config, config);
        if old.side != self.config.side {
            self.cancel_drag_session();
            self.scroll.invalidate();
        }
        if self.config.drag_policy == TabDragPolicy::Fixed {
            self.cancel_drag_session();
        }
        if old.scrollbar_enabled && !self.config.scrollbar_enabled {
            self.scrollbar.reset();
            self.dirty |= HeaderDirty::SCROLLBAR;
        }
        self.refresh_headers();
        self.relayout();
    }

    pub(crate) fn set_aux_area(&mut self, region: AuxRegion, area: AuxArea) {
        let area = area.sanitized();
        let slot = match region {
            AuxRegion::First => &mut self.first,
            AuxRegion::Sticky => &mut self.sticky,
            AuxRegion::Last => &mut self.last,
        };
        if *slot != area {
            *slot = area;
            self.relayout();
        }
    }

    /// Re-measure every header, e.g. after a font or policy change.
    pub(crate) fn refresh_headers(&mut self) {
        for header in self.headers.iter_mut() {
            header.refresh(self.measure.as_ref(), &self.config);
        }
        self.dirty |= HeaderDirty::LAYOUT;
    }

    pub(crate) fn set_measure(&mut self, measure: Box<dyn HeaderMeasure>) {
        self.measure = measure;
        self.refresh_headers();
        self.relayout();
    }

    // ---------------------------------------------------------------------
    // Structural changes
    // ---------------------------------------------------------------------

    /// Show or hide the area and the placeholder for the current tab count.
    ///
    /// Runs before a tab list change is processed.
    pub(crate) fn update_no_tabs_state(&mut self, tabs_empty: bool) {
        let was_visible = self.visible;
        let had_placeholder = self.headers.has_placeholder();
        if tabs_empty {
            if self.config.header_area_policy == HeaderAreaPolicy::AlwaysVisible {
                self.visible = true;
                if !had_placeholder {
                    let mut placeholder = TabHeaderItem::placeholder();
                    placeholder.refresh(self.measure.as_ref(), &self.config);
                    self.headers.add_placeholder(placeholder);
                }
            } else {
                self.visible = false;
                self.remove_placeholder();
            }
        } else {
            self.visible = true;
            self.remove_placeholder();
        }
        if was_visible != self.visible || had_placeholder != self.headers.has_placeholder() {
            tracing::debug!(
                "Header area visible: {}, placeholder: {}",
                self.visible,
                self.headers.has_placeholder()
            );
            self.dirty |= HeaderDirty::VISIBILITY;
        }
    }

    fn remove_placeholder(&mut self) {
        if let Some(index) = self.headers.iter().position(TabHeaderItem::is_placeholder) {
            self.headers.remove_at(index);
        }
    }

    fn removed(&mut self, ids: impl IntoIterator<Item = TabId>) {
        for id in ids {
            self.actions.push(HeaderAction::HeaderRemoved(id));
            self.dirty |= HeaderDirty::CHILDREN_ORDER;
        }
    }

    /// Insert headers for `tabs`, the first at tab index `from`.
    pub(crate) fn add_tabs(&mut self, from: usize, tabs: &[Tab]) {
        let removed = transitions::finish_hiding(&mut self.headers);
        self.removed(removed);
        for (i, tab) in tabs.iter().enumerate() {
            if let Some(gone) = transitions::stop_current_animation(&mut self.headers, tab.id) {
                self.removed([gone]);
            }
            let selected = self.selected == Some(tab.id);
            transitions::add_tab(
                &mut self.headers,
                from + i,
                tab.clone(),
                selected,
                self.measure.as_ref(),
                &self.config,
            );
        }
        if !tabs.is_empty() {
            self.dirty |= HeaderDirty::CHILDREN_ORDER;
            self.scroll.invalidate();
            self.relayout();
        }
    }

    /// Close the headers of `ids`.
    pub(crate) fn remove_tabs(&mut self, ids: &[TabId]) {
        for &id in ids {
            if let Some(gone) = transitions::remove_tab(&mut self.headers, id, &self.config) {
                self.removed([gone]);
            }
        }
        if !ids.is_empty() {
            self.dirty |= HeaderDirty::CHILDREN_ORDER;
            self.scroll.invalidate();
            self.relayout();
        }
    }

    /// Replay a permutation of the tab list without animating.
    pub(crate) fn permute(&mut self, order: &[TabId]) {
        let removed = transitions::finish_all(&mut self.headers);
        self.removed(removed);
        self.headers.arrange(order);
        self.dirty |= HeaderDirty::CHILDREN_ORDER;
        self.scroll.invalidate();
        self.relayout();
    }

    /// Move live headers to match `order` after a committed reorder.
    pub(crate) fn arrange(&mut self, order: &[TabId]) {
        self.headers.arrange(order);
        self.relayout();
    }

    /// Push updated descriptors into existing headers.
    pub(crate) fn update_tabs(&mut self, tabs: &[Tab]) {
        for tab in tabs {
            if let Some(header) = self.headers.find_mut(tab.id)
                && header.tab() != tab
            {
                header.set_tab(tab.clone());
                header.refresh(self.measure.as_ref(), &self.config);
                self.dirty |= HeaderDirty::LAYOUT;
            }
        }
        self.relayout();
    }

    pub(crate) fn set_selected(&mut self, selected: Option<TabId>) {
        if self.selected == selected {
            return;
        }
        self.selected = selected;
        for header in self.headers.iter_mut() {
            let is_selected = !header.is_placeholder() && Some(header.id()) == selected;
            header.set_selected(is_selected);
            header.refresh(self.measure.as_ref(), &self.config);
        }
        self.dirty |= HeaderDirty::SELECTION;
        self.scroll.invalidate();
        self.relayout();
    }

    // ---------------------------------------------------------------------
    // Animations
    // ---------------------------------------------------------------------

    pub fn is_animating(&self) -> bool {
        transitions::is_animating(&self.headers)
            || self.drag.as_ref().is_some_and(DragSession::is_animating)
            || self.scrollbar.is_fading()
    }

    /// Advance every animation by `dt` seconds.
    pub(crate) fn tick(&mut self, dt: f32) {
        let (mut changed, removed) = transitions::tick(&mut self.headers, dt);
        self.removed(removed);

        if let Some(drag) = self.drag.as_mut() {
            changed |= drag.is_animating();
            if let Some(commit) = drag.tick(&mut self.headers, dt) {
                self.drag = None;
                self.committed(commit);
            }
        }

        if self.scrollbar.tick(dt) {
            self.dirty |= HeaderDirty::SCROLLBAR;
        }
        if changed {
            self.dirty |= HeaderDirty::LAYOUT;
            self.relayout();
        }
    }

    fn committed(&mut self, commit: Option<ReorderCommit>) {
        if let Some(commit) = commit {
            self.actions.push(HeaderAction::Reordered(commit));
            self.dirty |= HeaderDirty::CHILDREN_ORDER;
        }
        self.dirty |= HeaderDirty::LAYOUT;
        self.relayout();
    }

    /// Complete a settling reorder right away.
    pub(crate) fn finish_drag_animations(&mut self) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        if let Some(commit) = drag.finish(&mut self.headers) {
            self.drag = None;
            self.committed(commit);
        }
    }

    /// Drop the drag session without committing.
    ///
    /// Headers keep whatever order finished slides gave them until the
    /// caller arranges them.
    fn cancel_drag_session(&mut self) -> bool {
        let Some(mut drag) = self.drag.take() else {
            return false;
        };
        tracing::debug!("Drag of {} cancelled", drag.dragged());
        drag.end(&mut self.headers);
        self.dirty |= HeaderDirty::LAYOUT;
        true
    }

    pub(crate) fn cancel_drag(&mut self, order: &[TabId]) -> bool {
        if !self.cancel_drag_session() {
            return false;
        }
        self.headers.arrange(order);
        self.scroll.invalidate();
        self.relayout();
        true
    }

    // ---------------------------------------------------------------------
    // Pointer input, header-area local coordinates
    // ---------------------------------------------------------------------

    fn region_x(&self, pos: Vec2) -> f32 {
        pos.x - self.layout.region.x
    }

    /// Index of the header under `pos`, if it is inside the viewport.
    pub fn header_index_at(&self, pos: Vec2) -> Option<usize> {
        let region = self.layout.region;
        if pos.y < region.y || pos.y > region.max_y() {
            return None;
        }
        let x = self.region_x(pos);
        let clip = self.layout.clip;
        if x < clip.x || x > clip.max_x() {
            return None;
        }
        let index = self.headers.hit_test(x)?;
        let header = self.headers.get(index)?;
        let y = pos.y - region.y;
        (y >= header.layout_y() && y <= header.layout_y() + header.height()).then_some(index)
    }

    /// Id of the header under `pos`; hosts use it for tooltips.
    pub fn header_at(&self, pos: Vec2) -> Option<TabId> {
        self.header_index_at(pos)
            .and_then(|index| self.headers.get(index))
            .map(TabHeaderItem::id)
    }

    /// Close button bounds of a header, in header-area local coordinates.
    pub fn close_button_bounds(&self, id: TabId) -> Option<Rect<f32>> {
        let header = self.headers.find(id)?;
        let button = header.inner_layout(&self.config).close_button?;
        Some(Rect::new(
            self.layout.region.x + header.layout_x() + button.x,
            self.layout.region.y + header.layout_y() + button.y,
            button.width,
            button.height,
        ))
    }

    fn visible_scrollbar_rect(&self) -> Option<Rect<f32>> {
        if !self.config.scrollbar_enabled || !self.scrollbar.is_visible() {
            return None;
        }
        self.layout.scrollbar
    }

    /// Map an area point into scrollbar-local space, undoing its rotation.
    fn scrollbar_local(&self, pos: Vec2, bar: &Rect<f32>) -> Vec2 {
        if self.config.side.builds_from_end() {
            Vec2::new(bar.max_x() - pos.x, bar.max_y() - pos.y)
        } else {
            Vec2::new(pos.x - bar.x, pos.y - bar.y)
        }
    }

    pub(crate) fn pointer_moved(&mut self, pos: Vec2) {
        let over = self.layout.is_over_clip(self.config.side, pos.x);
        if over != self.hovered {
            self.hovered = over;
            self.sync_scrollbar();
        }
    }

    pub(crate) fn pointer_exited(&mut self) {
        if self.hovered {
            self.hovered = false;
            self.sync_scrollbar();
        }
    }

    /// Returns true if the press hit the scrollbar or a header.
    pub(crate) fn pointer_pressed(&mut self, event: PointerEvent) -> bool {
        if let Some(bar) = self.visible_scrollbar_rect()
            && bar.contains(event.pos)
        {
            if event.button == MouseButton::Left {
                let local = self.scrollbar_local(event.pos, &bar);
                let track = Rect::new(0.0, 0.0, bar.width, bar.height);
                if self.scrollbar.hit_test_thumb(local, &track) {
                    self.scrollbar.start_thumb_drag(local.x, &track);
                    self.dirty |= HeaderDirty::SCROLLBAR;
                } else if let Some(change) = self.scrollbar.page_towards(local.x, &track) {
                    self.on_scrollbar_value_changed(change);
                }
            }
            return true;
        }

        let Some(index) = self.header_index_at(event.pos) else {
            return false;
        };
        let Some(header) = self.headers.get(index) else {
            return false;
        };
        if header.is_placeholder() {
            return false;
        }
        if header.is_disabled() || header.is_closing() {
            return true;
        }
        let id = header.id();
        match event.button {
            MouseButton::Middle => {
                if header.shows_close_button() {
                    self.actions.push(HeaderAction::Close(id));
                }
            }
            MouseButton::Right => {
                if header.tab().has_context_menu {
                    self.actions.push(HeaderAction::ContextMenu {
                        tab: id,
                        position: event.pos,
                    });
                }
            }
            MouseButton::Left => {
                let on_close = header.close_button_visible()
                    && self
                        .close_button_bounds(id)
                        .is_some_and(|bounds| bounds.contains(event.pos));
                if on_close {
                    self.actions.push(HeaderAction::Close(id));
                    return true;
                }
                self.actions.push(HeaderAction::Select(id));
                if self.config.drag_policy == TabDragPolicy::Reorder {
                    self.finish_drag_animations();
                    // Slides index into the collection, so no header may
                    // drop out of it while the gesture runs.
                    let gone = transitions::finish_hiding(&mut self.headers);
                    if !gone.is_empty() {
                        self.removed(gone);
                        self.relayout();
                    }
                    let x = self.region_x(event.pos);
                    self.drag = DragSession::start(&mut self.headers, id, self.config.side, x);
                    self.dirty |= HeaderDirty::LAYOUT;
                }
            }
        }
        true
    }

    pub(crate) fn pointer_dragged(&mut self, pos: Vec2) {
        if self.scrollbar.is_thumb_dragging() {
            if let Some(bar) = self.layout.scrollbar {
                let local = self.scrollbar_local(pos, &bar);
                let track = Rect::new(0.0, 0.0, bar.width, bar.height);
                if let Some(change) = self.scrollbar.update_thumb_drag(local.x, &track) {
                    self.on_scrollbar_value_changed(change);
                }
            }
            return;
        }

        let x = self.region_x(pos);
        let region_width = self.layout.region.width;
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        if drag.drag_to(&mut self.headers, x, region_width) {
            tracing::trace!("Dragged header to region x {}", x);
            self.dirty |= HeaderDirty::LAYOUT;
            self.relayout();
        }
    }

    pub(crate) fn pointer_released(&mut self, event: PointerEvent) {
        if event.button != MouseButton::Left {
            return;
        }
        if self.scrollbar.end_thumb_drag() {
            self.dirty |= HeaderDirty::SCROLLBAR;
            if !self.hovered {
                self.sync_scrollbar();
            }
            return;
        }

        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        match drag.release(&self.headers) {
            ReleaseOutcome::Reset => {
                drag.end(&mut self.headers);
                self.drag = None;
                self.dirty |= HeaderDirty::LAYOUT;
                self.scroll.invalidate();
                self.relayout();
            }
            ReleaseOutcome::Settling => {
                self.scroll.invalidate();
            }
        }
    }

    /// Wheel over the header area.
    pub(crate) fn wheel(&mut self, event: WheelEvent) {
        let Vec2 { x: dx, y: dy } = event.delta;
        let delta = if self.config.side.is_horizontal() {
            if dy.abs() > dx.abs() { dy } else { dx }
        } else {
            -dy
        };
        self.scroll_tabs_by(delta);
    }
}
