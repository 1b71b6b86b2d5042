//! Tab headers and the ordered collection the header area lays out.

use tabstrip_core::geometry::{Rect, Size, snap_size};
use tabstrip_core::platform::is_mac;

use crate::animation::Transition;
use crate::config::{TabClosingPolicy, TabPaneConfig};
use crate::measure::HeaderMeasure;
use crate::tab::{Tab, TabId};

/// Id carried by the placeholder header shown in an empty, always-visible strip.
pub const PLACEHOLDER_ID: TabId = TabId::from_raw(u64::MAX);

/// Open/close animation phase of a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderAnimationState {
    Showing,
    Hiding,
    #[default]
    None,
}

/// Label and close button placement inside a header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderInnerLayout {
    pub label: Rect<f32>,
    pub close_button: Option<Rect<f32>>,
    /// Keyboard focus ring, inset into the content side of the header.
    pub focus_indicator: Rect<f32>,
}

/// One visible header cell.
#[derive(Debug, Clone)]
pub struct TabHeaderItem {
    tab: Tab,
    selected: bool,
    label_size: Size<f32>,
    close_button_size: Size<f32>,
    show_close_button: bool,
    pref_width: f32,
    pref_height: f32,
    /// Open/close scale applied to the laid-out width.
    scale: f32,
    closing: bool,
    animation_state: HeaderAnimationState,
    pub(crate) transition: Option<Transition>,
    layout_x: f32,
    layout_y: f32,
    width: f32,
    height: f32,
    raised: bool,
    visible: bool,
    placeholder: bool,
}

impl TabHeaderItem {
    pub fn new(tab: Tab) -> Self {
        Self {
            tab,
            selected: false,
            label_size: Size::ZERO,
            close_button_size: Size::ZERO,
            show_close_button: false,
            pref_width: 0.0,
            pref_height: 0.0,
            scale: 1.0,
            closing: false,
            animation_state: HeaderAnimationState::None,
            transition: None,
            layout_x: 0.0,
            layout_y: 0.0,
            width: 0.0,
            height: 0.0,
            raised: false,
            visible: true,
            placeholder: false,
        }
    }

    /// An invisible header that only establishes the strip height.
    pub fn placeholder() -> Self {
        let mut item = Self::new(Tab::with_id(PLACEHOLDER_ID, ""));
        item.placeholder = true;
        item.visible = false;
        item
    }

    /// Re-measure the label and recompute preferred sizes.
    pub fn refresh(&mut self, measure: &dyn HeaderMeasure, config: &TabPaneConfig) {
        let label = measure.measure_label(&self.tab).sanitized();
        let close = measure.close_button_size().sanitized();
        self.label_size = Size::new(snap_size(label.width), snap_size(label.height));
        self.close_button_size = Size::new(snap_size(close.width), snap_size(close.height));
        self.show_close_button = !self.placeholder
            && self.tab.closable
            && match config.closing_policy {
                TabClosingPolicy::AllTabs => true,
                TabClosingPolicy::SelectedTab => self.selected,
                TabClosingPolicy::None => false,
            };

        let min_width = snap_size(config.tab_min_width);
        let max_width = snap_size(config.tab_max_width);
        let mut width = self.label_size.width;
        if self.show_close_button {
            width += self.close_button_size.width;
        }
        if width > max_width {
            width = max_width;
        } else if width < min_width {
            width = min_width;
        }
        self.pref_width = width + config.header_padding.horizontal();

        let min_height = snap_size(config.tab_min_height);
        let max_height = snap_size(config.tab_max_height);
        let mut height = self.label_size.height;
        if height > max_height {
            height = max_height;
        } else if height < min_height {
            height = min_height;
        }
        self.pref_height = height + config.header_padding.vertical();
    }

    /// Label and close button rectangles relative to the header's origin.
    pub fn inner_layout(&self, config: &TabPaneConfig) -> HeaderInnerLayout {
        let padding = config.header_padding;
        let inner_width = (self.width - padding.horizontal()).max(0.0);
        let inner_height = (self.height - padding.vertical()).max(0.0);
        let min_width = snap_size(config.tab_min_width);
        let max_width = snap_size(config.tab_max_width);
        let bounded = max_width < f32::MAX;

        let close_width = if self.show_close_button {
            self.close_button_size.width
        } else {
            0.0
        };
        let children_width = self.label_size.width + close_width;
        let mut label_width = self.label_size.width;
        if children_width > max_width && bounded {
            label_width = max_width - close_width;
        } else if children_width < min_width {
            label_width = min_width - close_width;
        }

        let animating = self.animation_state != HeaderAnimationState::None;
        if animating {
            label_width *= self.scale;
        }

        let label = Rect::new(padding.left, padding.top, label_width.max(0.0), inner_height);
        let close_button = (self.show_close_button && !animating).then(|| {
            let end = if bounded {
                inner_width.min(max_width)
            } else {
                inner_width
            };
            let y = ((self.height - self.close_button_size.height) * 0.5).max(0.0);
            Rect::new(
                padding.left + end - close_width,
                y,
                close_width,
                self.close_button_size.height,
            )
        });

        let (h_pad, v_pad) = if is_mac() { (2.0, 2.0) } else { (1.0, 3.0) };
        let focus_indicator = Rect::new(
            padding.left - h_pad,
            padding.top + v_pad,
            inner_width + 2.0 * h_pad,
            (inner_height - 2.0 * v_pad).max(0.0),
        );

        HeaderInnerLayout {
            label,
            close_button,
            focus_indicator,
        }
    }

    pub fn id(&self) -> TabId {
        self.tab.id
    }

    pub fn tab(&self) -> &Tab {
        &self.tab
    }

    pub(crate) fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn is_disabled(&self) -> bool {
        self.tab.disabled
    }

    pub fn pref_width(&self) -> f32 {
        self.pref_width
    }

    pub fn pref_height(&self) -> f32 {
        self.pref_height
    }

    pub fn label_size(&self) -> Size<f32> {
        self.label_size
    }

    /// Whether the closing policy gives this header a close button.
    pub fn shows_close_button(&self) -> bool {
        self.show_close_button
    }

    /// Whether the close button is drawn right now; hidden while animating.
    pub fn close_button_visible(&self) -> bool {
        self.show_close_button && self.animation_state == HeaderAnimationState::None
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub(crate) fn set_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(0.0, 1.0);
    }

    pub fn is_closing(&self) -> bool {
        self.closing
    }

    pub(crate) fn set_closing(&mut self, closing: bool) {
        self.closing = closing;
    }

    pub fn animation_state(&self) -> HeaderAnimationState {
        self.animation_state
    }

    pub(crate) fn set_animation_state(&mut self, state: HeaderAnimationState) {
        self.animation_state = state;
    }

    pub fn is_animating(&self) -> bool {
        self.transition.as_ref().is_some_and(Transition::is_running)
    }

    pub fn layout_x(&self) -> f32 {
        self.layout_x
    }

    pub(crate) fn set_layout_x(&mut self, x: f32) {
        self.layout_x = x;
    }

    pub fn layout_y(&self) -> f32 {
        self.layout_y
    }

    pub(crate) fn relocate(&mut self, x: f32, y: f32) {
        self.layout_x = x;
        self.layout_y = y;
    }

    pub(crate) fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Laid-out width, which is the preferred width times the scale.
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Bounds in headers-region coordinates.
    pub fn bounds(&self) -> Rect<f32> {
        Rect::new(self.layout_x, self.layout_y, self.width, self.height)
    }

    /// Drawn above its siblings while dragged.
    pub fn is_raised(&self) -> bool {
        self.raised
    }

    pub(crate) fn set_raised(&mut self, raised: bool) {
        self.raised = raised;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }
}

/// Ordered headers; index is visual order.
///
/// Outside of a drag-reorder gesture the order also matches the pane's tab
/// order, apart from headers still playing their close animation.
#[derive(Debug, Clone, Default)]
pub struct HeaderCollection {
    items: Vec<TabHeaderItem>,
}

impl HeaderCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TabHeaderItem> {
        self.items.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, TabHeaderItem> {
        self.items.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&TabHeaderItem> {
        self.items.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut TabHeaderItem> {
        self.items.get_mut(index)
    }

    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| !item.placeholder && item.id() == id)
    }

    pub fn find(&self, id: TabId) -> Option<&TabHeaderItem> {
        self.index_of(id).and_then(|index| self.items.get(index))
    }

    pub(crate) fn find_mut(&mut self, id: TabId) -> Option<&mut TabHeaderItem> {
        let index = self.index_of(id)?;
        self.items.get_mut(index)
    }

    pub(crate) fn insert(&mut self, index: usize, item: TabHeaderItem) {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Option<TabHeaderItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Reorder the non-closing headers to follow `order`.
    ///
    /// Closing headers keep their slots; ids missing from `order` keep their
    /// relative order after the listed ones.
    pub(crate) fn arrange(&mut self, order: &[TabId]) {
        let slots: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.closing && !item.placeholder)
            .map(|(index, _)| index)
            .collect();
        if slots.is_empty() {
            return;
        }

        let mut live: Vec<TabHeaderItem> = slots.iter().map(|&i| self.items[i].clone()).collect();
        live.sort_by_key(|item| {
            order
                .iter()
                .position(|id| *id == item.id())
                .unwrap_or(usize::MAX)
        });
        for (slot, item) in slots.into_iter().zip(live) {
            self.items[slot] = item;
        }
    }

    pub fn has_placeholder(&self) -> bool {
        self.items.iter().any(|item| item.placeholder)
    }

    pub(crate) fn add_placeholder(&mut self, mut item: TabHeaderItem) {
        item.placeholder = true;
        item.visible = false;
        self.items.push(item);
    }

    /// Sum of preferred widths of visible headers.
    ///
    /// Closing headers only count when `measure_closing` is set, so the
    /// overflow test ignores tabs that are on their way out.
    pub fn pref_width(&self, measure_closing: bool) -> f32 {
        let width: f32 = self
            .items
            .iter()
            .filter(|item| item.visible && (measure_closing || !item.closing))
            .map(|item| item.pref_width)
            .sum();
        snap_size(width)
    }

    /// Tallest preferred header height, placeholder included.
    pub fn pref_height(&self) -> f32 {
        let height = self
            .items
            .iter()
            .map(|item| item.pref_height)
            .fold(0.0_f32, f32::max);
        snap_size(height)
    }

    /// Sum of every header's preferred width; the scrollable content length.
    pub fn total_width(&self) -> f32 {
        self.items.iter().map(|item| snap_size(item.pref_width)).sum()
    }

    /// Unscrolled `[start, end)` of a header, from preferred widths.
    pub fn extent_of(&self, id: TabId) -> Option<(f32, f32)> {
        let mut start = 0.0;
        for item in &self.items {
            let width = snap_size(item.pref_width);
            if !item.placeholder && item.id() == id {
                return Some((start, start + width));
            }
            start += width;
        }
        None
    }

    /// Position of `id` among headers that are not closing.
    pub fn logical_index_of(&self, id: TabId) -> Option<usize> {
        let mut logical = 0;
        for item in &self.items {
            if item.placeholder || item.closing {
                continue;
            }
            if item.id() == id {
                return Some(logical);
            }
            logical += 1;
        }
        None
    }

    /// The header under `x`, in headers-region coordinates.
    pub fn hit_test(&self, x: f32) -> Option<usize> {
        // The raised header is drawn on top, so it wins overlaps.
        let hit = |item: &TabHeaderItem| {
            item.visible && !item.placeholder && x >= item.layout_x && x < item.layout_x + item.width
        };
        self.items
            .iter()
            .position(|item| item.raised && hit(item))
            .or_else(|| self.items.iter().position(hit))
    }
}
