//! Popup menu listing every tab.
//!
//! The menu is a model only: one radio item per tab, in tab order. The host
//! draws it while it is shown and reports the activated item back through
//! [`TabPane::activate_tabs_menu_item`](crate::TabPane::activate_tabs_menu_item).

use tabstrip_core::math::Vec2;

use crate::tab::{Tab, TabId};

/// One radio item of the tabs menu.
#[derive(Debug, Clone, PartialEq)]
pub struct TabMenuItem {
    pub tab: TabId,
    pub label: String,
    pub icon: Option<String>,
    pub disabled: bool,
    /// Radio mark; set on the selected tab's item when the menu is shown.
    pub checked: bool,
}

impl TabMenuItem {
    fn new(tab: &Tab) -> Self {
        Self {
            tab: tab.id,
            label: tab.label.clone(),
            icon: tab.icon.clone(),
            disabled: tab.disabled,
            checked: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TabsMenu {
    items: Vec<TabMenuItem>,
    anchor: Option<Vec2>,
}

impl TabsMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TabMenuItem] {
        &self.items
    }

    pub fn is_showing(&self) -> bool {
        self.anchor.is_some()
    }

    /// Where the menu is shown, in pane coordinates.
    pub fn anchor(&self) -> Option<Vec2> {
        self.anchor
    }

    /// Rebuild the items from the tab list.
    pub(crate) fn rebuild(&mut self, tabs: &[Tab]) {
        let checked = self.items.iter().find(|item| item.checked).map(|item| item.tab);
        self.items = tabs.iter().map(TabMenuItem::new).collect();
        if let Some(id) = checked
            && let Some(item) = self.items.iter_mut().find(|item| item.tab == id)
        {
            item.checked = true;
        }
    }

    /// Show at `anchor`, marking the selected tab's item.
    pub(crate) fn show(&mut self, anchor: Vec2, selected: Option<TabId>) {
        if let Some(id) = selected
            && self.items.iter().any(|item| item.tab == id)
        {
            for item in &mut self.items {
                item.checked = item.tab == id;
            }
        }
        self.anchor = Some(anchor);
    }

    pub(crate) fn hide(&mut self) -> bool {
        self.anchor.take().is_some()
    }

    /// Resolve an activated item to the tab it selects.
    ///
    /// Disabled items resolve to nothing. Activation hides the menu.
    pub(crate) fn activate(&mut self, index: usize) -> Option<TabId> {
        let item = self.items.get(index)?;
        if item.disabled {
            return None;
        }
        let id = item.tab;
        self.hide();
        Some(id)
    }
}
