//! Tab identity and descriptors.

use std::fmt;

/// A stable identifier for a tab.
///
/// Ids built from the same key are equal, so a host can refer to tabs by
/// name without keeping the id around.
///
/// # Example
/// ```
/// use tabstrip::TabId;
///
/// assert_eq!(TabId::new("main.rs"), TabId::new("main.rs"));
/// assert_ne!(TabId::new("main.rs"), TabId::new("lib.rs"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(u64);

impl TabId {
    /// Create a tab id from a string key.
    ///
    /// Uses FNV-1a hash for fast, consistent hashing.
    pub fn new(key: &str) -> Self {
        Self(Self::hash_str(key))
    }

    /// Create a tab id from a raw u64 (for generated ids).
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    fn hash_str(s: &str) -> u64 {
        const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
        const FNV_PRIME: u64 = 0x100000001b3;

        let mut hash = FNV_OFFSET_BASIS;
        for byte in s.as_bytes() {
            hash ^= *byte as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        hash
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TabId({:#x})", self.0)
    }
}

impl From<&str> for TabId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Everything the engine needs to know about one tab.
///
/// Content, tooltips and context menus are owned by the host; the engine
/// only records whether they exist.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub id: TabId,
    pub label: String,
    pub icon: Option<String>,
    pub closable: bool,
    pub disabled: bool,
    pub tooltip: Option<String>,
    pub style_classes: Vec<String>,
    pub has_context_menu: bool,
}

impl Tab {
    /// Create a closable, enabled tab whose id is derived from `key`.
    pub fn new(key: &str, label: impl Into<String>) -> Self {
        Self::with_id(TabId::new(key), label)
    }

    pub fn with_id(id: TabId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            icon: None,
            closable: true,
            disabled: false,
            tooltip: None,
            style_classes: Vec::new(),
            has_context_menu: false,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn style_class(mut self, class: impl Into<String>) -> Self {
        self.style_classes.push(class.into());
        self
    }

    pub fn context_menu(mut self, has_menu: bool) -> Self {
        self.has_context_menu = has_menu;
        self
    }
}
