//! Error types for host-facing tab pane operations.

use crate::tab::TabId;

/// Errors returned by [`TabPane`](crate::TabPane) operations that a host can misuse.
///
/// Geometry and pointer input never produce errors; out-of-range values are
/// clamped and stray events are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    /// No tab with this id belongs to the pane.
    UnknownTab(TabId),
    /// A tab with this id is already part of the pane.
    DuplicateTab(TabId),
    /// The drag context was empty when a drop was attempted.
    EmptyDragContext,
    /// The drop came from a pane that is not the recorded drag source.
    NotDragSource,
    /// The source pane no longer owns the dragged tab.
    TabNotOwned(TabId),
}

impl std::fmt::Display for TabError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TabError::UnknownTab(id) => write!(f, "Tab {} not found", id),
            TabError::DuplicateTab(id) => write!(f, "Tab {} is already in the pane", id),
            TabError::EmptyDragContext => write!(f, "Drag context holds no tab"),
            TabError::NotDragSource => write!(f, "Pane is not the source of the current drag"),
            TabError::TabNotOwned(id) => write!(f, "Source pane no longer owns tab {}", id),
        }
    }
}

impl std::error::Error for TabError {}

/// Result type for tab pane operations.
pub type TabResult<T> = Result<T, TabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let id = TabId::new("editor");
        assert_eq!(
            TabError::UnknownTab(id).to_string(),
            format!("Tab {} not found", id)
        );
        assert_eq!(
            TabError::EmptyDragContext.to_string(),
            "Drag context holds no tab"
        );
    }
}
