//! Dirty flags the host reads to decide what to re-layout or repaint.

use bitflags::bitflags;

bitflags! {
    /// What changed in the header engine since the host last asked.
    ///
    /// The engine only accumulates flags; the host drains them with
    /// [`TabPane::take_dirty`](crate::TabPane::take_dirty) after delivering
    /// events or ticking animations.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HeaderDirty: u16 {
        const NONE           = 0b0000_0000;

        /// Header positions or sizes changed.
        const LAYOUT         = 0b0000_0001;

        /// The scroll offset changed.
        const SCROLL         = 0b0000_0010;

        /// Scrollbar presence, visibility, opacity or metrics changed.
        const SCROLLBAR      = 0b0000_0100;

        /// Headers were added, removed, or reordered.
        const CHILDREN_ORDER = 0b0000_1000;

        /// The header area or the placeholder header was shown or hidden.
        const VISIBILITY     = 0b0001_0000;

        /// The selected tab changed.
        const SELECTION      = 0b0010_0000;

        /// The tabs menu was rebuilt, shown or hidden.
        const MENU           = 0b0100_0000;
    }
}

impl HeaderDirty {
    /// Returns true if header geometry must be recomputed.
    #[inline]
    pub fn needs_layout(&self) -> bool {
        self.intersects(Self::LAYOUT | Self::CHILDREN_ORDER | Self::VISIBILITY)
    }

    /// Returns true if only paint-level state changed.
    #[inline]
    pub fn is_paint_only(&self) -> bool {
        !self.is_empty() && !self.needs_layout() && !self.contains(Self::SCROLL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_flags() {
        assert!(HeaderDirty::LAYOUT.needs_layout());
        assert!(HeaderDirty::CHILDREN_ORDER.needs_layout());
        assert!(!HeaderDirty::SCROLLBAR.needs_layout());
        assert!(!HeaderDirty::NONE.needs_layout());
    }

    #[test]
    fn test_paint_only() {
        assert!(HeaderDirty::SCROLLBAR.is_paint_only());
        assert!((HeaderDirty::MENU | HeaderDirty::SELECTION).is_paint_only());
        assert!(!(HeaderDirty::SCROLLBAR | HeaderDirty::SCROLL).is_paint_only());
        assert!(!HeaderDirty::NONE.is_paint_only());
    }
}
