//! Scroll offset of the headers region.
//!
//! The offset is a single signed scalar, `<= 0`, measured along the strip.
//! It is clamped against the last known visible and content widths so the
//! first header never detaches from the leading edge and no gap opens after
//! the last header.

use tabstrip_core::geometry::sanitize_extent;

/// Offset changes at or below this are ignored.
pub const OFFSET_EPSILON: f32 = 1e-3;

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    offset: f32,
    /// Set when the selected header must be brought into view on next layout.
    dirty: bool,
    content_width: f32,
    visible_width: f32,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            dirty: true,
            content_width: 0.0,
            visible_width: 0.0,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    pub fn visible_width(&self) -> f32 {
        self.visible_width
    }

    /// Mark the offset stale so the next recompute re-runs ensure-visible.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn set_metrics(&mut self, visible_width: f32, content_width: f32) {
        self.visible_width = visible_width.max(0.0);
        self.content_width = sanitize_extent(content_width);
    }

    /// The most negative offset the current metrics allow.
    pub fn min_offset(&self) -> f32 {
        (self.visible_width - self.content_width).min(0.0)
    }

    fn clamp(&self, offset: f32) -> f32 {
        if !offset.is_finite() {
            return self.offset;
        }
        offset.clamp(self.min_offset(), 0.0)
    }

    /// Clamp and store a new offset.
    ///
    /// Returns true if the offset moved by more than [`OFFSET_EPSILON`].
    pub fn set_offset(&mut self, offset: f32) -> bool {
        let clamped = self.clamp(offset);
        if (clamped - self.offset).abs() > OFFSET_EPSILON {
            self.offset = clamped;
            true
        } else {
            false
        }
    }

    /// Add `delta` to the offset and clamp.
    pub fn scroll_by(&mut self, delta: f32) -> bool {
        if !delta.is_finite() {
            return false;
        }
        self.set_offset(self.offset + delta)
    }

    /// Scroll the minimum amount that makes `[start, end)` visible.
    pub fn ensure_visible(&mut self, start: f32, end: f32) -> bool {
        if start < -self.offset {
            self.set_offset(-start)
        } else if end > self.visible_width - self.offset {
            self.set_offset(self.visible_width - end)
        } else {
            false
        }
    }

    /// Layout-time update.
    ///
    /// When everything fits the offset is forced to zero. Otherwise a stale
    /// offset first brings `selected` (its unscrolled extent) into view, then
    /// the offset is re-clamped against the current metrics.
    pub fn recompute(&mut self, fits: bool, selected: Option<(f32, f32)>) -> bool {
        if fits {
            return self.set_offset(0.0);
        }
        let mut changed = false;
        if self.dirty {
            if let Some((start, end)) = selected {
                changed |= self.ensure_visible(start, end);
            }
            self.dirty = false;
        }
        changed | self.set_offset(self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overflowing() -> ScrollState {
        let mut scroll = ScrollState::new();
        scroll.set_metrics(500.0, 2000.0);
        scroll
    }

    #[test]
    fn test_clamp_bounds() {
        let mut scroll = overflowing();
        assert!(scroll.scroll_by(-1000.0));
        assert_eq!(scroll.offset(), -1000.0);
        assert!(scroll.scroll_by(-1000.0));
        assert_eq!(scroll.offset(), -1500.0);
        assert!(!scroll.scroll_by(-1.0));
        assert!(scroll.scroll_by(5000.0));
        assert_eq!(scroll.offset(), 0.0);
    }

    #[test]
    fn test_small_changes_suppressed() {
        let mut scroll = overflowing();
        assert!(!scroll.scroll_by(-0.0005));
        assert_eq!(scroll.offset(), 0.0);
    }

    #[test]
    fn test_fit_forces_zero() {
        let mut scroll = overflowing();
        scroll.scroll_by(-300.0);
        scroll.set_metrics(500.0, 400.0);
        assert!(scroll.recompute(true, None));
        assert_eq!(scroll.offset(), 0.0);
        assert!(!scroll.scroll_by(-50.0));
    }

    #[test]
    fn test_ensure_visible_both_edges() {
        let mut scroll = overflowing();
        scroll.ensure_visible(900.0, 1000.0);
        assert_eq!(scroll.offset(), -500.0);
        scroll.ensure_visible(100.0, 200.0);
        assert_eq!(scroll.offset(), -100.0);
        assert!(!scroll.ensure_visible(150.0, 250.0));
    }

    #[test]
    fn test_recompute_only_when_dirty() {
        let mut scroll = overflowing();
        assert!(scroll.recompute(false, Some((1500.0, 1600.0))));
        assert_eq!(scroll.offset(), -1100.0);
        assert!(!scroll.is_dirty());

        scroll.scroll_by(1100.0);
        assert!(!scroll.recompute(false, Some((1500.0, 1600.0))));
        assert_eq!(scroll.offset(), 0.0);
    }

    #[test]
    fn test_shrinking_content_reclamps() {
        let mut scroll = overflowing();
        scroll.scroll_by(-1500.0);
        scroll.set_metrics(500.0, 1000.0);
        scroll.recompute(false, None);
        assert_eq!(scroll.offset(), -500.0);
    }
}
