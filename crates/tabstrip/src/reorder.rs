//! Drag-to-reorder gesture.
//!
//! A [`DragSession`] lives on the header area from the primary press on a
//! header until the release settles. While the pointer moves, the dragged
//! header follows it freely inside the headers region; each neighbor it
//! overlaps by more than [`DRAG_DIST_THRESHOLD`] of the neighbor's width slides
//! into the vacated slot. Only one neighbor slides at a time: starting a new
//! slide force-finishes the previous one, which swaps the two headers in the
//! collection. On release the dragged header settles into its destination and
//! the new position is committed to the tab order.
//!
//! All x coordinates are headers-region local.

use tabstrip_core::profiling::profile_function;

use crate::animation::{EasingFunction, REORDER_DURATION, Transition};
use crate::config::Side;
use crate::header::HeaderCollection;
use crate::tab::TabId;

/// Fraction of a neighbor's width the dragged header must cover to cross it.
pub const DRAG_DIST_THRESHOLD: f32 = 0.75;

/// Gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// Pressed but not moved inside the region yet.
    Start,
    /// The header is following the pointer or settling.
    Reorder,
}

/// Which reorder animation is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderAnimPhase {
    Idle,
    Sliding,
    Settling,
}

#[derive(Debug, Clone)]
struct Slide {
    target: TabId,
    source_x: f32,
    travel: f32,
    transition: Transition,
}

#[derive(Debug, Clone)]
struct Settle {
    source_x: f32,
    travel: f32,
    transition: Transition,
}

/// What a release did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Nothing moved; the session is over.
    Reset,
    /// The dragged header is animating to its destination.
    Settling,
}

/// A finished reorder: `tab` now sits at header index `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderCommit {
    pub tab: TabId,
    pub from: usize,
    pub index: usize,
}

/// State of one drag-reorder gesture.
#[derive(Debug, Clone)]
pub struct DragSession {
    dragged: TabId,
    start_index: usize,
    index: usize,
    /// `+1` when header x grows with index, `-1` for strips built from the end.
    direction: f32,
    side: Side,
    prev_loc: f32,
    prev_drag_direction: i8,
    dest_x: f32,
    phase: DragPhase,
    slide: Option<Slide>,
    settle: Option<Settle>,
}

impl DragSession {
    /// Start a gesture on `dragged` with the pointer at region-local `x`.
    pub(crate) fn start(
        headers: &mut HeaderCollection,
        dragged: TabId,
        side: Side,
        x: f32,
    ) -> Option<Self> {
        let index = headers.index_of(dragged)?;
        let header = headers.get_mut(index)?;
        header.set_raised(true);
        tracing::debug!("Drag start on {} at index {}", dragged, index);
        Some(Self {
            dragged,
            start_index: index,
            index,
            direction: side.layout_direction(),
            side,
            prev_loc: x,
            prev_drag_direction: 1,
            dest_x: header.layout_x(),
            phase: DragPhase::Start,
            slide: None,
            settle: None,
        })
    }

    pub fn dragged(&self) -> TabId {
        self.dragged
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Current candidate index of the dragged header.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn dest_x(&self) -> f32 {
        self.dest_x
    }

    pub fn anim_phase(&self) -> ReorderAnimPhase {
        if self.settle.is_some() {
            ReorderAnimPhase::Settling
        } else if self.slide.is_some() {
            ReorderAnimPhase::Sliding
        } else {
            ReorderAnimPhase::Idle
        }
    }

    pub fn sliding_header(&self) -> Option<TabId> {
        self.slide.as_ref().map(|slide| slide.target)
    }

    /// Headers layout must leave where they are.
    pub(crate) fn pins(&self, id: TabId) -> bool {
        self.phase == DragPhase::Reorder
            && (id == self.dragged || self.sliding_header() == Some(id))
    }

    /// Follow the pointer to region-local `x`.
    ///
    /// Returns true if the dragged header moved.
    pub(crate) fn drag_to(
        &mut self,
        headers: &mut HeaderCollection,
        x: f32,
        region_width: f32,
    ) -> bool {
        profile_function!();

        if self.settle.is_some() || !x.is_finite() {
            return false;
        }
        let delta = if self.side.builds_from_end() {
            self.prev_loc - x
        } else {
            x - self.prev_loc
        };
        let drag_direction: i8 = if delta > 0.0 {
            1
        } else if delta < 0.0 {
            -1
        } else {
            0
        };
        if drag_direction != 0 && drag_direction != self.prev_drag_direction {
            self.finish_slide(headers);
            self.prev_drag_direction = drag_direction;
        }

        let mut moved = false;
        if let Some(header) = headers.find_mut(self.dragged) {
            let new_x = header.layout_x() + self.direction * delta;
            if new_x >= 0.0 && new_x + header.width() <= region_width {
                if self.phase == DragPhase::Start {
                    tracing::debug!("Drag of {} entered reorder", self.dragged);
                }
                self.phase = DragPhase::Reorder;
                header.set_layout_x(new_x);
                moved = true;
            }
        }
        if moved {
            if drag_direction == 1 {
                self.scan_towards_end(headers);
            } else {
                self.scan_towards_start(headers);
            }
        }
        self.prev_loc = x;
        moved
    }

    /// Bounds of the dragged header as (min x, max x, width).
    fn dragged_extent(&self, headers: &HeaderCollection) -> Option<(f32, f32, f32)> {
        let header = headers.find(self.dragged)?;
        Some((header.layout_x(), header.layout_x() + header.width(), header.width()))
    }

    fn scan_towards_end(&mut self, headers: &mut HeaderCollection) {
        let mut i = self.index + 1;
        while i < headers.len() {
            let Some(drop) = headers.get(i) else {
                break;
            };
            let drop_id = drop.id();
            if self.sliding_header() != Some(drop_id) {
                let (drop_min, drop_max, drop_width) =
                    (drop.layout_x(), drop.layout_x() + drop.width(), drop.width());
                let Some((drag_min, drag_max, drag_width)) = self.dragged_extent(headers) else {
                    break;
                };
                let dist = if self.direction > 0.0 {
                    drag_max - drop_min
                } else {
                    drop_max - drag_min
                };
                if dist > drop_width * DRAG_DIST_THRESHOLD {
                    self.finish_slide(headers);
                    self.dest_x = if self.direction > 0.0 {
                        drop_max - drag_width
                    } else {
                        drop_min
                    };
                    self.start_slide(headers, drop_id, self.direction * -drag_width);
                } else {
                    break;
                }
            }
            i += 1;
        }
    }

    fn scan_towards_start(&mut self, headers: &mut HeaderCollection) {
        let mut i = self.index;
        while i > 0 {
            i -= 1;
            let Some(drop) = headers.get(i) else {
                break;
            };
            let drop_id = drop.id();
            if self.sliding_header() == Some(drop_id) {
                continue;
            }
            let (drop_min, drop_max, drop_width) =
                (drop.layout_x(), drop.layout_x() + drop.width(), drop.width());
            let Some((drag_min, drag_max, drag_width)) = self.dragged_extent(headers) else {
                break;
            };
            let dist = if self.direction > 0.0 {
                drop_max - drag_min
            } else {
                drag_max - drop_min
            };
            if dist > drop_width * DRAG_DIST_THRESHOLD {
                self.finish_slide(headers);
                self.dest_x = if self.direction > 0.0 {
                    drop_min
                } else {
                    drop_max - drag_width
                };
                self.start_slide(headers, drop_id, self.direction * drag_width);
            } else {
                break;
            }
        }
    }

    fn start_slide(&mut self, headers: &HeaderCollection, target: TabId, travel: f32) {
        let Some(header) = headers.find(target) else {
            return;
        };
        tracing::trace!("Sliding {} by {}", target, travel);
        self.slide = Some(Slide {
            target,
            source_x: header.layout_x(),
            travel,
            transition: Transition::new(REORDER_DURATION).easing(EasingFunction::EaseInOut),
        });
    }

    /// Complete the in-flight slide: the slid header takes the dragged
    /// header's slot and the candidate index follows the dragged header.
    fn finish_slide(&mut self, headers: &mut HeaderCollection) -> bool {
        let Some(slide) = self.slide.take() else {
            return false;
        };
        if let Some(index) = headers.index_of(slide.target)
            && let Some(mut item) = headers.remove_at(index)
        {
            item.set_layout_x(slide.source_x + slide.travel);
            headers.insert(self.index, item);
        }
        if let Some(index) = headers.index_of(self.dragged) {
            self.index = index;
        }
        tracing::trace!("Slide of {} done, candidate index {}", slide.target, self.index);
        true
    }

    /// Release the pointer.
    pub(crate) fn release(&mut self, headers: &HeaderCollection) -> ReleaseOutcome {
        if self.settle.is_some() {
            return ReleaseOutcome::Settling;
        }
        match self.phase {
            DragPhase::Start => ReleaseOutcome::Reset,
            DragPhase::Reorder if self.index == self.start_index && self.slide.is_none() => {
                ReleaseOutcome::Reset
            }
            DragPhase::Reorder => {
                let source_x = headers
                    .find(self.dragged)
                    .map_or(self.dest_x, |header| header.layout_x());
                tracing::debug!(
                    "Settling {} from {} to {}",
                    self.dragged,
                    source_x,
                    self.dest_x
                );
                self.settle = Some(Settle {
                    source_x,
                    travel: self.dest_x - source_x,
                    transition: Transition::new(REORDER_DURATION).easing(EasingFunction::EaseOut),
                });
                ReleaseOutcome::Settling
            }
        }
    }

    /// Advance the slide and settle animations.
    ///
    /// Returns `Some` once the settle finished; the session is over then.
    pub(crate) fn tick(
        &mut self,
        headers: &mut HeaderCollection,
        dt: f32,
    ) -> Option<Option<ReorderCommit>> {
        if let Some(slide) = self.slide.as_mut() {
            slide.transition.update(dt);
            let x = slide.source_x + slide.travel * slide.transition.value();
            if let Some(header) = headers.find_mut(slide.target) {
                header.set_layout_x(x);
            }
            if slide.transition.is_done() {
                self.finish_slide(headers);
            }
        }

        let settle = self.settle.as_mut()?;
        settle.transition.update(dt);
        let x = settle.source_x + settle.travel * settle.transition.value();
        let done = settle.transition.is_done();
        if let Some(header) = headers.find_mut(self.dragged) {
            header.set_layout_x(x);
        }
        done.then(|| self.complete(headers))
    }

    /// Whether an animation still needs ticks.
    pub fn is_animating(&self) -> bool {
        self.slide.is_some() || self.settle.is_some()
    }

    /// Jump every animation to its end.
    ///
    /// Returns `Some` if a settle was in flight; the session is over then.
    pub(crate) fn finish(&mut self, headers: &mut HeaderCollection) -> Option<Option<ReorderCommit>> {
        self.finish_slide(headers);
        let settle = self.settle.take()?;
        if let Some(header) = headers.find_mut(self.dragged) {
            header.set_layout_x(settle.source_x + settle.travel);
        }
        Some(self.complete(headers))
    }

    fn complete(&mut self, headers: &mut HeaderCollection) -> Option<ReorderCommit> {
        self.finish_slide(headers);
        self.settle = None;
        self.end(headers);
        (self.index != self.start_index).then(|| {
            tracing::debug!(
                "Reorder of {} committed: {} -> {}",
                self.dragged,
                self.start_index,
                self.index
            );
            ReorderCommit {
                tab: self.dragged,
                from: self.start_index,
                index: self.index,
            }
        })
    }

    /// Drop the raised z-order; layout takes over positioning.
    pub(crate) fn end(&mut self, headers: &mut HeaderCollection) {
        if let Some(header) = headers.find_mut(self.dragged) {
            header.set_raised(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use tabstrip_core::geometry::{Insets, Size};

    use super::*;
    use crate::config::{TabClosingPolicy, TabPaneConfig};
    use crate::header::TabHeaderItem;
    use crate::layout::place_headers;
    use crate::measure::HeaderMeasure;
    use crate::tab::Tab;

    struct Fixed;

    impl HeaderMeasure for Fixed {
        fn measure_label(&self, _tab: &Tab) -> Size<f32> {
            Size::new(100.0, 20.0)
        }
    }

    const KEYS: [&str; 4] = ["a", "b", "c", "d"];

    fn strip(side: Side) -> HeaderCollection {
        let config = TabPaneConfig::default()
            .header_padding(Insets::ZERO)
            .closing_policy(TabClosingPolicy::None);
        let mut headers = HeaderCollection::new();
        for (i, key) in KEYS.iter().enumerate() {
            let mut item = TabHeaderItem::new(Tab::new(key, *key));
            item.refresh(&Fixed, &config);
            headers.insert(i, item);
        }
        relayout(&mut headers, side, None);
        headers
    }

    fn relayout(headers: &mut HeaderCollection, side: Side, session: Option<&DragSession>) {
        place_headers(headers, side, 400.0, 0.0, |id| {
            session.is_some_and(|session| session.pins(id))
        });
    }

    fn order(headers: &HeaderCollection) -> Vec<TabId> {
        headers.iter().map(|item| item.id()).collect()
    }

    fn ids(keys: &[&str]) -> Vec<TabId> {
        keys.iter().map(|key| TabId::new(key)).collect()
    }

    fn settle(session: &mut DragSession, headers: &mut HeaderCollection) -> Option<ReorderCommit> {
        for _ in 0..100 {
            if let Some(commit) = session.tick(headers, 0.016) {
                return commit;
            }
        }
        panic!("settle never completed");
    }

    #[test]
    fn test_threshold_towards_end() {
        let mut headers = strip(Side::Top);
        let mut session = DragSession::start(&mut headers, TabId::new("a"), Side::Top, 10.0).unwrap();

        assert!(session.drag_to(&mut headers, 85.0, 400.0));
        assert_eq!(session.anim_phase(), ReorderAnimPhase::Idle);

        assert!(session.drag_to(&mut headers, 85.5, 400.0));
        assert_eq!(session.sliding_header(), Some(TabId::new("b")));
        assert_eq!(session.dest_x(), 100.0);
    }

    #[test]
    fn test_threshold_towards_start() {
        let mut headers = strip(Side::Top);
        let mut session = DragSession::start(&mut headers, TabId::new("d"), Side::Top, 350.0).unwrap();

        assert!(session.drag_to(&mut headers, 275.0, 400.0));
        assert!(session.sliding_header().is_none());

        assert!(session.drag_to(&mut headers, 274.5, 400.0));
        assert_eq!(session.sliding_header(), Some(TabId::new("c")));
        assert_eq!(session.dest_x(), 200.0);
    }

    #[test]
    fn test_bounds_reject_moves_outside_region() {
        let mut headers = strip(Side::Top);
        let mut session = DragSession::start(&mut headers, TabId::new("a"), Side::Top, 10.0).unwrap();
        assert!(!session.drag_to(&mut headers, 5.0, 400.0));
        assert_eq!(session.phase(), DragPhase::Start);
        assert_eq!(session.release(&headers), ReleaseOutcome::Reset);
    }

    #[test]
    fn test_fast_drag_crosses_several_neighbors() {
        let mut headers = strip(Side::Top);
        let mut session = DragSession::start(&mut headers, TabId::new("a"), Side::Top, 10.0).unwrap();

        assert!(session.drag_to(&mut headers, 260.0, 400.0));
        // b was swapped in when c started sliding; c is still in flight.
        assert_eq!(order(&headers), ids(&["b", "a", "c", "d"]));
        assert_eq!(session.sliding_header(), Some(TabId::new("c")));
        assert_eq!(session.dest_x(), 200.0);

        assert_eq!(session.release(&headers), ReleaseOutcome::Settling);
        let commit = settle(&mut session, &mut headers).unwrap();
        assert_eq!(commit.from, 0);
        assert_eq!(commit.index, 2);
        assert_eq!(order(&headers), ids(&["b", "c", "a", "d"]));
        assert!(!headers.find(TabId::new("a")).unwrap().is_raised());
        assert_eq!(headers.find(TabId::new("a")).unwrap().layout_x(), 200.0);
    }

    #[test]
    fn test_direction_flip_finishes_slide() {
        let mut headers = strip(Side::Top);
        let mut session = DragSession::start(&mut headers, TabId::new("a"), Side::Top, 10.0).unwrap();
        session.drag_to(&mut headers, 100.0, 400.0);
        assert_eq!(session.anim_phase(), ReorderAnimPhase::Sliding);

        session.drag_to(&mut headers, 99.0, 400.0);
        assert_eq!(session.anim_phase(), ReorderAnimPhase::Idle);
        assert_eq!(order(&headers), ids(&["b", "a", "c", "d"]));
        assert_eq!(session.index(), 1);
    }

    #[test]
    fn test_layout_pins_dragged_and_sliding() {
        let mut headers = strip(Side::Top);
        let mut session = DragSession::start(&mut headers, TabId::new("a"), Side::Top, 10.0).unwrap();
        session.drag_to(&mut headers, 100.0, 400.0);
        relayout(&mut headers, Side::Top, Some(&session));
        assert_eq!(headers.find(TabId::new("a")).unwrap().layout_x(), 90.0);
        assert_eq!(headers.find(TabId::new("b")).unwrap().layout_x(), 100.0);
    }

    #[test]
    fn test_bottom_strip_mirrors_drag() {
        let mut headers = strip(Side::Bottom);
        // Built from the far edge: a occupies [300, 400).
        assert_eq!(headers.find(TabId::new("a")).unwrap().layout_x(), 300.0);

        let mut session =
            DragSession::start(&mut headers, TabId::new("a"), Side::Bottom, 390.0).unwrap();
        assert!(session.drag_to(&mut headers, 314.5, 400.0));
        assert_eq!(session.sliding_header(), Some(TabId::new("b")));
        assert_eq!(session.dest_x(), 200.0);

        let _ = session.release(&headers);
        let commit = settle(&mut session, &mut headers).unwrap();
        assert_eq!(commit.index, 1);
        assert_eq!(order(&headers), ids(&["b", "a", "c", "d"]));
    }

    #[test]
    fn test_release_without_index_change_resets() {
        let mut headers = strip(Side::Top);
        let mut session = DragSession::start(&mut headers, TabId::new("b"), Side::Top, 150.0).unwrap();
        session.drag_to(&mut headers, 160.0, 400.0);
        assert_eq!(session.phase(), DragPhase::Reorder);
        assert_eq!(session.release(&headers), ReleaseOutcome::Reset);
    }

    #[test]
    fn test_finish_is_idempotent() {
        let mut headers = strip(Side::Top);
        let mut session = DragSession::start(&mut headers, TabId::new("a"), Side::Top, 10.0).unwrap();
        session.drag_to(&mut headers, 100.0, 400.0);
        let _ = session.release(&headers);

        let commit = session.finish(&mut headers).unwrap().unwrap();
        assert_eq!(commit.index, 1);
        assert!(session.finish(&mut headers).is_none());
        assert_eq!(order(&headers), ids(&["b", "a", "c", "d"]));
    }
}
