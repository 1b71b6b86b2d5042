//! Auxiliary scrollbar mirroring the header scroll offset.
//!
//! The bar's value is `-offset` in `[0, max]`. The engine writes metrics and
//! value while layout runs; the user changes the value by dragging the thumb,
//! clicking the track or the arrow steps. Engine writes happen inside an
//! [`EchoGuard`] so they are never mistaken for user input.

use std::cell::Cell;
use std::rc::Rc;

use tabstrip_core::geometry::Rect;
use tabstrip_core::math::Vec2;

use crate::animation::{SCROLLBAR_FADE_DURATION, Transition};
use crate::event::PropertyChange;

/// Value change per arrow step.
pub const UNIT_INCREMENT: f32 = 10.0;

/// Value change per track click.
pub const BLOCK_INCREMENT: f32 = 25.0;

/// Minimum thumb length in pixels along the track.
pub const MIN_THUMB_LENGTH: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FadeKind {
    In,
    Out,
}

#[derive(Debug, Clone)]
struct Fade {
    kind: FadeKind,
    transition: Transition,
}

/// Scrollbar model: range, value, thumb drag and fade state.
#[derive(Debug, Clone)]
pub struct TabScrollBar {
    visible: bool,
    opacity: f32,
    fade: Option<Fade>,
    max: f32,
    value: f32,
    visible_amount: f32,
    track_length: f32,
    content_length: f32,
    thumb_dragging: bool,
    /// Anchor offset within the thumb when drag started.
    drag_anchor: f32,
}

impl Default for TabScrollBar {
    fn default() -> Self {
        Self::new()
    }
}

impl TabScrollBar {
    pub fn new() -> Self {
        Self {
            visible: false,
            opacity: 0.0,
            fade: None,
            max: 0.0,
            value: 0.0,
            visible_amount: 0.0,
            track_length: 0.0,
            content_length: 0.0,
            thumb_dragging: false,
            drag_anchor: 0.0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn visible_amount(&self) -> f32 {
        self.visible_amount
    }

    pub fn is_thumb_dragging(&self) -> bool {
        self.thumb_dragging
    }

    /// Range from the track length and the headers' preferred width.
    ///
    /// Returns true if the range changed.
    pub(crate) fn set_metrics(&mut self, track_length: f32, content_length: f32) -> bool {
        let max = (content_length - track_length).max(0.0);
        let visible_amount = if content_length > 0.0 {
            track_length / content_length * max
        } else {
            0.0
        };
        let changed = max != self.max || visible_amount != self.visible_amount;
        self.max = max;
        self.visible_amount = visible_amount;
        self.track_length = track_length.max(0.0);
        self.content_length = content_length.max(0.0);
        changed
    }

    /// Clamp and store a value; returns the change if there was one.
    pub(crate) fn set_value(&mut self, value: f32) -> Option<PropertyChange<f32>> {
        if !value.is_finite() {
            return None;
        }
        let new = value.clamp(0.0, self.max);
        let old = self.value;
        if new == old {
            return None;
        }
        self.value = new;
        Some(PropertyChange { old, new })
    }

    pub(crate) fn increment(&mut self) -> Option<PropertyChange<f32>> {
        self.set_value(self.value + UNIT_INCREMENT)
    }

    pub(crate) fn decrement(&mut self) -> Option<PropertyChange<f32>> {
        self.set_value(self.value - UNIT_INCREMENT)
    }

    /// Page towards a track click at scrollbar-local `x`.
    pub(crate) fn page_towards(&mut self, x: f32, track: &Rect<f32>) -> Option<PropertyChange<f32>> {
        let thumb = self.thumb_bounds(track);
        if x < thumb.x {
            self.set_value(self.value - BLOCK_INCREMENT)
        } else if x > thumb.max_x() {
            self.set_value(self.value + BLOCK_INCREMENT)
        } else {
            None
        }
    }

    /// Ratio of track to content (0.0-1.0).
    pub fn thumb_ratio(&self) -> f32 {
        if self.content_length <= 0.0 {
            return 1.0;
        }
        (self.track_length / self.content_length).clamp(0.0, 1.0)
    }

    /// Thumb length in pixels along the track.
    pub fn thumb_length(&self, track_length: f32) -> f32 {
        (self.thumb_ratio() * track_length)
            .max(MIN_THUMB_LENGTH)
            .min(track_length)
    }

    /// Thumb bounds within the track.
    pub fn thumb_bounds(&self, track: &Rect<f32>) -> Rect<f32> {
        let thumb_len = self.thumb_length(track.width);
        let frac = if self.max > 0.0 {
            self.value / self.max
        } else {
            0.0
        };
        Rect::new(
            track.x + frac * (track.width - thumb_len),
            track.y,
            thumb_len,
            track.height,
        )
    }

    pub fn hit_test_thumb(&self, pos: Vec2, track: &Rect<f32>) -> bool {
        self.thumb_bounds(track).contains(pos)
    }

    /// Start thumb drag. `x` is in the scrollbar's coordinate space.
    pub(crate) fn start_thumb_drag(&mut self, x: f32, track: &Rect<f32>) {
        let thumb = self.thumb_bounds(track);
        self.drag_anchor = x - thumb.x;
        self.thumb_dragging = true;
    }

    /// Move the thumb during a drag.
    pub(crate) fn update_thumb_drag(
        &mut self,
        x: f32,
        track: &Rect<f32>,
    ) -> Option<PropertyChange<f32>> {
        if !self.thumb_dragging {
            return None;
        }
        let available = track.width - self.thumb_length(track.width);
        if available <= 0.0 {
            return None;
        }
        let thumb_pos = x - track.x - self.drag_anchor;
        let frac = (thumb_pos / available).clamp(0.0, 1.0);
        self.set_value(frac * self.max)
    }

    pub(crate) fn end_thumb_drag(&mut self) -> bool {
        std::mem::replace(&mut self.thumb_dragging, false)
    }

    /// Make the bar visible with a fade-in.
    ///
    /// A running fade-out turns around from the current opacity; a bar that
    /// is already shown is left alone.
    pub(crate) fn show(&mut self) -> bool {
        match &self.fade {
            Some(fade) if fade.kind == FadeKind::In => return false,
            Some(_) => {}
            None if self.visible => return false,
            None => self.opacity = 0.0,
        }
        self.visible = true;
        self.fade = Some(Fade {
            kind: FadeKind::In,
            transition: Transition::new(SCROLLBAR_FADE_DURATION).from(self.opacity),
        });
        true
    }

    /// Hide the bar, fading out when `animated`.
    pub(crate) fn hide(&mut self, animated: bool) -> bool {
        if !self.visible {
            return false;
        }
        if !animated {
            self.visible = false;
            self.opacity = 0.0;
            self.fade = None;
            return true;
        }
        if matches!(&self.fade, Some(fade) if fade.kind == FadeKind::Out) {
            return false;
        }
        self.fade = Some(Fade {
            kind: FadeKind::Out,
            transition: Transition::new(SCROLLBAR_FADE_DURATION)
                .from(self.opacity)
                .to(0.0),
        });
        true
    }

    /// Advance the fade; returns true if opacity or visibility changed.
    pub(crate) fn tick(&mut self, dt: f32) -> bool {
        let Some(fade) = self.fade.as_mut() else {
            return false;
        };
        fade.transition.update(dt);
        self.opacity = fade.transition.value();
        if fade.transition.is_done() {
            if fade.kind == FadeKind::Out {
                self.visible = false;
            }
            self.fade = None;
        }
        true
    }

    /// Drop the bar entirely when it is disabled.
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Whether scrollbar value changes are forwarded to the scroll offset.
///
/// Cloning shares the flag.
#[derive(Debug, Clone)]
pub struct ScrollBarBinding {
    enabled: Rc<Cell<bool>>,
}

impl Default for ScrollBarBinding {
    fn default() -> Self {
        Self {
            enabled: Rc::new(Cell::new(true)),
        }
    }
}

impl ScrollBarBinding {
    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Suppress forwarding until the guard drops.
    pub fn suppress(&self) -> EchoGuard {
        let previous = self.enabled.replace(false);
        EchoGuard {
            enabled: Rc::clone(&self.enabled),
            previous,
        }
    }

    /// Offset delta for a value change, or `None` while suppressed.
    ///
    /// Moving the thumb right scrolls the headers left.
    pub fn offset_delta(&self, change: PropertyChange<f32>) -> Option<f32> {
        self.is_enabled().then(|| change.old - change.new)
    }
}

/// Restores the binding's previous state on drop.
#[derive(Debug)]
#[must_use = "forwarding resumes as soon as the guard drops"]
pub struct EchoGuard {
    enabled: Rc<Cell<bool>>,
    previous: bool,
}

impl Drop for EchoGuard {
    fn drop(&mut self) {
        self.enabled.set(self.previous);
    }
}
