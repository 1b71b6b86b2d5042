//! Scalar transitions driven by the host frame clock.
//!
//! Every animation in the header engine is a [`Transition`] from one value to
//! another, advanced with `update(dt)` in seconds. Owners poll
//! [`Transition::is_done`] after each update and dispatch their completion in
//! one place; [`Transition::finish`] jumps to the end and reports whether the
//! owner still has to run that completion, so force-finishing twice is a no-op.

/// Open/close grow and shrink duration in seconds.
pub const TAB_TRANSITION_DURATION: f32 = 0.150;

/// Drag-reorder slide and settle duration in seconds.
pub const REORDER_DURATION: f32 = 0.120;

/// Scrollbar fade duration in seconds.
pub const SCROLLBAR_FADE_DURATION: f32 = 2.0 * TAB_TRANSITION_DURATION;

/// Easing functions for transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EasingFunction {
    #[default]
    Linear,
    /// Slow start.
    EaseIn,
    /// Slow end.
    EaseOut,
    /// Slow start and end.
    EaseInOut,
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t,
            EasingFunction::EaseOut => t * (2.0 - t),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// Transition state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Running,
    Completed,
}

/// A one-shot interpolation between two values.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    /// Duration in seconds
    duration: f32,
    /// Elapsed time in seconds
    elapsed: f32,
    easing: EasingFunction,
    state: AnimationState,
}

impl Transition {
    /// Create a linear transition from 0.0 to 1.0 over `duration` seconds.
    pub fn new(duration: f32) -> Self {
        Self {
            from: 0.0,
            to: 1.0,
            duration: if duration.is_finite() { duration.max(0.0) } else { 0.0 },
            elapsed: 0.0,
            easing: EasingFunction::Linear,
            state: AnimationState::Running,
        }
    }

    pub fn from(mut self, value: f32) -> Self {
        self.from = value;
        self
    }

    pub fn to(mut self, value: f32) -> Self {
        self.to = value;
        self
    }

    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    pub fn start_value(&self) -> f32 {
        self.from
    }

    pub fn end_value(&self) -> f32 {
        self.to
    }

    /// Normalized progress in `[0, 1]`, before easing.
    pub fn progress(&self) -> f32 {
        if self.state == AnimationState::Completed || self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Current interpolated value.
    pub fn value(&self) -> f32 {
        if self.state == AnimationState::Completed {
            return self.to;
        }
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimationState::Running
    }

    pub fn is_done(&self) -> bool {
        self.state == AnimationState::Completed
    }

    /// Advance by `dt` seconds.
    ///
    /// Returns true if the transition is still running.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.state != AnimationState::Running {
            return false;
        }
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.state = AnimationState::Completed;
        }
        self.state == AnimationState::Running
    }

    /// Jump to the end value.
    ///
    /// Returns true only on the call that actually completed the transition.
    pub fn finish(&mut self) -> bool {
        if self.state == AnimationState::Completed {
            return false;
        }
        self.elapsed = self.duration;
        self.state = AnimationState::Completed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            EasingFunction::Linear,
            EasingFunction::EaseIn,
            EasingFunction::EaseOut,
            EasingFunction::EaseInOut,
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
        assert!(EasingFunction::EaseOut.apply(0.5) > 0.5);
        assert!(EasingFunction::EaseIn.apply(0.5) < 0.5);
    }

    #[test]
    fn test_transition_runs_to_completion() {
        let mut t = Transition::new(0.1).from(1.0).to(0.0);
        assert_eq!(t.value(), 1.0);
        assert!(t.update(0.05));
        assert!((t.value() - 0.5).abs() < 1e-4);
        assert!(!t.update(0.06));
        assert!(t.is_done());
        assert_eq!(t.value(), 0.0);
    }

    #[test]
    fn test_finish_is_idempotent() {
        let mut t = Transition::new(REORDER_DURATION);
        assert!(t.finish());
        assert!(!t.finish());
        assert!(!t.update(1.0));
        assert_eq!(t.value(), 1.0);
    }

    #[test]
    fn test_zero_duration_completes_on_first_update() {
        let mut t = Transition::new(0.0);
        assert_eq!(t.value(), 1.0);
        assert!(!t.update(0.0));
        assert!(t.is_done());
    }
}
