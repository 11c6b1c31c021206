//! Time-based tween animator for smooth scrolling to a target offset.
//!
//! The animator never reads the clock itself; callers pass the current
//! instant so the same code runs under a UI frame clock and in tests.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Easing curve applied to the normalized animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto the curve (quadratic).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: None,
            duration: Duration::from_millis(450),
            easing: Easing::EaseOut,
        }
    }
}

impl ScrollAnimator {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            ..Self::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Offset the running animation is heading to.
    pub fn target(&self) -> Option<f32> {
        self.active.then_some(self.target)
    }

    pub fn start(&mut self, current: f32, target: f32, now: Instant) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = Some(now);
    }

    /// Returns `Some(next_offset)` while animating, or `None` when finished or
    /// inactive. The final frame returns the exact target.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let started_at = self.started_at.unwrap_or(now);
        let elapsed = now.saturating_duration_since(started_at);
        if self.duration.is_zero() || elapsed >= self.duration {
            self.active = false;
            return Some(self.target);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.easing.apply(t);
        Some(self.start + (self.target - self.start) * eased)
    }

    /// Cancel the current animation immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
    }

    #[test]
    fn animator_reaches_target_and_stops() {
        let t0 = Instant::now();
        let mut animator =
            ScrollAnimator::new(Duration::from_millis(100), Easing::Linear);
        animator.start(0.0, 300.0, t0);

        let mid = animator.tick(t0 + Duration::from_millis(50)).unwrap();
        assert!((mid - 150.0).abs() < 0.01);
        assert!(animator.is_active());

        assert_eq!(animator.tick(t0 + Duration::from_millis(100)), Some(300.0));
        assert!(!animator.is_active());
        assert_eq!(animator.tick(t0 + Duration::from_millis(120)), None);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let t0 = Instant::now();
        let mut animator = ScrollAnimator::new(Duration::ZERO, Easing::EaseOut);
        animator.start(10.0, 40.0, t0);
        assert_eq!(animator.tick(t0), Some(40.0));
        assert!(!animator.is_active());
    }
}
