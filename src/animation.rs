//! Panel height animation.
//!
//! The interaction controller only decides the target height; this module
//! owns interpolation toward it. A new target supersedes the running
//! transition and starts from the height currently on screen, so rapid
//! toggles re-target smoothly instead of queueing.

use std::time::{Duration, Instant};

use crate::constants::{ANIMATION_CURVE, ANIMATION_DURATION};

// ============================================================================
// Easing
// ============================================================================

/// CSS-style cubic-bezier timing curve with fixed endpoints `(0,0)` and `(1,1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    /// Create a curve from its two control points. `x1` and `x2` are clamped to `[0, 1]`.
    #[must_use]
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    fn sample(a: f32, b: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * a + 3.0 * u * t * t * b + t * t * t
    }

    fn sample_derivative(a: f32, b: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * a + 6.0 * u * t * (b - a) + 3.0 * t * t * (1.0 - b)
    }

    /// Eased progress for linear progress `x` in `[0, 1]`.
    #[must_use]
    pub fn apply(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        // Newton-Raphson on x(t), falling back to bisection on flat slopes.
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < 1e-5 {
                return Self::sample(self.y1, self.y2, t);
            }
            let slope = Self::sample_derivative(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t = (t - err / slope).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..32 {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < 1e-5 {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        Self::sample(self.y1, self.y2, t)
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        let (x1, y1, x2, y2) = ANIMATION_CURVE;
        Self::new(x1, y1, x2, y2)
    }
}

// ============================================================================
// HeightAnimation
// ============================================================================

/// Interpolated panel height, in rows.
#[derive(Debug, Clone)]
pub struct HeightAnimation {
    from: f32,
    to: u16,
    start: Option<Instant>,
    duration: Duration,
    curve: CubicBezier,
}

impl Default for HeightAnimation {
    fn default() -> Self {
        Self::new(ANIMATION_DURATION, CubicBezier::default())
    }
}

impl HeightAnimation {
    /// A settled animation at height 0.
    #[must_use]
    pub const fn new(duration: Duration, curve: CubicBezier) -> Self {
        Self {
            from: 0.0,
            to: 0,
            start: None,
            duration,
            curve,
        }
    }

    /// Height the animation is heading to.
    #[must_use]
    pub const fn target(&self) -> u16 {
        self.to
    }

    /// Start a transition to `target` from the height displayed at `now`.
    pub fn retarget(&mut self, target: u16, now: Instant) {
        if target == self.to {
            return;
        }
        self.from = self.value_at(now);
        self.to = target;
        self.start = Some(now);
    }

    /// Interpolated height at `now`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let to = f32::from(self.to);
        let Some(start) = self.start else {
            return to;
        };
        if self.duration.is_zero() {
            return to;
        }

        let elapsed = now.saturating_duration_since(start).as_secs_f32();
        let progress = (elapsed / self.duration.as_secs_f32()).min(1.0);
        let eased = self.curve.apply(progress);
        self.from + (to - self.from) * eased
    }

    /// Interpolated height at `now`, rounded to whole rows.
    #[must_use]
    pub fn height_at(&self, now: Instant) -> u16 {
        let value = self.value_at(now).round();
        value.clamp(0.0, f32::from(u16::MAX)) as u16
    }

    /// Whether the transition has reached its target at `now`.
    #[must_use]
    pub fn is_settled(&self, now: Instant) -> bool {
        self.start
            .is_none_or(|start| now.saturating_duration_since(start) >= self.duration)
    }
}

// ============================================================================
// Tests
// ============================================================================
