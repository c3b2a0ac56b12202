// SPDX-License-Identifier: MPL-2.0
//! Time-based scalar animation used by the overlay layers.
//!
//! An [`AnimatedValue`] is owned by exactly one layer record and only moves
//! when its owner calls [`AnimatedValue::go`]. Time is always passed in, so
//! the same value can be sampled by several view branches in one frame and
//! tests can step through an animation deterministically.

use std::time::{Duration, Instant};

/// Progress below this fraction of the remaining distance counts as settled.
const SPRING_REST_THRESHOLD: f32 = 0.01;

/// Newton-Raphson iterations before falling back to bisection.
const BEZIER_NEWTON_ITERATIONS: usize = 8;

/// A CSS-style cubic-bezier timing curve anchored at (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f32, a2: f32, t: f32) -> f32 {
        // B(t) = 3(1-t)^2 t a1 + 3(1-t) t^2 a2 + t^3
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn sample_derivative(a1: f32, a2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    /// Solves the curve parameter `t` for which `x(t) == x`.
    fn solve_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..BEZIER_NEWTON_ITERATIONS {
            let error = Self::sample(self.x1, self.x2, t) - x;
            if error.abs() < 1e-5 {
                return t;
            }
            let slope = Self::sample_derivative(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= error / slope;
        }

        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        t = x;
        while high - low > 1e-5 {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < 1e-5 {
                break;
            }
            if value < x {
                low = t;
            } else {
                high = t;
            }
            t = (low + high) / 2.0;
        }
        t
    }

    /// Eased progress for a linear time fraction in `[0, 1]`.
    #[must_use]
    pub fn ease(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_t(x))
    }
}

/// How an [`AnimatedValue`] travels toward its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Fixed-duration tween along a bezier curve.
    Timing {
        duration: Duration,
        curve: CubicBezier,
    },
    /// Damped spring described by origami-style friction/tension, the
    /// parameters mobile animation drivers expose. Settle time is derived
    /// from the parameters.
    Spring { friction: f32, tension: f32 },
}

impl Motion {
    #[must_use]
    pub const fn timing(duration_ms: u64, curve: CubicBezier) -> Self {
        Self::Timing {
            duration: Duration::from_millis(duration_ms),
            curve,
        }
    }

    #[must_use]
    pub const fn spring(friction: f32, tension: f32) -> Self {
        Self::Spring { friction, tension }
    }

    /// (angular frequency, damping ratio) of the equivalent unit-mass spring.
    fn spring_constants(friction: f32, tension: f32) -> (f32, f32) {
        let stiffness = ((tension - 30.0) * 3.62 + 194.0).max(1.0);
        let damping = ((friction - 8.0) * 3.0 + 25.0).max(0.1);
        let omega = stiffness.sqrt();
        (omega, damping / (2.0 * omega))
    }

    /// Time after which the animation is considered finished.
    #[must_use]
    pub fn duration(&self) -> Duration {
        match *self {
            Self::Timing { duration, .. } => duration,
            Self::Spring { friction, tension } => {
                let (omega, zeta) = Self::spring_constants(friction, tension);
                let decay = if zeta < 1.0 { zeta * omega } else { omega };
                let secs = (1.0 / SPRING_REST_THRESHOLD).ln() / decay;
                Duration::from_secs_f32(secs)
            }
        }
    }

    /// Progress in `[0, 1]` after `elapsed` time.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let total = self.duration();
        if elapsed >= total {
            return 1.0;
        }
        match *self {
            Self::Timing { duration, curve } => {
                curve.ease(elapsed.as_secs_f32() / duration.as_secs_f32())
            }
            Self::Spring { friction, tension } => {
                let (omega, zeta) = Self::spring_constants(friction, tension);
                let t = elapsed.as_secs_f32();
                let displacement = if zeta < 1.0 {
                    let damped = omega * (1.0 - zeta * zeta).sqrt();
                    (-zeta * omega * t).exp()
                        * ((damped * t).cos() + (zeta * omega / damped) * (damped * t).sin())
                } else {
                    (-omega * t).exp() * (1.0 + omega * t)
                };
                // Overshoot is clipped so opacities stay inside [0, 1].
                (1.0 - displacement).clamp(0.0, 1.0)
            }
        }
    }
}

/// A scalar moving from one value to another over time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    from: f32,
    to: f32,
    started_at: Option<Instant>,
    motion: Motion,
}

impl AnimatedValue {
    /// A value at rest.
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            started_at: None,
            motion: Motion::timing(0, CubicBezier::new(0.0, 0.0, 1.0, 1.0)),
        }
    }

    /// Restarts the animation toward `target` from wherever it is at `now`.
    ///
    /// Restating the current target mid-flight keeps the motion continuous;
    /// the newest call always wins.
    pub fn go(&mut self, target: f32, now: Instant, motion: Motion) {
        self.from = self.value(now);
        self.to = target;
        self.started_at = Some(now);
        self.motion = motion;
    }

    /// Jumps to `value` with no animation.
    pub fn snap(&mut self, value: f32) {
        *self = Self::new(value);
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    #[must_use]
    pub fn value(&self, now: Instant) -> f32 {
        match self.started_at {
            None => self.to,
            Some(start) => {
                let elapsed = now.saturating_duration_since(start);
                self.from + (self.to - self.from) * self.motion.progress(elapsed)
            }
        }
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|start| now.saturating_duration_since(start) < self.motion.duration())
    }
}
