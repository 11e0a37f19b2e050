//! Time-based animation tracks with easing
//!
//! A track interpolates one property from a start value to an end value.
//! Progress is computed from the absolute elapsed time, so advancing a
//! track by `a` then `b` lands on the same value as advancing by `a + b`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::SizeF;

/// Types that can be linearly interpolated
pub trait Lerp: Copy {
    fn lerp(&self, target: &Self, fraction: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f64) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for SizeF {
    fn lerp(&self, target: &Self, fraction: f64) -> Self {
        SizeF::new(
            self.width.lerp(&target.width, fraction),
            self.height.lerp(&target.height, fraction),
        )
    }
}

/// Easing curves applied to normalized time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// `4t³` for the first half, `1 - (-2t + 2)³ / 2` for the second
    #[default]
    CubicInOut,
}

impl Easing {
    /// Map a fraction in `[0, 1]` to eased progress in `[0, 1]`
    pub fn transform(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// One in-flight interpolation of a single property
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationTrack<T: Lerp> {
    start: T,
    end: T,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
}

impl<T: Lerp> AnimationTrack<T> {
    pub fn new(start: T, end: T, duration: Duration, easing: Easing) -> Self {
        Self {
            start,
            end,
            elapsed: Duration::ZERO,
            duration,
            easing,
        }
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn end(&self) -> T {
        self.end
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Normalized time in `[0, 1]`; zero-length tracks are always complete
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Current interpolated value
    pub fn value(&self) -> T {
        if self.is_finished() {
            return self.end;
        }
        self.start
            .lerp(&self.end, self.easing.transform(self.progress()))
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance time and return the new value
    pub fn advance(&mut self, dt: Duration) -> T {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.value()
    }
}
