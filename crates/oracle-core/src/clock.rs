use crate::constants::{REDUCED_MOTION_DURATION_MS, SPIN_DURATION_MS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_reduce_motion(reduce_motion: bool) -> Self {
        if reduce_motion {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }

    pub fn is_reduced(self) -> bool {
        self == MotionPreference::Reduced
    }

    pub fn spin_duration(self) -> Duration {
        match self {
            MotionPreference::Full => Duration::from_millis(SPIN_DURATION_MS),
            MotionPreference::Reduced => Duration::from_millis(REDUCED_MOTION_DURATION_MS),
        }
    }
}

/// Cubic ease-out over `[0, 1]`: fast start, gentle settle.
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[inline]
pub fn interpolate(start: f64, end: f64, progress: f64) -> f64 {
    start + (end - start) * progress
}

/// Maps elapsed time onto spin progress for one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpinClock {
    duration: Duration,
}

impl SpinClock {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn for_motion(motion: MotionPreference) -> Self {
        Self::new(motion.spin_duration())
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Un-eased share of the duration that has elapsed.
    pub fn linear(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn progress(&self, elapsed: Duration) -> f64 {
        ease_out_cubic(self.linear(elapsed))
    }

    /// Shaping signal for feedback: 1 at the start of a spin, 0 at rest.
    pub fn velocity(&self, elapsed: Duration) -> f64 {
        1.0 - self.linear(elapsed)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.linear(elapsed) >= 1.0
    }
}
