use crate::constants::{
    PIN_COUNT, PIN_SPACING_DEG, WIGGLE_DURATION_BASE_SEC, WIGGLE_DURATION_SPAN_SEC,
    WIGGLE_INTENSITY_BASE_DEG, WIGGLE_INTENSITY_SPAN_DEG,
};
use std::time::Duration;

/// A pin passing the pointer, with the wiggle the pointer should make.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickEvent {
    /// Cumulative pin index, `floor(rotation / 15°)`.
    pub pin_index: i64,
    /// Pointer deflection in degrees.
    pub intensity: f64,
    /// Wiggle length in seconds.
    pub duration: f64,
}

impl TickEvent {
    /// Physical pin on the rim, in `[0, 24)`.
    pub fn pin(&self) -> u32 {
        self.pin_index.rem_euclid(i64::from(PIN_COUNT)) as u32
    }

    pub fn wiggle_duration(&self) -> Duration {
        Duration::from_secs_f64(self.duration.max(0.0))
    }
}

#[inline]
pub fn pin_index_at(rotation: f64) -> i64 {
    (rotation / PIN_SPACING_DEG).floor() as i64
}

/// Wiggle `(intensity, duration)` for velocity `v`: sharp and short while
/// fast, deeper and slower as the wheel settles.
#[inline]
pub fn wiggle_for_velocity(velocity: f64) -> (f64, f64) {
    let v = velocity.clamp(0.0, 1.0);
    (
        WIGGLE_INTENSITY_BASE_DEG + v * WIGGLE_INTENSITY_SPAN_DEG,
        WIGGLE_DURATION_BASE_SEC + (1.0 - v) * WIGGLE_DURATION_SPAN_SEC,
    )
}

/// Turns the continuous rotation stream of one run into discrete ticks.
///
/// At most one event is emitted per observation, even when a large frame
/// step crosses several pins; the cue follows frame cadence, not pin count.
#[derive(Clone, Debug, PartialEq)]
pub struct TickDetector {
    last_fired: i64,
    fired: u32,
}

impl TickDetector {
    pub fn new(start_rotation: f64) -> Self {
        Self {
            last_fired: pin_index_at(start_rotation),
            fired: 0,
        }
    }

    pub fn last_fired(&self) -> i64 {
        self.last_fired
    }

    pub fn fired_count(&self) -> u32 {
        self.fired
    }

    pub fn observe(&mut self, rotation: f64, velocity: f64) -> Option<TickEvent> {
        let current = pin_index_at(rotation);
        if current <= self.last_fired {
            return None;
        }
        self.last_fired = current;
        self.fired += 1;
        let (intensity, duration) = wiggle_for_velocity(velocity);
        Some(TickEvent {
            pin_index: current,
            intensity,
            duration,
        })
    }
}
