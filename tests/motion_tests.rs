// Host-side tests for spin timing and pin ticks.

use oracle_core::*;
use std::time::Duration;

#[test]
fn ease_out_cubic_endpoints_and_shape() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    assert_eq!(ease_out_cubic(-1.0), 0.0);
    assert_eq!(ease_out_cubic(2.0), 1.0);

    let mut prev = 0.0;
    for i in 1..=100 {
        let e = ease_out_cubic(i as f64 / 100.0);
        assert!(e > prev, "not increasing at {i}");
        prev = e;
    }
}

#[test]
fn motion_preference_sets_duration() {
    assert_eq!(
        MotionPreference::Full.spin_duration(),
        Duration::from_millis(7_500)
    );
    assert_eq!(
        MotionPreference::Reduced.spin_duration(),
        Duration::from_millis(1_000)
    );
    assert!(MotionPreference::from_reduce_motion(true).is_reduced());
    assert_eq!(MotionPreference::default(), MotionPreference::Full);
}

#[test]
fn clock_progress_and_velocity() {
    let clock = SpinClock::for_motion(MotionPreference::Full);
    let half = Duration::from_millis(3_750);
    assert!((clock.linear(half) - 0.5).abs() < 1e-12);
    assert!((clock.progress(half) - 0.875).abs() < 1e-12);
    assert!((clock.velocity(half) - 0.5).abs() < 1e-12);
    assert_eq!(clock.velocity(Duration::ZERO), 1.0);
    assert!(!clock.is_finished(Duration::from_millis(7_499)));
    assert!(clock.is_finished(Duration::from_millis(7_500)));
    assert_eq!(clock.progress(Duration::from_secs(100)), 1.0);
    assert_eq!(clock.velocity(Duration::from_secs(100)), 0.0);
}

#[test]
fn zero_duration_clock_is_already_finished() {
    let clock = SpinClock::new(Duration::ZERO);
    assert_eq!(clock.linear(Duration::ZERO), 1.0);
    assert!(clock.is_finished(Duration::ZERO));
}

#[test]
fn wiggle_shape_at_speed_and_rest() {
    let (i, d) = wiggle_for_velocity(1.0);
    assert!((i - 35.0).abs() < 1e-12 && (d - 0.04).abs() < 1e-12);
    let (i, d) = wiggle_for_velocity(0.0);
    assert!((i - 15.0).abs() < 1e-12 && (d - 0.14).abs() < 1e-12);
    // out-of-range velocities clamp
    assert_eq!(wiggle_for_velocity(3.0), wiggle_for_velocity(1.0));
}

#[test]
fn pin_index_floors_including_negatives() {
    assert_eq!(pin_index_at(0.0), 0);
    assert_eq!(pin_index_at(14.999), 0);
    assert_eq!(pin_index_at(15.0), 1);
    assert_eq!(pin_index_at(-1.0), -1);
    assert_eq!(pin_index_at(2970.0), 198);
}

#[test]
fn detector_fires_once_per_new_pin() {
    let mut ticks = TickDetector::new(20.0);
    assert_eq!(ticks.last_fired(), 1);
    assert!(ticks.observe(29.0, 1.0).is_none());

    let first = ticks.observe(30.0, 1.0).unwrap();
    assert_eq!(first.pin_index, 2);
    assert_eq!(first.pin(), 2);
    assert!(ticks.observe(31.0, 0.9).is_none());

    // a big frame step still yields a single event
    let jump = ticks.observe(95.0, 0.5).unwrap();
    assert_eq!(jump.pin_index, 6);
    assert!((jump.intensity - 25.0).abs() < 1e-12);
    assert_eq!(ticks.fired_count(), 2);

    // never fires backwards
    assert!(ticks.observe(40.0, 0.4).is_none());
}

#[test]
fn detector_starting_mid_wheel_does_not_fire_immediately() {
    let start = 2970.0;
    let mut ticks = TickDetector::new(start);
    assert!(ticks.observe(start, 1.0).is_none());
    assert!(ticks.observe(start + 14.0, 1.0).is_none());
    assert!(ticks.observe(start + 15.0, 1.0).is_some());
}

#[test]
fn ticks_follow_an_eased_run_in_order() {
    let clock = SpinClock::for_motion(MotionPreference::Full);
    let (start, end) = (120.0, 120.0 + 3_000.0);
    let mut ticks = TickDetector::new(start);
    let mut pins = Vec::new();
    let mut t = Duration::ZERO;
    while !clock.is_finished(t) {
        let rotation = interpolate(start, end, clock.progress(t));
        if let Some(ev) = ticks.observe(rotation, clock.velocity(t)) {
            pins.push(ev.pin_index);
        }
        t += Duration::from_millis(16);
    }
    assert!(!pins.is_empty());
    for pair in pins.windows(2) {
        assert!(pair[1] > pair[0], "ticks out of order: {pair:?}");
    }
    assert!(*pins.last().unwrap() <= pin_index_at(end));
}

#[test]
fn tick_event_wraps_to_physical_pin() {
    let ev = TickEvent {
        pin_index: 49,
        intensity: 20.0,
        duration: 0.05,
    };
    assert_eq!(ev.pin(), 1);
    assert_eq!(ev.wiggle_duration(), Duration::from_millis(50));
}
