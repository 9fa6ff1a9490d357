// Host-side tests for probability-to-geometry mapping on the wheel face.

mod common;

use common::ScriptedRandom;
use oracle_core::*;

fn prob(p: f64) -> Probability {
    Probability::new(p).unwrap()
}

#[test]
fn sectors_partition_the_wheel() {
    for i in 0..=20 {
        let p = prob(i as f64 / 20.0);
        let yes = Sector::for_outcome(p, Outcome::Yes);
        let no = Sector::for_outcome(p, Outcome::No);
        assert_eq!(yes.start_deg, 0.0);
        assert_eq!(yes.end_deg, no.start_deg);
        assert_eq!(no.end_deg, 360.0);
        assert!((yes.width() + no.width() - 360.0).abs() < 1e-9);
        assert!((yes.width() - p.of(Outcome::Yes) * 360.0).abs() < 1e-9);
    }
}

#[test]
fn empty_sector_only_at_extremes() {
    assert!(Sector::for_outcome(prob(0.0), Outcome::Yes).is_empty());
    assert!(Sector::for_outcome(prob(1.0), Outcome::No).is_empty());
    assert!(!Sector::for_outcome(prob(0.001), Outcome::Yes).is_empty());
    assert!(!Sector::for_outcome(prob(0.999), Outcome::No).is_empty());
}

#[test]
fn target_respects_buffer_at_draw_extremes() {
    let p = prob(0.25);
    let lo = target_angle(p, Outcome::Yes, 10.0, &mut ScriptedRandom::new(&[0.0]));
    let hi = target_angle(p, Outcome::Yes, 10.0, &mut ScriptedRandom::new(&[0.999_999]));
    assert!((lo - 10.0).abs() < 1e-9);
    assert!(hi < 80.0 && hi > 79.99);

    let lo = target_angle(p, Outcome::No, 10.0, &mut ScriptedRandom::new(&[0.0]));
    assert!((lo - 100.0).abs() < 1e-9);
}

#[test]
fn target_always_inside_its_sector() {
    let mut rng = SeededRng::new(42);
    for i in 1..100 {
        let p = prob(i as f64 / 100.0);
        for outcome in [Outcome::Yes, Outcome::No] {
            let sector = Sector::for_outcome(p, outcome);
            let angle = target_angle(p, outcome, SECTOR_BUFFER_DEG, &mut rng);
            assert!(
                sector.contains(angle),
                "p={} {outcome}: {angle} not in {sector:?}",
                p.p_yes()
            );
            if sector.width() >= 2.0 * SECTOR_BUFFER_DEG {
                assert!(angle >= sector.start_deg + SECTOR_BUFFER_DEG - 1e-9);
                assert!(angle <= sector.end_deg - SECTOR_BUFFER_DEG + 1e-9);
            }
        }
    }
}

#[test]
fn narrow_sector_collapses_to_midpoint_without_drawing() {
    let mut rng = ScriptedRandom::new(&[0.3]);
    let angle = target_angle(prob(0.98), Outcome::No, 10.0, &mut rng);
    assert!((angle - 356.4).abs() < 1e-9);
    assert_eq!(rng.draws(), 0);

    let angle = target_angle(prob(0.25), Outcome::Yes, 10.0, &mut rng);
    assert!((angle - 31.0).abs() < 1e-9);
    assert_eq!(rng.draws(), 1);
}

#[test]
fn yes_path_covers_full_and_empty_cases() {
    let full = WheelFace::new(prob(1.0)).yes_sector_path();
    assert_eq!(full, "M 1 0 A 1 1 0 1 1 -1 0 A 1 1 0 1 1 1 0 Z");
    assert_eq!(WheelFace::new(prob(0.9995)).yes_sector_path(), full);
    assert!(WheelFace::new(prob(0.0)).yes_sector_path().is_empty());
    assert!(WheelFace::new(prob(0.0005)).yes_sector_path().is_empty());
}

#[test]
fn yes_path_uses_large_arc_past_half() {
    let small = WheelFace::new(prob(0.25)).yes_sector_path();
    let large = WheelFace::new(prob(0.75)).yes_sector_path();
    assert!(small.starts_with("M 0 0 L 1 0 A 1 1 0 0 1 "), "{small}");
    assert!(large.starts_with("M 0 0 L 1 0 A 1 1 0 1 1 "), "{large}");
    assert!(small.ends_with(" Z"));
}

#[test]
fn boundary_point_follows_probability() {
    let face = WheelFace::new(prob(0.5));
    let b = face.boundary_point();
    assert!((b.x + 1.0).abs() < 1e-6 && b.y.abs() < 1e-6);
    assert_eq!(face.boundary_deg(), 180.0);
    assert!(face.shows_boundary_line());
    assert!(!WheelFace::new(prob(0.0)).shows_boundary_line());
    assert!(!WheelFace::new(prob(1.0)).shows_boundary_line());
}

#[test]
fn labels_sit_mid_sector_and_hide_when_thin() {
    let both = WheelFace::new(prob(0.5)).label_positions();
    assert_eq!(both.len(), 2);
    let yes = both[0];
    assert_eq!(yes.outcome, Outcome::Yes);
    assert!(yes.position.x.abs() < 1e-6);
    assert!((yes.position.y - 0.7).abs() < 1e-6);
    let no = both[1];
    assert_eq!(no.outcome, Outcome::No);
    assert!((no.position.y + 0.7).abs() < 1e-6);

    let only_no = WheelFace::new(prob(0.05)).label_positions();
    assert_eq!(only_no.len(), 1);
    assert_eq!(only_no[0].outcome, Outcome::No);

    let only_yes = WheelFace::new(prob(0.95)).label_positions();
    assert_eq!(only_yes.len(), 1);
    assert_eq!(only_yes[0].outcome, Outcome::Yes);

    for label in both.iter() {
        assert!((label.position.length() - LABEL_RADIUS).abs() < 1e-5);
    }
}

#[test]
fn sector_at_wraps_any_angle() {
    let face = WheelFace::new(prob(0.5));
    assert_eq!(face.sector_at(0.0), Outcome::Yes);
    assert_eq!(face.sector_at(179.9), Outcome::Yes);
    assert_eq!(face.sector_at(180.0), Outcome::No);
    assert_eq!(face.sector_at(-10.0), Outcome::No);
    assert_eq!(face.sector_at(370.0), Outcome::Yes);
}

#[test]
fn pins_are_evenly_spaced_on_the_rim() {
    let pins: Vec<_> = pin_positions(PIN_RADIUS).collect();
    assert_eq!(pins.len(), PIN_COUNT as usize);
    assert!((pins[0].x - PIN_RADIUS).abs() < 1e-6 && pins[0].y.abs() < 1e-6);
    for pin in &pins {
        assert!((pin.length() - PIN_RADIUS).abs() < 1e-5);
    }
    let step = pins[0].distance(pins[1]);
    for pair in pins.windows(2) {
        assert!((pair[0].distance(pair[1]) - step).abs() < 1e-5);
    }
}
