// Host-side tests for rotation planning.

mod common;

use common::{angle_distance, ScriptedRandom};
use oracle_core::*;

#[test]
fn face_angle_is_the_reverse_of_rotation() {
    assert_eq!(face_angle_at(0.0), 0.0);
    assert_eq!(face_angle_at(90.0), 270.0);
    assert_eq!(face_angle_at(360.0), 0.0);
    assert_eq!(face_angle_at(-90.0), 90.0);
    assert_eq!(face_angle_at(2970.0), 270.0);
}

#[test]
fn drawing_is_turned_a_quarter_back_at_rest() {
    assert_eq!(POINTER_SCREEN_DEG, 270.0);
    assert_eq!(render_rotation(0.0), -90.0);
    assert_eq!(face_angle_on_screen(render_rotation(0.0)), 0.0);
    // without the quarter turn the pointer would sit over face angle 270
    assert_eq!(face_angle_on_screen(0.0), 270.0);
}

#[test]
fn screen_pointer_agrees_with_face_angle_at() {
    for step in 0..720 {
        let rotation = step as f64 * 7.5 - 900.0;
        let seen = face_angle_on_screen(render_rotation(rotation));
        assert!(
            angle_distance(seen, face_angle_at(rotation)) < 1e-9,
            "rotation {rotation}: screen {seen} vs face {}",
            face_angle_at(rotation)
        );
    }
}

#[test]
fn plan_matches_hand_computed_values() {
    assert_eq!(plan_rotation(0.0, 0.0, 0), 0.0);
    assert_eq!(plan_rotation(0.0, 270.0, 8), 2970.0);
    assert_eq!(plan_rotation(100.0, 30.0, 8), 3210.0);
    // already aligned: no partial turn, only bonus turns
    assert_eq!(plan_rotation(2970.0, 270.0, 9), 2970.0 + 9.0 * 360.0);
}

#[test]
fn plan_always_moves_forward_and_lands_on_target() {
    // Property: across a grid of states the plan is forward, adds exactly the
    // bonus turns plus less than one turn, and brings the target under the pointer
    let mut current = 0.0;
    for step in 0..500 {
        let target = (step as f64 * 37.3) % 360.0;
        let turns = (step % 12) as u32;
        let next = plan_rotation(current, target, turns);
        let partial = next - current - f64::from(turns) * 360.0;
        assert!(
            partial > -1e-6 && partial < 360.0 + 1e-6,
            "step {step}: partial turn {partial}"
        );
        assert!(
            angle_distance(face_angle_at(next), target) < 1e-6,
            "step {step}: {next} shows {} not {target}",
            face_angle_at(next)
        );
        current = next;
    }
}

#[test]
fn extra_turns_span_eight_to_eleven() {
    for (u, expected) in [(0.0, 8), (0.249, 8), (0.25, 9), (0.5, 10), (0.75, 11), (0.999, 11)] {
        let turns = draw_extra_turns(false, &mut ScriptedRandom::new(&[u]));
        assert_eq!(turns, expected, "draw {u}");
    }
}

#[test]
fn reduced_motion_draws_nothing() {
    let mut rng = ScriptedRandom::new(&[0.9]);
    assert_eq!(draw_extra_turns(true, &mut rng), 0);
    assert_eq!(rng.draws(), 0);
}

#[test]
fn extra_turns_from_real_rng_stay_in_range() {
    let mut rng = SeededRng::new(1234);
    for _ in 0..1000 {
        let turns = draw_extra_turns(false, &mut rng);
        assert!((8..=11).contains(&turns));
    }
}
