use crate::constants::{EXTRA_TURNS_MIN, EXTRA_TURNS_SPAN, FULL_TURN_DEG, POINTER_SCREEN_DEG};
use crate::rng::RandomSource;

/// Face angle sitting under the fixed pointer after `rotation` degrees of
/// clockwise rotation.
#[inline]
pub fn face_angle_at(rotation: f64) -> f64 {
    (FULL_TURN_DEG - rotation.rem_euclid(FULL_TURN_DEG)).rem_euclid(FULL_TURN_DEG)
}

/// On-screen rotation to draw for a cumulative `rotation`.
///
/// Faces are drawn with angle 0 along +x, so the drawing is turned back a
/// quarter so that face angle 0 starts under the pointer.
#[inline]
pub fn render_rotation(rotation: f64) -> f64 {
    rotation + POINTER_SCREEN_DEG - FULL_TURN_DEG
}

/// Face angle a viewer sees under the pointer when the drawing is turned by
/// `screen_rotation` degrees clockwise.
#[inline]
pub fn face_angle_on_screen(screen_rotation: f64) -> f64 {
    (POINTER_SCREEN_DEG - screen_rotation).rem_euclid(FULL_TURN_DEG)
}

/// Next cumulative rotation that brings `target_face_angle` under the
/// pointer. Always moves forward: the partial turn is in `[0, 360)` and the
/// bonus turns only add whole revolutions.
pub fn plan_rotation(current_rotation: f64, target_face_angle: f64, extra_turns: u32) -> f64 {
    let base_target = (FULL_TURN_DEG - target_face_angle).rem_euclid(FULL_TURN_DEG);
    let current_mod = current_rotation.rem_euclid(FULL_TURN_DEG);
    let delta = (base_target - current_mod + FULL_TURN_DEG).rem_euclid(FULL_TURN_DEG);
    current_rotation + delta + f64::from(extra_turns) * FULL_TURN_DEG
}

/// Bonus revolutions for a spin: none under reduced motion, otherwise
/// uniformly 8..=11.
pub fn draw_extra_turns<R: RandomSource + ?Sized>(reduce_motion: bool, rng: &mut R) -> u32 {
    if reduce_motion {
        return 0;
    }
    let offset = (rng.next_unit() * f64::from(EXTRA_TURNS_SPAN)).floor() as u32;
    EXTRA_TURNS_MIN + offset.min(EXTRA_TURNS_SPAN - 1)
}
