//! Probability-to-geometry mapping for the wheel face.
//!
//! Face angles are measured in degrees on the printed surface of the wheel,
//! independent of how far the wheel has turned. The Yes sector starts at 0°
//! and spans `p_yes · 360°`; the No sector fills the remainder.

use crate::constants::{
    FULL_SECTOR_EPSILON, FULL_TURN_DEG, LABEL_HIDE_MARGIN, LABEL_RADIUS, PIN_COUNT,
};
use crate::outcome::{Outcome, Probability};
use crate::rng::RandomSource;
use glam::Vec2;
use smallvec::SmallVec;
use std::f64::consts::{PI, TAU};

/// Half-open arc of face angles `[start_deg, end_deg)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sector {
    pub start_deg: f64,
    pub end_deg: f64,
}

impl Sector {
    pub fn for_outcome(p: Probability, outcome: Outcome) -> Self {
        let boundary = p.p_yes() * FULL_TURN_DEG;
        match outcome {
            Outcome::Yes => Sector {
                start_deg: 0.0,
                end_deg: boundary,
            },
            Outcome::No => Sector {
                start_deg: boundary,
                end_deg: FULL_TURN_DEG,
            },
        }
    }

    pub fn width(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    pub fn midpoint(&self) -> f64 {
        self.start_deg + self.width() / 2.0
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0
    }

    pub fn contains(&self, face_angle: f64) -> bool {
        face_angle >= self.start_deg && face_angle < self.end_deg
    }
}

/// Draw the face angle the wheel should come to rest on.
///
/// The draw is uniform inside the outcome's sector, keeping `buffer_deg` away
/// from both edges. Sectors narrower than two buffers collapse to their
/// midpoint so near-certain probabilities still produce a defined angle.
pub fn target_angle<R: RandomSource + ?Sized>(
    p: Probability,
    outcome: Outcome,
    buffer_deg: f64,
    rng: &mut R,
) -> f64 {
    let sector = Sector::for_outcome(p, outcome);
    if sector.width() >= 2.0 * buffer_deg {
        rng.range(sector.start_deg + buffer_deg, sector.end_deg - buffer_deg)
    } else {
        sector.midpoint()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorLabel {
    pub outcome: Outcome,
    pub position: Vec2,
}

/// Drawable description of the two sectors for a given probability, in
/// unit-circle coordinates (angle 0 along +x, increasing clockwise on screen).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelFace {
    p: Probability,
}

impl WheelFace {
    pub fn new(p: Probability) -> Self {
        Self { p }
    }

    pub fn probability(&self) -> Probability {
        self.p
    }

    pub fn boundary_deg(&self) -> f64 {
        self.p.p_yes() * FULL_TURN_DEG
    }

    pub fn boundary_point(&self) -> Vec2 {
        unit_point(TAU * self.p.p_yes())
    }

    /// The Yes/No divider is only drawn when both sectors are non-empty.
    pub fn shows_boundary_line(&self) -> bool {
        self.p.p_yes() > 0.0 && self.p.p_yes() < 1.0
    }

    /// SVG path of the Yes wedge over a unit circle; empty when there is
    /// nothing to draw.
    pub fn yes_sector_path(&self) -> String {
        let p = self.p.p_yes();
        if p >= 1.0 - FULL_SECTOR_EPSILON {
            "M 1 0 A 1 1 0 1 1 -1 0 A 1 1 0 1 1 1 0 Z".to_string()
        } else if p <= FULL_SECTOR_EPSILON {
            String::new()
        } else {
            let end = self.boundary_point();
            let large_arc = u8::from(p > 0.5);
            format!("M 0 0 L 1 0 A 1 1 0 {large_arc} 1 {} {} Z", end.x, end.y)
        }
    }

    pub fn label_positions(&self) -> SmallVec<[SectorLabel; 2]> {
        let p = self.p.p_yes();
        let mut labels = SmallVec::new();
        if p > LABEL_HIDE_MARGIN {
            labels.push(SectorLabel {
                outcome: Outcome::Yes,
                position: unit_point(PI * p) * LABEL_RADIUS,
            });
        }
        if p < 1.0 - LABEL_HIDE_MARGIN {
            labels.push(SectorLabel {
                outcome: Outcome::No,
                position: unit_point(PI * (1.0 + p)) * LABEL_RADIUS,
            });
        }
        labels
    }

    /// Which outcome owns `face_angle` (any real value, wrapped into a turn).
    pub fn sector_at(&self, face_angle: f64) -> Outcome {
        let a = face_angle.rem_euclid(FULL_TURN_DEG);
        if a < self.boundary_deg() {
            Outcome::Yes
        } else {
            Outcome::No
        }
    }
}

/// Centres of the 24 pins around the rim.
pub fn pin_positions(radius: f32) -> impl Iterator<Item = Vec2> {
    (0..PIN_COUNT).map(move |i| unit_point(TAU * i as f64 / PIN_COUNT as f64) * radius)
}

#[inline]
fn unit_point(radians: f64) -> Vec2 {
    Vec2::new(radians.cos() as f32, radians.sin() as f32)
}
