use crate::error::SpinError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Yes,
    No,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Yes => "yes",
            Outcome::No => "no",
        }
    }

    pub fn is_yes(self) -> bool {
        self == Outcome::Yes
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = SpinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("yes") {
            Ok(Outcome::Yes)
        } else if s.eq_ignore_ascii_case("no") {
            Ok(Outcome::No)
        } else {
            Err(SpinError::UnknownOutcome(s.to_string()))
        }
    }
}

/// Probability of a "yes" answer, validated into `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Probability(f64);

impl Probability {
    pub const HALF: Probability = Probability(0.5);

    pub fn new(p_yes: f64) -> Result<Self, SpinError> {
        // NaN fails the range check as well
        if (0.0..=1.0).contains(&p_yes) {
            Ok(Self(p_yes))
        } else {
            Err(SpinError::ProbabilityOutOfRange(p_yes))
        }
    }

    pub fn p_yes(self) -> f64 {
        self.0
    }

    pub fn p_no(self) -> f64 {
        1.0 - self.0
    }

    /// Share of the wheel owned by `outcome`.
    pub fn of(self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Yes => self.p_yes(),
            Outcome::No => self.p_no(),
        }
    }
}

impl TryFrom<f64> for Probability {
    type Error = SpinError;

    fn try_from(p_yes: f64) -> Result<Self, Self::Error> {
        Probability::new(p_yes)
    }
}
