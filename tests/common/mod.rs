// Shared helpers for the host-side engine tests.
#![allow(dead_code)]

use oracle_core::{
    EngineParams, RandomSource, RecordedFeedback, SpinOutcomeEngine, SpinStatus,
};
use std::time::Duration;

/// Replays a fixed list of unit draws, cycling when exhausted.
pub struct ScriptedRandom {
    values: Vec<f64>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(values: &[f64]) -> Self {
        assert!(!values.is_empty(), "script needs at least one value");
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }

    pub fn draws(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }
}

pub type TestEngine = SpinOutcomeEngine<RecordedFeedback, ScriptedRandom>;

pub fn scripted_engine(values: &[f64]) -> TestEngine {
    SpinOutcomeEngine::new(
        EngineParams::default(),
        RecordedFeedback::default(),
        ScriptedRandom::new(values),
    )
}

/// Drive the active run at a fixed frame step until it completes, returning
/// every status seen (the last one is `Completed`).
pub fn run_frames<A, R>(
    engine: &mut SpinOutcomeEngine<A, R>,
    start: Duration,
    step: Duration,
) -> Vec<SpinStatus>
where
    A: oracle_core::AudioFeedback,
    R: RandomSource,
{
    let mut statuses = Vec::new();
    let mut now = start;
    for _ in 0..10_000 {
        let status = engine.advance(now);
        statuses.push(status);
        if matches!(status, SpinStatus::Completed { .. }) {
            return statuses;
        }
        now += step;
    }
    panic!("spin did not complete within 10k frames");
}

pub fn angle_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}
