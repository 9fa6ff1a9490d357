use crate::clock::{interpolate, MotionPreference, SpinClock};
use crate::constants::SECTOR_BUFFER_DEG;
use crate::error::SpinError;
use crate::feedback::AudioFeedback;
use crate::geometry::target_angle;
use crate::outcome::{Outcome, Probability};
use crate::planner::{draw_extra_turns, plan_rotation};
use crate::rng::RandomSource;
use crate::theme::ThemeId;
use crate::ticks::TickDetector;
use std::time::Duration;

pub type CompletionCallback = Box<dyn FnOnce()>;

#[derive(Clone, Debug)]
pub struct EngineParams {
    pub buffer_deg: f64,
    pub theme: ThemeId,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            buffer_deg: SECTOR_BUFFER_DEG,
            theme: ThemeId::default(),
        }
    }
}

/// Everything decided when a spin starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinPlan {
    pub outcome: Outcome,
    pub target_face_angle: f64,
    pub extra_turns: u32,
    pub start_rotation: f64,
    pub final_rotation: f64,
    pub duration: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpinStatus {
    Idle,
    Spinning { progress: f64, rotation: f64 },
    /// Returned exactly once per run, on the frame that finished it.
    Completed { rotation: f64, outcome: Outcome },
}

struct SpinRun {
    plan: SpinPlan,
    clock: SpinClock,
    start_time: Duration,
    ticks: TickDetector,
    on_complete: Option<CompletionCallback>,
}

/// Owns the wheel's cumulative rotation and turns spin requests into an
/// eased rotation with tick and completion feedback.
///
/// Time is supplied by the caller: `start_spin` and `advance` take a
/// monotonic timestamp, so the platform loop (or a test) decides the pace.
/// A run cannot be cancelled; starting another while one is active is
/// rejected with [`SpinError::SpinInProgress`].
pub struct SpinOutcomeEngine<A: AudioFeedback, R: RandomSource> {
    pub params: EngineParams,
    feedback: A,
    rng: R,
    committed_rotation: f64,
    rotation: f64,
    run: Option<SpinRun>,
    completed_runs: u64,
}

impl<A: AudioFeedback, R: RandomSource> SpinOutcomeEngine<A, R> {
    pub fn new(params: EngineParams, feedback: A, rng: R) -> Self {
        Self {
            params,
            feedback,
            rng,
            committed_rotation: 0.0,
            rotation: 0.0,
            run: None,
            completed_runs: 0,
        }
    }

    /// Current render angle in degrees; animated during a run.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Cumulative rotation committed by the latest spin start.
    pub fn resting_rotation(&self) -> f64 {
        self.committed_rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.run.is_some()
    }

    pub fn active_plan(&self) -> Option<&SpinPlan> {
        self.run.as_ref().map(|r| &r.plan)
    }

    pub fn completed_runs(&self) -> u64 {
        self.completed_runs
    }

    pub fn theme(&self) -> ThemeId {
        self.params.theme
    }

    pub fn set_theme(&mut self, theme: ThemeId) {
        self.params.theme = theme;
    }

    pub fn feedback(&self) -> &A {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut A {
        &mut self.feedback
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn start_spin(
        &mut self,
        p_yes: f64,
        outcome: Outcome,
        reduce_motion: bool,
        now: Duration,
        on_complete: impl FnOnce() + 'static,
    ) -> Result<SpinPlan, SpinError> {
        if self.run.is_some() {
            log::warn!("[spin] start rejected: a spin is already in progress");
            return Err(SpinError::SpinInProgress);
        }
        let p = Probability::new(p_yes).map_err(|e| {
            log::warn!("[spin] start rejected: {}", e);
            e
        })?;

        let motion = MotionPreference::from_reduce_motion(reduce_motion);
        let target_face_angle = target_angle(p, outcome, self.params.buffer_deg, &mut self.rng);
        let extra_turns = draw_extra_turns(reduce_motion, &mut self.rng);
        let start_rotation = self.committed_rotation;
        let final_rotation = plan_rotation(start_rotation, target_face_angle, extra_turns);
        let clock = SpinClock::for_motion(motion);

        let plan = SpinPlan {
            outcome,
            target_face_angle,
            extra_turns,
            start_rotation,
            final_rotation,
            duration: clock.duration(),
        };
        log::info!(
            "[spin] start p_yes={:.3} outcome={} target={:.1}° turns={} rotation {:.1}° -> {:.1}° over {:?}",
            p_yes,
            outcome,
            target_face_angle,
            extra_turns,
            start_rotation,
            final_rotation,
            plan.duration
        );

        self.committed_rotation = final_rotation;
        self.run = Some(SpinRun {
            plan,
            clock,
            start_time: now,
            ticks: TickDetector::new(start_rotation),
            on_complete: Some(Box::new(on_complete)),
        });
        Ok(plan)
    }

    /// One frame step. Publishes the interpolated rotation, emits at most one
    /// tick, and on the final frame settles exactly on the planned rotation,
    /// plays the result chime and runs the completion callback.
    pub fn advance(&mut self, now: Duration) -> SpinStatus {
        let Some(run) = self.run.as_mut() else {
            return SpinStatus::Idle;
        };
        let elapsed = now.saturating_sub(run.start_time);
        let progress = run.clock.progress(elapsed);
        let velocity = run.clock.velocity(elapsed);
        let finished = run.clock.is_finished(elapsed);
        let rotation = if finished {
            run.plan.final_rotation
        } else {
            interpolate(run.plan.start_rotation, run.plan.final_rotation, progress)
        };

        if let Some(tick) = run.ticks.observe(rotation, velocity) {
            log::trace!(
                "[tick] pin={} intensity={:.1} duration={:.3}s",
                tick.pin(),
                tick.intensity,
                tick.duration
            );
            self.feedback.tick(tick.intensity, tick.duration);
        }
        self.rotation = rotation;

        if !finished {
            return SpinStatus::Spinning { progress, rotation };
        }

        let Some(mut run) = self.run.take() else {
            return SpinStatus::Idle;
        };
        let outcome = run.plan.outcome;
        self.rotation = run.plan.final_rotation;
        self.completed_runs += 1;
        log::info!(
            "[spin] complete outcome={} rotation={:.1}° ticks={}",
            outcome,
            self.rotation,
            run.ticks.fired_count()
        );
        self.feedback.result_chime(outcome, self.params.theme);
        if let Some(on_complete) = run.on_complete.take() {
            on_complete();
        }
        SpinStatus::Completed {
            rotation: self.rotation,
            outcome,
        }
    }
}
