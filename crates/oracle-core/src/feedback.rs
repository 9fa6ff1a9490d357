use crate::outcome::Outcome;
use crate::theme::ThemeId;

/// Audio/haptic capability the engine drives. Calls are fire-and-forget;
/// implementations decide how (or whether) to make a sound.
pub trait AudioFeedback {
    /// A pin passed the pointer. `intensity` is the pointer deflection in
    /// degrees, `duration` the wiggle length in seconds.
    fn tick(&mut self, intensity: f64, duration: f64);

    fn result_chime(&mut self, outcome: Outcome, theme: ThemeId);
}

impl<A: AudioFeedback + ?Sized> AudioFeedback for &mut A {
    fn tick(&mut self, intensity: f64, duration: f64) {
        (**self).tick(intensity, duration)
    }

    fn result_chime(&mut self, outcome: Outcome, theme: ThemeId) {
        (**self).result_chime(outcome, theme)
    }
}

impl<A: AudioFeedback + ?Sized> AudioFeedback for Box<A> {
    fn tick(&mut self, intensity: f64, duration: f64) {
        (**self).tick(intensity, duration)
    }

    fn result_chime(&mut self, outcome: Outcome, theme: ThemeId) {
        (**self).result_chime(outcome, theme)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SilentFeedback;

impl AudioFeedback for SilentFeedback {
    fn tick(&mut self, _intensity: f64, _duration: f64) {}

    fn result_chime(&mut self, _outcome: Outcome, _theme: ThemeId) {}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FeedbackEvent {
    Tick { intensity: f64, duration: f64 },
    Chime { outcome: Outcome, theme: ThemeId },
}

/// Keeps every call in order; used by tests and the headless driver.
#[derive(Clone, Debug, Default)]
pub struct RecordedFeedback {
    pub events: Vec<FeedbackEvent>,
}

impl RecordedFeedback {
    pub fn tick_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, FeedbackEvent::Tick { .. }))
            .count()
    }

    pub fn chimes(&self) -> impl Iterator<Item = (Outcome, ThemeId)> + '_ {
        self.events.iter().filter_map(|e| match *e {
            FeedbackEvent::Chime { outcome, theme } => Some((outcome, theme)),
            FeedbackEvent::Tick { .. } => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl AudioFeedback for RecordedFeedback {
    fn tick(&mut self, intensity: f64, duration: f64) {
        self.events.push(FeedbackEvent::Tick { intensity, duration });
    }

    fn result_chime(&mut self, outcome: Outcome, theme: ThemeId) {
        self.events.push(FeedbackEvent::Chime { outcome, theme });
    }
}
