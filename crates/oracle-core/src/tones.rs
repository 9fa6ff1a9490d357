//! Platform-neutral tone recipes.
//!
//! A [`Tone`] describes one synthesized voice as breakpoint automation on
//! frequency, gain and an optional lowpass filter. Front ends translate it
//! into their own audio graph (WebAudio params in the browser); the engine
//! itself never synthesizes anything.

use crate::outcome::Outcome;
use crate::theme::ThemeId;
use smallvec::{smallvec, SmallVec};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Saw,
    Triangle,
    Noise,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ramp {
    /// Jump to the value at `at`.
    Step,
    Linear,
    /// Exponential ramps require strictly positive values on both ends.
    Exponential,
}

/// Automation point; `at` is seconds after the tone starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint {
    pub at: f64,
    pub value: f32,
    pub ramp: Ramp,
}

pub type Automation = SmallVec<[Breakpoint; 4]>;

#[inline]
pub fn set(at: f64, value: f32) -> Breakpoint {
    Breakpoint {
        at,
        value,
        ramp: Ramp::Step,
    }
}

#[inline]
pub fn lin(at: f64, value: f32) -> Breakpoint {
    Breakpoint {
        at,
        value,
        ramp: Ramp::Linear,
    }
}

#[inline]
pub fn exp(at: f64, value: f32) -> Breakpoint {
    Breakpoint {
        at,
        value,
        ramp: Ramp::Exponential,
    }
}

/// Frequency modulation by a second oscillator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lfo {
    pub waveform: Waveform,
    pub rate_hz: f32,
    pub depth_hz: f32,
    pub stop: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tone {
    pub waveform: Waveform,
    /// Offset from the moment the recipe is played, in seconds.
    pub delay: f64,
    /// Length after `delay`, in seconds.
    pub stop: f64,
    pub frequency: Automation,
    pub gain: Automation,
    /// Lowpass cutoff automation; empty means unfiltered.
    pub lowpass: Automation,
    pub lfo: Option<Lfo>,
}

impl Tone {
    pub fn new(waveform: Waveform, stop: f64) -> Self {
        Self {
            waveform,
            delay: 0.0,
            stop,
            frequency: SmallVec::new(),
            gain: SmallVec::new(),
            lowpass: SmallVec::new(),
            lfo: None,
        }
    }

    pub fn delayed(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn frequency(mut self, points: &[Breakpoint]) -> Self {
        self.frequency.extend_from_slice(points);
        self
    }

    pub fn gain(mut self, points: &[Breakpoint]) -> Self {
        self.gain.extend_from_slice(points);
        self
    }

    pub fn lowpass(mut self, points: &[Breakpoint]) -> Self {
        self.lowpass.extend_from_slice(points);
        self
    }

    pub fn lfo(mut self, lfo: Lfo) -> Self {
        self.lfo = Some(lfo);
        self
    }

    /// Seconds from play until this tone is silent.
    pub fn end(&self) -> f64 {
        self.delay + self.stop
    }
}

pub type Recipe = SmallVec<[Tone; 3]>;

/// Short high click played when a pin passes the pointer.
pub fn tick() -> Tone {
    Tone::new(Waveform::Square, 0.01)
        .frequency(&[set(0.0, 800.0), exp(0.01, 100.0)])
        .gain(&[set(0.0, 0.05), exp(0.01, 0.001)])
}

/// Filtered noise swell played while the oracle is consulted.
pub fn whoosh() -> Tone {
    Tone::new(Waveform::Noise, 0.5)
        .lowpass(&[set(0.0, 200.0), lin(0.2, 800.0), lin(0.5, 200.0)])
        .gain(&[set(0.0, 0.0), lin(0.1, 0.1), lin(0.5, 0.0)])
}

/// Soft A5 confirmation when a question is submitted.
pub fn chime() -> Tone {
    Tone::new(Waveform::Sine, 0.5)
        .frequency(&[set(0.0, 880.0)])
        .gain(&[set(0.0, 0.0), lin(0.02, 0.05), exp(0.5, 0.001)])
}

/// Result sound for `outcome` in the style of `theme`.
pub fn themed_result(outcome: Outcome, theme: ThemeId) -> Recipe {
    let yes = outcome.is_yes();
    match theme {
        ThemeId::Cyber => cyber(yes),
        ThemeId::Carnival => carnival(yes),
        ThemeId::Pastel => pastel(yes),
        ThemeId::Noir => noir(yes),
        ThemeId::Dtu => dtu(yes),
    }
}

fn cyber(yes: bool) -> Recipe {
    if yes {
        // ascending arpeggio
        smallvec![Tone::new(Waveform::Saw, 0.6)
            .frequency(&[set(0.0, 440.0), set(0.1, 880.0), set(0.2, 1760.0)])
            .gain(&[set(0.0, 0.1), exp(0.6, 0.001)])]
    } else {
        // descending glitch
        smallvec![Tone::new(Waveform::Square, 0.6)
            .frequency(&[set(0.0, 220.0), lin(0.4, 55.0)])
            .gain(&[set(0.0, 0.15), exp(0.5, 0.001)])
            .lfo(Lfo {
                waveform: Waveform::Square,
                rate_hz: 50.0,
                depth_hz: 500.0,
                stop: 0.5,
            })]
    }
}

fn carnival(yes: bool) -> Recipe {
    if yes {
        // C major bells
        [523.25_f32, 659.25, 783.99]
            .iter()
            .enumerate()
            .map(|(i, &hz)| {
                Tone::new(Waveform::Triangle, 1.5)
                    .frequency(&[set(0.0, hz)])
                    .gain(&[
                        set(0.0, 0.0),
                        lin(0.05 + i as f64 * 0.05, 0.1),
                        exp(1.0, 0.001),
                    ])
            })
            .collect()
    } else {
        // slide whistle
        smallvec![Tone::new(Waveform::Sine, 0.6)
            .frequency(&[set(0.0, 600.0), exp(0.6, 150.0)])
            .gain(&[set(0.0, 0.1), lin(0.6, 0.0)])]
    }
}

fn pastel(yes: bool) -> Recipe {
    if yes {
        // two rising bubbles
        smallvec![
            Tone::new(Waveform::Sine, 0.3)
                .frequency(&[set(0.0, 800.0), exp(0.1, 1200.0)])
                .gain(&[set(0.0, 0.1), exp(0.3, 0.001)]),
            Tone::new(Waveform::Sine, 0.3)
                .delayed(0.15)
                .frequency(&[set(0.0, 1200.0), exp(0.1, 1800.0)])
                .gain(&[set(0.0, 0.1), exp(0.3, 0.001)]),
        ]
    } else {
        // soft thud
        smallvec![Tone::new(Waveform::Sine, 0.3)
            .frequency(&[set(0.0, 200.0), exp(0.3, 50.0)])
            .gain(&[set(0.0, 0.2), exp(0.3, 0.001)])]
    }
}

fn noir(yes: bool) -> Recipe {
    if yes {
        // long C5 with slow decay
        smallvec![Tone::new(Waveform::Triangle, 2.0)
            .frequency(&[set(0.0, 523.25)])
            .gain(&[set(0.0, 0.2), exp(2.0, 0.001)])]
    } else {
        // low C2 foghorn through a warm lowpass
        smallvec![Tone::new(Waveform::Saw, 1.5)
            .frequency(&[set(0.0, 65.41)])
            .lowpass(&[set(0.0, 200.0)])
            .gain(&[set(0.0, 0.0), lin(0.2, 0.2), lin(1.5, 0.0)])]
    }
}

fn dtu(yes: bool) -> Recipe {
    if yes {
        // detached A major triad
        [880.0_f32, 1108.73, 1318.51]
            .iter()
            .enumerate()
            .map(|(i, &hz)| {
                Tone::new(Waveform::Square, 0.2)
                    .delayed(i as f64 * 0.08)
                    .frequency(&[set(0.0, hz)])
                    .gain(&[set(0.0, 0.0), lin(0.01, 0.05), exp(0.15, 0.001)])
            })
            .collect()
    } else {
        // double buzzer
        [0.0, 0.15]
            .iter()
            .map(|&offset| {
                Tone::new(Waveform::Saw, 0.15)
                    .delayed(offset)
                    .frequency(&[set(0.0, 150.0), lin(0.1, 120.0)])
                    .gain(&[set(0.0, 0.06), exp(0.12, 0.001)])
            })
            .collect()
    }
}
