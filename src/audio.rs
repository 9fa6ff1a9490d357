use oracle_core::tones::{self, Breakpoint, Ramp, Tone, Waveform};
use oracle_core::{AudioFeedback, Outcome, ThemeId};
use rand::Rng;
use wasm_bindgen::JsValue;
use web_sys as web;

// Scheduling lead so the first breakpoint is never in the past
const LEAD_SEC: f64 = 0.005;

/// Browser feedback: WebAudio one-shots plus the pointer wiggle.
///
/// The `AudioContext` is created on first use, which in practice is inside a
/// click handler, so autoplay policies let it start.
pub struct WebAudio {
    ctx: Option<web::AudioContext>,
    pub enabled: bool,
    pointer: Option<web::Element>,
}

impl WebAudio {
    pub fn new(enabled: bool, pointer: Option<web::Element>) -> Self {
        Self {
            ctx: None,
            enabled,
            pointer,
        }
    }

    fn context(&mut self) -> Option<&web::AudioContext> {
        if self.ctx.is_none() {
            match web::AudioContext::new() {
                Ok(ctx) => self.ctx = Some(ctx),
                Err(e) => {
                    log::error!("AudioContext error: {:?}", e);
                    return None;
                }
            }
        }
        let ctx = self.ctx.as_ref()?;
        if ctx.state() == web::AudioContextState::Suspended {
            _ = ctx.resume();
        }
        Some(ctx)
    }

    pub fn play_whoosh(&mut self) {
        self.play(&[tones::whoosh()]);
    }

    pub fn play_chime(&mut self) {
        self.play(&[tones::chime()]);
    }

    pub fn play(&mut self, recipe: &[Tone]) {
        if !self.enabled {
            return;
        }
        let Some(ctx) = self.context() else {
            return;
        };
        for tone in recipe {
            if let Err(e) = schedule_tone(ctx, tone) {
                log::warn!("[audio] tone dropped: {:?}", e);
            }
        }
    }

    fn wiggle_pointer(&self, intensity: f64, duration: f64) {
        let Some(pointer) = &self.pointer else {
            return;
        };
        let frames = js_sys::Array::new();
        for (offset, deg) in [(0.0, 0.0), (0.2, -intensity), (0.5, 5.0), (1.0, 0.0)] {
            let frame = js_sys::Object::new();
            _ = js_sys::Reflect::set(
                &frame,
                &"transform".into(),
                &format!("rotate({deg}deg)").into(),
            );
            _ = js_sys::Reflect::set(&frame, &"offset".into(), &offset.into());
            frames.push(&frame);
        }
        let keyframes: &js_sys::Object = &frames;
        _ = pointer.animate_with_f64(Some(keyframes), duration * 1000.0);
    }
}

impl AudioFeedback for WebAudio {
    fn tick(&mut self, intensity: f64, duration: f64) {
        self.wiggle_pointer(intensity, duration);
        self.play(&[tones::tick()]);
    }

    fn result_chime(&mut self, outcome: Outcome, theme: ThemeId) {
        self.play(&tones::themed_result(outcome, theme));
    }
}

fn oscillator_type(waveform: Waveform) -> web::OscillatorType {
    match waveform {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Square => web::OscillatorType::Square,
        Waveform::Saw => web::OscillatorType::Sawtooth,
        // noise has no oscillator; callers route it through a buffer source
        Waveform::Triangle | Waveform::Noise => web::OscillatorType::Triangle,
    }
}

fn apply(param: &web::AudioParam, points: &[Breakpoint], t0: f64) -> Result<(), JsValue> {
    for bp in points {
        let at = t0 + bp.at;
        match bp.ramp {
            Ramp::Step => param.set_value_at_time(bp.value, at)?,
            Ramp::Linear => param.linear_ramp_to_value_at_time(bp.value, at)?,
            Ramp::Exponential => param.exponential_ramp_to_value_at_time(bp.value, at)?,
        };
    }
    Ok(())
}

fn noise_source(
    ctx: &web::AudioContext,
    seconds: f64,
) -> Result<web::AudioBufferSourceNode, JsValue> {
    let sr = ctx.sample_rate();
    let len = ((sr as f64 * seconds).ceil() as u32).max(1);
    let buffer = ctx.create_buffer(1, len, sr)?;
    let mut rng = rand::thread_rng();
    let mut samples: Vec<f32> = (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect();
    buffer.copy_to_channel(&mut samples, 0)?;
    let src = web::AudioBufferSourceNode::new(ctx)?;
    src.set_buffer(Some(&buffer));
    Ok(src)
}

// Build src -> [lowpass] -> gain -> destination and schedule it
fn schedule_tone(ctx: &web::AudioContext, tone: &Tone) -> Result<(), JsValue> {
    let t0 = ctx.current_time() + LEAD_SEC + tone.delay;
    let t1 = t0 + tone.stop;

    let gain = web::GainNode::new(ctx)?;
    gain.gain().set_value(0.0);
    apply(&gain.gain(), &tone.gain, t0)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    let sink: web::AudioNode = if tone.lowpass.is_empty() {
        gain.clone().into()
    } else {
        let filter = web::BiquadFilterNode::new(ctx)?;
        filter.set_type(web::BiquadFilterType::Lowpass);
        apply(&filter.frequency(), &tone.lowpass, t0)?;
        filter.connect_with_audio_node(&gain)?;
        filter.into()
    };

    if tone.waveform == Waveform::Noise {
        let src = noise_source(ctx, tone.stop)?;
        src.connect_with_audio_node(&sink)?;
        src.start_with_when(t0)?;
        src.stop_with_when(t1)?;
        return Ok(());
    }

    let osc = web::OscillatorNode::new(ctx)?;
    osc.set_type(oscillator_type(tone.waveform));
    apply(&osc.frequency(), &tone.frequency, t0)?;

    if let Some(lfo) = tone.lfo {
        let mod_osc = web::OscillatorNode::new(ctx)?;
        mod_osc.set_type(oscillator_type(lfo.waveform));
        mod_osc.frequency().set_value(lfo.rate_hz);
        let depth = web::GainNode::new(ctx)?;
        depth.gain().set_value(lfo.depth_hz);
        mod_osc.connect_with_audio_node(&depth)?;
        depth.connect_with_audio_param(&osc.frequency())?;
        mod_osc.start_with_when(t0)?;
        mod_osc.stop_with_when(t0 + lfo.stop)?;
    }

    osc.connect_with_audio_node(&sink)?;
    osc.start_with_when(t0)?;
    osc.stop_with_when(t1)?;
    Ok(())
}
