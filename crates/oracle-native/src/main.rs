use anyhow::{anyhow, bail, Context};
use oracle_core::tones;
use oracle_core::{
    confidence_label, face_angle_at, format_percentage, theme, AudioFeedback, EngineParams,
    Outcome, Probability, RandomSource, SeededRng, SpinOutcomeEngine, SpinStatus, ThemeId,
    WheelFace,
};
use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(16);

const USAGE: &str = "usage: oracle-native <p_yes> <yes|no> [--reduce-motion] [--theme ID] [--seed N] [--spins N]";

struct Args {
    p_yes: f64,
    outcome: Outcome,
    reduce_motion: bool,
    theme: ThemeId,
    seed: Option<u64>,
    spins: u32,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Args> {
    let mut positional = Vec::new();
    let mut parsed = Args {
        p_yes: 0.5,
        outcome: Outcome::Yes,
        reduce_motion: false,
        theme: ThemeId::default(),
        seed: None,
        spins: 1,
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--reduce-motion" => parsed.reduce_motion = true,
            "--theme" => {
                let v = args.next().ok_or_else(|| anyhow!("--theme needs a value"))?;
                parsed.theme = v.parse()?;
            }
            "--seed" => {
                let v = args.next().ok_or_else(|| anyhow!("--seed needs a value"))?;
                parsed.seed = Some(v.parse().context("--seed")?);
            }
            "--spins" => {
                let v = args.next().ok_or_else(|| anyhow!("--spins needs a value"))?;
                parsed.spins = v.parse().context("--spins")?;
            }
            "-h" | "--help" => bail!(USAGE),
            s if s.starts_with("--") => bail!("unknown flag {s}\n{USAGE}"),
            _ => positional.push(arg),
        }
    }
    match positional.as_slice() {
        [p, outcome] => {
            parsed.p_yes = p.parse().context("p_yes")?;
            parsed.outcome = outcome.parse()?;
        }
        _ => bail!(USAGE),
    }
    // fail early with the same message the engine would give
    Probability::new(parsed.p_yes)?;
    Ok(parsed)
}

/// Stands in for speakers: ticks at debug, result sounds at info.
struct LogFeedback;

impl AudioFeedback for LogFeedback {
    fn tick(&mut self, intensity: f64, duration: f64) {
        log::debug!("tick  wiggle={:.1}° for {:.0}ms", intensity, duration * 1000.0);
    }

    fn result_chime(&mut self, outcome: Outcome, theme: ThemeId) {
        let recipe = tones::themed_result(outcome, theme);
        let length = recipe.iter().map(|t| t.end()).fold(0.0, f64::max);
        log::info!(
            "chime {} ({} theme): {} voice(s), {:.2}s",
            outcome,
            theme,
            recipe.len(),
            length
        );
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(SeededRng::new(seed)),
        None => Box::new(rand::thread_rng()),
    };
    let params = EngineParams {
        theme: args.theme,
        ..EngineParams::default()
    };
    let mut engine = SpinOutcomeEngine::new(params, LogFeedback, rng);
    let face = WheelFace::new(Probability::new(args.p_yes)?);
    log::info!(
        "wheel: {} yes / {} no, theme {}",
        format_percentage(args.p_yes),
        format_percentage(1.0 - args.p_yes),
        theme(args.theme).name
    );

    let epoch = Instant::now();
    for n in 1..=args.spins {
        let done = Rc::new(Cell::new(false));
        let done_flag = done.clone();
        let plan = engine.start_spin(
            args.p_yes,
            args.outcome,
            args.reduce_motion,
            epoch.elapsed(),
            move || done_flag.set(true),
        )?;
        log::info!(
            "spin {}/{}: target {:.1}° after {} extra turns",
            n,
            args.spins,
            plan.target_face_angle,
            plan.extra_turns
        );

        let rotation = loop {
            match engine.advance(epoch.elapsed()) {
                SpinStatus::Completed { rotation, .. } => break rotation,
                SpinStatus::Spinning { .. } => thread::sleep(FRAME),
                SpinStatus::Idle => bail!("engine went idle before completing"),
            }
        };
        if !done.get() {
            bail!("completion callback did not run");
        }

        let face_angle = face_angle_at(rotation);
        log::info!(
            "spin {} landed at {:.1}° (face {:.1}°) on {}: {}",
            n,
            rotation,
            face_angle,
            face.sector_at(face_angle).as_str().to_uppercase(),
            confidence_label(args.p_yes)
        );
    }
    Ok(())
}
