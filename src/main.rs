//! Flap Sim headless entry point
//!
//! Runs the engine under the autopilot with a simulated 60 Hz frame clock and
//! logs each run. Usage: `flap-sim [config.json] [runs]`

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use flap_sim::sim::{Config, ConfigError, Engine, GamePhase};
use flap_sim::{Autopilot, Host};

const SCREEN_WIDTH: f32 = 480.0;
const SCREEN_HEIGHT: f32 = 640.0;
const FRAME: Duration = Duration::from_micros(16_667);
/// Stop a run that survives this long
const MAX_RUN_FRAMES: u32 = 60 * 120;

fn main() {
    env_logger::init();
    log::info!("Flap Sim (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ConfigError> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let runs: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);

    let engine = Engine::new(SCREEN_WIDTH, SCREEN_HEIGHT, config)?;
    log::info!("Engine seeded with {}", engine.seed());
    let mut host = Host::new(engine);

    let best = Rc::new(Cell::new(0u64));
    let best_in_listener = best.clone();
    host.engine_mut().on_game_over(move |score| {
        if score > best_in_listener.get() {
            log::info!("New best score: {score}");
            best_in_listener.set(score);
        }
    });
    let stamps = Rc::new(Cell::new(0u32));
    let stamps_in_listener = stamps.clone();
    host.engine_mut()
        .on_collectible_pickup(move || stamps_in_listener.set(stamps_in_listener.get() + 1));

    let pilot = Autopilot::default();
    let mut now = Instant::now();

    for run in 1..=runs {
        host.start(now);
        let mut frames = 0;
        while frames < MAX_RUN_FRAMES {
            pilot.drive(host.engine_mut());
            now += FRAME;
            if host.frame(now).is_none() {
                break;
            }
            frames += 1;
        }

        let snap = host.snapshot();
        let outcome = if snap.phase == GamePhase::GameOver {
            "crashed"
        } else {
            "survived"
        };
        log::info!(
            "Run {run}: {outcome} after {:.1}s, score {}, streak {}, stamps {}",
            snap.elapsed,
            snap.score,
            snap.streak,
            stamps.get()
        );
        host.reset();
        stamps.set(0);
    }

    log::info!("Best score over {runs} runs: {}", best.get());
    Ok(())
}
