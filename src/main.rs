//! Sin Purge headless runner
//!
//! Plays one match with the autopilot on a simulated 60 Hz clock and logs
//! how it went. Usage: `sin-purge [settings.json]`

use std::process::ExitCode;

use sin_purge::audio::{AudioSink, LogAudio, Silent};
use sin_purge::hud::LogShell;
use sin_purge::{FrameOutcome, Game, Settings};

/// Simulated host frame period
const HOST_FRAME_MS: f64 = 1000.0 / 60.0;
/// Give up after ten simulated minutes
const MAX_FRAMES: u64 = 60 * 60 * 10;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Sin Purge (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    if settings.sound || settings.speech {
        let (game, elapsed) = play(settings, LogAudio::new());
        report(&game, elapsed);
        let (sounds, lines) = game.audio().counts();
        log::info!("{sounds} sound cues, {lines} barks");
    } else {
        let (game, elapsed) = play(settings, Silent);
        report(&game, elapsed);
    }
    ExitCode::SUCCESS
}

/// Run one autopilot match; returns the game and the simulated time it took
fn play<A: AudioSink>(settings: Settings, audio: A) -> (Game<A, LogShell>, f64) {
    let mut game = Game::new(settings, audio, LogShell::default(), 0.0);
    game.input_mut().idle_mode = true;

    let mut now = 0.0;
    for _ in 0..MAX_FRAMES {
        if game.frame(now) == FrameOutcome::Halted {
            break;
        }
        now += HOST_FRAME_MS;
    }
    (game, now)
}

fn report<A: AudioSink>(game: &Game<A, LogShell>, elapsed_ms: f64) {
    let state = game.state();
    log::info!(
        "Survived {:.1}s, reached wave {} ({}), score {}",
        elapsed_ms / 1000.0,
        state.wave_index + 1,
        state.tier.label(),
        state.score
    );
    if game.shell().final_score.is_none() {
        log::info!("Time limit reached with {} hp left", state.player.hp);
    }
}
