//! Frame orchestrator
//!
//! Drives the simulation from the host's per-frame callback: at most one
//! tick per `FRAME_INTERVAL_MS` of real time, no catch-up backlog. After a
//! tick it forwards queued events to the audio sink and the shell, then
//! pushes a stats snapshot. Once the match is over it stops ticking until
//! `restart`.

use crate::audio::AudioSink;
use crate::consts::FRAME_INTERVAL_MS;
use crate::hud::{GameShell, StatsSnapshot};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// What a call to `Game::frame` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Too soon since the last tick; nothing happened
    Deferred,
    /// One tick ran
    Ticked,
    /// Match is over; waiting for restart
    Halted,
}

/// Game instance holding the match and its collaborators
pub struct Game<A: AudioSink, S: GameShell> {
    state: GameState,
    settings: Settings,
    input: TickInput,
    last_tick_ms: Option<f64>,
    audio: A,
    shell: S,
}

fn new_match(settings: &Settings, now_ms: f64) -> GameState {
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!(
        "Match started with seed {seed} ({} progression)",
        settings.progression.as_str()
    );
    GameState::new(seed, settings.rules(), now_ms)
}

impl<A: AudioSink, S: GameShell> Game<A, S> {
    /// The first `frame` ticks immediately; later ones follow the cadence
    pub fn new(settings: Settings, audio: A, shell: S, now_ms: f64) -> Self {
        Self {
            state: new_match(&settings, now_ms),
            settings,
            input: TickInput::default(),
            last_tick_ms: None,
            audio,
            shell,
        }
    }

    /// Throw the old match away and start a fresh one.
    /// The first `frame` afterwards ticks immediately.
    pub fn restart(&mut self, now_ms: f64) {
        self.state = new_match(&self.settings, now_ms);
        self.last_tick_ms = None;
    }

    /// Latest input; raw input events write here between frames
    pub fn input_mut(&mut self) -> &mut TickInput {
        &mut self.input
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    /// Host frame callback
    pub fn frame(&mut self, now_ms: f64) -> FrameOutcome {
        if !self.state.is_playing() {
            return FrameOutcome::Halted;
        }
        if let Some(last) = self.last_tick_ms {
            if now_ms - last < FRAME_INTERVAL_MS {
                return FrameOutcome::Deferred;
            }
        }
        self.last_tick_ms = Some(now_ms);

        tick(&mut self.state, &self.input, now_ms);
        self.dispatch_events();
        self.shell
            .update_stats(&StatsSnapshot::capture(&self.state, now_ms));
        FrameOutcome::Ticked
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Sound(sound) => {
                    if self.settings.sound {
                        self.audio.play(sound);
                    }
                }
                GameEvent::Speech(line) => {
                    if self.settings.speech {
                        self.audio.speak(&line);
                    }
                }
                GameEvent::WaveStarted { tier, wave } => {
                    log::debug!("Wave {} started: {}", wave + 1, tier.label());
                }
                GameEvent::GameOver { score } => self.shell.game_over(score),
            }
        }
    }
}
