//! Notifications produced by a tick
//!
//! The simulation never talks to audio or UI directly. It queues events on
//! `GameState::events` and the orchestrator drains them after the tick.

use serde::Serialize;

use super::tier::Tier;

/// Sound cues (closed set, keyed by name for the audio collaborator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sound {
    Shoot,
    Hit,
    Die,
    Reload,
    Loaded,
    Hurt,
    Wave,
    Empty,
    Pickup,
}

impl Sound {
    pub fn name(self) -> &'static str {
        match self {
            Sound::Shoot => "shoot",
            Sound::Hit => "hit",
            Sound::Die => "die",
            Sound::Reload => "reload",
            Sound::Loaded => "loaded",
            Sound::Hurt => "hurt",
            Sound::Wave => "wave",
            Sound::Empty => "empty",
            Sound::Pickup => "pickup",
        }
    }
}

/// Something the outside world may want to react to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    /// Fire-and-forget sound cue
    Sound(Sound),
    /// Text-to-speech line (barks)
    Speech(String),
    /// A new wave started
    WaveStarted { tier: Tier, wave: u32 },
    /// Match ended; emitted exactly once per match
    GameOver { score: u64 },
}
