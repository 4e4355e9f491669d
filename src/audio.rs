//! Audio / speech collaborator boundary
//!
//! Notifications are fire-and-forget: a sink may drop, queue or fail to
//! play anything without affecting the simulation.

use crate::sim::Sound;

/// Anything that can voice game feedback
pub trait AudioSink {
    /// Play a sound cue
    fn play(&mut self, sound: Sound);
    /// Speak a line (text-to-speech)
    fn speak(&mut self, line: &str);
}

/// Sink that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _sound: Sound) {}
    fn speak(&mut self, _line: &str) {}
}

/// Sink that writes cues to the log (headless runs)
#[derive(Debug, Default)]
pub struct LogAudio {
    played: u64,
    spoken: u64,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cues and lines handled so far
    pub fn counts(&self) -> (u64, u64) {
        (self.played, self.spoken)
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, sound: Sound) {
        self.played += 1;
        log::trace!("sfx: {}", sound.name());
    }

    fn speak(&mut self, line: &str) {
        self.spoken += 1;
        log::debug!("tts: {line}");
    }
}

/// Records everything it hears (for tests and replay tooling)
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub sounds: Vec<Sound>,
    pub lines: Vec<String>,
}

impl AudioSink for Recorder {
    fn play(&mut self, sound: Sound) {
        self.sounds.push(sound);
    }

    fn speak(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_audio_counts() {
        let mut audio = LogAudio::new();
        audio.play(Sound::Shoot);
        audio.play(Sound::Hit);
        audio.speak("REPENT!");
        assert_eq!(audio.counts(), (2, 1));
    }

    #[test]
    fn test_sound_names() {
        assert_eq!(Sound::Shoot.name(), "shoot");
        assert_eq!(Sound::Empty.name(), "empty");
        assert_eq!(Sound::Pickup.name(), "pickup");
    }
}
