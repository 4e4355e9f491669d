//! Match settings
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::MatchRules;

/// How the player grows stronger over a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Progression {
    /// Ammo, reloads, fury; enemies sometimes drop supplies
    #[default]
    Magazine,
    /// No ammo; each survived wave awards a permanent relic
    Relics,
}

impl Progression {
    pub fn as_str(&self) -> &'static str {
        match self {
            Progression::Magazine => "magazine",
            Progression::Relics => "relics",
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub progression: Progression,
    /// Fixed match seed; a fresh random seed per match when absent
    pub seed: Option<u64>,

    // === Odds ===
    /// Chance a killed enemy drops a supply pickup (magazine only)
    pub drop_chance: f64,
    /// Chance of a bark on a kill
    pub kill_bark_chance: f64,
    /// Chance of a bark when hurt
    pub hurt_bark_chance: f64,

    // === Audio ===
    /// Forward sound cues to the audio sink
    pub sound: bool,
    /// Forward barks to text-to-speech
    pub speech: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let rules = MatchRules::default();
        Self {
            progression: rules.progression,
            seed: None,
            drop_chance: rules.drop_chance,
            kill_bark_chance: rules.kill_bark_chance,
            hurt_bark_chance: rules.hurt_bark_chance,
            sound: true,
            speech: true,
        }
    }
}

/// Why settings could not be loaded
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be a probability in [0, 1], got {value}")]
    Invalid { field: &'static str, value: f64 },
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!(
            "Loaded settings from {} ({} progression)",
            path.display(),
            settings.progression.as_str()
        );
        Ok(settings)
    }

    /// Reject odds outside [0, 1]
    pub fn validate(&self) -> Result<(), SettingsError> {
        let odds = [
            ("drop_chance", self.drop_chance),
            ("kill_bark_chance", self.kill_bark_chance),
            ("hurt_bark_chance", self.hurt_bark_chance),
        ];
        for (field, value) in odds {
            if !(0.0..=1.0).contains(&value) {
                return Err(SettingsError::Invalid { field, value });
            }
        }
        Ok(())
    }

    /// Gameplay rules a match is played with
    pub fn rules(&self) -> MatchRules {
        MatchRules {
            progression: self.progression,
            drop_chance: self.drop_chance,
            kill_bark_chance: self.kill_bark_chance,
            hurt_bark_chance: self.hurt_bark_chance,
        }
    }
}
