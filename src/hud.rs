//! UI shell boundary: per-tick stats snapshot and game-over notification

use serde::Serialize;

use crate::sim::{Arsenal, GameState, Upgrades};

/// Weapon readout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArsenalStatus {
    Magazine {
        ammo: u32,
        max_ammo: u32,
        reloading: bool,
    },
    Relics(Upgrades),
}

/// Read-only stats pushed to the UI after every tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub hp: i32,
    pub max_hp: i32,
    pub arsenal: ArsenalStatus,
    /// Whole seconds into the current wave
    pub wave_seconds: u32,
    pub tier_label: &'static str,
    pub score: u64,
}

impl StatsSnapshot {
    pub fn capture(state: &GameState, now_ms: f64) -> Self {
        let player = &state.player;
        let arsenal = match player.arsenal {
            // A full magazine is shown during fury
            Arsenal::Magazine(mag) => ArsenalStatus::Magazine {
                ammo: if player.in_fury() { mag.max_ammo } else { mag.ammo },
                max_ammo: mag.max_ammo,
                reloading: mag.is_reloading(),
            },
            Arsenal::Relics(upgrades) => ArsenalStatus::Relics(upgrades),
        };
        Self {
            hp: player.hp,
            max_hp: player.max_hp,
            arsenal,
            wave_seconds: state.wave_seconds(now_ms),
            tier_label: state.tier.label(),
            score: state.score,
        }
    }
}

/// The menu/HUD shell around the simulation
pub trait GameShell {
    /// Called after every tick
    fn update_stats(&mut self, stats: &StatsSnapshot);
    /// Called exactly once per match
    fn game_over(&mut self, score: u64);
}

/// Shell that only logs
#[derive(Debug, Default)]
pub struct LogShell {
    pub last: Option<StatsSnapshot>,
    pub final_score: Option<u64>,
}

impl GameShell for LogShell {
    fn update_stats(&mut self, stats: &StatsSnapshot) {
        if self.last.as_ref().is_none_or(|last| last.tier_label != stats.tier_label) {
            log::info!("Now facing {} (score {})", stats.tier_label, stats.score);
        }
        self.last = Some(stats.clone());
    }

    fn game_over(&mut self, score: u64) {
        log::info!("Final score: {score}");
        self.final_score = Some(score);
    }
}
