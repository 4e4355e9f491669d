//! Fixed-step simulation tick
//!
//! Core per-frame pipeline. Order within one tick is fixed:
//! spawn → movement/weapon → collision & combat → wave check → lifecycle.
//! Observers only ever see the state between ticks.

use glam::Vec2;

use super::state::GameState;
use super::{autopilot, combat, lifecycle, movement, spawn, wave, weapon};

/// Input sampled once per tick (latest value wins, nothing is queued)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Trigger held
    pub fire: bool,
    /// Aim point in arena coordinates
    pub aim: Vec2,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the match by one tick. `now_ms` is wall-clock time, used only
/// for wave timing; every other timer counts ticks.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) {
    if !state.is_playing() {
        return;
    }

    let driven;
    let input = if input.idle_mode {
        driven = autopilot::drive(state, input);
        &driven
    } else {
        input
    };

    state.frame += 1;

    // Spawner
    spawn::spawn_enemies(state);

    // Movement and weapon
    movement::step_player(&mut state.player, input);
    weapon::update(state, input);

    // Collision & combat
    combat::collect_pickups(state);
    movement::step_projectiles(&mut state.projectiles);
    movement::step_enemies(&mut state.enemies, state.player.pos);
    combat::resolve_enemies(state);
    combat::tick_invulnerability(&mut state.player);

    // Cosmetics
    movement::step_particles(&mut state.particles);
    movement::step_texts(&mut state.texts);

    if state.is_playing() {
        wave::advance(state, now_ms);
    }

    lifecycle::sweep(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::event::GameEvent;
    use crate::sim::state::{Enemy, GamePhase, MatchRules};
    use crate::sim::tier::Tier;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    #[test]
    fn test_first_enemy_on_tier_cadence() {
        let mut state = GameState::new(12345, MatchRules::default(), 0.0);
        let input = TickInput::default();
        for i in 1..Tier::Lust.stats().spawn_rate {
            tick(&mut state, &input, i as f64 * FRAME_MS);
        }
        assert!(state.enemies.is_empty());

        tick(&mut state, &input, 80.0 * FRAME_MS);
        assert_eq!(state.frame, 80);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].tier, Tier::Lust);
    }

    #[test]
    fn test_game_over_halts_ticks() {
        let mut state = GameState::new(12345, MatchRules::default(), 0.0);
        state.phase = GamePhase::GameOver;
        tick(&mut state, &TickInput::default(), 1000.0);
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn test_lethal_tick_reports_once() {
        let rules = MatchRules {
            hurt_bark_chance: 0.0,
            ..Default::default()
        };
        let mut state = GameState::new(5, rules, 0.0);
        state.player.hp = 10;
        let pos = state.player.pos;
        state.enemies.push(Enemy::new(99, Tier::Sloth, pos));

        tick(&mut state, &TickInput::default(), FRAME_MS);
        tick(&mut state, &TickInput::default(), 2.0 * FRAME_MS);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.frame, 1);
        let overs = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { score: 0 }))
            .count();
        assert_eq!(overs, 1);
    }

    #[test]
    fn test_wave_changes_after_thirty_seconds() {
        let mut state = GameState::new(1, MatchRules::default(), 0.0);
        tick(&mut state, &TickInput::default(), WAVE_DURATION_MS);
        assert_eq!(state.tier, Tier::Lust);
        tick(&mut state, &TickInput::default(), WAVE_DURATION_MS + 1.0);
        assert_eq!(state.tier, Tier::Gluttony);
    }

    #[test]
    fn test_shots_are_swept_when_spent() {
        let mut state = GameState::new(1, MatchRules::default(), 0.0);
        let input = TickInput {
            fire: true,
            aim: Vec2::new(ARENA_WIDTH, ARENA_HEIGHT / 2.0),
            ..Default::default()
        };
        // First shot at frame 12, travels right 10/tick and leaves the arena
        for frame in 1..=12 {
            tick(&mut state, &input, frame as f64 * FRAME_MS);
        }
        assert_eq!(state.projectiles.len(), 1);
        let idle = TickInput::default();
        for frame in 13..=60 {
            tick(&mut state, &idle, frame as f64 * FRAME_MS);
        }
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999, MatchRules::default(), 0.0);
        let mut state2 = GameState::new(99999, MatchRules::default(), 0.0);

        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };

        for frame in 1..=3000 {
            let now = frame as f64 * FRAME_MS;
            tick(&mut state1, &input, now);
            tick(&mut state2, &input, now);
        }

        assert_eq!(state1.frame, state2.frame);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.player.hp, state2.player.hp);
        assert_eq!(state1.enemies.len(), state2.enemies.len());
        for (a, b) in state1.enemies.iter().zip(&state2.enemies) {
            assert_eq!(a.pos, b.pos);
        }
    }

    #[test]
    fn test_autopilot_scores() {
        let mut state = GameState::new(2024, MatchRules::default(), 0.0);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        for frame in 1..=1200 {
            tick(&mut state, &input, frame as f64 * FRAME_MS);
        }
        assert!(state.score > 0, "autopilot should land some kills");
    }
}
