//! Wave / progression state machine
//!
//! One state per tier, cycling forever while the match is playing. A wave
//! ends when more than `WAVE_DURATION_MS` of wall-clock time has passed
//! since it started.

use glam::Vec2;

use super::event::{GameEvent, Sound};
use super::spawn;
use super::state::GameState;
use crate::consts::*;
use crate::settings::Progression;

/// Advance to the next tier if the current wave has run its course.
/// Returns true on a transition.
pub fn advance(state: &mut GameState, now_ms: f64) -> bool {
    if now_ms - state.wave_started_ms <= WAVE_DURATION_MS {
        return false;
    }

    state.wave_started_ms = now_ms;
    state.tier = state.tier.next();
    state.wave_index += 1;
    log::info!("Wave {}: {}", state.wave_index + 1, state.tier.label());

    spawn::float_text(
        &mut state.texts,
        Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 4.0),
        "NEW SIN APPROACHES",
        0xdc2626,
        2.0,
    );
    state.events.push(GameEvent::Sound(Sound::Wave));
    state.events.push(GameEvent::WaveStarted {
        tier: state.tier,
        wave: state.wave_index,
    });

    // Surviving a wave earns a relic (or a heal once they run out)
    if state.rules.progression == Progression::Relics {
        let upgrades = state.player.arsenal.upgrades();
        let kind = spawn::roll_reward(&mut state.rng, &upgrades);
        spawn::spawn_powerup(state, crate::arena_center(), kind);
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Arsenal, MatchRules, PowerUpKind, Relic, Upgrades};
    use crate::sim::tier::Tier;

    #[test]
    fn test_no_transition_before_duration() {
        let mut state = GameState::new(1, MatchRules::default(), 0.0);
        assert!(!advance(&mut state, WAVE_DURATION_MS));
        assert_eq!(state.tier, Tier::Lust);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_transition_resets_timer_and_announces() {
        let mut state = GameState::new(1, MatchRules::default(), 0.0);
        let now = WAVE_DURATION_MS + 1.0;
        assert!(advance(&mut state, now));
        assert_eq!(state.tier, Tier::Gluttony);
        assert_eq!(state.wave_index, 1);
        assert_eq!(state.wave_started_ms, now);
        assert!(state.events.contains(&GameEvent::Sound(Sound::Wave)));
        assert!(state.texts.iter().any(|t| t.text == "NEW SIN APPROACHES"));
        // Magazine progression has no wave reward
        assert!(state.powerups.is_empty());
    }

    #[test]
    fn test_cycle_wraps_after_pride() {
        let mut state = GameState::new(1, MatchRules::default(), 0.0);
        let mut now = 0.0;
        for _ in 0..7 {
            now += WAVE_DURATION_MS + 1.0;
            assert!(advance(&mut state, now));
        }
        assert_eq!(state.tier, Tier::Lust);
        assert_eq!(state.wave_index, 7);
    }

    #[test]
    fn test_relic_reward_spawns_at_center() {
        let rules = MatchRules {
            progression: Progression::Relics,
            ..Default::default()
        };
        let mut state = GameState::new(1, rules, 0.0);
        advance(&mut state, WAVE_DURATION_MS + 1.0);
        assert_eq!(state.powerups.len(), 1);
        assert_eq!(state.powerups[0].pos, crate::arena_center());
    }

    #[test]
    fn test_relic_reward_is_heal_when_all_owned() {
        let rules = MatchRules {
            progression: Progression::Relics,
            ..Default::default()
        };
        let mut state = GameState::new(1, rules, 0.0);
        let mut upgrades = Upgrades::default();
        for relic in Relic::ALL {
            upgrades.grant(relic);
        }
        state.player.arsenal = Arsenal::Relics(upgrades);
        advance(&mut state, WAVE_DURATION_MS + 1.0);
        assert_eq!(state.powerups[0].kind, PowerUpKind::Health);
    }
}
