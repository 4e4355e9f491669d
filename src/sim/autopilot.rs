//! Idle/demo mode: the preacher plays on its own
//!
//! Produces the input a simple human-like player would hold this tick.
//! Deterministic: it only reads the current state.

use glam::Vec2;

use super::state::GameState;
use super::tick::TickInput;

/// Enemies closer than this make the autopilot back off
const DANGER_RADIUS: f32 = 150.0;
/// Distance from center the autopilot tolerates before drifting back
const HOME_RADIUS: f32 = 100.0;
/// Ignore tiny steering components (avoids jittering between keys)
const DEADZONE: f32 = 0.3;

/// Replace movement, aim and fire in `input` with autopilot decisions
pub fn drive(state: &GameState, input: &TickInput) -> TickInput {
    let mut input = input.clone();
    let me = state.player.pos;

    let nearest_enemy = state
        .enemies
        .iter()
        .filter(|e| !e.dead)
        .min_by(|a, b| {
            a.pos
                .distance_squared(me)
                .partial_cmp(&b.pos.distance_squared(me))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let nearest_pickup = state
        .powerups
        .iter()
        .filter(|p| !p.dead)
        .min_by(|a, b| {
            a.pos
                .distance_squared(me)
                .partial_cmp(&b.pos.distance_squared(me))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    match nearest_enemy {
        Some(enemy) => {
            input.aim = enemy.pos;
            input.fire = true;
        }
        None => input.fire = false,
    }

    let threat = nearest_enemy.filter(|e| e.pos.distance(me) < DANGER_RADIUS + e.radius);
    let heading = if let Some(enemy) = threat {
        // Back away from the closest threat
        me - enemy.pos
    } else if let Some(pickup) = nearest_pickup {
        pickup.pos - me
    } else {
        let home = crate::arena_center() - me;
        if home.length() > HOME_RADIUS { home } else { Vec2::ZERO }
    };

    let heading = heading.normalize_or_zero();
    input.left = heading.x < -DEADZONE;
    input.right = heading.x > DEADZONE;
    input.up = heading.y < -DEADZONE;
    input.down = heading.y > DEADZONE;
    input
}
