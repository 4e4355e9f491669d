//! Spawner: enemies, pickups, and cosmetic feedback
//!
//! Helpers that only touch one pool take that pool (and the RNG) directly so
//! the combat resolver can call them while it holds other pools mutably.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::event::GameEvent;
use super::state::{Enemy, FloatingText, GameState, Particle, PowerUp, PowerUpKind, Upgrades};
use super::tier::Tier;
use crate::consts::*;

/// Lines shouted on a kill
pub const KILL_BARKS: [&str; 15] = [
    "REPENT!",
    "JUDGEMENT!",
    "CAST OUT!",
    "TO H*LL!",
    "FORGIVENESS denied!",
    "PURGED!",
    "IMPURE!",
    "SAVED... NOT!",
    "EAT LEAD!",
    "THY END IS NIGH!",
    "$#&%!",
    "D@MNATION!",
    "LORD HAVE MERCY...",
    "BUT I WON'T!",
    "ASHES TO ASHES!",
];

/// Lines shouted when hurt
pub const HURT_BARKS: [&str; 6] = [
    "A TEST OF FAITH!",
    "MY FLESH IS WEAK!",
    "GAH! $#&%!",
    "STILL STANDING!",
    "IS THAT ALL?!",
    "THE LORD PROTECTS!",
];

/// Whether the active tier spawns an enemy on this frame
#[inline]
pub fn enemy_due(frame: u64, tier: Tier) -> bool {
    frame % tier.stats().spawn_rate == 0
}

/// Random point on the band just outside the visible arena
pub fn perimeter_point(rng: &mut Pcg32) -> Vec2 {
    if rng.random_bool(0.5) {
        // Left or right edge
        let x = if rng.random_bool(0.5) {
            -SPAWN_OFFSET
        } else {
            ARENA_WIDTH + SPAWN_OFFSET
        };
        Vec2::new(x, rng.random::<f32>() * ARENA_HEIGHT)
    } else {
        // Top or bottom edge
        let y = if rng.random_bool(0.5) {
            -SPAWN_OFFSET
        } else {
            ARENA_HEIGHT + SPAWN_OFFSET
        };
        Vec2::new(rng.random::<f32>() * ARENA_WIDTH, y)
    }
}

/// Spawn one enemy of the active tier if this frame is on its cadence
pub fn spawn_enemies(state: &mut GameState) {
    if !enemy_due(state.frame, state.tier) {
        return;
    }
    let pos = perimeter_point(&mut state.rng);
    let id = state.next_entity_id();
    log::debug!("Spawn {} #{id} at ({:.0}, {:.0})", state.tier.label(), pos.x, pos.y);
    state.enemies.push(Enemy::new(id, state.tier, pos));
}

/// Weighted draw for enemy drops: 40% health, 40% ammo, 20% fury
pub fn roll_supply(rng: &mut Pcg32) -> PowerUpKind {
    let roll: f32 = rng.random();
    if roll < 0.4 {
        PowerUpKind::Health
    } else if roll < 0.8 {
        PowerUpKind::Ammo
    } else {
        PowerUpKind::Fury
    }
}

/// Wave-clear reward pool: every relic not yet owned, plus heal (always eligible)
pub fn reward_candidates(upgrades: &Upgrades) -> Vec<PowerUpKind> {
    let mut pool = vec![PowerUpKind::Health];
    pool.extend(upgrades.missing().into_iter().map(PowerUpKind::Relic));
    pool
}

/// Uniform draw from the reward pool
pub fn roll_reward(rng: &mut Pcg32, upgrades: &Upgrades) -> PowerUpKind {
    let pool = reward_candidates(upgrades);
    pool[rng.random_range(0..pool.len())]
}

/// Place a pickup in the arena
pub fn spawn_powerup(state: &mut GameState, pos: Vec2, kind: PowerUpKind) {
    let id = state.next_entity_id();
    let blink_offset = state.rng.random::<f32>() * 100.0;
    log::debug!("Pickup {kind:?} #{id} at ({:.0}, {:.0})", pos.x, pos.y);
    state.powerups.push(PowerUp {
        id,
        kind,
        pos,
        radius: POWERUP_RADIUS,
        life: POWERUP_LIFE,
        blink_offset,
        dead: false,
    });
}

/// Scatter `count` particles from `pos`
pub fn burst(particles: &mut Vec<Particle>, rng: &mut Pcg32, pos: Vec2, color: u32, count: usize) {
    for _ in 0..count {
        let angle = rng.random::<f32>() * std::f32::consts::TAU;
        let speed = rng.random::<f32>() * 3.0 + 1.0;
        particles.push(Particle {
            pos,
            vel: crate::direction(angle) * speed,
            life: 30.0 + rng.random::<f32>() * 20.0,
            size: rng.random::<f32>() * 4.0 + 2.0,
            color,
        });
    }
}

/// Queue a floating text
pub fn float_text(texts: &mut Vec<FloatingText>, pos: Vec2, text: &str, color: u32, scale: f32) {
    texts.push(FloatingText {
        pos,
        text: text.to_string(),
        life: TEXT_LIFE,
        color,
        scale,
    });
}

/// Pick a random line, show it above `pos` and voice it
pub fn bark(
    texts: &mut Vec<FloatingText>,
    events: &mut Vec<GameEvent>,
    rng: &mut Pcg32,
    pos: Vec2,
    lines: &[&str],
    color: u32,
) {
    let line = lines[rng.random_range(0..lines.len())];
    log::debug!("Bark: {line}");
    float_text(texts, pos - Vec2::new(0.0, 40.0), line, color, 1.0);
    events.push(GameEvent::Speech(line.to_string()));
}
