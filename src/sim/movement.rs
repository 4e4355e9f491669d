//! Movement step
//!
//! Player (input-driven), enemies (seek), projectiles (ballistic) and the
//! purely cosmetic pools. Everything advances by a fixed amount per tick.

use glam::Vec2;

use super::collision::{clamp_to_arena, in_arena, seek_step};
use super::state::{Enemy, FloatingText, Particle, Player, Projectile};
use super::tick::TickInput;
use crate::consts::TEXT_DRIFT;

/// Unit movement direction from the four held keys (zero when idle or
/// when opposite keys cancel out)
pub fn input_direction(input: &TickInput) -> Vec2 {
    let mut dir = Vec2::ZERO;
    if input.up {
        dir.y -= 1.0;
    }
    if input.down {
        dir.y += 1.0;
    }
    if input.left {
        dir.x -= 1.0;
    }
    if input.right {
        dir.x += 1.0;
    }
    // Diagonals are no faster than axis moves
    dir.normalize_or_zero()
}

/// Move the player, keep it inside the arena, and face the aim point
pub fn step_player(player: &mut Player, input: &TickInput) {
    player.pos += input_direction(input) * player.speed();
    player.pos = clamp_to_arena(player.pos, player.radius);
    let to_aim = input.aim - player.pos;
    player.angle = to_aim.y.atan2(to_aim.x);
}

/// Every enemy walks straight at the player. No avoidance, overlap is fine.
pub fn step_enemies(enemies: &mut [Enemy], target: Vec2) {
    for enemy in enemies.iter_mut().filter(|e| !e.dead) {
        enemy.pos += seek_step(enemy.pos, target, enemy.speed);
    }
}

/// Integrate projectiles; expired or out-of-arena ones are marked dead
pub fn step_projectiles(projectiles: &mut [Projectile]) {
    for p in projectiles.iter_mut() {
        p.pos += p.vel;
        p.life = p.life.saturating_sub(1);
        if p.life == 0 || !in_arena(p.pos) {
            p.dead = true;
        }
    }
}

pub fn step_particles(particles: &mut [Particle]) {
    for p in particles.iter_mut() {
        p.pos += p.vel;
        p.life -= 1.0;
    }
}

/// Texts float upward while they fade
pub fn step_texts(texts: &mut [FloatingText]) {
    for t in texts.iter_mut() {
        t.pos.y -= TEXT_DRIFT;
        t.life = t.life.saturating_sub(1);
    }
}
