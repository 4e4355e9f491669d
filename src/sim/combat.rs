//! Collision & combat resolver
//!
//! Pickups against the player, then every live enemy against every live
//! projectile and against the player. Brute force pairwise circle tests.
//!
//! A projectile deals damage at most once: its `dead` flag is set on the
//! first hit and checked before every pairwise test, so later enemies in the
//! same scan (and later ticks) never see it. An enemy's death is handled once
//! for the same reason.

use glam::Vec2;
use rand::Rng;

use super::collision::circles_overlap;
use super::event::{GameEvent, Sound};
use super::spawn::{self, HURT_BARKS, KILL_BARKS};
use super::state::{
    Arsenal, FloatingText, GamePhase, GameState, Player, PowerUpKind, ReloadState,
};
use crate::consts::*;
use crate::settings::Progression;

const HIT_COLOR: u32 = 0xfde047;
const FURY_COLOR: u32 = 0xef4444;
const HURT_COLOR: u32 = 0xef4444;

/// Apply a collected pickup to the player
pub fn apply_powerup(player: &mut Player, kind: PowerUpKind, texts: &mut Vec<FloatingText>) {
    let label_pos = player.pos - Vec2::new(0.0, 20.0);
    match kind {
        PowerUpKind::Health => {
            player.hp = (player.hp + HEAL_AMOUNT).min(player.max_hp);
            spawn::float_text(texts, label_pos, "+30 HP", kind.color(), 1.0);
        }
        PowerUpKind::Ammo => {
            if let Arsenal::Magazine(mag) = &mut player.arsenal {
                mag.ammo = mag.max_ammo;
                mag.reload = ReloadState::Ready;
            }
            spawn::float_text(texts, label_pos, "AMMO FULL", kind.color(), 1.0);
        }
        PowerUpKind::Fury => {
            player.fury_ticks = FURY_TICKS;
            if let Arsenal::Magazine(mag) = &mut player.arsenal {
                mag.ammo = mag.max_ammo;
            }
            spawn::float_text(texts, label_pos, "HOLY FURY!", kind.color(), 1.5);
        }
        PowerUpKind::Relic(relic) => {
            if let Arsenal::Relics(upgrades) = &mut player.arsenal {
                upgrades.grant(relic);
            }
            spawn::float_text(texts, label_pos, relic.label(), kind.color(), 1.5);
        }
    }
}

/// Age pickups and let the player collect the ones it touches
pub fn collect_pickups(state: &mut GameState) {
    for pickup in state.powerups.iter_mut() {
        if pickup.dead {
            continue;
        }
        pickup.life = pickup.life.saturating_sub(1);
        if pickup.life == 0 {
            pickup.dead = true;
            continue;
        }
        let player = &mut state.player;
        if !circles_overlap(player.pos, player.radius, pickup.pos, pickup.radius) {
            continue;
        }
        pickup.dead = true;
        log::debug!("Collected {:?}", pickup.kind);
        state.events.push(GameEvent::Sound(Sound::Pickup));
        spawn::burst(&mut state.particles, &mut state.rng, pickup.pos, pickup.kind.color(), 10);
        apply_powerup(player, pickup.kind, &mut state.texts);
    }
}

/// Projectile hits and contact damage for every live enemy
pub fn resolve_enemies(state: &mut GameState) {
    let mut drops: Vec<Vec2> = Vec::new();
    let mut died = false;

    for enemy in state.enemies.iter_mut() {
        if enemy.dead {
            continue;
        }

        for shot in state.projectiles.iter_mut() {
            if enemy.dead {
                break;
            }
            if shot.dead || !circles_overlap(shot.pos, shot.radius, enemy.pos, enemy.radius) {
                continue;
            }

            enemy.hp -= PROJECTILE_DAMAGE;
            shot.dead = true;
            let color = if shot.fury { FURY_COLOR } else { HIT_COLOR };
            spawn::burst(&mut state.particles, &mut state.rng, shot.pos, color, 3);
            state.events.push(GameEvent::Sound(Sound::Hit));

            let push = if shot.knockback {
                KNOCKBACK_DISTANCE
            } else {
                STAGGER_DISTANCE
            };
            enemy.pos += shot.vel.normalize_or_zero() * push;

            if enemy.hp <= 0 {
                enemy.dead = true;
                state.score += KILL_SCORE;
                spawn::burst(&mut state.particles, &mut state.rng, enemy.pos, enemy.color, 10);
                state.events.push(GameEvent::Sound(Sound::Die));

                if state.rules.progression == Progression::Magazine
                    && state.rng.random_bool(state.rules.drop_chance)
                {
                    drops.push(enemy.pos);
                }
                if state.rng.random_bool(state.rules.kill_bark_chance) {
                    spawn::bark(
                        &mut state.texts,
                        &mut state.events,
                        &mut state.rng,
                        state.player.pos,
                        &KILL_BARKS,
                        0xffffff,
                    );
                }
            }
        }

        if enemy.dead {
            continue;
        }

        // Contact damage, gated by invulnerability
        let player = &mut state.player;
        if player.invuln_ticks > 0
            || !circles_overlap(enemy.pos, enemy.radius, player.pos, player.radius)
        {
            continue;
        }
        player.hp -= enemy.damage;
        player.invuln_ticks = INVULN_TICKS;
        spawn::burst(&mut state.particles, &mut state.rng, player.pos, HURT_COLOR, 5);
        state.events.push(GameEvent::Sound(Sound::Hurt));
        if state.rng.random_bool(state.rules.hurt_bark_chance) {
            spawn::bark(
                &mut state.texts,
                &mut state.events,
                &mut state.rng,
                player.pos,
                &HURT_BARKS,
                HURT_COLOR,
            );
        }

        if player.hp <= 0 && state.phase == GamePhase::Playing {
            state.phase = GamePhase::GameOver;
            died = true;
        }
    }

    for pos in drops {
        let kind = spawn::roll_supply(&mut state.rng);
        spawn::spawn_powerup(state, pos, kind);
    }

    // Reported after the scan so kills later in the same pass count
    if died {
        log::info!("Game over: score {}, wave {}", state.score, state.wave_index + 1);
        state.events.push(GameEvent::GameOver { score: state.score });
    }
}

/// Invulnerability counts down one per tick
pub fn tick_invulnerability(player: &mut Player) {
    player.invuln_ticks = player.invuln_ticks.saturating_sub(1);
}
