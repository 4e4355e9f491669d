//! Weapon handling: fury and reload timers, fire cadence, volleys
//!
//! Timers count ticks, not wall-clock time.

use glam::Vec2;

use super::event::{GameEvent, Sound};
use super::spawn;
use super::state::{Arsenal, GameState, Player, Projectile, ReloadState};
use super::tick::TickInput;
use crate::consts::*;

/// Projectiles released by one trigger pull
#[derive(Debug, Clone, PartialEq)]
pub struct Volley {
    pub angles: Vec<f32>,
    pub knockback: bool,
    pub fury: bool,
}

/// Ticks between shots for the player's current arsenal
pub fn fire_rate(player: &Player) -> u64 {
    let fast = match player.arsenal {
        Arsenal::Magazine(_) => player.in_fury(),
        Arsenal::Relics(upgrades) => upgrades.rapid_fire,
    };
    if fast { (FIRE_RATE / 2).max(2) } else { FIRE_RATE }
}

/// Advance fury and reload timers
pub fn update_timers(state: &mut GameState) {
    let player = &mut state.player;
    player.fury_ticks = player.fury_ticks.saturating_sub(1);

    let Arsenal::Magazine(mag) = &mut player.arsenal else {
        return;
    };
    let label_pos = player.pos - Vec2::new(0.0, 20.0);
    let reload = mag.reload;
    match reload {
        ReloadState::Reloading { ticks_left } => {
            let ticks_left = ticks_left.saturating_sub(1);
            if ticks_left == 0 {
                mag.reload = ReloadState::Ready;
                mag.ammo = mag.max_ammo;
                spawn::float_text(&mut state.texts, label_pos, "LOADED", 0xffffff, 1.0);
                state.events.push(GameEvent::Sound(Sound::Loaded));
            } else {
                mag.reload = ReloadState::Reloading { ticks_left };
            }
        }
        // Auto reload when empty, unless fury keeps the gun fed
        ReloadState::Ready if mag.ammo == 0 && player.fury_ticks == 0 => {
            mag.reload = ReloadState::Reloading {
                ticks_left: RELOAD_TICKS,
            };
            spawn::float_text(&mut state.texts, label_pos, "RELOADING...", 0xfbbf24, 1.0);
            state.events.push(GameEvent::Sound(Sound::Reload));
        }
        ReloadState::Ready => {}
    }
}

/// Decide what a trigger pull on `frame` releases, consuming ammo.
/// `None` when the gun is not on cadence, reloading, or dry.
pub fn pull_trigger(player: &mut Player, frame: u64, events: &mut Vec<GameEvent>) -> Option<Volley> {
    if frame % fire_rate(player) != 0 {
        return None;
    }
    let fury = player.in_fury();
    let angle = player.angle;
    match &mut player.arsenal {
        Arsenal::Magazine(mag) => {
            if mag.is_reloading() && !fury {
                return None;
            }
            if mag.ammo == 0 && !fury {
                events.push(GameEvent::Sound(Sound::Empty));
                return None;
            }
            if !fury {
                mag.ammo -= 1;
            }
            Some(Volley {
                angles: vec![angle],
                knockback: false,
                fury,
            })
        }
        Arsenal::Relics(upgrades) => {
            let angles = if upgrades.spread {
                vec![angle - SPREAD_ANGLE, angle, angle + SPREAD_ANGLE]
            } else {
                vec![angle]
            };
            Some(Volley {
                angles,
                knockback: upgrades.knockback,
                fury,
            })
        }
    }
}

/// Timers, then fire if the trigger is held
pub fn update(state: &mut GameState, input: &TickInput) {
    update_timers(state);

    if !input.fire {
        return;
    }
    let Some(volley) = pull_trigger(&mut state.player, state.frame, &mut state.events) else {
        return;
    };

    state.events.push(GameEvent::Sound(Sound::Shoot));
    let origin = state.player.pos;
    for &angle in &volley.angles {
        let dir = crate::direction(angle);
        let id = state.next_entity_id();
        let mut shot = Projectile::new(id, origin + dir * MUZZLE_OFFSET, dir * PROJECTILE_SPEED);
        shot.knockback = volley.knockback;
        shot.fury = volley.fury;
        state.projectiles.push(shot);
    }
    // Recoil
    state.player.pos -= crate::direction(state.player.angle) * RECOIL;
}
