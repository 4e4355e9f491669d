//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One logical step per tick, timers count ticks
//! - Seeded RNG only
//! - Stable iteration order (pools keep insertion order)
//! - No rendering, audio or platform dependencies (those consume `GameEvent`s)

pub mod autopilot;
pub mod collision;
pub mod combat;
pub mod event;
pub mod lifecycle;
pub mod movement;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod tier;
pub mod wave;
pub mod weapon;

pub use collision::circles_overlap;
pub use event::{GameEvent, Sound};
pub use state::{
    Arsenal, Enemy, FloatingText, GamePhase, GameState, Magazine, MatchRules, Particle, Player,
    PowerUp, PowerUpKind, Projectile, ReloadState, Relic, Upgrades,
};
pub use tick::{TickInput, tick};
pub use tier::{Tier, TierStats};
