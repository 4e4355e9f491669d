//! Sin Purge - top-down survival shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, combat, spawning, waves)
//! - `game`: Fixed-cadence frame orchestrator
//! - `hud`: Read-only stats snapshot for the UI shell
//! - `audio`: Fire-and-forget sound/speech sink
//! - `settings`: Match configuration

pub mod audio;
pub mod game;
pub mod hud;
pub mod settings;
pub mod sim;

pub use game::{FrameOutcome, Game};
pub use settings::{Progression, Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Minimum real time between two logical ticks (~60 Hz)
    pub const FRAME_INTERVAL_MS: f64 = 16.0;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 16.0;
    pub const PLAYER_SPEED: f32 = 3.5;
    pub const PLAYER_MAX_HP: i32 = 100;
    pub const PLAYER_MAX_AMMO: u32 = 12;
    /// Speed multiplier granted by the speed relic
    pub const SPEED_BOOST: f32 = 1.5;
    /// Ticks of invulnerability after taking a hit (0.5s)
    pub const INVULN_TICKS: u32 = 30;
    /// Push-back applied to the player per shot
    pub const RECOIL: f32 = 2.0;

    /// Weapon
    pub const FIRE_RATE: u64 = 12; // minimum ticks between shots
    pub const RELOAD_TICKS: u32 = 90; // ~1.5s
    pub const FURY_TICKS: u32 = 300; // ~5s
    pub const MUZZLE_OFFSET: f32 = 20.0;
    pub const SPREAD_ANGLE: f32 = 0.2;

    /// Projectiles
    pub const PROJECTILE_SPEED: f32 = 10.0;
    pub const PROJECTILE_LIFE: u32 = 100;
    pub const PROJECTILE_RADIUS: f32 = 4.0;
    pub const PROJECTILE_DAMAGE: i32 = 10;
    /// Enemy displacement on a knockback hit vs. a plain hit
    pub const KNOCKBACK_DISTANCE: f32 = 40.0;
    pub const STAGGER_DISTANCE: f32 = 4.0;

    /// Enemies
    pub const ENEMY_CONTACT_DAMAGE: i32 = 10;
    pub const SPAWN_OFFSET: f32 = 50.0;
    pub const KILL_SCORE: u64 = 100;

    /// Waves
    pub const WAVE_DURATION_MS: f64 = 30_000.0;

    /// Pickups
    pub const POWERUP_RADIUS: f32 = 10.0;
    pub const POWERUP_LIFE: u32 = 600; // 10s before despawn
    pub const POWERUP_BLINK_TICKS: u32 = 120;
    pub const HEAL_AMOUNT: i32 = 30;

    /// Cosmetics
    pub const TEXT_LIFE: u32 = 60;
    pub const TEXT_DRIFT: f32 = 0.5;
}

/// Arena center in world coordinates
#[inline]
pub fn arena_center() -> glam::Vec2 {
    glam::Vec2::new(consts::ARENA_WIDTH / 2.0, consts::ARENA_HEIGHT / 2.0)
}

/// Unit vector for an angle in radians
#[inline]
pub fn direction(angle: f32) -> glam::Vec2 {
    glam::Vec2::new(angle.cos(), angle.sin())
}
