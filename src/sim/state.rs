//! Game state and core simulation types
//!
//! One `GameState` owns every entity of a match. Nothing outside a tick keeps
//! references into the pools, so restarting is just building a new state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::event::GameEvent;
use super::tier::Tier;
use crate::consts::*;
use crate::settings::Progression;

/// Current phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Ticks are running
    Playing,
    /// Player died; no further ticks until restart
    GameOver,
}

/// Reload progress for the magazine variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReloadState {
    Ready,
    Reloading { ticks_left: u32 },
}

/// Ammo-based arsenal (variant A)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Magazine {
    pub ammo: u32,
    pub max_ammo: u32,
    pub reload: ReloadState,
}

impl Magazine {
    pub fn full() -> Self {
        Self {
            ammo: PLAYER_MAX_AMMO,
            max_ammo: PLAYER_MAX_AMMO,
            reload: ReloadState::Ready,
        }
    }

    pub fn is_reloading(&self) -> bool {
        matches!(self.reload, ReloadState::Reloading { .. })
    }
}

/// Permanent upgrade kinds (variant B)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Relic {
    Spread,
    Knockback,
    RapidFire,
    SpeedBoost,
}

impl Relic {
    pub const ALL: [Relic; 4] = [
        Relic::Spread,
        Relic::Knockback,
        Relic::RapidFire,
        Relic::SpeedBoost,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Relic::Spread => "TRINITY SHOT",
            Relic::Knockback => "WRATH OF GOD",
            Relic::RapidFire => "ZEALOT'S HASTE",
            Relic::SpeedBoost => "SWIFT SANDALS",
        }
    }
}

/// Owned upgrade flags (variant B)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Upgrades {
    pub spread: bool,
    pub knockback: bool,
    pub rapid_fire: bool,
    pub speed_boost: bool,
}

impl Upgrades {
    pub fn has(&self, relic: Relic) -> bool {
        match relic {
            Relic::Spread => self.spread,
            Relic::Knockback => self.knockback,
            Relic::RapidFire => self.rapid_fire,
            Relic::SpeedBoost => self.speed_boost,
        }
    }

    pub fn grant(&mut self, relic: Relic) {
        match relic {
            Relic::Spread => self.spread = true,
            Relic::Knockback => self.knockback = true,
            Relic::RapidFire => self.rapid_fire = true,
            Relic::SpeedBoost => self.speed_boost = true,
        }
    }

    /// Relics the player does not own yet, in declaration order
    pub fn missing(&self) -> Vec<Relic> {
        Relic::ALL.into_iter().filter(|r| !self.has(*r)).collect()
    }
}

/// What the player shoots with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Arsenal {
    Magazine(Magazine),
    Relics(Upgrades),
}

impl Arsenal {
    pub fn for_progression(progression: Progression) -> Self {
        match progression {
            Progression::Magazine => Arsenal::Magazine(Magazine::full()),
            Progression::Relics => Arsenal::Relics(Upgrades::default()),
        }
    }

    pub fn upgrades(&self) -> Upgrades {
        match self {
            Arsenal::Magazine(_) => Upgrades::default(),
            Arsenal::Relics(upgrades) => *upgrades,
        }
    }
}

/// The preacher
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub pos: Vec2,
    /// Facing angle (radians), recomputed from the aim point every tick
    pub angle: f32,
    pub radius: f32,
    pub hp: i32,
    pub max_hp: i32,
    pub arsenal: Arsenal,
    pub invuln_ticks: u32,
    pub fury_ticks: u32,
}

impl Player {
    pub fn new(arsenal: Arsenal) -> Self {
        Self {
            pos: crate::arena_center(),
            angle: 0.0,
            radius: PLAYER_RADIUS,
            hp: PLAYER_MAX_HP,
            max_hp: PLAYER_MAX_HP,
            arsenal,
            invuln_ticks: 0,
            fury_ticks: 0,
        }
    }

    pub fn in_fury(&self) -> bool {
        self.fury_ticks > 0
    }

    /// Movement speed with the speed relic applied
    pub fn speed(&self) -> f32 {
        if self.arsenal.upgrades().speed_boost {
            PLAYER_SPEED * SPEED_BOOST
        } else {
            PLAYER_SPEED
        }
    }
}

/// An enemy (one sin)
#[derive(Debug, Clone, Serialize)]
pub struct Enemy {
    pub id: u32,
    pub tier: Tier,
    pub pos: Vec2,
    pub radius: f32,
    pub hp: i32,
    pub speed: f32,
    pub damage: i32,
    pub sides: u8,
    pub color: u32,
    /// Set the instant hp drops to zero; pruned by the lifecycle pass
    pub dead: bool,
}

impl Enemy {
    pub fn new(id: u32, tier: Tier, pos: Vec2) -> Self {
        let stats = tier.stats();
        Self {
            id,
            tier,
            pos,
            radius: stats.radius,
            hp: stats.hp,
            speed: stats.speed,
            damage: ENEMY_CONTACT_DAMAGE,
            sides: stats.sides,
            color: stats.color,
            dead: false,
        }
    }
}

/// A bullet
#[derive(Debug, Clone, Serialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks remaining
    pub life: u32,
    pub radius: f32,
    /// Hits displace the enemy by the full knockback distance
    pub knockback: bool,
    /// Fired during fury (drawn red)
    pub fury: bool,
    /// Set on first hit or expiry; a dead projectile never deals damage
    pub dead: bool,
}

impl Projectile {
    pub fn new(id: u32, pos: Vec2, vel: Vec2) -> Self {
        Self {
            id,
            pos,
            vel,
            life: PROJECTILE_LIFE,
            radius: PROJECTILE_RADIUS,
            knockback: false,
            fury: false,
            dead: false,
        }
    }
}

/// A particle for visual effects (never read by gameplay)
#[derive(Debug, Clone, Serialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks remaining
    pub life: f32,
    pub size: f32,
    pub color: u32,
}

/// Rising feedback text
#[derive(Debug, Clone, Serialize)]
pub struct FloatingText {
    pub pos: Vec2,
    pub text: String,
    pub life: u32,
    pub color: u32,
    pub scale: f32,
}

/// Pickup types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PowerUpKind {
    Health,
    Ammo,
    Fury,
    Relic(Relic),
}

impl PowerUpKind {
    pub fn color(self) -> u32 {
        match self {
            PowerUpKind::Health => 0x22c55e,
            PowerUpKind::Ammo => 0xeab308,
            PowerUpKind::Fury => 0xef4444,
            PowerUpKind::Relic(_) => 0xfde047,
        }
    }
}

/// A pickup lying in the arena
#[derive(Debug, Clone, Serialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    pub pos: Vec2,
    pub radius: f32,
    /// Ticks before despawn
    pub life: u32,
    /// Phase offset so blinking pickups don't blink in sync
    pub blink_offset: f32,
    pub dead: bool,
}

impl PowerUp {
    /// Whether the renderer should draw this pickup on `frame`.
    /// Pickups blink during their last seconds.
    pub fn visible(&self, frame: u64) -> bool {
        if self.life >= POWERUP_BLINK_TICKS {
            return true;
        }
        let phase = ((frame as f32 + self.blink_offset) / 5.0).floor() as u64;
        phase % 2 != 0
    }
}

/// Tunables a match is played with (derived from `Settings`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchRules {
    pub progression: Progression,
    pub drop_chance: f64,
    pub kill_bark_chance: f64,
    pub hurt_bark_chance: f64,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            progression: Progression::Magazine,
            drop_chance: 0.08,
            kill_bark_chance: 0.15,
            hurt_bark_chance: 1.0,
        }
    }
}

/// Complete match state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Match seed for reproducibility
    pub seed: u64,
    #[serde(skip)]
    pub rng: Pcg32,
    pub rules: MatchRules,
    pub phase: GamePhase,
    /// Score (+100 per kill)
    pub score: u64,
    /// Tick counter
    pub frame: u64,
    /// Active tier
    pub tier: Tier,
    /// Waves started so far (0-based, never wraps)
    pub wave_index: u32,
    /// Wall-clock time the current wave started (ms)
    pub wave_started_ms: f64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub particles: Vec<Particle>,
    pub texts: Vec<FloatingText>,
    pub powerups: Vec<PowerUp>,
    /// Events raised by the last tick, drained by the orchestrator
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new match with the given seed, starting its first wave at `now_ms`
    pub fn new(seed: u64, rules: MatchRules, now_ms: f64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            rules,
            phase: GamePhase::Playing,
            score: 0,
            frame: 0,
            tier: Tier::Lust,
            wave_index: 0,
            wave_started_ms: now_ms,
            player: Player::new(Arsenal::for_progression(rules.progression)),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            particles: Vec::new(),
            texts: Vec::new(),
            powerups: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whole seconds into the current wave
    pub fn wave_seconds(&self, now_ms: f64) -> u32 {
        ((now_ms - self.wave_started_ms).max(0.0) / 1000.0).floor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(7, MatchRules::default(), 0.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.tier, Tier::Lust);
        assert_eq!(state.player.hp, PLAYER_MAX_HP);
        assert_eq!(state.player.pos, crate::arena_center());
        assert!(matches!(
            state.player.arsenal,
            Arsenal::Magazine(Magazine { ammo: 12, max_ammo: 12, reload: ReloadState::Ready })
        ));
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_relic_progression_starts_without_upgrades() {
        let rules = MatchRules {
            progression: Progression::Relics,
            ..Default::default()
        };
        let state = GameState::new(7, rules, 0.0);
        assert_eq!(state.player.arsenal, Arsenal::Relics(Upgrades::default()));
        assert_eq!(state.player.speed(), PLAYER_SPEED);
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut state = GameState::new(1, MatchRules::default(), 0.0);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_upgrades_missing_shrinks() {
        let mut upgrades = Upgrades::default();
        assert_eq!(upgrades.missing().len(), 4);
        upgrades.grant(Relic::Spread);
        upgrades.grant(Relic::SpeedBoost);
        assert_eq!(upgrades.missing(), vec![Relic::Knockback, Relic::RapidFire]);
    }

    #[test]
    fn test_powerup_blinks_only_near_expiry() {
        let mut p = PowerUp {
            id: 1,
            kind: PowerUpKind::Health,
            pos: Vec2::ZERO,
            radius: POWERUP_RADIUS,
            life: POWERUP_LIFE,
            blink_offset: 0.0,
            dead: false,
        };
        assert!((0..20).all(|f| p.visible(f)));

        p.life = 10;
        assert!(!p.visible(0));
        assert!(p.visible(5));
    }

    #[test]
    fn test_wave_seconds() {
        let state = GameState::new(1, MatchRules::default(), 1000.0);
        assert_eq!(state.wave_seconds(1000.0), 0);
        assert_eq!(state.wave_seconds(3999.0), 2);
        assert_eq!(state.wave_seconds(500.0), 0);
    }
}
