//! Lifecycle pass: prune dead and expired entities from every pool.
//!
//! Entities carry no back-references, so filtering the pools is the only
//! reclamation needed.

use super::state::GameState;

pub fn sweep(state: &mut GameState) {
    state.enemies.retain(|e| !e.dead);
    state.projectiles.retain(|p| !p.dead && p.life > 0);
    state.powerups.retain(|p| !p.dead && p.life > 0);
    state.particles.retain(|p| p.life > 0.0);
    state.texts.retain(|t| t.life > 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Enemy, FloatingText, MatchRules, Particle, Projectile};
    use crate::sim::tier::Tier;
    use glam::Vec2;

    #[test]
    fn test_sweep_keeps_only_live_entities() {
        let mut state = GameState::new(1, MatchRules::default(), 0.0);
        let mut dead = Enemy::new(1, Tier::Lust, Vec2::ZERO);
        dead.dead = true;
        state.enemies.push(dead);
        state.enemies.push(Enemy::new(2, Tier::Lust, Vec2::ZERO));

        let mut spent = Projectile::new(3, Vec2::ZERO, Vec2::X);
        spent.dead = true;
        let mut expired = Projectile::new(4, Vec2::ZERO, Vec2::X);
        expired.life = 0;
        state.projectiles.extend([spent, expired, Projectile::new(5, Vec2::ZERO, Vec2::X)]);

        state.particles.push(Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            life: -0.5,
            size: 2.0,
            color: 0,
        });
        state.texts.push(FloatingText {
            pos: Vec2::ZERO,
            text: "LOADED".into(),
            life: 0,
            color: 0,
            scale: 1.0,
        });

        sweep(&mut state);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].id, 2);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.projectiles[0].id, 5);
        assert!(state.particles.is_empty());
        assert!(state.texts.is_empty());
    }
}
