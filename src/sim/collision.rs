//! Collision and geometry helpers
//!
//! Every gameplay shape is a circle. Entity counts are small enough that the
//! resolver tests pairs brute force, so these stay tiny and branch-free.

use glam::Vec2;

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// Two circles collide iff the distance between centers is strictly less
/// than the sum of their radii (touching is not a hit).
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Displacement that moves `from` toward `to` by `speed`.
/// Zero when the points coincide (no direction to seek).
pub fn seek_step(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    let delta = to - from;
    let dist = delta.length();
    if dist > 0.0 {
        delta / dist * speed
    } else {
        Vec2::ZERO
    }
}

/// Clamp a circle center so the whole circle stays inside the arena
pub fn clamp_to_arena(pos: Vec2, radius: f32) -> Vec2 {
    Vec2::new(
        pos.x.clamp(radius, ARENA_WIDTH - radius),
        pos.y.clamp(radius, ARENA_HEIGHT - radius),
    )
}

/// Whether a point lies inside the arena rectangle (edges included)
pub fn in_arena(pos: Vec2) -> bool {
    (0.0..=ARENA_WIDTH).contains(&pos.x) && (0.0..=ARENA_HEIGHT).contains(&pos.y)
}
