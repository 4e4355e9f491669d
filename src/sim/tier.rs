//! Difficulty tiers ("sins")
//!
//! Seven tiers in a fixed cycle, each with its own enemy stat row and spawn
//! cadence. Adding a tier means adding a variant and its `stats` arm; the
//! match below is exhaustive on purpose.

use serde::{Deserialize, Serialize};

/// One difficulty stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Lust,
    Gluttony,
    Greed,
    Sloth,
    Wrath,
    Envy,
    Pride,
}

/// Per-tier enemy stats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierStats {
    pub speed: f32,
    pub hp: i32,
    /// 0xRRGGBB
    pub color: u32,
    pub radius: f32,
    /// Polygon side count, 0 = circle
    pub sides: u8,
    pub label: &'static str,
    /// Ticks between spawns (lower is faster)
    pub spawn_rate: u64,
}

impl Tier {
    /// Tiers in cycle order
    pub const ALL: [Tier; 7] = [
        Tier::Lust,
        Tier::Gluttony,
        Tier::Greed,
        Tier::Sloth,
        Tier::Wrath,
        Tier::Envy,
        Tier::Pride,
    ];

    pub fn stats(self) -> TierStats {
        match self {
            Tier::Lust => TierStats {
                speed: 2.0,
                hp: 20,
                color: 0xec4899,
                radius: 12.0,
                sides: 0,
                label: "LUST",
                spawn_rate: 80, // ~1.3s
            },
            Tier::Gluttony => TierStats {
                speed: 0.6,
                hp: 80,
                color: 0x22c55e,
                radius: 25.0,
                sides: 6,
                label: "GLUTTONY",
                spawn_rate: 150,
            },
            Tier::Greed => TierStats {
                speed: 3.0,
                hp: 15,
                color: 0xeab308,
                radius: 10.0,
                sides: 4,
                label: "GREED",
                spawn_rate: 70,
            },
            Tier::Sloth => TierStats {
                speed: 0.3,
                hp: 120,
                color: 0x60a5fa,
                radius: 30.0,
                sides: 4,
                label: "SLOTH",
                spawn_rate: 200,
            },
            Tier::Wrath => TierStats {
                speed: 3.5,
                hp: 35,
                color: 0xef4444,
                radius: 15.0,
                sides: 3,
                label: "WRATH",
                spawn_rate: 90,
            },
            Tier::Envy => TierStats {
                speed: 2.0,
                hp: 25,
                color: 0xa855f7,
                radius: 12.0,
                sides: 0,
                label: "ENVY",
                spawn_rate: 45, // swarm
            },
            Tier::Pride => TierStats {
                speed: 1.5,
                hp: 200,
                color: 0xf97316,
                radius: 40.0,
                sides: 8,
                label: "PRIDE",
                spawn_rate: 300, // ~5s
            },
        }
    }

    /// Position in the cycle (0..7)
    pub fn index(self) -> usize {
        match self {
            Tier::Lust => 0,
            Tier::Gluttony => 1,
            Tier::Greed => 2,
            Tier::Sloth => 3,
            Tier::Wrath => 4,
            Tier::Envy => 5,
            Tier::Pride => 6,
        }
    }

    /// Tier at a cycle position; wraps so it can never go out of range
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Next tier in the cycle (Pride wraps to Lust)
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn label(self) -> &'static str {
        self.stats().label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_cycle_order() {
        for (i, tier) in Tier::ALL.iter().enumerate() {
            assert_eq!(tier.index(), i);
            assert_eq!(Tier::from_index(i), *tier);
        }
    }

    #[test]
    fn test_cycle_has_period_seven() {
        let mut tier = Tier::Lust;
        for _ in 0..7 {
            tier = tier.next();
        }
        assert_eq!(tier, Tier::Lust);
        assert_eq!(Tier::Pride.next(), Tier::Lust);
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(Tier::from_index(7), Tier::Lust);
        assert_eq!(Tier::from_index(13), Tier::Pride);
    }

    #[test]
    fn test_stat_rows_are_sane() {
        for tier in Tier::ALL {
            let stats = tier.stats();
            assert!(stats.hp > 0, "{} hp", stats.label);
            assert!(stats.speed > 0.0);
            assert!(stats.radius > 0.0);
            assert!(stats.spawn_rate > 0);
        }
        assert_eq!(Tier::Envy.stats().spawn_rate, 45);
        assert_eq!(Tier::Pride.label(), "PRIDE");
    }
}
