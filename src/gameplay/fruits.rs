//! Fruit tier tables and the merge rule.
//!
//! A tier table is ordered smallest to largest. Two fruits of tier `i` merge into one
//! fruit of tier `i + 1` and award `2^i` points; the top tier never merges.

use bevy::prelude::*;
use rand::Rng;
use serde::Deserialize;

use crate::core::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FruitKind {
    /// Sprite name relative to the asset root, without extension.
    pub name: &'static str,
    pub radius: f32,
}

const fn fruit(name: &'static str, radius: f32) -> FruitKind {
    FruitKind { name, radius }
}

pub const FRUITS_BASE: [FruitKind; 11] = [
    fruit("base/00_cherry", 33.0),
    fruit("base/01_strawberry", 48.0),
    fruit("base/02_grape", 61.0),
    fruit("base/03_gyool", 69.0),
    fruit("base/04_orange", 89.0),
    fruit("base/05_apple", 114.0),
    fruit("base/06_pear", 129.0),
    fruit("base/07_peach", 156.0),
    fruit("base/08_pineapple", 177.0),
    fruit("base/09_melon", 220.0),
    fruit("base/10_watermelon", 259.0),
];

pub const FRUITS_HALLOWEEN: [FruitKind; 11] = [
    fruit("halloween/00_candy", 33.0),
    fruit("halloween/01_eyeball", 48.0),
    fruit("halloween/02_spider", 61.0),
    fruit("halloween/03_bat", 69.0),
    fruit("halloween/04_skull", 89.0),
    fruit("halloween/05_ghost", 114.0),
    fruit("halloween/06_black_cat", 129.0),
    fruit("halloween/07_cauldron", 156.0),
    fruit("halloween/08_witch_hat", 177.0),
    fruit("halloween/09_pumpkin", 220.0),
    fruit("halloween/10_jack_o_lantern", 259.0),
];

/// Written as a string in RON (`theme: "halloween"`) so layered merging keeps it.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
#[serde(try_from = "String")]
pub enum Theme {
    #[default]
    Base,
    Halloween,
}

impl TryFrom<String> for Theme {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        match raw.to_ascii_lowercase().as_str() {
            "base" => Ok(Theme::Base),
            "halloween" => Ok(Theme::Halloween),
            other => Err(format!("unknown theme '{other}' (expected base or halloween)")),
        }
    }
}

impl Theme {
    pub fn tiers(self) -> &'static [FruitKind] {
        match self {
            Theme::Base => &FRUITS_BASE,
            Theme::Halloween => &FRUITS_HALLOWEEN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    pub tier: usize,
    pub points: u64,
}

/// Active tier table, chosen from the configured theme.
#[derive(Resource, Debug, Clone, Copy)]
pub struct FruitTable {
    pub theme: Theme,
    tiers: &'static [FruitKind],
}

impl FromWorld for FruitTable {
    fn from_world(world: &mut World) -> Self {
        let theme = world
            .get_resource::<GameConfig>()
            .map(|cfg| cfg.theme)
            .unwrap_or_default();
        Self::for_theme(theme)
    }
}

impl FruitTable {
    pub fn for_theme(theme: Theme) -> Self {
        Self {
            theme,
            tiers: theme.tiers(),
        }
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn get(&self, tier: usize) -> Option<&FruitKind> {
        self.tiers.get(tier)
    }

    pub fn max_tier(&self) -> usize {
        self.tiers.len().saturating_sub(1)
    }

    pub fn merge(&self, a: usize, b: usize) -> Option<MergeOutcome> {
        if a != b || a >= self.max_tier() {
            return None;
        }
        Some(MergeOutcome {
            tier: a + 1,
            points: 1u64 << a,
        })
    }

    /// Uniform pick among the `pool` smallest tiers (clamped to the table, at least one).
    pub fn roll_droppable(&self, rng: &mut impl Rng, pool: usize) -> usize {
        let upper = pool.clamp(1, self.len().max(1));
        rng.gen_range(0..upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn tables_grow_monotonically() {
        for theme in [Theme::Base, Theme::Halloween] {
            let tiers = theme.tiers();
            for pair in tiers.windows(2) {
                assert!(pair[0].radius < pair[1].radius, "{theme:?} not ordered");
            }
        }
    }

    #[test]
    fn themes_share_geometry() {
        for (b, h) in FRUITS_BASE.iter().zip(FRUITS_HALLOWEEN.iter()) {
            assert_eq!(b.radius, h.radius);
        }
    }

    #[test]
    fn equal_tiers_promote_and_score_power_of_two() {
        let table = FruitTable::for_theme(Theme::Base);
        assert_eq!(table.merge(0, 0), Some(MergeOutcome { tier: 1, points: 1 }));
        assert_eq!(table.merge(3, 3), Some(MergeOutcome { tier: 4, points: 8 }));
        assert_eq!(table.merge(9, 9), Some(MergeOutcome { tier: 10, points: 512 }));
    }

    #[test]
    fn mixed_or_top_tiers_do_not_merge() {
        let table = FruitTable::for_theme(Theme::Base);
        assert_eq!(table.merge(1, 2), None);
        assert_eq!(table.merge(table.max_tier(), table.max_tier()), None);
    }

    #[test]
    fn roll_stays_in_pool() {
        let table = FruitTable::for_theme(Theme::Base);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(table.roll_droppable(&mut rng, 5) < 5);
        }
        for _ in 0..50 {
            assert_eq!(table.roll_droppable(&mut rng, 0), 0);
            assert!(table.roll_droppable(&mut rng, 99) < table.len());
        }
    }

    #[test]
    fn theme_reads_from_string() {
        assert_eq!(Theme::try_from("Halloween".to_string()), Ok(Theme::Halloween));
        assert!(Theme::try_from("autumn".to_string()).is_err());
        let t: Theme = ron::from_str(r#""base""#).unwrap();
        assert_eq!(t, Theme::Base);
    }
}
