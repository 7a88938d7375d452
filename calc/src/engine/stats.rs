//! Derived stat calculation

use crate::types::{Nature, Stat, StatBlock};

/// Base stat marking a species whose HP is always 1 (Shedinja)
pub const FIXED_HP_BASE: u16 = 1;

/// Everything the stat formula reads from a creature
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Creature {
    /// Species base stats, `None` while species data is unavailable
    pub base_stats: Option<StatBlock>,

    /// Level (1-100)
    pub level: u8,

    pub effort_values: StatBlock,
    pub individual_values: StatBlock,
    pub nature: Nature,
}

impl Creature {
    /// Create a creature with zero EVs/IVs and a neutral nature
    pub fn new(base_stats: StatBlock, level: u8) -> Self {
        Self {
            base_stats: Some(base_stats),
            level,
            effort_values: StatBlock::zero(),
            individual_values: StatBlock::zero(),
            nature: Nature::default(),
        }
    }

    pub fn with_effort_values(mut self, evs: StatBlock) -> Self {
        self.effort_values = evs;
        self
    }

    pub fn with_individual_values(mut self, ivs: StatBlock) -> Self {
        self.individual_values = ivs;
        self
    }

    pub fn with_nature(mut self, nature: Nature) -> Self {
        self.nature = nature;
        self
    }
}

/// Compute the six derived stats of a creature.
///
/// Returns [`StatBlock::zero`] when base stats are missing; callers decide how
/// to report that. `level` must already be within 1-100.
pub fn compute_derived_stats(creature: &Creature) -> StatBlock {
    let Some(base) = creature.base_stats else {
        return StatBlock::zero();
    };

    let mut derived = StatBlock::zero();
    for stat in Stat::ALL {
        let value = match stat {
            Stat::Hp => derive_hp(
                base.hp,
                creature.individual_values.hp,
                creature.effort_values.hp,
                creature.level,
            ),
            _ => derive_stat(
                base.get(stat),
                creature.individual_values.get(stat),
                creature.effort_values.get(stat),
                creature.level,
                &creature.nature,
                stat,
            ),
        };
        derived.set(stat, value);
    }
    derived
}

/// `floor((2*base + iv + floor(ev/4)) * level / 100)`, shared by every stat
fn scaled(base: u16, iv: u16, ev: u16, level: u8) -> u32 {
    let raw = 2 * u32::from(base) + u32::from(iv) + u32::from(ev) / 4;
    raw * u32::from(level) / 100
}

fn derive_hp(base: u16, iv: u16, ev: u16, level: u8) -> u16 {
    if base == FIXED_HP_BASE {
        return 1;
    }
    saturate(scaled(base, iv, ev, level) + u32::from(level) + 10)
}

fn derive_stat(base: u16, iv: u16, ev: u16, level: u8, nature: &Nature, stat: Stat) -> u16 {
    let before_nature = scaled(base, iv, ev, level) + 5;
    saturate(nature.modifier(stat).apply(before_nature))
}

fn saturate(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
