//! Derived stat and type effectiveness engines for team building.
//!
//! This crate holds the pure calculations behind a team builder: the six
//! derived stats of a creature and how well each damage type hits a roster.
//!
//! # Overview
//!
//! `teamcraft-calc` sits between the reference data and the roster glue:
//!
//! ```text
//! teamcraft-dex (host records)
//!        │
//!        ▼
//! teamcraft-team (roster glue) ──> teamcraft-calc (engines) ← THIS CRATE
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Stat`], [`StatBlock`] - The six stats and a value per stat
//! - [`Nature`] - Raises one stat by 10% and lowers another by 10%
//! - [`DamageType`], [`TypeChart`] - Types with directed weak/resist/immune relations
//!
//! ## Engines
//! - [`compute_derived_stats`] - Base stats + level + EVs/IVs + nature into final stats
//! - [`effectiveness`] - Multiplier and label for one attacking type against a defender
//! - [`aggregate`] - Weighted weak/resist/immune counts across a roster
//!
//! # Example Usage
//!
//! ```
//! use teamcraft_calc::{
//!     aggregate, compute_derived_stats, Creature, RosterMember, StatBlock, TypeChart,
//! };
//!
//! let creature = Creature::new(StatBlock::uniform(100), 100);
//! assert_eq!(compute_derived_stats(&creature).attack, 205);
//!
//! let chart = TypeChart::standard();
//! let water = chart.get("water").unwrap().clone();
//! let electric = chart.get("electric").unwrap();
//! let tally = aggregate(&[RosterMember::mono(water)], electric);
//! assert_eq!(tally.weak, 1);
//! ```

pub mod engine;
pub mod query;
pub mod types;

// Re-export main types at crate root for convenience
pub use engine::{
    aggregate, compute_derived_stats, effectiveness, Creature, Effectiveness,
    EffectivenessResult, MatchupTally, RosterMember, FIXED_HP_BASE,
};
pub use types::{
    find_nature, nudge_nature, DamageType, Nature, NatureError, NatureModifier, Nudge,
    StandardType, Stat, StatBlock, TypeChart, TYPE_CHART,
};
