//! The stat and type effectiveness engines
//!
//! Both are pure functions over borrowed input: no I/O, no logging, no
//! shared state.

mod effectiveness;
mod stats;

pub use effectiveness::{
    aggregate, effectiveness, Effectiveness, EffectivenessResult, MatchupTally, RosterMember,
};
pub use stats::{compute_derived_stats, Creature, FIXED_HP_BASE};
