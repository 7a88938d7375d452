//! Query helpers for team building decisions
//!
//! This module provides utilities for analyzing type matchups of a single
//! defender against a whole type chart.

mod matchup;

pub use matchup::{
    immunities,
    is_immune_to,
    is_weak_to_any,
    resistances,
    resists_all,
    weaknesses,
};
