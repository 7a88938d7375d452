//! Domain types consumed by the engines

mod damage_type;
mod nature;
mod stats;

pub use damage_type::{DamageType, StandardType, TypeChart, TYPE_CHART};
pub use nature::{find_nature, nudge_nature, Nature, NatureError, NatureModifier, Nudge};
pub use stats::{Stat, StatBlock};
