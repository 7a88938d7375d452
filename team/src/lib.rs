//! Roster analysis for team building.
//!
//! This crate connects the host's records to the engines in
//! `teamcraft-calc`: it resolves species, typings and natures against the
//! reference tables, applies the editing limits of a team builder, and builds
//! the roster weakness table.
//!
//! # Overview
//!
//! ```text
//! teamcraft-dex (host records)
//!        │
//!        ▼
//! teamcraft-team (roster glue) ← THIS CRATE
//!        │
//!        ▼
//! teamcraft-calc (engines)
//! ```
//!
//! # Main Types
//!
//! - [`Dex`] - Type chart, natures and species the team is analyzed against
//! - [`TeamConfig`] - Member, EV, IV and level limits
//! - [`TeamMember`] - One configured creature
//! - [`Roster`] - A team of members
//! - [`WeaknessReport`] - Per-type, per-member effectiveness with roster tallies
//!
//! # Example Usage
//!
//! ```ignore
//! use teamcraft_team::{Dex, Roster, TeamConfig, WeaknessReport};
//!
//! let dex = Dex::load_dir("data")?;
//! let config = TeamConfig::default();
//! let team = teamcraft_dex::parse_team(&std::fs::read_to_string("team.json")?)?;
//! let roster = Roster::from_record(&team, &dex, &config)?;
//!
//! for row in WeaknessReport::build(&roster, dex.chart()).rows() {
//!     println!("{}: {} weak / {} resist", row.attacking_type, row.tally.weak, row.tally.resist);
//! }
//! ```

use thiserror::Error;

pub mod config;
pub mod dex;
pub mod member;
pub mod report;
pub mod roster;

pub use config::TeamConfig;
pub use dex::Dex;
pub use member::{StatLine, TeamMember};
pub use report::{WeaknessReport, WeaknessRow};
pub use roster::Roster;

#[derive(Error, Debug)]
pub enum TeamError {
    #[error("Roster is full ({max} members)")]
    RosterFull { max: usize },

    #[error("No member with personal id {0}")]
    UnknownMember(u32),

    #[error("Unknown typing: {0}")]
    UnknownTyping(String),
}
