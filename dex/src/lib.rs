//! Record types and JSON parsing for team builder reference data.
//!
//! The host application serves species, typings, natures and teams as JSON.
//! This crate mirrors those records and checks the few invariants the
//! engines depend on.

use std::collections::HashSet;

use anyhow::{Context, Result};
use thiserror::Error;

pub mod records;

pub use records::{
    Ability, BasePokemon, Item, Move, Nature, Pokemon, SelectedMove, Stats, Team, Typing,
    TypingRef,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid record format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Duplicate typing: {0}")]
    DuplicateTyping(String),

    #[error("Team name cannot be empty")]
    EmptyTeamName,
}

/// Parse the typing table
pub fn parse_typings(json: &str) -> Result<Vec<Typing>> {
    let typings: Vec<Typing> =
        serde_json::from_str(json).context("Failed to parse typing table")?;

    let mut seen = HashSet::new();
    for typing in &typings {
        if typing.name.is_empty() {
            return Err(ParseError::MissingField(format!("name of typing {}", typing.id)).into());
        }
        if !seen.insert(typing.name.as_str()) {
            return Err(ParseError::DuplicateTyping(typing.name.clone()).into());
        }
    }

    Ok(typings)
}

/// Parse the nature table
pub fn parse_natures(json: &str) -> Result<Vec<Nature>> {
    let natures: Vec<Nature> =
        serde_json::from_str(json).context("Failed to parse nature table")?;

    if let Some(nature) = natures.iter().find(|n| n.name.is_empty()) {
        return Err(ParseError::InvalidFormat(format!(
            "nature without a name (up: {:?}, down: {:?})",
            nature.up, nature.down
        ))
        .into());
    }

    Ok(natures)
}

/// Parse the species list
pub fn parse_species(json: &str) -> Result<Vec<BasePokemon>> {
    let species: Vec<BasePokemon> =
        serde_json::from_str(json).context("Failed to parse species list")?;

    if let Some(entry) = species.iter().find(|s| s.typings.is_empty() || s.typings.len() > 2) {
        return Err(ParseError::InvalidFormat(format!(
            "{} has {} typings, expected 1 or 2",
            entry.name,
            entry.typings.len()
        ))
        .into());
    }

    Ok(species)
}

/// Parse a single team
pub fn parse_team(json: &str) -> Result<Team> {
    let team: Team = serde_json::from_str(json).context("Failed to parse team")?;
    check_team(&team)?;
    Ok(team)
}

/// Parse a list of teams
pub fn parse_teams(json: &str) -> Result<Vec<Team>> {
    let teams: Vec<Team> = serde_json::from_str(json).context("Failed to parse team list")?;
    for team in &teams {
        check_team(team).with_context(|| format!("Invalid team {}", team.id))?;
    }
    Ok(teams)
}

fn check_team(team: &Team) -> Result<()> {
    if team.name.trim().is_empty() {
        return Err(ParseError::EmptyTeamName.into());
    }
    Ok(())
}
