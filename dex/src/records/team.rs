//! Team records: natures, team members and teams

use serde::{Deserialize, Serialize};

use super::species::{Ability, BasePokemon, Item, Stats};
use super::typing::Typing;

/// A nature as served by the host.
///
/// `up`/`down` hold stat keys (`attack`, `specialDefense`, ...). Natures
/// without an effect leave both unset or name the same stat twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nature {
    pub name: String,
    #[serde(default)]
    pub up: Option<String>,
    #[serde(default)]
    pub down: Option<String>,
}

/// A move chosen for one of the four move slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedMove {
    pub id: u32,
    #[serde(default)]
    pub slot: Option<u8>,
}

/// A team member with its per-creature configuration.
///
/// Hosts either embed species data as `basePokemon` or flatten it onto the
/// member (`id`, `name`, `typings`, `baseStats`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    pub personal_id: u32,
    #[serde(default)]
    pub nickname: Option<String>,
    pub level: u8,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub item: Option<Item>,
    pub nature: Nature,
    #[serde(default)]
    pub ability: Option<Ability>,
    #[serde(default)]
    pub selected_moves: Vec<Option<SelectedMove>>,
    #[serde(rename = "eVs", alias = "evs", default)]
    pub evs: Stats,
    #[serde(rename = "iVs", alias = "ivs", default)]
    pub ivs: Stats,
    /// Species data, missing while the host is still loading it
    #[serde(default)]
    pub base_pokemon: Option<BasePokemon>,
    /// Species id of a flattened record
    #[serde(default, alias = "speciesId")]
    pub id: Option<u32>,
    /// Species name of a flattened record
    #[serde(default)]
    pub name: Option<String>,
    /// Full typings of a flattened record, primary first
    #[serde(default)]
    pub typings: Vec<Typing>,
    #[serde(default)]
    pub base_stats: Option<Stats>,
}

impl Pokemon {
    /// Display name: nickname if set, otherwise the species name
    pub fn display_name(&self) -> &str {
        self.nickname
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.species_name())
            .unwrap_or("Unknown")
    }

    /// Species name from the embedded species data or the flattened record
    pub fn species_name(&self) -> Option<&str> {
        self.base_pokemon
            .as_ref()
            .map(|b| b.name.as_str())
            .or(self.name.as_deref())
            .filter(|n| !n.is_empty())
    }

    /// Species id from the embedded species data or the flattened record
    pub fn species_id(&self) -> Option<u32> {
        self.base_pokemon.as_ref().map(|b| b.id).or(self.id)
    }

    /// Species base stats from the embedded species data or the flattened
    /// record
    pub fn species_base_stats(&self) -> Option<Stats> {
        self.base_pokemon
            .as_ref()
            .map(|b| b.base_stats)
            .or(self.base_stats)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub pokemons: Vec<Pokemon>,
}
