//! Species-level records: base stats, abilities, moves, items

use serde::{Deserialize, Serialize};

use super::typing::TypingRef;

/// Six stat values as served by the host (`specialAttack`, ...)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub typing: TypingRef,
    /// "physical", "special" or "status"
    pub category: String,
    #[serde(default)]
    pub base_power: Option<u16>,
    #[serde(default)]
    pub accuracy: Option<u16>,
    #[serde(default)]
    pub pp: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Species data shared by every member of that species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasePokemon {
    pub id: u32,
    pub name: String,
    /// 1-2 typings, primary first
    pub typings: Vec<TypingRef>,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    pub base_stats: Stats,
    #[serde(default)]
    pub moves: Vec<Move>,
    #[serde(default)]
    pub sprite: Option<String>,
}

impl BasePokemon {
    /// Names of this species' typings in order
    pub fn typing_names(&self) -> impl Iterator<Item = &str> {
        self.typings.iter().map(|t| t.name.as_str())
    }

    /// Check if the species can learn a move
    pub fn learns(&self, move_id: u32) -> bool {
        self.moves.iter().any(|m| m.id == move_id)
    }
}
