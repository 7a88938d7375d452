//! Typing records and their weak/resist/immune relations

use serde::{Deserialize, Serialize};

/// A reference to a typing by id and name.
///
/// Hosts sometimes embed full typings where a reference is expected; the
/// extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypingRef {
    #[serde(default)]
    pub id: u32,
    pub name: String,
}

/// A typing as the defending side sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typing {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub weaknesses: Vec<TypingRef>,
    #[serde(default)]
    pub resistances: Vec<TypingRef>,
    #[serde(default)]
    pub immunities: Vec<TypingRef>,
}

impl Typing {
    pub fn to_ref(&self) -> TypingRef {
        TypingRef {
            id: self.id,
            name: self.name.clone(),
        }
    }
}
