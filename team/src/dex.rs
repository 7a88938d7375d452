//! Reference tables and conversion from host records

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use teamcraft_calc::{DamageType, Nature, Stat, StatBlock, TypeChart};
use teamcraft_dex::{records, BasePokemon, Stats, Typing};

/// Reference tables a team is analyzed against
#[derive(Debug, Clone, Default)]
pub struct Dex {
    chart: TypeChart,
    natures: Vec<Nature>,
    species: HashMap<u32, BasePokemon>,
}

impl Dex {
    pub fn new(chart: TypeChart, natures: Vec<Nature>, species: Vec<BasePokemon>) -> Self {
        Self {
            chart,
            natures,
            species: species.into_iter().map(|s| (s.id, s)).collect(),
        }
    }

    /// Build from host records
    pub fn from_records(
        typings: &[Typing],
        natures: &[records::Nature],
        species: Vec<BasePokemon>,
    ) -> Self {
        let chart = TypeChart::from_types(typings.iter().map(damage_type).collect());
        let natures = natures.iter().map(nature).collect();
        Self::new(chart, natures, species)
    }

    /// Build from the host's JSON tables
    pub fn from_json(typings: &str, natures: &str, species: &str) -> Result<Self> {
        let typings = teamcraft_dex::parse_typings(typings)?;
        let natures = teamcraft_dex::parse_natures(natures)?;
        let species = teamcraft_dex::parse_species(species)?;

        tracing::debug!(
            typings = typings.len(),
            natures = natures.len(),
            species = species.len(),
            "Loaded reference tables"
        );

        Ok(Self::from_records(&typings, &natures, species))
    }

    /// Load `typings.json`, `natures.json` and `species.json` from a directory
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let read = |file: &str| {
            let path = dir.join(file);
            std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))
        };

        Self::from_json(&read("typings.json")?, &read("natures.json")?, &read("species.json")?)
            .with_context(|| format!("Invalid reference tables in {}", dir.display()))
    }

    pub fn chart(&self) -> &TypeChart {
        &self.chart
    }

    pub fn natures(&self) -> &[Nature] {
        &self.natures
    }

    pub fn species(&self, id: u32) -> Option<&BasePokemon> {
        self.species.get(&id)
    }

    pub fn nature(&self, name: &str) -> Option<&Nature> {
        self.natures.iter().find(|n| n.name() == name)
    }

    /// Resolve typing names against the chart, dropping unknown names
    pub fn resolve_types<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Vec<DamageType> {
        names
            .into_iter()
            .filter_map(|name| {
                let found = self.chart.get(name).cloned();
                if found.is_none() {
                    tracing::warn!(typing = name, "Typing missing from reference tables");
                }
                found
            })
            .collect()
    }

    /// Resolve a typing record against the chart, falling back to the
    /// record's own relations when the chart lacks it
    pub fn resolve_typing(&self, typing: &Typing) -> DamageType {
        match self.chart.get(&typing.name) {
            Some(found) => found.clone(),
            None => {
                tracing::debug!(typing = %typing.name, "Typing missing from chart, using record relations");
                damage_type(typing)
            }
        }
    }
}

/// Convert a stat record
pub fn stat_block(stats: &Stats) -> StatBlock {
    StatBlock::new(
        stats.hp,
        stats.attack,
        stats.defense,
        stats.special_attack,
        stats.special_defense,
        stats.speed,
    )
}

/// Convert a typing record, keeping relations by name
pub fn damage_type(typing: &Typing) -> DamageType {
    DamageType::new(typing.name.as_str())
        .with_weaknesses(typing.weaknesses.iter().map(|t| t.name.as_str()))
        .with_resistances(typing.resistances.iter().map(|t| t.name.as_str()))
        .with_immunities(typing.immunities.iter().map(|t| t.name.as_str()))
}

/// Convert a nature record.
///
/// Unknown stat keys are dropped; a nature raising and lowering the same stat
/// becomes neutral on that stat.
pub fn nature(record: &records::Nature) -> Nature {
    let up = record.up.as_deref().and_then(|key| stat_key(&record.name, key));
    let down = record.down.as_deref().and_then(|key| stat_key(&record.name, key));

    if up.is_some() && up == down {
        tracing::debug!(nature = %record.name, "Nature raises and lowers the same stat, treating as neutral");
    }
    Nature::normalized(record.name.as_str(), up, down)
}

fn stat_key(nature: &str, key: &str) -> Option<Stat> {
    let stat = Stat::parse(key);
    if stat.is_none() {
        tracing::warn!(nature, stat = key, "Unknown stat key in nature");
    }
    stat
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamcraft_dex::TypingRef;

    fn typing_ref(name: &str) -> TypingRef {
        TypingRef {
            id: 0,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_damage_type_from_record() {
        let typing = Typing {
            id: 5,
            name: "ground".to_string(),
            weaknesses: vec![typing_ref("water"), typing_ref("grass")],
            resistances: vec![typing_ref("rock")],
            immunities: vec![typing_ref("electric")],
        };
        let ground = damage_type(&typing);
        assert_eq!(ground.name, "ground");
        assert!(ground.is_weak_to(&DamageType::new("water")));
        assert!(ground.resists(&DamageType::new("rock")));
        assert!(ground.is_immune_to(&DamageType::new("electric")));
    }

    #[test]
    fn test_nature_from_record() {
        let record = records::Nature {
            name: "Timid".to_string(),
            up: Some("speed".to_string()),
            down: Some("attack".to_string()),
        };
        let timid = nature(&record);
        assert_eq!(timid.up(), Some(Stat::Speed));
        assert_eq!(timid.down(), Some(Stat::Attack));
    }

    #[test]
    fn test_same_stat_nature_is_neutral() {
        let record = records::Nature {
            name: "Docile".to_string(),
            up: Some("defense".to_string()),
            down: Some("defense".to_string()),
        };
        let docile = nature(&record);
        assert!(docile.is_neutral());
        assert_eq!(docile.neutral_on(), Some(Stat::Defense));
    }

    #[test]
    fn test_resolve_typing_prefers_chart() {
        let dex = Dex::new(TypeChart::standard(), Vec::new(), Vec::new());

        let water = Typing {
            id: 2,
            name: "water".to_string(),
            weaknesses: Vec::new(),
            resistances: Vec::new(),
            immunities: Vec::new(),
        };
        assert!(dex.resolve_typing(&water).is_weak_to(&DamageType::new("grass")));

        let shadow = Typing {
            id: 99,
            name: "shadow".to_string(),
            weaknesses: vec![typing_ref("light")],
            resistances: Vec::new(),
            immunities: Vec::new(),
        };
        let resolved = dex.resolve_typing(&shadow);
        assert_eq!(resolved.name, "shadow");
        assert!(resolved.is_weak_to(&DamageType::new("light")));
    }

    #[test]
    fn test_unknown_stat_key_is_dropped() {
        let record = records::Nature {
            name: "Odd".to_string(),
            up: Some("luck".to_string()),
            down: Some("speed".to_string()),
        };
        let odd = nature(&record);
        assert_eq!(odd.up(), None);
        assert_eq!(odd.down(), Some(Stat::Speed));
    }

    #[test]
    fn test_from_json() {
        let typings = r#"[
            {"id": 2, "name": "water", "weaknesses": [{"name": "electric"}], "resistances": [{"name": "fire"}]},
            {"id": 4, "name": "electric"}
        ]"#;
        let natures = r#"[{"name": "Bold", "up": "defense", "down": "attack"}]"#;
        let species = r#"[{
            "id": 7, "name": "Squirtle", "typings": [{"name": "water"}],
            "baseStats": {"hp": 44, "attack": 48, "defense": 65, "specialAttack": 50, "specialDefense": 64, "speed": 43}
        }]"#;

        let dex = Dex::from_json(typings, natures, species).unwrap();
        assert_eq!(dex.chart().len(), 2);
        assert_eq!(dex.nature("Bold").unwrap().up(), Some(Stat::Defense));
        assert_eq!(dex.species(7).unwrap().name, "Squirtle");
        assert!(dex.species(8).is_none());
    }

    #[test]
    fn test_resolve_types_drops_unknown() {
        let dex = Dex::new(TypeChart::standard(), Vec::new(), Vec::new());
        let types = dex.resolve_types(["fire", "shadow", "flying"]);
        let names: Vec<_> = types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["fire", "flying"]);
    }

    #[test]
    fn test_load_dir_missing() {
        let err = Dex::load_dir("/nonexistent/dex").unwrap_err();
        assert!(err.to_string().contains("typings.json"));
    }

    #[test]
    fn test_stat_block_from_record() {
        let stats = Stats {
            hp: 1,
            attack: 2,
            defense: 3,
            special_attack: 4,
            special_defense: 5,
            speed: 6,
        };
        assert_eq!(stat_block(&stats), StatBlock::new(1, 2, 3, 4, 5, 6));
    }
}
