//! A configured team member

use serde::Serialize;
use teamcraft_calc::{
    compute_derived_stats, nudge_nature, Creature, DamageType, Nature, NatureModifier, Nudge,
    RosterMember, Stat, StatBlock,
};
use teamcraft_dex::Pokemon;

use crate::config::TeamConfig;
use crate::dex::{self, Dex};

/// A team member with everything the engines need
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMember {
    pub personal_id: u32,

    /// Nickname if set, otherwise species name
    pub name: String,

    pub species_id: Option<u32>,

    /// Level (1-100)
    pub level: u8,

    /// `None` while species data is unavailable
    pub base_stats: Option<StatBlock>,

    /// 1-2 types, primary first
    pub types: Vec<DamageType>,

    pub evs: StatBlock,
    pub ivs: StatBlock,
    pub nature: Nature,

    pub item: Option<String>,
    pub ability: Option<String>,

    /// Move ids per slot
    pub moves: Vec<Option<u32>>,
}

/// One row of a member's stat table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatLine {
    pub stat: Stat,
    pub abbreviation: &'static str,
    pub base: u16,
    pub ev: u16,
    pub iv: u16,
    pub derived: u16,
    pub modifier: NatureModifier,
    /// `derived / stat_bar_scale`, capped at 1.0
    pub bar: f64,
}

impl TeamMember {
    /// Build from a host record.
    ///
    /// Species data comes from the record, embedded or flattened, and
    /// otherwise from the dex by species id.
    pub fn from_record(record: &Pokemon, dex: &Dex) -> Self {
        let species = record
            .base_pokemon
            .as_ref()
            .or_else(|| record.species_id().and_then(|id| dex.species(id)));

        let types = if record.base_pokemon.is_none() && !record.typings.is_empty() {
            record.typings.iter().map(|t| dex.resolve_typing(t)).collect()
        } else {
            species
                .map(|s| dex.resolve_types(s.typing_names()))
                .unwrap_or_default()
        };

        let base_stats = record
            .species_base_stats()
            .or_else(|| species.map(|s| s.base_stats));

        let name = match record.nickname.as_deref() {
            Some(nickname) if !nickname.is_empty() => nickname,
            _ => record
                .species_name()
                .or(species.map(|s| s.name.as_str()))
                .unwrap_or("Unknown"),
        };

        Self {
            personal_id: record.personal_id,
            name: name.to_string(),
            species_id: record.species_id(),
            level: record.level,
            base_stats: base_stats.map(|s| dex::stat_block(&s)),
            types,
            evs: dex::stat_block(&record.evs),
            ivs: dex::stat_block(&record.ivs),
            nature: dex::nature(&record.nature),
            item: record.item.as_ref().map(|i| i.name.clone()),
            ability: record.ability.as_ref().map(|a| a.name.clone()),
            moves: record
                .selected_moves
                .iter()
                .map(|m| m.as_ref().map(|m| m.id))
                .collect(),
        }
    }

    /// Input record for the stat engine
    pub fn creature(&self) -> Creature {
        Creature {
            base_stats: self.base_stats,
            level: self.level,
            effort_values: self.evs,
            individual_values: self.ivs,
            nature: self.nature.clone(),
        }
    }

    /// Input record for the effectiveness engine
    pub fn matchup(&self) -> RosterMember {
        RosterMember::new(self.types.clone())
    }

    /// Derived stats, all zero while species data is missing
    pub fn derived_stats(&self) -> StatBlock {
        if self.base_stats.is_none() {
            tracing::warn!(
                personal_id = self.personal_id,
                name = %self.name,
                "Base species data missing, derived stats unavailable"
            );
        }
        compute_derived_stats(&self.creature())
    }

    /// Points left to spend on effort values
    pub fn remaining_evs(&self, config: &TeamConfig) -> u32 {
        self.evs.remaining(config.max_ev_total)
    }

    /// Set an effort value, limited by the per-stat and total caps.
    ///
    /// Returns the value actually stored.
    pub fn set_ev(&mut self, stat: Stat, value: u16, config: &TeamConfig) -> u16 {
        self.evs
            .allocate(stat, value, config.max_ev_per_stat, config.max_ev_total)
    }

    /// Set an individual value, clamped to the configured maximum
    pub fn set_iv(&mut self, stat: Stat, value: u16, config: &TeamConfig) -> u16 {
        let value = config.clamp_iv(value);
        self.ivs.set(stat, value);
        value
    }

    /// Set the level, clamped to the configured range
    pub fn set_level(&mut self, level: u8, config: &TeamConfig) -> u8 {
        self.level = config.clamp_level(level);
        self.level
    }

    /// Move the nature's boost or drop onto `stat`.
    ///
    /// Returns false (and keeps the current nature) when no nature in the
    /// table fits.
    pub fn nudge_nature(&mut self, stat: Stat, nudge: Nudge, natures: &[Nature]) -> bool {
        match nudge_nature(natures, &self.nature, stat, nudge) {
            Some(next) => {
                self.nature = next.clone();
                true
            }
            None => false,
        }
    }

    /// Stat table rows in display order
    pub fn stat_lines(&self, config: &TeamConfig) -> Vec<StatLine> {
        let base = self.base_stats.unwrap_or_default();
        let derived = self.derived_stats();
        let scale = f64::from(config.stat_bar_scale.max(1));

        Stat::ALL
            .iter()
            .map(|&stat| StatLine {
                stat,
                abbreviation: stat.abbreviation(),
                base: base.get(stat),
                ev: self.evs.get(stat),
                iv: self.ivs.get(stat),
                derived: derived.get(stat),
                modifier: self.nature.modifier(stat),
                bar: (f64::from(derived.get(stat)) / scale).min(1.0),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamcraft_calc::TypeChart;
    use teamcraft_dex::{BasePokemon, Stats, TypingRef};

    fn stats(hp: u16, attack: u16, defense: u16, spa: u16, spd: u16, speed: u16) -> Stats {
        Stats {
            hp,
            attack,
            defense,
            special_attack: spa,
            special_defense: spd,
            speed,
        }
    }

    fn garchomp() -> BasePokemon {
        BasePokemon {
            id: 445,
            name: "Garchomp".to_string(),
            typings: vec![
                TypingRef {
                    id: 15,
                    name: "dragon".to_string(),
                },
                TypingRef {
                    id: 5,
                    name: "ground".to_string(),
                },
            ],
            abilities: Vec::new(),
            base_stats: stats(108, 130, 95, 80, 85, 102),
            moves: Vec::new(),
            sprite: None,
        }
    }

    fn natures() -> Vec<Nature> {
        vec![
            Nature::new("Adamant", Some(Stat::Attack), Some(Stat::SpecialAttack)).unwrap(),
            Nature::new("Jolly", Some(Stat::Speed), Some(Stat::SpecialAttack)).unwrap(),
            Nature::new("Lonely", Some(Stat::Attack), Some(Stat::Defense)).unwrap(),
        ]
    }

    fn dex() -> Dex {
        Dex::new(TypeChart::standard(), natures(), vec![garchomp()])
    }

    fn record(json: &str) -> Pokemon {
        serde_json::from_str(json).unwrap()
    }

    fn jolly_chomp() -> Pokemon {
        record(
            r#"{
                "personalId": 1,
                "level": 50,
                "nature": {"name": "Jolly", "up": "speed", "down": "specialAttack"},
                "eVs": {"hp": 0, "attack": 252, "defense": 0, "specialAttack": 0, "specialDefense": 4, "speed": 252},
                "iVs": {"hp": 31, "attack": 31, "defense": 31, "specialAttack": 31, "specialDefense": 31, "speed": 31},
                "speciesId": 445,
                "item": {"id": 1, "name": "Choice Scarf"},
                "selectedMoves": [{"id": 89}, null]
            }"#,
        )
    }

    #[test]
    fn test_from_record_uses_dex_species() {
        let member = TeamMember::from_record(&jolly_chomp(), &dex());
        assert_eq!(member.name, "Garchomp");
        assert_eq!(member.species_id, Some(445));
        assert_eq!(member.base_stats, Some(StatBlock::new(108, 130, 95, 80, 85, 102)));
        assert_eq!(member.types.len(), 2);
        assert_eq!(member.types[0].name, "dragon");
        assert_eq!(member.item.as_deref(), Some("Choice Scarf"));
        assert_eq!(member.moves, vec![Some(89), None]);
    }

    #[test]
    fn test_derived_stats() {
        let member = TeamMember::from_record(&jolly_chomp(), &dex());
        assert_eq!(
            member.derived_stats(),
            StatBlock::new(183, 182, 115, 90, 106, 169)
        );
    }

    #[test]
    fn test_missing_species_gives_zero_stats() {
        let mut chomp = jolly_chomp();
        chomp.id = Some(9999);
        chomp.nickname = Some("Ghosty".to_string());

        let member = TeamMember::from_record(&chomp, &dex());
        assert_eq!(member.name, "Ghosty");
        assert!(member.base_stats.is_none());
        assert!(member.types.is_empty());
        assert_eq!(member.derived_stats(), StatBlock::zero());
    }

    #[test]
    fn test_set_ev_respects_caps() {
        let config = TeamConfig::default();
        let mut member = TeamMember::from_record(&jolly_chomp(), &dex());
        assert_eq!(member.remaining_evs(&config), 2);

        assert_eq!(member.set_ev(Stat::Hp, 100, &config), 2);
        assert_eq!(member.remaining_evs(&config), 0);

        assert_eq!(member.set_ev(Stat::Attack, 0, &config), 0);
        assert_eq!(member.set_ev(Stat::Hp, 400, &config), 252);
        assert_eq!(member.evs.total(), 508);
    }

    #[test]
    fn test_set_iv_and_level_clamp() {
        let config = TeamConfig::default();
        let mut member = TeamMember::from_record(&jolly_chomp(), &dex());

        assert_eq!(member.set_iv(Stat::Attack, 99, &config), 31);
        assert_eq!(member.set_iv(Stat::SpecialAttack, 0, &config), 0);
        assert_eq!(member.ivs.special_attack, 0);

        assert_eq!(member.set_level(0, &config), 1);
        assert_eq!(member.set_level(200, &config), 100);
        assert_eq!(member.level, 100);
    }

    #[test]
    fn test_nudge_nature() {
        let mut member = TeamMember::from_record(&jolly_chomp(), &dex());
        let table = natures();

        // Jolly (+Spe -SpA) raised on Attack becomes Adamant (+Atk -SpA)
        assert!(member.nudge_nature(Stat::Attack, Nudge::Raise, &table));
        assert_eq!(member.nature.name(), "Adamant");

        // Adamant lowered on Defense becomes Lonely
        assert!(member.nudge_nature(Stat::Defense, Nudge::Lower, &table));
        assert_eq!(member.nature.name(), "Lonely");

        // No nature raises Speed while lowering Defense in this table
        assert!(!member.nudge_nature(Stat::Speed, Nudge::Raise, &table));
        assert_eq!(member.nature.name(), "Lonely");
    }

    #[test]
    fn test_nudge_through_host_neutral_natures() {
        let natures = r#"[
            {"name": "Hardy", "up": "attack", "down": "attack"},
            {"name": "Bashful", "up": "specialAttack", "down": "specialAttack"},
            {"name": "Timid", "up": "speed", "down": "attack"},
            {"name": "Adamant", "up": "attack", "down": "specialAttack"},
            {"name": "Modest", "up": "specialAttack", "down": "attack"}
        ]"#;
        let dex = Dex::from_json("[]", natures, "[]").unwrap();

        let mut member = TeamMember::from_record(&jolly_chomp(), &dex);
        member.nature = dex.nature("Hardy").unwrap().clone();
        assert!(member.nudge_nature(Stat::Speed, Nudge::Raise, dex.natures()));
        assert_eq!(member.nature.name(), "Timid");

        member.nature = dex.nature("Adamant").unwrap().clone();
        assert!(member.nudge_nature(Stat::SpecialAttack, Nudge::Raise, dex.natures()));
        assert_eq!(member.nature.name(), "Bashful");
        assert!(member.nature.is_neutral());

        // Bashful keeps special attack as its listed boost
        assert!(member.nudge_nature(Stat::Attack, Nudge::Lower, dex.natures()));
        assert_eq!(member.nature.name(), "Modest");
    }

    #[test]
    fn test_from_flattened_record() {
        let gyarados = record(
            r#"{
                "personalId": 2,
                "id": 130,
                "name": "Gyarados",
                "typings": [
                    {"id": 2, "name": "water", "weaknesses": [{"id": 4, "name": "electric"}, {"id": 3, "name": "grass"}]},
                    {"id": 9, "name": "flying", "immunities": [{"id": 5, "name": "ground"}]}
                ],
                "baseStats": {"hp": 95, "attack": 125, "defense": 79, "specialAttack": 60, "specialDefense": 100, "speed": 81},
                "level": 50,
                "nature": {"name": "Adamant", "up": "attack", "down": "specialAttack"}
            }"#,
        );
        let member = TeamMember::from_record(&gyarados, &dex());

        assert_eq!(member.name, "Gyarados");
        assert_eq!(member.species_id, Some(130));
        assert_eq!(member.base_stats, Some(StatBlock::new(95, 125, 79, 60, 100, 81)));
        let names: Vec<_> = member.types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["water", "flying"]);

        let chart = TypeChart::standard();
        let electric = chart.get("electric").unwrap();
        let ground = chart.get("ground").unwrap();
        assert_eq!(member.matchup().effectiveness(electric).multiplier, 4.0);
        assert_eq!(member.matchup().effectiveness(ground).multiplier, 0.0);
        assert_ne!(member.derived_stats(), StatBlock::zero());
    }

    #[test]
    fn test_stat_lines() {
        let config = TeamConfig::default();
        let member = TeamMember::from_record(&jolly_chomp(), &dex());
        let lines = member.stat_lines(&config);

        assert_eq!(lines.len(), 6);
        let speed = &lines[5];
        assert_eq!(speed.abbreviation, "Spe");
        assert_eq!(speed.base, 102);
        assert_eq!(speed.ev, 252);
        assert_eq!(speed.derived, 169);
        assert_eq!(speed.modifier, NatureModifier::Boosted);
        assert!((speed.bar - 169.0 / 714.0).abs() < 1e-9);

        assert_eq!(lines[3].modifier, NatureModifier::Hindered);
    }

    #[test]
    fn test_matchup_uses_member_types() {
        let member = TeamMember::from_record(&jolly_chomp(), &dex());
        let chart = TypeChart::standard();
        let ice = chart.get("ice").unwrap();
        let electric = chart.get("electric").unwrap();

        assert_eq!(member.matchup().effectiveness(ice).multiplier, 4.0);
        assert_eq!(member.matchup().effectiveness(electric).multiplier, 0.0);
    }
}
