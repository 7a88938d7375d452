//! Damage types and their directed weak/resist/immune relations

use std::collections::BTreeSet;

/// A damage type and the attacking types it is weak to, resists and is
/// immune to.
///
/// Relations are facts about this type as a defender; they say nothing about
/// how the other type fares when attacked by this one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageType {
    pub name: String,
    pub weak_to: BTreeSet<String>,
    pub resists: BTreeSet<String>,
    pub immune_to: BTreeSet<String>,
}

impl DamageType {
    /// Create a type with no relations
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add attacking types this type is weak to
    pub fn with_weaknesses<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.weak_to.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add attacking types this type resists
    pub fn with_resistances<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resists.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add attacking types this type is immune to
    pub fn with_immunities<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.immune_to.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn is_weak_to(&self, attacking: &DamageType) -> bool {
        self.weak_to.contains(&attacking.name)
    }

    pub fn resists(&self, attacking: &DamageType) -> bool {
        self.resists.contains(&attacking.name)
    }

    pub fn is_immune_to(&self, attacking: &DamageType) -> bool {
        self.immune_to.contains(&attacking.name)
    }
}

impl std::fmt::Display for DamageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The universe of damage types, in display order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeChart {
    types: Vec<DamageType>,
}

impl TypeChart {
    pub fn from_types(types: Vec<DamageType>) -> Self {
        Self { types }
    }

    /// The 18 modern types with relations taken from [`TYPE_CHART`]
    pub fn standard() -> Self {
        let types = StandardType::ALL
            .iter()
            .map(|defender| {
                let mut damage_type = DamageType::new(defender.id());
                for attacker in StandardType::ALL {
                    let multiplier = attacker.effectiveness(*defender);
                    let name = attacker.id().to_string();
                    if multiplier == 0.0 {
                        damage_type.immune_to.insert(name);
                    } else if multiplier == 2.0 {
                        damage_type.weak_to.insert(name);
                    } else if multiplier == 0.5 {
                        damage_type.resists.insert(name);
                    }
                }
                damage_type
            })
            .collect();
        Self { types }
    }

    /// Look up a type by name
    pub fn get(&self, name: &str) -> Option<&DamageType> {
        self.types.iter().find(|t| t.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DamageType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn as_slice(&self) -> &[DamageType] {
        &self.types
    }
}

impl<'a> IntoIterator for &'a TypeChart {
    type Item = &'a DamageType;
    type IntoIter = std::slice::Iter<'a, DamageType>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}

/// Pokemon types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StandardType {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl StandardType {
    /// All 18 types in chart order
    pub const ALL: [StandardType; 18] = [
        StandardType::Normal,
        StandardType::Fire,
        StandardType::Water,
        StandardType::Electric,
        StandardType::Grass,
        StandardType::Ice,
        StandardType::Fighting,
        StandardType::Poison,
        StandardType::Ground,
        StandardType::Flying,
        StandardType::Psychic,
        StandardType::Bug,
        StandardType::Rock,
        StandardType::Ghost,
        StandardType::Dragon,
        StandardType::Dark,
        StandardType::Steel,
        StandardType::Fairy,
    ];

    /// Raw chart multiplier against a single defending type
    pub fn effectiveness(&self, defender: StandardType) -> f32 {
        TYPE_CHART[*self as usize][defender as usize]
    }

    /// Parse a type name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        StandardType::ALL
            .iter()
            .copied()
            .find(|t| t.id().eq_ignore_ascii_case(s))
    }

    /// Lowercase name used in typing records
    pub fn id(&self) -> &'static str {
        match self {
            StandardType::Normal => "normal",
            StandardType::Fire => "fire",
            StandardType::Water => "water",
            StandardType::Electric => "electric",
            StandardType::Grass => "grass",
            StandardType::Ice => "ice",
            StandardType::Fighting => "fighting",
            StandardType::Poison => "poison",
            StandardType::Ground => "ground",
            StandardType::Flying => "flying",
            StandardType::Psychic => "psychic",
            StandardType::Bug => "bug",
            StandardType::Rock => "rock",
            StandardType::Ghost => "ghost",
            StandardType::Dragon => "dragon",
            StandardType::Dark => "dark",
            StandardType::Steel => "steel",
            StandardType::Fairy => "fairy",
        }
    }
}

/// 18x18 type effectiveness chart
/// Row = attacking type, Column = defending type
/// Values: 0.0 = immune, 0.5 = not very effective, 1.0 = neutral, 2.0 = super effective
///
/// Order: Normal, Fire, Water, Electric, Grass, Ice, Fighting, Poison, Ground,
///        Flying, Psychic, Bug, Rock, Ghost, Dragon, Dark, Steel, Fairy
#[rustfmt::skip]
pub static TYPE_CHART: [[f32; 18]; 18] = [
    // Normal attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0, 1.0, 1.0, 0.5, 1.0],
    // Fire attacking
    [1.0, 0.5, 0.5, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 2.0, 1.0],
    // Water attacking
    [1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0],
    // Electric attacking
    [1.0, 1.0, 2.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0],
    // Grass attacking
    [1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 1.0, 0.5, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 0.5, 1.0],
    // Ice attacking
    [1.0, 0.5, 0.5, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0],
    // Fighting attacking
    [2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5, 0.5, 0.5, 2.0, 0.0, 1.0, 2.0, 2.0, 0.5],
    // Poison attacking
    [1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 0.0, 2.0],
    // Ground attacking
    [1.0, 2.0, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.0, 1.0, 0.5, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0],
    // Flying attacking
    [1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 0.5, 1.0],
    // Psychic attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.0, 0.5, 1.0],
    // Bug attacking
    [1.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.5, 0.5, 1.0, 0.5, 2.0, 1.0, 1.0, 0.5, 1.0, 2.0, 0.5, 0.5],
    // Rock attacking
    [1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0],
    // Ghost attacking
    [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0],
    // Dragon attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 0.0],
    // Dark attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5],
    // Steel attacking
    [1.0, 0.5, 0.5, 0.5, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 0.5, 2.0],
    // Fairy attacking
    [1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 0.5, 1.0],
];
