//! Stats and stat blocks

/// One of the six permanent stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stat {
    /// All six stats in display order
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];

    /// Parse from a record key (`hp`, `attack`, `specialAttack`, ...)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "hp" => Some(Stat::Hp),
            "attack" => Some(Stat::Attack),
            "defense" => Some(Stat::Defense),
            "specialAttack" => Some(Stat::SpecialAttack),
            "specialDefense" => Some(Stat::SpecialDefense),
            "speed" => Some(Stat::Speed),
            _ => None,
        }
    }

    /// Record key for this stat
    pub fn as_key(&self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::SpecialAttack => "specialAttack",
            Stat::SpecialDefense => "specialDefense",
            Stat::Speed => "speed",
        }
    }

    /// Short label used in stat tables
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Atk",
            Stat::Defense => "Def",
            Stat::SpecialAttack => "SpA",
            Stat::SpecialDefense => "SpD",
            Stat::Speed => "Spe",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Six stat values.
///
/// Used for base stats, effort values (0-252 each, 510 total), individual
/// values (0-31 each) and derived stats alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StatBlock {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

impl StatBlock {
    /// Create a block from values in [`Stat::ALL`] order
    pub const fn new(
        hp: u16,
        attack: u16,
        defense: u16,
        special_attack: u16,
        special_defense: u16,
        speed: u16,
    ) -> Self {
        Self {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }

    /// All six stats set to the same value
    pub const fn uniform(value: u16) -> Self {
        Self::new(value, value, value, value, value, value)
    }

    /// All zeroes
    pub const fn zero() -> Self {
        Self::uniform(0)
    }

    /// Get the value for a stat
    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    /// Set the value for a stat
    pub fn set(&mut self, stat: Stat, value: u16) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Attack => self.attack = value,
            Stat::Defense => self.defense = value,
            Stat::SpecialAttack => self.special_attack = value,
            Stat::SpecialDefense => self.special_defense = value,
            Stat::Speed => self.speed = value,
        }
    }

    /// Sum of all six values
    pub fn total(&self) -> u32 {
        self.iter().map(|(_, value)| u32::from(value)).sum()
    }

    /// Iterate `(stat, value)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Stat, u16)> + '_ {
        Stat::ALL.iter().map(move |stat| (*stat, self.get(*stat)))
    }

    /// Check if every value is zero
    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, value)| value == 0)
    }

    /// Points left before `total_cap` is reached (0 if already over)
    pub fn remaining(&self, total_cap: u32) -> u32 {
        total_cap.saturating_sub(self.total())
    }

    /// Store as much of `requested` as the caps allow, returns the stored value.
    ///
    /// The stored value is `min(requested, per_stat_cap, total_cap - others)`,
    /// where `others` is the sum of the five other stats.
    pub fn allocate(&mut self, stat: Stat, requested: u16, per_stat_cap: u16, total_cap: u32) -> u16 {
        let others = self.total() - u32::from(self.get(stat));
        let room = total_cap.saturating_sub(others);
        let value = requested
            .min(per_stat_cap)
            .min(u16::try_from(room).unwrap_or(u16::MAX));
        self.set(stat, value);
        value
    }
}
