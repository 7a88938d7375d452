//! Type effectiveness against defenders and whole rosters

use crate::types::DamageType;

/// Effectiveness label for a final multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Effectiveness {
    Immune,
    Quarter,
    Half,
    Neutral,
    Double,
    Quadruple,
}

impl Effectiveness {
    /// Label an exact multiplier.
    ///
    /// Only 0, 0.25, 0.5, 2 and 4 get a label; every other value is neutral.
    pub fn from_multiplier(multiplier: f32) -> Self {
        if multiplier == 0.0 {
            Effectiveness::Immune
        } else if multiplier == 4.0 {
            Effectiveness::Quadruple
        } else if multiplier == 2.0 {
            Effectiveness::Double
        } else if multiplier == 0.5 {
            Effectiveness::Half
        } else if multiplier == 0.25 {
            Effectiveness::Quarter
        } else {
            Effectiveness::Neutral
        }
    }

    /// Multiplier this label stands for
    pub fn multiplier(&self) -> f32 {
        match self {
            Effectiveness::Immune => 0.0,
            Effectiveness::Quarter => 0.25,
            Effectiveness::Half => 0.5,
            Effectiveness::Neutral => 1.0,
            Effectiveness::Double => 2.0,
            Effectiveness::Quadruple => 4.0,
        }
    }

    /// Table cell text (empty for neutral)
    pub fn symbol(&self) -> &'static str {
        match self {
            Effectiveness::Immune => "immune",
            Effectiveness::Quarter => "¼",
            Effectiveness::Half => "½",
            Effectiveness::Neutral => "",
            Effectiveness::Double => "2×",
            Effectiveness::Quadruple => "4×",
        }
    }

    /// Contribution to a roster's weak count
    pub fn weakness_weight(&self) -> u32 {
        match self {
            Effectiveness::Quadruple => 2,
            Effectiveness::Double => 1,
            _ => 0,
        }
    }

    /// Contribution to a roster's resist count
    pub fn resistance_weight(&self) -> u32 {
        match self {
            Effectiveness::Quarter => 2,
            Effectiveness::Half => 1,
            _ => 0,
        }
    }

    pub fn is_weak(&self) -> bool {
        self.weakness_weight() > 0
    }

    pub fn is_resisted(&self) -> bool {
        self.resistance_weight() > 0
    }
}

impl std::fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Label plus the multiplier it was derived from
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EffectivenessResult {
    pub label: Effectiveness,
    pub multiplier: f32,
}

/// Compute how effective `attacking` is against a defender with 1-2 types.
///
/// Each defending type contributes at most one step, checked as immune,
/// then weak (x2), then resist (x0.5). Immunity zeroes the running
/// multiplier, and nothing evaluated after it can lift it again.
pub fn effectiveness(defender_types: &[DamageType], attacking: &DamageType) -> EffectivenessResult {
    let mut multiplier = 1.0_f32;

    for defending in defender_types {
        if defending.is_immune_to(attacking) {
            multiplier = 0.0;
        } else if defending.is_weak_to(attacking) {
            multiplier *= 2.0;
        } else if defending.resists(attacking) {
            multiplier *= 0.5;
        }
    }

    EffectivenessResult {
        label: Effectiveness::from_multiplier(multiplier),
        multiplier,
    }
}

/// A roster member as seen by the effectiveness engine
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterMember {
    /// 1-2 types, in the member's own order
    pub type_assignments: Vec<DamageType>,
}

impl RosterMember {
    pub fn new(type_assignments: Vec<DamageType>) -> Self {
        Self { type_assignments }
    }

    pub fn mono(primary: DamageType) -> Self {
        Self::new(vec![primary])
    }

    pub fn dual(primary: DamageType, secondary: DamageType) -> Self {
        Self::new(vec![primary, secondary])
    }

    /// Effectiveness of `attacking` against this member
    pub fn effectiveness(&self, attacking: &DamageType) -> EffectivenessResult {
        effectiveness(&self.type_assignments, attacking)
    }
}

/// Weighted weak/resist/immune counts for one attacking type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchupTally {
    pub weak: u32,
    pub resist: u32,
    pub immune: u32,
}

impl MatchupTally {
    /// Count one member's label
    pub fn add(&mut self, label: Effectiveness) {
        self.weak += label.weakness_weight();
        self.resist += label.resistance_weight();
        if label == Effectiveness::Immune {
            self.immune += 1;
        }
    }

    /// Weak count minus everything that covers it
    pub fn net_weakness(&self) -> i64 {
        i64::from(self.weak) - i64::from(self.resist) - i64::from(self.immune)
    }
}

impl FromIterator<Effectiveness> for MatchupTally {
    fn from_iter<I: IntoIterator<Item = Effectiveness>>(iter: I) -> Self {
        let mut tally = MatchupTally::default();
        for label in iter {
            tally.add(label);
        }
        tally
    }
}

/// Tally how a roster fares against one attacking type.
///
/// 4x weaknesses and 1/4 resistances count twice.
pub fn aggregate(roster: &[RosterMember], attacking: &DamageType) -> MatchupTally {
    roster
        .iter()
        .map(|member| member.effectiveness(attacking).label)
        .collect()
}
