//! Natures and their stat modifiers

use thiserror::Error;

use super::stats::Stat;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NatureError {
    #[error("Nature {name} raises and lowers the same stat ({stat})")]
    SameStat { name: String, stat: Stat },
}

/// How a nature affects a single stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NatureModifier {
    Boosted,
    Hindered,
    Neutral,
}

impl NatureModifier {
    /// Multiplier as displayed (1.1, 0.9, 1.0)
    pub fn multiplier(&self) -> f64 {
        match self {
            NatureModifier::Boosted => 1.1,
            NatureModifier::Hindered => 0.9,
            NatureModifier::Neutral => 1.0,
        }
    }

    /// Apply the modifier to a stat value, flooring the result.
    ///
    /// Works in tenths so the floor is exact.
    pub fn apply(&self, value: u32) -> u32 {
        match self {
            NatureModifier::Boosted => value * 11 / 10,
            NatureModifier::Hindered => value * 9 / 10,
            NatureModifier::Neutral => value,
        }
    }
}

/// A nature raises at most one stat and lowers at most one other stat.
///
/// Neutral natures may still name a stat they "raise and lower" (Hardy is
/// attack/attack). That stat has no effect on any value but keeps its place
/// in the nature table, so nudging can move into and out of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Nature {
    name: String,
    up: Option<Stat>,
    down: Option<Stat>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    neutral_on: Option<Stat>,
}

impl Nature {
    /// Create a nature, rejecting one that raises and lowers the same stat
    pub fn new(
        name: impl Into<String>,
        up: Option<Stat>,
        down: Option<Stat>,
    ) -> Result<Self, NatureError> {
        let name = name.into();
        if let (Some(up), Some(down)) = (up, down)
            && up == down
        {
            return Err(NatureError::SameStat { name, stat: up });
        }
        Ok(Self {
            name,
            up,
            down,
            neutral_on: None,
        })
    }

    /// Create a nature with no effect
    pub fn neutral(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            up: None,
            down: None,
            neutral_on: None,
        }
    }

    /// Create a nature, treating `up == down` as neutral (Hardy, Docile, ...).
    ///
    /// The shared stat is kept as [`Nature::neutral_on`].
    pub fn normalized(name: impl Into<String>, up: Option<Stat>, down: Option<Stat>) -> Self {
        match (up, down) {
            (Some(up), Some(down)) if up == down => Self {
                name: name.into(),
                up: None,
                down: None,
                neutral_on: Some(up),
            },
            _ => Self {
                name: name.into(),
                up,
                down,
                neutral_on: None,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stat raised by this nature
    pub fn up(&self) -> Option<Stat> {
        self.up
    }

    /// Stat lowered by this nature
    pub fn down(&self) -> Option<Stat> {
        self.down
    }

    /// Stat a neutral nature names on both sides, if any
    pub fn neutral_on(&self) -> Option<Stat> {
        self.neutral_on
    }

    pub fn is_neutral(&self) -> bool {
        self.up.is_none() && self.down.is_none()
    }

    /// Raised and lowered stat as listed in a nature table.
    ///
    /// Same as `(up, down)` except for neutral natures that name a stat,
    /// which list it on both sides.
    pub fn table_pair(&self) -> (Option<Stat>, Option<Stat>) {
        match self.neutral_on {
            Some(stat) => (Some(stat), Some(stat)),
            None => (self.up, self.down),
        }
    }

    /// Modifier this nature applies to a stat
    pub fn modifier(&self, stat: Stat) -> NatureModifier {
        if self.up == Some(stat) {
            NatureModifier::Boosted
        } else if self.down == Some(stat) {
            NatureModifier::Hindered
        } else {
            NatureModifier::Neutral
        }
    }

    /// Multiplier this nature applies to a stat (1.1, 0.9 or 1.0)
    pub fn multiplier(&self, stat: Stat) -> f64 {
        self.modifier(stat).multiplier()
    }
}

impl Default for Nature {
    fn default() -> Self {
        Self::neutral("Serious")
    }
}

impl std::fmt::Display for Nature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Direction of a nature nudge on a single stat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nudge {
    /// Make `stat` the raised stat, keep the lowered one
    Raise,
    /// Make `stat` the lowered stat, keep the raised one
    Lower,
}

/// Find the nature listed with the given raised and lowered stats.
///
/// `up == down` finds the neutral nature naming that stat.
pub fn find_nature<'a>(
    natures: &'a [Nature],
    up: Option<Stat>,
    down: Option<Stat>,
) -> Option<&'a Nature> {
    natures.iter().find(|n| n.table_pair() == (up, down))
}

/// Find the nature that moves the boost (or the drop) onto `stat` while
/// keeping the other side of `current`.
///
/// Returns `None` when the table has no such nature; callers keep `current`.
pub fn nudge_nature<'a>(
    natures: &'a [Nature],
    current: &Nature,
    stat: Stat,
    nudge: Nudge,
) -> Option<&'a Nature> {
    let (up, down) = current.table_pair();
    match nudge {
        Nudge::Raise => find_nature(natures, Some(stat), down),
        Nudge::Lower => find_nature(natures, up, Some(stat)),
    }
}
