//! Roster weakness table

use serde::Serialize;
use teamcraft_calc::{aggregate, Effectiveness, MatchupTally, TypeChart};

use crate::roster::Roster;

/// How the whole roster fares against one attacking type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeaknessRow {
    pub attacking_type: String,
    /// One label per member, in roster order
    pub cells: Vec<Effectiveness>,
    pub tally: MatchupTally,
}

/// Weakness table: one row per chart type, one column per member
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeaknessReport {
    /// Personal ids of the columns
    pub member_ids: Vec<u32>,
    rows: Vec<WeaknessRow>,
}

impl WeaknessReport {
    pub fn build(roster: &Roster, chart: &TypeChart) -> Self {
        let members = roster.matchup_members();

        let rows = chart
            .iter()
            .map(|attacking| WeaknessRow {
                attacking_type: attacking.name.clone(),
                cells: members
                    .iter()
                    .map(|m| m.effectiveness(attacking).label)
                    .collect(),
                tally: aggregate(&members, attacking),
            })
            .collect();

        Self {
            member_ids: roster.members().iter().map(|m| m.personal_id).collect(),
            rows,
        }
    }

    pub fn rows(&self) -> &[WeaknessRow] {
        &self.rows
    }

    pub fn row(&self, attacking_type: &str) -> Option<&WeaknessRow> {
        self.rows.iter().find(|r| r.attacking_type == attacking_type)
    }

    /// Row with the highest `weak - resist - immune`, earliest on ties
    pub fn most_threatening(&self) -> Option<&WeaknessRow> {
        self.rows.iter().fold(None, |best: Option<&WeaknessRow>, row| match best {
            Some(b) if b.tally.net_weakness() >= row.tally.net_weakness() => Some(b),
            _ => Some(row),
        })
    }
}
