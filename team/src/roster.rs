//! Rosters of team members

use teamcraft_calc::{aggregate, MatchupTally, RosterMember, StatBlock, TypeChart};
use teamcraft_dex::Team;

use crate::config::TeamConfig;
use crate::dex::Dex;
use crate::member::TeamMember;
use crate::TeamError;

/// A named team of at most `max_members` members
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    pub id: u32,
    pub name: String,
    members: Vec<TeamMember>,
    max_members: usize,
}

impl Roster {
    pub fn new(id: u32, name: impl Into<String>, config: &TeamConfig) -> Self {
        Self {
            id,
            name: name.into(),
            members: Vec::new(),
            max_members: config.max_members,
        }
    }

    /// Build from a host team record
    pub fn from_record(team: &Team, dex: &Dex, config: &TeamConfig) -> Result<Self, TeamError> {
        let mut roster = Self::new(team.id, team.name.as_str(), config);
        for record in &team.pokemons {
            roster.add_member(TeamMember::from_record(record, dex))?;
        }
        Ok(roster)
    }

    pub fn add_member(&mut self, member: TeamMember) -> Result<(), TeamError> {
        if self.members.len() >= self.max_members {
            return Err(TeamError::RosterFull {
                max: self.max_members,
            });
        }
        self.members.push(member);
        Ok(())
    }

    pub fn remove_member(&mut self, personal_id: u32) -> Result<TeamMember, TeamError> {
        let index = self
            .members
            .iter()
            .position(|m| m.personal_id == personal_id)
            .ok_or(TeamError::UnknownMember(personal_id))?;
        Ok(self.members.remove(index))
    }

    pub fn member(&self, personal_id: u32) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.personal_id == personal_id)
    }

    pub fn member_mut(&mut self, personal_id: u32) -> Option<&mut TeamMember> {
        self.members.iter_mut().find(|m| m.personal_id == personal_id)
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.max_members
    }

    /// Derived stats for every member, keyed by personal id
    pub fn derived_stats(&self) -> Vec<(u32, StatBlock)> {
        self.members
            .iter()
            .map(|m| (m.personal_id, m.derived_stats()))
            .collect()
    }

    /// Effectiveness engine input for every member, in roster order
    pub fn matchup_members(&self) -> Vec<RosterMember> {
        self.members.iter().map(TeamMember::matchup).collect()
    }

    /// Weighted counts against one attacking type from the chart
    pub fn tally_against(&self, chart: &TypeChart, attacking: &str) -> Result<MatchupTally, TeamError> {
        let attacking = chart
            .get(attacking)
            .ok_or_else(|| TeamError::UnknownTyping(attacking.to_string()))?;
        Ok(aggregate(&self.matchup_members(), attacking))
    }
}
