//! Team builder limits

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Limits applied when editing a team.
///
/// Any subset of keys may be given in JSON; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamConfig {
    pub max_members: usize,
    pub max_ev_per_stat: u16,
    pub max_ev_total: u32,
    pub max_iv: u16,
    pub min_level: u8,
    pub max_level: u8,
    /// Derived stat shown as a full bar
    pub stat_bar_scale: u16,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            max_members: 6,
            max_ev_per_stat: 252,
            max_ev_total: 510,
            max_iv: 31,
            min_level: 1,
            max_level: 100,
            stat_bar_scale: 714,
        }
    }
}

impl TeamConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse team config")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read team config {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid team config {}", path.display()))
    }

    /// Clamp a level into the configured range
    pub fn clamp_level(&self, level: u8) -> u8 {
        level.clamp(self.min_level, self.max_level)
    }

    /// Clamp an individual value into `0..=max_iv`
    pub fn clamp_iv(&self, value: u16) -> u16 {
        value.min(self.max_iv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TeamConfig::default();
        assert_eq!(config.max_members, 6);
        assert_eq!(config.max_ev_per_stat, 252);
        assert_eq!(config.max_ev_total, 510);
        assert_eq!(config.max_iv, 31);
        assert_eq!(config.stat_bar_scale, 714);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = TeamConfig::from_json(r#"{"max_members": 3, "max_level": 50}"#).unwrap();
        assert_eq!(config.max_members, 3);
        assert_eq!(config.max_level, 50);
        assert_eq!(config.max_ev_total, 510);
        assert_eq!(config.min_level, 1);
    }

    #[test]
    fn test_invalid_json() {
        assert!(TeamConfig::from_json(r#"{"max_members": "six"}"#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = TeamConfig::load("/nonexistent/teamcraft.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read team config"));
    }

    #[test]
    fn test_clamps() {
        let config = TeamConfig::default();
        assert_eq!(config.clamp_level(0), 1);
        assert_eq!(config.clamp_level(150), 100);
        assert_eq!(config.clamp_level(42), 42);
        assert_eq!(config.clamp_iv(40), 31);
        assert_eq!(config.clamp_iv(12), 12);
    }
}
