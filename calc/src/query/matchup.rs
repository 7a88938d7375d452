//! Type matchup helpers for decision making

use crate::engine::{effectiveness, Effectiveness};
use crate::types::{DamageType, TypeChart};

/// Check if defender is weak (2x or 4x) to any of the attacking types
pub fn is_weak_to_any(defender_types: &[DamageType], attacking_types: &[DamageType]) -> bool {
    attacking_types
        .iter()
        .any(|t| effectiveness(defender_types, t).label.is_weak())
}

/// Check if defender resists (1/2 or 1/4) all of the attacking types
pub fn resists_all(defender_types: &[DamageType], attacking_types: &[DamageType]) -> bool {
    if attacking_types.is_empty() {
        return false;
    }
    attacking_types
        .iter()
        .all(|t| effectiveness(defender_types, t).label.is_resisted())
}

/// Check if defender is immune to a type
pub fn is_immune_to(defender_types: &[DamageType], attacking_type: &DamageType) -> bool {
    effectiveness(defender_types, attacking_type).label == Effectiveness::Immune
}

/// Get all chart types that are super effective against the defender
pub fn weaknesses<'a>(defender_types: &[DamageType], chart: &'a TypeChart) -> Vec<&'a DamageType> {
    chart
        .iter()
        .filter(|t| effectiveness(defender_types, t).label.is_weak())
        .collect()
}

/// Get all chart types that the defender resists
pub fn resistances<'a>(defender_types: &[DamageType], chart: &'a TypeChart) -> Vec<&'a DamageType> {
    chart
        .iter()
        .filter(|t| effectiveness(defender_types, t).label.is_resisted())
        .collect()
}

/// Get all chart types that the defender is immune to
pub fn immunities<'a>(defender_types: &[DamageType], chart: &'a TypeChart) -> Vec<&'a DamageType> {
    chart
        .iter()
        .filter(|t| is_immune_to(defender_types, t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(chart: &TypeChart, names: &[&str]) -> Vec<DamageType> {
        names
            .iter()
            .map(|name| chart.get(name).unwrap().clone())
            .collect()
    }

    fn names(found: Vec<&DamageType>) -> Vec<&str> {
        found.into_iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_is_weak_to_any() {
        let chart = TypeChart::standard();
        let water = types(&chart, &["water"]);
        let attacking = types(&chart, &["electric", "grass"]);
        assert!(is_weak_to_any(&water, &attacking));

        let neutral = types(&chart, &["fire", "ice"]);
        assert!(!is_weak_to_any(&water, &neutral));
    }

    #[test]
    fn test_resists_all() {
        // Steel resists Normal, Flying, Rock, Bug, Steel, Grass, Psychic, Ice, Dragon, Fairy
        let chart = TypeChart::standard();
        let steel = types(&chart, &["steel"]);
        let resisted = types(&chart, &["normal", "ice", "fairy"]);
        assert!(resists_all(&steel, &resisted));

        let not_resisted = types(&chart, &["fire", "ice"]);
        assert!(!resists_all(&steel, &not_resisted));

        assert!(!resists_all(&steel, &[]));
    }

    #[test]
    fn test_is_immune_to() {
        let chart = TypeChart::standard();
        let ghost = types(&chart, &["ghost"]);
        assert!(is_immune_to(&ghost, chart.get("normal").unwrap()));
        assert!(is_immune_to(&ghost, chart.get("fighting").unwrap()));
        assert!(!is_immune_to(&ghost, chart.get("dark").unwrap()));

        let ground = types(&chart, &["ground"]);
        assert!(is_immune_to(&ground, chart.get("electric").unwrap()));
    }

    #[test]
    fn test_weaknesses() {
        // Steel type is weak to Fire, Fighting, Ground
        let chart = TypeChart::standard();
        let steel = types(&chart, &["steel"]);
        assert_eq!(names(weaknesses(&steel, &chart)), vec!["fire", "fighting", "ground"]);
    }

    #[test]
    fn test_weaknesses_dual_type() {
        // Water/Ground (Swampert) is only weak to Grass (4x)
        let chart = TypeChart::standard();
        let swampert = types(&chart, &["water", "ground"]);
        assert_eq!(names(weaknesses(&swampert, &chart)), vec!["grass"]);
    }

    #[test]
    fn test_resistances() {
        let chart = TypeChart::standard();
        let steel = types(&chart, &["steel"]);
        let resists = names(resistances(&steel, &chart));
        assert!(resists.contains(&"normal"));
        assert!(resists.contains(&"ice"));
        assert!(resists.contains(&"fairy"));
        // Poison is an immunity, not a resistance
        assert!(!resists.contains(&"poison"));
        assert!(!resists.contains(&"fire"));
    }

    #[test]
    fn test_immunities() {
        // Ghost is immune to Normal and Fighting
        let chart = TypeChart::standard();
        let ghost = types(&chart, &["ghost"]);
        assert_eq!(names(immunities(&ghost, &chart)), vec!["normal", "fighting"]);
    }

    #[test]
    fn test_custom_chart() {
        let chart = TypeChart::from_types(vec![
            DamageType::new("light").with_weaknesses(["shadow"]),
            DamageType::new("shadow").with_immunities(["light"]),
        ]);
        let shadow = types(&chart, &["shadow"]);
        assert_eq!(names(immunities(&shadow, &chart)), vec!["light"]);
        assert!(weaknesses(&shadow, &chart).is_empty());
    }
}
