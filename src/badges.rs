//! Reglas de insignias
//!
//! Cada umbral es independiente y acumulativo: se tienen todas las
//! insignias cuyo umbral es menor o igual que los puntos.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Tabla por defecto (umbral, insignia)
pub static DEFAULT_BADGE_RULES: &[(u32, &str)] = &[
    (20, "Bronze Explorer"),
    (40, "Silver Explorer"),
    (60, "Gold Explorer"),
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BadgeRule {
    pub threshold: u32,
    pub badge: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeRules {
    rules: Vec<BadgeRule>, // ordenadas por umbral
}

impl BadgeRules {
    pub fn new(mut rules: Vec<BadgeRule>) -> Self {
        rules.sort_by_key(|r| r.threshold);
        Self { rules }
    }

    pub fn rules(&self) -> &[BadgeRule] {
        &self.rules
    }

    /// Conjunto completo de insignias que corresponde a `points`.
    pub fn badges_for(&self, points: u32) -> BTreeSet<String> {
        self.rules
            .iter()
            .filter(|r| points >= r.threshold)
            .map(|r| r.badge.clone())
            .collect()
    }

    /// Insignias de `badges_for(points)` que todavía no están en `held`.
    pub fn newly_earned(&self, held: &BTreeSet<String>, points: u32) -> BTreeSet<String> {
        self.badges_for(points)
            .into_iter()
            .filter(|b| !held.contains(b))
            .collect()
    }

    /// Próxima regla aún no alcanzada (None si ya se tienen todas)
    pub fn next_rule(&self, points: u32) -> Option<&BadgeRule> {
        self.rules.iter().find(|r| points < r.threshold)
    }
}

impl Default for BadgeRules {
    fn default() -> Self {
        Self::new(
            DEFAULT_BADGE_RULES
                .iter()
                .map(|&(threshold, badge)| BadgeRule {
                    threshold,
                    badge: badge.to_string(),
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_cumulative() {
        let rules = BadgeRules::default();
        assert!(rules.badges_for(0).is_empty());
        assert!(rules.badges_for(19).is_empty());
        assert_eq!(rules.badges_for(20).len(), 1);
        assert!(rules.badges_for(50).contains("Bronze Explorer"));
        assert!(rules.badges_for(50).contains("Silver Explorer"));
        assert_eq!(rules.badges_for(60).len(), 3);
        assert_eq!(rules.badges_for(1_000).len(), 3);
    }

    #[test]
    fn newly_earned_is_a_set_difference() {
        let rules = BadgeRules::default();
        let held = rules.badges_for(20);
        let new = rules.newly_earned(&held, 45);
        assert_eq!(new.len(), 1);
        assert!(new.contains("Silver Explorer"));
        assert!(rules.newly_earned(&rules.badges_for(45), 45).is_empty());
    }

    #[test]
    fn rules_are_sorted_regardless_of_input_order() {
        let rules = BadgeRules::new(vec![
            BadgeRule { threshold: 100, badge: "Master Digger".into() },
            BadgeRule { threshold: 5, badge: "First Find".into() },
        ]);
        assert_eq!(rules.rules()[0].badge, "First Find");
        assert_eq!(rules.next_rule(10).map(|r| r.threshold), Some(100));
        assert!(rules.next_rule(100).is_none());
    }
}
