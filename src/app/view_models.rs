use super::*;

impl QuizApp {
    pub fn level_infos(&self) -> Vec<LevelInfo> {
        self.catalog
            .levels()
            .iter()
            .enumerate()
            .map(|(li, lvl)| LevelInfo {
                id: lvl.id.clone(),
                title: lvl.title.clone(),
                points: lvl.points,
                unlocked: self.is_unlocked_at(li),
                completed: self.is_level_completed(&lvl.id),
            })
            .collect()
    }

    /// Todas las reglas, marcando las conseguidas. Incluye insignias que
    /// se tienen pero ya no figuran en la tabla (nunca se retiran).
    pub fn badge_infos(&self) -> Vec<BadgeInfo> {
        let mut infos: Vec<BadgeInfo> = self
            .badge_rules
            .rules()
            .iter()
            .map(|r| BadgeInfo {
                name: r.badge.clone(),
                threshold: r.threshold,
                earned: self.progress.badges.contains(&r.badge),
            })
            .collect();

        for held in &self.progress.badges {
            if !infos.iter().any(|i| &i.name == held) {
                infos.push(BadgeInfo {
                    name: held.clone(),
                    threshold: 0,
                    earned: true,
                });
            }
        }
        infos
    }
}
