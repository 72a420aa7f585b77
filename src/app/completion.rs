use super::*;
use log::warn;

impl QuizApp {
    /// Efectos de completar un nivel. Se ejecuta una vez por cada entrada en
    /// `LevelComplete`, acierte lo que acierte el alumno:
    /// 1. primera vez: se marca el nivel y se suman sus puntos
    /// 2. se recalculan las insignias y se unen a las que ya había
    /// 3. se guarda el progreso antes de devolver el control
    pub(crate) fn complete_level(&mut self, idx: usize) {
        let (level_id, points) = {
            let level = self.level_at(idx);
            (level.id.clone(), level.points)
        };

        if self.progress.completed_level_ids.insert(level_id.clone()) {
            // El catálogo validado cabe en u32; solo un total guardado corrupto desborda
            self.progress.total_points = match self.progress.total_points.checked_add(points) {
                Some(total) => total,
                None => {
                    warn!(
                        "Point total overflow completing `{level_id}`, capping at {}",
                        u32::MAX
                    );
                    u32::MAX
                }
            };
            self.dirty = true;
            info!(
                "Level `{level_id}` completed for the first time: +{points} points ({} total)",
                self.progress.total_points
            );
        } else {
            info!("Level `{level_id}` completed again, no points awarded");
        }

        self.newly_earned = self
            .badge_rules
            .newly_earned(&self.progress.badges, self.progress.total_points);
        if !self.newly_earned.is_empty() {
            info!("New badges earned: {:?}", self.newly_earned);
            self.progress.badges.extend(self.newly_earned.iter().cloned());
            self.dirty = true;
        }

        if self.dirty {
            self.persist();
        }
    }

    /// Un nivel está desbloqueado si es el primero o si el anterior está completado.
    pub(crate) fn is_unlocked_at(&self, idx: usize) -> bool {
        if idx >= self.catalog.len() {
            return false;
        }
        match idx.checked_sub(1) {
            None => true,
            Some(prev) => self
                .catalog
                .get(prev)
                .is_some_and(|p| self.progress.completed_level_ids.contains(&p.id)),
        }
    }

    pub fn is_level_unlocked(&self, level_id: &str) -> bool {
        self.catalog
            .position(level_id)
            .map(|idx| self.is_unlocked_at(idx))
            .unwrap_or(false)
    }

    pub fn is_level_completed(&self, level_id: &str) -> bool {
        self.progress.completed_level_ids.contains(level_id)
    }

    /// Todos los niveles del catálogo están completados
    pub fn is_catalog_finished(&self) -> bool {
        self.catalog
            .levels()
            .iter()
            .all(|l| self.progress.completed_level_ids.contains(&l.id))
    }
}

#[cfg(test)]
mod tests {
    use crate::app::QuizApp;
    use crate::app::tests::{sample_app, three_level_catalog, two_level_catalog};
    use crate::badges::BadgeRules;
    use crate::store::{MemoryStore, ProgressStore};

    #[test]
    fn unlocking_follows_catalog_order() {
        let (mut app, _) = sample_app(three_level_catalog());
        assert!(app.is_level_unlocked("A"));
        assert!(!app.is_level_unlocked("B"));
        assert!(!app.is_level_unlocked("C"));
        assert!(!app.is_level_unlocked("missing"));

        app.select_level("A").unwrap();
        app.submit_answer("x").unwrap();
        assert!(!app.is_level_unlocked("B"));
        app.submit_answer("y").unwrap();
        assert!(app.is_level_unlocked("B"));
        assert!(!app.is_level_unlocked("C"));
    }

    #[test]
    fn points_are_awarded_once_per_level() {
        let (mut app, store) = sample_app(two_level_catalog());
        app.select_level("L1").unwrap();
        app.submit_answer("4").unwrap();
        app.retry_current_level().unwrap();
        app.submit_answer("4").unwrap();

        assert_eq!(app.progress().total_points, 20);
        assert_eq!(app.progress().completed_level_ids.len(), 1);
        // El reintento no cambió nada, así que no se volvió a escribir
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn completion_is_persisted_before_returning() {
        let (mut app, store) = sample_app(two_level_catalog());
        app.select_level("L1").unwrap();
        app.submit_answer("4").unwrap();

        let saved = store.load().expect("saved progress");
        assert_eq!(&saved, app.progress());
    }

    #[test]
    fn newly_earned_badges_are_reported_once() {
        let (mut app, _) = sample_app(two_level_catalog());
        app.select_level("L1").unwrap();
        app.submit_answer("4").unwrap();
        // 20 puntos: umbral de bronce alcanzado justo
        assert_eq!(app.newly_earned_badges().len(), 1);
        assert!(app.newly_earned_badges().contains("Bronze Explorer"));

        app.advance_to_next_level().unwrap();
        assert!(app.newly_earned_badges().is_empty());
        app.submit_answer("Rome").unwrap();
        assert_eq!(app.newly_earned_badges().len(), 1);
        assert!(app.newly_earned_badges().contains("Silver Explorer"));

        app.retry_current_level().unwrap();
        app.submit_answer("rome").unwrap();
        assert!(app.newly_earned_badges().is_empty());
        assert_eq!(app.progress().badges.len(), 2);
    }

    #[test]
    fn corrupt_point_total_is_capped_instead_of_wrapping() {
        let store = MemoryStore::with_content(format!(
            r#"{{"completedLevelIds":[],"totalPoints":{},"badges":[]}}"#,
            u32::MAX - 5
        ));
        let mut app = QuizApp::new(two_level_catalog(), BadgeRules::default(), Box::new(store));
        app.select_level("L1").unwrap();
        app.submit_answer("4").unwrap();
        assert_eq!(app.progress().total_points, u32::MAX);
        assert!(app.is_level_completed("L1"));
    }

    #[test]
    fn catalog_finished_after_last_level() {
        let (mut app, _) = sample_app(two_level_catalog());
        assert!(!app.is_catalog_finished());
        app.select_level("L1").unwrap();
        app.submit_answer("4").unwrap();
        app.advance_to_next_level().unwrap();
        app.submit_answer("nope").unwrap();
        assert!(app.is_catalog_finished());
    }
}
