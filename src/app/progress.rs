use super::*;
use log::{debug, warn};

impl QuizApp {
    // Si falla, el progreso sigue en memoria (es la fuente de verdad de la
    // sesión) y se reintenta en el siguiente cambio o con `flush`.
    pub(crate) fn persist(&mut self) {
        match self.save_merged() {
            Ok(()) => {
                self.dirty = false;
                self.last_store_error = None;
            }
            Err(e) => {
                warn!("Could not save progress, will retry on next change: {e}");
                self.last_store_error = Some(e);
            }
        }
    }

    /// Reintenta un guardado pendiente.
    pub fn flush(&mut self) -> Result<(), QuizError> {
        if !self.dirty {
            return Ok(());
        }
        self.save_merged()?;
        self.dirty = false;
        self.last_store_error = None;
        Ok(())
    }

    // Otra sesión puede haber guardado en el mismo sitio: se une con lo
    // guardado antes de escribir, y lo escrito pasa a ser el progreso actual.
    fn save_merged(&mut self) -> Result<(), StoreError> {
        let catalog = &self.catalog;
        let badge_rules = &self.badge_rules;
        let current = &self.progress;

        let merged = self.store.update(&mut |stored| {
            let mut next = current.clone();
            if let Some(stored) = stored {
                next.merge(stored, |id| catalog.points_of(id));
            }
            next.badges.extend(badge_rules.badges_for(next.total_points));
            next
        })?;

        if merged != self.progress {
            debug!(
                "Merged progress saved by another session: {} levels, {} points",
                merged.completed_level_ids.len(),
                merged.total_points
            );
        }
        self.progress = merged;
        Ok(())
    }

    /// Hay progreso en memoria que todavía no está guardado
    pub fn has_unsaved_progress(&self) -> bool {
        self.dirty
    }

    pub fn last_store_error(&self) -> Option<&StoreError> {
        self.last_store_error.as_ref()
    }

    /// Borra todo el progreso (acción explícita del alumno) y vuelve al menú.
    /// Si el store no se puede borrar no se toca nada.
    pub fn reset_progress(&mut self) -> Result<(), QuizError> {
        self.store.clear()?;
        info!("Progress reset");
        self.progress = ProgressState::default();
        self.state = QuizState::Idle;
        self.newly_earned.clear();
        self.dirty = false;
        self.last_store_error = None;
        Ok(())
    }
}
