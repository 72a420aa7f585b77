use super::*;
use log::{debug, warn};

impl QuizApp {
    /// Entra en un nivel por su id, en la primera pregunta y con sesión nueva.
    /// Falla si el nivel anterior del catálogo no está completado.
    pub fn select_level(&mut self, level_id: &str) -> Result<(), QuizError> {
        let idx = self
            .catalog
            .position(level_id)
            .ok_or_else(|| QuizError::UnknownLevel(level_id.to_string()))?;

        if !self.is_unlocked_at(idx) {
            warn!("Rejected selection of locked level `{level_id}`");
            return Err(QuizError::LevelLocked(level_id.to_string()));
        }

        self.enter_level(idx);
        Ok(())
    }

    /// Desde `LevelComplete`, pasa al siguiente nivel del catálogo.
    pub fn advance_to_next_level(&mut self) -> Result<(), QuizError> {
        let QuizState::LevelComplete { level, .. } = self.state else {
            return Err(self.invalid("advance_to_next_level"));
        };

        let next = level + 1;
        if next >= self.catalog.len() {
            return Err(QuizError::NoNextLevel);
        }

        self.enter_level(next);
        Ok(())
    }

    /// Desde `LevelComplete`, repite el mismo nivel. Los puntos no se vuelven a sumar.
    pub fn retry_current_level(&mut self) -> Result<(), QuizError> {
        let QuizState::LevelComplete { level, .. } = self.state else {
            return Err(self.invalid("retry_current_level"));
        };

        self.enter_level(level);
        Ok(())
    }

    /// Vuelve al menú de niveles descartando la sesión en curso.
    pub fn return_to_menu(&mut self) {
        if self.state != QuizState::Idle {
            debug!("Leaving {} for the level menu", self.state.name());
        }
        self.state = QuizState::Idle;
        self.newly_earned.clear();
    }

    // Sesión nueva: pregunta 0, sin aciertos
    fn enter_level(&mut self, idx: usize) {
        if let Some(level) = self.catalog.get(idx) {
            info!("Entering level `{}` ({})", level.id, level.title);
        }
        self.state = QuizState::InLevel {
            level: idx,
            question: 0,
            correct: 0,
        };
        self.newly_earned.clear();
    }
}
