use super::*;
use crate::model::{Level, Question};

impl QuizApp {
    // Los índices de sesión salen siempre del catálogo, nunca de fuera
    pub(crate) fn level_at(&self, idx: usize) -> &Level {
        &self.catalog.levels()[idx]
    }

    pub fn level(&self, level_id: &str) -> Option<&Level> {
        self.catalog.levels().iter().find(|l| l.id == level_id)
    }

    /// Nivel activo (en curso o recién completado)
    pub fn current_level(&self) -> Option<&Level> {
        self.state.level_index().and_then(|i| self.catalog.get(i))
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            QuizState::InLevel {
                level, question, ..
            } => self.catalog.get(level)?.questions.get(question),
            _ => None,
        }
    }

    /// (número de pregunta empezando en 1, total de preguntas del nivel)
    pub fn question_position(&self) -> Option<(usize, usize)> {
        match self.state {
            QuizState::InLevel {
                level, question, ..
            } => self
                .catalog
                .get(level)
                .map(|l| (question + 1, l.questions.len())),
            _ => None,
        }
    }

    /// Aciertos y total del intento; solo en `LevelComplete`
    pub fn session_score(&self) -> Option<(usize, usize)> {
        match self.state {
            QuizState::LevelComplete { level, correct } => self
                .catalog
                .get(level)
                .map(|l| (correct, l.questions.len())),
            _ => None,
        }
    }

    pub fn has_next_level(&self) -> bool {
        self.state
            .level_index()
            .is_some_and(|i| i + 1 < self.catalog.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::app::tests::{sample_app, three_level_catalog};

    #[test]
    fn observations_follow_the_session() {
        let (mut app, _) = sample_app(three_level_catalog());
        assert!(app.current_level().is_none());
        assert!(app.current_question().is_none());
        assert!(!app.has_next_level());

        app.select_level("A").unwrap();
        assert_eq!(app.current_level().map(|l| l.id.as_str()), Some("A"));
        assert_eq!(app.question_position(), Some((1, 2)));
        assert!(app.has_next_level());

        app.submit_answer("x").unwrap();
        assert_eq!(app.question_position(), Some((2, 2)));
        assert_eq!(app.state().session_correct(), 1);

        app.submit_answer("wrong").unwrap();
        assert_eq!(app.session_score(), Some((1, 2)));
        assert!(app.current_question().is_none());
        assert_eq!(app.level("C").map(|l| l.points), Some(30));
    }
}
