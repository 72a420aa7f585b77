use super::*;
use log::debug;

/// Resultado de `submit_answer`, para que la UI pueda dar feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub level_completed: bool,
}

impl QuizApp {
    /// Corrige la pregunta actual y avanza. Un fallo no resta puntos.
    /// Tras la última pregunta el nivel pasa a `LevelComplete` y se
    /// ejecutan los efectos de completar (puntos, insignias, guardado).
    pub fn submit_answer(&mut self, answer: &str) -> Result<AnswerOutcome, QuizError> {
        let QuizState::InLevel {
            level,
            question,
            correct,
        } = self.state
        else {
            return Err(self.invalid("submit_answer"));
        };

        let (is_correct, question_count) = {
            let lvl = self.level_at(level);
            (lvl.questions[question].matches(answer), lvl.questions.len())
        };
        debug!(
            "Answer to question {} of level {level}: {}",
            question + 1,
            if is_correct { "correct" } else { "wrong" }
        );

        let correct = correct + usize::from(is_correct);
        let level_completed = question + 1 >= question_count;

        if level_completed {
            self.state = QuizState::LevelComplete { level, correct };
            self.complete_level(level);
        } else {
            self.state = QuizState::InLevel {
                level,
                question: question + 1,
                correct,
            };
        }

        Ok(AnswerOutcome {
            correct: is_correct,
            level_completed,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::app::tests::{sample_app, two_level_catalog};
    use crate::error::QuizError;
    use crate::model::QuizState;

    #[test]
    fn submit_outside_a_level_is_invalid() {
        let (mut app, store) = sample_app(two_level_catalog());
        assert!(matches!(
            app.submit_answer("4"),
            Err(QuizError::InvalidState { event: "submit_answer", .. })
        ));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn wrong_answer_still_advances_without_penalty() {
        let (mut app, _) = sample_app(two_level_catalog());
        app.select_level("L1").unwrap();

        let outcome = app.submit_answer("5").unwrap();
        assert!(!outcome.correct);
        assert!(outcome.level_completed);
        assert_eq!(app.state(), QuizState::LevelComplete { level: 0, correct: 0 });
        // Se premia completar, no acertar
        assert_eq!(app.progress().total_points, 20);
    }

    #[test]
    fn submit_in_level_complete_is_invalid() {
        let (mut app, _) = sample_app(two_level_catalog());
        app.select_level("L1").unwrap();
        app.submit_answer("4").unwrap();

        assert!(app.submit_answer("4").is_err());
        assert_eq!(app.state(), QuizState::LevelComplete { level: 0, correct: 1 });
    }
}
