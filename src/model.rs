use crate::answer_utils::normalize_free_text;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    MultipleChoice,
    FreeText,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub kind: QuestionKind,
    #[serde(default)]
    pub options: Option<Vec<String>>, // Solo en multiple-choice
    #[serde(alias = "correct")]
    pub correct_answer: String,
}

impl Question {
    /// Regla de corrección:
    /// - opción múltiple: identidad exacta con `correct_answer`
    /// - texto libre: sin espacios en los extremos y sin distinguir mayúsculas
    pub fn matches(&self, answer: &str) -> bool {
        match self.kind {
            QuestionKind::MultipleChoice => answer == self.correct_answer,
            QuestionKind::FreeText => {
                normalize_free_text(answer) == normalize_free_text(&self.correct_answer)
            }
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub id: String, // Identificador estable, NO la posición en el catálogo
    pub title: String,
    #[serde(default)]
    pub points: u32,
    pub questions: Vec<Question>,
}

/// Progreso acumulado del alumno. Es lo único que se persiste.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    pub completed_level_ids: BTreeSet<String>,
    pub total_points: u32,
    pub badges: BTreeSet<String>,
}

impl ProgressState {
    pub fn is_empty(&self) -> bool {
        self.completed_level_ids.is_empty() && self.total_points == 0 && self.badges.is_empty()
    }

    /// Une el progreso guardado por otra sesión con este, sin perder nada.
    ///
    /// Ids e insignias se unen. Cada nivel que solo tenía `other` suma sus
    /// puntos según `points_of`; si `other` trae ids que no se conocen, el
    /// total nunca queda por debajo del suyo.
    pub fn merge(&mut self, other: ProgressState, points_of: impl Fn(&str) -> Option<u32>) {
        let mut total = self.total_points;
        for id in other.completed_level_ids {
            if self.completed_level_ids.contains(&id) {
                continue;
            }
            let points = points_of(&id).unwrap_or(0);
            total = total.checked_add(points).unwrap_or_else(|| {
                warn!("Point total overflow merging `{id}`, capping at {}", u32::MAX);
                u32::MAX
            });
            self.completed_level_ids.insert(id);
        }
        self.total_points = total.max(other.total_points);
        self.badges.extend(other.badges);
    }
}

/// Estado de la máquina de progresión. Los índices apuntan al catálogo
/// (inmutable) y solo viven durante la sesión.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizState {
    #[default]
    Idle,
    InLevel {
        level: usize,
        question: usize,
        correct: usize,
    },
    LevelComplete {
        level: usize,
        correct: usize,
    },
}

impl QuizState {
    pub fn level_index(&self) -> Option<usize> {
        match *self {
            QuizState::Idle => None,
            QuizState::InLevel { level, .. } | QuizState::LevelComplete { level, .. } => {
                Some(level)
            }
        }
    }

    /// Aciertos de la sesión en curso (`sessionCorrectCount`)
    pub fn session_correct(&self) -> usize {
        match *self {
            QuizState::Idle => 0,
            QuizState::InLevel { correct, .. } | QuizState::LevelComplete { correct, .. } => {
                correct
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            QuizState::Idle => "Idle",
            QuizState::InLevel { .. } => "InLevel",
            QuizState::LevelComplete { .. } => "LevelComplete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free_text(answer: &str) -> Question {
        Question {
            prompt: "Capital of Italy".into(),
            kind: QuestionKind::FreeText,
            options: None,
            correct_answer: answer.into(),
        }
    }

    #[test]
    fn free_text_ignores_case_and_outer_whitespace() {
        let q = free_text("rome");
        assert!(q.matches("Rome"));
        assert!(q.matches("  ROME \n"));
        assert!(!q.matches("Ro me"));
        assert!(!q.matches("Roma"));
    }

    #[test]
    fn multiple_choice_requires_exact_identity() {
        let q = Question {
            prompt: "2+2".into(),
            kind: QuestionKind::MultipleChoice,
            options: Some(vec!["3".into(), "4".into()]),
            correct_answer: "4".into(),
        };
        assert!(q.matches("4"));
        assert!(!q.matches(" 4"));
        assert!(!q.matches("four"));
    }

    fn progress(ids: &[&str], total_points: u32, badges: &[&str]) -> ProgressState {
        ProgressState {
            completed_level_ids: ids.iter().map(|s| s.to_string()).collect(),
            total_points,
            badges: badges.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn merge_unions_levels_and_recounts_points() {
        let points_of = |id: &str| match id {
            "A" | "B" | "C" => Some(20),
            _ => None,
        };

        // Otra sesión completó B; esta, C
        let mut mine = progress(&["A", "C"], 40, &["Bronze Explorer", "Silver Explorer"]);
        mine.merge(progress(&["A", "B"], 40, &["Bronze Explorer"]), points_of);
        assert_eq!(mine, progress(&["A", "B", "C"], 60, &["Bronze Explorer", "Silver Explorer"]));

        // Lo guardado va por delante: no se retrocede
        let mut behind = progress(&["A"], 20, &[]);
        behind.merge(progress(&["A", "B"], 40, &["Silver Explorer"]), points_of);
        assert_eq!(behind, progress(&["A", "B"], 40, &["Silver Explorer"]));
    }

    #[test]
    fn merge_never_lowers_points_for_unknown_levels() {
        let mut mine = progress(&["A"], 20, &[]);
        mine.merge(progress(&["retired"], 50, &[]), |_| None);
        assert!(mine.completed_level_ids.contains("retired"));
        assert_eq!(mine.total_points, 50);
    }

    #[test]
    fn progress_state_uses_camel_case_layout() {
        let mut state = ProgressState::default();
        state.completed_level_ids.insert("L1".into());
        state.total_points = 20;
        let json = serde_json::to_string(&state).expect("serialize");
        assert_eq!(
            json,
            r#"{"completedLevelIds":["L1"],"totalPoints":20,"badges":[]}"#
        );
    }
}
