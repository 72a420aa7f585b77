// src/data.rs

use crate::badges::{BadgeRule, BadgeRules};
use crate::error::CatalogError;
use crate::model::{Level, Question, QuestionKind};
use std::collections::HashSet;
use std::path::Path;

const EMBEDDED_LEVELS: &str = include_str!("data/quiz_levels.yaml");
const EMBEDDED_BADGE_RULES: &str = include_str!("data/badge_rules.yaml");

/// Catálogo ordenado de niveles. Inmutable una vez validado.
#[derive(Debug, Clone)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    pub fn from_levels(levels: Vec<Level>) -> Result<Self, CatalogError> {
        validate_levels(&levels)?;
        Ok(Self { levels })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        let levels: Vec<Level> = serde_yaml::from_str(content)?;
        Self::from_levels(levels)
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn get(&self, idx: usize) -> Option<&Level> {
        self.levels.get(idx)
    }

    /// Posición en el catálogo de un nivel según su id
    pub fn position(&self, level_id: &str) -> Option<usize> {
        self.levels.iter().position(|l| l.id == level_id)
    }

    /// Puntos del nivel con ese id, si está en el catálogo
    pub fn points_of(&self, level_id: &str) -> Option<u32> {
        self.levels.iter().find(|l| l.id == level_id).map(|l| l.points)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Suma de puntos de todo el camino
    pub fn total_points(&self) -> u32 {
        self.levels.iter().map(|l| l.points).sum()
    }
}

/// Carga el catálogo de niveles desde el YAML embebido
pub fn read_levels_embedded() -> Result<LevelCatalog, CatalogError> {
    LevelCatalog::from_yaml_str(EMBEDDED_LEVELS)
}

/// Carga la tabla de insignias desde el YAML embebido
pub fn read_badge_rules_embedded() -> Result<BadgeRules, CatalogError> {
    read_badge_rules(EMBEDDED_BADGE_RULES)
}

pub fn read_badge_rules(content: &str) -> Result<BadgeRules, CatalogError> {
    let rules: Vec<BadgeRule> = serde_yaml::from_str(content)?;
    Ok(BadgeRules::new(rules))
}

fn validate_levels(levels: &[Level]) -> Result<(), CatalogError> {
    if levels.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }

    // El total del camino tiene que caber en `totalPoints`
    levels
        .iter()
        .try_fold(0u32, |acc, l| acc.checked_add(l.points))
        .ok_or(CatalogError::PointsOverflow)?;

    let mut seen = HashSet::new();
    for level in levels {
        if !seen.insert(level.id.as_str()) {
            return Err(CatalogError::DuplicateLevelId(level.id.clone()));
        }
        if level.questions.is_empty() {
            return Err(CatalogError::EmptyLevel(level.id.clone()));
        }
        for (qi, q) in level.questions.iter().enumerate() {
            validate_question(&level.id, qi + 1, q)?;
        }
    }
    Ok(())
}

fn validate_question(level: &str, question: usize, q: &Question) -> Result<(), CatalogError> {
    match (q.kind, &q.options) {
        (QuestionKind::MultipleChoice, Some(opts)) if !opts.is_empty() => {
            if !opts.contains(&q.correct_answer) {
                return Err(CatalogError::AnswerNotInOptions {
                    level: level.to_string(),
                    question,
                });
            }
            Ok(())
        }
        (QuestionKind::MultipleChoice, _) => Err(CatalogError::MissingOptions {
            level: level.to_string(),
            question,
        }),
        (QuestionKind::FreeText, Some(_)) => Err(CatalogError::UnexpectedOptions {
            level: level.to_string(),
            question,
        }),
        (QuestionKind::FreeText, None) => Ok(()),
    }
}
