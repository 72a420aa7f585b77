use thiserror::Error;

/// Errores de persistencia del progreso.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not access stored progress: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode progress: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("progress storage is unavailable: {0}")]
    Unavailable(String),
}

/// Transiciones rechazadas por la máquina de progresión.
/// En todos los casos el estado anterior queda intacto.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("level `{0}` is locked: complete the previous level first")]
    LevelLocked(String),
    #[error("level `{0}` does not exist in the catalog")]
    UnknownLevel(String),
    #[error("`{event}` is not allowed while {state}")]
    InvalidState {
        event: &'static str,
        state: &'static str,
    },
    #[error("there is no next level: the quiz road is finished")]
    NoNextLevel,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Problemas al leer el catálogo de niveles o la tabla de insignias.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("the catalog has no levels")]
    EmptyCatalog,
    #[error("level `{0}` has no questions")]
    EmptyLevel(String),
    #[error("the points of all levels do not fit in the point total")]
    PointsOverflow,
    #[error("level id `{0}` appears more than once")]
    DuplicateLevelId(String),
    #[error("question {question} of level `{level}` is multiple-choice but has no options")]
    MissingOptions { level: String, question: usize },
    #[error("question {question} of level `{level}` is free-text but lists options")]
    UnexpectedOptions { level: String, question: usize },
    #[error("question {question} of level `{level}`: the correct answer is not among the options")]
    AnswerNotInOptions { level: String, question: usize },
}
