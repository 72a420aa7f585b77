use crate::badges::BadgeRules;
use crate::config::AppConfig;
use crate::data::LevelCatalog;
use crate::error::{CatalogError, QuizError, StoreError};
use crate::model::{ProgressState, QuizState};
use crate::store::ProgressStore;
use log::info;
use std::collections::BTreeSet;

// Submódulos
pub mod actions;
pub mod completion;
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod view_models;

pub use actions::AnswerOutcome;
// Re-export de view models
pub use crate::view_models::{BadgeInfo, LevelInfo};

/// Máquina de progresión del quiz.
///
/// Recibe los eventos de la UI (`select_level`, `submit_answer`,
/// `advance_to_next_level`, `retry_current_level`) y mantiene el
/// [`ProgressState`], que se guarda en el store tras cada cambio.
/// La UI solo observa.
pub struct QuizApp {
    catalog: LevelCatalog,
    badge_rules: BadgeRules,
    progress: ProgressState,
    state: QuizState,
    store: Box<dyn ProgressStore>,
    // Hay cambios en memoria que el store todavía no tiene
    dirty: bool,
    last_store_error: Option<StoreError>,
    newly_earned: BTreeSet<String>,
}

impl QuizApp {
    /// Carga el progreso una sola vez. Si no hay nada guardado (o no se
    /// puede leer) se empieza de cero.
    pub fn new(
        catalog: LevelCatalog,
        badge_rules: BadgeRules,
        store: Box<dyn ProgressStore>,
    ) -> Self {
        let mut progress = match store.load() {
            Some(p) => {
                info!(
                    "Loaded progress: {} levels completed, {} points",
                    p.completed_level_ids.len(),
                    p.total_points
                );
                p
            }
            None => {
                info!("No saved progress found, starting a new quiz road");
                ProgressState::default()
            }
        };

        // Las insignias derivan de los puntos; solo se añaden, nunca se quitan.
        // Si se añade alguna, se guarda ya.
        let held = progress.badges.len();
        progress.badges.extend(badge_rules.badges_for(progress.total_points));
        let dirty = progress.badges.len() > held;
        if dirty {
            info!("Badges reconciled with the point total: {:?}", progress.badges);
        }

        let mut app = Self {
            catalog,
            badge_rules,
            progress,
            state: QuizState::Idle,
            store,
            dirty,
            last_store_error: None,
            newly_earned: BTreeSet::new(),
        };
        if app.dirty {
            app.persist();
        }
        app
    }

    /// Catálogo, tabla de insignias y store según la configuración
    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogError> {
        let catalog = config.load_catalog()?;
        let badge_rules = config.load_badge_rules()?;

        #[cfg(not(target_arch = "wasm32"))]
        let store = crate::store::FileStore::new(&config.progress_path);
        #[cfg(target_arch = "wasm32")]
        let store = crate::store::LocalStorageStore::new(crate::config::STORAGE_KEY);

        Ok(Self::new(catalog, badge_rules, Box::new(store)))
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn badge_rules(&self) -> &BadgeRules {
        &self.badge_rules
    }

    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    /// Insignias ganadas en la última transición a `LevelComplete`
    pub fn newly_earned_badges(&self) -> &BTreeSet<String> {
        &self.newly_earned
    }

    fn invalid(&self, event: &'static str) -> QuizError {
        QuizError::InvalidState {
            event,
            state: self.state.name(),
        }
    }
}
