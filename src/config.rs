//! Configuración de arranque
//!
//! Todo tiene un valor por defecto; las variables de entorno lo sobrescriben:
//! - `ARQUEO_QUIZ_PROGRESS`: fichero de progreso
//! - `ARQUEO_QUIZ_CATALOG`: catálogo de niveles YAML externo
//! - `ARQUEO_QUIZ_BADGES`: tabla de insignias YAML externa
//! - `ARQUEO_QUIZ_LOG`: filtro de logs (p. ej. "debug" o "info,arqueo_quiz=debug")

use crate::badges::BadgeRules;
use crate::data::{LevelCatalog, read_badge_rules, read_badge_rules_embedded, read_levels_embedded};
use crate::error::CatalogError;
use log::info;
use std::path::PathBuf;

pub const PROGRESS_ENV: &str = "ARQUEO_QUIZ_PROGRESS";
pub const CATALOG_ENV: &str = "ARQUEO_QUIZ_CATALOG";
pub const BADGES_ENV: &str = "ARQUEO_QUIZ_BADGES";
pub const LOG_ENV: &str = "ARQUEO_QUIZ_LOG";

/// Clave de `localStorage` en la versión web
pub const STORAGE_KEY: &str = "arqueo_quiz.progress";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub progress_path: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub badge_rules_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            progress_path: default_progress_path(),
            catalog_path: None,
            badge_rules_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables inyectable
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = non_empty(PROGRESS_ENV) {
            config.progress_path = PathBuf::from(path);
        }
        config.catalog_path = non_empty(CATALOG_ENV).map(PathBuf::from);
        config.badge_rules_path = non_empty(BADGES_ENV).map(PathBuf::from);
        if let Some(filter) = non_empty(LOG_ENV) {
            config.log_filter = filter;
        }
        config
    }

    /// Catálogo externo si está configurado; si no, el embebido
    pub fn load_catalog(&self) -> Result<LevelCatalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => {
                info!("Loading level catalog from {}", path.display());
                LevelCatalog::from_file(path)
            }
            None => read_levels_embedded(),
        }
    }

    pub fn load_badge_rules(&self) -> Result<BadgeRules, CatalogError> {
        match &self.badge_rules_path {
            Some(path) => {
                info!("Loading badge rules from {}", path.display());
                read_badge_rules(&std::fs::read_to_string(path)?)
            }
            None => read_badge_rules_embedded(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_progress_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("arqueo_quiz")
        .join("progress.json")
}

#[cfg(target_arch = "wasm32")]
fn default_progress_path() -> PathBuf {
    PathBuf::from(STORAGE_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_without_environment() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert!(config.progress_path.ends_with("arqueo_quiz/progress.json"));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn environment_overrides_and_blank_values_are_ignored() {
        let vars: HashMap<&str, &str> = [
            (PROGRESS_ENV, "/tmp/p.json"),
            (CATALOG_ENV, "levels.yaml"),
            (BADGES_ENV, "  "),
            (LOG_ENV, "debug"),
        ]
        .into_iter()
        .collect();
        let config = AppConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.progress_path, PathBuf::from("/tmp/p.json"));
        assert_eq!(config.catalog_path, Some(PathBuf::from("levels.yaml")));
        assert_eq!(config.badge_rules_path, None);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn embedded_sources_load_by_default() {
        let config = AppConfig::from_lookup(|_| None);
        assert!(config.load_catalog().is_ok());
        assert_eq!(config.load_badge_rules().unwrap(), BadgeRules::default());
    }
}
