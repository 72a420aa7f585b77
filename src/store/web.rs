use super::{ProgressStore, decode_progress, encode_progress};
use crate::error::StoreError;
use crate::model::ProgressState;

/// Progreso en `window.localStorage`, bajo una sola clave.
/// `setItem` reemplaza el valor entero, así que la escritura es atómica.
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| StoreError::Unavailable("localStorage is not accessible".into()))
}

impl ProgressStore for LocalStorageStore {
    fn load(&self) -> Option<ProgressState> {
        let storage = local_storage().ok()?;
        let content = storage.get_item(&self.key).ok().flatten()?;
        decode_progress(&content)
    }

    fn save(&mut self, state: &ProgressState) -> Result<(), StoreError> {
        let content = encode_progress(state)?;
        local_storage()?
            .set_item(&self.key, &content)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        local_storage()?
            .remove_item(&self.key)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }
}
