//! Persistencia del progreso
//!
//! El motor solo conoce el trait [`ProgressStore`]; el soporte concreto
//! (fichero, memoria, `localStorage`) se inyecta al construir la app.

use crate::error::StoreError;
use crate::model::ProgressState;
use log::warn;

#[cfg(not(target_arch = "wasm32"))]
mod file;
mod memory;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
pub use memory::MemoryStore;
#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageStore;

pub trait ProgressStore {
    /// `None` = primera ejecución (o datos ilegibles). Nunca es un error.
    fn load(&self) -> Option<ProgressState>;

    /// Guarda el estado completo. Ningún lector puede ver una escritura a medias.
    fn save(&mut self, state: &ProgressState) -> Result<(), StoreError>;

    /// Borra el progreso guardado (reinicio explícito).
    fn clear(&mut self) -> Result<(), StoreError>;

    /// Lee lo guardado, lo pasa por `merge` y escribe el resultado.
    /// Los soportes con bloqueo hacen las tres cosas sin soltarlo.
    /// Devuelve el estado escrito.
    fn update(
        &mut self,
        merge: &mut dyn FnMut(Option<ProgressState>) -> ProgressState,
    ) -> Result<ProgressState, StoreError> {
        let next = merge(self.load());
        self.save(&next)?;
        Ok(next)
    }
}

/// Serializa con los conjuntos ordenados: mismo estado, mismos bytes.
pub fn encode_progress(state: &ProgressState) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Datos corruptos cuentan como primera ejecución.
pub fn decode_progress(content: &str) -> Option<ProgressState> {
    match serde_json::from_str::<ProgressState>(content) {
        Ok(state) => Some(state),
        Err(e) => {
            warn!("Stored progress is malformed, starting fresh: {e}");
            None
        }
    }
}
