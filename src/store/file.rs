use super::{ProgressStore, decode_progress, encode_progress};
use crate::error::StoreError;
use crate::model::ProgressState;
use fs2::FileExt;
use log::{debug, warn};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Progreso en un fichero JSON local.
///
/// Escritura atómica: fichero temporal + `sync_all` + `rename`. Toda
/// escritura y borrado se hace con el fichero de bloqueo tomado, y
/// `update` lee y escribe sin soltarlo, así dos procesos sobre el mismo
/// fichero no se pisan el progreso.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("json.lock")
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    // El bloqueo se libera al soltar el `File` devuelto
    fn lock(&self) -> Result<File, StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.lock_path())?;
        lock_file.lock_exclusive()?;
        Ok(lock_file)
    }

    // Solo con el bloqueo tomado
    fn write_locked(&self, state: &ProgressState) -> Result<(), StoreError> {
        let content = encode_progress(state)?;

        let temp_path = self.temp_path();
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.sync_all()?;
        drop(temp_file);

        std::fs::rename(&temp_path, &self.path)?;
        debug!("Progress saved to {}", self.path.display());
        Ok(())
    }
}

impl ProgressStore for FileStore {
    fn load(&self) -> Option<ProgressState> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => decode_progress(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Could not read {}: {e}", self.path.display());
                None
            }
        }
    }

    fn save(&mut self, state: &ProgressState) -> Result<(), StoreError> {
        let _lock = self.lock()?;
        self.write_locked(state)
    }

    fn update(
        &mut self,
        merge: &mut dyn FnMut(Option<ProgressState>) -> ProgressState,
    ) -> Result<ProgressState, StoreError> {
        let _lock = self.lock()?;
        let next = merge(self.load());
        self.write_locked(&next)?;
        Ok(next)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        let _lock = self.lock()?;
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
