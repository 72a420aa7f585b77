use super::{ProgressStore, decode_progress, encode_progress};
use crate::error::StoreError;
use crate::model::ProgressState;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Inner {
    content: Option<String>,
    fail_saves: bool,
    saves: usize,
}

/// Almacén en memoria. Los clones comparten contenido, así un test puede
/// inspeccionar lo que guardó la app.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contenido ya serializado, tal cual lo leería `load`
    pub fn with_content(content: impl Into<String>) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().content = Some(content.into());
        store
    }

    pub fn content(&self) -> Option<String> {
        self.inner.borrow().content.clone()
    }

    /// Simula un soporte que rechaza escrituras
    pub fn set_fail_saves(&self, fail: bool) {
        self.inner.borrow_mut().fail_saves = fail;
    }

    /// Escrituras correctas realizadas
    pub fn save_count(&self) -> usize {
        self.inner.borrow().saves
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Option<ProgressState> {
        let inner = self.inner.borrow();
        inner.content.as_deref().and_then(decode_progress)
    }

    fn save(&mut self, state: &ProgressState) -> Result<(), StoreError> {
        let content = encode_progress(state)?;
        let mut inner = self.inner.borrow_mut();
        if inner.fail_saves {
            return Err(StoreError::Unavailable("memory store is read-only".into()));
        }
        inner.content = Some(content);
        inner.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.inner.borrow_mut().content = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_means_first_run() {
        assert!(MemoryStore::new().load().is_none());
    }

    #[test]
    fn saving_twice_is_idempotent() {
        let mut store = MemoryStore::new();
        let mut state = ProgressState::default();
        state.total_points = 30;
        state.completed_level_ids.insert("L1".into());

        store.save(&state).expect("first save");
        let first = store.content();
        store.save(&state).expect("second save");
        assert_eq!(store.content(), first);
        assert_eq!(store.load(), Some(state));
    }

    #[test]
    fn failing_store_keeps_previous_content() {
        let mut store = MemoryStore::new();
        store.save(&ProgressState::default()).expect("save");
        store.set_fail_saves(true);

        let mut state = ProgressState::default();
        state.total_points = 10;
        assert!(store.save(&state).is_err());
        assert_eq!(store.load(), Some(ProgressState::default()));
        assert_eq!(store.save_count(), 1);
    }
}
