//! Browser LocalStorage store

use web_sys::Storage;

use super::{BEST_SCORE_KEY, ScoreStore};
use crate::error::StoreError;

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)
    }
}

impl ScoreStore for LocalStorageStore {
    fn load_best(&self) -> Result<Option<u64>, StoreError> {
        let storage = Self::storage()?;
        match storage.get_item(BEST_SCORE_KEY) {
            Ok(Some(value)) => Ok(Some(serde_json::from_str(value.trim())?)),
            Ok(None) => Ok(None),
            Err(_) => Err(StoreError::Unavailable),
        }
    }

    fn save_best(&mut self, score: u64) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        storage
            .set_item(BEST_SCORE_KEY, &score.to_string())
            .map_err(|_| StoreError::Unavailable)?;
        log::info!("Best score {} saved", score);
        Ok(())
    }
}
