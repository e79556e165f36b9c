//! Best-score persistence
//!
//! A single non-negative integer stored under [`BEST_SCORE_KEY`]:
//! - LocalStorage on web
//! - A small JSON file natively
//! - In memory for tests and throwaway sessions
//!
//! Storage problems never stop the game; callers log them and carry on with
//! the in-memory value.

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use crate::error::StoreError;

/// Fixed identifier the best score is stored under
pub const BEST_SCORE_KEY: &str = "stepping_stones_best_score";

/// Somewhere the best score survives process restarts
pub trait ScoreStore {
    /// Stored best score, `None` if nothing was ever saved
    fn load_best(&self) -> Result<Option<u64>, StoreError>;

    fn save_best(&mut self, score: u64) -> Result<(), StoreError>;
}

/// Read the best score, treating absence or failure as zero
pub fn load_best_or_zero(store: &dyn ScoreStore) -> u64 {
    match store.load_best() {
        Ok(Some(score)) => {
            log::info!("Loaded best score {}", score);
            score
        }
        Ok(None) => {
            log::info!("No best score found, starting fresh");
            0
        }
        Err(e) => {
            log::warn!("Could not read best score: {}", e);
            0
        }
    }
}

/// Volatile store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: Option<u64>,
    /// Number of successful saves
    pub saves: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(score: u64) -> Self {
        Self {
            best: Some(score),
            saves: 0,
        }
    }
}

impl ScoreStore for MemoryStore {
    fn load_best(&self) -> Result<Option<u64>, StoreError> {
        Ok(self.best)
    }

    fn save_best(&mut self, score: u64) -> Result<(), StoreError> {
        self.best = Some(score);
        self.saves += 1;
        Ok(())
    }
}
