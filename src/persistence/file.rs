//! JSON file store for native builds
//!
//! The file holds a flat `{ "key": value }` object so unrelated keys written
//! by other tools survive a save. Writes go to a temporary file first and are
//! renamed into place.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{BEST_SCORE_KEY, ScoreStore};
use crate::error::StoreError;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Option<BTreeMap<String, u64>>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl ScoreStore for FileStore {
    fn load_best(&self) -> Result<Option<u64>, StoreError> {
        Ok(self
            .read_entries()?
            .and_then(|entries| entries.get(BEST_SCORE_KEY).copied()))
    }

    fn save_best(&mut self, score: u64) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking the save
        let mut entries = self.read_entries().ok().flatten().unwrap_or_default();
        entries.insert(BEST_SCORE_KEY.to_string(), score);

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, serde_json::to_string_pretty(&entries)?)?;
        std::fs::rename(&tmp, &self.path)?;

        log::info!("Best score {} saved to {}", score, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("stepping-stones-{}-{}", std::process::id(), name))
            .join("scores.json")
    }

    #[test]
    fn test_missing_file_is_none() {
        let store = FileStore::new(scratch_path("missing"));
        assert_eq!(store.load_best().unwrap(), None);
    }

    #[test]
    fn test_save_then_load_across_instances() {
        let path = scratch_path("roundtrip");
        let mut store = FileStore::new(&path);
        store.save_best(12).unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.load_best().unwrap(), Some(12));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_other_keys_preserved() {
        let path = scratch_path("preserve");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{ "volume": 4 }"#).unwrap();

        let mut store = FileStore::new(&path);
        store.save_best(3).unwrap();

        let raw: BTreeMap<String, u64> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw.get("volume"), Some(&4));
        assert_eq!(raw.get(BEST_SCORE_KEY), Some(&3));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_corrupt_file_reports_error() {
        let path = scratch_path("corrupt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.load_best(), Err(StoreError::Json(_))));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
