//! Position snapshot persistence
//!
//! Snapshots are plain JSON documents holding the full position state,
//! including the trade log. `JsonFileStore` writes through a temp file and
//! an atomic rename so a crash mid-write never leaves a torn snapshot.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::common::errors::{AgentError, Result};
use crate::common::traits::PositionStore;
use crate::position::Position;

/// File-backed store writing pretty-printed JSON snapshots
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PositionStore for JsonFileStore {
    fn save(&self, position: &Position) -> Result<()> {
        let json = serde_json::to_string_pretty(position)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, &json).map_err(|e| {
            AgentError::Persistence(format!("write {}: {}", tmp_path.display(), e))
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            AgentError::Persistence(format!("rename to {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }

    fn load(&self) -> Result<Option<Position>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path).map_err(|e| {
            AgentError::Persistence(format!("read {}: {}", self.path.display(), e))
        })?;
        let position = serde_json::from_str(&json)?;
        Ok(Some(position))
    }
}

/// In-memory store for tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Mutex<Option<Position>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PositionStore for MemoryStore {
    fn save(&self, position: &Position) -> Result<()> {
        *self.snapshot.lock().expect("store lock poisoned") = Some(position.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Position>> {
        Ok(self.snapshot.lock().expect("store lock poisoned").clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::Outcome;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_load_missing_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("position.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_roundtrip_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("position.json"));

        let mut position = Position::new();
        position.apply_buy(Outcome::Yes, dec!(1250), dec!(0.80)).unwrap();
        position.apply_sell(Outcome::Yes, dec!(1250), dec!(0.86)).unwrap();
        position
            .apply_buy(Outcome::No, dec!(1075) / dec!(0.14), dec!(0.14))
            .unwrap();

        store.save(&position).unwrap();
        let restored = store.load().unwrap().unwrap();
        assert_eq!(restored, position);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("position.json");
        let store = JsonFileStore::new(&path);

        store.save(&Position::new()).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("position.json"));

        let mut first = Position::new();
        first.apply_buy(Outcome::Yes, dec!(10), dec!(0.50)).unwrap();
        store.save(&first).unwrap();

        let mut second = first.clone();
        second.apply_buy(Outcome::Yes, dec!(5), dec!(0.60)).unwrap();
        store.save(&second).unwrap();

        assert_eq!(store.load().unwrap().unwrap(), second);
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        let mut position = Position::new();
        position.apply_buy(Outcome::No, dec!(7), dec!(0.10)).unwrap();
        store.save(&position).unwrap();
        assert_eq!(store.load().unwrap().unwrap(), position);
    }
}
