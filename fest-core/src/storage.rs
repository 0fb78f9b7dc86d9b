//! Durable key-value storage for the stores.
//!
//! Each store is saved as one JSON value under its own key and is
//! rewritten in full on every mutation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{FestError, FestResult};

pub const CART_KEY: &str = "festCart";
pub const VISITED_KEY: &str = "visitedEvents";
pub const REGISTERED_KEY: &str = "registeredEvents";
pub const PROFILE_KEY: &str = "userProfile";

/// A string key-value space. Last write wins.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> FestResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> FestResult<()>;
}

/// Stores each key as `<dir>/<key>.json`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> FestResult<Option<String>> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn set(&self, key: &str, value: &str) -> FestResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path(key);
        let temp = self.dir.join(format!("{key}.json.tmp"));

        std::fs::write(&temp, value)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }
}

/// In-process store, used by tests.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> FestResult<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|e| FestError::Storage(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> FestResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| FestError::Storage(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read a value, falling back to the default when the key is missing,
/// unreadable or holds malformed JSON.
pub fn load_or_default<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            log::warn!("Could not read '{}', starting empty: {}", key, e);
            return T::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Malformed data under '{}', starting empty: {}", key, e);
            T::default()
        }
    }
}

/// Serialize and write the full value under `key`.
pub fn save<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> FestResult<()>
where
    T: Serialize + ?Sized,
{
    let json =
        serde_json::to_string(value).map_err(|e| FestError::Serialization(e.to_string()))?;
    store.set(key, &json)?;
    log::debug!("Saved '{}' ({} bytes)", key, json.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get(CART_KEY).unwrap(), None);
    }

    #[test]
    fn file_store_overwrites_whole_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));

        store.set(VISITED_KEY, "[\"a\"]").unwrap();
        store.set(VISITED_KEY, "[\"a\",\"b\"]").unwrap();

        assert_eq!(
            store.get(VISITED_KEY).unwrap().as_deref(),
            Some("[\"a\",\"b\"]")
        );
        assert!(!dir.path().join("nested/visitedEvents.json.tmp").exists());
    }

    #[test]
    fn malformed_json_falls_back_to_default() {
        let store = MemoryStore::new();
        store.set(VISITED_KEY, "{not json").unwrap();

        let visited: Vec<String> = load_or_default(&store, VISITED_KEY);
        assert!(visited.is_empty());
    }

    #[test]
    fn save_then_load_returns_value() {
        let store = MemoryStore::new();
        save(&store, VISITED_KEY, &vec!["hackathon".to_string()]).unwrap();

        let visited: Vec<String> = load_or_default(&store, VISITED_KEY);
        assert_eq!(visited, vec!["hackathon".to_string()]);
    }
}
