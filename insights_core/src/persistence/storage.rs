// src/persistence/storage.rs
//! Key-value storage for persisted state

use crate::persistence::error::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON values under string keys
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<Value>, StorageError>;

    fn set_item(&self, key: &str, value: Value) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

/// Read a typed value; `None` when the key is absent
pub fn get_typed<T: DeserializeOwned>(
    storage: &dyn KeyValueStorage,
    key: &str,
) -> Result<Option<T>, StorageError> {
    storage
        .get_item(key)?
        .map(|value| {
            serde_json::from_value(value)
                .map_err(|e| StorageError::deserialization(key, &e.to_string()))
        })
        .transpose()
}

pub fn set_typed<T: Serialize>(
    storage: &dyn KeyValueStorage,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let value =
        serde_json::to_value(value).map_err(|e| StorageError::serialization(key, &e.to_string()))?;
    storage.set_item(key, value)
}

#[derive(Debug, Default)]
pub struct InMemoryStorage {
    items: RefCell<BTreeMap<String, Value>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: Value) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.items.borrow().keys().cloned().collect())
    }
}

/// All keys in one JSON object on disk; every write rewrites the file
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_str(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<BTreeMap<String, Value>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| StorageError::io(&self.path_str(), &e.to_string()))?;

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| StorageError::corrupt(&self.path_str(), &e.to_string()))
    }

    fn save(&self, items: &BTreeMap<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| StorageError::io(&parent.display().to_string(), &e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(items)
            .map_err(|e| StorageError::serialization("*", &e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content)
            .map_err(|e| StorageError::io(&temp_path.display().to_string(), &e.to_string()))?;
        fs::rename(&temp_path, &self.path)
            .map_err(|e| StorageError::io(&self.path_str(), &e.to_string()))
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn get_item(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set_item(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let mut items = self.load()?;
        items.insert(key.to_string(), value);
        self.save(&items)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.load()?;
        if items.remove(key).is_some() {
            self.save(&items)?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.load()?.into_keys().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_in_memory_round_trip() {
        let storage = InMemoryStorage::new();
        set_typed(&storage, "count", &3u32).unwrap();

        assert_eq!(get_typed::<u32>(&storage, "count").unwrap(), Some(3));
        assert_eq!(get_typed::<u32>(&storage, "missing").unwrap(), None);

        storage.remove_item("count").unwrap();
        assert!(storage.keys().unwrap().is_empty());
    }

    #[test]
    fn test_typed_read_of_wrong_shape() {
        let storage = InMemoryStorage::new();
        storage.set_item("count", json!("three")).unwrap();

        assert_matches!(
            get_typed::<u32>(&storage, "count"),
            Err(StorageError::Deserialization { key, .. }) if key == "count"
        );
    }

    #[test]
    fn test_file_storage_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let storage = JsonFileStorage::new(&path);
        assert_eq!(storage.get_item("a").unwrap(), None);
        storage.set_item("a", json!({"x": 1})).unwrap();
        storage.set_item("b", json!(true)).unwrap();

        let reopened = JsonFileStorage::new(&path);
        assert_eq!(reopened.get_item("a").unwrap(), Some(json!({"x": 1})));
        assert_eq!(reopened.keys().unwrap(), vec!["a", "b"]);

        reopened.remove_item("a").unwrap();
        assert_eq!(storage.get_item("a").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "[1, 2").unwrap();

        assert_matches!(
            JsonFileStorage::new(&path).get_item("a"),
            Err(StorageError::Corrupt { .. })
        );
    }
}
