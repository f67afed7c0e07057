// src/persistence/error.rs

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("Failed to access storage file '{path}': {cause}")]
    Io { path: String, cause: String },

    #[error("Storage file '{path}' is not a JSON object: {cause}")]
    Corrupt { path: String, cause: String },

    #[error("Failed to serialize value for key '{key}': {cause}")]
    Serialization { key: String, cause: String },

    #[error("Stored value for key '{key}' has an unexpected shape: {cause}")]
    Deserialization { key: String, cause: String },
}

impl StorageError {
    pub fn io(path: &str, cause: &str) -> Self {
        Self::Io {
            path: path.to_string(),
            cause: cause.to_string(),
        }
    }

    pub fn corrupt(path: &str, cause: &str) -> Self {
        Self::Corrupt {
            path: path.to_string(),
            cause: cause.to_string(),
        }
    }

    pub fn serialization(key: &str, cause: &str) -> Self {
        Self::Serialization {
            key: key.to_string(),
            cause: cause.to_string(),
        }
    }

    pub fn deserialization(key: &str, cause: &str) -> Self {
        Self::Deserialization {
            key: key.to_string(),
            cause: cause.to_string(),
        }
    }
}
