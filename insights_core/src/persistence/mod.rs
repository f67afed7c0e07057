// src/persistence/mod.rs
//! Persisted configuration and installation data
//!
//! Everything is read once at start-up through [`get_persisted_data`]; the
//! user configuration store writes back whenever it changes.

pub mod error;
pub mod installation;
pub mod persisted_data;
pub mod storage;

pub use error::StorageError;
pub use installation::InstallationData;
pub use persisted_data::{get_persisted_data, PersistedData, DATA_KEYS_TO_FETCH};
pub use storage::{get_typed, set_typed, InMemoryStorage, JsonFileStorage, KeyValueStorage};

pub use crate::config::compile_time::persistence::{INSTALLATION_KEY, USER_CONFIGURATION_KEY};
