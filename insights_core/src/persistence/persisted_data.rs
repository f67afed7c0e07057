// src/persistence/persisted_data.rs
//! One-shot read of everything persisted, done at start-up

use crate::config::compile_time::persistence::{INSTALLATION_KEY, USER_CONFIGURATION_KEY};
use crate::logging::codes;
use crate::persistence::installation::InstallationData;
use crate::persistence::storage::{get_typed, KeyValueStorage};
use crate::types::UserConfigurationStoreData;
use serde::de::DeserializeOwned;

/// Keys read at start-up, in order
pub const DATA_KEYS_TO_FETCH: &[&str] = &[USER_CONFIGURATION_KEY, INSTALLATION_KEY];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PersistedData {
    pub user_configuration_data: Option<UserConfigurationStoreData>,
    pub installation_data: Option<InstallationData>,
}

/// Read the requested keys; unreadable entries are logged and left empty
pub fn get_persisted_data(storage: &dyn KeyValueStorage, keys: &[&str]) -> PersistedData {
    let mut data = PersistedData::default();

    for key in keys {
        match *key {
            USER_CONFIGURATION_KEY => data.user_configuration_data = read_logged(storage, key),
            INSTALLATION_KEY => data.installation_data = read_logged(storage, key),
            other => {
                crate::log_warning!("Ignoring unknown persisted data key", "key" => other);
            }
        }
    }

    crate::log_success!(
        codes::success::PERSISTED_DATA_LOADED,
        "Persisted data loaded",
        "user_configuration" => data.user_configuration_data.is_some(),
        "installation" => data.installation_data.is_some()
    );

    data
}

fn read_logged<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> Option<T> {
    match get_typed(storage, key) {
        Ok(value) => value,
        Err(error) => {
            crate::log_error!(
                codes::persistence::STORAGE_READ_FAILED,
                "Failed to read persisted data",
                "key" => key,
                "error" => error
            );
            None
        }
    }
}
