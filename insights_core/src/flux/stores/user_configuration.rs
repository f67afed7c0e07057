// src/flux/stores/user_configuration.rs
//! User preferences, written back to storage on every change

use crate::config::compile_time::persistence::USER_CONFIGURATION_KEY;
use crate::flux::actions::UserConfigurationActions;
use crate::flux::errors::StoreError;
use crate::flux::payloads::{
    SetHighContrastModePayload, SetIssueFilingServicePayload,
    SetIssueFilingServicePropertyPayload, SetTelemetryStatePayload,
};
use crate::flux::store::{add_store_listener, store_names, Store, StoreCore};
use crate::logging::codes;
use crate::persistence::{set_typed, KeyValueStorage};
use crate::types::UserConfigurationStoreData;
use std::rc::Rc;

pub struct UserConfigurationStore {
    core: StoreCore<UserConfigurationStoreData>,
    storage: Rc<dyn KeyValueStorage>,
}

impl UserConfigurationStore {
    pub fn new(actions: &UserConfigurationActions, storage: Rc<dyn KeyValueStorage>) -> Rc<Self> {
        Rc::new_cyclic(|weak| {
            add_store_listener(&actions.set_telemetry_state, weak, Self::on_set_telemetry_state);
            add_store_listener(
                &actions.set_high_contrast_mode,
                weak,
                Self::on_set_high_contrast_mode,
            );
            add_store_listener(
                &actions.set_issue_filing_service,
                weak,
                Self::on_set_issue_filing_service,
            );
            add_store_listener(
                &actions.set_issue_filing_service_property,
                weak,
                Self::on_set_issue_filing_service_property,
            );
            Self {
                core: StoreCore::new(store_names::USER_CONFIGURATION_STORE),
                storage,
            }
        })
    }

    /// Start from persisted data when there is any
    pub fn initialize(&self, persisted: Option<UserConfigurationStoreData>) {
        self.core.initialize(persisted.unwrap_or_default());
    }

    fn on_set_telemetry_state(&self, payload: &SetTelemetryStatePayload) -> Result<(), StoreError> {
        self.save_and_emit(|state| {
            let changed = state.enable_telemetry != payload.enable_telemetry || state.is_first_time;
            state.enable_telemetry = payload.enable_telemetry;
            state.is_first_time = false;
            changed
        })
    }

    fn on_set_high_contrast_mode(
        &self,
        payload: &SetHighContrastModePayload,
    ) -> Result<(), StoreError> {
        self.save_and_emit(|state| {
            let changed = state.enable_high_contrast != payload.enable_high_contrast;
            state.enable_high_contrast = payload.enable_high_contrast;
            changed
        })
    }

    fn on_set_issue_filing_service(
        &self,
        payload: &SetIssueFilingServicePayload,
    ) -> Result<(), StoreError> {
        self.save_and_emit(|state| {
            let changed = state.bug_service != payload.issue_filing_service_name;
            state.bug_service = payload.issue_filing_service_name.clone();
            changed
        })
    }

    fn on_set_issue_filing_service_property(
        &self,
        payload: &SetIssueFilingServicePropertyPayload,
    ) -> Result<(), StoreError> {
        self.save_and_emit(|state| {
            let previous = state
                .bug_service_properties_map
                .entry(payload.issue_filing_service_name.clone())
                .or_default()
                .insert(payload.property_name.clone(), payload.property_value.clone());
            previous.as_deref() != Some(payload.property_value.as_str())
        })
    }

    /// Apply, notify, then write the new state back to storage
    fn save_and_emit(
        &self,
        apply: impl FnOnce(&mut UserConfigurationStoreData) -> bool,
    ) -> Result<(), StoreError> {
        let emitted = self.core.update(apply);
        if let Ok(false) = emitted {
            return Ok(());
        }

        self.persist()?;
        emitted.map(|_| ())
    }

    fn persist(&self) -> Result<(), StoreError> {
        let Some(state) = self.core.get_state() else {
            return Ok(());
        };

        set_typed(self.storage.as_ref(), USER_CONFIGURATION_KEY, &state).map_err(|error| {
            crate::log_error!(
                codes::persistence::STORAGE_WRITE_FAILED,
                "Failed to persist user configuration",
                "error" => error
            );
            StoreError::persist_failed(self.core.name(), &error.to_string())
        })
    }
}

impl Store for UserConfigurationStore {
    type State = UserConfigurationStoreData;

    fn core(&self) -> &StoreCore<UserConfigurationStoreData> {
        &self.core
    }
}
