// src/telemetry/state_listener.rs

use crate::flux::store::{ListenerId, Store};
use crate::flux::stores::UserConfigurationStore;
use crate::telemetry::handler::TelemetryEventHandler;
use crate::types::UserConfigurationStoreData;
use std::rc::Rc;

/// Keeps the telemetry handler in step with the user's telemetry setting
pub struct TelemetryStateListener {
    store: Rc<UserConfigurationStore>,
    handler: Rc<TelemetryEventHandler>,
}

impl TelemetryStateListener {
    pub fn new(store: Rc<UserConfigurationStore>, handler: Rc<TelemetryEventHandler>) -> Self {
        Self { store, handler }
    }

    /// Apply the current setting, then follow every change
    pub fn initialize(&self) -> ListenerId {
        if let Some(state) = self.store.get_state() {
            apply(&self.handler, &state);
        }

        let handler = self.handler.clone();
        self.store.core().add_change_listener(move |state| {
            apply(&handler, state);
            Ok(())
        })
    }
}

fn apply(handler: &TelemetryEventHandler, state: &UserConfigurationStoreData) {
    if state.enable_telemetry {
        handler.enable_telemetry();
    } else {
        handler.disable_telemetry();
    }
}
