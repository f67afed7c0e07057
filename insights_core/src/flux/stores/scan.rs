// src/flux/stores/scan.rs

use crate::flux::actions::ScanActions;
use crate::flux::errors::StoreError;
use crate::flux::payloads::ScanFailedPayload;
use crate::flux::store::{add_store_listener, store_names, Store, StoreCore};
use crate::types::{ScanStatus, ScanStoreData};
use std::rc::Rc;

/// Lifecycle of the current scan
pub struct ScanStore {
    core: StoreCore<ScanStoreData>,
}

impl ScanStore {
    pub fn new(actions: &ScanActions) -> Rc<Self> {
        Rc::new_cyclic(|weak| {
            add_store_listener(&actions.scan_started, weak, Self::on_scan_started);
            add_store_listener(&actions.scan_completed, weak, Self::on_scan_completed);
            add_store_listener(&actions.scan_failed, weak, Self::on_scan_failed);
            Self {
                core: StoreCore::new(store_names::SCAN_STORE),
            }
        })
    }

    pub fn initialize(&self) {
        self.core.initialize(ScanStoreData::default());
    }

    fn on_scan_started(&self, _: &()) -> Result<(), StoreError> {
        self.set_status(ScanStatus::Scanning, None)
    }

    fn on_scan_completed(&self, _: &()) -> Result<(), StoreError> {
        self.set_status(ScanStatus::Completed, None)
    }

    fn on_scan_failed(&self, payload: &ScanFailedPayload) -> Result<(), StoreError> {
        self.set_status(ScanStatus::Failed, Some(payload.reason.clone()))
    }

    fn set_status(&self, status: ScanStatus, failure_reason: Option<String>) -> Result<(), StoreError> {
        self.core
            .update(|state| {
                state.status = status;
                state.failure_reason = failure_reason;
                true
            })
            .map(|_| ())
    }
}

impl Store for ScanStore {
    type State = ScanStoreData;

    fn core(&self) -> &StoreCore<ScanStoreData> {
        &self.core
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_transitions() {
        let actions = ScanActions::default();
        let store = ScanStore::new(&actions);
        store.initialize();
        assert_eq!(store.get_state().unwrap().status, ScanStatus::Default);

        actions.scan_started.invoke(&()).unwrap();
        assert_eq!(store.get_state().unwrap().status, ScanStatus::Scanning);

        actions
            .scan_failed
            .invoke(&ScanFailedPayload {
                reason: "device offline".to_string(),
            })
            .unwrap();
        let state = store.get_state().unwrap();
        assert_eq!(state.status, ScanStatus::Failed);
        assert_eq!(state.failure_reason.as_deref(), Some("device offline"));

        actions.scan_started.invoke(&()).unwrap();
        actions.scan_completed.invoke(&()).unwrap();
        assert_eq!(
            store.get_state().unwrap(),
            ScanStoreData {
                status: ScanStatus::Completed,
                failure_reason: None,
            }
        );
    }
}
