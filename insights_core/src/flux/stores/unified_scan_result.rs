// src/flux/stores/unified_scan_result.rs

use crate::flux::actions::UnifiedScanResultActions;
use crate::flux::errors::StoreError;
use crate::flux::store::{add_store_listener, store_names, Store, StoreCore};
use crate::types::{UnifiedScanCompletedPayload, UnifiedScanResultStoreData};
use std::rc::Rc;

/// Latest unified results, rules and scan metadata
pub struct UnifiedScanResultStore {
    core: StoreCore<UnifiedScanResultStoreData>,
}

impl UnifiedScanResultStore {
    pub fn new(actions: &UnifiedScanResultActions) -> Rc<Self> {
        Rc::new_cyclic(|weak| {
            add_store_listener(&actions.scan_completed, weak, Self::on_scan_completed);
            Self {
                core: StoreCore::new(store_names::UNIFIED_SCAN_RESULT_STORE),
            }
        })
    }

    pub fn initialize(&self) {
        self.core.initialize(UnifiedScanResultStoreData::default());
    }

    fn on_scan_completed(&self, payload: &UnifiedScanCompletedPayload) -> Result<(), StoreError> {
        self.core
            .update(|state| {
                *state = UnifiedScanResultStoreData {
                    results: Some(payload.scan_result.clone()),
                    rules: Some(payload.rules.clone()),
                    tool_info: Some(payload.tool_info.clone()),
                    target_app_info: Some(payload.target_app_info.clone()),
                    timestamp: Some(payload.timestamp),
                    screenshot_data: payload.screenshot_data.clone(),
                    platform_info: payload.platform_info.clone(),
                };
                true
            })
            .map(|_| ())
    }
}

impl Store for UnifiedScanResultStore {
    type State = UnifiedScanResultStoreData;

    fn core(&self) -> &StoreCore<UnifiedScanResultStoreData> {
        &self.core
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flux::store::StoreHandle;
    use crate::types::{InstanceResultStatus, TargetAppData, ToolData, UnifiedResult};
    use chrono::Utc;

    fn payload() -> UnifiedScanCompletedPayload {
        UnifiedScanCompletedPayload {
            scan_result: vec![UnifiedResult {
                uid: "uid-0".to_string(),
                rule_id: "ColorContrast".to_string(),
                status: InstanceResultStatus::Fail,
                descriptors: None,
                identifiers: None,
                resolution: None,
            }],
            rules: vec![],
            tool_info: ToolData::default(),
            target_app_info: TargetAppData {
                name: "app".to_string(),
                version: None,
            },
            timestamp: Utc::now(),
            screenshot_data: None,
            platform_info: None,
        }
    }

    #[test]
    fn test_scan_completed_replaces_state() {
        let actions = UnifiedScanResultActions::default();
        let store = UnifiedScanResultStore::new(&actions);
        store.initialize();
        assert_eq!(store.get_state(), Some(UnifiedScanResultStoreData::default()));

        actions.scan_completed.invoke(&payload()).unwrap();

        let state = store.get_state().unwrap();
        assert_eq!(state.results.unwrap().len(), 1);
        assert_eq!(state.target_app_info.unwrap().name, "app");
        assert_eq!(store.version(), 1);
    }

    #[test]
    #[should_panic(expected = "UnifiedScanResultStore")]
    fn test_action_before_initialize_panics() {
        let actions = UnifiedScanResultActions::default();
        let _store = UnifiedScanResultStore::new(&actions);

        let _ = actions.scan_completed.invoke(&payload());
    }

    #[test]
    fn test_dropped_store_stops_listening() {
        let actions = UnifiedScanResultActions::default();
        drop(UnifiedScanResultStore::new(&actions));

        assert!(actions.scan_completed.invoke(&payload()).is_ok());
    }
}
