// src/flux/hub.rs
//! Groupings handed to the rest of the application
//!
//! [`ActionHub`] owns every action group. [`StoreHub`] gives views one place to
//! read all store state and to hear about any change.

use crate::flux::actions::{
    AssessmentActions, CardSelectionActions, DetailsViewActions, FeatureFlagActions,
    LaunchPanelActions, ScanActions, UnifiedScanResultActions, UserConfigurationActions,
    VisualizationActions,
};
use crate::flux::errors::ListenerResult;
use crate::flux::store::{ListenerId, StoreHandle};
use serde_json::{Map, Value};
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct ActionHub {
    pub unified_scan_result_actions: Rc<UnifiedScanResultActions>,
    pub card_selection_actions: Rc<CardSelectionActions>,
    pub scan_actions: Rc<ScanActions>,
    pub user_configuration_actions: Rc<UserConfigurationActions>,
    pub details_view_actions: Rc<DetailsViewActions>,
    pub visualization_actions: Rc<VisualizationActions>,
    pub assessment_actions: Rc<AssessmentActions>,
    pub feature_flag_actions: Rc<FeatureFlagActions>,
    pub launch_panel_actions: Rc<LaunchPanelActions>,
}

impl ActionHub {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Subscription made through [`StoreHub::add_change_listener`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubSubscription {
    ids: Vec<(&'static str, ListenerId)>,
}

pub struct StoreHub {
    stores: Vec<Rc<dyn StoreHandle>>,
}

impl StoreHub {
    pub fn new(stores: Vec<Rc<dyn StoreHandle>>) -> Self {
        Self { stores }
    }

    pub fn has_stores(&self) -> bool {
        !self.stores.is_empty()
    }

    /// True once every store has state
    pub fn has_store_data(&self) -> bool {
        self.stores.iter().all(|store| store.is_initialized())
    }

    pub fn store_names(&self) -> Vec<&'static str> {
        self.stores.iter().map(|store| store.store_name()).collect()
    }

    /// Snapshot of every initialized store, keyed by store name
    pub fn get_all_store_data(&self) -> Value {
        let data: Map<String, Value> = self
            .stores
            .iter()
            .filter_map(|store| {
                store
                    .state_json()
                    .map(|state| (store.store_name().to_string(), state))
            })
            .collect();
        Value::Object(data)
    }

    /// Sum of store versions; changes whenever any store emits
    pub fn combined_version(&self) -> u64 {
        self.stores.iter().map(|store| store.version()).sum()
    }

    pub fn add_change_listener(&self, listener: Rc<dyn Fn() -> ListenerResult>) -> HubSubscription {
        let ids = self
            .stores
            .iter()
            .map(|store| {
                (
                    store.store_name(),
                    store.add_state_change_listener(listener.clone()),
                )
            })
            .collect();
        HubSubscription { ids }
    }

    pub fn remove_change_listener(&self, subscription: &HubSubscription) {
        for (name, id) in &subscription.ids {
            if let Some(store) = self.stores.iter().find(|store| store.store_name() == *name) {
                store.remove_state_change_listener(*id);
            }
        }
    }
}
