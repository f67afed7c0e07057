// src/flux/stores/feature_flag.rs

use crate::flux::actions::FeatureFlagActions;
use crate::flux::errors::StoreError;
use crate::flux::payloads::SetFeatureFlagPayload;
use crate::flux::store::{add_store_listener, store_names, Store, StoreCore};
use crate::types::{feature_flags, FeatureFlagStoreData};
use std::rc::Rc;

pub struct FeatureFlagStore {
    core: StoreCore<FeatureFlagStoreData>,
}

impl FeatureFlagStore {
    pub fn new(actions: &FeatureFlagActions) -> Rc<Self> {
        Rc::new_cyclic(|weak| {
            add_store_listener(&actions.set_feature_flag, weak, Self::on_set_feature_flag);
            Self {
                core: StoreCore::new(store_names::FEATURE_FLAG_STORE),
            }
        })
    }

    pub fn initialize(&self) {
        self.core.initialize(feature_flags::defaults());
    }

    pub fn is_enabled(&self, feature: &str) -> bool {
        self.core
            .with_state(|flags| flags.get(feature).copied().unwrap_or(false))
            .unwrap_or(false)
    }

    fn on_set_feature_flag(&self, payload: &SetFeatureFlagPayload) -> Result<(), StoreError> {
        self.core
            .update(|flags| flags.insert(payload.feature.clone(), payload.enabled) != Some(payload.enabled))
            .map(|_| ())
    }
}

impl Store for FeatureFlagStore {
    type State = FeatureFlagStoreData;

    fn core(&self) -> &StoreCore<FeatureFlagStoreData> {
        &self.core
    }
}
