// src/flux/stores/assessment.rs
//! Manual assessment progress: the selected requirement and per-instance
//! verdicts recorded by the user

use crate::flux::actions::AssessmentActions;
use crate::flux::errors::StoreError;
use crate::flux::payloads::{
    ChangeInstanceStatusPayload, SelectTestRequirementPayload, StartOverPayload,
};
use crate::flux::store::{add_store_listener, store_names, Store, StoreCore};
use crate::types::AssessmentStoreData;
use std::rc::Rc;

pub struct AssessmentStore {
    core: StoreCore<AssessmentStoreData>,
}

impl AssessmentStore {
    pub fn new(actions: &AssessmentActions) -> Rc<Self> {
        Rc::new_cyclic(|weak| {
            add_store_listener(&actions.change_instance_status, weak, Self::on_change_instance_status);
            add_store_listener(&actions.select_test_requirement, weak, Self::on_select_test_requirement);
            add_store_listener(&actions.start_over_test, weak, Self::on_start_over_test);
            Self {
                core: StoreCore::new(store_names::ASSESSMENT_STORE),
            }
        })
    }

    pub fn initialize(&self) {
        self.core.initialize(AssessmentStoreData::default());
    }

    fn on_change_instance_status(&self, payload: &ChangeInstanceStatusPayload) -> Result<(), StoreError> {
        self.core
            .update(|state| {
                let previous = state
                    .instance_statuses
                    .entry(payload.test)
                    .or_default()
                    .entry(payload.requirement.clone())
                    .or_default()
                    .insert(payload.selector.clone(), payload.status);
                previous != Some(payload.status)
            })
            .map(|_| ())
    }

    fn on_select_test_requirement(&self, payload: &SelectTestRequirementPayload) -> Result<(), StoreError> {
        self.core
            .update(|state| {
                let test = Some(payload.selected_test);
                let requirement = Some(payload.selected_requirement.clone());
                if state.selected_test == test && state.selected_requirement == requirement {
                    return false;
                }
                state.selected_test = test;
                state.selected_requirement = requirement;
                true
            })
            .map(|_| ())
    }

    /// Forget every verdict recorded for the requirement
    fn on_start_over_test(&self, payload: &StartOverPayload) -> Result<(), StoreError> {
        self.core
            .update(|state| {
                let Some(requirements) = state.instance_statuses.get_mut(&payload.test) else {
                    return false;
                };
                let removed = requirements.remove(&payload.requirement).is_some();
                if requirements.is_empty() {
                    state.instance_statuses.remove(&payload.test);
                }
                removed
            })
            .map(|_| ())
    }
}

impl Store for AssessmentStore {
    type State = AssessmentStoreData;

    fn core(&self) -> &StoreCore<AssessmentStoreData> {
        &self.core
    }
}
