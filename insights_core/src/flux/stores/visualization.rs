// src/flux/stores/visualization.rs

use crate::flux::actions::VisualizationActions;
use crate::flux::errors::StoreError;
use crate::flux::store::{add_store_listener, store_names, Store, StoreCore};
use crate::types::VisualizationStoreData;
use std::rc::Rc;

pub struct VisualizationStore {
    core: StoreCore<VisualizationStoreData>,
}

impl VisualizationStore {
    pub fn new(actions: &VisualizationActions) -> Rc<Self> {
        Rc::new_cyclic(|weak| {
            add_store_listener(&actions.update_selected_targets, weak, Self::on_update_selected_targets);
            add_store_listener(&actions.update_focused_instance, weak, Self::on_update_focused_instance);
            Self {
                core: StoreCore::new(store_names::VISUALIZATION_STORE),
            }
        })
    }

    pub fn initialize(&self) {
        self.core.initialize(VisualizationStoreData::default());
    }

    fn on_update_selected_targets(&self, targets: &Vec<String>) -> Result<(), StoreError> {
        self.core
            .update(|state| {
                if state.selected_targets == *targets {
                    return false;
                }
                state.selected_targets = targets.clone();
                true
            })
            .map(|_| ())
    }

    /// An empty target clears the focus
    fn on_update_focused_instance(&self, target: &Vec<String>) -> Result<(), StoreError> {
        let focused = (!target.is_empty()).then(|| target.clone());
        self.core
            .update(|state| {
                if state.focused_target == focused {
                    return false;
                }
                state.focused_target = focused;
                true
            })
            .map(|_| ())
    }
}

impl Store for VisualizationStore {
    type State = VisualizationStoreData;

    fn core(&self) -> &StoreCore<VisualizationStoreData> {
        &self.core
    }
}
