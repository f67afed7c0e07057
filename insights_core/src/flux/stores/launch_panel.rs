// src/flux/stores/launch_panel.rs

use crate::flux::actions::LaunchPanelActions;
use crate::flux::errors::StoreError;
use crate::flux::payloads::SetLaunchPanelState;
use crate::flux::store::{add_store_listener, store_names, Store, StoreCore};
use crate::types::LaunchPanelStoreData;
use std::rc::Rc;

pub struct LaunchPanelStore {
    core: StoreCore<LaunchPanelStoreData>,
}

impl LaunchPanelStore {
    pub fn new(actions: &LaunchPanelActions) -> Rc<Self> {
        Rc::new_cyclic(|weak| {
            add_store_listener(&actions.set_launch_panel_type, weak, Self::on_set_launch_panel_type);
            Self {
                core: StoreCore::new(store_names::LAUNCH_PANEL_STORE),
            }
        })
    }

    pub fn initialize(&self) {
        self.core.initialize(LaunchPanelStoreData::default());
    }

    fn on_set_launch_panel_type(&self, payload: &SetLaunchPanelState) -> Result<(), StoreError> {
        self.core
            .update(|state| {
                let changed = state.launch_panel_type != payload.launch_panel_type;
                state.launch_panel_type = payload.launch_panel_type;
                changed
            })
            .map(|_| ())
    }
}

impl Store for LaunchPanelStore {
    type State = LaunchPanelStoreData;

    fn core(&self) -> &StoreCore<LaunchPanelStoreData> {
        &self.core
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LaunchPanelType;

    #[test]
    fn test_set_panel() {
        let actions = LaunchPanelActions::default();
        let store = LaunchPanelStore::new(&actions);
        store.initialize();

        actions
            .set_launch_panel_type
            .invoke(&SetLaunchPanelState {
                launch_panel_type: LaunchPanelType::AdhocToolsPanel,
            })
            .unwrap();

        assert_eq!(
            store.get_state().unwrap().launch_panel_type,
            LaunchPanelType::AdhocToolsPanel
        );
    }
}
