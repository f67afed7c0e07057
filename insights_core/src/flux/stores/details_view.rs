// src/flux/stores/details_view.rs

use crate::flux::actions::DetailsViewActions;
use crate::flux::errors::StoreError;
use crate::flux::payloads::{OnDetailsViewOpenPayload, OnDetailsViewPivotSelected};
use crate::flux::store::{add_store_listener, store_names, Store, StoreCore};
use crate::types::{DetailsViewContentPanel, DetailsViewStoreData};
use std::rc::Rc;

/// Which details view is open and which side panel it shows
pub struct DetailsViewStore {
    core: StoreCore<DetailsViewStoreData>,
}

impl DetailsViewStore {
    pub fn new(actions: &DetailsViewActions) -> Rc<Self> {
        Rc::new_cyclic(|weak| {
            add_store_listener(&actions.open_details_view, weak, Self::on_open_details_view);
            add_store_listener(&actions.select_details_view, weak, Self::on_select_details_view);
            add_store_listener(&actions.pivot_selected, weak, Self::on_pivot_selected);
            add_store_listener(&actions.open_settings_panel, weak, Self::on_open_settings_panel);
            add_store_listener(&actions.close_settings_panel, weak, Self::on_close_settings_panel);
            add_store_listener(
                &actions.close_preview_features_panel,
                weak,
                Self::on_close_preview_features_panel,
            );
            add_store_listener(&actions.close_scoping_panel, weak, Self::on_close_scoping_panel);
            Self {
                core: StoreCore::new(store_names::DETAILS_VIEW_STORE),
            }
        })
    }

    pub fn initialize(&self) {
        self.core.initialize(DetailsViewStoreData::default());
    }

    fn on_open_details_view(&self, payload: &OnDetailsViewOpenPayload) -> Result<(), StoreError> {
        self.apply(|state| {
            state.is_open = true;
            state.selected_details_view = Some(payload.details_view_type);
            state.selected_pivot = payload.pivot_type;
            state.current_panel = DetailsViewContentPanel::default();
        })
    }

    fn on_select_details_view(&self, payload: &OnDetailsViewOpenPayload) -> Result<(), StoreError> {
        self.apply(|state| {
            state.selected_details_view = Some(payload.details_view_type);
            state.selected_pivot = payload.pivot_type;
        })
    }

    fn on_pivot_selected(&self, payload: &OnDetailsViewPivotSelected) -> Result<(), StoreError> {
        self.apply(|state| state.selected_pivot = payload.pivot_key)
    }

    fn on_open_settings_panel(&self, _: &()) -> Result<(), StoreError> {
        self.apply(|state| {
            state.current_panel = DetailsViewContentPanel {
                is_settings_open: true,
                ..DetailsViewContentPanel::default()
            }
        })
    }

    fn on_close_settings_panel(&self, _: &()) -> Result<(), StoreError> {
        self.apply(|state| state.current_panel.is_settings_open = false)
    }

    fn on_close_preview_features_panel(&self, _: &()) -> Result<(), StoreError> {
        self.apply(|state| state.current_panel.is_preview_features_open = false)
    }

    fn on_close_scoping_panel(&self, _: &()) -> Result<(), StoreError> {
        self.apply(|state| state.current_panel.is_scoping_open = false)
    }

    /// Emit only when `change` actually altered the state
    fn apply(&self, change: impl FnOnce(&mut DetailsViewStoreData)) -> Result<(), StoreError> {
        self.core
            .update(|state| {
                let before = state.clone();
                change(state);
                *state != before
            })
            .map(|_| ())
    }
}

impl Store for DetailsViewStore {
    type State = DetailsViewStoreData;

    fn core(&self) -> &StoreCore<DetailsViewStoreData> {
        &self.core
    }
}
