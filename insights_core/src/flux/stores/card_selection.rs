// src/flux/stores/card_selection.rs
//! Expansion and selection state of the failure cards
//!
//! Rebuilt from scratch on every completed scan: one collapsed rule per failing
//! rule id, every failing result an unselected card.

use crate::flux::actions::{CardSelectionActions, UnifiedScanResultActions};
use crate::flux::errors::StoreError;
use crate::flux::payloads::{CardSelectionPayload, RuleExpandCollapsePayload};
use crate::flux::store::{add_store_listener, store_names, Store, StoreCore};
use crate::logging::codes;
use crate::types::{
    CardSelectionStoreData, InstanceResultStatus, RuleExpandCollapseData,
    UnifiedScanCompletedPayload,
};
use std::rc::Rc;

pub struct CardSelectionStore {
    core: StoreCore<CardSelectionStoreData>,
}

impl CardSelectionStore {
    pub fn new(
        card_selection_actions: &CardSelectionActions,
        unified_scan_result_actions: &UnifiedScanResultActions,
    ) -> Rc<Self> {
        Rc::new_cyclic(|weak| {
            add_store_listener(
                &card_selection_actions.toggle_card_selection,
                weak,
                Self::on_toggle_card_selection,
            );
            add_store_listener(
                &card_selection_actions.toggle_rule_expand_collapse,
                weak,
                Self::on_toggle_rule_expand_collapse,
            );
            add_store_listener(
                &card_selection_actions.toggle_visual_helper,
                weak,
                Self::on_toggle_visual_helper,
            );
            add_store_listener(
                &card_selection_actions.collapse_all_rules,
                weak,
                Self::on_collapse_all_rules,
            );
            add_store_listener(
                &card_selection_actions.expand_all_rules,
                weak,
                Self::on_expand_all_rules,
            );
            add_store_listener(
                &unified_scan_result_actions.scan_completed,
                weak,
                Self::on_unified_scan_completed,
            );

            Self {
                core: StoreCore::new(store_names::CARD_SELECTION_STORE),
            }
        })
    }

    pub fn initialize(&self) {
        self.core.initialize(CardSelectionStoreData::default());
    }

    fn on_toggle_card_selection(&self, payload: &CardSelectionPayload) -> Result<(), StoreError> {
        self.core
            .update(|state| {
                let Some(selected) = state
                    .rules
                    .get_mut(&payload.rule_id)
                    .and_then(|rule| rule.cards.get_mut(&payload.result_instance_uid))
                else {
                    crate::log_warning!(
                        code = codes::store::UNKNOWN_CARD,
                        "Ignoring selection toggle for unknown card",
                        "rule_id" => payload.rule_id,
                        "result_uid" => payload.result_instance_uid
                    );
                    return false;
                };

                *selected = !*selected;
                if *selected {
                    state.visual_helper_enabled = true;
                }
                true
            })
            .map(|_| ())
    }

    fn on_toggle_rule_expand_collapse(
        &self,
        payload: &RuleExpandCollapsePayload,
    ) -> Result<(), StoreError> {
        self.core
            .update(|state| {
                let Some(rule) = state.rules.get_mut(&payload.rule_id) else {
                    crate::log_warning!(
                        code = codes::store::UNKNOWN_CARD,
                        "Ignoring expand toggle for unknown rule",
                        "rule_id" => payload.rule_id
                    );
                    return false;
                };

                rule.is_expanded = !rule.is_expanded;
                if !rule.is_expanded {
                    deselect_cards(rule);
                }
                true
            })
            .map(|_| ())
    }

    fn on_toggle_visual_helper(&self, _: &()) -> Result<(), StoreError> {
        self.core
            .update(|state| {
                state.visual_helper_enabled = !state.visual_helper_enabled;
                if !state.visual_helper_enabled {
                    state.rules.values_mut().for_each(deselect_cards);
                }
                true
            })
            .map(|_| ())
    }

    fn on_collapse_all_rules(&self, _: &()) -> Result<(), StoreError> {
        self.core
            .update(|state| {
                for rule in state.rules.values_mut() {
                    rule.is_expanded = false;
                    deselect_cards(rule);
                }
                true
            })
            .map(|_| ())
    }

    fn on_expand_all_rules(&self, _: &()) -> Result<(), StoreError> {
        self.core
            .update(|state| {
                for rule in state.rules.values_mut() {
                    rule.is_expanded = true;
                }
                true
            })
            .map(|_| ())
    }

    fn on_unified_scan_completed(
        &self,
        payload: &UnifiedScanCompletedPayload,
    ) -> Result<(), StoreError> {
        self.core
            .update(|state| {
                state.rules.clear();
                for result in payload
                    .scan_result
                    .iter()
                    .filter(|result| result.status == InstanceResultStatus::Fail)
                {
                    state
                        .rules
                        .entry(result.rule_id.clone())
                        .or_insert_with(RuleExpandCollapseData::default)
                        .cards
                        .insert(result.uid.clone(), false);
                }
                true
            })
            .map(|_| ())
    }
}

fn deselect_cards(rule: &mut RuleExpandCollapseData) {
    rule.cards.values_mut().for_each(|selected| *selected = false);
}

impl Store for CardSelectionStore {
    type State = CardSelectionStoreData;

    fn core(&self) -> &StoreCore<CardSelectionStoreData> {
        &self.core
    }
}
