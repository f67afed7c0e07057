// src/flux/action_creators/card_selection.rs

use super::{publish_if_present, register_routes};
use crate::flux::actions::CardSelectionActions;
use crate::flux::errors::DispatchError;
use crate::flux::interpreter::Interpreter;
use crate::flux::payloads::{BaseActionPayload, CardSelectionPayload, RuleExpandCollapsePayload};
use crate::telemetry::{events, TelemetryEventHandler};
use std::rc::Rc;

pub struct CardSelectionActionCreator {
    actions: Rc<CardSelectionActions>,
    telemetry: Rc<TelemetryEventHandler>,
}

impl CardSelectionActionCreator {
    pub fn new(actions: Rc<CardSelectionActions>, telemetry: Rc<TelemetryEventHandler>) -> Rc<Self> {
        Rc::new(Self { actions, telemetry })
    }

    pub fn register_callbacks(self: &Rc<Self>, interpreter: &Interpreter) {
        register_routes!(interpreter, self, {
            CardSelectionToggled => Self::on_toggle_card_selection,
            RuleExpansionToggled => Self::on_toggle_rule_expand_collapse,
            ToggleVisualHelper => Self::on_toggle_visual_helper,
            CollapseAllRules => Self::on_collapse_all_rules,
            ExpandAllRules => Self::on_expand_all_rules,
        });
    }

    fn on_toggle_card_selection(&self, payload: &CardSelectionPayload) -> Result<(), DispatchError> {
        self.actions.toggle_card_selection.invoke(payload)?;
        publish_if_present(
            &self.telemetry,
            events::CARD_SELECTION_TOGGLED,
            payload.telemetry.as_ref(),
        );
        Ok(())
    }

    fn on_toggle_rule_expand_collapse(
        &self,
        payload: &RuleExpandCollapsePayload,
    ) -> Result<(), DispatchError> {
        self.actions.toggle_rule_expand_collapse.invoke(payload)?;
        publish_if_present(
            &self.telemetry,
            events::RULE_EXPANSION_TOGGLED,
            payload.telemetry.as_ref(),
        );
        Ok(())
    }

    fn on_toggle_visual_helper(&self, payload: &BaseActionPayload) -> Result<(), DispatchError> {
        self.actions.toggle_visual_helper.invoke(&())?;
        publish_if_present(&self.telemetry, events::VISUAL_HELPER_TOGGLED, payload.telemetry.as_ref());
        Ok(())
    }

    fn on_collapse_all_rules(&self, payload: &BaseActionPayload) -> Result<(), DispatchError> {
        self.actions.collapse_all_rules.invoke(&())?;
        publish_if_present(&self.telemetry, events::ALL_RULES_COLLAPSED, payload.telemetry.as_ref());
        Ok(())
    }

    fn on_expand_all_rules(&self, payload: &BaseActionPayload) -> Result<(), DispatchError> {
        self.actions.expand_all_rules.invoke(&())?;
        publish_if_present(&self.telemetry, events::ALL_RULES_EXPANDED, payload.telemetry.as_ref());
        Ok(())
    }
}
