// src/flux/message_creators/card_selection.rs

use crate::flux::dispatcher::ActionMessageDispatcher;
use crate::flux::errors::DispatchError;
use crate::flux::messages::Message;
use crate::flux::payloads::{BaseActionPayload, CardSelectionPayload, RuleExpandCollapsePayload};
use crate::telemetry::{TelemetryDataFactory, TelemetryEventSource, UserEvent};
use std::rc::Rc;

pub struct CardSelectionMessageCreator {
    dispatcher: Rc<dyn ActionMessageDispatcher>,
    telemetry_factory: TelemetryDataFactory,
    source: TelemetryEventSource,
}

impl CardSelectionMessageCreator {
    pub fn new(
        dispatcher: Rc<dyn ActionMessageDispatcher>,
        telemetry_factory: TelemetryDataFactory,
        source: TelemetryEventSource,
    ) -> Self {
        Self {
            dispatcher,
            telemetry_factory,
            source,
        }
    }

    pub fn toggle_card_selection(
        &self,
        rule_id: &str,
        result_instance_uid: &str,
        event: UserEvent,
    ) -> Result<(), DispatchError> {
        self.dispatcher
            .dispatch_message(Message::CardSelectionToggled(CardSelectionPayload {
                rule_id: rule_id.to_string(),
                result_instance_uid: result_instance_uid.to_string(),
                telemetry: Some(self.telemetry(event)),
            }))
    }

    pub fn toggle_rule_expand_collapse(&self, rule_id: &str, event: UserEvent) -> Result<(), DispatchError> {
        self.dispatcher
            .dispatch_message(Message::RuleExpansionToggled(RuleExpandCollapsePayload {
                rule_id: rule_id.to_string(),
                telemetry: Some(self.telemetry(event)),
            }))
    }

    pub fn toggle_visual_helper(&self, event: UserEvent) -> Result<(), DispatchError> {
        self.dispatcher
            .dispatch_message(Message::ToggleVisualHelper(self.base_payload(event)))
    }

    pub fn collapse_all_rules(&self, event: UserEvent) -> Result<(), DispatchError> {
        self.dispatcher
            .dispatch_message(Message::CollapseAllRules(self.base_payload(event)))
    }

    pub fn expand_all_rules(&self, event: UserEvent) -> Result<(), DispatchError> {
        self.dispatcher
            .dispatch_message(Message::ExpandAllRules(self.base_payload(event)))
    }

    fn telemetry(&self, event: UserEvent) -> crate::telemetry::TelemetryData {
        self.telemetry_factory
            .with_triggered_by_and_source(event, self.source)
    }

    fn base_payload(&self, event: UserEvent) -> BaseActionPayload {
        BaseActionPayload::with_telemetry(self.telemetry(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flux::dispatcher::RecordingMessageDispatcher;
    use crate::telemetry::{TelemetryData, TriggeredBy};

    fn creator() -> (Rc<RecordingMessageDispatcher>, CardSelectionMessageCreator) {
        let dispatcher = Rc::new(RecordingMessageDispatcher::new());
        let creator = CardSelectionMessageCreator::new(
            dispatcher.clone(),
            TelemetryDataFactory::new(),
            TelemetryEventSource::ResultsView,
        );
        (dispatcher, creator)
    }

    #[test]
    fn test_toggle_card_selection() {
        let (dispatcher, creator) = creator();

        creator
            .toggle_card_selection("ColorContrast", "uid-3", UserEvent::KeyPress)
            .unwrap();

        assert_eq!(
            dispatcher.take_messages(),
            vec![Message::CardSelectionToggled(CardSelectionPayload {
                rule_id: "ColorContrast".to_string(),
                result_instance_uid: "uid-3".to_string(),
                telemetry: Some(TelemetryData::new(
                    TriggeredBy::KeyPress,
                    TelemetryEventSource::ResultsView
                )),
            })]
        );
    }

    #[test]
    fn test_bulk_operations_dispatch_once_each() {
        let (dispatcher, creator) = creator();

        creator.collapse_all_rules(UserEvent::MouseClick).unwrap();
        creator.expand_all_rules(UserEvent::MouseClick).unwrap();
        creator.toggle_visual_helper(UserEvent::Shortcut).unwrap();

        let types: Vec<&str> = dispatcher
            .messages()
            .iter()
            .map(Message::message_type)
            .collect();
        assert_eq!(
            types,
            vec![
                "CardSelection.CollapseAllRules",
                "CardSelection.ExpandAllRules",
                "CardSelection.ToggleVisualHelper"
            ]
        );
    }
}
