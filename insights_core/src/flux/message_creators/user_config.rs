// src/flux/message_creators/user_config.rs

use crate::flux::dispatcher::ActionMessageDispatcher;
use crate::flux::errors::DispatchError;
use crate::flux::messages::Message;
use crate::flux::payloads::{
    SetHighContrastModePayload, SetIssueFilingServicePayload,
    SetIssueFilingServicePropertyPayload, SetTelemetryStatePayload,
};
use std::rc::Rc;

pub struct UserConfigMessageCreator {
    dispatcher: Rc<dyn ActionMessageDispatcher>,
}

impl UserConfigMessageCreator {
    pub fn new(dispatcher: Rc<dyn ActionMessageDispatcher>) -> Self {
        Self { dispatcher }
    }

    pub fn set_telemetry_state(&self, enable_telemetry: bool) -> Result<(), DispatchError> {
        self.dispatcher
            .dispatch_message(Message::SetTelemetryConfig(SetTelemetryStatePayload { enable_telemetry }))
    }

    pub fn set_high_contrast_mode(&self, enable_high_contrast: bool) -> Result<(), DispatchError> {
        self.dispatcher
            .dispatch_message(Message::SetHighContrastConfig(SetHighContrastModePayload {
                enable_high_contrast,
            }))
    }

    pub fn set_issue_filing_service(&self, issue_filing_service_name: &str) -> Result<(), DispatchError> {
        self.dispatcher
            .dispatch_message(Message::SetIssueFilingService(SetIssueFilingServicePayload {
                issue_filing_service_name: issue_filing_service_name.to_string(),
            }))
    }

    pub fn set_issue_filing_service_property(
        &self,
        issue_filing_service_name: &str,
        property_name: &str,
        property_value: &str,
    ) -> Result<(), DispatchError> {
        self.dispatcher.dispatch_message(Message::SetIssueFilingServiceProperty(
            SetIssueFilingServicePropertyPayload {
                issue_filing_service_name: issue_filing_service_name.to_string(),
                property_name: property_name.to_string(),
                property_value: property_value.to_string(),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flux::dispatcher::RecordingMessageDispatcher;

    #[test]
    fn test_user_config_messages() {
        let dispatcher = Rc::new(RecordingMessageDispatcher::new());
        let creator = UserConfigMessageCreator::new(dispatcher.clone());

        creator.set_telemetry_state(true).unwrap();
        creator.set_issue_filing_service_property("gitHub", "repository", "org/repo").unwrap();

        assert_eq!(
            dispatcher.take_messages(),
            vec![
                Message::SetTelemetryConfig(SetTelemetryStatePayload {
                    enable_telemetry: true
                }),
                Message::SetIssueFilingServiceProperty(SetIssueFilingServicePropertyPayload {
                    issue_filing_service_name: "gitHub".to_string(),
                    property_name: "repository".to_string(),
                    property_value: "org/repo".to_string(),
                }),
            ]
        );
    }
}
