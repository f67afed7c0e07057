// src/flux/action_creators/user_configuration.rs

use super::register_routes;
use crate::flux::actions::UserConfigurationActions;
use crate::flux::errors::DispatchError;
use crate::flux::interpreter::Interpreter;
use crate::flux::payloads::{
    SetHighContrastModePayload, SetIssueFilingServicePayload,
    SetIssueFilingServicePropertyPayload, SetTelemetryStatePayload,
};
use std::rc::Rc;

pub struct UserConfigurationActionCreator {
    actions: Rc<UserConfigurationActions>,
}

impl UserConfigurationActionCreator {
    pub fn new(actions: Rc<UserConfigurationActions>) -> Rc<Self> {
        Rc::new(Self { actions })
    }

    pub fn register_callbacks(self: &Rc<Self>, interpreter: &Interpreter) {
        register_routes!(interpreter, self, {
            SetTelemetryConfig => Self::set_telemetry_state,
            SetHighContrastConfig => Self::set_high_contrast_mode,
            SetIssueFilingService => Self::set_issue_filing_service,
            SetIssueFilingServiceProperty => Self::set_issue_filing_service_property,
        });
    }

    pub fn set_telemetry_state(&self, payload: &SetTelemetryStatePayload) -> Result<(), DispatchError> {
        self.actions.set_telemetry_state.invoke(payload)
    }

    pub fn set_high_contrast_mode(&self, payload: &SetHighContrastModePayload) -> Result<(), DispatchError> {
        self.actions.set_high_contrast_mode.invoke(payload)
    }

    pub fn set_issue_filing_service(
        &self,
        payload: &SetIssueFilingServicePayload,
    ) -> Result<(), DispatchError> {
        self.actions.set_issue_filing_service.invoke(payload)
    }

    pub fn set_issue_filing_service_property(
        &self,
        payload: &SetIssueFilingServicePropertyPayload,
    ) -> Result<(), DispatchError> {
        self.actions.set_issue_filing_service_property.invoke(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flux::messages::{Message, MessageKind};
    use std::cell::Cell;

    #[test]
    fn test_registers_every_user_config_message() {
        let interpreter = Interpreter::new();
        let actions = Rc::new(UserConfigurationActions::default());
        UserConfigurationActionCreator::new(actions.clone()).register_callbacks(&interpreter);

        for kind in [
            MessageKind::SetTelemetryConfig,
            MessageKind::SetHighContrastConfig,
            MessageKind::SetIssueFilingService,
            MessageKind::SetIssueFilingServiceProperty,
        ] {
            assert_eq!(interpreter.callback_count(kind), 1);
        }

        let enabled = Rc::new(Cell::new(false));
        let sink = enabled.clone();
        actions.set_high_contrast_mode.add_listener(move |payload| {
            sink.set(payload.enable_high_contrast);
            Ok(())
        });

        interpreter
            .interpret(&Message::SetHighContrastConfig(SetHighContrastModePayload {
                enable_high_contrast: true,
            }))
            .unwrap();
        assert!(enabled.get());
    }
}
