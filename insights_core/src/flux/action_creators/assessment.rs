// src/flux/action_creators/assessment.rs

use super::{publish_if_present, register_routes};
use crate::flux::actions::AssessmentActions;
use crate::flux::errors::DispatchError;
use crate::flux::interpreter::Interpreter;
use crate::flux::payloads::{
    ChangeInstanceStatusPayload, SelectTestRequirementPayload, StartOverPayload,
};
use crate::telemetry::{events, TelemetryEventHandler};
use std::rc::Rc;

pub struct AssessmentActionCreator {
    actions: Rc<AssessmentActions>,
    telemetry: Rc<TelemetryEventHandler>,
}

impl AssessmentActionCreator {
    pub fn new(actions: Rc<AssessmentActions>, telemetry: Rc<TelemetryEventHandler>) -> Rc<Self> {
        Rc::new(Self { actions, telemetry })
    }

    pub fn register_callbacks(self: &Rc<Self>, interpreter: &Interpreter) {
        register_routes!(interpreter, self, {
            ChangeInstanceStatus => Self::on_change_instance_status,
            SelectTestRequirement => Self::on_select_test_requirement,
            StartOverTest => Self::on_start_over_test,
        });
    }

    fn on_change_instance_status(&self, payload: &ChangeInstanceStatusPayload) -> Result<(), DispatchError> {
        self.actions.change_instance_status.invoke(payload)?;
        publish_if_present(&self.telemetry, events::CHANGE_INSTANCE_STATUS, payload.telemetry.as_ref());
        Ok(())
    }

    fn on_select_test_requirement(
        &self,
        payload: &SelectTestRequirementPayload,
    ) -> Result<(), DispatchError> {
        self.actions.select_test_requirement.invoke(payload)?;
        publish_if_present(&self.telemetry, events::SELECT_REQUIREMENT, payload.telemetry.as_ref());
        Ok(())
    }

    fn on_start_over_test(&self, payload: &StartOverPayload) -> Result<(), DispatchError> {
        self.actions.start_over_test.invoke(payload)?;
        publish_if_present(&self.telemetry, events::START_OVER_TEST, payload.telemetry.as_ref());
        Ok(())
    }
}
