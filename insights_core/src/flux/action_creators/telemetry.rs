// src/flux/action_creators/telemetry.rs

use super::register_routes;
use crate::flux::errors::DispatchError;
use crate::flux::interpreter::Interpreter;
use crate::flux::payloads::SendTelemetryPayload;
use crate::telemetry::TelemetryEventHandler;
use std::rc::Rc;

/// Forwards `Telemetry.Send` to the handler; no action is invoked
pub struct TelemetryActionCreator {
    telemetry: Rc<TelemetryEventHandler>,
}

impl TelemetryActionCreator {
    pub fn new(telemetry: Rc<TelemetryEventHandler>) -> Rc<Self> {
        Rc::new(Self { telemetry })
    }

    pub fn register_callbacks(self: &Rc<Self>, interpreter: &Interpreter) {
        register_routes!(interpreter, self, {
            SendTelemetry => Self::on_send_telemetry,
        });
    }

    fn on_send_telemetry(&self, payload: &SendTelemetryPayload) -> Result<(), DispatchError> {
        self.telemetry
            .publish_telemetry(&payload.event_name, &payload.telemetry);
        Ok(())
    }
}
