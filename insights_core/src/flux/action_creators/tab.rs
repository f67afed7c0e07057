// src/flux/action_creators/tab.rs
//! Messages handled by the host window rather than a store

use super::{publish_if_present, register_routes};
use crate::flux::errors::DispatchError;
use crate::flux::interpreter::Interpreter;
use crate::flux::messages::MessageKind;
use crate::flux::payloads::BaseActionPayload;
use crate::telemetry::{events, TelemetryEventHandler};
use std::rc::Rc;

pub type TabControllerResult = Result<(), Box<dyn std::error::Error>>;

/// Window operations owned by the host
pub trait TabController {
    /// Bring the page under test back to the front
    fn switch_to_target_tab(&self) -> TabControllerResult;

    fn open_shortcut_configuration(&self) -> TabControllerResult;
}

pub struct TabActionCreator {
    controller: Rc<dyn TabController>,
    telemetry: Rc<TelemetryEventHandler>,
}

impl TabActionCreator {
    pub fn new(controller: Rc<dyn TabController>, telemetry: Rc<TelemetryEventHandler>) -> Rc<Self> {
        Rc::new(Self { controller, telemetry })
    }

    pub fn register_callbacks(self: &Rc<Self>, interpreter: &Interpreter) {
        register_routes!(interpreter, self, {
            SwitchTab => Self::on_switch_tab,
            ConfigureShortcuts => Self::on_configure_shortcuts,
        });
    }

    fn on_switch_tab(&self, payload: &BaseActionPayload) -> Result<(), DispatchError> {
        self.controller
            .switch_to_target_tab()
            .map_err(|e| collaborator_failed(MessageKind::SwitchTab, e))?;
        publish_if_present(&self.telemetry, events::SWITCH_BACK_TO_TARGET, payload.telemetry.as_ref());
        Ok(())
    }

    fn on_configure_shortcuts(&self, payload: &BaseActionPayload) -> Result<(), DispatchError> {
        self.controller
            .open_shortcut_configuration()
            .map_err(|e| collaborator_failed(MessageKind::ConfigureShortcuts, e))?;
        publish_if_present(&self.telemetry, events::SHORTCUT_CONFIGURE_OPEN, payload.telemetry.as_ref());
        Ok(())
    }
}

fn collaborator_failed(kind: MessageKind, error: Box<dyn std::error::Error>) -> DispatchError {
    DispatchError::collaborator_failed(kind.message_type(), &error.to_string())
}
