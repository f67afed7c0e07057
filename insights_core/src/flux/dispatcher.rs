// src/flux/dispatcher.rs
//! Dispatchers used by message creators

use crate::flux::errors::DispatchError;
use crate::flux::interpreter::Interpreter;
use crate::flux::messages::Message;
use crate::flux::payloads::SendTelemetryPayload;
use crate::telemetry::TelemetryData;
use std::cell::RefCell;
use std::rc::Rc;

pub trait ActionMessageDispatcher {
    fn dispatch_message(&self, message: Message) -> Result<(), DispatchError>;

    fn send_telemetry(&self, event_name: &str, telemetry: TelemetryData) -> Result<(), DispatchError> {
        self.dispatch_message(Message::SendTelemetry(SendTelemetryPayload {
            event_name: event_name.to_string(),
            telemetry,
        }))
    }
}

/// Hands messages straight to an in-process interpreter
#[derive(Debug, Clone)]
pub struct DirectActionMessageDispatcher {
    interpreter: Rc<Interpreter>,
    log_dispatch_events: bool,
}

impl DirectActionMessageDispatcher {
    pub fn new(interpreter: Rc<Interpreter>) -> Self {
        Self {
            interpreter,
            log_dispatch_events: false,
        }
    }

    pub fn with_dispatch_logging(mut self, enabled: bool) -> Self {
        self.log_dispatch_events = enabled;
        self
    }
}

impl ActionMessageDispatcher for DirectActionMessageDispatcher {
    fn dispatch_message(&self, message: Message) -> Result<(), DispatchError> {
        if self.log_dispatch_events {
            crate::log_debug!("Dispatching message", "message_type" => message.message_type());
        }

        self.interpreter.interpret(&message).map(|_| ())
    }
}

/// Keeps dispatched messages for assertions instead of interpreting them
#[derive(Debug, Default)]
pub struct RecordingMessageDispatcher {
    messages: RefCell<Vec<Message>>,
}

impl RecordingMessageDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.messages.borrow().clone()
    }

    pub fn take_messages(&self) -> Vec<Message> {
        self.messages.borrow_mut().drain(..).collect()
    }
}

impl ActionMessageDispatcher for RecordingMessageDispatcher {
    fn dispatch_message(&self, message: Message) -> Result<(), DispatchError> {
        self.messages.borrow_mut().push(message);
        Ok(())
    }
}
