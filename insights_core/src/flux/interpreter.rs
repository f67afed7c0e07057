// src/flux/interpreter.rs
//! Routes messages to the callbacks registered for their kind

use crate::flux::errors::DispatchError;
use crate::flux::messages::{Message, MessageKind};
use crate::logging::codes;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub type InterpreterCallback = Rc<dyn Fn(&Message) -> Result<(), DispatchError>>;

/// Outcome of interpreting one message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterResponse {
    pub message_handled: bool,
    pub callbacks_run: usize,
}

#[derive(Default)]
pub struct Interpreter {
    routes: RefCell<HashMap<MessageKind, Vec<InterpreterCallback>>>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_type_to_payload_callback(
        &self,
        kind: MessageKind,
        callback: impl Fn(&Message) -> Result<(), DispatchError> + 'static,
    ) {
        self.routes
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(Rc::new(callback));
    }

    pub fn callback_count(&self, kind: MessageKind) -> usize {
        self.routes.borrow().get(&kind).map(Vec::len).unwrap_or(0)
    }

    /// Run every callback registered for the message's kind, in order
    ///
    /// All callbacks run even when some fail; failures are returned together.
    /// A message nobody registered for is reported as not handled.
    pub fn interpret(&self, message: &Message) -> Result<InterpreterResponse, DispatchError> {
        let callbacks: Vec<InterpreterCallback> = self
            .routes
            .borrow()
            .get(&message.kind())
            .cloned()
            .unwrap_or_default();

        if callbacks.is_empty() {
            crate::log_warning!(
                code = codes::dispatch::UNHANDLED_MESSAGE,
                "No callback registered for message",
                "message_type" => message.message_type()
            );
            return Ok(InterpreterResponse {
                message_handled: false,
                callbacks_run: 0,
            });
        }

        let mut failures = Vec::new();
        for callback in &callbacks {
            if let Err(error) = callback(message) {
                crate::log_error!(
                    codes::dispatch::HANDLER_FAILED,
                    "Message handler failed",
                    "message_type" => message.message_type(),
                    "error" => error
                );
                failures.push(error.to_string());
            }
        }

        if failures.is_empty() {
            Ok(InterpreterResponse {
                message_handled: true,
                callbacks_run: callbacks.len(),
            })
        } else {
            Err(DispatchError::handlers_failed(message.message_type(), failures))
        }
    }
}

impl std::fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let routes = self.routes.borrow();
        f.debug_struct("Interpreter")
            .field("registered_kinds", &routes.len())
            .finish()
    }
}
