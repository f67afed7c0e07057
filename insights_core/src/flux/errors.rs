// src/flux/errors.rs
//! Error types for the dispatch layer

use thiserror::Error;

/// Failure reported by a store subscriber
pub type ListenerError = Box<dyn std::error::Error>;

/// What a store subscriber returns
pub type ListenerResult = Result<(), ListenerError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Some subscribers failed; every subscriber was still called
    #[error("Store '{store}' has {} failing listener(s): {}", failures.len(), failures.join("; "))]
    ListenerFailures { store: String, failures: Vec<String> },

    /// State changed but could not be written back to storage
    #[error("Store '{store}' failed to persist state: {cause}")]
    PersistFailed { store: String, cause: String },
}

impl StoreError {
    pub fn listener_failures(store: &str, failures: Vec<String>) -> Self {
        Self::ListenerFailures {
            store: store.to_string(),
            failures,
        }
    }

    pub fn persist_failed(store: &str, cause: &str) -> Self {
        Self::PersistFailed {
            store: store.to_string(),
            cause: cause.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// Some interpreter callbacks failed; every callback was still called
    #[error("{} handler(s) failed for '{message_type}': {}", failures.len(), failures.join("; "))]
    HandlersFailed {
        message_type: String,
        failures: Vec<String>,
    },

    /// Some action listeners (stores) failed while handling an action
    #[error("Action '{action}' failed in {} listener(s): {}", failures.len(), failures.join("; "))]
    ActionFailed { action: String, failures: Vec<String> },

    /// An action was invoked from inside another action's listeners
    #[error("Cannot invoke action '{action}' while action '{executing}' is executing")]
    NestedInvocation { action: String, executing: String },

    /// A collaborator outside the store graph failed (tab switching, scanning)
    #[error("Handler for '{message_type}' failed: {cause}")]
    CollaboratorFailed { message_type: String, cause: String },
}

impl DispatchError {
    pub fn handlers_failed(message_type: &str, failures: Vec<String>) -> Self {
        Self::HandlersFailed {
            message_type: message_type.to_string(),
            failures,
        }
    }

    pub fn action_failed(action: &str, failures: Vec<String>) -> Self {
        Self::ActionFailed {
            action: action.to_string(),
            failures,
        }
    }

    pub fn collaborator_failed(message_type: &str, cause: &str) -> Self {
        Self::CollaboratorFailed {
            message_type: message_type.to_string(),
            cause: cause.to_string(),
        }
    }
}
