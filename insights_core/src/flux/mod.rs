//! Unidirectional data flow for the results UI
//!
//! Message creators turn user intents into [`Message`]s. A dispatcher hands
//! them to the [`Interpreter`], whose callbacks (action creators) invoke typed
//! [`Action`]s. Stores listen to actions, update their state and notify their
//! own subscribers. Everything runs synchronously on one thread.

pub mod action;
pub mod action_creators;
pub mod actions;
pub mod dispatcher;
pub mod errors;
pub mod hub;
pub mod interpreter;
pub mod message_creators;
pub mod messages;
pub mod payloads;
pub mod store;
pub mod stores;

pub use action::Action;
pub use dispatcher::{ActionMessageDispatcher, DirectActionMessageDispatcher, RecordingMessageDispatcher};
pub use errors::{DispatchError, ListenerError, ListenerResult, StoreError};
pub use hub::{ActionHub, HubSubscription, StoreHub};
pub use interpreter::{Interpreter, InterpreterResponse};
pub use messages::{Message, MessageKind};
pub use store::{store_names, ListenerId, Store, StoreCore, StoreHandle};
