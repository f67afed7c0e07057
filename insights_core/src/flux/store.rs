// src/flux/store.rs
//! Store state container shared by every concrete store
//!
//! A store starts uninitialized. `initialize` installs the first state; after
//! that each applied update bumps the version and notifies subscribers with a
//! snapshot of the new state.

use crate::flux::action::Action;
use crate::flux::errors::{ListenerResult, StoreError};
use crate::logging::codes;
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Handle returned by `add_change_listener`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type ChangeListener<S> = Rc<dyn Fn(&S) -> ListenerResult>;

/// Store names as used in logs and the store hub
pub mod store_names {
    pub const UNIFIED_SCAN_RESULT_STORE: &str = "UnifiedScanResultStore";
    pub const CARD_SELECTION_STORE: &str = "CardSelectionStore";
    pub const SCAN_STORE: &str = "ScanStore";
    pub const USER_CONFIGURATION_STORE: &str = "UserConfigurationStore";
    pub const DETAILS_VIEW_STORE: &str = "DetailsViewStore";
    pub const ASSESSMENT_STORE: &str = "AssessmentStore";
    pub const FEATURE_FLAG_STORE: &str = "FeatureFlagStore";
    pub const LAUNCH_PANEL_STORE: &str = "LaunchPanelStore";
    pub const VISUALIZATION_STORE: &str = "VisualizationStore";
}

pub struct StoreCore<S> {
    name: &'static str,
    state: RefCell<Option<S>>,
    version: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, ChangeListener<S>)>>,
    next_listener_id: Cell<u64>,
}

impl<S: Clone> StoreCore<S> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: RefCell::new(None),
            version: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
            next_listener_id: Cell::new(0),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn version(&self) -> u64 {
        self.version.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Install the first state; a second call replaces it without notifying
    pub fn initialize(&self, initial_state: S) {
        *self.state.borrow_mut() = Some(initial_state);
    }

    /// Snapshot of the current state, `None` before `initialize`
    pub fn get_state(&self) -> Option<S> {
        self.state.borrow().clone()
    }

    /// Read the state in place
    pub fn with_state<R>(&self, read: impl FnOnce(&S) -> R) -> Option<R> {
        self.state.borrow().as_ref().map(read)
    }

    pub fn add_change_listener(&self, listener: impl Fn(&S) -> ListenerResult + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id.get());
        self.next_listener_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn remove_change_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Apply an action's effect to the state
    ///
    /// `apply` returns whether anything changed; only changes bump the version
    /// and notify subscribers.
    ///
    /// # Panics
    ///
    /// When the store has not been initialized. Actions reaching an
    /// uninitialized store mean the store graph was wired incorrectly.
    pub fn update(&self, apply: impl FnOnce(&mut S) -> bool) -> Result<bool, StoreError> {
        let changed = {
            let mut state = self.state.borrow_mut();
            let Some(state) = state.as_mut() else {
                panic!(
                    "Store '{}' received an action before it was initialized",
                    self.name
                );
            };
            apply(state)
        };

        if !changed {
            return Ok(false);
        }

        self.version.set(self.version.get() + 1);
        self.emit_changed()?;
        Ok(true)
    }

    /// Notify every subscriber with the current state
    ///
    /// Each subscriber is called even if an earlier one fails.
    pub fn emit_changed(&self) -> Result<(), StoreError> {
        let Some(snapshot) = self.get_state() else {
            return Ok(());
        };
        let listeners: Vec<ChangeListener<S>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        let mut failures = Vec::new();
        for listener in listeners {
            if let Err(error) = listener(&snapshot) {
                crate::log_error!(
                    codes::store::LISTENER_FAILED,
                    "Store listener failed",
                    "store" => self.name,
                    "error" => error
                );
                failures.push(error.to_string());
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(StoreError::listener_failures(self.name, failures))
        }
    }
}

/// Type erased view of a store, used by the store hub
pub trait StoreHandle {
    fn store_name(&self) -> &'static str;

    fn version(&self) -> u64;

    fn is_initialized(&self) -> bool;

    fn state_json(&self) -> Option<serde_json::Value>;

    fn add_state_change_listener(&self, listener: Rc<dyn Fn() -> ListenerResult>) -> ListenerId;

    fn remove_state_change_listener(&self, id: ListenerId) -> bool;
}

/// Implemented by every concrete store to expose its core
pub trait Store {
    type State: Clone + Serialize + 'static;

    fn core(&self) -> &StoreCore<Self::State>;

    fn get_state(&self) -> Option<Self::State> {
        self.core().get_state()
    }
}

impl<T: Store> StoreHandle for T {
    fn store_name(&self) -> &'static str {
        self.core().name()
    }

    fn version(&self) -> u64 {
        self.core().version()
    }

    fn is_initialized(&self) -> bool {
        self.core().is_initialized()
    }

    fn state_json(&self) -> Option<serde_json::Value> {
        self.core()
            .with_state(|state| serde_json::to_value(state).ok())
            .flatten()
    }

    fn add_state_change_listener(&self, listener: Rc<dyn Fn() -> ListenerResult>) -> ListenerId {
        self.core().add_change_listener(move |_| listener())
    }

    fn remove_state_change_listener(&self, id: ListenerId) -> bool {
        self.core().remove_change_listener(id)
    }
}

/// Route an action to a store method without keeping the store alive
pub fn add_store_listener<St: 'static, P: 'static>(
    action: &Action<P>,
    store: &Weak<St>,
    handler: fn(&St, &P) -> Result<(), StoreError>,
) {
    let store = store.clone();
    action.add_listener(move |payload| match store.upgrade() {
        Some(store) => handler(&store, payload),
        None => Ok(()),
    });
}
