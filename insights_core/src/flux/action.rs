// src/flux/action.rs
//! Typed actions with synchronous listener fan-out

use crate::flux::errors::{DispatchError, StoreError};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

thread_local! {
    static EXECUTING_ACTION: Cell<Option<&'static str>> = Cell::new(None);
}

pub type ActionListener<P> = Rc<dyn Fn(&P) -> Result<(), StoreError>>;

/// Named action; stores subscribe, action creators invoke
pub struct Action<P> {
    name: &'static str,
    listeners: RefCell<Vec<ActionListener<P>>>,
}

struct ExecutingScope;

impl ExecutingScope {
    fn enter(name: &'static str) -> Result<Self, DispatchError> {
        EXECUTING_ACTION.with(|executing| match executing.get() {
            Some(current) => Err(DispatchError::NestedInvocation {
                action: name.to_string(),
                executing: current.to_string(),
            }),
            None => {
                executing.set(Some(name));
                Ok(ExecutingScope)
            }
        })
    }
}

impl Drop for ExecutingScope {
    fn drop(&mut self) {
        EXECUTING_ACTION.with(|executing| executing.set(None));
    }
}

impl<P> Action<P> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn add_listener(&self, listener: impl Fn(&P) -> Result<(), StoreError> + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Call every listener in registration order
    ///
    /// A failing listener does not stop later ones; all failures come back
    /// together. Invoking an action from inside another action's listeners is
    /// rejected.
    pub fn invoke(&self, payload: &P) -> Result<(), DispatchError> {
        let _scope = ExecutingScope::enter(self.name)?;
        let listeners: Vec<ActionListener<P>> = self.listeners.borrow().clone();

        let failures: Vec<String> = listeners
            .iter()
            .filter_map(|listener| listener(payload).err())
            .map(|error| error.to_string())
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::action_failed(self.name, failures))
        }
    }
}

impl<P> std::fmt::Debug for Action<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_listeners_called_in_order_with_payload() {
        let action: Action<u32> = Action::new("Test");
        let calls = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second"] {
            let calls = calls.clone();
            action.add_listener(move |payload| {
                calls.borrow_mut().push((tag, *payload));
                Ok(())
            });
        }

        action.invoke(&7).unwrap();
        assert_eq!(*calls.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_failing_listener_does_not_stop_others() {
        let action: Action<()> = Action::new("Test");
        let reached = Rc::new(Cell::new(false));

        action.add_listener(|_| Err(StoreError::persist_failed("A", "disk full")));
        let flag = reached.clone();
        action.add_listener(move |_| {
            flag.set(true);
            Ok(())
        });

        assert_matches!(
            action.invoke(&()),
            Err(DispatchError::ActionFailed { action, failures }) if action == "Test" && failures.len() == 1
        );
        assert!(reached.get());
    }

    #[test]
    fn test_nested_invocation_rejected() {
        let inner = Rc::new(Action::<()>::new("Inner"));
        let outer: Action<()> = Action::new("Outer");
        let nested_result = Rc::new(RefCell::new(None));

        let inner_handle = inner.clone();
        let result_slot = nested_result.clone();
        outer.add_listener(move |_| {
            *result_slot.borrow_mut() = Some(inner_handle.invoke(&()));
            Ok(())
        });

        outer.invoke(&()).unwrap();
        assert_matches!(
            nested_result.borrow_mut().take(),
            Some(Err(DispatchError::NestedInvocation { .. }))
        );

        // Scope is released afterwards
        assert!(inner.invoke(&()).is_ok());
    }
}
