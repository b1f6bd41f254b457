//! The context handed to action handlers.

use serde_json::Value;

use super::{ActionFuture, Store, StoreError, StoreState};

/// Narrow store surface given to a running action.
///
/// Exposes exactly what an action is allowed to do: read a state
/// snapshot, commit mutations, and dispatch further actions. Cloneable so
/// actions can move it into spawned futures or asynchronous
/// continuations.
pub struct ActionContext<S: StoreState> {
    store: Store<S>,
}

impl<S: StoreState> ActionContext<S> {
    pub(crate) fn new(store: Store<S>) -> Self {
        Self { store }
    }

    /// Get a snapshot of the current state.
    pub fn state(&self) -> S {
        self.store.state()
    }

    /// Commit a mutation on the owning store.
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownMutation`] if the name is not
    /// registered.
    pub fn commit(&self, name: &str, payload: Option<Value>) -> Result<(), StoreError> {
        self.store.commit(name, payload)
    }

    /// Dispatch another action on the owning store.
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownAction`] if the name is not
    /// registered.
    pub fn dispatch(&self, name: &str, payload: Option<Value>) -> Result<ActionFuture, StoreError> {
        self.store.dispatch(name, payload)
    }
}

impl<S: StoreState> Clone for ActionContext<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}
