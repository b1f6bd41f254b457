//! Generic unidirectional state container.
//!
//! A [`Store`] owns a single state tree and only changes it through named,
//! synchronous mutation handlers. Asynchronous side effects live in named
//! action handlers that request changes through an [`ActionContext`], and
//! derived read-only values come from named getter functions.
//!
//! # Data flow
//!
//! ```text
//! dispatch ──→ Action ──→ commit ──→ Mutation ──→ State ──→ Getter
//!                 │                                  │
//!                 └───────── state snapshot ◄────────┘
//! ```
//!
//! - **State**: the single mutable value owned by the store
//! - **Mutation**: synchronous handler, the only way state changes
//! - **Action**: handler that may suspend and commits via its context
//! - **Getter**: pure function deriving a value from current state

mod builder;
mod context;
mod error;

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

pub use builder::StoreBuilder;
pub use context::ActionContext;
pub use error::StoreError;

/// Marker trait for state owned by a [`Store`].
///
/// State should be:
/// - Cloneable (snapshots are handed out by value)
/// - Shareable across tasks (`Send + Sync`)
pub trait StoreState: Clone + Send + Sync + 'static {}

/// Completion of a dispatched action.
///
/// Resolves exactly once, after the action has finished all of its work
/// (including any commits made from asynchronous continuations).
pub type ActionFuture = Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + 'static>>;

pub(crate) type MutationFn<S> = Box<dyn Fn(&mut S, Option<Value>) + Send + Sync>;
pub(crate) type ActionFn<S> =
    Box<dyn Fn(ActionContext<S>, Option<Value>) -> ActionFuture + Send + Sync>;
pub(crate) type GetterFn<S> = Box<dyn Fn(&S) -> Value + Send + Sync>;

/// Shared handle to a state container.
///
/// Cloning is cheap; all clones observe the same state. The handler
/// registries are fixed at construction (see [`StoreBuilder`]), only the
/// state itself changes afterwards.
pub struct Store<S: StoreState> {
    inner: Arc<StoreInner<S>>,
}

struct StoreInner<S: StoreState> {
    state: RwLock<S>,
    mutations: HashMap<String, MutationFn<S>>,
    actions: HashMap<String, ActionFn<S>>,
    getters: HashMap<String, GetterFn<S>>,
}

impl<S: StoreState> Store<S> {
    pub(crate) fn new(
        initial: S,
        mutations: HashMap<String, MutationFn<S>>,
        actions: HashMap<String, ActionFn<S>>,
        getters: HashMap<String, GetterFn<S>>,
    ) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(initial),
                mutations,
                actions,
                getters,
            }),
        }
    }

    /// Get a snapshot of the current state.
    ///
    /// The snapshot is a clone; holding it does not block writers and
    /// changing it does not affect the store.
    pub fn state(&self) -> S {
        self.inner.state.read().clone()
    }

    /// Commit a mutation by name, applying it synchronously to the live
    /// state.
    ///
    /// The change is visible to all subsequent reads as soon as this
    /// returns. Mutations run under the write lock, so each one is atomic
    /// relative to other commits and snapshots.
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownMutation`] if no mutation is registered
    /// under `name`. State is unchanged on error.
    pub fn commit(&self, name: &str, payload: Option<Value>) -> Result<(), StoreError> {
        let Some(mutation) = self.inner.mutations.get(name) else {
            tracing::warn!(mutation = %name, "Commit of unknown mutation");
            return Err(StoreError::UnknownMutation {
                name: name.to_string(),
            });
        };

        {
            let mut state = self.inner.state.write();
            mutation(&mut state, payload);
        }

        tracing::debug!(mutation = %name, "Committed mutation");
        Ok(())
    }

    /// Dispatch an action by name.
    ///
    /// The action receives an [`ActionContext`] exposing `commit`,
    /// `dispatch` and a state snapshot. On success the action's completion
    /// is returned so callers may await its side effects; the name lookup
    /// itself fails synchronously.
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownAction`] if no action is registered
    /// under `name`.
    pub fn dispatch(&self, name: &str, payload: Option<Value>) -> Result<ActionFuture, StoreError> {
        let Some(action) = self.inner.actions.get(name) else {
            tracing::warn!(action = %name, "Dispatch of unknown action");
            return Err(StoreError::UnknownAction {
                name: name.to_string(),
            });
        };

        tracing::debug!(action = %name, "Dispatching action");
        let context = ActionContext::new(self.clone());
        Ok(action(context, payload))
    }

    /// Evaluate a getter by name against the current state.
    ///
    /// Getters are recomputed on every read; nothing is cached.
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownGetter`] if no getter is registered
    /// under `name`.
    pub fn getter(&self, name: &str) -> Result<Value, StoreError> {
        let Some(getter) = self.inner.getters.get(name) else {
            tracing::warn!(getter = %name, "Read of unknown getter");
            return Err(StoreError::UnknownGetter {
                name: name.to_string(),
            });
        };

        let state = self.inner.state.read();
        let value = getter(&state);
        tracing::trace!(getter = %name, value = %value, "Evaluated getter");
        Ok(value)
    }

    /// List the registered mutation names, sorted.
    pub fn mutation_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.mutations.keys().cloned().collect();
        names.sort();
        names
    }

    /// List the registered action names, sorted.
    pub fn action_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.actions.keys().cloned().collect();
        names.sort();
        names
    }

    /// List the registered getter names, sorted.
    pub fn getter_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.getters.keys().cloned().collect();
        names.sort();
        names
    }
}

impl<S: StoreState> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
