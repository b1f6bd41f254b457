//! One-shot construction of a [`Store`] from its definition tables.

use std::collections::HashMap;
use std::future::Future;

use serde_json::Value;

use super::{ActionContext, ActionFn, GetterFn, MutationFn, Store, StoreError, StoreState};

/// Builder collecting the four definition tables of a store: the initial
/// state plus named mutations, actions and getters.
///
/// Registration happens once, before the store is handed out; the
/// registries are frozen by [`build`](StoreBuilder::build). Registering a
/// second handler under an existing name replaces the first.
pub struct StoreBuilder<S: StoreState> {
    initial: S,
    mutations: HashMap<String, MutationFn<S>>,
    actions: HashMap<String, ActionFn<S>>,
    getters: HashMap<String, GetterFn<S>>,
}

impl<S: StoreState> StoreBuilder<S> {
    /// Start a builder with the given initial state.
    pub fn new(initial: S) -> Self {
        Self {
            initial,
            mutations: HashMap::new(),
            actions: HashMap::new(),
            getters: HashMap::new(),
        }
    }

    /// Register a mutation handler.
    ///
    /// Mutations must be synchronous and free of I/O; they are the only
    /// way the store's state changes.
    pub fn mutation<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut S, Option<Value>) + Send + Sync + 'static,
    {
        self.mutations.insert(name.into(), Box::new(handler));
        self
    }

    /// Register an action handler.
    ///
    /// Actions may suspend and must request state changes exclusively
    /// through their [`ActionContext`], never by touching state directly.
    pub fn action<F, Fut>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(ActionContext<S>, Option<Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), StoreError>> + Send + 'static,
    {
        let wrapped: ActionFn<S> =
            Box::new(move |context, payload| Box::pin(handler(context, payload)));
        self.actions.insert(name.into(), wrapped);
        self
    }

    /// Register a getter.
    ///
    /// Getters are pure functions of the state, recomputed on every read.
    pub fn getter<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&S) -> Value + Send + Sync + 'static,
    {
        self.getters.insert(name.into(), Box::new(handler));
        self
    }

    /// Freeze the registries and produce the store.
    pub fn build(self) -> Store<S> {
        tracing::debug!(
            mutations = self.mutations.len(),
            actions = self.actions.len(),
            getters = self.getters.len(),
            "Built store"
        );
        Store::new(self.initial, self.mutations, self.actions, self.getters)
    }
}
