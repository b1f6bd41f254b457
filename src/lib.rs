//! fluxstore: a unidirectional state container.
//!
//! One shared state value, mutated only through named synchronous mutation
//! handlers; asynchronous side effects isolated in named actions; derived
//! read-only values computed by named getters. See [`store`] for the
//! generic container and [`counter`] for the wired-up counter store.

pub mod counter;
pub mod store;

pub use counter::{counter_store, CounterState, ASYNC_COMMIT_DELAY};
pub use store::{ActionContext, ActionFuture, Store, StoreBuilder, StoreError, StoreState};
