//! The counter store: the smallest useful wiring of the generic container.
//!
//! Two mutations move the count, four actions drive them (one after a
//! timer delay), and one getter derives the count's parity.

mod state;

use std::time::Duration;

use serde_json::json;

use crate::store::{Store, StoreBuilder};

pub use state::CounterState;

/// Delay before `incrementAsync` commits.
pub const ASYNC_COMMIT_DELAY: Duration = Duration::from_millis(1000);

/// Build the counter store with its mutation, action and getter tables.
///
/// Handler names are the contract exercised by callers:
///
/// - mutations `increment` / `decrement` move the count by one
/// - actions `increment` / `decrement` commit immediately,
///   `incrementIfOdd` commits only when the count is odd, and
///   `incrementAsync` commits after [`ASYNC_COMMIT_DELAY`]
/// - getter `evenOrOdd` derives `"even"` or `"odd"` from the count
///
/// Payloads are ignored; none of the handlers take one.
pub fn counter_store() -> Store<CounterState> {
    StoreBuilder::new(CounterState::default())
        .mutation("increment", |state: &mut CounterState, _| state.count += 1)
        .mutation("decrement", |state: &mut CounterState, _| state.count -= 1)
        .action("increment", |context, _| async move {
            context.commit("increment", None)
        })
        .action("decrement", |context, _| async move {
            context.commit("decrement", None)
        })
        .action("incrementIfOdd", |context, _| async move {
            if (context.state().count + 1) % 2 == 0 {
                context.commit("increment", None)?;
            }
            Ok(())
        })
        .action("incrementAsync", |context, _| async move {
            // No cancellation path: once dispatched, the commit always lands.
            tokio::time::sleep(ASYNC_COMMIT_DELAY).await;
            context.commit("increment", None)
        })
        .getter("evenOrOdd", |state: &CounterState| {
            json!(if state.count % 2 == 0 { "even" } else { "odd" })
        })
        .build()
}
