//! State tree for the counter store.

use serde::{Deserialize, Serialize};

use crate::store::StoreState;

/// The whole state tree: a single integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterState {
    pub count: i64,
}

impl StoreState for CounterState {}
