//! State for the counter.

use crate::config::OverflowPolicy;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CounterState {
    pub count: i64,
    /// Last text handed to `SetInput`, verbatim.
    pub input: String,
    /// Fixed for the lifetime of the state; no intent changes it.
    pub overflow: OverflowPolicy,
}

impl UiState for CounterState {}

impl CounterState {
    pub fn with_policy(overflow: OverflowPolicy) -> Self {
        Self {
            overflow,
            ..Self::default()
        }
    }
}
