//! Intents for the counter.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterIntent {
    Increment,
    Decrement,
    /// Back to zero regardless of the current value.
    Reset,
    /// Replace the echo buffer with the full new text.
    SetInput { text: String },
}

impl Intent for CounterIntent {}
