//! The counter-and-echo view model.
//!
//! [`CounterEcho`] is what the presentation layer talks to. Every mutation
//! goes through [`CounterReducer`]; reads go through [`CounterEcho::projection`].

use crate::config::OverflowPolicy;
use crate::ui::counter::{CounterIntent, CounterReducer, CounterState};
use crate::ui::mvi::Reducer;

pub const NOTIFICATION_HEADER: &str = "Hello!";
pub const NOTIFICATION_BODY_PREFIX: &str = "Current count is: ";
pub const ECHO_PREFIX: &str = "You typed: ";

/// Read-only snapshot of what the screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub count: i64,
    /// `"You typed: "` followed by the input buffer.
    pub input_echo: String,
}

/// Payload for the modal alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub header: String,
    pub body: String,
}

impl Notification {
    pub fn for_count(count: i64) -> Self {
        Self {
            header: NOTIFICATION_HEADER.to_string(),
            body: format!("{NOTIFICATION_BODY_PREFIX}{count}"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CounterEcho {
    state: CounterState,
}

impl CounterEcho {
    pub fn new(overflow: OverflowPolicy) -> Self {
        Self::from_state(CounterState::with_policy(overflow))
    }

    /// Resumes from an existing counter state.
    pub fn from_state(state: CounterState) -> Self {
        Self { state }
    }

    pub fn increment(&mut self) {
        self.step(CounterIntent::Increment, 1);
    }

    pub fn decrement(&mut self) {
        self.step(CounterIntent::Decrement, -1);
    }

    pub fn reset(&mut self) {
        self.dispatch(CounterIntent::Reset);
    }

    /// Builds the alert for the current count. Does not touch state.
    pub fn notify(&self) -> Notification {
        Notification::for_count(self.state.count)
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.dispatch(CounterIntent::SetInput { text: text.into() });
    }

    pub fn projection(&self) -> Projection {
        Projection {
            count: self.state.count,
            input_echo: format!("{ECHO_PREFIX}{}", self.state.input),
        }
    }

    /// Raw input buffer, for editing in place.
    pub fn input(&self) -> &str {
        &self.state.input
    }

    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.state.overflow
    }

    fn step(&mut self, intent: CounterIntent, delta: i64) {
        let (_, overflowed) = self.state.overflow.apply(self.state.count, delta);
        if overflowed {
            tracing::warn!(
                count = self.state.count,
                delta,
                policy = ?self.state.overflow,
                "counter hit the end of its range"
            );
        }
        self.dispatch(intent);
    }

    fn dispatch(&mut self, intent: CounterIntent) {
        self.state = CounterReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}
