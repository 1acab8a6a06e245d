//! Counter and echo buffer.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Counter value, echo buffer, overflow policy
//! - `intent.rs` - Increment, Decrement, Reset, SetInput
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;
