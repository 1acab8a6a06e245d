//! Reducer for the counter.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

/// Pure transitions; overflow handling follows `state.overflow`.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => step(state, 1),
            CounterIntent::Decrement => step(state, -1),
            CounterIntent::Reset => CounterState { count: 0, ..state },
            CounterIntent::SetInput { text } => CounterState {
                input: text,
                ..state
            },
        }
    }
}

fn step(state: CounterState, delta: i64) -> CounterState {
    let (count, _) = state.overflow.apply(state.count, delta);
    CounterState { count, ..state }
}
