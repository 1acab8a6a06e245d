//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place a state transition happens.
///
/// Implementations are pure: `(State, Intent) -> State`. Logging and other
/// side effects belong to whoever dispatches the intent.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
