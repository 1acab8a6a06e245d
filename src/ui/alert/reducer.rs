use crate::ui::mvi::Reducer;

use super::intent::AlertIntent;
use super::state::AlertDialogState;

pub struct AlertReducer;

impl Reducer for AlertReducer {
    type State = AlertDialogState;
    type Intent = AlertIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AlertIntent::Show { notification } => match state {
                // One alert at a time; Show while visible is ignored.
                visible @ AlertDialogState::Visible { .. } => visible,
                AlertDialogState::Hidden => AlertDialogState::Visible { notification },
            },
            AlertIntent::Dismiss => AlertDialogState::Hidden,
        }
    }
}
