use crate::ui::mvi::UiState;
use crate::view_model::Notification;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AlertDialogState {
    #[default]
    Hidden,
    Visible { notification: Notification },
}

impl UiState for AlertDialogState {}

impl AlertDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn notification(&self) -> Option<&Notification> {
        match self {
            Self::Visible { notification } => Some(notification),
            Self::Hidden => None,
        }
    }
}
