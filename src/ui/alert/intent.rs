use crate::ui::mvi::Intent;
use crate::view_model::Notification;

#[derive(Debug, Clone)]
pub enum AlertIntent {
    Show { notification: Notification },
    /// User acknowledged the alert.
    Dismiss,
}

impl Intent for AlertIntent {}
