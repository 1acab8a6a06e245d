//! Modal alert showing the current count.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Hidden or showing a notification
//! - `intent.rs` - Show, Dismiss
//! - `reducer.rs` - State transitions
//! - `dialog.rs` - Rendering

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_alert_dialog;
pub use intent::AlertIntent;
pub use reducer::AlertReducer;
pub use state::AlertDialogState;
