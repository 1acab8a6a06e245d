//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of screen state is updated the same way:
//!
//! ```text
//! Gesture ──→ Intent ──→ Reducer ──→ State ──→ render
//!    ↑                                           │
//!    └───────────────────────────────────────────┘
//! ```
//!
//! - **State**: plain data describing what is on screen
//! - **Intent**: one user gesture or system event
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
