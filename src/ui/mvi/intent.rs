//! Marker trait for intents.

/// Something that happened: a button press, an edit, a dialog dismissal.
///
/// Intents carry the data needed for the transition and nothing else.
pub trait Intent: Send + 'static {}
