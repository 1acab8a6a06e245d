//! Marker trait for screen state.

/// State snapshots are cloned to read, compared to detect change, and have a
/// well-defined starting value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
