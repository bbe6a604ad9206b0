//! Base trait for UI state in the MVI layer.

/// Marker trait for UI state objects.
///
/// `Default` is the mounted value, `PartialEq` lets callers compare
/// snapshots, and `Clone` lets a view keep a copy of what it rendered.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
