//! Base trait for intents in the MVI layer.

/// Marker trait for intent objects.
///
/// An intent names something that happened (a button press, a tick) and
/// is the only input a reducer accepts.
pub trait Intent: Send + 'static {}
