//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, clicks, hover)
/// - System events (timers, terminal focus)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
