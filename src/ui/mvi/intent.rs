//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (button presses, key presses, pointer clicks)
/// - System events (timers, resizes)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
