//! Counter widget feature module.
//!
//! Holds a single integer, renders it, and changes it by one in either
//! direction when one of its two controls is pressed.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - The count
//! - `intent.rs` - Control presses (Increment, Decrement)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `view.rs` - View tree built from the state

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;
pub use view::{render, Control, CounterView, COUNT_PREFIX, DEFAULT_HEADING};
