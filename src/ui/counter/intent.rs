//! Intents for the counter widget.

use serde::Serialize;

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the counter reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterIntent {
    /// The "+" control was pressed.
    Increment,
    /// The "-" control was pressed.
    Decrement,
}

impl Intent for CounterIntent {}
