//! View tree for the counter widget.
//!
//! `render` is host-independent: the terminal renderer and the headless
//! printer both consume the same [`CounterView`].

use serde::Serialize;

use super::intent::CounterIntent;
use super::state::CounterState;

pub const DEFAULT_HEADING: &str = "Hello World!";

/// Text in front of the number on the count line.
pub const COUNT_PREFIX: &str = "count: ";

/// An interactive control bound to one intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Control {
    pub label: &'static str,
    pub intent: CounterIntent,
}

impl Control {
    pub const INCREMENT: Control = Control {
        label: "+",
        intent: CounterIntent::Increment,
    };

    pub const DECREMENT: Control = Control {
        label: "-",
        intent: CounterIntent::Decrement,
    };

    /// Press the control: hands its intent to the injected dispatcher.
    pub fn press<F>(&self, dispatch: &mut F)
    where
        F: FnMut(CounterIntent),
    {
        dispatch(self.intent);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterView {
    pub heading: String,
    pub count: i64,
    pub count_line: String,
    pub controls: [Control; 2],
}

pub fn render(state: &CounterState, heading: &str) -> CounterView {
    CounterView {
        heading: heading.to_string(),
        count: state.count,
        count_line: format!("{COUNT_PREFIX}{}", state.count),
        controls: [Control::INCREMENT, Control::DECREMENT],
    }
}
