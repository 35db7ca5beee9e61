//! Headless host: presses controls from a script and prints the result.
//!
//! ```text
//! "+ + + -"  ──→  [Increment, Increment, Increment, Decrement]  ──→  count: 2
//! ```

use clap::ValueEnum;
use thiserror::Error;

use crate::ui::counter::{render, Control, CounterIntent, CounterReducer, CounterView};
use crate::ui::mvi::Store;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("Unknown control '{control}' at position {position} (expected '+' or '-')")]
    UnknownControl { control: char, position: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parses a press script. Whitespace and commas separate presses.
pub fn parse_script(script: &str) -> Result<Vec<Control>, ScriptError> {
    script
        .chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_ascii_whitespace() && *ch != ',')
        .map(|(position, ch)| match ch {
            '+' => Ok(Control::INCREMENT),
            '-' => Ok(Control::DECREMENT),
            control => Err(ScriptError::UnknownControl { control, position }),
        })
        .collect()
}

pub fn run(script: &str, heading: &str) -> Result<CounterView, ScriptError> {
    let controls = parse_script(script)?;
    let mut store: Store<CounterReducer> = Store::new();
    let mut dispatch = |intent: CounterIntent| store.dispatch(intent);
    for control in &controls {
        control.press(&mut dispatch);
    }
    tracing::debug!(presses = controls.len(), count = store.state().count, "Script finished");
    Ok(render(store.state(), heading))
}

pub fn format_view(view: &CounterView, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let controls: Vec<String> = view
                .controls
                .iter()
                .map(|control| format!("[ {} ]", control.label))
                .collect();
            format!("{}\n{}\n{}", view.heading, view.count_line, controls.join(" "))
        }
        // CounterView serialization is infallible
        OutputFormat::Json => serde_json::to_string_pretty(view).unwrap_or_default(),
    }
}
