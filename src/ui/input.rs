use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::counter::CounterIntent;

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Key is not bound.
    None,
    /// Dispatch straight to the counter, bypassing focus.
    Dispatch(CounterIntent),
    /// Move focus to the other control.
    FocusNext,
    /// Press whichever control has focus.
    PressFocused,
    Quit,
}

pub fn map_key(key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') {
        return InputAction::Quit;
    }

    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('k') | KeyCode::Up => {
            InputAction::Dispatch(CounterIntent::Increment)
        }
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Char('j') | KeyCode::Down => {
            InputAction::Dispatch(CounterIntent::Decrement)
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => InputAction::FocusNext,
        KeyCode::Enter | KeyCode::Char(' ') => InputAction::PressFocused,
        KeyCode::Char('q') | KeyCode::Esc => InputAction::Quit,
        _ => InputAction::None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
