//! Key presses to intents.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::intent::Intent;
use crate::state::Focus;

/// Translate a key press into an intent for the current focus.
///
/// Releases and repeats are ignored; so are keys with no meaning where focus
/// currently is.
pub fn intent_for(key: KeyEvent, focus: Focus) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Intent::Quit),
            KeyCode::Char('a') => Some(Intent::AddItem),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Enter => Some(Intent::Submit),
        KeyCode::Tab => Some(Intent::FocusNext),
        KeyCode::BackTab => Some(Intent::FocusPrev),
        KeyCode::Up if focus == Focus::Table => Some(Intent::SelectPrev),
        KeyCode::Down if focus == Focus::Table => Some(Intent::SelectNext),
        KeyCode::Delete if focus == Focus::Table => Some(Intent::RemoveSelected),
        KeyCode::Char('d') | KeyCode::Char('r') if focus == Focus::Table => {
            Some(Intent::RemoveSelected)
        }
        KeyCode::Backspace if focus.is_input() => Some(Intent::Backspace),
        KeyCode::Char(ch) if focus.is_input() => Some(Intent::Insert(ch)),
        _ => None,
    }
}
