//! The only place UI state changes.

use stocktally_inventory::InventoryEvent;

use crate::intent::Intent;
use crate::state::{AppState, Focus};

/// Apply `intent` to `state`, returning whatever domain events it produced.
pub fn reduce(state: &mut AppState, intent: Intent) -> Vec<InventoryEvent> {
    let events = match intent {
        Intent::Insert(ch) => {
            insert(state, ch);
            Vec::new()
        }
        Intent::Backspace => {
            if let Some(field) = state.focus.field() {
                state.form.field_mut(field).pop();
            }
            Vec::new()
        }
        Intent::FocusNext => {
            state.focus = next_focus(state, state.focus);
            Vec::new()
        }
        Intent::FocusPrev => {
            state.focus = prev_focus(state, state.focus);
            Vec::new()
        }
        Intent::Submit => match state.focus {
            Focus::Stock | Focus::Price | Focus::AddButton => add(state),
            Focus::Table => remove_selected(state),
        },
        Intent::AddItem => add(state),
        Intent::SelectPrev => {
            state.selected = match state.selected {
                Some(i) => Some(i.saturating_sub(1)),
                None => last_index(state),
            };
            Vec::new()
        }
        Intent::SelectNext => {
            state.selected = match (state.selected, last_index(state)) {
                (Some(i), Some(last)) => Some((i + 1).min(last)),
                (None, Some(_)) => Some(0),
                (_, None) => None,
            };
            Vec::new()
        }
        Intent::RemoveSelected => remove_selected(state),
        Intent::Quit => {
            state.should_quit = true;
            Vec::new()
        }
    };

    clamp_selection(state);
    events
}

/// Characters that can appear in a decimal number.
pub fn accepts(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E')
}

fn insert(state: &mut AppState, ch: char) {
    if !accepts(ch) {
        return;
    }
    if let Some(field) = state.focus.field() {
        state.form.field_mut(field).push(ch);
    }
}

fn add(state: &mut AppState) -> Vec<InventoryEvent> {
    // The error is already recorded on the form.
    state.form.add_item().unwrap_or_default()
}

fn remove_selected(state: &mut AppState) -> Vec<InventoryEvent> {
    let Some(index) = state.selected else {
        return Vec::new();
    };
    let Some(id) = state.form.items().get(index).map(|item| item.id_typed()) else {
        return Vec::new();
    };
    state.form.remove_item(id)
}

fn last_index(state: &AppState) -> Option<usize> {
    state.form.items().len().checked_sub(1)
}

fn clamp_selection(state: &mut AppState) {
    match last_index(state) {
        None => {
            state.selected = None;
            if state.focus == Focus::Table {
                state.focus = Focus::Stock;
            }
        }
        Some(last) => {
            if state.focus == Focus::Table && state.selected.is_none() {
                state.selected = Some(0);
            }
            state.selected = state.selected.map(|i| i.min(last));
        }
    }
}

/// Stock → Price → Add Item → Table → Stock; the table is skipped while empty.
fn next_focus(state: &AppState, focus: Focus) -> Focus {
    match focus {
        Focus::Stock => Focus::Price,
        Focus::Price => Focus::AddButton,
        Focus::AddButton if state.form.items().is_empty() => Focus::Stock,
        Focus::AddButton => Focus::Table,
        Focus::Table => Focus::Stock,
    }
}

fn prev_focus(state: &AppState, focus: Focus) -> Focus {
    match focus {
        Focus::Stock if state.form.items().is_empty() => Focus::AddButton,
        Focus::Stock => Focus::Table,
        Focus::Price => Focus::Stock,
        Focus::AddButton => Focus::Price,
        Focus::Table => Focus::AddButton,
    }
}
