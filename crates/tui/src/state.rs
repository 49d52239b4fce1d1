//! UI state: the form plus what only the screen cares about.

use stocktally_inventory::{Field, InventoryForm};

/// Which control has keyboard focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Stock,
    Price,
    AddButton,
    Table,
}

impl Focus {
    /// The text field behind this focus, if it is an input.
    pub fn field(self) -> Option<Field> {
        match self {
            Focus::Stock => Some(Field::Stock),
            Focus::Price => Some(Field::Price),
            Focus::AddButton | Focus::Table => None,
        }
    }

    pub fn is_input(self) -> bool {
        self.field().is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub form: InventoryForm,
    pub focus: Focus,
    /// Highlighted table row, kept within bounds by the reducer.
    pub selected: Option<usize>,
    /// Last change announced on the event bus ("Added Item 2").
    pub status: Option<String>,
    pub should_quit: bool,
}
