//! User actions understood by the reducer.

/// One user action.
///
/// Produced from key presses by [`crate::input::intent_for`] and consumed by
/// [`crate::reducer::reduce`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Type a character into the focused input.
    Insert(char),
    /// Delete the last character of the focused input.
    Backspace,
    FocusNext,
    FocusPrev,
    /// Commit key: adds from an input or the button, removes from the table.
    Submit,
    /// Explicit "Add Item" action regardless of focus.
    AddItem,
    SelectPrev,
    SelectNext,
    RemoveSelected,
    Quit,
}
