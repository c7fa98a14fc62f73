use crate::contact::Field;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ContactIntent {
    /// Type a character into the focused field.
    Insert(char),
    Backspace,
    /// Replace a field's value wholesale.
    Edit { field: Field, value: String },
    FocusNext,
    FocusPrev,
    Focus(Field),
    /// Validate; on success start the simulated send.
    Submit,
    SubmitCompleted,
    /// Timed reset after the success message.
    Reset,
}

impl Intent for ContactIntent {}
