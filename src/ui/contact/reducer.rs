use crate::contact::{validate, Field};
use crate::ui::contact::intent::ContactIntent;
use crate::ui::contact::state::{ContactFormState, SubmitStatus};
use crate::ui::mvi::Reducer;

pub struct ContactReducer;

impl Reducer for ContactReducer {
    type State = ContactFormState;
    type Intent = ContactIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ContactIntent::SubmitCompleted => match state.status {
                SubmitStatus::Submitting => ContactFormState {
                    status: SubmitStatus::Submitted,
                    ..state
                },
                _ => state,
            },
            ContactIntent::Reset => match state.status {
                SubmitStatus::Submitted => ContactFormState::default(),
                _ => state,
            },
            // Everything below only applies while editing
            _ if !state.is_editing() => state,
            ContactIntent::Insert(ch) => {
                let field = state.focused;
                edit(state, field, |value| value.push(ch))
            }
            ContactIntent::Backspace => {
                let field = state.focused;
                edit(state, field, |value| {
                    value.pop();
                })
            }
            ContactIntent::Edit { field, value } => edit(state, field, |current| *current = value),
            ContactIntent::FocusNext => {
                let focused = shift(state.focused, 1);
                ContactFormState { focused, ..state }
            }
            ContactIntent::FocusPrev => {
                let focused = shift(state.focused, Field::ALL.len() - 1);
                ContactFormState { focused, ..state }
            }
            ContactIntent::Focus(focused) => ContactFormState { focused, ..state },
            ContactIntent::Submit => match validate(&state.form) {
                Ok(()) => ContactFormState {
                    status: SubmitStatus::Submitting,
                    errors: Default::default(),
                    ..state
                },
                Err(errors) => {
                    // Jump to the first broken field
                    let focused = errors.iter().next().map_or(state.focused, |(f, _)| f);
                    ContactFormState {
                        errors,
                        focused,
                        ..state
                    }
                }
            },
        }
    }
}

/// Editing a field clears that field's error and no other.
fn edit(
    mut state: ContactFormState,
    field: Field,
    change: impl FnOnce(&mut String),
) -> ContactFormState {
    change(state.form.value_mut(field));
    state.errors.clear(field);
    state
}

fn shift(field: Field, by: usize) -> Field {
    let pos = Field::ALL.iter().position(|f| *f == field).unwrap_or(0);
    Field::ALL[(pos + by) % Field::ALL.len()]
}
