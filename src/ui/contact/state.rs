use crate::contact::{ContactForm, Field, FieldErrors};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Editing,
    /// Simulated send in progress. Input is ignored.
    Submitting,
    /// Success message shown until the timed reset.
    Submitted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub focused: Field,
    pub errors: FieldErrors,
    pub status: SubmitStatus,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self {
            form: ContactForm::default(),
            focused: Field::Name,
            errors: FieldErrors::default(),
            status: SubmitStatus::Editing,
        }
    }
}

impl UiState for ContactFormState {}

impl ContactFormState {
    pub fn is_editing(&self) -> bool {
        self.status == SubmitStatus::Editing
    }
}
