//! Contact form validation.
//!
//! Every field is required. The email must look like `local@domain.tld`.
//! All failing fields are reported together so each can show its own error.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    /// Multi-line fields keep newlines on Enter.
    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Message)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(Field),

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Per-field validation failures, keyed in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.values().map(ToString::to_string).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email.trim())
}

pub fn validate_field(form: &ContactForm, field: Field) -> Option<FieldError> {
    let value = form.value(field).trim();
    if value.is_empty() {
        return Some(FieldError::Required(field));
    }
    if field == Field::Email && !is_valid_email(value) {
        return Some(FieldError::InvalidEmail);
    }
    None
}

pub fn validate(form: &ContactForm) -> Result<(), FieldErrors> {
    let errors: BTreeMap<Field, FieldError> = Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(form, field).map(|error| (field, error)))
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(FieldErrors(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Maya".into(),
            email: "maya@harbor.co".into(),
            subject: "Rebrand".into(),
            message: "Let's talk.".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(validate(&filled()), Ok(()));
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate(&ContactForm::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
        for field in Field::ALL {
            assert_eq!(errors.get(field), Some(&FieldError::Required(field)));
        }
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = filled();
        form.subject = "   ".into();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.get(Field::Subject), Some(&FieldError::Required(Field::Subject)));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.io"));
        assert!(is_valid_email(" first.last@mail.example.com "));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("two words@x.com"));
        assert!(!is_valid_email("@x.com"));
    }

    #[test]
    fn bad_email_is_reported_alongside_other_errors() {
        let mut form = filled();
        form.email = "maya-at-harbor".into();
        form.name.clear();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.get(Field::Email), Some(&FieldError::InvalidEmail));
        assert_eq!(errors.get(Field::Name), Some(&FieldError::Required(Field::Name)));
    }

    #[test]
    fn error_messages_read_naturally() {
        assert_eq!(FieldError::Required(Field::Message).to_string(), "Message is required");
    }
}
