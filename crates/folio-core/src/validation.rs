//! Contact form validation and its reflection onto the page.
//!
//! The three validators are pure. [`ContactForm`] owns the element bindings
//! and writes their results to the error displays.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::dom::{ElementId, RenderSurface};
use crate::notify::Notifier;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Minimum trimmed length of a name.
pub const MIN_NAME_CHARS: usize = 2;
/// Minimum trimmed length of a message.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// A field-level validation failure, displayed inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be at least 2 characters long")]
    NameTooShort,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

/// Strips surrounding whitespace, including the byte order mark.
fn trim_blank(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

pub fn validate_name(input: &str) -> Result<(), FieldError> {
    let trimmed = trim_blank(input);
    if trimmed.is_empty() {
        return Err(FieldError::NameRequired);
    }
    if trimmed.chars().count() < MIN_NAME_CHARS {
        return Err(FieldError::NameTooShort);
    }
    Ok(())
}

pub fn validate_email(input: &str) -> Result<(), FieldError> {
    if trim_blank(input).is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !EMAIL_PATTERN.is_match(input) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

pub fn validate_message(input: &str) -> Result<(), FieldError> {
    let trimmed = trim_blank(input);
    if trimmed.is_empty() {
        return Err(FieldError::MessageRequired);
    }
    if trimmed.chars().count() < MIN_MESSAGE_CHARS {
        return Err(FieldError::MessageTooShort);
    }
    Ok(())
}

/// Text shown in an error display: empty when valid.
pub fn display_text(result: &Result<(), FieldError>) -> String {
    match result {
        Ok(()) => String::new(),
        Err(e) => e.to_string(),
    }
}

/// The validated form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[Field::Name, Field::Email, Field::Message]
    }

    pub fn validate(&self, input: &str) -> Result<(), FieldError> {
        match self {
            Field::Name => validate_name(input),
            Field::Email => validate_email(input),
            Field::Message => validate_message(input),
        }
    }

    /// Element id used by the default markup.
    pub fn default_id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_id())
    }
}

/// Validation results of all three fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReport {
    pub name: Result<(), FieldError>,
    pub email: Result<(), FieldError>,
    pub message: Result<(), FieldError>,
}

impl FormReport {
    pub fn evaluate(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: validate_name(name),
            email: validate_email(email),
            message: validate_message(message),
        }
    }

    pub fn get(&self, field: Field) -> &Result<(), FieldError> {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn is_submittable(&self) -> bool {
        self.name.is_ok() && self.email.is_ok() && self.message.is_ok()
    }

    pub fn errors(&self) -> impl Iterator<Item = FieldError> + '_ {
        [&self.name, &self.email, &self.message]
            .into_iter()
            .filter_map(|r| r.as_ref().err().copied())
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields valid: acknowledged and reset.
    Accepted,
    Rejected(FormReport),
}

/// Input and error display of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    pub input: ElementId,
    pub error: ElementId,
}

/// Element bindings of the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub form: ElementId,
    pub name: FieldBinding,
    pub email: FieldBinding,
    pub message: FieldBinding,
}

impl ContactForm {
    pub fn binding(&self, field: Field) -> &FieldBinding {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn current_value<R: RenderSurface + ?Sized>(&self, surface: &R, field: Field) -> String {
        surface
            .value(&self.binding(field).input)
            .unwrap_or_default()
            .to_string()
    }

    /// Stores a new value for `field` and reflects only that field.
    pub fn on_input<R: RenderSurface + ?Sized>(
        &self,
        surface: &mut R,
        field: Field,
        value: &str,
    ) -> Result<(), FieldError> {
        let binding = self.binding(field);
        surface.set_value(&binding.input, value);
        let result = field.validate(value);
        surface.set_text(&binding.error, &display_text(&result));
        result
    }

    /// Validates every field, writes every display, and on success sends
    /// exactly one acknowledgment and resets the form.
    pub fn submit<R, N>(&self, surface: &mut R, notifier: &mut N, acknowledgment: &str) -> SubmitOutcome
    where
        R: RenderSurface + ?Sized,
        N: Notifier + ?Sized,
    {
        let report = FormReport::evaluate(
            &self.current_value(surface, Field::Name),
            &self.current_value(surface, Field::Email),
            &self.current_value(surface, Field::Message),
        );

        for &field in Field::all() {
            surface.set_text(&self.binding(field).error, &display_text(report.get(field)));
        }

        if report.is_submittable() {
            tracing::debug!("Contact form accepted");
            notifier.notify(acknowledgment);
            self.reset(surface);
            SubmitOutcome::Accepted
        } else {
            tracing::debug!(errors = report.errors().count(), "Contact form rejected");
            SubmitOutcome::Rejected(report)
        }
    }

    /// Clears every value and error display.
    pub fn reset<R: RenderSurface + ?Sized>(&self, surface: &mut R) {
        for &field in Field::all() {
            let binding = self.binding(field);
            surface.set_value(&binding.input, "");
            surface.set_text(&binding.error, "");
        }
    }
}
