//! Contact form validation
//!
//! Field checks for contact submissions. Each check returns at most one
//! error; the HTTP layer collects them into the 400 response body.

use serde::Serialize;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_SUBJECT_LENGTH: usize = 200;
pub const MIN_MESSAGE_LENGTH: usize = 10;
pub const MAX_MESSAGE_LENGTH: usize = 5000;

/// One rejected field, reported back to the client.
#[derive(Serialize, Clone, Debug)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        FieldError {
            field,
            message: message.into(),
        }
    }
}

pub fn validate_name(name: &str) -> Option<FieldError> {
    let name = name.trim();
    if name.is_empty() {
        return Some(FieldError::new("name", "Name is required"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Some(FieldError::new(
            "name",
            format!("Name must be less than {} characters", MAX_NAME_LENGTH),
        ));
    }
    None
}

pub fn validate_email(email: &str) -> Option<FieldError> {
    let email = email.trim();
    if email.is_empty() {
        return Some(FieldError::new("email", "Email is required"));
    }
    if email.parse::<lettre::Address>().is_err() {
        return Some(FieldError::new("email", "Please provide a valid email"));
    }
    None
}

pub fn validate_subject(subject: &str) -> Option<FieldError> {
    let subject = subject.trim();
    if subject.is_empty() {
        return Some(FieldError::new("subject", "Subject is required"));
    }
    if subject.chars().count() > MAX_SUBJECT_LENGTH {
        return Some(FieldError::new(
            "subject",
            format!("Subject must be less than {} characters", MAX_SUBJECT_LENGTH),
        ));
    }
    None
}

pub fn validate_message(message: &str) -> Option<FieldError> {
    let message = message.trim();
    if message.is_empty() {
        return Some(FieldError::new("message", "Message is required"));
    }
    let len = message.chars().count();
    if len < MIN_MESSAGE_LENGTH || len > MAX_MESSAGE_LENGTH {
        return Some(FieldError::new(
            "message",
            format!(
                "Message must be between {} and {} characters",
                MIN_MESSAGE_LENGTH, MAX_MESSAGE_LENGTH
            ),
        ));
    }
    None
}
