use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

// Same shape browsers accept for `<input type="email">`.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("message is required")]
    MissingMessage,
}

impl FieldError {
    pub fn field(self) -> Field {
        match self {
            Self::MissingName => Field::Name,
            Self::MissingEmail | Self::InvalidEmail => Field::Email,
            Self::MissingMessage => Field::Message,
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Reports the first failing field in form order.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.name.trim().is_empty() {
            return Err(FieldError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FieldError::MissingEmail);
        }
        if !is_valid_email(email) {
            return Err(FieldError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(FieldError::MissingMessage);
        }
        Ok(())
    }

    /// On success the fields are cleared and their values handed back. A
    /// rejected submission leaves every field as typed.
    pub fn submit(&mut self) -> Result<ContactSubmission, FieldError> {
        self.validate()?;
        let submission = ContactSubmission {
            name: std::mem::take(&mut self.name),
            email: std::mem::take(&mut self.email).trim().to_string(),
            message: std::mem::take(&mut self.message),
        };
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, name);
        form.set(Field::Email, email);
        form.set(Field::Message, message);
        form
    }

    #[test]
    fn valid_submission_clears_fields() {
        let mut form = filled("A", "a@b.com", "hi");
        let submission = form.submit().expect("valid form submits");

        assert_eq!(
            submission,
            ContactSubmission {
                name: "A".to_string(),
                email: "a@b.com".to_string(),
                message: "hi".to_string(),
            }
        );
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn invalid_email_keeps_fields() {
        let mut form = filled("A", "not-an-email", "hi");
        assert_eq!(form.submit(), Err(FieldError::InvalidEmail));
        assert_eq!(form.value(Field::Name), "A");
        assert_eq!(form.value(Field::Email), "not-an-email");
        assert_eq!(form.value(Field::Message), "hi");
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        assert_eq!(filled("", "", "").validate(), Err(FieldError::MissingName));
        assert_eq!(filled("A", "  ", "").validate(), Err(FieldError::MissingEmail));
        assert_eq!(filled("A", "a@b.com", "").validate(), Err(FieldError::MissingMessage));
        assert_eq!(FieldError::InvalidEmail.field(), Field::Email);
    }

    #[test]
    fn email_shape_matches_browser_rules() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
        assert!(is_valid_email("user@localhost"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@-b.com"));
    }

    #[test]
    fn submission_serializes_for_logging() {
        let submission = filled("A", "a@b.com", "hi").submit().expect("valid");
        let value = serde_json::to_value(&submission).expect("serializes");
        assert_eq!(value["email"], "a@b.com");
    }
}
