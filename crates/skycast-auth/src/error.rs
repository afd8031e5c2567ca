//! Structured auth errors and their mapping to form fields.
//!
//! A use case reports failure as an `AuthError`: a message key plus optional
//! free-text detail. The mapping from key to display string and to the form
//! field that should be highlighted is a fixed lookup table; unrecognized
//! keys land on the email field.

use std::fmt;

/// Message keys for auth outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    EnterName,
    EnterEmail,
    EnterValidEmail,
    EnterPassword,
    EnterValidPassword,
    EnterConfirmPassword,
    EnterValidConfirmPassword,
    InvalidCredentials,
    UserAlreadyExists,
    ErrorOccurred,
}

impl MessageKey {
    /// Base display message for this key.
    pub fn base_message(self) -> &'static str {
        match self {
            Self::EnterName => "Please enter your name",
            Self::EnterEmail => "Please enter your email",
            Self::EnterValidEmail => "Please enter a valid email",
            Self::EnterPassword => "Please enter your password",
            Self::EnterValidPassword => "Password must be 8 to 16 characters",
            Self::EnterConfirmPassword => "Please confirm your password",
            Self::EnterValidConfirmPassword => "Passwords do not match",
            Self::InvalidCredentials => "Invalid credentials",
            Self::UserAlreadyExists => "User already exists",
            Self::ErrorOccurred => "Error occurred",
        }
    }
}

/// The form field an error belongs to, for UI highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

/// Display message paired with the field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub message: String,
    pub field: FormField,
}

/// Structured error carried from a use case back to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthError {
    pub key: MessageKey,
    pub detail: Option<String>,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for AuthError {}

impl AuthError {
    /// Error with no auxiliary detail.
    pub fn new(key: MessageKey) -> Self {
        Self { key, detail: None }
    }

    /// Error carrying auxiliary detail (e.g. an underlying failure message).
    pub fn with_detail(key: MessageKey, detail: impl Into<String>) -> Self {
        Self {
            key,
            detail: Some(detail.into()),
        }
    }

    /// Final display string: `"<base message>: <detail>"` when detail is
    /// present, else just the base message.
    pub fn message(&self) -> String {
        let base = self.key.base_message();
        match &self.detail {
            Some(detail) => format!("{}: {}", base, detail),
            None => base.to_string(),
        }
    }

    /// The form field this error should highlight.
    pub fn field(&self) -> FormField {
        match self.key {
            MessageKey::EnterName => FormField::Name,
            MessageKey::EnterEmail
            | MessageKey::EnterValidEmail
            | MessageKey::InvalidCredentials
            | MessageKey::UserAlreadyExists => FormField::Email,
            MessageKey::EnterPassword | MessageKey::EnterValidPassword => FormField::Password,
            MessageKey::EnterConfirmPassword | MessageKey::EnterValidConfirmPassword => {
                FormField::ConfirmPassword
            }
            // Anything unrecognized defaults to the email field.
            MessageKey::ErrorOccurred => FormField::Email,
        }
    }

    /// Resolve into the transient pair the UI consumes.
    pub fn field_error(&self) -> FieldError {
        FieldError {
            message: self.message(),
            field: self.field(),
        }
    }
}

/// Outcome of an auth use case: success payload or structured error.
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_message_without_detail() {
        let err = AuthError::new(MessageKey::InvalidCredentials);
        assert_eq!(err.message(), "Invalid credentials");
    }

    #[test]
    fn test_message_with_detail_appends_colon() {
        let err = AuthError::with_detail(MessageKey::ErrorOccurred, "disk I/O error");
        assert_eq!(err.message(), "Error occurred: disk I/O error");
    }

    #[test]
    fn test_field_mapping_table() {
        let cases = [
            (MessageKey::EnterName, FormField::Name),
            (MessageKey::EnterEmail, FormField::Email),
            (MessageKey::EnterValidEmail, FormField::Email),
            (MessageKey::InvalidCredentials, FormField::Email),
            (MessageKey::UserAlreadyExists, FormField::Email),
            (MessageKey::EnterPassword, FormField::Password),
            (MessageKey::EnterValidPassword, FormField::Password),
            (MessageKey::EnterConfirmPassword, FormField::ConfirmPassword),
            (MessageKey::EnterValidConfirmPassword, FormField::ConfirmPassword),
            (MessageKey::ErrorOccurred, FormField::Email),
        ];

        for (key, field) in cases {
            assert_eq!(AuthError::new(key).field(), field, "key {:?}", key);
        }
    }

    #[test]
    fn test_field_error_carries_rendered_message() {
        let err = AuthError::with_detail(MessageKey::ErrorOccurred, "boom");
        let field_error = err.field_error();
        assert_eq!(field_error.message, "Error occurred: boom");
        assert_eq!(field_error.field, FormField::Email);
    }
}
