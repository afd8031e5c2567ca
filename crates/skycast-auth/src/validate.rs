//! Form validation rules.
//!
//! Pure functions with no side effects; each returns the structured error
//! for the first rule the input breaks.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{AuthError, MessageKey};

/// Accepted email shape: `local@domain.tld`, where the local part is one or
/// more of letters/digits/`+`/`_`/`.`/`-`, the domain one or more of
/// letters/digits/`.`/`-`, and the TLD two or more letters. Deliberately
/// permissive (consecutive dots, hyphen-edged labels); kept as-is for
/// compatibility with existing stored accounts.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

#[allow(clippy::expect_used)]
fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("hardcoded pattern compiles"))
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Validate a display name: must not be blank.
pub fn validate_name(name: &str) -> Result<(), AuthError> {
    if is_blank(name) {
        return Err(AuthError::new(MessageKey::EnterName));
    }
    Ok(())
}

/// Validate an email: must not be blank and must match the accepted shape.
pub fn validate_email(email: &str) -> Result<(), AuthError> {
    if is_blank(email) {
        return Err(AuthError::new(MessageKey::EnterEmail));
    }
    if !email_regex().is_match(email) {
        return Err(AuthError::new(MessageKey::EnterValidEmail));
    }
    Ok(())
}

/// Validate a password: must not be blank and must be 8 to 16 characters
/// (characters, not bytes).
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if is_blank(password) {
        return Err(AuthError::new(MessageKey::EnterPassword));
    }
    let len = password.chars().count();
    if !(8..=16).contains(&len) {
        return Err(AuthError::new(MessageKey::EnterValidPassword));
    }
    Ok(())
}

/// Validate the confirm-password field: must not be blank and must equal
/// the password exactly.
pub fn validate_confirm_password(confirm: &str, password: &str) -> Result<(), AuthError> {
    if is_blank(confirm) {
        return Err(AuthError::new(MessageKey::EnterConfirmPassword));
    }
    if confirm != password {
        return Err(AuthError::new(MessageKey::EnterValidConfirmPassword));
    }
    Ok(())
}
