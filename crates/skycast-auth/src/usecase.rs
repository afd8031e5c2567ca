//! Login and register use cases.
//!
//! Each composes validation and the auth service into a single outcome:
//! validation fails fast before any service call, service-level `false`
//! results become their structured error, and unexpected service failures
//! are wrapped with the underlying message as detail. Nothing here panics
//! or surfaces a raw error to the caller.

use crate::error::{AuthError, AuthResult, MessageKey};
use crate::service::AuthService;
use crate::validate;

/// The login use case.
pub struct LoginUseCase {
    service: AuthService,
}

impl LoginUseCase {
    pub fn new(service: AuthService) -> Self {
        Self { service }
    }

    /// Validate, then attempt login.
    ///
    /// A failed credential check yields `InvalidCredentials` regardless of
    /// whether the email or the password was wrong.
    pub async fn execute(&self, email: &str, password: &str) -> AuthResult<bool> {
        validate::validate_email(email)?;
        validate::validate_password(password)?;

        match self.service.login(email.trim(), password.trim()).await {
            Ok(true) => Ok(true),
            Ok(false) => Err(AuthError::new(MessageKey::InvalidCredentials)),
            Err(e) => {
                tracing::warn!("Login failed unexpectedly: {}", e);
                Err(AuthError::with_detail(MessageKey::ErrorOccurred, e.to_string()))
            }
        }
    }
}

/// The register use case.
pub struct RegisterUseCase {
    service: AuthService,
}

impl RegisterUseCase {
    pub fn new(service: AuthService) -> Self {
        Self { service }
    }

    /// Validate all four fields, then attempt registration.
    pub async fn execute(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> AuthResult<bool> {
        validate::validate_name(name)?;
        validate::validate_email(email)?;
        validate::validate_password(password)?;
        validate::validate_confirm_password(confirm_password, password)?;

        match self
            .service
            .register(name.trim(), email.trim(), password.trim())
            .await
        {
            Ok(true) => Ok(true),
            Ok(false) => Err(AuthError::new(MessageKey::UserAlreadyExists)),
            Err(e) => {
                tracing::warn!("Registration failed unexpectedly: {}", e);
                Err(AuthError::with_detail(MessageKey::ErrorOccurred, e.to_string()))
            }
        }
    }
}
