//! Authentication for SkyCast.
//!
//! Validation rules, password hashing, the register/login service, and the
//! use-case layer that maps outcomes into field-scoped errors for the UI.

pub mod error;
pub mod password;
pub mod service;
pub mod session;
pub mod usecase;
pub mod validate;

pub use error::{AuthError, AuthResult, FieldError, FormField, MessageKey};
pub use password::hash_password;
pub use service::AuthService;
pub use session::Session;
pub use usecase::{LoginUseCase, RegisterUseCase};
