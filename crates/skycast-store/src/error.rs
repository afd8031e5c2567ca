//! Store error types.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to open or initialize the database.
    #[error("Database open failed: {0}")]
    Open(String),

    /// A query or statement failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// An insert violated the unique email constraint.
    #[error("An account with this email already exists")]
    DuplicateEmail,

    /// Preference file error.
    #[error("Preference store error: {0}")]
    Preferences(String),

    /// Generic error wrapper.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    /// Create an open error.
    pub fn open(message: impl Into<String>) -> Self {
        Self::Open(message.into())
    }

    /// Create a query error.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query(message.into())
    }

    /// Create a preferences error.
    pub fn preferences(message: impl Into<String>) -> Self {
        Self::Preferences(message.into())
    }

    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            StoreError::Open(_) => "Unable to access local data. Try restarting the app.",
            StoreError::Query(_) => "A data operation failed. Please try again.",
            StoreError::DuplicateEmail => "An account with this email already exists.",
            StoreError::Preferences(_) => "Failed to save your session. Please try again.",
            StoreError::Other(_) => "Something went wrong. Please try again.",
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        match &e {
            rusqlite::Error::SqliteFailure(err, _)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                StoreError::DuplicateEmail
            }
            _ => StoreError::Query(e.to_string()),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
