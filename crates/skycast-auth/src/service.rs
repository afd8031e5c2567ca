//! Register/login orchestration over the shared store.
//!
//! The store is synchronous SQLite; this service wraps it in a mutex and
//! reaches it through `spawn_blocking` so callers get an async interface.

use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;

use skycast_store::{Database, StoreError};

use crate::password::hash_password;

/// Authentication service: register and login.
#[derive(Clone)]
pub struct AuthService {
    db: Arc<Mutex<Database>>,
}

impl AuthService {
    /// Create a service over a shared database handle.
    pub fn new(db: Arc<Mutex<Database>>) -> Self {
        Self { db }
    }

    /// Register a new account.
    ///
    /// Returns `Ok(false)` when an account with this email already exists;
    /// the unique index on the email column is the sole duplicate signal, so
    /// there is no check-then-insert race. Other store failures propagate.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<bool> {
        let hashed = hash_password(password);
        let db = self.db.clone();
        let name = name.to_string();
        let email = email.to_string();

        tokio::task::spawn_blocking(move || {
            match db.lock().register_user(&name, &email, &hashed) {
                Ok(user) => {
                    tracing::info!("Registered account for user ID {}", user.id);
                    Ok(true)
                }
                Err(StoreError::DuplicateEmail) => Ok(false),
                Err(e) => Err(anyhow::anyhow!("{}", e)),
            }
        })
        .await?
    }

    /// Check credentials.
    ///
    /// Returns whether an account with this exact email and password hash
    /// exists. "No such email" and "wrong password" are indistinguishable
    /// here; the use-case layer collapses both into one generic message.
    pub async fn login(&self, email: &str, password: &str) -> Result<bool> {
        let hashed = hash_password(password);
        let db = self.db.clone();
        let email = email.to_string();

        tokio::task::spawn_blocking(move || {
            db.lock()
                .find_user_by_credentials(&email, &hashed)
                .map(|user| user.is_some())
                .map_err(|e| anyhow::anyhow!("{}", e))
        })
        .await?
    }
}
