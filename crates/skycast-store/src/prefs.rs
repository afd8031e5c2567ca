//! File-backed preference store.
//!
//! Holds the signed-in user's email under a fixed key, persisted as JSON so
//! it survives restarts. Writes go to disk on every mutation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

#[derive(Debug, Default, Serialize, Deserialize)]
struct PrefValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_email: Option<String>,
}

/// Key-value preference store for session state.
#[derive(Debug)]
pub struct Preferences {
    path: PathBuf,
    values: PrefValues,
}

impl Preferences {
    /// Load preferences from the given file, starting empty if it does not
    /// exist yet.
    pub fn load<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        let values = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| StoreError::preferences(e.to_string()))?;
            serde_json::from_str(&contents)
                .map_err(|e| StoreError::preferences(format!("parse error: {}", e)))?
        } else {
            PrefValues::default()
        };

        Ok(Self { path, values })
    }

    /// The signed-in user's email, if any.
    pub fn user_email(&self) -> Option<&str> {
        self.values.user_email.as_deref()
    }

    /// Persist the signed-in user's email.
    pub fn set_user_email(&mut self, email: &str) -> StoreResult<()> {
        self.values.user_email = Some(email.to_string());
        self.save()
    }

    /// Remove the signed-in user's email.
    pub fn clear_user_email(&mut self) -> StoreResult<()> {
        self.values.user_email = None;
        self.save()
    }

    fn save(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::preferences(e.to_string()))?;
        }
        let contents = serde_json::to_string_pretty(&self.values)
            .map_err(|e| StoreError::preferences(e.to_string()))?;
        std::fs::write(&self.path, contents).map_err(|e| StoreError::preferences(e.to_string()))
    }
}
