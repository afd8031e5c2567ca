//! Password digest.
//!
//! Unsalted SHA-256, hex-encoded. Kept byte-compatible with existing stored
//! hashes; migrating to a salted, memory-hard scheme would invalidate them.

use sha2::{Digest, Sha256};

/// Hash a password to a 64-character lowercase hex string.
///
/// Deterministic: identical input always yields identical output.
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    hex::encode(digest)
}
