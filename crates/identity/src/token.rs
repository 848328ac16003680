//! Opaque bearer-token generation and fingerprinting.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Generate a fresh opaque bearer token.
pub fn generate() -> String {
    Uuid::new_v4().simple().to_string()
}

/// SHA-256 hex fingerprint of a token, the only form ever persisted.
pub fn fingerprint(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
