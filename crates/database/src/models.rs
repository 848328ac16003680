//! Database models.

use agent_core::Preferences;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Store-assigned identifier, immutable after creation.
    pub id: i64,
    /// Email address, unique and case-sensitive as stored.
    pub email: String,
    /// Argon2 password hash, never serialized outward.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Display name.
    pub full_name: String,
    /// Serialized preferences blob, if any.
    #[serde(skip_serializing)]
    pub preferences: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
}

impl User {
    /// The user's response-shaping preferences.
    ///
    /// A missing or malformed blob yields the defaults without raising.
    pub fn preferences(&self) -> Preferences {
        Preferences::from_blob(self.preferences.as_deref())
    }
}

/// A stored query/response exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Conversation {
    /// Store-assigned identifier.
    pub id: i64,
    /// Owning user id (logical reference, not enforced by the store).
    pub user_id: i64,
    /// The research query as submitted.
    pub query: String,
    /// The responder's answer, verbatim. Fail-soft error strings are
    /// persisted here too.
    pub response: String,
    /// Creation timestamp, server-assigned.
    pub timestamp: String,
}

