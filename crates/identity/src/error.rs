//! Error types for identity operations.

use database::DatabaseError;
use thiserror::Error;

/// Errors that can occur during registration, login, or authentication.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// A request field is missing or malformed.
    #[error("{0}")]
    InvalidInput(String),

    /// Login failed. Deliberately generic: unknown email and wrong
    /// password are indistinguishable.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The presented bearer token is missing, unknown, or expired.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The email is already registered.
    #[error("User with this email already exists")]
    Conflict,

    /// The referenced user does not exist.
    #[error("User not found")]
    UserNotFound,

    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    Hash(String),

    /// Underlying store failure.
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),
}
