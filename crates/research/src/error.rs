//! Error types for pipeline operations.

use database::DatabaseError;
use thiserror::Error;

/// Errors that can occur during a pipeline run.
#[derive(Debug, Error)]
pub enum ResearchError {
    /// The request was malformed (empty query).
    #[error("{0}")]
    InvalidInput(String),

    /// A referenced record does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Unexpected failure in the pipeline or store.
    #[error("{0}")]
    Internal(String),
}

impl From<DatabaseError> for ResearchError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound { entity, id } => ResearchError::NotFound { entity, id },
            other => ResearchError::Internal(other.to_string()),
        }
    }
}
