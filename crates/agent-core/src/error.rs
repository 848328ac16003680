//! Error types for provider operations.

use thiserror::Error;

/// Errors that can occur inside search and model providers.
///
/// These never escape a [`crate::Responder`]: implementations convert them
/// into plain result strings before returning.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The provider could not be constructed or configured.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request to the external service could not be sent.
    #[error("network error: {0}")]
    Network(String),

    /// The external service answered with an error or an unusable payload.
    #[error("API error: {0}")]
    Api(String),
}
