//! Search capability trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AgentError;

/// Trait for a search capability.
///
/// The payload is deliberately loose: providers return whatever shape the
/// upstream service produced, normally a JSON array of result objects with
/// `title`, `content`, and `url` fields. Callers must handle non-array
/// payloads by falling back to the string form.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run a search for the given query.
    async fn search(&self, query: &str) -> Result<Value, AgentError>;
}
