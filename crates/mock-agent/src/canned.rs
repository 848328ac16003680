//! Canned agent implementation - returns a fixed response.

use async_trait::async_trait;

use agent_core::{Preferences, Responder};

/// A responder that returns the same text for every query.
///
/// Useful for exercising callers against a known response, including the
/// fail-soft error strings a real responder can produce.
#[derive(Debug, Clone)]
pub struct CannedAgent {
    response: String,
}

impl CannedAgent {
    /// Create a new CannedAgent with the given fixed response.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl Responder for CannedAgent {
    async fn respond(&self, _query: &str, _preferences: Option<&Preferences>) -> String {
        self.response.clone()
    }

    fn name(&self) -> &str {
        "CannedAgent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_canned_response() {
        let agent = CannedAgent::new("fixed");
        assert_eq!(agent.respond("anything", None).await, "fixed");
        assert_eq!(agent.respond("something else", None).await, "fixed");
    }

    #[tokio::test]
    async fn test_agent_name() {
        let agent = CannedAgent::new("fixed");
        assert_eq!(agent.name(), "CannedAgent");
    }
}
