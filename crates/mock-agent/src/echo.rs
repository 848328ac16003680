//! Echo agent implementation - echoes queries back.

use async_trait::async_trait;

use agent_core::{Preferences, Responder};

/// A responder that echoes the query back to the caller.
///
/// Useful for testing the pipeline flow without any AI processing.
#[derive(Debug, Clone, Default)]
pub struct EchoAgent {
    /// Optional prefix to add before the echo.
    prefix: Option<String>,
}

impl EchoAgent {
    /// Create a new EchoAgent with no prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new EchoAgent with a custom prefix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mock_agent::EchoAgent;
    ///
    /// let agent = EchoAgent::with_prefix("Echo: ");
    /// // Will respond with "Echo: <original query>"
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

#[async_trait]
impl Responder for EchoAgent {
    async fn respond(&self, query: &str, _preferences: Option<&Preferences>) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, query),
            None => query.to_string(),
        }
    }

    fn name(&self) -> &str {
        "EchoAgent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_no_prefix() {
        let agent = EchoAgent::new();
        assert_eq!(agent.respond("Hello!", None).await, "Hello!");
    }

    #[tokio::test]
    async fn test_echo_with_prefix() {
        let agent = EchoAgent::with_prefix("Echo: ");
        assert_eq!(agent.respond("Hello!", None).await, "Echo: Hello!");
    }

    #[tokio::test]
    async fn test_agent_name() {
        let agent = EchoAgent::new();
        assert_eq!(agent.name(), "EchoAgent");
    }
}
