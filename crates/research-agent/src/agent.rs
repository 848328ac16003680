//! ResearchAgent implementation composing search and chat model.

use std::sync::Arc;

use agent_core::{
    async_trait, AgentError, ChatMessage, ChatModel, Preferences, Responder, SearchProvider,
    SummaryLength,
};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::ResearchAgentConfig;
use crate::model::OpenAiChat;
use crate::search::TavilySearch;

/// Fixed result when the search capability is not configured.
pub const SEARCH_UNAVAILABLE: &str =
    "Search functionality not available. Please configure the Tavily API key.";

/// Fixed result when the language-model capability is not configured.
pub const MODEL_UNAVAILABLE: &str =
    "AI processing not available. Please configure the OpenAI API key.";

/// System directive sent with every completion request.
const SYSTEM_PROMPT: &str = "You are a helpful research assistant. Your job is to:
1. Analyze the search results provided
2. Provide personalized responses based on user preferences
3. Always cite your sources

IMPORTANT RESPONSE LENGTH RULES:
- If user prefers \"short\": Provide ONLY 2-3 bullet points maximum, keep each point very brief
- If user prefers \"medium\": Provide 3-5 bullet points with some details
- If user prefers \"long\": Provide comprehensive information with sources

Always be accurate and helpful.";

/// How many search results make it into the prompt.
const MAX_PROMPT_RESULTS: usize = 3;

/// A responder that answers queries with a web search plus one chat
/// completion.
///
/// Either capability may be absent (unset API key); the agent then returns
/// the corresponding fixed unavailability message. Every other internal
/// failure is converted to an `"Error processing query: ..."` string, so
/// `respond` never raises.
pub struct ResearchAgent {
    search: Option<Arc<dyn SearchProvider>>,
    model: Option<Arc<dyn ChatModel>>,
}

impl ResearchAgent {
    /// Create a new ResearchAgent with the given configuration.
    pub fn new(config: ResearchAgentConfig) -> Result<Self, AgentError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AgentError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        let search: Option<Arc<dyn SearchProvider>> = match &config.tavily_api_key {
            Some(key) => Some(Arc::new(TavilySearch::new(
                client.clone(),
                config.tavily_api_url.clone(),
                key.clone(),
                config.max_results,
            ))),
            None => None,
        };

        let model: Option<Arc<dyn ChatModel>> = match &config.openai_api_key {
            Some(key) => Some(Arc::new(OpenAiChat::new(
                client,
                config.openai_api_url.clone(),
                key.clone(),
                config.openai_model.clone(),
                config.temperature,
                config.max_tokens,
            ))),
            None => None,
        };

        info!(
            model = %config.openai_model,
            search_enabled = search.is_some(),
            model_enabled = model.is_some(),
            "ResearchAgent initialized"
        );

        Ok(Self { search, model })
    }

    /// Create a ResearchAgent from environment variables.
    ///
    /// See [`ResearchAgentConfig::from_env`] for the recognized variables.
    pub fn from_env() -> Result<Self, AgentError> {
        Self::new(ResearchAgentConfig::from_env())
    }

    /// Create a ResearchAgent from explicit capability implementations.
    ///
    /// Passing `None` for a capability reproduces the unconfigured state.
    pub fn with_components(
        search: Option<Arc<dyn SearchProvider>>,
        model: Option<Arc<dyn ChatModel>>,
    ) -> Self {
        Self { search, model }
    }

    /// Run the full search-then-summarize flow, propagating provider errors.
    async fn run(
        &self,
        search: &dyn SearchProvider,
        model: &dyn ChatModel,
        query: &str,
        preferences: Option<&Preferences>,
    ) -> Result<String, AgentError> {
        let results = search.search(query).await?;
        let formatted = format_search_results(&results);
        let directive = preferences_directive(preferences);

        debug!(query, directive = %directive, "Built research prompt");

        let messages = [
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(format!(
                "Query: {}\nSearch Results: {}\nUser Preferences: {}",
                query, formatted, directive
            )),
        ];

        model.complete(&messages).await
    }
}

#[async_trait]
impl Responder for ResearchAgent {
    async fn respond(&self, query: &str, preferences: Option<&Preferences>) -> String {
        let Some(search) = self.search.as_deref() else {
            return SEARCH_UNAVAILABLE.to_string();
        };
        let Some(model) = self.model.as_deref() else {
            return MODEL_UNAVAILABLE.to_string();
        };

        match self.run(search, model, query, preferences).await {
            Ok(text) => text,
            Err(e) => format!("Error processing query: {}", e),
        }
    }

    fn name(&self) -> &str {
        "ResearchAgent"
    }
}

/// Format a search payload into numbered source blocks.
///
/// Arrays are cut to the first [`MAX_PROMPT_RESULTS`] items, with
/// placeholders for missing fields. Anything else falls back to its JSON
/// string form.
fn format_search_results(results: &Value) -> String {
    let Some(items) = results.as_array() else {
        return results.to_string();
    };

    let mut formatted = String::new();
    for (i, item) in items.iter().take(MAX_PROMPT_RESULTS).enumerate() {
        let title = item.get("title").and_then(Value::as_str).unwrap_or("No title");
        let content = item
            .get("content")
            .and_then(Value::as_str)
            .unwrap_or("No content");
        let url = item.get("url").and_then(Value::as_str).unwrap_or("No URL");

        formatted.push_str(&format!("{}. {}\n   {}\n   URL: {}\n\n", i + 1, title, content, url));
    }

    formatted
}

/// Derive the response-shaping directive from the user's preferences.
///
/// Absent preferences use the medium directive.
fn preferences_directive(preferences: Option<&Preferences>) -> String {
    let default = Preferences::default();
    let prefs = preferences.unwrap_or(&default);

    let mut directive = match prefs.summary_length {
        SummaryLength::Short => {
            "CRITICAL: Provide ONLY 2-3 bullet points maximum. Keep each point very brief \
             and concise. No long explanations."
        }
        SummaryLength::Medium => "Provide 3-5 bullet points with some details",
        SummaryLength::Long => {
            "Provide a detailed response with comprehensive information and sources"
        }
    }
    .to_string();

    if !prefs.preferred_topics.is_empty() {
        directive.push_str(&format!(
            ". Focus on topics: {}",
            prefs.preferred_topics.join(", ")
        ));
    }

    directive
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct StaticSearch(Value);

    #[async_trait]
    impl SearchProvider for StaticSearch {
        async fn search(&self, _query: &str) -> Result<Value, AgentError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSearch;

    #[async_trait]
    impl SearchProvider for FailingSearch {
        async fn search(&self, _query: &str) -> Result<Value, AgentError> {
            Err(AgentError::Api("Search API error (500): boom".to_string()))
        }
    }

    /// Echoes the user turn back, so tests can inspect the built prompt.
    struct EchoModel;

    #[async_trait]
    impl ChatModel for EchoModel {
        async fn complete(&self, messages: &[ChatMessage]) -> Result<String, AgentError> {
            Ok(messages
                .iter()
                .rev()
                .find(|m| m.role == "user")
                .map(|m| m.content.clone())
                .unwrap_or_default())
        }
    }

    fn agent_with(search: Option<Arc<dyn SearchProvider>>, model: Option<Arc<dyn ChatModel>>) -> ResearchAgent {
        ResearchAgent::with_components(search, model)
    }

    #[tokio::test]
    async fn test_search_unavailable() {
        let agent = agent_with(None, Some(Arc::new(EchoModel)));
        let out = agent.respond("anything", None).await;
        assert_eq!(out, SEARCH_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_model_unavailable() {
        let agent = agent_with(Some(Arc::new(StaticSearch(json!([])))), None);
        let out = agent.respond("anything", None).await;
        assert_eq!(out, MODEL_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_provider_error_becomes_string() {
        let agent = agent_with(Some(Arc::new(FailingSearch)), Some(Arc::new(EchoModel)));
        let out = agent.respond("anything", None).await;
        assert_eq!(out, "Error processing query: API error: Search API error (500): boom");
    }

    #[tokio::test]
    async fn test_prompt_contains_query_results_and_directive() {
        let results = json!([
            {"title": "Rust 1.80", "content": "Release notes", "url": "https://blog.rust-lang.org"},
        ]);
        let agent = agent_with(Some(Arc::new(StaticSearch(results))), Some(Arc::new(EchoModel)));

        let prefs = Preferences::new(SummaryLength::Short, vec!["releases".to_string()]);
        let out = agent.respond("rust news", Some(&prefs)).await;

        assert!(out.starts_with("Query: rust news\n"));
        assert!(out.contains("1. Rust 1.80\n   Release notes\n   URL: https://blog.rust-lang.org"));
        assert!(out.contains("CRITICAL: Provide ONLY 2-3 bullet points maximum."));
        assert!(out.contains(". Focus on topics: releases"));
    }

    #[test]
    fn test_format_caps_at_three_results() {
        let results = json!([
            {"title": "a", "content": "1", "url": "u1"},
            {"title": "b", "content": "2", "url": "u2"},
            {"title": "c", "content": "3", "url": "u3"},
            {"title": "d", "content": "4", "url": "u4"},
        ]);

        let formatted = format_search_results(&results);
        assert!(formatted.contains("3. c"));
        assert!(!formatted.contains("4. d"));
    }

    #[test]
    fn test_format_missing_fields_use_placeholders() {
        let results = json!([{"score": 0.9}]);

        let formatted = format_search_results(&results);
        assert!(formatted.contains("1. No title\n   No content\n   URL: No URL"));
    }

    #[test]
    fn test_format_non_array_falls_back_to_string() {
        let results = json!({"message": "rate limited"});
        assert_eq!(format_search_results(&results), r#"{"message":"rate limited"}"#);
    }

    #[test]
    fn test_directive_lengths() {
        let medium = preferences_directive(None);
        assert_eq!(medium, "Provide 3-5 bullet points with some details");

        let long = preferences_directive(Some(&Preferences::new(SummaryLength::Long, vec![])));
        assert_eq!(
            long,
            "Provide a detailed response with comprehensive information and sources"
        );

        let short = preferences_directive(Some(&Preferences::new(
            SummaryLength::Short,
            vec!["ai".to_string(), "rust".to_string()],
        )));
        assert!(short.starts_with("CRITICAL:"));
        assert!(short.ends_with(". Focus on topics: ai, rust"));
    }

    #[tokio::test]
    async fn test_responder_name() {
        let agent = agent_with(None, None);
        assert_eq!(agent.name(), "ResearchAgent");
    }
}
