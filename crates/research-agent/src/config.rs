//! Configuration for ResearchAgent.

use std::env;

/// Configuration for [`crate::ResearchAgent`].
///
/// Both API keys are optional: a missing key disables that capability and
/// the agent degrades to a fixed unavailability message instead of failing
/// at construction time.
#[derive(Debug, Clone)]
pub struct ResearchAgentConfig {
    /// OpenAI API URL.
    pub openai_api_url: String,

    /// OpenAI API key. `None` disables the language-model capability.
    pub openai_api_key: Option<String>,

    /// Model name to use.
    pub openai_model: String,

    /// Temperature for generation (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Maximum tokens for response.
    pub max_tokens: Option<u32>,

    /// Tavily API URL.
    pub tavily_api_url: String,

    /// Tavily API key. `None` disables the search capability.
    pub tavily_api_key: Option<String>,

    /// Maximum number of search results to request.
    pub max_results: u32,
}

impl Default for ResearchAgentConfig {
    fn default() -> Self {
        Self {
            openai_api_url: "https://api.openai.com".to_string(),
            openai_api_key: None,
            openai_model: "gpt-3.5-turbo".to_string(),
            temperature: Some(0.1),
            max_tokens: Some(1024),
            tavily_api_url: "https://api.tavily.com".to_string(),
            tavily_api_key: None,
            max_results: 5,
        }
    }
}

impl ResearchAgentConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `OPENAI_API_KEY` - OpenAI key (capability disabled when unset)
    /// - `OPENAI_API_URL` - API URL (default: https://api.openai.com)
    /// - `OPENAI_MODEL` - Model name (default: gpt-3.5-turbo)
    /// - `OPENAI_TEMPERATURE` - Temperature (default: 0.1)
    /// - `OPENAI_MAX_TOKENS` - Max tokens (default: 1024)
    /// - `TAVILY_API_KEY` - Tavily key (capability disabled when unset)
    /// - `TAVILY_API_URL` - API URL (default: https://api.tavily.com)
    /// - `SEARCH_MAX_RESULTS` - Max search results (default: 5)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let openai_api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());
        let tavily_api_key = env::var("TAVILY_API_KEY").ok().filter(|k| !k.is_empty());

        let openai_api_url =
            env::var("OPENAI_API_URL").unwrap_or(defaults.openai_api_url);
        let openai_model = env::var("OPENAI_MODEL").unwrap_or(defaults.openai_model);
        let tavily_api_url =
            env::var("TAVILY_API_URL").unwrap_or(defaults.tavily_api_url);

        let temperature = env::var("OPENAI_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(defaults.temperature);

        let max_tokens = env::var("OPENAI_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(defaults.max_tokens);

        let max_results = env::var("SEARCH_MAX_RESULTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_results);

        Self {
            openai_api_url,
            openai_api_key,
            openai_model,
            temperature,
            max_tokens,
            tavily_api_url,
            tavily_api_key,
            max_results,
        }
    }

    /// Create a new config builder.
    pub fn builder() -> ResearchAgentConfigBuilder {
        ResearchAgentConfigBuilder::default()
    }
}

/// Builder for [`ResearchAgentConfig`].
#[derive(Debug, Default)]
pub struct ResearchAgentConfigBuilder {
    config: ResearchAgentConfig,
}

impl ResearchAgentConfigBuilder {
    /// Set the OpenAI API key.
    pub fn openai_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.openai_api_key = Some(key.into());
        self
    }

    /// Set the OpenAI API URL.
    pub fn openai_api_url(mut self, url: impl Into<String>) -> Self {
        self.config.openai_api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn openai_model(mut self, model: impl Into<String>) -> Self {
        self.config.openai_model = model.into();
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = Some(temp);
        self
    }

    /// Set the max tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = Some(tokens);
        self
    }

    /// Set the Tavily API key.
    pub fn tavily_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.tavily_api_key = Some(key.into());
        self
    }

    /// Set the Tavily API URL.
    pub fn tavily_api_url(mut self, url: impl Into<String>) -> Self {
        self.config.tavily_api_url = url.into();
        self
    }

    /// Set the maximum number of search results.
    pub fn max_results(mut self, max: u32) -> Self {
        self.config.max_results = max;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ResearchAgentConfig {
        self.config
    }
}
