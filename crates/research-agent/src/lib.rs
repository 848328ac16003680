//! Tavily + OpenAI retrieval-augmented responder.
//!
//! This crate provides the production [`Responder`] implementation for the
//! Sage research assistant. A query is answered in two hops: a Tavily web
//! search for source material, then a single OpenAI chat completion that
//! summarizes the results under the user's preferences.
//!
//! The responder is fail-soft end to end. A missing API key degrades to a
//! fixed unavailability message, and any error from the external calls is
//! returned as a plain `"Error processing query: ..."` string. Callers
//! never see an error channel.
//!
//! # Example
//!
//! ```rust,no_run
//! use agent_core::Responder;
//! use research_agent::{ResearchAgent, ResearchAgentConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let agent = ResearchAgent::new(ResearchAgentConfig::from_env())?;
//!     let answer = agent.respond("latest rust release", None).await;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```

mod agent;
mod api_types;
mod config;
mod model;
mod search;

pub use agent::{ResearchAgent, MODEL_UNAVAILABLE, SEARCH_UNAVAILABLE};
pub use config::{ResearchAgentConfig, ResearchAgentConfigBuilder};
pub use model::OpenAiChat;
pub use search::TavilySearch;

// Re-export agent-core types for convenience
pub use agent_core::{
    async_trait, AgentError, ChatMessage, ChatModel, Preferences, Responder, SearchProvider,
    SummaryLength,
};
