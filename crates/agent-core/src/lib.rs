//! Core trait and types for responder implementations.
//!
//! This crate provides the shared interface for all responder implementations
//! in the Sage research assistant. It defines:
//!
//! - [`Responder`] - The trait that all responder implementations must implement
//! - [`SearchProvider`] / [`ChatModel`] - Capability traits for the search and
//!   language-model halves of a retrieval-augmented responder
//! - [`Preferences`] - A user's response-shaping settings
//! - [`AgentError`] - Error types for provider operations
//!
//! # Example
//!
//! ```rust
//! use agent_core::{async_trait, Preferences, Responder};
//!
//! struct MyResponder;
//!
//! #[async_trait]
//! impl Responder for MyResponder {
//!     async fn respond(&self, query: &str, _preferences: Option<&Preferences>) -> String {
//!         format!("You asked: {}", query)
//!     }
//!
//!     fn name(&self) -> &str {
//!         "MyResponder"
//!     }
//! }
//! ```

mod chat;
mod error;
mod preferences;
mod responder;
mod search;

pub use chat::{ChatMessage, ChatModel};
pub use error::AgentError;
pub use preferences::{InvalidSummaryLength, Preferences, SummaryLength};
pub use responder::Responder;
pub use search::SearchProvider;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
