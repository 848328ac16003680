//! Mock responder implementations.
//!
//! This crate provides mock implementations of the `Responder` trait for
//! testing:
//! - `EchoAgent` - Echoes queries back
//! - `CannedAgent` - Returns a fixed response regardless of the query
//!
//! For production AI processing, use the `research-agent` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_agent::{EchoAgent, Responder};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let agent = EchoAgent::new();
//!     let response = agent.respond("Hello!", None).await;
//!     println!("Response: {}", response);
//! }
//! ```

mod canned;
mod echo;

// Re-export agent-core types for convenience
pub use agent_core::{async_trait, Preferences, Responder, SummaryLength};

// Export mock implementations
pub use canned::CannedAgent;
pub use echo::EchoAgent;
