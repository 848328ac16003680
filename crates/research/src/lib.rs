//! Query pipeline for the Sage research assistant.
//!
//! This crate ties the leaves together per request: it validates the
//! incoming query, loads the user and their preferences, invokes the
//! responder, persists the exchange in the conversation ledger, and
//! returns a structured result.
//!
//! The responder seam is fail-soft (it always yields a string), so the
//! pipeline's own error channel carries only identity and store failures.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use database::Database;
//! use mock_agent::EchoAgent;
//! use research::QueryPipeline;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("sqlite:sage.db?mode=rwc").await?;
//! db.migrate().await?;
//!
//! let pipeline = QueryPipeline::new(db, Arc::new(EchoAgent::new()));
//! let result = pipeline.process(1, "what is rust?").await?;
//! println!("{}", result.response);
//! # Ok(())
//! # }
//! ```

mod error;
mod history;
mod pipeline;

pub use error::ResearchError;
pub use history::{history, ResearchHistory};
pub use pipeline::{QueryPipeline, QueryResult};
