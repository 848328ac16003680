//! The per-request query pipeline.

use std::sync::Arc;

use agent_core::{Preferences, Responder};
use database::{conversation, user, Database};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ResearchError;

/// The structured outcome of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    /// The user the query ran for.
    pub user_id: i64,
    /// The query as submitted.
    pub query: String,
    /// The responder's answer. Always present, even when the responder
    /// internally failed and returned an error string.
    pub response: String,
    /// Id of the conversation record this run appended.
    pub conversation_id: i64,
    /// The preferences that actually shaped the response.
    pub preferences_used: Preferences,
}

/// Ties identity, preferences, the responder, and the ledger together
/// per request.
///
/// Each run is a self-contained sequence of store reads, one external
/// round-trip, and one store write; there is no shared mutable state
/// across runs.
pub struct QueryPipeline {
    db: Database,
    responder: Arc<dyn Responder>,
}

impl QueryPipeline {
    /// Create a pipeline over the given store and responder.
    pub fn new(db: Database, responder: Arc<dyn Responder>) -> Self {
        Self { db, responder }
    }

    /// Process a research query for a user.
    ///
    /// Exactly one conversation record is appended per successful run —
    /// history records attempts, not just successes, so a responder
    /// failure string is persisted verbatim as the response.
    pub async fn process(&self, user_id: i64, query: &str) -> Result<QueryResult, ResearchError> {
        if query.trim().is_empty() {
            return Err(ResearchError::InvalidInput(
                "Query cannot be empty".to_string(),
            ));
        }

        let user = user::get(self.db.pool(), user_id).await?;
        let preferences = user.preferences();

        debug!(
            user_id,
            responder = self.responder.name(),
            summary_length = %preferences.summary_length,
            "Processing research query"
        );

        let response = self.responder.respond(query, Some(&preferences)).await;

        let record = conversation::create(self.db.pool(), user_id, query, &response).await?;

        info!(
            user_id,
            conversation_id = record.id,
            "Research query processed"
        );

        Ok(QueryResult {
            user_id,
            query: query.to_string(),
            response,
            conversation_id: record.id,
            preferences_used: preferences,
        })
    }
}
