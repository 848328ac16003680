//! Application state shared across handlers.

use std::sync::Arc;

use database::Database;
use identity::IdentityService;
use research::QueryPipeline;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Identity service for registration, login, and token resolution.
    pub identity: IdentityService,
    /// The query pipeline.
    pub pipeline: Arc<QueryPipeline>,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database, identity: IdentityService, pipeline: Arc<QueryPipeline>) -> Self {
        Self {
            db,
            identity,
            pipeline,
        }
    }
}
