//! HTTP API for the Sage research assistant.
//!
//! Exposes registration, login, preference management, conversation
//! history, and the research query pipeline over JSON.

mod auth;
mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use database::Database;
use identity::IdentityService;
use research::QueryPipeline;
use research_agent::ResearchAgent;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting Sage API server");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    // Build the responder. Missing API keys degrade to fixed
    // unavailability messages rather than failing startup.
    let agent = ResearchAgent::from_env()?;

    // Build application state
    let identity = IdentityService::with_token_ttl(db.clone(), config.token_ttl_minutes);
    let pipeline = Arc::new(QueryPipeline::new(db.clone(), Arc::new(agent)));
    let state = AppState::new(db, identity, pipeline);

    // Build router
    let app = routes::router().with_state(state);

    // Start server
    info!(addr = %config.addr, "Sage API server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
