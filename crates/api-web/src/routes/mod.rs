//! Route handlers for the HTTP API.

pub mod accounts;
pub mod conversations;
pub mod health;
pub mod research;

use axum::routing::{get, post, put};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Account endpoints (no auth)
        .route("/register/", post(accounts::register))
        .route("/login/", post(accounts::login))
        // Authenticated endpoints
        .route("/preferences/", put(accounts::update_preferences))
        .route(
            "/conversations/",
            get(conversations::list).delete(conversations::delete_all),
        )
        .route("/research/query", get(research::query))
        .route("/research/history", get(research::history))
        // Health check
        .route("/health", get(health::health))
}
