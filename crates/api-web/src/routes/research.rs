//! Research routes.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::error::Result;
use crate::state::AppState;

/// Query parameters for a research request.
#[derive(Deserialize)]
pub struct ResearchParams {
    pub query: Option<String>,
}

/// Run the query pipeline for the caller.
pub async fn query(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ResearchParams>,
) -> Result<Json<research::QueryResult>> {
    // An absent parameter behaves like a blank query: rejected by the
    // pipeline's own precondition.
    let query = params.query.as_deref().unwrap_or("");
    let result = state.pipeline.process(user.id, query).await?;

    Ok(Json(result))
}

/// The caller's research history summary.
pub async fn history(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<research::ResearchHistory>> {
    let history = research::history(&state.db, user.id).await?;
    Ok(Json(history))
}
