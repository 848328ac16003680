//! Conversation routes.

use axum::extract::State;
use axum::Json;
use database::{conversation, Conversation};
use serde::Serialize;
use tracing::info;

use crate::auth::AuthUser;
use crate::error::Result;
use crate::state::AppState;

/// Confirmation message for a bulk delete.
#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// List the caller's conversations, newest first.
pub async fn list(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Conversation>>> {
    let conversations = conversation::list_by_user(state.db.pool(), user.id).await?;
    Ok(Json(conversations))
}

/// Delete all of the caller's conversations.
///
/// Confirms regardless of whether any existed.
pub async fn delete_all(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>> {
    let deleted_any = state.identity.clear_conversations(user.id).await?;

    info!(user_id = user.id, deleted_any, "Cleared conversations");

    Ok(Json(DeleteResponse {
        message: format!("All conversations for user {} deleted successfully", user.id),
    }))
}
