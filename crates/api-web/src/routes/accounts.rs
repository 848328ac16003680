//! Registration, login, and preference routes.

use agent_core::Preferences;
use axum::extract::State;
use axum::Json;
use database::User;
use identity::NewAccount;
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::error::Result;
use crate::state::AppState;

/// Outward user representation: parsed preferences, no credential material.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub preferences: Preferences,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let preferences = user.preferences();
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            preferences,
            created_at: user.created_at,
        }
    }
}

/// Request to register a new account.
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default = "default_summary_length")]
    pub summary_length: String,
    /// Comma-joined topic list, e.g. "rust, databases".
    pub preferred_topics: Option<String>,
}

fn default_summary_length() -> String {
    "medium".to_string()
}

/// Request to log in.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user: UserResponse,
}

/// Request to update preferences. Unset fields keep their current values.
#[derive(Deserialize)]
pub struct PreferencesRequest {
    pub summary_length: Option<String>,
    /// Comma-joined topic list, e.g. "rust, databases".
    pub preferred_topics: Option<String>,
}

/// Split a comma-joined topic string into trimmed, non-empty topics.
fn split_topics(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|topic| topic.trim().to_string())
        .filter(|topic| !topic.is_empty())
        .collect()
}

/// Register a new user with structured preferences.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<UserResponse>> {
    let account = NewAccount {
        email: req.email,
        password: req.password,
        full_name: req.full_name,
        summary_length: req.summary_length,
        preferred_topics: req
            .preferred_topics
            .as_deref()
            .map(split_topics)
            .unwrap_or_default(),
    };

    let user = state.identity.register(account).await?;
    Ok(Json(user.into()))
}

/// Log in and receive a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let session = state.identity.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        access_token: session.token,
        token_type: "bearer",
        user: session.user.into(),
    }))
}

/// Update the caller's preferences.
pub async fn update_preferences(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(req): Json<PreferencesRequest>,
) -> Result<Json<UserResponse>> {
    let updated = state
        .identity
        .update_preferences(
            user.id,
            req.summary_length.as_deref(),
            req.preferred_topics.as_deref().map(split_topics),
        )
        .await?;

    Ok(Json(updated.into()))
}
