//! The identity service: registration, login, token resolution, and
//! preference updates.

use agent_core::{Preferences, SummaryLength};
use database::{conversation, session, user, validation, Database, DatabaseError, User};
use tracing::{debug, info, warn};

use crate::error::IdentityError;
use crate::{password, token};

/// Default lifetime of an issued bearer token.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60;

/// A new account registration request.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub full_name: String,
    /// One of "short", "medium", "long".
    pub summary_length: String,
    pub preferred_topics: Vec<String>,
}

/// A successful login: the plaintext bearer token and the authenticated user.
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub token: String,
    pub user: User,
}

/// Identity collaborator around the query pipeline.
///
/// Owns credential verification and the mapping from opaque bearer tokens
/// back to user ids. All token storage is hashed; the plaintext token only
/// exists in the [`LoginSession`] handed back to the caller.
#[derive(Clone)]
pub struct IdentityService {
    db: Database,
    token_ttl_minutes: i64,
}

impl IdentityService {
    /// Create an identity service with the default token TTL.
    pub fn new(db: Database) -> Self {
        Self::with_token_ttl(db, DEFAULT_TOKEN_TTL_MINUTES)
    }

    /// Create an identity service with a custom token TTL.
    pub fn with_token_ttl(db: Database, token_ttl_minutes: i64) -> Self {
        Self {
            db,
            token_ttl_minutes,
        }
    }

    /// Register a new account.
    ///
    /// Rejects empty fields and malformed emails with `InvalidInput`, an
    /// out-of-range summary length with `InvalidInput`, and an already
    /// registered email with `Conflict`. The password is stored only as an
    /// Argon2 hash.
    pub async fn register(&self, account: NewAccount) -> Result<User, IdentityError> {
        validation::validate_required("email", &account.email)
            .and_then(|_| validation::validate_required("password", &account.password))
            .and_then(|_| validation::validate_required("full_name", &account.full_name))
            .and_then(|_| validation::validate_email(&account.email))
            .map_err(|e| IdentityError::InvalidInput(e.to_string()))?;

        let summary_length: SummaryLength = account
            .summary_length
            .parse()
            .map_err(|e: agent_core::InvalidSummaryLength| {
                IdentityError::InvalidInput(e.to_string())
            })?;

        if user::get_by_email(self.db.pool(), &account.email)
            .await?
            .is_some()
        {
            return Err(IdentityError::Conflict);
        }

        let preferences = Preferences::new(summary_length, account.preferred_topics);
        let password_hash = password::hash(&account.password)?;

        let created = user::create(
            self.db.pool(),
            &account.email,
            &password_hash,
            &account.full_name,
            Some(&preferences.to_blob()),
        )
        .await
        .map_err(|e| match e {
            // Unique violation here means a concurrent registration won.
            DatabaseError::AlreadyExists { .. } => IdentityError::Conflict,
            other => IdentityError::Database(other),
        })?;

        info!(user_id = created.id, "Registered new user");
        Ok(created)
    }

    /// Log in with email and password, issuing a fresh bearer token.
    ///
    /// Unknown email and wrong password produce the same
    /// [`IdentityError::InvalidCredentials`].
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginSession, IdentityError> {
        validation::validate_required("email", email)
            .and_then(|_| validation::validate_required("password", password))
            .map_err(|e| IdentityError::InvalidInput(e.to_string()))?;

        let user = user::get_by_email(self.db.pool(), email)
            .await?
            .ok_or(IdentityError::InvalidCredentials)?;

        if !password::verify(password, &user.password_hash) {
            return Err(IdentityError::InvalidCredentials);
        }

        // Opportunistic cleanup; stale rows are harmless but pointless.
        match session::purge_expired(self.db.pool()).await {
            Ok(purged) if purged > 0 => debug!(purged, "Purged expired sessions"),
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Failed to purge expired sessions"),
        }

        let bearer = token::generate();
        session::create(
            self.db.pool(),
            user.id,
            &token::fingerprint(&bearer),
            self.token_ttl_minutes,
        )
        .await?;

        info!(user_id = user.id, "User logged in");
        Ok(LoginSession {
            token: bearer,
            user,
        })
    }

    /// Resolve a bearer token to its user.
    ///
    /// Unknown, expired, or orphaned tokens all reject with
    /// [`IdentityError::InvalidToken`] before any pipeline work happens.
    pub async fn authenticate(&self, bearer: &str) -> Result<User, IdentityError> {
        let user_id = session::resolve(self.db.pool(), &token::fingerprint(bearer))
            .await?
            .ok_or(IdentityError::InvalidToken)?;

        user::get(self.db.pool(), user_id).await.map_err(|e| match e {
            // The user was deleted after the session was issued.
            DatabaseError::NotFound { .. } => IdentityError::InvalidToken,
            other => IdentityError::Database(other),
        })
    }

    /// Update a user's preferences.
    ///
    /// Unset fields keep their current values; an out-of-range summary
    /// length is rejected with `InvalidInput`, never silently coerced.
    pub async fn update_preferences(
        &self,
        user_id: i64,
        summary_length: Option<&str>,
        preferred_topics: Option<Vec<String>>,
    ) -> Result<User, IdentityError> {
        let user = user::get(self.db.pool(), user_id).await.map_err(|e| match e {
            DatabaseError::NotFound { .. } => IdentityError::UserNotFound,
            other => IdentityError::Database(other),
        })?;

        let mut preferences = user.preferences();

        if let Some(length) = summary_length {
            preferences.summary_length = length.parse().map_err(
                |e: agent_core::InvalidSummaryLength| IdentityError::InvalidInput(e.to_string()),
            )?;
        }

        if let Some(topics) = preferred_topics {
            preferences.preferred_topics = topics;
        }

        user::update_preferences(self.db.pool(), user_id, &preferences.to_blob()).await?;

        Ok(user::get(self.db.pool(), user_id).await?)
    }

    /// Delete all of a user's conversations.
    ///
    /// Succeeds whether or not any existed.
    pub async fn clear_conversations(&self, user_id: i64) -> Result<bool, IdentityError> {
        Ok(conversation::delete_by_user(self.db.pool(), user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_service() -> IdentityService {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        IdentityService::new(db)
    }

    fn account(email: &str) -> NewAccount {
        NewAccount {
            email: email.to_string(),
            password: "secret123".to_string(),
            full_name: "A".to_string(),
            summary_length: "short".to_string(),
            preferred_topics: vec![],
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let service = test_service().await;

        let user = service.register(account("a@x.com")).await.unwrap();
        assert_eq!(user.email, "a@x.com");
        assert_ne!(user.password_hash, "secret123");
        assert_eq!(user.preferences().summary_length, SummaryLength::Short);

        let login = service.login("a@x.com", "secret123").await.unwrap();
        assert_eq!(login.user.id, user.id);
        assert!(!login.token.is_empty());

        let authed = service.authenticate(&login.token).await.unwrap();
        assert_eq!(authed.id, user.id);
    }

    #[tokio::test]
    async fn test_login_mismatches_are_indistinguishable() {
        let service = test_service().await;
        service.register(account("a@x.com")).await.unwrap();

        let wrong_password = service.login("a@x.com", "nope").await.unwrap_err();
        let unknown_email = service.login("b@x.com", "secret123").await.unwrap_err();

        assert!(matches!(wrong_password, IdentityError::InvalidCredentials));
        assert!(matches!(unknown_email, IdentityError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let service = test_service().await;
        let original = service.register(account("a@x.com")).await.unwrap();

        let mut second = account("a@x.com");
        second.full_name = "Impostor".to_string();
        let err = service.register(second).await.unwrap_err();
        assert!(matches!(err, IdentityError::Conflict));

        // Original account is unmodified
        let login = service.login("a@x.com", "secret123").await.unwrap();
        assert_eq!(login.user.full_name, original.full_name);
    }

    #[tokio::test]
    async fn test_register_rejects_bad_input() {
        let service = test_service().await;

        let mut blank = account("a@x.com");
        blank.password = String::new();
        assert!(matches!(
            service.register(blank).await.unwrap_err(),
            IdentityError::InvalidInput(_)
        ));

        assert!(matches!(
            service.register(account("not-an-email")).await.unwrap_err(),
            IdentityError::InvalidInput(_)
        ));

        let mut bad_length = account("a@x.com");
        bad_length.summary_length = "gigantic".to_string();
        let err = service.register(bad_length).await.unwrap_err();
        match err {
            IdentityError::InvalidInput(msg) => {
                assert!(msg.contains("'short', 'medium', or 'long'"));
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_authenticate_rejects_bad_tokens() {
        let service = test_service().await;
        assert!(matches!(
            service.authenticate("bogus").await.unwrap_err(),
            IdentityError::InvalidToken
        ));
    }

    #[tokio::test]
    async fn test_expired_session_rejects() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        let service = IdentityService::with_token_ttl(db, -1);

        service.register(account("a@x.com")).await.unwrap();
        let login = service.login("a@x.com", "secret123").await.unwrap();

        assert!(matches!(
            service.authenticate(&login.token).await.unwrap_err(),
            IdentityError::InvalidToken
        ));
    }

    #[tokio::test]
    async fn test_update_preferences() {
        let service = test_service().await;
        let user = service.register(account("a@x.com")).await.unwrap();

        let updated = service
            .update_preferences(user.id, Some("long"), Some(vec!["ai".to_string()]))
            .await
            .unwrap();
        assert_eq!(updated.preferences().summary_length, SummaryLength::Long);
        assert_eq!(updated.preferences().preferred_topics, vec!["ai".to_string()]);

        // Partial update keeps the other field
        let updated = service
            .update_preferences(user.id, Some("medium"), None)
            .await
            .unwrap();
        assert_eq!(updated.preferences().summary_length, SummaryLength::Medium);
        assert_eq!(updated.preferences().preferred_topics, vec!["ai".to_string()]);

        // Invalid length is rejected, not coerced
        let err = service
            .update_preferences(user.id, Some("gigantic"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::InvalidInput(_)));
        let unchanged = service.update_preferences(user.id, None, None).await.unwrap();
        assert_eq!(unchanged.preferences().summary_length, SummaryLength::Medium);

        // Unknown user
        assert!(matches!(
            service.update_preferences(9999, Some("short"), None).await.unwrap_err(),
            IdentityError::UserNotFound
        ));
    }

    #[tokio::test]
    async fn test_clear_conversations_empty_is_ok() {
        let service = test_service().await;
        let user = service.register(account("a@x.com")).await.unwrap();

        let any = service.clear_conversations(user.id).await.unwrap();
        assert!(!any);
    }
}
