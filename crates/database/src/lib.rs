//! SQLite persistence layer for Sage.
//!
//! This crate provides async database operations for users, conversation
//! history, and bearer-token sessions using SQLx with SQLite.
//!
//! # Example
//!
//! ```no_run
//! use database::{user, Database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:sage.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     // Create a user
//!     let user = user::create(db.pool(), "bob@example.com", "$argon2id$...", "Bob", None).await?;
//!     println!("created user {}", user.id);
//!
//!     Ok(())
//! }
//! ```

pub mod conversation;
pub mod error;
pub mod models;
pub mod session;
pub mod user;
pub mod validation;

pub use error::{DatabaseError, Result};
pub use models::{Conversation, User};
pub use validation::ValidationError;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    /// Set high enough to handle concurrent request processing.
    const DEFAULT_POOL_SIZE: u32 = 20;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// // File database
    /// let db = database::Database::connect("sqlite:data/sage.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing)
    /// let db = database::Database::connect("sqlite::memory:").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("Connected to database: {} (pool size: {})", url, pool_size);

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is
    /// up to date. Migrations are idempotent; existing data is never
    /// dropped.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::{Preferences, SummaryLength};

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_user_store() {
        let db = test_db().await;

        // Create
        let user = user::create(db.pool(), "alice@example.com", "hash", "Alice", None)
            .await
            .unwrap();
        assert!(user.id > 0);
        assert!(!user.created_at.is_empty());

        // Read
        let fetched = user::get(db.pool(), user.id).await.unwrap();
        assert_eq!(fetched.full_name, "Alice");

        // Read by email
        let by_email = user::get_by_email(db.pool(), "alice@example.com")
            .await
            .unwrap();
        assert_eq!(by_email.map(|u| u.id), Some(user.id));
        let missing = user::get_by_email(db.pool(), "nobody@example.com")
            .await
            .unwrap();
        assert!(missing.is_none());

        // Duplicate email
        let dup = user::create(db.pool(), "alice@example.com", "hash2", "Alice 2", None).await;
        assert!(matches!(dup, Err(DatabaseError::AlreadyExists { .. })));

        // Delete
        assert!(user::delete(db.pool(), user.id).await.unwrap());
        assert!(!user::delete(db.pool(), user.id).await.unwrap());
        let result = user::get(db.pool(), user.id).await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_user_preferences_blob() {
        let db = test_db().await;

        // Never-written preferences fall back to the defaults
        let user = user::create(db.pool(), "bob@example.com", "hash", "Bob", None)
            .await
            .unwrap();
        assert_eq!(user.preferences(), Preferences::default());

        // Explicitly written preferences round-trip
        let prefs = Preferences::new(SummaryLength::Short, vec!["rust".to_string()]);
        user::update_preferences(db.pool(), user.id, &prefs.to_blob())
            .await
            .unwrap();
        let fetched = user::get(db.pool(), user.id).await.unwrap();
        assert_eq!(fetched.preferences(), prefs);

        // A malformed blob recovers to the defaults
        user::update_preferences(db.pool(), user.id, "not json")
            .await
            .unwrap();
        let fetched = user::get(db.pool(), user.id).await.unwrap();
        assert_eq!(fetched.preferences(), Preferences::default());

        // Updating an unknown user is NotFound
        let result = user::update_preferences(db.pool(), 9999, &prefs.to_blob()).await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_conversation_ledger() {
        let db = test_db().await;

        let user = user::create(db.pool(), "carol@example.com", "hash", "Carol", None)
            .await
            .unwrap();

        let first = conversation::create(db.pool(), user.id, "q1", "r1")
            .await
            .unwrap();
        let second = conversation::create(db.pool(), user.id, "q2", "r2")
            .await
            .unwrap();
        assert!(second.id > first.id);
        assert!(!second.timestamp.is_empty());

        // Newest first, ties broken by insertion order
        let listed = conversation::list_by_user(db.pool(), user.id).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);

        // Reads are idempotent
        let again = conversation::list_by_user(db.pool(), user.id).await.unwrap();
        assert_eq!(listed, again);

        // Update text
        conversation::update_text(db.pool(), first.id, None, Some("r1-edited"))
            .await
            .unwrap();
        let fetched = conversation::get(db.pool(), first.id).await.unwrap();
        assert_eq!(fetched.query, "q1");
        assert_eq!(fetched.response, "r1-edited");

        // Delete one, then the rest in bulk
        assert!(conversation::delete(db.pool(), first.id).await.unwrap());
        assert!(!conversation::delete(db.pool(), first.id).await.unwrap());
        assert!(conversation::delete_by_user(db.pool(), user.id).await.unwrap());
        assert_eq!(conversation::count_by_user(db.pool(), user.id).await.unwrap(), 0);

        // Bulk delete with nothing left matches nothing
        assert!(!conversation::delete_by_user(db.pool(), user.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_all_spans_users() {
        let db = test_db().await;

        let a = user::create(db.pool(), "a@example.com", "hash", "A", None)
            .await
            .unwrap();
        let b = user::create(db.pool(), "b@example.com", "hash", "B", None)
            .await
            .unwrap();

        conversation::create(db.pool(), a.id, "qa", "ra").await.unwrap();
        let newest = conversation::create(db.pool(), b.id, "qb", "rb").await.unwrap();

        let all = conversation::list_all(db.pool()).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, newest.id);
    }

    #[tokio::test]
    async fn test_user_delete_keeps_conversations() {
        let db = test_db().await;

        let user = user::create(db.pool(), "dave@example.com", "hash", "Dave", None)
            .await
            .unwrap();
        conversation::create(db.pool(), user.id, "q", "r").await.unwrap();

        assert!(user::delete(db.pool(), user.id).await.unwrap());
        assert_eq!(conversation::count_by_user(db.pool(), user.id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_sessions() {
        let db = test_db().await;

        let user = user::create(db.pool(), "erin@example.com", "hash", "Erin", None)
            .await
            .unwrap();

        session::create(db.pool(), user.id, "live-hash", 60).await.unwrap();
        assert_eq!(
            session::resolve(db.pool(), "live-hash").await.unwrap(),
            Some(user.id)
        );
        assert_eq!(session::resolve(db.pool(), "unknown-hash").await.unwrap(), None);

        // An already-expired session neither resolves nor survives a purge
        session::create(db.pool(), user.id, "stale-hash", -1).await.unwrap();
        assert_eq!(session::resolve(db.pool(), "stale-hash").await.unwrap(), None);
        assert_eq!(session::purge_expired(db.pool()).await.unwrap(), 1);
        assert_eq!(
            session::resolve(db.pool(), "live-hash").await.unwrap(),
            Some(user.id)
        );
    }
}
