//! Bearer-token session storage.
//!
//! Sessions map hashed opaque tokens to user ids with an expiry. Only the
//! SHA-256 hex of a token is ever stored.

use sqlx::SqlitePool;

use crate::error::Result;

/// Create a session for a user, expiring after `ttl_minutes`.
pub async fn create(
    pool: &SqlitePool,
    user_id: i64,
    token_hash: &str,
    ttl_minutes: i64,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO sessions (user_id, token_hash, expires_at)
        VALUES (?, ?, datetime('now', ?))
        "#,
    )
    .bind(user_id)
    .bind(token_hash)
    .bind(format!("{:+} minutes", ttl_minutes))
    .execute(pool)
    .await?;

    Ok(())
}

/// Resolve a token hash to a user id.
///
/// Returns `None` for unknown or expired sessions.
pub async fn resolve(pool: &SqlitePool, token_hash: &str) -> Result<Option<i64>> {
    let user_id = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT user_id
        FROM sessions
        WHERE token_hash = ? AND expires_at > datetime('now')
        "#,
    )
    .bind(token_hash)
    .fetch_optional(pool)
    .await?;

    Ok(user_id)
}

/// Remove expired sessions, returning how many were purged.
pub async fn purge_expired(pool: &SqlitePool) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM sessions
        WHERE expires_at <= datetime('now')
        "#,
    )
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
