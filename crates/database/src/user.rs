//! User store operations.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::User;

/// Create a new user and return the stored row.
///
/// The id and creation timestamp are assigned by the store. A duplicate
/// email maps to [`DatabaseError::AlreadyExists`].
pub async fn create(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
    full_name: &str,
    preferences: Option<&str>,
) -> Result<User> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (email, password_hash, full_name, preferences)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .bind(full_name)
    .bind(preferences)
    .execute(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "User",
                    id: email.to_string(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })?;

    get(pool, result.last_insert_rowid()).await
}

/// Get a user by ID.
pub async fn get(pool: &SqlitePool, id: i64) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, full_name, preferences, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "User",
        id: id.to_string(),
    })
}

/// Get a user by email (case-sensitive exact match).
///
/// Returns `None` when absent; callers own the distinction between
/// "unknown email" and an error.
pub async fn get_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, full_name, preferences, created_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Replace a user's preferences blob.
pub async fn update_preferences(pool: &SqlitePool, id: i64, preferences: &str) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET preferences = ?
        WHERE id = ?
        "#,
    )
    .bind(preferences)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "User",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Delete a user by ID.
///
/// Returns `false` when no such user existed. Does not touch the user's
/// conversations.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
