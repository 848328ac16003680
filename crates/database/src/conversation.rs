//! Conversation ledger operations.
//!
//! Every operation is a single non-transactional statement; no multi-record
//! atomicity is guaranteed across a create and other writes.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::Conversation;

/// Append a new conversation record and return the stored row.
///
/// The id and timestamp are assigned by the store.
pub async fn create(
    pool: &SqlitePool,
    user_id: i64,
    query: &str,
    response: &str,
) -> Result<Conversation> {
    let result = sqlx::query(
        r#"
        INSERT INTO conversations (user_id, query, response)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(query)
    .bind(response)
    .execute(pool)
    .await?;

    get(pool, result.last_insert_rowid()).await
}

/// Get a conversation by ID.
pub async fn get(pool: &SqlitePool, id: i64) -> Result<Conversation> {
    sqlx::query_as::<_, Conversation>(
        r#"
        SELECT id, user_id, query, response, timestamp
        FROM conversations
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Conversation",
        id: id.to_string(),
    })
}

/// List all conversations, newest first.
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Conversation>> {
    let conversations = sqlx::query_as::<_, Conversation>(
        r#"
        SELECT id, user_id, query, response, timestamp
        FROM conversations
        ORDER BY timestamp DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(conversations)
}

/// List a user's conversations, newest first.
pub async fn list_by_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Conversation>> {
    let conversations = sqlx::query_as::<_, Conversation>(
        r#"
        SELECT id, user_id, query, response, timestamp
        FROM conversations
        WHERE user_id = ?
        ORDER BY timestamp DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(conversations)
}

/// Update a conversation's query and/or response text.
///
/// `None` leaves the current value in place.
pub async fn update_text(
    pool: &SqlitePool,
    id: i64,
    query: Option<&str>,
    response: Option<&str>,
) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE conversations
        SET query = COALESCE(?, query), response = COALESCE(?, response)
        WHERE id = ?
        "#,
    )
    .bind(query)
    .bind(response)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Conversation",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Delete a conversation by ID.
///
/// Returns `false` when no such conversation existed.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM conversations
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete all of a user's conversations.
///
/// Returns `false` when none matched.
pub async fn delete_by_user(pool: &SqlitePool, user_id: i64) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM conversations
        WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Count a user's conversations.
pub async fn count_by_user(pool: &SqlitePool, user_id: i64) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM conversations WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}
