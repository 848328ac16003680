//! Per-user research history assembly.

use database::{conversation, user, Conversation, Database};
use serde::Serialize;

use crate::error::ResearchError;

/// A user's research history summary.
#[derive(Debug, Clone, Serialize)]
pub struct ResearchHistory {
    /// The user the history belongs to.
    pub user_id: i64,
    /// The user's display name.
    pub user_name: String,
    /// Total number of recorded queries.
    pub total_queries: usize,
    /// The recorded exchanges, newest first.
    pub conversations: Vec<Conversation>,
}

/// Assemble the research history for a user.
///
/// The user is existence-checked first; an unknown id is `NotFound`.
pub async fn history(db: &Database, user_id: i64) -> Result<ResearchHistory, ResearchError> {
    let user = user::get(db.pool(), user_id).await?;
    let conversations = conversation::list_by_user(db.pool(), user_id).await?;

    Ok(ResearchHistory {
        user_id,
        user_name: user.full_name,
        total_queries: conversations.len(),
        conversations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::user;

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_history_totals_and_order() {
        let db = test_db().await;
        let user = user::create(db.pool(), "a@x.com", "hash", "Ada", None)
            .await
            .unwrap();

        conversation::create(db.pool(), user.id, "q1", "r1").await.unwrap();
        conversation::create(db.pool(), user.id, "q2", "r2").await.unwrap();

        let history = history(&db, user.id).await.unwrap();
        assert_eq!(history.user_name, "Ada");
        assert_eq!(history.total_queries, 2);
        assert_eq!(history.conversations[0].query, "q2");
        assert_eq!(history.conversations[1].query, "q1");
    }

    #[tokio::test]
    async fn test_history_unknown_user() {
        let db = test_db().await;
        let err = history(&db, 42).await.unwrap_err();
        assert!(matches!(err, ResearchError::NotFound { .. }));
    }
}
