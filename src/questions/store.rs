use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::{CreatedQuestion, QuestionItem};
use crate::{AppError, AppResult, rooms::store::RoomStore};

/// Read/write access to question records, scoped to a parent room.
pub struct QuestionStore<'a> {
    db_pool: &'a SqlitePool,
}

impl<'a> QuestionStore<'a> {
    pub fn new(db_pool: &'a SqlitePool) -> Self {
        Self { db_pool }
    }

    /// No existence check on the room: an unknown but well-formed id
    /// yields an empty list, only the write path reports a missing room.
    pub async fn list_for_room(&self, room_id: &str) -> Result<Vec<QuestionItem>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, question, answer, created_at FROM questions WHERE room_id = ?",
        )
        .bind(room_id)
        .fetch_all(self.db_pool)
        .await
    }

    /// Confirms the parent room exists before inserting; on a missing
    /// room nothing is written.
    pub async fn create(&self, room_id: &str, question: &str) -> AppResult<CreatedQuestion> {
        if !RoomStore::new(self.db_pool).exists(room_id).await? {
            return Err(AppError::RoomNotFound);
        }

        let id = Uuid::new_v4().to_string();
        sqlx::query(
            "INSERT INTO questions (id, room_id, question, answer, created_at)
             VALUES (?, ?, ?, NULL, ?)",
        )
        .bind(&id)
        .bind(room_id)
        .bind(question)
        .bind(Utc::now())
        .execute(self.db_pool)
        .await?;

        Ok(CreatedQuestion { id, question: question.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        db::migrate(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn create_refuses_unknown_room_without_inserting() {
        let pool = test_pool().await;
        let store = QuestionStore::new(&pool);
        let room_id = Uuid::new_v4().to_string();

        let err = store.create(&room_id, "Why?").await.unwrap_err();
        assert!(matches!(err, AppError::RoomNotFound));
        assert!(store.list_for_room(&room_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn created_questions_come_back_unanswered() {
        let pool = test_pool().await;
        let room = RoomStore::new(&pool).create("Standup", None).await.unwrap();
        let store = QuestionStore::new(&pool);

        let created = store.create(&room.id, "Why?").await.unwrap();
        assert_eq!(created.question, "Why?");

        let questions = store.list_for_room(&room.id).await.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, created.id);
        assert_eq!(questions[0].answer, None);
    }
}
