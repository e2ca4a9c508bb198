use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::{CreatedRoom, RoomBasic, RoomDetail, RoomSummary};

/// Read/write access to room records. Borrows the pool per request; all
/// state lives in the database.
pub struct RoomStore<'a> {
    db_pool: &'a SqlitePool,
}

impl<'a> RoomStore<'a> {
    pub fn new(db_pool: &'a SqlitePool) -> Self {
        Self { db_pool }
    }

    /// Creation-ordered listing with the per-room question count computed
    /// at query time. The outer join keeps rooms with zero questions.
    pub async fn list(&self) -> Result<Vec<RoomSummary>, sqlx::Error> {
        sqlx::query_as(
            "SELECT r.id, r.name, COUNT(q.id) AS questions_count, r.created_at
             FROM rooms r
             LEFT JOIN questions q ON q.room_id = r.id
             GROUP BY r.id
             ORDER BY r.created_at ASC",
        )
        .fetch_all(self.db_pool)
        .await
    }

    /// Name-ordered `{id, name}` projection.
    pub async fn list_basic(&self) -> Result<Vec<RoomBasic>, sqlx::Error> {
        sqlx::query_as("SELECT id, name FROM rooms ORDER BY name")
            .fetch_all(self.db_pool)
            .await
    }

    /// Callers must have validated `id` syntactically already.
    pub async fn get(&self, id: &str) -> Result<Option<RoomDetail>, sqlx::Error> {
        sqlx::query_as("SELECT id, name, description FROM rooms WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db_pool)
            .await
    }

    pub async fn exists(&self, id: &str) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM rooms WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db_pool)
            .await?;
        Ok(row.is_some())
    }

    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<CreatedRoom, sqlx::Error> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now();

        sqlx::query("INSERT INTO rooms (id, name, description, created_at) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(name)
            .bind(description)
            .bind(created_at)
            .execute(self.db_pool)
            .await?;

        Ok(CreatedRoom {
            id,
            name: name.to_owned(),
            description: description.map(str::to_owned),
            created_at,
        })
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
    async fn basic_listing_orders_by_name() {
        let pool = test_pool().await;
        let store = RoomStore::new(&pool);
        store.create("Zulu", None).await.unwrap();
        store.create("Alpha", None).await.unwrap();

        let rooms = store.list_basic().await.unwrap();
        let names: Vec<&str> = rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Zulu"]);
    }

    #[tokio::test]
    async fn aggregate_listing_orders_by_creation_and_counts() {
        let pool = test_pool().await;
        let store = RoomStore::new(&pool);
        let first = store.create("Zulu", None).await.unwrap();
        let second = store.create("Alpha", None).await.unwrap();

        sqlx::query(
            "INSERT INTO questions (id, room_id, question, answer, created_at)
             VALUES (?, ?, ?, NULL, ?)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&second.id)
        .bind("Why?")
        .bind(Utc::now())
        .execute(&pool)
        .await
        .unwrap();

        let rooms = store.list().await.unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].id, first.id);
        assert_eq!(rooms[0].questions_count, 0);
        assert_eq!(rooms[1].id, second.id);
        assert_eq!(rooms[1].questions_count, 1);
    }

    #[tokio::test]
    async fn get_and_exists_roundtrip() {
        let pool = test_pool().await;
        let store = RoomStore::new(&pool);
        let created = store.create("Standup", Some("Daily sync")).await.unwrap();

        let detail = store.get(&created.id).await.unwrap().unwrap();
        assert_eq!(detail.name, "Standup");
        assert_eq!(detail.description.as_deref(), Some("Daily sync"));
        assert!(store.exists(&created.id).await.unwrap());

        let missing = Uuid::new_v4().to_string();
        assert!(store.get(&missing).await.unwrap().is_none());
        assert!(!store.exists(&missing).await.unwrap());
    }
}
