use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::interceptors::AppError;
use crate::models::{QueueEntry, StationCategory, User};
use crate::store::{ClearFailure, ClearReport, QueueStore, UserDirectory};
use crate::utils::WaitTime;

/// Raw `queue_entries` row; the category comes back as text and is parsed
/// into the closed enum before leaving this module.
#[derive(Debug, FromRow)]
struct QueueEntryRow {
    id: i64,
    uid: String,
    login_nickname: String,
    category: String,
    wait_time: String,
    created_at: DateTime<Utc>,
}

impl QueueEntryRow {
    fn into_entry(self) -> Result<QueueEntry, AppError> {
        let category = self.category.parse::<StationCategory>().map_err(|_| {
            AppError::InternalError(format!(
                "Queue entry {} carries unknown category {:?}",
                self.id, self.category
            ))
        })?;

        Ok(QueueEntry {
            id: self.id,
            uid: self.uid,
            login_nickname: self.login_nickname,
            category,
            wait_time: self.wait_time,
            created_at: self.created_at,
        })
    }
}

/// Postgres-backed waitlist store. `created_at` defaults to the database
/// clock on insert and `id` is a bigserial, which is what breaks ordering
/// ties between entries inserted in the same instant.
#[derive(Clone)]
pub struct PgQueueStore {
    pool: PgPool,
}

impl PgQueueStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QueueStore for PgQueueStore {
    async fn list_by_category(
        &self,
        category: StationCategory,
    ) -> Result<Vec<QueueEntry>, AppError> {
        let rows = sqlx::query_as::<_, QueueEntryRow>(
            "SELECT id, uid, login_nickname, category, wait_time, created_at
             FROM queue_entries
             WHERE category = $1
             ORDER BY created_at ASC, id ASC",
        )
        .bind(category.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(QueueEntryRow::into_entry).collect()
    }

    async fn insert(
        &self,
        category: StationCategory,
        uid: &str,
        login_nickname: &str,
        wait_time: &WaitTime,
    ) -> Result<i64, AppError> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO queue_entries (uid, login_nickname, category, wait_time)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(uid)
        .bind(login_nickname)
        .bind(category.as_str())
        .bind(wait_time.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM queue_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn clear_category(&self, category: StationCategory) -> Result<ClearReport, AppError> {
        let ids: Vec<(i64,)> =
            sqlx::query_as("SELECT id FROM queue_entries WHERE category = $1 ORDER BY id")
                .bind(category.as_str())
                .fetch_all(&self.pool)
                .await?;

        let mut report = ClearReport::default();
        for (id,) in ids {
            match sqlx::query("DELETE FROM queue_entries WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await
            {
                Ok(_) => report.deleted += 1,
                Err(e) => {
                    tracing::warn!("Failed to delete queue entry {}: {}", id, e);
                    report.failed.push(ClearFailure {
                        id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }
}

/// Postgres-backed member directory over the `users` table.
#[derive(Clone)]
pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE login_nickname = $1")
            .bind(nickname)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn set_activated(&self, uid: &str, activated: bool) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET activated = $2 WHERE uid = $1 RETURNING *",
        )
        .bind(uid)
        .bind(activated)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user)
    }
}
