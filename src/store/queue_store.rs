use async_trait::async_trait;
use serde::Serialize;

use crate::interceptors::AppError;
use crate::models::{QueueEntry, StationCategory};
use crate::utils::WaitTime;

/// Outcome of a bulk clear. Deletion is per-entry and not atomic, so a
/// partial failure is reported item by item instead of pretending the whole
/// batch succeeded or failed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClearReport {
    pub deleted: usize,
    pub failed: Vec<ClearFailure>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClearFailure {
    pub id: i64,
    pub reason: String,
}

impl ClearReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Port over the remote waitlist collection. The store owns entry ids and the
/// `created_at` ordering timestamps; callers never supply either.
#[async_trait]
pub trait QueueStore: Send + Sync {
    /// All entries of one category, ascending by `created_at`, ties broken by
    /// insertion order. Reflects every mutation this client already committed.
    async fn list_by_category(
        &self,
        category: StationCategory,
    ) -> Result<Vec<QueueEntry>, AppError>;

    /// Persist a new entry and return its store-assigned id. The ordering
    /// timestamp is taken from the store's clock at insert time, so entries
    /// from concurrent admins still totally order without client clock skew.
    async fn insert(
        &self,
        category: StationCategory,
        uid: &str,
        login_nickname: &str,
        wait_time: &WaitTime,
    ) -> Result<i64, AppError>;

    /// Delete one entry. Returns `false` when the entry was already gone,
    /// e.g. removed by a concurrent admin.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Delete every entry of one category, entry by entry. Not atomic; the
    /// report says which deletions went through.
    async fn clear_category(&self, category: StationCategory) -> Result<ClearReport, AppError>;
}
