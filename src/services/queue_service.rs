use std::sync::Arc;

use tokio::sync::RwLock;

use crate::interceptors::AppError;
use crate::models::{QueueEntry, StationCategory};
use crate::store::{ClearReport, QueueStore, UserDirectory};
use crate::utils::WaitTime;

/// Orchestrates the per-category waitlists.
///
/// The service keeps one selected category and a cached copy of its queue.
/// The cache is never maintained incrementally: every mutation and every
/// category switch re-reads the whole list from the store, which is the
/// source of truth. Ordering between concurrent admins is delegated entirely
/// to the store's insert-time timestamps; a fresh entry may therefore not
/// land last if another admin inserted between our insert and the re-read,
/// and another admin's changes stay invisible until the next refresh.
pub struct QueueService {
    store: Arc<dyn QueueStore>,
    directory: Arc<dyn UserDirectory>,
    selected: RwLock<StationCategory>,
    current: RwLock<Vec<QueueEntry>>,
}

impl QueueService {
    pub fn new(store: Arc<dyn QueueStore>, directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            store,
            directory,
            selected: RwLock::new(StationCategory::Pcs),
            current: RwLock::new(Vec::new()),
        }
    }

    pub async fn selected_category(&self) -> StationCategory {
        *self.selected.read().await
    }

    /// Cached queue of the selected category, as of the last refresh.
    pub async fn current_queue(&self) -> Vec<QueueEntry> {
        self.current.read().await.clone()
    }

    /// Switch the active category. The previous cache is discarded and the
    /// new category is read in full; stale entries from the old tab never
    /// survive a switch.
    pub async fn select_category(
        &self,
        category: StationCategory,
    ) -> Result<Vec<QueueEntry>, AppError> {
        {
            let mut selected = self.selected.write().await;
            *selected = category;
        }
        tracing::debug!("Selected category {}", category);
        self.refresh().await
    }

    /// Re-read the selected category from the store and replace the cache
    /// wholesale.
    pub async fn refresh(&self) -> Result<Vec<QueueEntry>, AppError> {
        let category = *self.selected.read().await;
        let entries = self.store.list_by_category(category).await?;

        let mut current = self.current.write().await;
        *current = entries.clone();
        Ok(entries)
    }

    /// Admit a user into the selected category's waitlist.
    ///
    /// Lookup and validation both happen before any store mutation, so a
    /// rejected add leaves the queue untouched. The same user may be admitted
    /// more than once into one category; repeat admissions are permitted on
    /// purpose. A failure of the final re-read leaves the entry persisted but
    /// not yet visible here; a later refresh recovers.
    pub async fn add(
        &self,
        nickname: &str,
        raw_wait_time: &str,
    ) -> Result<Vec<QueueEntry>, AppError> {
        let user = self
            .directory
            .find_by_nickname(nickname)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let wait_time = WaitTime::parse(raw_wait_time)?;

        let category = *self.selected.read().await;
        let id = self
            .store
            .insert(category, &user.uid, &user.login_nickname, &wait_time)
            .await?;

        tracing::info!(
            "Admitted {} into {} queue as entry {} (wait {})",
            user.login_nickname,
            category,
            id,
            wait_time
        );

        self.refresh().await
    }

    /// Remove one entry. An entry already gone (say, removed by a concurrent
    /// admin) surfaces as `NotFound`, but the refresh still runs so the
    /// caller sees the true remaining queue either way.
    pub async fn remove(&self, entry_id: i64) -> Result<Vec<QueueEntry>, AppError> {
        let deleted = self.store.delete_by_id(entry_id).await?;
        let entries = self.refresh().await?;

        if !deleted {
            return Err(AppError::NotFound("Queue entry not found".to_string()));
        }

        tracing::info!("Removed queue entry {}", entry_id);
        Ok(entries)
    }

    /// Clear one category. Deletion is per-entry and not atomic; the report
    /// lists what failed, and the refresh afterwards is the authority on what
    /// actually remains.
    pub async fn clear(&self, category: StationCategory) -> Result<ClearReport, AppError> {
        let report = self.store.clear_category(category).await?;

        if report.is_complete() {
            tracing::info!("Cleared {} queue ({} entries)", category, report.deleted);
        } else {
            tracing::warn!(
                "Partially cleared {} queue: {} deleted, {} failed",
                category,
                report.deleted,
                report.failed.len()
            );
        }

        self.refresh().await?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{Duration, Utc};

    use super::*;
    use crate::models::User;
    use crate::store::{ClearFailure, MockUserDirectory};

    /// In-memory stand-in for the remote store. A monotonic counter plays the
    /// role of the server clock, so entries order by insertion.
    struct InMemoryStore {
        entries: Mutex<Vec<QueueEntry>>,
        next_id: AtomicI64,
        fail_delete: Mutex<HashSet<i64>>,
    }

    impl InMemoryStore {
        fn new() -> Self {
            Self {
                entries: Mutex::new(Vec::new()),
                next_id: AtomicI64::new(1),
                fail_delete: Mutex::new(HashSet::new()),
            }
        }

        fn fail_deletion_of(&self, id: i64) {
            self.fail_delete.lock().unwrap().insert(id);
        }

        fn len(&self) -> usize {
            self.entries.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl QueueStore for InMemoryStore {
        async fn list_by_category(
            &self,
            category: StationCategory,
        ) -> Result<Vec<QueueEntry>, AppError> {
            let mut entries: Vec<QueueEntry> = self
                .entries
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.category == category)
                .cloned()
                .collect();
            entries.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
            Ok(entries)
        }

        async fn insert(
            &self,
            category: StationCategory,
            uid: &str,
            login_nickname: &str,
            wait_time: &WaitTime,
        ) -> Result<i64, AppError> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let entry = QueueEntry {
                id,
                uid: uid.to_string(),
                login_nickname: login_nickname.to_string(),
                category,
                wait_time: wait_time.as_str().to_string(),
                created_at: Utc::now() + Duration::seconds(id),
            };
            self.entries.lock().unwrap().push(entry);
            Ok(id)
        }

        async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
            let mut entries = self.entries.lock().unwrap();
            let before = entries.len();
            entries.retain(|e| e.id != id);
            Ok(entries.len() < before)
        }

        async fn clear_category(
            &self,
            category: StationCategory,
        ) -> Result<ClearReport, AppError> {
            let ids: Vec<i64> = self
                .entries
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.category == category)
                .map(|e| e.id)
                .collect();

            let mut report = ClearReport::default();
            for id in ids {
                if self.fail_delete.lock().unwrap().contains(&id) {
                    report.failed.push(ClearFailure {
                        id,
                        reason: "simulated store failure".to_string(),
                    });
                } else {
                    self.entries.lock().unwrap().retain(|e| e.id != id);
                    report.deleted += 1;
                }
            }
            Ok(report)
        }
    }

    fn member(nickname: &str) -> User {
        User {
            uid: format!("uid-{nickname}"),
            email: format!("{nickname}@example.com"),
            password_hash: "hash".to_string(),
            full_name: None,
            login_nickname: nickname.to_string(),
            cpf: None,
            date_of_birth: None,
            phone: None,
            responsible_phone: None,
            state: None,
            city: None,
            admin: false,
            activated: true,
            created_at: Utc::now(),
        }
    }

    fn directory_with(nicknames: &[&str]) -> MockUserDirectory {
        let users: Vec<User> = nicknames.iter().map(|n| member(n)).collect();
        let mut directory = MockUserDirectory::new();
        directory.expect_find_by_nickname().returning(move |nickname| {
            Ok(users.iter().find(|u| u.login_nickname == nickname).cloned())
        });
        directory
    }

    fn service_with(nicknames: &[&str]) -> (Arc<InMemoryStore>, QueueService) {
        let store = Arc::new(InMemoryStore::new());
        let service = QueueService::new(store.clone(), Arc::new(directory_with(nicknames)));
        (store, service)
    }

    #[tokio::test]
    async fn starts_on_pcs_with_an_empty_queue() {
        let (_, service) = service_with(&[]);

        assert_eq!(service.selected_category().await, StationCategory::Pcs);
        assert!(service.current_queue().await.is_empty());
    }

    #[tokio::test]
    async fn add_admits_a_user_into_the_selected_category() {
        let (_, service) = service_with(&["alice"]);

        let queue = service.add("alice", "00:30").await.unwrap();

        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].login_nickname, "alice");
        assert_eq!(queue[0].uid, "uid-alice");
        assert_eq!(queue[0].wait_time, "00:30");
        assert_eq!(queue[0].category, StationCategory::Pcs);
        assert_eq!(service.current_queue().await, queue);
    }

    #[tokio::test]
    async fn insertion_order_wins_over_names_and_wait_times() {
        let (_, service) = service_with(&["amy", "bob", "cid"]);

        service.add("amy", "00:30").await.unwrap();
        service.add("bob", "01:00").await.unwrap();
        let queue = service.add("cid", "00:45").await.unwrap();

        let names: Vec<&str> = queue.iter().map(|e| e.login_nickname.as_str()).collect();
        assert_eq!(names, ["amy", "bob", "cid"]);
    }

    #[tokio::test]
    async fn order_is_stable_across_re_reads() {
        let (_, service) = service_with(&["amy", "bob", "cid"]);
        service.add("cid", "00:10").await.unwrap();
        service.add("amy", "00:20").await.unwrap();
        service.add("bob", "00:30").await.unwrap();

        let first = service.refresh().await.unwrap();
        let second = service.refresh().await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn unknown_user_aborts_before_any_mutation() {
        let (store, service) = service_with(&["alice"]);

        let err = service.add("nonexistent-user", "10:00").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.len(), 0);
        assert!(service.refresh().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_wait_time_aborts_before_any_mutation() {
        let (store, service) = service_with(&["alice"]);

        let err = service.add("alice", "99:99").await.unwrap_err();

        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn the_same_user_may_queue_twice() {
        let (_, service) = service_with(&["alice"]);

        service.add("alice", "00:30").await.unwrap();
        let queue = service.add("alice", "00:45").await.unwrap();

        assert_eq!(queue.len(), 2);
        assert_ne!(queue[0].id, queue[1].id);
        assert_eq!(queue[0].uid, queue[1].uid);
    }

    #[tokio::test]
    async fn switching_category_never_leaks_entries_across_tabs() {
        let (_, service) = service_with(&["alice", "bob"]);
        service.add("alice", "00:30").await.unwrap();

        let consoles = service
            .select_category(StationCategory::Consoles)
            .await
            .unwrap();
        assert!(consoles.is_empty());

        service.add("bob", "01:00").await.unwrap();
        let consoles = service.current_queue().await;
        assert_eq!(consoles.len(), 1);
        assert_eq!(consoles[0].category, StationCategory::Consoles);

        let pcs = service.select_category(StationCategory::Pcs).await.unwrap();
        assert_eq!(pcs.len(), 1);
        assert_eq!(pcs[0].login_nickname, "alice");
        assert!(pcs.iter().all(|e| e.category == StationCategory::Pcs));
    }

    #[tokio::test]
    async fn remove_shrinks_the_queue_by_exactly_one() {
        let (_, service) = service_with(&["alice", "bob"]);
        service.add("alice", "00:30").await.unwrap();
        let queue = service.add("bob", "00:45").await.unwrap();
        let alice_id = queue[0].id;

        let remaining = service.remove(alice_id).await.unwrap();

        assert_eq!(remaining.len(), 1);
        assert!(remaining.iter().all(|e| e.id != alice_id));
        assert_eq!(remaining[0].login_nickname, "bob");
    }

    #[tokio::test]
    async fn removing_a_missing_entry_is_not_found_and_changes_nothing() {
        let (_, service) = service_with(&["alice"]);
        service.add("alice", "00:30").await.unwrap();

        let err = service.remove(9999).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(service.current_queue().await.len(), 1);
    }

    #[tokio::test]
    async fn clear_empties_exactly_one_category() {
        let (_, service) = service_with(&["alice", "bob"]);
        service.add("alice", "00:30").await.unwrap();
        service
            .select_category(StationCategory::Consoles)
            .await
            .unwrap();
        service.add("bob", "01:00").await.unwrap();

        let report = service.clear(StationCategory::Consoles).await.unwrap();

        assert_eq!(report.deleted, 1);
        assert!(report.is_complete());
        assert!(service.current_queue().await.is_empty());

        let pcs = service.select_category(StationCategory::Pcs).await.unwrap();
        assert_eq!(pcs.len(), 1);
        assert_eq!(pcs[0].login_nickname, "alice");
    }

    #[tokio::test]
    async fn partial_clear_reports_failures_and_the_refresh_shows_survivors() {
        let (store, service) = service_with(&["alice", "bob"]);
        service.add("alice", "00:30").await.unwrap();
        let queue = service.add("bob", "00:45").await.unwrap();
        let stuck_id = queue[1].id;
        store.fail_deletion_of(stuck_id);

        let report = service.clear(StationCategory::Pcs).await.unwrap();

        assert_eq!(report.deleted, 1);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].id, stuck_id);

        let remaining = service.current_queue().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, stuck_id);
    }
}
