use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::StationCategory;

/// One admitted waiting user inside one category's waitlist.
///
/// Entries are immutable once persisted: there is no update-in-place, and
/// moving a user to another category means remove + re-add with a new id and
/// a new position. `created_at` is assigned by the store at insert time and
/// is the sole ordering key within a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Store-assigned identifier, immutable.
    pub id: i64,
    /// Canonical id of the waiting user; the queue does not own the user.
    pub uid: String,
    /// Nickname copied at admission time, not re-synced afterwards.
    pub login_nickname: String,
    pub category: StationCategory,
    /// Estimated wait in `hh:mm`; always a value that passed validation.
    pub wait_time: String,
    pub created_at: DateTime<Utc>,
}
