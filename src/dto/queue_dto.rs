use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{QueueEntry, StationCategory};

/// Admit a user into the currently selected category.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EnqueueRequest {
    #[validate(length(min = 1, message = "Nickname is required"))]
    pub nickname: String,

    /// Estimated wait in `hh:mm`; format is checked by the wait-time
    /// validator before anything is persisted.
    #[validate(length(min = 1, message = "Wait time is required"))]
    pub wait_time: String,
}

/// Switch the active category tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectCategoryRequest {
    pub category: StationCategory,
}

/// One category's queue, in admission order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueResponse {
    pub category: StationCategory,
    pub entries: Vec<QueueEntry>,
}
