use axum::{
    extract::{Path, State},
    Json,
};

use crate::config::AppState;
use crate::dto::{EnqueueRequest, QueueResponse, SelectCategoryRequest};
use crate::interceptors::{ApiSuccess, AppError};
use crate::models::StationCategory;
use crate::store::ClearReport;
use crate::utils::validate_request;

/// Re-read and return the queue of the currently selected category
pub async fn get_queue(
    State(state): State<AppState>,
) -> Result<ApiSuccess<QueueResponse>, AppError> {
    let entries = state.queue.refresh().await?;
    let category = state.queue.selected_category().await;

    Ok(ApiSuccess::new(
        "Queue retrieved",
        QueueResponse { category, entries },
    ))
}

/// Switch the active category tab and return its queue
pub async fn select_category(
    State(state): State<AppState>,
    Json(request): Json<SelectCategoryRequest>,
) -> Result<ApiSuccess<QueueResponse>, AppError> {
    let entries = state.queue.select_category(request.category).await?;

    Ok(ApiSuccess::new(
        "Category selected",
        QueueResponse {
            category: request.category,
            entries,
        },
    ))
}

/// Admit a user into the selected category's queue
pub async fn add_to_queue(
    State(state): State<AppState>,
    Json(request): Json<EnqueueRequest>,
) -> Result<ApiSuccess<QueueResponse>, AppError> {
    validate_request(&request)?;

    let entries = state
        .queue
        .add(&request.nickname, &request.wait_time)
        .await?;
    let category = state.queue.selected_category().await;

    Ok(ApiSuccess::new(
        "User added to queue",
        QueueResponse { category, entries },
    ))
}

/// Remove one entry from the queue
pub async fn remove_from_queue(
    State(state): State<AppState>,
    Path(entry_id): Path<i64>,
) -> Result<ApiSuccess<QueueResponse>, AppError> {
    let entries = state.queue.remove(entry_id).await?;
    let category = state.queue.selected_category().await;

    Ok(ApiSuccess::new(
        "Entry removed from queue",
        QueueResponse { category, entries },
    ))
}

/// Clear one category's queue; the report lists any entries that survived
pub async fn clear_queue(
    State(state): State<AppState>,
    Path(category): Path<StationCategory>,
) -> Result<ApiSuccess<ClearReport>, AppError> {
    let report = state.queue.clear(category).await?;

    let message = if report.is_complete() {
        "Queue cleared"
    } else {
        "Queue partially cleared; some entries could not be removed"
    };

    Ok(ApiSuccess::new(message, report))
}
