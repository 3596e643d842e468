use axum::extract::{Path, State};

use crate::config::AppState;
use crate::dto::UserResponse;
use crate::interceptors::{ApiSuccess, AppError};

/// Look up a member by nickname (activation screen search)
pub async fn get_user_by_nickname(
    State(state): State<AppState>,
    Path(nickname): Path<String>,
) -> Result<ApiSuccess<UserResponse>, AppError> {
    let user = state
        .directory
        .find_by_nickname(&nickname)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(ApiSuccess::new("User found", user.to_response()))
}

/// Toggle a member's activation: activate a deactivated account, deactivate
/// an activated one
pub async fn toggle_activation(
    State(state): State<AppState>,
    Path(nickname): Path<String>,
) -> Result<ApiSuccess<UserResponse>, AppError> {
    let user = state
        .directory
        .find_by_nickname(&nickname)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let updated = state
        .directory
        .set_activated(&user.uid, !user.activated)
        .await?;

    let message = if updated.activated {
        "Account activated"
    } else {
        "Account deactivated"
    };

    tracing::info!("{}: {}", message, updated.login_nickname);

    Ok(ApiSuccess::new(message, updated.to_response()))
}
