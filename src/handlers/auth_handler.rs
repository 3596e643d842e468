use axum::{extract::State, Json};

use crate::config::AppState;
use crate::dto::{LoginRequest, LoginResponse};
use crate::interceptors::{ApiSuccess, AppError};
use crate::services::AuthService;

/// Admin login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponse>, AppError> {
    let auth_service = AuthService::new(state.db.clone());
    let response = auth_service.login(request).await?;

    Ok(ApiSuccess::new("Login successful", response))
}
