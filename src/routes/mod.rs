use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::config::AppState;
use crate::handlers::{
    add_to_queue, clear_queue, get_queue, get_user_by_nickname, health_check, login,
    remove_from_queue, select_category, toggle_activation,
};
use crate::middleware::{require_admin, JwtMiddleware};

/// Create API router
pub fn create_router(state: AppState) -> Router {
    // Health check route (outside /api)
    let health_routes = Router::new().route("/health", get(health_check));

    // Public API routes (no authentication required)
    let public_routes = Router::new().route("/auth/login", post(login));

    // Admin-only API routes; the JWT layer runs first and the admin gate
    // rejects non-admin tokens
    let protected_routes = Router::new()
        .route("/users/:nickname", get(get_user_by_nickname))
        .route("/users/:nickname/activation", put(toggle_activation))
        .route("/queue", get(get_queue).post(add_to_queue))
        .route("/queue/category", put(select_category))
        .route("/queue/category/:category", delete(clear_queue))
        .route("/queue/:id", delete(remove_from_queue))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn(JwtMiddleware::auth));

    Router::new()
        .merge(health_routes)
        .nest("/api", public_routes.merge(protected_routes))
        .with_state(state)
}
