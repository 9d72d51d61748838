use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/metrics", get(handlers::get_metrics))
        .route("/api/profile", get(handlers::get_profile).post(handlers::save_profile))
        .route("/api/streak", post(handlers::save_streak))
        .route("/api/steps", post(handlers::save_steps))
        .route("/api/activity", post(handlers::save_activity))
        .route("/api/cards", post(handlers::add_card))
        .with_state(state)
}
