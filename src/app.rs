use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/tasks", get(handlers::get_day).post(handlers::add_task))
        .route("/api/tasks/toggle", post(handlers::toggle_task))
        .route("/api/month", get(handlers::get_month))
        .with_state(state)
}
