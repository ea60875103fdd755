pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advisor::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/config", get(handlers::handle_config_status))
        .route("/api/v1/industries", get(handlers::handle_list_industries))
        .route(
            "/api/v1/industries/trends",
            post(handlers::handle_industry_trends),
        )
        .route("/api/v1/jobs/search", post(handlers::handle_job_search))
        .route("/api/v1/search", post(handlers::handle_search))
        .with_state(state)
}
