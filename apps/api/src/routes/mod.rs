pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::resumes::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::welcome_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes", post(handlers::handle_create_resume))
        .route("/api/v1/resumes", get(handlers::handle_list_resumes))
        .route("/api/v1/resumes/:id", get(handlers::handle_get_resume))
        .route("/api/v1/resumes/:id", put(handlers::handle_replace_resume))
        .route(
            "/api/v1/resumes/:id",
            delete(handlers::handle_delete_resume),
        )
        .with_state(state)
}
