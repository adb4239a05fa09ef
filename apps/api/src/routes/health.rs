use axum::extract::State;
use axum::Json;
use mongodb::bson::doc;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /
/// Root acknowledgment confirming the API is up.
pub async fn welcome_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Resume User-Data Service!"
    }))
}

/// GET /health
/// Round-trips a ping to MongoDB before reporting healthy.
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state.db.run_command(doc! { "ping": 1 }, None).await?;
    Ok(Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-api"
    })))
}
