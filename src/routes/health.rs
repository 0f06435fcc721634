use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::AppState;

#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let database = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => "healthy",
        Err(e) => {
            tracing::warn!("Database health check failed: {}", e);
            "unhealthy"
        }
    };

    let body = json!({
        "status": "ok",
        "database": database,
    });
    (StatusCode::OK, Json(body))
}

pub async fn banner() -> &'static str {
    "Quiz backend server (two-level categories)\n"
}
