pub mod feedback;
pub mod logging;
pub mod models;

// Re-exports
pub use models::*;

use axum::{extract::DefaultBodyLimit, routing::get, Json, Router};

// Ping handler (simple, keep here)
pub async fn ping_handler() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong".to_string(),
    })
}

/// Full application router with request logging applied.
/// Feedback bodies are not size-capped.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping_handler))
        .merge(feedback::routes())
        .with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(logging::request_logger())
}
