use crate::api::feedback::handlers::submit_feedback_handler;
use crate::api::models::AppState;
use axum::{routing::post, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/feedback", post(submit_feedback_handler))
}
