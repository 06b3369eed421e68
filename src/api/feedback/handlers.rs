use crate::api::models::*;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

pub async fn submit_feedback_handler(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Json<FeedbackResponse>, AppError> {
    // Validate
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    // Store
    state
        .feedback_store
        .append(&request.feedback)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to save feedback: {}", e)))?;

    info!(chars = request.feedback.chars().count(), "Feedback saved");

    // Enrich
    let analysis = match &state.analyzer {
        Some(analyzer) => Some(analyzer.analyze(&request.feedback).await),
        None => None,
    };

    Ok(Json(FeedbackResponse::saved(analysis)))
}
