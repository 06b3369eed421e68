use crate::analysis::{Analysis, SentimentAnalyzer};
use crate::storage::FeedbackStore;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub feedback_store: Arc<FeedbackStore>,
    /// `None` runs the plain variant without enrichment
    pub analyzer: Option<Arc<dyn SentimentAnalyzer>>,
}

/// Request to submit feedback
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub feedback: String,
}

/// Response after feedback is stored
#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
}

impl FeedbackResponse {
    pub fn saved(analysis: Option<Analysis>) -> Self {
        let (summary, sentiment) = match analysis {
            Some(Analysis { summary, sentiment }) => (Some(summary), Some(sentiment)),
            None => (None, None),
        };

        Self {
            message: "Feedback saved".to_string(),
            summary,
            sentiment,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Request body did not match the expected schema
    Validation(String),
    /// Server-side failure; the message is logged, never returned
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Internal(msg) => {
                error!("{}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
