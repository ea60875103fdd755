use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Provider failures never show up here: orchestrators fold them into an
/// `AdvisorReport`. This type only covers problems detected before any
/// orchestration call starts.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing required API keys: {}", .0.join(", "))]
    MissingApiKeys(Vec<&'static str>),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::MissingApiKeys(_) => (
                StatusCode::BAD_REQUEST,
                "MISSING_API_KEYS",
                format!(
                    "{self}. Provide them in the request or set FIRECRAWL_API_KEY / OPENAI_API_KEY."
                ),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
