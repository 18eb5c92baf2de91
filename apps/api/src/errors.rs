use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractionError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM API key is invalid or expired")]
    Auth,

    #[error("LLM API rate limited")]
    RateLimited,

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Auth => AppError::Auth,
            LlmError::RateLimited { .. } => AppError::RateLimited,
            other => AppError::Llm(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Auth => (
                StatusCode::UNAUTHORIZED,
                "AUTH_ERROR",
                "LLM API key is invalid or expired. Generate a new key at \
                 https://console.groq.com/keys and update GROQ_API_KEY."
                    .to_string(),
            ),
            AppError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "RATE_LIMITED",
                "The LLM API is rate limited. Please wait a couple of minutes and try again."
                    .to_string(),
            ),
            AppError::Extraction(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EXTRACTION_ERROR",
                e.to_string(),
            ),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "An AI processing error occurred. Please try again.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_llm_error_maps_to_429_variant() {
        let app_err: AppError = LlmError::RateLimited { retries: 4 }.into();
        assert!(matches!(app_err, AppError::RateLimited));
    }

    #[test]
    fn test_auth_llm_error_maps_to_auth_variant() {
        let app_err: AppError = LlmError::Auth.into();
        assert!(matches!(app_err, AppError::Auth));
    }

    #[test]
    fn test_empty_content_maps_to_llm_variant() {
        let app_err: AppError = LlmError::EmptyContent.into();
        assert!(matches!(app_err, AppError::Llm(_)));
    }
}
