use ai_llm_service::AiLlmError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use conversation_builder::{BuilderError, UpstreamResource};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::core::app_config::ConfigError;

/// Public application error type.
///
/// Request-time failures are reduced to [`AppError::Http`] with a static
/// message; the underlying error is logged at conversion time and never
/// returned to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    Config(#[from] ConfigError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    /// Mapped request error with specific status & code.
    #[error("{message}")]
    Http {
        status: StatusCode,
        code: &'static str,
        message: &'static str,
    },
}

impl AppError {
    fn http(status: StatusCode, code: &'static str, message: &'static str) -> Self {
        AppError::Http {
            status,
            code,
            message,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Http { status, .. } => *status,
            AppError::Config(_) | AppError::Bind(_) | AppError::Server(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

impl From<BuilderError> for AppError {
    fn from(err: BuilderError) -> Self {
        let (code, message) = match &err {
            BuilderError::UpstreamUnavailable { resource, .. } => (
                "UPSTREAM_UNAVAILABLE",
                match resource {
                    UpstreamResource::Chat => "Error fetching chat data",
                    UpstreamResource::Question => "Error fetching question data",
                    UpstreamResource::Answer => "Error fetching answer data",
                },
            ),
            BuilderError::InvalidUpstreamShape(_) => ("INVALID_UPSTREAM_SHAPE", "Invalid chat data"),
            BuilderError::UnknownQuestionType(_) => {
                ("UNKNOWN_QUESTION_TYPE", "Unknown question type")
            }
            BuilderError::Config(_) | BuilderError::Serialize(_) => {
                ("INTERNAL", "Internal server error")
            }
        };

        error!(code, error = %err, "conversation request failed");
        AppError::http(StatusCode::INTERNAL_SERVER_ERROR, code, message)
    }
}

impl From<AiLlmError> for AppError {
    fn from(err: AiLlmError) -> Self {
        let (status, code, message) = match &err {
            AiLlmError::MissingParameter => (
                StatusCode::BAD_REQUEST,
                "MISSING_PARAMETER",
                "Position parameter is missing",
            ),
            AiLlmError::MissingCredential => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "MISSING_CREDENTIAL",
                "OpenAI API key is not configured",
            ),
            AiLlmError::TemplateNotFound(_) | AiLlmError::TemplateRead { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TEMPLATE_NOT_FOUND",
                "Prompt template not found",
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "LLM_ERROR",
                "Error generating conversation",
            ),
        };

        if status.is_client_error() {
            warn!(code, error = %err, "rejected llm request");
        } else {
            error!(code, error = %err, "llm request failed");
        }
        AppError::http(status, code, message)
    }
}
