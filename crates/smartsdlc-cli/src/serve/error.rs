//! Mapping from library errors to HTTP responses.

use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::warn;

use smartsdlc_core::{DocumentError, FeatureError, FeedbackError, LLMError};

/// Shape of the JSON error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorBody {
    /// `{"detail": msg}`
    Detail,
    /// `{"error": msg}`, used by code generation and chat
    Error,
}

/// An error returned from a route handler.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            body: ErrorBody::Detail,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            body: ErrorBody::Detail,
        }
    }

    /// Switches the body to the `{"error": msg}` shape.
    pub fn as_error_body(mut self) -> Self {
        self.body = ErrorBody::Error;
        self
    }
}

impl From<LLMError> for ApiError {
    fn from(err: LLMError) -> Self {
        let (status, message) = match &err {
            LLMError::MissingApiKey => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            LLMError::Upstream { status, body } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                format!("Upstream model API error: {}", body),
            ),
            LLMError::Auth { .. } | LLMError::Transport(_) | LLMError::InvalidResponse(_) => {
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
        };

        warn!(status = status.as_u16(), error = %err, "upstream call failed");

        Self {
            status,
            message,
            body: ErrorBody::Detail,
        }
    }
}

impl From<DocumentError> for ApiError {
    fn from(err: DocumentError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<FeatureError> for ApiError {
    fn from(err: FeatureError) -> Self {
        match err {
            FeatureError::Validation(msg) => Self::bad_request(msg),
            FeatureError::LLM(e) => e.into(),
            FeatureError::Document(e) => e.into(),
        }
    }
}

impl From<FeedbackError> for ApiError {
    fn from(err: FeedbackError) -> Self {
        match err {
            FeedbackError::Validation(e) => Self::bad_request(e.to_string()),
            FeedbackError::Storage(_) => Self::internal(err.to_string()),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        Self::bad_request(format!("Invalid upload: {}", err.body_text()))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        Self::bad_request(format!("Invalid request body: {}", err.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.body {
            ErrorBody::Detail => json!({ "detail": self.message }),
            ErrorBody::Error => json!({ "error": self.message }),
        };
        (self.status, Json(body)).into_response()
    }
}
