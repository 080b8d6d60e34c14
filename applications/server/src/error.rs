/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ringside_core::CoreError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    /// Client fault; answered as 400 with a `{message, error}` envelope
    #[error("{message}: {detail}")]
    BadRequest { message: String, detail: String },

    /// Unknown resource; answered as 404 with a `{message}` envelope
    #[error("{0}")]
    NotFound(String),

    /// Server fault; answered as 500 with a `{message, error}` envelope
    #[error("{message}: {detail}")]
    Internal { message: String, detail: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub fn bad_request(message: impl Into<String>, detail: impl ToString) -> Self {
        Self::BadRequest {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    pub fn internal(message: impl Into<String>, detail: impl ToString) -> Self {
        Self::Internal {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    /// Map a storage-layer error onto the HTTP taxonomy.
    ///
    /// `message` is the operation context shown to the client; the raw error
    /// rides along in the `error` field of the envelope.
    pub fn from_core(message: &str, err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(_) | CoreError::Duplicate(_) => Self::bad_request(message, err),
            CoreError::AccountNotFound(_) => Self::NotFound("Account not found".to_string()),
            other => Self::internal(message, other),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::BadRequest { message, detail } => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": message, "error": detail })),
            )
                .into_response(),
            ServerError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            ServerError::Internal { message, detail } => {
                tracing::error!("Internal error: {}: {}", message, detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": message, "error": detail })),
                )
                    .into_response()
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Configuration error", "error": msg })),
                )
                    .into_response()
            }
            ServerError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "IO error", "error": e.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
