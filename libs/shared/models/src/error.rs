use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A store failure. `message` is the endpoint-level summary, `detail`
    /// is the raw store error and is echoed back to the caller.
    #[error("Database error: {message}: {detail}")]
    Database { message: String, detail: String },

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn database(message: impl Into<String>, detail: impl ToString) -> Self {
        AppError::Database {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database { .. } | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        tracing::error!("Error: {}: {}", status, self);

        let body = match self {
            AppError::Database { message, detail } => json!({
                "message": message,
                "error": detail
            }),
            AppError::BadRequest(msg)
            | AppError::ValidationError(msg)
            | AppError::Conflict(msg)
            | AppError::Internal(msg) => json!({
                "message": msg
            }),
        };

        (status, Json(body)).into_response()
    }
}
