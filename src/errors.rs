use crate::services::storage_service::StorageError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// A lightweight wrapper for general errors that keeps the message local.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    /// Create a new AppError with a specific status and message.
    pub fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            message: msg.into(),
        }
    }

    /// Shortcut for a 500 Internal Server Error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }

    /// Shortcut for 404 Not Found
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, msg)
    }
}

/// Plain-text body; browsers render it as-is.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(_) => AppError::not_found("Object not found"),
            StorageError::InvalidKey { .. } => AppError::new(StatusCode::BAD_REQUEST, err.to_string()),
            other => AppError::internal(other.to_string()),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_map_to_statuses() {
        let not_found = AppError::from(StorageError::NotFound("a".into()));
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
        assert_eq!(not_found.message, "Object not found");

        let invalid = AppError::from(StorageError::InvalidKey {
            key: "../x".into(),
            reason: "bad segment".into(),
        });
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);

        let backend = AppError::from(StorageError::Backend("boom".into()));
        assert_eq!(backend.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn anyhow_errors_are_internal() {
        let err = AppError::from(anyhow::anyhow!("store unreachable"));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "store unreachable");
    }
}
