use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Spreadsheet error: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Server misconfigured: {0}")]
    Misconfigured(String),

    /// Server-side failure carrying the message shown to the user
    #[error("Operation failed: {0}")]
    Failed(String),
}

impl AppError {
    /// Replace server-side failures with a user-facing message.
    ///
    /// Client errors (4xx) and configuration errors pass through untouched.
    pub fn localized(self, message: &str) -> AppError {
        match self {
            AppError::Database(ref e) => {
                tracing::error!("{}: {:?}", message, e);
                AppError::Failed(message.to_string())
            }
            AppError::Export(ref e) => {
                tracing::error!("{}: {:?}", message, e);
                AppError::Failed(message.to_string())
            }
            other => other,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error occurred".to_string(),
                    None,
                )
            }
            AppError::Export(ref e) => {
                tracing::error!("Spreadsheet error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.clone(), None),
            AppError::Validation(ref msg) => (
                StatusCode::BAD_REQUEST,
                msg.clone(),
                Some(vec![msg.clone()]),
            ),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Unauthorized(ref msg) => (StatusCode::UNAUTHORIZED, msg.clone(), None),
            AppError::Misconfigured(ref msg) | AppError::Failed(ref msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone(), None)
            }
        };

        let body = Json(ApiResponse::<()>::error(Some(message), errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_keeps_client_errors() {
        let err = AppError::NotFound("Izin tidak ditemukan".to_string()).localized("Gagal");
        assert!(matches!(err, AppError::NotFound(msg) if msg == "Izin tidak ditemukan"));
    }

    #[test]
    fn test_localized_replaces_server_errors() {
        let err = AppError::Database(sqlx::Error::PoolTimedOut)
            .localized("Gagal mengambil data izin");
        assert!(matches!(err, AppError::Failed(msg) if msg == "Gagal mengambil data izin"));
    }

    #[test]
    fn test_failed_maps_to_500() {
        let response = AppError::Failed("Gagal".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
