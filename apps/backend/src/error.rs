//! Error handling for the backend API

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::spreadsheet::SpreadsheetError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("No file uploaded")]
    NoFile,

    #[error("Invalid upload: {0}")]
    Multipart(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<quiz_core::ParseError> for ApiError {
    fn from(err: quiz_core::ParseError) -> Self {
        ApiError::Parse(err.to_string())
    }
}

impl From<SpreadsheetError> for ApiError {
    fn from(err: SpreadsheetError) -> Self {
        ApiError::Spreadsheet(err.to_string())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::Multipart(err.body_text())
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::NoFile => (StatusCode::BAD_REQUEST, "no_file"),
            ApiError::Multipart(_) => (StatusCode::BAD_REQUEST, "invalid_upload"),
            ApiError::Spreadsheet(_) => (StatusCode::BAD_REQUEST, "spreadsheet_error"),
            ApiError::Parse(_) => (StatusCode::BAD_REQUEST, "parse_error"),
            ApiError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
            ApiError::Migration(_) => (StatusCode::INTERNAL_SERVER_ERROR, "migration_error"),
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_status() {
        let response = ApiError::NoFile.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_multipart_status() {
        let error = ApiError::Multipart("unexpected end of stream".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_spreadsheet_status() {
        let error = ApiError::Spreadsheet("not a workbook".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_parse_error_status() {
        let error = ApiError::Parse("missing field 'word' at row 2".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_error_status() {
        let error = ApiError::Database(sqlx::Error::RowNotFound);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_migration_error_status() {
        let error = ApiError::Migration("migration failed".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_display_no_file() {
        assert_eq!(ApiError::NoFile.to_string(), "No file uploaded");
    }

    #[test]
    fn test_parse_error_from_core() {
        let error: ApiError = quiz_core::ParseError::MissingField {
            line: 2,
            field: "word",
        }
        .into();
        assert_eq!(error.to_string(), "Parse error: missing field 'word' at row 2");
    }

    #[test]
    fn test_error_display_migration() {
        let error = ApiError::Migration("checksum mismatch".to_string());
        assert_eq!(error.to_string(), "Migration error: checksum mismatch");
    }
}
