// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbErr(#[from] DbErr),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DbErr(DbErr::RecordNotFound(_)) => StatusCode::NOT_FOUND,
            AppError::DbErr(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

// axum でエラーをHTTPレスポンスに変換するための実装
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = match self {
            AppError::DbErr(db_err) => {
                tracing::error!(error = ?db_err, "Database error"); // サーバーログには詳細を出す

                let (message, details) = match &db_err {
                    DbErr::RecordNotFound(entity) => (
                        "The requested resource was not found".to_string(),
                        Some(json!({ "entity": entity })),
                    ),
                    DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => (
                        "The database is unavailable".to_string(),
                        Some(json!({ "operation": "connect" })),
                    ),
                    DbErr::Query(_) => (
                        "A database query failed".to_string(),
                        Some(json!({ "operation": "query" })),
                    ),
                    _ => ("A database error occurred".to_string(), None),
                };

                ErrorResponse::new(message, "database_error").with_details(details)
            }
            AppError::NotFound(message) => ErrorResponse::new(message, "not_found"),
            AppError::BadRequest(message) => ErrorResponse::new(message, "bad_request"),
        };

        (status, Json(error_response)).into_response()
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;

/// 統一的なエラーレスポンス構造
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    pub error_type: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>, error_type: &str) -> Self {
        let message = message.into();
        Self {
            success: false,
            error: message.clone(),
            message,
            details: None,
            error_type: error_type.to_string(),
        }
    }

    fn with_details(mut self, details: Option<serde_json::Value>) -> Self {
        self.details = details;
        self
    }
}
