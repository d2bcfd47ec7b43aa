use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use finviz_store::StoreError;

/// Failures surfaced to HTTP clients as JSON `{message}` bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// The savings plan was already updated when the companion
    /// transaction failed to persist; nothing is rolled back.
    #[error("Money added to the plan, but recording the transaction failed: {0}")]
    PartialContribution(StoreError),

    #[error("Storage failure: {0}")]
    Store(StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PartialContribution(_) | ApiError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::TransactionNotFound(_) => {
                ApiError::NotFound("Transaction not found".into())
            }
            StoreError::SavingsPlanNotFound(_) => {
                ApiError::NotFound("Savings plan not found".into())
            }
            StoreError::SpendingLimitNotFound(_) => {
                ApiError::NotFound("Spending limit not found".into())
            }
            other => ApiError::Store(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

/// Boot-time failures for the server binary.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] finviz_config::ConfigError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
