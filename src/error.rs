use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::providers::ProviderError;
use crate::storage::StorageError;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Errors surfaced by the recipe generation flow
#[derive(Error, Debug)]
pub enum AppError {
    /// The request carried no ingredients
    #[error("No ingredients provided")]
    NoIngredients,

    /// The completion service answered with a non-success status
    #[error("Completion API error {status}")]
    Upstream { status: u16, details: String },

    /// Writing or reading log rows failed
    #[error("Database error: {0}")]
    Database(#[from] StorageError),

    /// Anything else
    #[error("{0}")]
    Internal(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Status { status, body } => AppError::Upstream {
                status,
                details: body,
            },
            other => AppError::Internal(other.to_string()),
        }
    }
}

#[derive(Serialize)]
struct JsonError {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NoIngredients => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } | AppError::Database(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let details = match self {
            AppError::Upstream { details, .. } => Some(details.clone()),
            _ => None,
        };
        HttpResponse::build(self.status_code()).json(JsonError {
            error: self.to_string(),
            details,
        })
    }
}
