//! API error type and its JSON response shape.
//!
//! Every failure leaves the server as `{"detail": "<message>"}` with a
//! 400, 404 or 500 status.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::db::DbError;

/// Error response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Book not found")]
    pub detail: String,
}

/// Errors returned by request handlers.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("{0}")]
    #[diagnostic(code(crud_trio::api::not_found))]
    NotFound(String),

    #[error("{0}")]
    #[diagnostic(code(crud_trio::api::bad_request))]
    BadRequest(String),

    #[error("Internal error: {0}")]
    #[diagnostic(code(crud_trio::api::internal))]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { entity_type, .. } => {
                ApiError::NotFound(format!("{} not found", entity_type))
            }
            DbError::Constraint { message } | DbError::InvalidState { message } => {
                ApiError::BadRequest(message)
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            ApiError::Internal(message) => {
                // Log the actual error, return generic message
                tracing::error!(error = %message, "request failed");
                "Internal server error".to_string()
            }
            ApiError::NotFound(message) | ApiError::BadRequest(message) => message,
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
