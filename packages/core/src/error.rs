//! API-level error type shared by all resource services.
//!
//! Maps the domain errors onto HTTP status codes and the uniform failure
//! envelope, so every error response has the same shape by construction.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    domain::{RepositoryError, ValidationError},
    infrastructure::dto::http::Envelope,
};

/// Error taxonomy of the HTTP surface.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Required creation fields are missing (client's fault, 400)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested record does not exist (404)
    #[error(transparent)]
    NotFound(#[from] RepositoryError),

    /// Unexpected failure; the message is deliberately opaque to the caller
    #[error("Something went wrong!")]
    Internal,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let envelope = Envelope::<()>::failure(self.to_string());
        (status, Json(envelope)).into_response()
    }
}
