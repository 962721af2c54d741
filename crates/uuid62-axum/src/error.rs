//! Error types for the UUID registry service.
//!
//! `ApiError` implements [`IntoResponse`] so handlers can return
//! `Result<_, ApiError>` and have failures mapped to an HTTP status with a
//! plain-text reason. Malformed identifiers never reach this type: they are
//! rejected by the `Path`/`Query` extractors with `400 Bad Request`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use uuid62::Uuid62;

/// Unified error type for the registry handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The UUID is already registered.
    #[error("uuid {0} is already registered")]
    Conflict(Uuid62),

    /// The UUID is not registered.
    #[error("uuid {0} not found")]
    NotFound(Uuid62),

    /// The registry holds its configured maximum number of UUIDs.
    #[error("registry is full ({limit} uuids)")]
    RegistryFull { limit: usize },
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::RegistryFull { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "request failed");
        (self.status(), self.to_string()).into_response()
    }
}
