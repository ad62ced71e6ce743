//! HTTP error mapping.
//!
//! Every validation failure is a client-input error: HTTP 400 with a JSON
//! body `{"message": <string>}`. The core produces no other error status;
//! anything else (bind failures, serve errors) surfaces through `anyhow` in
//! the binary, never through a response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

/// Wire shape of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn bad_request_maps_to_400() {
        let err = AppError::BadRequest("num1 and num2 must be numbers".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_error_message_survives_conversion() {
        let err: AppError = ValidationError::OutOfRange.into();
        assert_eq!(err.to_string(), "Either numbers are too large or too small");
    }
}
