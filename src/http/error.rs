//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::source::fetch::FetchError;
use crate::source::url::SheetUrlError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }
}

/// Application error type for HTTP handlers.
///
/// Only the sheet URL is the caller's input; everything else is a
/// server-side failure. Malformed source data in particular is never a
/// 4xx, since it originates from the upstream workbook, not the caller.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (sheet URL validation)
    BadRequest(String),
    /// Source document could not be retrieved
    Fetch(FetchError),
    /// Source document could not be normalized
    Malformed(ScheduleError),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("BAD_REQUEST", message),
            ),
            AppError::Fetch(source) => {
                tracing::error!(error = %source, "schedule fetch failed");
                (
                    StatusCode::BAD_GATEWAY,
                    ApiError::new("FETCH_FAILED", "could not retrieve schedule"),
                )
            }
            AppError::Malformed(source) => {
                // The offending raw text stays in the server log for
                // operator follow-up; the response body is generic.
                tracing::error!(error = %source, "schedule normalization failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("MALFORMED_SCHEDULE", "malformed schedule data"),
                )
            }
            AppError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", message),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<SheetUrlError> for AppError {
    fn from(err: SheetUrlError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        AppError::Fetch(err)
    }
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError::Malformed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let response = AppError::BadRequest("bad sheet url".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response =
            AppError::Malformed(ScheduleError::invalid_event_format("x")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = AppError::Fetch(FetchError::Status {
            status: StatusCode::NOT_FOUND,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
