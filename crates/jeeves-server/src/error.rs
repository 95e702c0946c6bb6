//! Error handling for the HTTP server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use jeeves_core::error::JeevesError;

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.status, self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code,
                message: self.message,
                suggestion: self.suggestion,
            },
        };

        (self.status, Json(body)).into_response()
    }
}

// Convert from jeeves-core errors
impl From<JeevesError> for ApiError {
    fn from(err: JeevesError) -> Self {
        let status = match &err {
            JeevesError::InvalidRoutineInput { .. } => StatusCode::BAD_REQUEST,
            JeevesError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            JeevesError::ExternalLookupFailed { .. } => StatusCode::BAD_GATEWAY,
            JeevesError::ReactionNotConfigured { .. } => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let mut api = ApiError::new(status, err.code().as_str(), err.to_string());
        api.suggestion = err.suggestion().map(str::to_string);
        api
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use jeeves_core::MemoryRegion;

    #[test]
    fn test_unknown_region_is_bad_request() {
        let err = MemoryRegion::parse_user("secrets").unwrap_err();
        let api = ApiError::from(err);
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.code, "ROUTINE_004");
        assert!(api.suggestion.is_some());
    }

    #[test]
    fn test_store_failure_is_unavailable() {
        let api = ApiError::from(JeevesError::store_connection("refused"));
        assert_eq!(api.status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
