//! Error types for gofinances-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gofinances_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to load transactions: {0}")]
    Upstream(#[from] CoreError),

    #[error("Not found: {resource}")]
    NotFound { resource: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Upstream(CoreError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Upstream(CoreError::ConfigError { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

// HTMX leaves the target untouched on non-2xx, so the page keeps its loading state
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let error = ApiError::from(CoreError::UpstreamStatus { status: 500, body: String::new() });
        assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(ApiError::from(CoreError::Timeout).status(), StatusCode::GATEWAY_TIMEOUT);
        let error = ApiError::from(CoreError::ConfigError { message: "bad".to_string() });
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            ApiError::NotFound { resource: "/x".to_string() }.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_message() {
        let error = ApiError::from(CoreError::InvalidPayload { message: "missing field `balance`".to_string() });
        assert_eq!(
            error.to_string(),
            "Failed to load transactions: Invalid payload: missing field `balance`"
        );
    }
}
