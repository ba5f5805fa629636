//! Error types for gofinances-core
//!
//! Failures of the upstream read are reported, never recovered from: the
//! dashboard simply stays in its loading state.

use gofinances_config::ConfigError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Transport-level failure talking to the API
    RequestFailed,
    /// API answered with a non-success status
    UpstreamStatus,
    /// Response body did not match the expected shape
    InvalidPayload,
    /// Request exceeded the configured timeout
    Timeout,
    /// Configuration error
    ConfigError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::RequestFailed => write!(f, "REQUEST_FAILED"),
            ErrorCode::UpstreamStatus => write!(f, "UPSTREAM_STATUS"),
            ErrorCode::InvalidPayload => write!(f, "INVALID_PAYLOAD"),
            ErrorCode::Timeout => write!(f, "TIMEOUT"),
            ErrorCode::ConfigError => write!(f, "CONFIG_ERROR"),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Warning - operation may be affected
    Warning,
    /// Error - operation failed
    Error,
    /// Critical - application may be unstable
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
            ErrorSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            suggestions: vec![],
        }
    }

    /// Add detail information
    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.details = Some(detail);
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, "\nDetails: {}", details)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Main error type for gofinances-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("Upstream returned status {status}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Invalid payload: {message}")]
    InvalidPayload { message: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::Request { .. } => ErrorCode::RequestFailed,
            CoreError::UpstreamStatus { .. } => ErrorCode::UpstreamStatus,
            CoreError::InvalidPayload { .. } => ErrorCode::InvalidPayload,
            CoreError::Timeout => ErrorCode::Timeout,
            CoreError::ConfigError { .. } => ErrorCode::ConfigError,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::Request { .. } => ErrorSeverity::Error,
            CoreError::UpstreamStatus { status, .. } if *status < 500 => ErrorSeverity::Error,
            CoreError::UpstreamStatus { .. } => ErrorSeverity::Warning,
            CoreError::InvalidPayload { .. } => ErrorSeverity::Error,
            CoreError::Timeout => ErrorSeverity::Warning,
            CoreError::ConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::Request { url, .. } => {
                details = details.with_detail(serde_json::json!({ "url": url }));
                details = details.with_suggestion(
                    "Check that the transactions API is running and api.base_url points at it.".to_string()
                );
            }
            CoreError::UpstreamStatus { status, body } => {
                details = details.with_detail(serde_json::json!({ "status": status, "body": body }));
                if *status == 404 {
                    details = details.with_suggestion(
                        "Check api.transactions_path in the configuration.".to_string()
                    );
                }
            }
            CoreError::InvalidPayload { message } => {
                details = details.with_detail(serde_json::json!({ "decode_message": message }));
                details = details.with_suggestion(
                    "The API must answer with {\"transactions\": [...], \"balance\": {...}}.".to_string()
                );
            }
            CoreError::Timeout => {
                details = details.with_suggestion(
                    "Raise api.timeout_secs or remove it to wait indefinitely.".to_string()
                );
            }
            _ => {}
        }

        details
    }

    /// Log through the `log` facade at a level matching the severity
    pub fn log(&self, operation: &str) {
        match self.severity() {
            ErrorSeverity::Warning => log::warn!(
                target: "gofinances::error",
                "[{}] {} - Operation: {}", self.code(), self, operation
            ),
            ErrorSeverity::Error | ErrorSeverity::Critical => log::error!(
                target: "gofinances::error",
                "[{}] {} - Operation: {}", self.code(), self.to_details(), operation
            ),
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl From<reqwest::Error> for CoreError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            CoreError::Timeout
        } else if error.is_decode() {
            CoreError::InvalidPayload { message: error.to_string() }
        } else {
            CoreError::Request {
                url: error.url().map(|u| u.to_string()).unwrap_or_default(),
                message: error.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(error: serde_json::Error) -> Self {
        CoreError::InvalidPayload { message: error.to_string() }
    }
}

impl From<ConfigError> for CoreError {
    fn from(error: ConfigError) -> Self {
        CoreError::ConfigError { message: error.to_string() }
    }
}

// ==================== Tests ====================
