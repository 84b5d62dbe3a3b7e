use crate::link::Relation;
use crate::types::ErrorDetail;
use thiserror::Error;

/// Main error type for Freckle API operations
#[derive(Debug, Error)]
pub enum FreckleError {
    /// Error body returned by the API for a status >= 400
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        errors: Vec<ErrorDetail>,
    },

    /// The current page has no link for the requested relation
    #[error("no {0} page available")]
    NoSuchPage(Relation),

    /// Request building error
    #[error("failed to build request: {0}")]
    RequestBuild(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FreckleError {
    /// Create an API error from the status code and the decoded error body
    pub fn api(status: u16, body: crate::types::ApiErrorBody) -> Self {
        FreckleError::Api {
            status,
            message: body.message,
            errors: body.errors,
        }
    }

    /// Check if this error is a not found error (404)
    pub fn is_not_found(&self) -> bool {
        matches!(self, FreckleError::Api { status: 404, .. })
    }

    /// Check if the API rejected the request input (400 or 422)
    pub fn is_validation_failed(&self) -> bool {
        matches!(self, FreckleError::Api { status: 400 | 422, .. })
    }

    /// Check if this error came from navigating to a missing page
    pub fn is_no_such_page(&self) -> bool {
        matches!(self, FreckleError::NoSuchPage(_))
    }

    /// Get the HTTP status code if the server answered
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FreckleError::Api { status, .. } => Some(*status),
            FreckleError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Get the API error message, if this is an API error
    pub fn message(&self) -> Option<&str> {
        match self {
            FreckleError::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Get the field-level details of an API error
    pub fn details(&self) -> &[ErrorDetail] {
        match self {
            FreckleError::Api { errors, .. } => errors,
            _ => &[],
        }
    }
}

/// Result type for Freckle operations
pub type Result<T> = std::result::Result<T, FreckleError>;
