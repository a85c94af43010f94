use http::StatusCode;
use thiserror::Error;

/// Failures raised by [`crate::api::ApiClient`].
///
/// A response with `success: false` is not an error at this layer; it only
/// becomes [`ApiError::Business`] through [`crate::models::Envelope::into_result`].
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Expected JSON but received '{content_type}' ({status}): {snippet}")]
    NonJson {
        status: StatusCode,
        content_type: String,
        snippet: String,
    },
    #[error("Invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Business(String),
}

impl ApiError {
    /// Status code of the failed response, when one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Http(err) => err.status(),
            ApiError::NonJson { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        )
    }
}
