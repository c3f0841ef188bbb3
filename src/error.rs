// ABOUTME: Structured error types for Wise Old Man API operations
// ABOUTME: Separates transport failures from API errors and payload decode failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

/// Convenience alias for results produced by service operations.
pub type WomResult<T> = Result<T, WomError>;

/// The error payload produced for any response that could not be turned
/// into the expected domain model.
///
/// `status_code` is the literal HTTP status of the response. `message` is
/// taken from the body's `message` field when the API provided one, and a
/// generic description otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpErrorResponse {
    /// The HTTP status code of the failed request.
    pub status_code: u16,
    /// The error message describing the failure.
    pub message: String,
}

impl fmt::Display for HttpErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API error ({}): {}", self.status_code, self.message)
    }
}

/// Errors produced by client operations.
#[derive(Debug, thiserror::Error)]
pub enum WomError {
    /// The request never received an HTTP response to classify
    /// (DNS failure, timeout, TLS failure, connection reset).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("{0}")]
    Api(HttpErrorResponse),

    /// A 2xx response carried a body that was empty, not JSON, or did not
    /// match the expected domain shape. No partially built model escapes.
    #[error("failed to decode {context}: {source}")]
    Decode {
        /// The type that was being decoded.
        context: &'static str,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

impl WomError {
    /// The HTTP status code associated with this error, if the request
    /// reached the API at all.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(response) => Some(response.status_code),
            Self::Network(source) => source.status().map(|s| s.as_u16()),
            Self::Decode { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_response_display_includes_status_and_message() {
        let err = HttpErrorResponse {
            status_code: 404,
            message: "Player not found.".to_owned(),
        };

        assert_eq!(err.to_string(), "API error (404): Player not found.");
    }

    #[test]
    fn test_api_error_reports_status_code() {
        let err = WomError::Api(HttpErrorResponse {
            status_code: 429,
            message: "Too many requests.".to_owned(),
        });

        assert_eq!(err.status_code(), Some(429));
        assert_eq!(err.to_string(), "API error (429): Too many requests.");
    }
}
