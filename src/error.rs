//! Error types.
//!
//! Two layers:
//!
//! - [`Error`] is for infrastructure: binding the listener, building the
//!   upstream HTTP client, reading configuration. It ends up in `main`.
//! - [`LookupError`] is the outcome of a single poet lookup. It never leaves
//!   the request; it becomes an HTTP response through [`IntoResponse`].

use http::StatusCode;

use crate::response::{IntoResponse, Response};
use crate::upstream::UpstreamError;

/// Infrastructure failures surfaced to the binary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid socket address `{addr}`: {source}")]
    Addr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("http client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("config: {0}")]
    Config(String),
}

/// Why a lookup did not produce a poet.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The path segment is not exactly one ASCII letter.
    #[error("input must be a single English letter")]
    InvalidInput,

    /// PoetryDB could not be reached, answered with a non-success status,
    /// or sent a body that is not a list of names.
    #[error("upstream: {0}")]
    Upstream(#[from] UpstreamError),

    /// PoetryDB answered, but no author starts with the letter.
    #[error("no poet found with that initial")]
    NotFound,
}

impl LookupError {
    /// Client-facing status and `detail` message.
    pub fn status_and_detail(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidInput => (
                StatusCode::BAD_REQUEST,
                "Input must be a single English letter.",
            ),
            Self::NotFound => (StatusCode::NOT_FOUND, "No poet found with that initial."),
            Self::Upstream(UpstreamError::Malformed(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Malformed response from PoetryDB.",
            ),
            Self::Upstream(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error fetching data from PoetryDB.",
            ),
        }
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        match &self {
            Self::Upstream(err) => tracing::error!(error = %err, "poetrydb request failed"),
            Self::InvalidInput | Self::NotFound => tracing::debug!(outcome = %self, "lookup rejected"),
        }

        let (status, detail) = self.status_and_detail();
        Response::detail(status, detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed() -> UpstreamError {
        let err = serde_json::from_slice::<Vec<String>>(b"{").unwrap_err();
        UpstreamError::Malformed(err)
    }

    #[test]
    fn invalid_input_is_bad_request() {
        let response = LookupError::InvalidInput.into_response();
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body(),
            br#"{"detail":"Input must be a single English letter."}"#
        );
    }

    #[test]
    fn not_found_is_404() {
        let response = LookupError::NotFound.into_response();
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.body(),
            br#"{"detail":"No poet found with that initial."}"#
        );
    }

    #[test]
    fn upstream_status_is_500() {
        let err = LookupError::from(UpstreamError::Status(StatusCode::SERVICE_UNAVAILABLE));
        let response = err.into_response();
        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.body(),
            br#"{"detail":"Error fetching data from PoetryDB."}"#
        );
    }

    #[test]
    fn malformed_body_has_its_own_message() {
        let (status, detail) = LookupError::from(malformed()).status_and_detail();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(detail, "Malformed response from PoetryDB.");
    }

    #[test]
    fn error_display() {
        let err = Error::Config("POET_LOG_FORMAT must be `compact` or `json`".to_owned());
        assert_eq!(
            err.to_string(),
            "config: POET_LOG_FORMAT must be `compact` or `json`"
        );
    }
}
