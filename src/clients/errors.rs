//! Transport-level error types.
//!
//! - [`HttpResponseError`]: the API answered with a non-2xx status
//! - [`MaxHttpRetriesExceededError`]: a rate-limited request ran out of tries
//! - [`InvalidHttpRequestError`]: the request was rejected before sending
//! - [`ResponseDecodingError`]: the response could not be decoded
//! - [`HttpError`]: the union of the above plus network failures
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::MaxRetries(e)) => println!("gave up after {} tries", e.tries),
//!     Err(HttpError::Decoding(e)) => println!("bad response: {e}"),
//!     Err(HttpError::Network(e)) => println!("network: {e}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use thiserror::Error;

/// A non-2xx response from the API.
///
/// `message` is a compact JSON rendering of the API's `errors`/`error`
/// fields plus an `error_reference` built from `X-Request-Id`. The full
/// decoded body is kept in `body`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// HTTP status code.
    pub code: u16,
    /// Serialized error payload.
    pub message: String,
    /// Value of `X-Request-Id`, when Shopify sent one.
    pub error_reference: Option<String>,
    /// The decoded response body.
    pub body: serde_json::Value,
}

/// A `429 Too Many Requests` that persisted through every try.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// Status code of the last response.
    pub code: u16,
    /// Number of attempts made.
    pub tries: u32,
    /// Serialized error payload of the last response.
    pub message: String,
    /// Value of `X-Request-Id` on the last response.
    pub error_reference: Option<String>,
}

/// A request that failed validation before it was sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// POST and PUT need a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The offending method.
        method: String,
    },

    /// GET and DELETE cannot carry a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The offending method.
        method: String,
    },
}

/// A response that arrived but could not be decoded.
///
/// Raised for invalid JSON, missing or mistyped envelopes, and malformed
/// `Link` pagination headers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Could not decode response: {message}")]
pub struct ResponseDecodingError {
    /// What went wrong.
    pub message: String,
}

impl ResponseDecodingError {
    /// Creates a decoding error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Any failure while sending a request or reading its response.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Rate limiting outlasted the configured retries.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// The request was invalid.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The response body was not valid JSON.
    #[error(transparent)]
    Decoding(#[from] ResponseDecodingError),

    /// Connection failure or timeout that outlasted the configured retries.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    Client(reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            _ => None,
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
    assert_send_sync::<ResponseDecodingError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_error_displays_message() {
        let error = HttpResponseError {
            code: 422,
            message: r#"{"errors":{"title":["can't be blank"]}}"#.to_string(),
            error_reference: None,
            body: json!({"errors": {"title": ["can't be blank"]}}),
        };

        assert_eq!(error.to_string(), r#"{"errors":{"title":["can't be blank"]}}"#);
    }

    #[test]
    fn test_max_retries_error_includes_try_count() {
        let error = MaxHttpRetriesExceededError {
            code: 429,
            tries: 3,
            message: r#"{"errors":"Exceeded 2 calls per second"}"#.to_string(),
            error_reference: Some("req-1".to_string()),
        };

        let message = error.to_string();
        assert!(message.contains("Exceeded maximum retry count of 3"));
        assert!(message.contains("Exceeded 2 calls per second"));
    }

    #[test]
    fn test_invalid_request_messages() {
        let missing = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(missing.to_string(), "Cannot use post without specifying data.");

        let unexpected = InvalidHttpRequestError::UnexpectedBody {
            method: "get".to_string(),
        };
        assert_eq!(unexpected.to_string(), "Cannot send a body with get.");
    }

    #[test]
    fn test_decoding_error_is_distinct_kind() {
        let error: HttpError = ResponseDecodingError::new("page_info is missing").into();

        assert!(matches!(error, HttpError::Decoding(_)));
        assert!(error.to_string().contains("page_info is missing"));
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_status_is_exposed_for_response_errors() {
        let error: HttpError = HttpResponseError {
            code: 404,
            message: "{}".to_string(),
            error_reference: None,
            body: json!({}),
        }
        .into();

        assert_eq!(error.status(), Some(404));
    }
}
