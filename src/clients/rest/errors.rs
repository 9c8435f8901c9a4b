//! REST client error types.

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for [`RestClient`](crate::clients::RestClient) calls.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::RestError;
///
/// let error = RestError::InvalidPath { path: "/.json".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The path is empty once the leading slash and `.json` are stripped.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The path as given.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}
