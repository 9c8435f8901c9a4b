//! Resource-level error types.
//!
//! Status codes that have a meaning for a resource are mapped to their own
//! variants:
//!
//! - **404**: [`ResourceError::NotFound`]
//! - **422**: [`ResourceError::ValidationFailed`]
//! - **Other 4xx/5xx**: [`ResourceError::Http`]
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::{ResourceError, RestResource};
//! use shopify_rest::rest::resources::Product;
//!
//! match Product::service(&client).get(123, None).await {
//!     Ok(product) => println!("Found: {:?}", product.title),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("{resource} with id {id} not found");
//!     }
//!     Err(ResourceError::ValidationFailed { errors, .. }) => {
//!         for (field, messages) in errors {
//!             println!("{field}: {messages:?}");
//!         }
//!     }
//!     Err(e) if e.is_decoding() => println!("Unexpected response: {e}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::collections::HashMap;

use crate::clients::{HttpError, HttpResponseError, ResponseDecodingError, RestError};
use thiserror::Error;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource does not exist (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// Resource name, e.g. `Product`.
        resource: &'static str,
        /// The requested ID, or `unknown` for collection calls.
        id: String,
    },

    /// The API rejected the payload (HTTP 422).
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Messages keyed by field; errors not tied to a field use `base`.
        errors: HashMap<String, Vec<String>>,
        /// Value of `X-Request-Id`.
        request_id: Option<String>,
    },

    /// No path in the resource's path table fits the operation and scope.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// Resource name.
        resource: &'static str,
        /// Operation name, e.g. `find`.
        operation: &'static str,
    },

    /// The response arrived but did not have the expected shape.
    #[error(transparent)]
    Decoding(#[from] ResponseDecodingError),

    /// A resource or its parameters could not be serialized.
    #[error("Failed to serialize {resource}: {source}")]
    Serialization {
        /// Resource name.
        resource: &'static str,
        /// The serde error.
        source: serde_json::Error,
    },

    /// Any other HTTP-level error.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST client error.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Maps an HTTP error response to the matching resource error.
    ///
    /// `id` names the requested resource in [`ResourceError::NotFound`].
    #[must_use]
    pub fn from_response_error(
        error: HttpResponseError,
        resource: &'static str,
        id: Option<&str>,
    ) -> Self {
        match error.code {
            404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            },
            422 => Self::ValidationFailed {
                errors: parse_validation_errors(&error.body),
                request_id: error.error_reference,
            },
            _ => Self::Http(HttpError::Response(error)),
        }
    }

    /// Maps a REST client error, unwrapping HTTP error responses.
    #[must_use]
    pub fn from_rest_error(error: RestError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            RestError::Http(HttpError::Response(e)) => Self::from_response_error(e, resource, id),
            RestError::Http(HttpError::Decoding(e)) => Self::Decoding(e),
            other => Self::Rest(other),
        }
    }

    /// Returns `true` if the response could not be decoded.
    #[must_use]
    pub const fn is_decoding(&self) -> bool {
        matches!(
            self,
            Self::Decoding(_)
                | Self::Http(HttpError::Decoding(_))
                | Self::Rest(RestError::Http(HttpError::Decoding(_)))
        )
    }

    /// Returns the `X-Request-Id` of the failed call, when known.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::ValidationFailed { request_id, .. } => request_id.as_deref(),
            Self::Http(HttpError::Response(e)) | Self::Rest(RestError::Http(HttpError::Response(e))) => {
                e.error_reference.as_deref()
            }
            Self::Http(HttpError::MaxRetries(e))
            | Self::Rest(RestError::Http(HttpError::MaxRetries(e))) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

/// Parses Shopify's `errors` payload into field messages.
///
/// Accepts `{"field": ["msg"]}`, `["msg"]` and `"msg"`.
fn parse_validation_errors(body: &serde_json::Value) -> HashMap<String, Vec<String>> {
    let mut result = HashMap::new();

    match body.get("errors") {
        Some(serde_json::Value::Object(map)) => {
            for (field, messages) in map {
                let msgs: Vec<String> = match messages {
                    serde_json::Value::Array(arr) => arr
                        .iter()
                        .map(|v| {
                            v.as_str()
                                .map_or_else(|| v.to_string(), ToString::to_string)
                        })
                        .collect(),
                    serde_json::Value::String(s) => vec![s.clone()],
                    other => vec![other.to_string()],
                };
                result.insert(field.clone(), msgs);
            }
        }
        Some(serde_json::Value::Array(arr)) => {
            let msgs: Vec<String> = arr
                .iter()
                .filter_map(|v| v.as_str().map(ToString::to_string))
                .collect();
            if !msgs.is_empty() {
                result.insert("base".to_string(), msgs);
            }
        }
        Some(serde_json::Value::String(s)) => {
            result.insert("base".to_string(), vec![s.clone()]);
        }
        _ => {}
    }

    result
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response_error(code: u16, body: serde_json::Value) -> HttpResponseError {
        HttpResponseError {
            code,
            message: body.to_string(),
            error_reference: Some("req-1".to_string()),
            body,
        }
    }

    #[test]
    fn test_not_found_message() {
        let error = ResourceError::NotFound {
            resource: "Product",
            id: "123456".to_string(),
        };
        assert_eq!(error.to_string(), "Product with id 123456 not found");
    }

    #[test]
    fn test_404_maps_to_not_found() {
        let error = ResourceError::from_response_error(
            response_error(404, json!({"errors": "Not Found"})),
            "Page",
            Some("42"),
        );

        assert!(matches!(
            error,
            ResourceError::NotFound { resource: "Page", id } if id == "42"
        ));
    }

    #[test]
    fn test_404_without_id_reports_unknown() {
        let error =
            ResourceError::from_response_error(response_error(404, json!({})), "Blog", None);

        assert!(matches!(error, ResourceError::NotFound { id, .. } if id == "unknown"));
    }

    #[test]
    fn test_422_maps_to_validation_failed() {
        let body = json!({
            "errors": {
                "title": ["can't be blank"],
                "handle": ["has already been taken", "is invalid"]
            }
        });
        let error =
            ResourceError::from_response_error(response_error(422, body), "Article", None);

        match error {
            ResourceError::ValidationFailed { errors, request_id } => {
                assert_eq!(errors["title"], vec!["can't be blank".to_string()]);
                assert_eq!(errors["handle"].len(), 2);
                assert_eq!(request_id.as_deref(), Some("req-1"));
            }
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_other_codes_stay_http() {
        let error = ResourceError::from_response_error(
            response_error(500, json!({"errors": "Internal"})),
            "Product",
            None,
        );

        assert!(matches!(error, ResourceError::Http(HttpError::Response(_))));
        assert_eq!(error.request_id(), Some("req-1"));
    }

    #[test]
    fn test_from_rest_error_unwraps_decoding() {
        let rest = RestError::Http(HttpError::Decoding(ResponseDecodingError::new("bad json")));
        let error = ResourceError::from_rest_error(rest, "Product", None);

        assert!(matches!(error, ResourceError::Decoding(_)));
        assert!(error.is_decoding());
    }

    #[test]
    fn test_is_decoding_sees_nested_variants() {
        let nested: ResourceError =
            HttpError::Decoding(ResponseDecodingError::new("page_info is missing")).into();
        assert!(nested.is_decoding());

        let not_decoding: ResourceError = RestError::InvalidPath {
            path: String::new(),
        }
        .into();
        assert!(!not_decoding.is_decoding());
    }

    #[test]
    fn test_parse_validation_errors_shapes() {
        let errors = parse_validation_errors(&json!({"errors": ["Error 1", "Error 2"]}));
        assert_eq!(errors["base"].len(), 2);

        let errors = parse_validation_errors(&json!({"errors": "Title is required"}));
        assert_eq!(errors["base"], vec!["Title is required".to_string()]);

        let errors = parse_validation_errors(&json!({"message": "nope"}));
        assert!(errors.is_empty());
    }
}
