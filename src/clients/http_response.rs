//! Decoded HTTP response.
//!
//! [`HttpResponse`] keeps the status, lower-cased headers and JSON body, and
//! pre-parses the Shopify headers the client acts on: the API call limit and
//! `Retry-After`. Pagination is parsed on demand with
//! [`HttpResponse::pagination`] because only list calls need it, and a bad
//! `Link` header must fail those calls.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::ResponseDecodingError;
use crate::clients::pagination::Pagination;

/// Longest wait honoured from a `Retry-After` header.
pub const MAX_RETRY_AFTER: Duration = Duration::from_secs(60);

/// Parsed `X-Shopify-Shop-Api-Call-Limit` header, e.g. `32/40`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// Requests currently in the leaky bucket.
    pub request_count: u32,
    /// Bucket capacity.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses a `count/size` header value.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (count, size) = header_value.trim().split_once('/')?;
        Some(Self {
            request_count: count.trim().parse().ok()?,
            bucket_size: size.trim().parse().ok()?,
        })
    }

    /// Requests left before the bucket is full.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.bucket_size.saturating_sub(self.request_count)
    }
}

/// A response from the API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub code: u16,
    /// Headers keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// JSON body; `{}` when the body was empty.
    pub body: serde_json::Value,
    /// Parsed API call limit.
    pub api_call_limit: Option<ApiCallLimit>,
    /// Wait before retrying, from `Retry-After`, capped at
    /// [`MAX_RETRY_AFTER`].
    pub retry_request_after: Option<Duration>,
}

impl HttpResponse {
    /// Creates a response and parses the headers it cares about.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let api_call_limit = first_header(&headers, "x-shopify-shop-api-call-limit")
            .and_then(ApiCallLimit::parse);

        let retry_request_after = first_header(&headers, "retry-after")
            .and_then(|value| value.trim().parse::<f64>().ok())
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
            .map(|wait| wait.min(MAX_RETRY_AFTER));

        Self {
            code,
            headers,
            body,
            api_call_limit,
            retry_request_after,
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        first_header(&self.headers, &name.to_lowercase())
    }

    /// Returns `X-Request-Id`.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        first_header(&self.headers, "x-request-id")
    }

    /// Returns `X-Shopify-API-Deprecated-Reason`.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        first_header(&self.headers, "x-shopify-api-deprecated-reason")
    }

    /// Returns the raw `Link` header, with repeated headers joined by `, `.
    #[must_use]
    pub fn link_header(&self) -> Option<String> {
        self.headers
            .get("link")
            .filter(|values| !values.is_empty())
            .map(|values| values.join(", "))
    }

    /// Parses the `Link` header.
    ///
    /// A response without the header has no pagination.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseDecodingError`] when the header is malformed.
    pub fn pagination(&self) -> Result<Pagination, ResponseDecodingError> {
        self.link_header()
            .map_or_else(|| Ok(Pagination::default()), |link| Pagination::from_link_header(&link))
    }
}

fn first_header<'a>(headers: &'a HashMap<String, Vec<String>>, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|values| values.first())
        .map(String::as_str)
}
