//! Typed response wrapper for resource operations.
//!
//! [`ResourceResponse<T>`] holds the decoded envelope together with the
//! metadata Shopify sends in headers: pagination cursors, the API call limit
//! and the request ID. It implements `Deref<Target = T>`, so the data can be
//! used directly:
//!
//! ```rust,ignore
//! let pages = Page::service(&client).list(None).await?;
//! for page in pages.iter() {
//!     println!("{:?}", page.title);
//! }
//!
//! if let Some(next) = pages.next_page() {
//!     let more = Page::service(&client).list_page(next).await?;
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::{ApiCallLimit, HttpResponse, PageOptions, Pagination, ResponseDecodingError};
use crate::rest::ResourceError;

/// Decoded resource data plus response metadata.
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    pagination: Option<Pagination>,
    rate_limit: Option<ApiCallLimit>,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a response from its parts.
    #[must_use]
    pub const fn new(
        data: T,
        pagination: Option<Pagination>,
        rate_limit: Option<ApiCallLimit>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            data,
            pagination,
            rate_limit,
            request_id,
        }
    }

    /// Consumes the response and returns the data.
    ///
    /// ```rust
    /// use shopify_rest::rest::ResourceResponse;
    ///
    /// let response = ResourceResponse::new(vec![1, 2, 3], None, None, None);
    /// assert_eq!(response.into_inner(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns the data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns the pagination cursors, for list responses that had any.
    #[must_use]
    pub const fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    /// Returns `true` if there is a next page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.pagination.as_ref().is_some_and(Pagination::has_next)
    }

    /// Returns `true` if there is a previous page.
    #[must_use]
    pub fn has_previous_page(&self) -> bool {
        self.pagination
            .as_ref()
            .is_some_and(Pagination::has_previous)
    }

    /// Returns the options that fetch the next page.
    #[must_use]
    pub fn next_page(&self) -> Option<&PageOptions> {
        self.pagination.as_ref().and_then(|p| p.next.as_ref())
    }

    /// Returns the options that fetch the previous page.
    #[must_use]
    pub fn previous_page(&self) -> Option<&PageOptions> {
        self.pagination.as_ref().and_then(|p| p.previous.as_ref())
    }

    /// Returns the API call limit reported with this response.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&ApiCallLimit> {
        self.rate_limit.as_ref()
    }

    /// Returns `X-Request-Id`.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Maps the data, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            pagination: self.pagination,
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Decodes the value under `key` in the response body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decoding`] if the key is missing or the value
    /// does not deserialize into `T`.
    pub fn from_http_response(response: HttpResponse, key: &str) -> Result<Self, ResourceError> {
        let request_id = response.request_id().map(ToString::to_string);
        let rate_limit = response.api_call_limit;
        let data = decode_envelope(response.body, key)?;

        Ok(Self {
            data,
            pagination: None,
            rate_limit,
            request_id,
        })
    }

    /// Like [`from_http_response`](Self::from_http_response), and also parses
    /// the `Link` header.
    ///
    /// # Errors
    ///
    /// Also returns [`ResourceError::Decoding`] for a malformed `Link` header.
    pub fn from_list_response(response: HttpResponse, key: &str) -> Result<Self, ResourceError> {
        let pagination = response.pagination()?;
        let mut decoded = Self::from_http_response(response, key)?;
        decoded.pagination = (!pagination.is_empty()).then_some(pagination);
        Ok(decoded)
    }
}

fn decode_envelope<T: DeserializeOwned>(
    mut body: serde_json::Value,
    key: &str,
) -> Result<T, ResponseDecodingError> {
    let value = body
        .get_mut(key)
        .map(serde_json::Value::take)
        .ok_or_else(|| ResponseDecodingError::new(format!("missing key '{key}' in response body")))?;

    serde_json::from_value(value)
        .map_err(|e| ResponseDecodingError::new(format!("failed to deserialize '{key}': {e}")))
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};
