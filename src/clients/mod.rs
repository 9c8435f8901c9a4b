//! HTTP plumbing for the Shopify REST Admin API.
//!
//! - [`HttpClient`]: async client with retry and rate-limit handling
//! - [`HttpRequest`] / [`HttpResponse`]: what goes over the wire
//! - [`Pagination`] / [`PageOptions`]: cursors parsed from the `Link` header
//! - [`RestClient`]: path normalization and the API version prefix
//!
//! # Retry Behavior
//!
//! - **429**: retried after `Retry-After` (at most [`MAX_RETRY_AFTER`]), or 1
//!   second when it is missing
//! - **Connection failures and timeouts**: retried after 1 second
//! - **Any other non-2xx**: returned immediately
//!
//! The number of tries is `retries + 1` from
//! [`ShopifyConfigBuilder::retries`](crate::ShopifyConfigBuilder::retries),
//! and can be overridden per request.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new("admin/api/2024-10", &config)?;
//! let request = HttpRequest::builder(HttpMethod::Get, "products.json")
//!     .query_param("limit", "50")
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! let pagination = response.pagination()?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod pagination;
pub mod rest;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
    ResponseDecodingError,
};
pub use http_client::{HttpClient, RETRY_WAIT_TIME, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiCallLimit, HttpResponse, MAX_RETRY_AFTER};
pub use pagination::{PageOptions, Pagination};

pub use rest::{RestClient, RestError};
