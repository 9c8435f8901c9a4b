//! REST Admin API client.
//!
//! [`RestClient`] wraps [`HttpClient`](crate::clients::HttpClient) with path
//! normalization and the API version prefix. The typed resource layer in
//! [`crate::rest`] is built on top of it.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
