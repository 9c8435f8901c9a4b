//! # Shopify REST Client
//!
//! An async client for the Shopify Admin REST API.
//!
//! ## Overview
//!
//! - Validated configuration via [`ShopifyConfig`] and [`ShopifyConfigBuilder`]
//! - Access-token and private-app (basic auth) credentials
//! - Versioned (`admin/api/{version}`) or legacy (`admin`) path prefixes
//! - Bounded retries on connection failures and `429 Too Many Requests`
//! - Cursor pagination parsed from the `Link` header
//! - Typed resources: [`Article`](rest::resources::Article),
//!   [`Blog`](rest::resources::Blog), [`Page`](rest::resources::Page),
//!   [`Product`](rest::resources::Product),
//!   [`Metafield`](rest::resources::Metafield),
//!   [`CustomerSavedSearch`](rest::resources::CustomerSavedSearch) and
//!   [`AccessScope`](rest::resources::AccessScope)
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_rest::{AccessToken, ApiVersion, RestClient, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_example").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .retries(2)
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config).unwrap();
//! assert_eq!(client.path_prefix(), "admin/api/2025-10");
//! ```
//!
//! ## Working With Resources
//!
//! ```rust,ignore
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::rest::resources::{Product, ProductListParams};
//!
//! let products = Product::service(&client);
//!
//! let mut page = products
//!     .list(Some(ProductListParams { limit: Some(50), ..Default::default() }))
//!     .await?;
//! loop {
//!     for product in page.iter() {
//!         println!("{:?}", product.title);
//!     }
//!     match page.next_page() {
//!         Some(next) => page = products.list_page(next).await?,
//!         None => break,
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! Requests, retries and deprecation notices are emitted with
//! [`tracing`](https://docs.rs/tracing). Install any subscriber to see them.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Thread-safe**: clients and configuration are `Send + Sync`
//! - **Async-first**: built on Tokio and reqwest

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use config::{
    AccessToken, ApiKey, ApiPassword, ApiVersion, Credentials, HostUrl, ShopDomain,
    ShopifyConfig, ShopifyConfigBuilder, LEGACY_PATH_PREFIX,
};
pub use error::ConfigError;

pub use clients::{
    ApiCallLimit, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
    PageOptions, Pagination, ResponseDecodingError, RestClient, RestError,
};

pub use rest::{ResourceError, ResourceResponse, ResourceService, RestResource};
