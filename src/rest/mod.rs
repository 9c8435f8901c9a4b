//! Typed REST resources.
//!
//! - [`RestResource`]: a serde record plus its envelope keys and path table
//! - [`ResourceService`]: list, get, count, create, update and delete for any
//!   resource, optionally scoped under a parent (a blog, a metafield owner)
//! - [`ResourceResponse`]: the decoded data with pagination and rate-limit
//!   details, dereferencing to the data
//! - [`ResourceError`]: 404 and 422 mapped to `NotFound` and
//!   `ValidationFailed`, everything else passed through
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::rest::resources::{Metafield, Page, PageListParams};
//!
//! let pages = Page::service(&client);
//!
//! let first = pages
//!     .list(Some(PageListParams { limit: Some(10), ..Default::default() }))
//!     .await?;
//! for page in first.iter() {
//!     println!("{:?}", page.title);
//! }
//!
//! if let Some(next) = first.next_page() {
//!     let second = pages.list_page(next).await?;
//! }
//!
//! let total = pages.count(None).await?;
//!
//! let metafield = Metafield {
//!     namespace: Some("inventory".to_string()),
//!     key: Some("warehouse".to_string()),
//!     value: Some(serde_json::json!(25)),
//!     metafield_type: Some("number_integer".to_string()),
//!     ..Default::default()
//! };
//! pages.metafields(131_092_082).create(&metafield).await?;
//! ```

mod errors;
mod path;
mod resource;
mod response;
mod service;

pub mod resources;

pub use errors::ResourceError;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::{serialize_to_query, HasMetafields, RestResource};
pub use response::ResourceResponse;
pub use service::ResourceService;
