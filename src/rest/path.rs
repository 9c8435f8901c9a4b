//! Path tables for REST resources.
//!
//! A resource can be reached through more than one path. Articles live
//! under their blog, and metafields live under whichever resource owns
//! them:
//!
//! - `blogs/{blog_id}/articles/{id}`
//! - `{owner}/{owner_id}/metafields/{id}`
//! - `metafields/{id}` (shop-level)
//!
//! [`get_path`] picks the most specific template whose IDs are all known,
//! and [`build_path`] fills it in.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::clients::HttpMethod;
//! use shopify_rest::rest::{build_path, get_path, ResourceOperation, ResourcePath};
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::Find,
//!         &["owner", "owner_id", "id"],
//!         "{owner}/{owner_id}/metafields/{id}",
//!     ),
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "metafields/{id}"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["owner", "owner_id", "id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("owner", "products");
//! ids.insert("owner_id", "632910392");
//! ids.insert("id", "721389482");
//! assert_eq!(
//!     build_path(path.template, &ids),
//!     "products/632910392/metafields/721389482"
//! );
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations a resource service can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// GET one resource.
    Find,
    /// GET a page of resources.
    All,
    /// POST a new resource.
    Create,
    /// PUT changes to a resource.
    Update,
    /// DELETE a resource.
    Delete,
    /// GET the number of resources.
    Count,
}

impl ResourceOperation {
    /// Returns the HTTP method this operation normally uses.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::Find | Self::All | Self::Count => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Count => "count",
        }
    }
}

/// One entry in a resource's path table.
///
/// Templates use `{name}` placeholders, and `ids` lists every placeholder
/// the template needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// HTTP method.
    pub http_method: HttpMethod,
    /// The operation this path serves.
    pub operation: ResourceOperation,
    /// Placeholders the template needs.
    pub ids: &'static [&'static str],
    /// The template, relative to the API prefix and without `.json`.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a path entry. `const` so tables can be constants.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Number of placeholders.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if every placeholder is in `available_ids`.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Picks the most specific path for `operation` whose placeholders are all
/// in `available_ids`.
///
/// ```rust
/// use shopify_rest::clients::HttpMethod;
/// use shopify_rest::rest::{get_path, ResourceOperation, ResourcePath};
///
/// const PATHS: &[ResourcePath] = &[
///     ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &["blog_id"], "blogs/{blog_id}/articles"),
///     ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "articles"),
/// ];
///
/// let path = get_path(PATHS, ResourceOperation::All, &["blog_id"]);
/// assert_eq!(path.unwrap().template, "blogs/{blog_id}/articles");
///
/// let path = get_path(PATHS, ResourceOperation::All, &[]);
/// assert_eq!(path.unwrap().template, "articles");
/// ```
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Replaces `{name}` placeholders with the matching values.
///
/// Placeholders with no value are left as they are.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
