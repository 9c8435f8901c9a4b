//! The [`RestResource`] trait.
//!
//! A resource is a serde record plus a little metadata: its name, the keys
//! of its JSON envelopes, and its path table. The CRUD operations themselves
//! live on [`ResourceService`], which is generic over the resource.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use shopify_rest::clients::HttpMethod;
//! use shopify_rest::rest::{ResourceOperation, ResourcePath, RestResource};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize)]
//! pub struct Redirect {
//!     #[serde(skip_serializing)]
//!     pub id: Option<u64>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub path: Option<String>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub target: Option<String>,
//! }
//!
//! impl RestResource for Redirect {
//!     type Id = u64;
//!     type FindParams = ();
//!     type AllParams = ();
//!     type CountParams = ();
//!
//!     const NAME: &'static str = "Redirect";
//!     const SINGULAR: &'static str = "redirect";
//!     const PLURAL: &'static str = "redirects";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "redirects"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "redirects/{id}"),
//!     ];
//!
//!     fn get_id(&self) -> Option<Self::Id> {
//!         self.id
//!     }
//! }
//!
//! let redirects = Redirect::service(&client).list(None).await?;
//! ```

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::RestClient;
use crate::rest::resources::MetafieldOwner;
use crate::rest::{ResourcePath, ResourceService};

/// A REST resource.
///
/// # Associated Types
///
/// - `Id`: the identifier type, usually `u64`
/// - `FindParams`, `AllParams`, `CountParams`: query parameters for `get`,
///   `list` and `count`; use `()` when there are none
///
/// # Associated Constants
///
/// - `NAME`: the name used in errors, e.g. `Product`
/// - `SINGULAR`: the single-object envelope key, e.g. `product`
/// - `PLURAL`: the list envelope key, e.g. `products`
/// - `PATHS`: the path table
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The identifier type.
    type Id: Display + Clone + Send + Sync;

    /// Query parameters for `get`.
    type FindParams: Serialize + Send + Sync;

    /// Query parameters for `list`.
    type AllParams: Serialize + Send + Sync;

    /// Query parameters for `count`.
    type CountParams: Serialize + Send + Sync;

    /// Name used in error messages.
    const NAME: &'static str;

    /// Envelope key for a single resource.
    const SINGULAR: &'static str;

    /// Envelope key for a list of resources.
    const PLURAL: &'static str;

    /// Paths for each supported operation.
    const PATHS: &'static [ResourcePath];

    /// Returns the ID, or `None` for a resource not yet created.
    fn get_id(&self) -> Option<Self::Id>;

    /// Returns a service rooted at the top level of the API.
    #[must_use]
    fn service(client: &RestClient) -> ResourceService<'_, Self> {
        ResourceService::new(client)
    }
}

/// A resource that owns metafields.
///
/// Services of such resources expose
/// [`metafields`](ResourceService::metafields).
pub trait HasMetafields: RestResource {
    /// The owner kind used in metafield paths.
    const METAFIELD_OWNER: MetafieldOwner;
}

/// Flattens a params struct into query pairs.
///
/// `null` values are skipped, arrays are joined with commas and nested
/// objects are sent as JSON.
///
/// # Errors
///
/// Returns the serde error if `params` cannot be serialized.
pub fn serialize_to_query<T: Serialize>(
    params: &T,
) -> Result<BTreeMap<String, String>, serde_json::Error> {
    let mut query = BTreeMap::new();

    if let Value::Object(map) = serde_json::to_value(params)? {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde::Serialize;

    #[derive(Serialize, Default)]
    struct Filters {
        #[serde(skip_serializing_if = "Option::is_none")]
        ids: Option<Vec<u64>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
        vendor: Option<String>,
        published: Option<bool>,
        created_at_min: Option<chrono::DateTime<Utc>>,
    }

    #[test]
    fn test_unit_params_serialize_to_empty_query() {
        assert!(serialize_to_query(&()).unwrap().is_empty());
    }

    #[test]
    fn test_none_fields_are_omitted() {
        let query = serialize_to_query(&Filters::default()).unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn test_scalar_array_and_timestamp_values() {
        let filters = Filters {
            ids: Some(vec![1, 2, 3]),
            limit: Some(50),
            vendor: Some("Acme".to_string()),
            published: Some(true),
            created_at_min: Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
        };

        let query = serialize_to_query(&filters).unwrap();

        assert_eq!(query["ids"], "1,2,3");
        assert_eq!(query["limit"], "50");
        assert_eq!(query["vendor"], "Acme");
        assert_eq!(query["published"], "true");
        assert_eq!(query["created_at_min"], "2024-01-02T03:04:05Z");
    }

    #[test]
    fn test_empty_array_is_omitted() {
        let filters = Filters {
            ids: Some(vec![]),
            ..Filters::default()
        };
        assert!(!serialize_to_query(&filters).unwrap().contains_key("ids"));
    }
}
