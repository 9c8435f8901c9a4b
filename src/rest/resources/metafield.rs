//! Metafields: key/value data attached to another resource or to the shop.
//!
//! A metafield is always reached through its owner:
//!
//! | Owner | Path |
//! |---|---|
//! | Shop | `metafields` |
//! | Product | `products/{owner_id}/metafields` |
//! | Variant | `variants/{owner_id}/metafields` |
//! | Customer | `customers/{owner_id}/metafields` |
//! | Order | `orders/{owner_id}/metafields` |
//! | Collection | `collections/{owner_id}/metafields` |
//! | Page | `pages/{owner_id}/metafields` |
//! | Blog | `blogs/{owner_id}/metafields` |
//! | Article | `articles/{owner_id}/metafields` |
//!
//! There is one metafield service, scoped by owner, rather than a copy per
//! resource. Get it from [`Metafield::for_owner`], [`Metafield::for_shop`],
//! or the `metafields` method on the service of any resource that owns
//! metafields.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::rest::resources::{Metafield, MetafieldOwner, Product};
//!
//! // These two are the same service
//! let a = Product::service(&client).metafields(632_910_392);
//! let b = Metafield::for_owner(&client, MetafieldOwner::Product, 632_910_392);
//!
//! let metafield = Metafield {
//!     namespace: Some("inventory".to_string()),
//!     key: Some("warehouse".to_string()),
//!     value: Some(serde_json::json!(25)),
//!     metafield_type: Some("number_integer".to_string()),
//!     ..Default::default()
//! };
//! let created = a.create(&metafield).await?;
//!
//! let shop_metafields = Metafield::for_shop(&client).list(None).await?;
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{ResourceOperation, ResourcePath, ResourceService, RestResource};

/// The kind of resource a metafield belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetafieldOwner {
    /// The shop itself.
    Shop,
    /// A product.
    Product,
    /// A product variant.
    Variant,
    /// A customer.
    Customer,
    /// An order.
    Order,
    /// A custom or smart collection.
    Collection,
    /// An online store page.
    Page,
    /// A blog.
    Blog,
    /// A blog article.
    Article,
}

impl MetafieldOwner {
    /// Returns the collection path segment of the owner, or `None` for the
    /// shop.
    ///
    /// ```rust
    /// use shopify_rest::rest::resources::MetafieldOwner;
    ///
    /// assert_eq!(MetafieldOwner::Product.path_segment(), Some("products"));
    /// assert_eq!(MetafieldOwner::Variant.path_segment(), Some("variants"));
    /// assert_eq!(MetafieldOwner::Shop.path_segment(), None);
    /// ```
    #[must_use]
    pub const fn path_segment(&self) -> Option<&'static str> {
        match self {
            Self::Shop => None,
            Self::Product => Some("products"),
            Self::Variant => Some("variants"),
            Self::Customer => Some("customers"),
            Self::Order => Some("orders"),
            Self::Collection => Some("collections"),
            Self::Page => Some("pages"),
            Self::Blog => Some("blogs"),
            Self::Article => Some("articles"),
        }
    }

    /// Returns the owner name as Shopify writes it in `owner_resource`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Shop => "shop",
            Self::Product => "product",
            Self::Variant => "variant",
            Self::Customer => "customer",
            Self::Order => "order",
            Self::Collection => "collection",
            Self::Page => "page",
            Self::Blog => "blog",
            Self::Article => "article",
        }
    }
}

impl fmt::Display for MetafieldOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A metafield.
///
/// `value` is kept as JSON because Shopify returns strings, numbers or
/// booleans depending on the metafield type.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Metafield {
    /// Read-only.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// Container for a group of metafields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Name of the metafield within its namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// The stored value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,

    /// Content type, e.g. `single_line_text_field` or `number_integer`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,

    /// Legacy content type: `string`, `integer` or `json_string`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// ID of the owning resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,

    /// Kind of the owning resource, e.g. `product`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_resource: Option<String>,

    /// Read-only.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// Read-only.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Read-only.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl Metafield {
    /// Returns the metafield service of one owner.
    ///
    /// `owner_id` is ignored for [`MetafieldOwner::Shop`].
    #[must_use]
    pub fn for_owner(
        client: &RestClient,
        owner: MetafieldOwner,
        owner_id: impl fmt::Display,
    ) -> ResourceService<'_, Self> {
        match owner.path_segment() {
            Some(segment) => Self::service(client)
                .scoped("owner", segment)
                .scoped("owner_id", owner_id),
            None => Self::service(client),
        }
    }

    /// Returns the shop-level metafield service.
    #[must_use]
    pub fn for_shop(client: &RestClient) -> ResourceService<'_, Self> {
        Self::service(client)
    }
}

impl RestResource for Metafield {
    type Id = u64;
    type FindParams = MetafieldFindParams;
    type AllParams = MetafieldListParams;
    type CountParams = ();

    const NAME: &'static str = "Metafield";
    const SINGULAR: &'static str = "metafield";
    const PLURAL: &'static str = "metafields";

    const PATHS: &'static [ResourcePath] = &[
        // Owned by a resource
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["owner", "owner_id"],
            "{owner}/{owner_id}/metafields",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Count,
            &["owner", "owner_id"],
            "{owner}/{owner_id}/metafields/count",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["owner", "owner_id", "id"],
            "{owner}/{owner_id}/metafields/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["owner", "owner_id"],
            "{owner}/{owner_id}/metafields",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["owner", "owner_id", "id"],
            "{owner}/{owner_id}/metafields/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["owner", "owner_id", "id"],
            "{owner}/{owner_id}/metafields/{id}",
        ),
        // Shop-level
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "metafields"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Count,
            &[],
            "metafields/count",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "metafields/{id}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "metafields"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "metafields/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "metafields/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Query parameters for fetching one metafield.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct MetafieldFindParams {
    /// Comma-separated fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Query parameters for listing metafields.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct MetafieldListParams {
    /// Maximum results per page (max 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Only metafields after this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Filter by namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Filter by key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Filter by content type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,

    /// Comma-separated fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}
