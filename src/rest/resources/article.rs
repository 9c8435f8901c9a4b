//! Blog articles.
//!
//! Articles always live under a blog, so their service is obtained with
//! [`Article::in_blog`]:
//!
//! - List: `blogs/{blog_id}/articles`
//! - Find: `blogs/{blog_id}/articles/{id}`
//! - Count: `blogs/{blog_id}/articles/count`
//! - Create: `blogs/{blog_id}/articles`
//! - Update: `blogs/{blog_id}/articles/{id}`
//! - Delete: `blogs/{blog_id}/articles/{id}`
//!
//! Shop-wide author and tag lists are available from [`Article::authors`]
//! and [`Article::tags`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{Article, ArticleListParams};
//!
//! let articles = Article::in_blog(&client, 241_253_187);
//!
//! let page = articles
//!     .list(Some(ArticleListParams { limit: Some(10), ..Default::default() }))
//!     .await?;
//!
//! let draft = Article {
//!     title: Some("New Post".to_string()),
//!     body_html: Some("<p>Article content</p>".to_string()),
//!     author: Some("Admin".to_string()),
//!     ..Default::default()
//! };
//! let created = articles.create(&draft).await?;
//! let count = articles.count(None).await?;
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::resources::{Metafield, MetafieldOwner};
use crate::rest::{
    serialize_to_query, HasMetafields, ResourceError, ResourceOperation, ResourcePath,
    ResourceResponse, ResourceService, RestResource,
};

/// The featured image of an article.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ArticleImage {
    /// Source URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Alternative text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Read-only.
    #[serde(skip_serializing)]
    pub width: Option<i64>,

    /// Read-only.
    #[serde(skip_serializing)]
    pub height: Option<i64>,

    /// Read-only.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A blog article.
///
/// `id`, `user_id`, `created_at`, `updated_at` and `admin_graphql_api_id`
/// are read-only and never sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Article {
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The blog the article belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    /// Excerpt shown on the blog page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_html: Option<String>,

    /// Suffix of the Liquid template, e.g. `custom` for
    /// `article.custom.liquid`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,

    /// URL handle, generated from the title when not set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(skip_serializing)]
    pub user_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ArticleImage>,

    /// Write-only visibility switch; Shopify reports visibility through
    /// `published_at`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,

    /// Publication time. A future value schedules the article.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// Metafields to create along with the article.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafields: Option<Vec<Metafield>>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl Article {
    /// Returns the article service of one blog.
    #[must_use]
    pub fn in_blog(client: &RestClient, blog_id: u64) -> ResourceService<'_, Self> {
        Self::service(client).scoped("blog_id", blog_id)
    }

    /// Lists every article author in the shop.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the body has no
    /// `authors` array.
    pub async fn authors(
        client: &RestClient,
    ) -> Result<ResourceResponse<Vec<String>>, ResourceError> {
        let response = client
            .get("articles/authors", None)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, None))?;
        ResourceResponse::from_http_response(response, "authors")
    }

    /// Lists article tags, across the shop or within one blog.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the body has no
    /// `tags` array.
    pub async fn tags(
        client: &RestClient,
        blog_id: Option<u64>,
        params: Option<ArticleTagsParams>,
    ) -> Result<ResourceResponse<Vec<String>>, ResourceError> {
        let path = blog_id.map_or_else(
            || "articles/tags".to_string(),
            |id| format!("blogs/{id}/articles/tags"),
        );
        let query: Option<BTreeMap<String, String>> = params
            .as_ref()
            .map(serialize_to_query)
            .transpose()
            .map_err(|source| ResourceError::Serialization {
                resource: Self::NAME,
                source,
            })?;

        let response = client
            .get(&path, query)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, None))?;
        ResourceResponse::from_http_response(response, "tags")
    }
}

impl RestResource for Article {
    type Id = u64;
    type FindParams = ArticleFindParams;
    type AllParams = ArticleListParams;
    type CountParams = ArticleCountParams;

    const NAME: &'static str = "Article";
    const SINGULAR: &'static str = "article";
    const PLURAL: &'static str = "articles";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["blog_id", "id"],
            "blogs/{blog_id}/articles/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["blog_id"],
            "blogs/{blog_id}/articles",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Count,
            &["blog_id"],
            "blogs/{blog_id}/articles/count",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["blog_id"],
            "blogs/{blog_id}/articles",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["blog_id", "id"],
            "blogs/{blog_id}/articles/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["blog_id", "id"],
            "blogs/{blog_id}/articles/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl HasMetafields for Article {
    const METAFIELD_OWNER: MetafieldOwner = MetafieldOwner::Article;
}

/// Query parameters for fetching one article.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ArticleFindParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Query parameters for listing articles.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ArticleListParams {
    /// Maximum results per page (max 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// `published`, `unpublished` or `any`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Query parameters for counting articles.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ArticleCountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_max: Option<DateTime<Utc>>,
}

/// Query parameters for [`Article::tags`].
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ArticleTagsParams {
    /// Maximum number of tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Order by popularity, most popular first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popular: Option<u8>,
}
