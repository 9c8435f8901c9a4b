//! Online store blogs.
//!
//! ```rust,ignore
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::rest::resources::{Blog, BlogCommentable};
//!
//! let blogs = Blog::service(&client);
//! let blog = Blog {
//!     title: Some("Apple main blog".to_string()),
//!     commentable: Some(BlogCommentable::Moderate),
//!     ..Default::default()
//! };
//! let created = blogs.create(&blog).await?;
//! let newer = blogs.list_since(241_253_187, Some(10)).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::resources::{Metafield, MetafieldOwner};
use crate::rest::{HasMetafields, ResourceOperation, ResourcePath, RestResource};

/// Whether readers can comment on a blog's articles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BlogCommentable {
    /// Comments are disabled.
    #[default]
    No,
    /// Comments are held for moderation.
    Moderate,
    /// Comments are published immediately.
    Yes,
}

/// A blog.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Blog {
    /// Read-only.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The title of the blog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// URL handle, generated from the title when not set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Comment policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentable: Option<BlogCommentable>,

    /// `FeedBurner` URL, when the feed is proxied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedburner: Option<String>,

    /// `FeedBurner` path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedburner_location: Option<String>,

    /// Suffix of the Liquid template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,

    /// Read-only. Tags of the blog's articles, comma-separated.
    #[serde(skip_serializing)]
    pub tags: Option<String>,

    /// Metafields to create along with the blog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafields: Option<Vec<Metafield>>,

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

impl RestResource for Blog {
    type Id = u64;
    type FindParams = BlogFindParams;
    type AllParams = BlogListParams;
    type CountParams = ();

    const NAME: &'static str = "Blog";
    const SINGULAR: &'static str = "blog";
    const PLURAL: &'static str = "blogs";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "blogs/{id}"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "blogs"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Count, &[], "blogs/count"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "blogs"),
        ResourcePath::new(HttpMethod::Put, ResourceOperation::Update, &["id"], "blogs/{id}"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "blogs/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl HasMetafields for Blog {
    const METAFIELD_OWNER: MetafieldOwner = MetafieldOwner::Blog;
}

/// Query parameters for fetching one blog.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct BlogFindParams {
    /// Comma-separated fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Query parameters for listing blogs.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct BlogListParams {
    /// Maximum results per page (max 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Only blogs after this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Filter by handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Comma-separated fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_commentable_wire_values() {
        assert_eq!(
            serde_json::to_value(BlogCommentable::Moderate).unwrap(),
            json!("moderate")
        );
        let parsed: BlogCommentable = serde_json::from_value(json!("yes")).unwrap();
        assert_eq!(parsed, BlogCommentable::Yes);
        assert_eq!(BlogCommentable::default(), BlogCommentable::No);
    }

    #[test]
    fn test_round_trips_writable_fields_only() {
        let blog: Blog = serde_json::from_value(json!({
            "id": 241_253_187,
            "handle": "apple-blog",
            "title": "Mah Blog",
            "updated_at": "2006-02-01T19:00:00-05:00",
            "commentable": "no",
            "feedburner": null,
            "feedburner_location": null,
            "created_at": "2024-01-02T09:28:43-05:00",
            "template_suffix": null,
            "tags": "Announcing, Mystery",
            "admin_graphql_api_id": "gid://shopify/OnlineStoreBlog/241253187"
        }))
        .unwrap();

        assert_eq!(blog.commentable, Some(BlogCommentable::No));

        let value = serde_json::to_value(&blog).unwrap();
        assert_eq!(
            value,
            json!({"title": "Mah Blog", "handle": "apple-blog", "commentable": "no"})
        );
    }
}
