//! Shopify Admin REST resources.
//!
//! Each resource is a plain serde record implementing
//! [`RestResource`](crate::rest::RestResource). Operations go through
//! [`ResourceService`](crate::rest::ResourceService):
//!
//! ```rust,ignore
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::rest::resources::{Article, Blog, Product};
//!
//! let blog = Blog::service(&client).get(241_253_187, None).await?;
//! let articles = Article::in_blog(&client, 241_253_187).list(None).await?;
//! let product_fields = Product::service(&client).metafields(632_910_392).list(None).await?;
//! ```
//!
//! | Resource | Base path | Metafields |
//! |----------|-----------|------------|
//! | [`Article`] | `blogs/{blog_id}/articles` | yes |
//! | [`Blog`] | `blogs` | yes |
//! | [`Page`] | `pages` | yes |
//! | [`Product`] | `products` | yes |
//! | [`Metafield`] | `{owner}/{owner_id}/metafields` | |
//! | [`CustomerSavedSearch`] | `customer_saved_searches` | no |
//! | [`AccessScope`] | `/admin/oauth/access_scopes` | no |

mod access_scope;
mod article;
mod blog;
mod customer_saved_search;
mod metafield;
mod page;
mod product;

pub use access_scope::AccessScope;
pub use article::{
    Article, ArticleCountParams, ArticleFindParams, ArticleImage, ArticleListParams,
    ArticleTagsParams,
};
pub use blog::{Blog, BlogCommentable, BlogFindParams, BlogListParams};
pub use customer_saved_search::{
    CustomerSavedSearch, CustomerSavedSearchCountParams, CustomerSavedSearchFindParams,
    CustomerSavedSearchListParams,
};
pub use metafield::{Metafield, MetafieldFindParams, MetafieldListParams, MetafieldOwner};
pub use page::{Page, PageCountParams, PageFindParams, PageListParams};
pub use product::{
    Product, ProductCountParams, ProductFindParams, ProductImage, ProductListParams,
    ProductOption, ProductStatus, ProductVariant,
};
