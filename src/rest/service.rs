//! Generic CRUD service over a [`RestResource`].
//!
//! A [`ResourceService`] pairs a [`RestClient`] with a scope: the parent IDs
//! that nested paths need, such as the blog of an article or the owner of a
//! metafield. Every operation resolves its path from the resource's path
//! table using the scope plus, where relevant, the resource ID.
//!
//! | Operation | Request | Envelope |
//! |---|---|---|
//! | [`list`](ResourceService::list) | `GET {plural}` | `{"<plural>": [...]}` |
//! | [`get`](ResourceService::get) | `GET {plural}/{id}` | `{"<singular>": {...}}` |
//! | [`count`](ResourceService::count) | `GET {plural}/count` | `{"count": n}` |
//! | [`create`](ResourceService::create) | `POST {plural}` | singular both ways |
//! | [`update`](ResourceService::update) | `PUT {plural}/{id}` | singular both ways |
//! | [`save`](ResourceService::save) | `create` or `update`, by `get_id` | singular both ways |
//! | [`delete`](ResourceService::delete) | `DELETE {plural}/{id}` | `{}` |

use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Display};
use std::marker::PhantomData;

use crate::clients::{
    HttpMethod, HttpResponse, InvalidHttpRequestError, PageOptions, Pagination, RestClient,
    RestError,
};
use crate::rest::resources::Metafield;
use crate::rest::{
    build_path, get_path, serialize_to_query, HasMetafields, ResourceError, ResourceOperation,
    ResourceResponse, RestResource,
};

/// CRUD operations for `R`, bound to a client and a scope.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::rest::RestResource;
/// use shopify_rest::rest::resources::{Article, Product};
///
/// let products = Product::service(&client).list(None).await?;
/// let count = Product::service(&client).count(None).await?;
///
/// let articles = Article::in_blog(&client, 241_253_187);
/// let article = articles.get(134_645_308, None).await?;
///
/// let metafields = Product::service(&client).metafields(632_910_392);
/// let all = metafields.list(None).await?;
/// ```
pub struct ResourceService<'a, R: RestResource> {
    client: &'a RestClient,
    scope: Vec<(&'static str, String)>,
    resource: PhantomData<fn() -> R>,
}

impl<R: RestResource> Clone for ResourceService<'_, R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client,
            scope: self.scope.clone(),
            resource: PhantomData,
        }
    }
}

impl<R: RestResource> fmt::Debug for ResourceService<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceService")
            .field("resource", &R::NAME)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

impl<'a, R: RestResource> ResourceService<'a, R> {
    /// Creates an unscoped service.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self {
            client,
            scope: Vec::new(),
            resource: PhantomData,
        }
    }

    /// Adds a parent ID used to fill `{name}` in the path table.
    #[must_use]
    pub fn scoped(mut self, name: &'static str, value: impl Display) -> Self {
        let value = value.to_string();
        match self.scope.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.scope.push((name, value)),
        }
        self
    }

    /// Returns the parent IDs of this service.
    #[must_use]
    pub fn scope(&self) -> &[(&'static str, String)] {
        &self.scope
    }

    /// Returns the client.
    #[must_use]
    pub const fn client(&self) -> &'a RestClient {
        self.client
    }

    /// Lists one page of resources.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decoding`] if the body or the `Link` header
    /// cannot be decoded, and the usual HTTP errors otherwise.
    pub async fn list(
        &self,
        params: Option<R::AllParams>,
    ) -> Result<ResourceResponse<Vec<R>>, ResourceError> {
        let query = params.as_ref().map(query_of::<R, _>).transpose()?;
        self.fetch_list(query).await
    }

    /// Lists one page and returns the cursors alongside the data.
    ///
    /// # Errors
    ///
    /// See [`list`](Self::list).
    pub async fn list_with_pagination(
        &self,
        params: Option<R::AllParams>,
    ) -> Result<(Vec<R>, Pagination), ResourceError> {
        let response = self.list(params).await?;
        let pagination = response.pagination().cloned().unwrap_or_default();
        Ok((response.into_inner(), pagination))
    }

    /// Fetches the page a cursor from an earlier response points to.
    ///
    /// # Errors
    ///
    /// See [`list`](Self::list).
    pub async fn list_page(
        &self,
        page: &PageOptions,
    ) -> Result<ResourceResponse<Vec<R>>, ResourceError> {
        let mut query = BTreeMap::new();
        query.insert("page_info".to_string(), page.page_info.clone());
        if let Some(limit) = page.limit {
            query.insert("limit".to_string(), limit.to_string());
        }
        self.fetch_list(Some(query)).await
    }

    /// Lists resources created after `since_id`.
    ///
    /// # Errors
    ///
    /// See [`list`](Self::list).
    pub async fn list_since(
        &self,
        since_id: R::Id,
        limit: Option<u32>,
    ) -> Result<ResourceResponse<Vec<R>>, ResourceError> {
        let mut query = BTreeMap::new();
        query.insert("since_id".to_string(), since_id.to_string());
        if let Some(limit) = limit {
            query.insert("limit".to_string(), limit.to_string());
        }
        self.fetch_list(Some(query)).await
    }

    /// Fetches one resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on 404.
    pub async fn get(
        &self,
        id: R::Id,
        params: Option<R::FindParams>,
    ) -> Result<ResourceResponse<R>, ResourceError> {
        let query = params.as_ref().map(query_of::<R, _>).transpose()?;
        let response = self
            .send(ResourceOperation::Find, Some(&id), None, query)
            .await?;
        ResourceResponse::from_http_response(response, R::SINGULAR)
    }

    /// Counts resources.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decoding`] if the body has no numeric
    /// `count`.
    pub async fn count(&self, params: Option<R::CountParams>) -> Result<u64, ResourceError> {
        let query = params.as_ref().map(query_of::<R, _>).transpose()?;
        let response = self
            .send(ResourceOperation::Count, None, None, query)
            .await?;

        response
            .body
            .get("count")
            .and_then(serde_json::Value::as_u64)
            .ok_or_else(|| {
                crate::clients::ResponseDecodingError::new("missing 'count' in response body")
                    .into()
            })
    }

    /// Creates a resource and returns it as stored by Shopify.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] on 422.
    pub async fn create(&self, resource: &R) -> Result<ResourceResponse<R>, ResourceError> {
        let body = envelope(resource)?;
        let response = self
            .send(ResourceOperation::Create, None, Some(body), None)
            .await?;
        ResourceResponse::from_http_response(response, R::SINGULAR)
    }

    /// Updates a resource and returns it as stored by Shopify.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on 404 and
    /// [`ResourceError::ValidationFailed`] on 422.
    pub async fn update(
        &self,
        id: R::Id,
        resource: &R,
    ) -> Result<ResourceResponse<R>, ResourceError> {
        let body = envelope(resource)?;
        let response = self
            .send(ResourceOperation::Update, Some(&id), Some(body), None)
            .await?;
        ResourceResponse::from_http_response(response, R::SINGULAR)
    }

    /// Creates `resource` when it has no ID yet, and updates it otherwise.
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create) and [`update`](Self::update).
    pub async fn save(&self, resource: &R) -> Result<ResourceResponse<R>, ResourceError> {
        match resource.get_id() {
            Some(id) => self.update(id, resource).await,
            None => self.create(resource).await,
        }
    }

    /// Deletes a resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on 404.
    pub async fn delete(&self, id: R::Id) -> Result<(), ResourceError> {
        self.send(ResourceOperation::Delete, Some(&id), None, None)
            .await?;
        Ok(())
    }

    async fn fetch_list(
        &self,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<ResourceResponse<Vec<R>>, ResourceError> {
        let response = self.send(ResourceOperation::All, None, None, query).await?;
        ResourceResponse::from_list_response(response, R::PLURAL)
    }

    async fn send(
        &self,
        operation: ResourceOperation,
        id: Option<&R::Id>,
        body: Option<serde_json::Value>,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, ResourceError> {
        let mut ids: HashMap<&str, String> = self
            .scope
            .iter()
            .map(|(key, value)| (*key, value.clone()))
            .collect();
        if let Some(id) = id {
            ids.insert("id", id.to_string());
        }

        let available_ids: Vec<&str> = ids.keys().copied().collect();
        let path = get_path(R::PATHS, operation, &available_ids).ok_or(
            ResourceError::PathResolutionFailed {
                resource: R::NAME,
                operation: operation.as_str(),
            },
        )?;
        let url = build_path(path.template, &ids);

        let result = match (path.http_method, body) {
            (HttpMethod::Get, _) => self.client.get(&url, query).await,
            (HttpMethod::Delete, _) => self.client.delete(&url, query).await,
            (HttpMethod::Post, Some(body)) => self.client.post(&url, body, query).await,
            (HttpMethod::Put, Some(body)) => self.client.put(&url, body, query).await,
            (method @ (HttpMethod::Post | HttpMethod::Put), None) => Err(RestError::Http(
                InvalidHttpRequestError::MissingBody {
                    method: method.to_string(),
                }
                .into(),
            )),
        };

        let id = id.map(ToString::to_string);
        result.map_err(|e| ResourceError::from_rest_error(e, R::NAME, id.as_deref()))
    }
}

impl<'a, R: HasMetafields> ResourceService<'a, R> {
    /// Returns the metafield service of one resource of this kind.
    #[must_use]
    pub fn metafields(&self, owner_id: R::Id) -> ResourceService<'a, Metafield> {
        Metafield::for_owner(self.client, R::METAFIELD_OWNER, owner_id)
    }
}

fn query_of<R: RestResource, P: serde::Serialize>(
    params: &P,
) -> Result<BTreeMap<String, String>, ResourceError> {
    serialize_to_query(params).map_err(|source| ResourceError::Serialization {
        resource: R::NAME,
        source,
    })
}

fn envelope<R: RestResource>(resource: &R) -> Result<serde_json::Value, ResourceError> {
    let value = serde_json::to_value(resource).map_err(|source| ResourceError::Serialization {
        resource: R::NAME,
        source,
    })?;

    let mut body = serde_json::Map::new();
    body.insert(R::SINGULAR.to_string(), value);
    Ok(serde_json::Value::Object(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, ShopDomain, ShopifyConfig};
    use crate::rest::resources::{Article, Page};

    fn client() -> RestClient {
        let config = ShopifyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .build()
            .unwrap();
        RestClient::new(&config).unwrap()
    }

    #[test]
    fn test_scoped_replaces_existing_entry() {
        let client = client();
        let service = Page::service(&client)
            .scoped("blog_id", 1)
            .scoped("blog_id", 2);

        assert_eq!(service.scope(), &[("blog_id", "2".to_string())]);
    }

    #[test]
    fn test_envelope_wraps_under_singular_key() {
        let page = Page {
            title: Some("About".to_string()),
            ..Page::default()
        };

        let body = envelope(&page).unwrap();
        assert_eq!(body["page"]["title"], "About");
        assert!(body["page"].get("id").is_none());
    }

    #[test]
    fn test_metafields_scope_comes_from_owner() {
        let client = client();
        let metafields = Page::service(&client).metafields(108_828_309);

        assert_eq!(
            metafields.scope(),
            &[
                ("owner", "pages".to_string()),
                ("owner_id", "108828309".to_string())
            ]
        );
    }

    #[test]
    fn test_debug_names_resource() {
        let client = client();
        let service = Article::in_blog(&client, 241_253_187);
        let debug = format!("{service:?}");

        assert!(debug.contains("Article"));
        assert!(debug.contains("241253187"));
    }
}
