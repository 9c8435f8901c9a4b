//! REST client for the Shopify Admin API.

use std::collections::BTreeMap;

use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ShopifyConfig, LEGACY_PATH_PREFIX};

/// REST client bound to one shop and one API prefix.
///
/// Paths are given relative to the API prefix, with or without a leading
/// slash or `.json` suffix: `products`, `/products.json` and `products.json`
/// all resolve to `{prefix}/products.json`. Paths that start with `admin/`
/// are sent as-is from the shop root.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::{AccessToken, ApiVersion, RestClient, ShopDomain, ShopifyConfig};
///
/// let config = ShopifyConfig::builder()
///     .shop(ShopDomain::new("my-store")?)
///     .access_token(AccessToken::new("shpat_xxx")?)
///     .api_version(ApiVersion::latest())
///     .build()?;
/// let client = RestClient::new(&config)?;
///
/// let response = client.get("products", None).await?;
/// let body = serde_json::json!({"product": {"title": "New Product"}});
/// let response = client.post("products", body, None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
    path_prefix: String,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a client for the configured shop.
    ///
    /// The prefix is `admin/api/{version}` when a version is configured,
    /// and the legacy `admin` prefix otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &ShopifyConfig) -> Result<Self, RestError> {
        let path_prefix = config.api_path_prefix();

        match config.api_version() {
            None => tracing::debug!(
                shop = %config.shop(),
                "No API version configured, using legacy '{}' prefix",
                LEGACY_PATH_PREFIX
            ),
            Some(version) if !version.is_stable() => tracing::warn!(
                shop = %config.shop(),
                "Using the unstable API version; endpoints may change without notice"
            ),
            Some(_) => {}
        }

        let http_client = HttpClient::new(&path_prefix, config)?;

        Ok(Self {
            http_client,
            path_prefix,
        })
    }

    /// Returns the API path prefix, e.g. `admin/api/2024-10`.
    #[must_use]
    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get(
        &self,
        path: &str,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query, None)
            .await
    }

    /// Sends a GET request with an explicit try budget.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn get_with_tries(
        &self,
        path: &str,
        query: Option<BTreeMap<String, String>>,
        tries: u32,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query, Some(tries))
            .await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query, None)
            .await
    }

    /// Sends a POST request with an explicit try budget.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn post_with_tries(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<BTreeMap<String, String>>,
        tries: u32,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query, Some(tries))
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), query, None)
            .await
    }

    /// Sends a PUT request with an explicit try budget.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn put_with_tries(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<BTreeMap<String, String>>,
        tries: u32,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), query, Some(tries))
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn delete(
        &self,
        path: &str,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query, None)
            .await
    }

    /// Sends a DELETE request with an explicit try budget.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn delete_with_tries(
        &self,
        path: &str,
        query: Option<BTreeMap<String, String>>,
        tries: u32,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query, Some(tries))
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<BTreeMap<String, String>>,
        tries: Option<u32>,
    ) -> Result<HttpResponse, RestError> {
        let normalized = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            builder = builder.query(query);
        }
        if let Some(tries) = tries {
            builder = builder.tries(tries);
        }

        let request = builder.build().map_err(crate::clients::HttpError::from)?;
        Ok(self.http_client.request(request).await?)
    }
}

/// Normalizes a resource path to `{path}.json`.
///
/// Strips one leading `/` and a trailing `.json`, then appends `.json`.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix(".json").unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(format!("{trimmed}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, ApiVersion, ShopDomain};

    fn config(version: Option<ApiVersion>) -> ShopifyConfig {
        let mut builder = ShopifyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("token").unwrap());
        if let Some(version) = version {
            builder = builder.api_version(version);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_normalize_path_variants() {
        assert_eq!(normalize_path("products").unwrap(), "products.json");
        assert_eq!(normalize_path("/products").unwrap(), "products.json");
        assert_eq!(normalize_path("products.json").unwrap(), "products.json");
        assert_eq!(normalize_path("/products.json").unwrap(), "products.json");
        assert_eq!(
            normalize_path("blogs/1/articles").unwrap(),
            "blogs/1/articles.json"
        );
    }

    #[test]
    fn test_normalize_path_rejects_empty() {
        for path in ["", "/", ".json", "/.json"] {
            assert!(matches!(
                normalize_path(path),
                Err(RestError::InvalidPath { .. })
            ));
        }
    }

    #[test]
    fn test_versioned_prefix() {
        let version = ApiVersion::stable(2024, 10).unwrap();
        let client = RestClient::new(&config(Some(version))).unwrap();

        assert_eq!(client.path_prefix(), "admin/api/2024-10");
        assert_eq!(client.http_client().base_path(), "/admin/api/2024-10");
    }

    #[test]
    fn test_unstable_version_prefix() {
        let version = ApiVersion::Unstable;
        assert!(!version.is_stable());

        let client = RestClient::new(&config(Some(version))).unwrap();
        assert_eq!(client.path_prefix(), "admin/api/unstable");
    }

    #[test]
    fn test_legacy_prefix_without_version() {
        let client = RestClient::new(&config(None)).unwrap();

        assert_eq!(client.path_prefix(), "admin");
        assert_eq!(
            client.http_client().url_for("products.json"),
            "https://test-shop.myshopify.com/admin/products.json"
        );
    }
}
