//! Client configuration.
//!
//! A [`ShopifyConfig`] says which shop to talk to, how to authenticate, which
//! API version to use and how hard to retry. It is built once with
//! [`ShopifyConfigBuilder`] and read by every client created from it.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use shopify_rest::{AccessToken, ApiVersion, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .retries(3)
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_path_prefix(), "admin/api/2025-10");
//! assert_eq!(config.tries(), 4);
//! ```

mod newtypes;
mod version;

use std::time::Duration;

pub use newtypes::{AccessToken, ApiKey, ApiPassword, HostUrl, ShopDomain};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Path prefix used when no API version is configured.
pub const LEGACY_PATH_PREFIX: &str = "admin";

/// How requests authenticate against the shop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// An Admin API access token, sent as `X-Shopify-Access-Token`.
    AccessToken(AccessToken),
    /// A private app key and password, sent with HTTP basic auth.
    PrivateApp {
        /// Basic-auth user name.
        api_key: ApiKey,
        /// Basic-auth password.
        password: ApiPassword,
    },
}

/// Settings shared by every request a client makes.
#[derive(Clone, Debug)]
pub struct ShopifyConfig {
    shop: ShopDomain,
    credentials: Credentials,
    api_version: Option<ApiVersion>,
    retries: u32,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
    api_host: Option<HostUrl>,
}

impl ShopifyConfig {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the API version, or `None` for the legacy unversioned API.
    #[must_use]
    pub const fn api_version(&self) -> Option<&ApiVersion> {
        self.api_version.as_ref()
    }

    /// Returns the REST path prefix: `admin/api/{version}` when a version is
    /// configured, otherwise [`LEGACY_PATH_PREFIX`].
    #[must_use]
    pub fn api_path_prefix(&self) -> String {
        self.api_version
            .as_ref()
            .map_or_else(|| LEGACY_PATH_PREFIX.to_string(), ApiVersion::path_prefix)
    }

    /// Returns how many times a failed request is retried.
    #[must_use]
    pub const fn retries(&self) -> u32 {
        self.retries
    }

    /// Returns the total number of attempts per request (`retries + 1`).
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.retries.saturating_add(1)
    }

    /// Returns the per-request timeout, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }
}

// Verify ShopifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for [`ShopifyConfig`].
///
/// `shop` and one kind of credentials are required.
///
/// # Defaults
///
/// - `api_version`: `None`, which uses the legacy `admin` prefix
/// - `retries`: `0`
/// - `timeout`: `None`
/// - `user_agent_prefix`: `None`
/// - `api_host`: `None`, which targets `https://{shop}`
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    shop: Option<ShopDomain>,
    credentials: Option<Credentials>,
    api_version: Option<ApiVersion>,
    retries: Option<u32>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
    api_host: Option<HostUrl>,
}

impl ShopifyConfigBuilder {
    /// Creates a builder with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Authenticates with an Admin API access token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.credentials = Some(Credentials::AccessToken(token));
        self
    }

    /// Authenticates as a private app with basic auth.
    #[must_use]
    pub fn private_app(mut self, api_key: ApiKey, password: ApiPassword) -> Self {
        self.credentials = Some(Credentials::PrivateApp { api_key, password });
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets how many times a failed request is retried.
    ///
    /// Connection failures, timeouts and `429 Too Many Requests` are retried.
    #[must_use]
    pub const fn retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sends requests to this origin instead of `https://{shop}`.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Builds the [`ShopifyConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if the shop or the
    /// credentials were not set.
    pub fn build(self) -> Result<ShopifyConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let credentials = self
            .credentials
            .ok_or(ConfigError::MissingRequiredField {
                field: "credentials",
            })?;

        Ok(ShopifyConfig {
            shop,
            credentials,
            api_version: self.api_version,
            retries: self.retries.unwrap_or_default(),
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
            api_host: self.api_host,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop() -> ShopDomain {
        ShopDomain::new("test-shop").unwrap()
    }

    fn token() -> AccessToken {
        AccessToken::new("token").unwrap()
    }

    #[test]
    fn test_builder_requires_shop() {
        let result = ShopifyConfig::builder().access_token(token()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "shop" })
        ));
    }

    #[test]
    fn test_builder_requires_credentials() {
        let result = ShopifyConfig::builder().shop(shop()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "credentials"
            })
        ));
    }

    #[test]
    fn test_builder_defaults() {
        let config = ShopifyConfig::builder()
            .shop(shop())
            .access_token(token())
            .build()
            .unwrap();

        assert!(config.api_version().is_none());
        assert_eq!(config.api_path_prefix(), LEGACY_PATH_PREFIX);
        assert_eq!(config.retries(), 0);
        assert_eq!(config.tries(), 1);
        assert!(config.timeout().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert!(config.api_host().is_none());
    }

    #[test]
    fn test_versioned_prefix() {
        let config = ShopifyConfig::builder()
            .shop(shop())
            .access_token(token())
            .api_version("2020-01".parse().unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_path_prefix(), "admin/api/2020-01");
    }

    #[test]
    fn test_private_app_credentials() {
        let config = ShopifyConfig::builder()
            .shop(shop())
            .private_app(
                ApiKey::new("key").unwrap(),
                ApiPassword::new("pass").unwrap(),
            )
            .build()
            .unwrap();

        match config.credentials() {
            Credentials::PrivateApp { api_key, password } => {
                assert_eq!(api_key.as_ref(), "key");
                assert_eq!(password.as_ref(), "pass");
            }
            Credentials::AccessToken(_) => panic!("expected private app credentials"),
        }
    }

    #[test]
    fn test_last_credentials_win() {
        let config = ShopifyConfig::builder()
            .shop(shop())
            .private_app(
                ApiKey::new("key").unwrap(),
                ApiPassword::new("pass").unwrap(),
            )
            .access_token(token())
            .build()
            .unwrap();

        assert_eq!(config.credentials(), &Credentials::AccessToken(token()));
    }

    #[test]
    fn test_retries_saturate() {
        let config = ShopifyConfig::builder()
            .shop(shop())
            .access_token(token())
            .retries(u32::MAX)
            .build()
            .unwrap();

        assert_eq!(config.tries(), u32::MAX);
    }

    #[test]
    fn test_debug_output_masks_token() {
        let config = ShopifyConfig::builder()
            .shop(shop())
            .access_token(AccessToken::new("shpat_very_secret").unwrap())
            .build()
            .unwrap();

        let debug = format!("{config:?}");
        assert!(debug.contains("ShopifyConfig"));
        assert!(!debug.contains("shpat_very_secret"));
    }
}
