//! Configuration errors.
//!
//! Every configuration constructor returns `Result<T, ConfigError>`, so an
//! invalid shop, credential or version is rejected before any request is made.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors raised while building a [`ShopifyConfig`](crate::ShopifyConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide the private app's API key.")]
    EmptyApiKey,

    /// Private app password cannot be empty.
    #[error("API password cannot be empty. Please provide the private app's password.")]
    EmptyApiPassword,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Admin API access token.")]
    EmptyAccessToken,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The rejected domain.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2024-01') or 'unstable'.")]
    InvalidApiVersion {
        /// The rejected version string.
        version: String,
    },

    /// A required builder field was never set.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// API host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The rejected URL.
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_credential_messages_name_the_credential() {
        assert!(ConfigError::EmptyApiKey.to_string().contains("API key"));
        assert!(ConfigError::EmptyApiPassword
            .to_string()
            .contains("API password"));
        assert!(ConfigError::EmptyAccessToken
            .to_string()
            .contains("Access token"));
    }

    #[test]
    fn test_invalid_api_version_message_shows_expected_format() {
        let error = ConfigError::InvalidApiVersion {
            version: "2024/01".to_string(),
        };
        let message = error.to_string();

        assert!(message.contains("2024/01"));
        assert!(message.contains("YYYY-MM"));
        assert!(message.contains("unstable"));
    }

    #[test]
    fn test_missing_required_field_names_field() {
        let error = ConfigError::MissingRequiredField { field: "shop" };
        assert!(error.to_string().contains("'shop'"));
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(ConfigError::EmptyApiKey, ConfigError::EmptyApiKey);
        assert_ne!(ConfigError::EmptyApiKey, ConfigError::EmptyAccessToken);
    }
}
