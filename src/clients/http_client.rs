//! Low-level HTTP client with retry handling.
//!
//! [`HttpClient`] owns the `reqwest` client, the shop origin, the API base
//! path and the authentication headers. Every request goes through
//! [`HttpClient::request`], which applies the retry policy:
//!
//! - connection failures and timeouts are retried after [`RETRY_WAIT_TIME`]
//! - `429 Too Many Requests` is retried after `Retry-After` seconds, capped
//!   at [`MAX_RETRY_AFTER`](crate::clients::MAX_RETRY_AFTER), or
//!   [`RETRY_WAIT_TIME`] when the header is missing
//! - any other non-2xx status fails immediately
//!
//! The number of attempts comes from the request, falling back to
//! [`ShopifyConfig::tries`].

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{
    HttpError, HttpResponseError, MaxHttpRetriesExceededError, ResponseDecodingError,
};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{Credentials, ShopifyConfig};

/// Fixed wait between retries when the server gives no `Retry-After`.
pub const RETRY_WAIT_TIME: Duration = Duration::from_secs(1);

/// Crate version, sent in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Status code that triggers a rate-limit retry.
const TOO_MANY_REQUESTS: u16 = 429;

/// HTTP client bound to one shop and one API base path.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    base_path: String,
    default_headers: HashMap<String, String>,
    basic_auth: Option<(String, String)>,
    default_tries: u32,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client for `config.shop()` rooted at `base_path`
    /// (e.g. `/admin/api/2024-10`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Client`] if the TLS backend cannot be initialized.
    pub fn new(base_path: impl Into<String>, config: &ShopifyConfig) -> Result<Self, HttpError> {
        let base_path = format!("/{}", base_path.into().trim_matches('/'));

        let base_uri = config.api_host().map_or_else(
            || format!("https://{}", config.shop()),
            crate::config::HostUrl::origin,
        );

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or_else(String::new, |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Shopify REST Client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        // Proxies route on Host
        if config.api_host().is_some() {
            default_headers.insert("Host".to_string(), config.shop().to_string());
        }

        let basic_auth = match config.credentials() {
            Credentials::AccessToken(token) => {
                default_headers.insert(
                    "X-Shopify-Access-Token".to_string(),
                    token.as_ref().to_string(),
                );
                None
            }
            Credentials::PrivateApp { api_key, password } => Some((
                api_key.as_ref().to_string(),
                password.as_ref().to_string(),
            )),
        };

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(HttpError::Client)?;

        Ok(Self {
            client,
            base_uri,
            base_path,
            default_headers,
            basic_auth,
            default_tries: config.tries(),
        })
    }

    /// Returns the origin requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the API base path.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the number of attempts used when a request sets none.
    #[must_use]
    pub const fn default_tries(&self) -> u32 {
        self.default_tries
    }

    /// Builds the absolute URL for a request path.
    ///
    /// Paths under `admin/` are already rooted and skip the base path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.starts_with("admin/") {
            format!("{}/{path}", self.base_uri)
        } else {
            format!("{}{}/{path}", self.base_uri, self.base_path)
        }
    }

    /// Sends a request, retrying transient failures.
    ///
    /// # Errors
    ///
    /// - [`HttpError::InvalidRequest`] if the request fails validation
    /// - [`HttpError::Network`] if the transport still fails on the last try
    /// - [`HttpError::Decoding`] if a 2xx body is not valid JSON
    /// - [`HttpError::MaxRetries`] if every try was rate limited
    /// - [`HttpError::Response`] for any other non-2xx status
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);
        let tries = request.tries.unwrap_or(self.default_tries).max(1);

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;

            tracing::debug!(
                method = %request.http_method,
                url = %url,
                attempt,
                tries,
                "Sending Shopify REST request"
            );

            let (code, headers, body_text) = match self.send(&url, &request).await {
                Ok(raw) => raw,
                Err(error) if attempt < tries && is_transient(&error) => {
                    tracing::warn!(
                        url = %url,
                        attempt,
                        error = %error,
                        "Transport error, retrying in {:?}",
                        RETRY_WAIT_TIME
                    );
                    tokio::time::sleep(RETRY_WAIT_TIME).await;
                    continue;
                }
                Err(error) => return Err(HttpError::Network(error)),
            };

            tracing::debug!(url = %url, status = code, "Received Shopify REST response");

            let body = decode_body(code, &body_text)?;
            let response = HttpResponse::new(code, headers, body);

            if let Some(reason) = response.deprecation_reason() {
                tracing::warn!(
                    "Deprecated request to Shopify API at {}, received reason: {}",
                    request.path,
                    reason
                );
            }

            if response.is_ok() {
                return Ok(response);
            }

            let message = serialize_error(&response);
            let error_reference = response.request_id().map(String::from);

            if code != TOO_MANY_REQUESTS {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message,
                    error_reference,
                    body: response.body,
                }));
            }

            if attempt >= tries {
                if tries == 1 {
                    return Err(HttpError::Response(HttpResponseError {
                        code,
                        message,
                        error_reference,
                        body: response.body,
                    }));
                }
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries,
                    message,
                    error_reference,
                }));
            }

            let delay = retry_delay(&response);
            tracing::warn!(
                url = %url,
                attempt,
                "Rate limited by Shopify, retrying in {:?}",
                delay
            );
            tokio::time::sleep(delay).await;
        }
    }

    async fn send(
        &self,
        url: &str,
        request: &HttpRequest,
    ) -> Result<(u16, HashMap<String, Vec<String>>, String), reqwest::Error> {
        let mut builder = self
            .client
            .request(request.http_method.into(), url);

        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }
        if let Some((user, password)) = &self.basic_auth {
            builder = builder.basic_auth(user, Some(password));
        }
        if let Some(body) = &request.body {
            builder = builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                builder = builder.header(key, value);
            }
        }
        if let Some(query) = &request.query {
            builder = builder.query(query);
        }

        let res = builder.send().await?;
        let code = res.status().as_u16();
        let headers = parse_response_headers(res.headers());
        let body_text = res.text().await?;

        Ok((code, headers, body_text))
    }
}

fn is_transient(error: &reqwest::Error) -> bool {
    error.is_connect() || error.is_timeout() || error.is_request()
}

fn decode_body(code: u16, body_text: &str) -> Result<serde_json::Value, ResponseDecodingError> {
    if body_text.trim().is_empty() {
        return Ok(serde_json::json!({}));
    }

    match serde_json::from_str(body_text) {
        Ok(body) => Ok(body),
        // Error pages are often HTML; keep them for the error message
        Err(_) if !(200..=299).contains(&code) => Ok(serde_json::json!({ "raw_body": body_text })),
        Err(e) => Err(ResponseDecodingError::new(format!(
            "response body is not valid JSON: {e}"
        ))),
    }
}

fn parse_response_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        let key = name.as_str().to_lowercase();
        // Non-UTF-8 bytes must not turn into an empty, parseable value
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        result.entry(key).or_default().push(value);
    }
    result
}

fn retry_delay(response: &HttpResponse) -> Duration {
    response.retry_request_after.unwrap_or(RETRY_WAIT_TIME)
}

fn serialize_error(response: &HttpResponse) -> String {
    let mut error_body = serde_json::Map::new();

    for key in ["errors", "error", "raw_body"] {
        if let Some(value) = response.body.get(key) {
            error_body.insert(key.to_string(), value.clone());
        }
    }
    if response.body.get("error").is_some() {
        if let Some(desc) = response.body.get("error_description") {
            error_body.insert("error_description".to_string(), desc.clone());
        }
    }

    if let Some(request_id) = response.request_id() {
        error_body.insert(
            "error_reference".to_string(),
            serde_json::Value::String(format!(
                "If you report this error, please include this id: {request_id}."
            )),
        );
    }

    serde_json::Value::Object(error_body).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, ApiKey, ApiPassword, HostUrl, ShopDomain};
    use serde_json::json;

    fn config() -> ShopifyConfig {
        ShopifyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("test-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_targets_shop_over_https() {
        let client = HttpClient::new("admin/api/2024-10", &config()).unwrap();

        assert_eq!(client.base_uri(), "https://test-shop.myshopify.com");
        assert_eq!(client.base_path(), "/admin/api/2024-10");
        assert_eq!(client.default_tries(), 1);
    }

    #[test]
    fn test_default_headers_carry_token_and_user_agent() {
        let config = ShopifyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("test-token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new("admin", &config).unwrap();
        let headers = client.default_headers();

        assert_eq!(
            headers.get("X-Shopify-Access-Token"),
            Some(&"test-token".to_string())
        );
        assert_eq!(headers.get("Accept"), Some(&"application/json".to_string()));
        let user_agent = headers.get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | Shopify REST Client v"));
        assert!(user_agent.contains("Rust"));
        assert!(!headers.contains_key("Host"));
    }

    #[test]
    fn test_private_app_uses_basic_auth_instead_of_token_header() {
        let config = ShopifyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .private_app(
                ApiKey::new("key").unwrap(),
                ApiPassword::new("pass").unwrap(),
            )
            .build()
            .unwrap();
        let client = HttpClient::new("admin", &config).unwrap();

        assert!(!client
            .default_headers()
            .contains_key("X-Shopify-Access-Token"));
        assert_eq!(
            client.basic_auth,
            Some(("key".to_string(), "pass".to_string()))
        );
    }

    #[test]
    fn test_api_host_overrides_origin_and_sets_host_header() {
        let config = ShopifyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("test-token").unwrap())
            .api_host(HostUrl::new("http://127.0.0.1:9999").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new("/admin/", &config).unwrap();

        assert_eq!(client.base_uri(), "http://127.0.0.1:9999");
        assert_eq!(client.base_path(), "/admin");
        assert_eq!(
            client.default_headers().get("Host"),
            Some(&"test-shop.myshopify.com".to_string())
        );
    }

    #[test]
    fn test_url_for_respects_admin_rooted_paths() {
        let client = HttpClient::new("admin/api/2024-10", &config()).unwrap();

        assert_eq!(
            client.url_for("products.json"),
            "https://test-shop.myshopify.com/admin/api/2024-10/products.json"
        );
        assert_eq!(
            client.url_for("admin/oauth/access_scopes.json"),
            "https://test-shop.myshopify.com/admin/oauth/access_scopes.json"
        );
    }

    #[test]
    fn test_decode_body_rules() {
        assert_eq!(decode_body(200, "").unwrap(), json!({}));
        assert_eq!(decode_body(200, "{}").unwrap(), json!({}));
        assert_eq!(
            decode_body(502, "<html>Bad gateway</html>").unwrap(),
            json!({"raw_body": "<html>Bad gateway</html>"})
        );
        assert!(decode_body(200, "<html>").is_err());
    }

    #[test]
    fn test_serialize_error_includes_reference() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc-123".to_string()]);
        let response = HttpResponse::new(
            422,
            headers,
            json!({"errors": {"title": ["can't be blank"]}, "ignored": true}),
        );

        let message = serialize_error(&response);
        let parsed: serde_json::Value = serde_json::from_str(&message).unwrap();

        assert_eq!(parsed["errors"]["title"][0], "can't be blank");
        assert!(parsed.get("ignored").is_none());
        assert!(parsed["error_reference"]
            .as_str()
            .unwrap()
            .contains("abc-123"));
    }

    #[test]
    fn test_retry_delay_prefers_retry_after() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["0.5".to_string()]);
        let response = HttpResponse::new(429, headers, json!({}));
        assert_eq!(retry_delay(&response), Duration::from_millis(500));

        let response = HttpResponse::new(429, HashMap::new(), json!({}));
        assert_eq!(retry_delay(&response), RETRY_WAIT_TIME);
    }

    #[test]
    fn test_non_utf8_header_values_are_kept_lossily() {
        let mut raw = reqwest::header::HeaderMap::new();
        raw.insert(
            "x-note",
            reqwest::header::HeaderValue::from_bytes(b"caf\xe9").unwrap(),
        );
        raw.insert(
            "link",
            reqwest::header::HeaderValue::from_bytes(
                b"<https://s.myshopify.com/admin/pages.json?page_info=a>; rel=\"n\xffxt\"",
            )
            .unwrap(),
        );

        let headers = parse_response_headers(&raw);
        assert_eq!(headers["x-note"], vec!["caf\u{FFFD}".to_string()]);

        let response = HttpResponse::new(200, headers, json!({}));
        assert!(response.pagination().is_err());
    }

    #[test]
    fn test_retry_delay_caps_huge_retry_after() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["1e300".to_string()]);
        let response = HttpResponse::new(429, headers, json!({}));
        assert_eq!(retry_delay(&response), crate::clients::MAX_RETRY_AFTER);
    }
}
