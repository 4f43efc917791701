//! # API Client
//!
//! HTTP client construction and shared request plumbing.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Backend Connection                                 │
//! │                                                                         │
//! │  Console Startup                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiConfig::new(url) ← base URL + timeout                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiClient::new(config) ← validate URL, build reqwest::Client          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │          reqwest::Client                 │                           │
//! │  │  (connection pool, cheap to clone)       │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       │ Clones handed to spawned request tasks                         │
//! │       ▼                                                                 │
//! │  Task 1 ──► GET  /productos                                            │
//! │  Task 2 ──► POST /productos                                            │
//! │  Task 3 ──► GET  /productos/7                                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Base URL Handling
//! The base URL may carry a path prefix (`http://host/api`). It is stored
//! with a trailing slash so relative joins append rather than replace the
//! last segment.

use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use crate::error::{extract_detail, ApiError, ApiResult};
use crate::repository::product::ProductRepository;

/// Backend used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

// =============================================================================
// Configuration
// =============================================================================

/// Client configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = ApiConfig::new("http://127.0.0.1:8000")
///     .timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend root, e.g. `http://127.0.0.1:8000`.
    pub base_url: String,

    /// Per-request timeout.
    /// Default: 10 seconds
    pub timeout: Duration,

    /// Connect timeout.
    /// Default: 5 seconds
    pub connect_timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiConfig {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig::new(DEFAULT_BASE_URL)
    }
}

// =============================================================================
// Client
// =============================================================================

/// Handle to the BeautyData backend.
///
/// Cloning is cheap: the underlying `reqwest::Client` shares its pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Validates the base URL and builds the HTTP client.
    ///
    /// ## Returns
    /// * `Ok(ApiClient)` - Ready to issue requests
    /// * `Err(ApiError::InvalidUrl)` - URL does not parse or is not http(s)
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("beauty-console/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        info!(
            base_url = %base_url,
            timeout_ms = config.timeout.as_millis() as u64,
            "API client ready"
        );

        Ok(ApiClient { http, base_url })
    }

    /// The normalized base URL (always ends with `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the product repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let products = client.products().list().await?;
    /// ```
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.clone())
    }

    /// Checks that the backend answers `GET /ping`.
    pub async fn ping(&self) -> ApiResult<()> {
        let url = self.endpoint("ping")?;
        debug!(%url, "Pinging backend");
        let response = self.http.get(url).send().await?;
        ensure_success(response, None).await?;
        Ok(())
    }

    /// Resolves `path` (no leading slash) against the base URL.
    pub fn endpoint(&self, path: &str) -> ApiResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

fn parse_base_url(raw: &str) -> ApiResult<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidUrl("la URL está vacía".into()));
    }

    let mut url = Url::parse(trimmed)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidUrl(format!(
            "esquema no soportado '{}'",
            url.scheme()
        )));
    }
    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidUrl(trimmed.to_string()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

// =============================================================================
// Response Helpers
// =============================================================================

/// Passes 2xx responses through; turns anything else into an [`ApiError`].
///
/// `cod` is the product id for by-id endpoints, so a 404 there becomes
/// [`ApiError::NotFound`].
pub(crate) async fn ensure_success(response: Response, cod: Option<i64>) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // The body is only used for the message; a failed read just means no detail.
    let body = response.text().await.unwrap_or_default();
    let detail = extract_detail(&body);
    debug!(status = status.as_u16(), ?detail, "Backend returned an error");

    match (status, cod) {
        (StatusCode::NOT_FOUND, Some(cod)) => Err(ApiError::NotFound { cod, detail }),
        _ => Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        }),
    }
}

/// Reads a JSON body, mapping both transport and shape problems.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = ApiClient::new(ApiConfig::new("http://localhost:8000")).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8000/");
        assert_eq!(
            client.endpoint("productos/3").unwrap().as_str(),
            "http://localhost:8000/productos/3"
        );
    }

    #[test]
    fn test_base_url_keeps_path_prefix() {
        let client = ApiClient::new(ApiConfig::new(" https://example.com/api ")).unwrap();
        assert_eq!(
            client.endpoint("productos").unwrap().as_str(),
            "https://example.com/api/productos"
        );
    }

    #[test]
    fn test_invalid_base_urls() {
        for raw in ["", "not a url", "ftp://example.com", "mailto:a@b.c"] {
            let result = ApiClient::new(ApiConfig::new(raw));
            assert!(
                matches!(result, Err(ApiError::InvalidUrl(_))),
                "expected InvalidUrl for {raw:?}"
            );
        }
    }

    #[test]
    fn test_config_builder() {
        let config = ApiConfig::new("http://x")
            .timeout(Duration::from_secs(3))
            .connect_timeout(Duration::from_secs(1));
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
        assert_eq!(ApiConfig::default().base_url, DEFAULT_BASE_URL);
    }
}
