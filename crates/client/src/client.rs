//! Shopify REST Admin API client.
//!
//! Provides the reqwest-backed [`Transport`] used by the resource services.

use std::sync::Arc;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error, instrument, warn};
use url::Url;

use crate::carts::CartServiceOp;
use crate::config::ShopifyConfig;
use crate::error::ShopifyError;
use crate::transport::Transport;

/// Header carrying the Admin API access token.
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Shopify REST Admin API client.
///
/// Cheap to clone; clones share one connection pool. Safe to use from many
/// tasks at once.
///
/// # Security
///
/// The access token has HIGH PRIVILEGE access to the store. It is sent only
/// as a sensitive default header and never appears in `Debug` output.
#[derive(Clone)]
pub struct RestClient {
    inner: Arc<RestClientInner>,
}

struct RestClientInner {
    client: reqwest::Client,
    /// API root, always ending in `/` so relative paths join beneath it.
    base_url: Url,
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("access_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl RestClient {
    /// Create a client for `https://{store}/admin/api/{api_version}/`.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is invalid or the HTTP client fails to build.
    pub fn new(config: &ShopifyConfig) -> Result<Self, ShopifyError> {
        let base_url = Url::parse(&format!(
            "https://{}/admin/api/{}/",
            config.store, config.api_version
        ))?;
        Self::with_base_url(config, base_url)
    }

    /// Create a client against an explicit API root (proxies, mock servers).
    ///
    /// A trailing `/` is added to `base_url` if missing.
    ///
    /// # Errors
    ///
    /// Returns error if the access token is not a valid header value or the
    /// HTTP client fails to build.
    pub fn with_base_url(config: &ShopifyConfig, mut base_url: Url) -> Result<Self, ShopifyError> {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut headers = HeaderMap::new();

        let mut token = HeaderValue::from_str(config.access_token.expose_secret())
            .map_err(|_| ShopifyError::Build("access token is not a valid header value".into()))?;
        token.set_sensitive(true);
        headers.insert(ACCESS_TOKEN_HEADER, token);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(RestClientInner { client, base_url }),
        })
    }

    /// Get the API root all resource paths are joined onto.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Access the carts resource.
    #[must_use]
    pub const fn carts(&self) -> CartServiceOp<'_, Self> {
        CartServiceOp::new(self)
    }

    /// Resolve a resource path against the API root.
    fn url(&self, path: &str) -> Result<Url, ShopifyError> {
        Ok(self.inner.base_url.join(path)?)
    }

    /// Send a request and return the body of a successful response.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, ShopifyError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %body, "Shopify returned error status");
            return Err(ShopifyError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "Shopify request succeeded");
        Ok(response.text().await?)
    }
}

/// Decode a JSON response body into the expected envelope.
fn decode<R: DeserializeOwned>(body: &str) -> Result<R, ShopifyError> {
    serde_json::from_str(body).map_err(|e| {
        error!(error = %e, "Failed to decode Shopify response");
        ShopifyError::Decode(e)
    })
}

impl Transport for RestClient {
    #[instrument(skip(self, query))]
    async fn get<R, Q>(&self, path: &str, query: Option<&Q>) -> Result<R, ShopifyError>
    where
        R: DeserializeOwned,
        Q: Serialize + Sync + ?Sized,
    {
        let mut request = self.inner.client.get(self.url(path)?);
        if let Some(query) = query {
            request = request.query(query);
        }

        let body = self.send(request).await?;
        decode(&body)
    }

    #[instrument(skip(self, body))]
    async fn post<R, B>(&self, path: &str, body: &B) -> Result<R, ShopifyError>
    where
        R: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let request = self.inner.client.post(self.url(path)?).json(body);
        let body = self.send(request).await?;
        decode(&body)
    }

    #[instrument(skip(self, body))]
    async fn put<R, B>(&self, path: &str, body: &B) -> Result<R, ShopifyError>
    where
        R: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let request = self.inner.client.put(self.url(path)?).json(body);
        let body = self.send(request).await?;
        decode(&body)
    }

    #[instrument(skip(self))]
    async fn delete(&self, path: &str) -> Result<(), ShopifyError> {
        let request = self.inner.client.delete(self.url(path)?);
        self.send(request).await?;
        Ok(())
    }
}
