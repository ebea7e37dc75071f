use std::time::Duration;

use log::{debug, info, warn};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Default whole-request timeout for the HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors surfaced by [`ApiClient`] requests.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// JSON-over-HTTP client for the user service.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    /// Create a new API client with the default timeout
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> ApiResult<Self> {
        let base_url = normalize_base_url(base_url.into());
        let client = Client::builder().timeout(timeout).build()?;

        info!(
            "[ApiClient] Creating new API client with base URL: {}",
            base_url
        );

        Ok(Self { client, base_url })
    }

    /// Build an absolute URL for an API path
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let p = path.as_ref();
        if p.starts_with("http://") || p.starts_with("https://") {
            return p.to_string();
        }
        format!("{}/{}", self.base_url, p.trim_start_matches('/'))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a JSON document
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        let url = self.build_url(path);
        debug!("GET {}", url);
        self.execute_json(self.client.get(&url)).await
    }

    /// POST a JSON body and decode the JSON response
    pub async fn post<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> ApiResult<R> {
        let url = self.build_url(path);
        debug!("POST {}", url);
        self.execute_json(self.client.post(&url).json(body)).await
    }

    /// PUT a JSON body; the response body is discarded
    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> ApiResult<()> {
        let url = self.build_url(path);
        debug!("PUT {}", url);
        self.execute_discard(self.client.put(&url).json(body)).await
    }

    /// DELETE a resource; the response body is discarded
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let url = self.build_url(path);
        debug!("DELETE {}", url);
        self.execute_discard(self.client.delete(&url)).await
    }

    async fn execute_json<R: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ApiResult<R> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, response).await);
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn execute_discard(&self, request: RequestBuilder) -> ApiResult<()> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, response).await);
        }
        Ok(())
    }
}

async fn status_error(status: StatusCode, response: reqwest::Response) -> ApiError {
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    ApiError::Status { status, body }
}

/// Normalize a user-supplied base URL.
///
/// Adds `http://` when no scheme is present and trims trailing slashes so
/// joined paths never contain `//`.
pub fn normalize_base_url(raw: String) -> String {
    let trimmed = raw.trim().trim_end_matches('/').to_string();
    let with_scheme =
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed
        } else {
            format!("http://{}", trimmed)
        };
    if with_scheme != raw {
        warn!(
            "[ApiClient] Normalized base URL from '{}' to '{}'",
            raw, with_scheme
        );
    }
    with_scheme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_adds_scheme_and_trims_slash() {
        assert_eq!(
            normalize_base_url("localhost:3000/".to_string()),
            "http://localhost:3000"
        );
        assert_eq!(
            normalize_base_url("https://api.example.com".to_string()),
            "https://api.example.com"
        );
    }

    #[test]
    fn build_url_joins_paths_once() {
        let client = ApiClient::new("https://api.example.com/").unwrap();
        assert_eq!(client.build_url("/users"), "https://api.example.com/users");
        assert_eq!(client.build_url("users/3"), "https://api.example.com/users/3");
        assert_eq!(
            client.build_url("http://other.host/users"),
            "http://other.host/users"
        );
    }
}
