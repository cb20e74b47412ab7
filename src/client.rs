//! Plans API client
//!
//! Thin HTTP client over the plans backend. Every operation is exactly one
//! request/response exchange: no retries, no timeouts, no caching. Failures
//! (transport, non-success status, undecodable body) are returned to the
//! caller as-is.

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::types::{
    AddedLog, Focus, Health, LogEntry, LogRow, Payload, PlanId, WeekRequest, WorkoutRequest,
};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, warn};

/// Base URL used when the configured value is empty.
pub const FALLBACK_API_BASE: &str = "http://127.0.0.1:8000";

/// Operations offered by the plans backend.
#[async_trait]
pub trait PlansApi: Send + Sync {
    /// Base URL every operation resolves against
    fn base_url(&self) -> &str;

    /// `GET /plans`
    async fn list_plans(&self) -> Result<Payload, ApiError>;

    /// `GET /plans/{id}`
    async fn get_plan(&self, id: &PlanId) -> Result<Payload, ApiError>;

    /// `POST /plans/generate` with the payload forwarded unchanged
    async fn generate_plan(&self, payload: &Payload) -> Result<Payload, ApiError>;

    /// `POST /plans/workout`
    async fn generate_workout(&self, request: &WorkoutRequest) -> Result<Payload, ApiError>;

    /// `POST /plans/week`
    async fn generate_week(&self, request: &WeekRequest) -> Result<Payload, ApiError>;

    /// `POST /logs/`
    async fn add_log(&self, entry: &LogEntry) -> Result<LogRow, ApiError>;

    /// `GET /logs/`, optionally filtered by focus
    async fn list_logs(&self, focus: Option<Focus>) -> Result<Vec<LogRow>, ApiError>;

    /// `GET /health`
    async fn health(&self) -> Result<Health, ApiError>;
}

/// Resolve a configured base URL into the form used for joining paths.
///
/// Empty values fall back to [`FALLBACK_API_BASE`]. The value must be an
/// absolute http(s) URL; a trailing `/` is dropped so joined paths never
/// contain `//`. Any path prefix is kept.
pub fn resolve_base_url(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim();
    let candidate = if trimmed.is_empty() {
        FALLBACK_API_BASE
    } else {
        trimmed
    };

    let parsed = Url::parse(candidate)
        .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", candidate, e)))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ApiError::InvalidBaseUrl(format!(
            "{}: scheme must be http or https",
            candidate
        )));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ApiError::InvalidBaseUrl(format!(
            "{}: must not carry a query or fragment",
            candidate
        )));
    }

    Ok(candidate.trim_end_matches('/').to_string())
}

fn build_http_client() -> Result<Client, ApiError> {
    Client::builder()
        .no_proxy()
        .build()
        .map_err(|e| ApiError::ConfigError(format!("Failed to create HTTP client: {}", e)))
}

/// HTTP implementation of [`PlansApi`].
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PlansClient {
    client: Client,
    base_url: String,
}

impl PlansClient {
    /// Create a client from explicit configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::with_base_url(&config.api_base)
    }

    /// Create a client targeting `base_url`.
    pub fn with_base_url(base_url: &str) -> Result<Self, ApiError> {
        let base_url = resolve_base_url(base_url)?;
        let client = build_http_client()?;
        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let request = self.client.get(&url);
        self.send(Method::GET, url, request).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let request = self.client.post(&url).json(body);
        self.send(Method::POST, url, request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: String,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let started = Instant::now();
        debug!(%method, %url, "Sending request");

        let response = match request.send().await {
            Ok(response) => response,
            Err(source) => {
                warn!(%method, %url, error = %source, "Request failed");
                return Err(ApiError::Transport {
                    method,
                    url,
                    source,
                });
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(source) => {
                warn!(%method, %url, error = %source, "Reading response body failed");
                return Err(ApiError::Transport {
                    method,
                    url,
                    source,
                });
            }
        };

        debug!(
            %method,
            %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Received response"
        );

        if !status.is_success() {
            warn!(%method, %url, status = status.as_u16(), "Request returned error status");
            return Err(ApiError::Status {
                method,
                url,
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        decode_body(&url, &body)
    }
}

/// Decode a success body from its raw bytes. An empty body decodes as JSON `null`.
fn decode_body<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T, ApiError> {
    let decoded = if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_value(serde_json::Value::Null)
    } else {
        serde_json::from_slice(body)
    };
    decoded.map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

#[async_trait]
impl PlansApi for PlansClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list_plans(&self) -> Result<Payload, ApiError> {
        self.get_json("/plans").await
    }

    async fn get_plan(&self, id: &PlanId) -> Result<Payload, ApiError> {
        self.get_json(&format!("/plans/{}", id)).await
    }

    async fn generate_plan(&self, payload: &Payload) -> Result<Payload, ApiError> {
        self.post_json("/plans/generate", payload).await
    }

    async fn generate_workout(&self, request: &WorkoutRequest) -> Result<Payload, ApiError> {
        self.post_json("/plans/workout", request).await
    }

    async fn generate_week(&self, request: &WeekRequest) -> Result<Payload, ApiError> {
        self.post_json("/plans/week", request).await
    }

    async fn add_log(&self, entry: &LogEntry) -> Result<LogRow, ApiError> {
        let added: AddedLog = self.post_json("/logs/", entry).await?;
        Ok(added.added)
    }

    async fn list_logs(&self, focus: Option<Focus>) -> Result<Vec<LogRow>, ApiError> {
        let url = self.url("/logs/");
        let mut request = self.client.get(&url);
        if let Some(focus) = focus {
            request = request.query(&[("focus", focus.as_str())]);
        }
        self.send(Method::GET, url, request).await
    }

    async fn health(&self) -> Result<Health, ApiError> {
        self.get_json("/health").await
    }
}
