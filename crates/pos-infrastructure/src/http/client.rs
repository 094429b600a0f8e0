// ============================================================================
// POS Infrastructure - HTTP Client
// File: crates/pos-infrastructure/src/http/client.rs
// Description: Shared reqwest client with retry and error classification
// ============================================================================

use std::time::Duration;

use backon::{BackoffBuilder, ExponentialBuilder};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};

use pos_core::error::DomainError;
use pos_shared::config::{BackendSettings, RetrySettings};
use pos_shared::constants::IDEMPOTENCY_HEADER;

use super::dto::{Envelope, ErrorBody};

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    retry: RetrySettings,
}

impl HttpClient {
    pub fn new(settings: &BackendSettings) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| DomainError::InternalError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            retry: settings.retry.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, DomainError> {
        let url = self.url(path);
        let body = self.send_with_retry("GET", &url, || self.client.get(&url)).await?;
        decode(&body)
    }

    pub async fn post<B, T>(&self, path: &str, payload: &B, idempotency_key: Option<&str>) -> Result<T, DomainError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let body = self
            .send_with_retry("POST", &url, || {
                let request = self.client.post(&url).json(payload);
                match idempotency_key {
                    Some(key) => request.header(IDEMPOTENCY_HEADER, key),
                    None => request,
                }
            })
            .await?;
        decode(&body)
    }

    pub async fn put<B, T>(&self, path: &str, payload: &B) -> Result<T, DomainError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let body = self.send_with_retry("PUT", &url, || self.client.put(&url).json(payload)).await?;
        decode(&body)
    }

    /// Sends the request built by `build`, retrying transport failures with
    /// exponential backoff. Rejections (4xx) are returned on the first try.
    async fn send_with_retry<F>(&self, method: &str, url: &str, build: F) -> Result<String, DomainError>
    where
        F: Fn() -> RequestBuilder,
    {
        let backoff = ExponentialBuilder::default()
            .with_min_delay(self.retry.min_delay())
            .with_max_delay(self.retry.max_delay())
            .with_max_times(self.retry.max_times)
            .with_jitter()
            .build();

        let mut last_error = None;

        for (attempt, delay) in std::iter::once(Duration::ZERO).chain(backoff).enumerate() {
            if attempt > 0 {
                tokio::time::sleep(delay).await;
            }

            match execute(build()).await {
                Ok(body) => return Ok(body),
                Err(e) if e.is_retryable() => {
                    warn!(
                        attempt = attempt + 1,
                        max_retries = self.retry.max_times,
                        error = %e,
                        "{} {} failed, retrying...", method, url
                    );
                    last_error = Some(e);
                }
                Err(e) => {
                    debug!("{} {} rejected: {}", method, url, e);
                    return Err(e);
                }
            }
        }

        let e = last_error.unwrap_or_else(|| DomainError::Transport("retries exhausted".to_string()));
        error!("{} {} failed after retries: {}", method, url, e);
        Err(e)
    }
}

async fn execute(request: RequestBuilder) -> Result<String, DomainError> {
    let response = request.send().await.map_err(classify_send_error)?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| DomainError::Transport(format!("Failed to read response body: {}", e)))?;

    if status.is_success() {
        return Ok(body);
    }

    let message = ErrorBody::extract(&body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());

    if status.is_server_error() || status == StatusCode::REQUEST_TIMEOUT || status == StatusCode::TOO_MANY_REQUESTS {
        Err(DomainError::Transport(format!("{} {}", status.as_u16(), message)))
    } else {
        Err(DomainError::Rejected { status: status.as_u16(), message })
    }
}

fn classify_send_error(e: reqwest::Error) -> DomainError {
    if e.is_builder() {
        DomainError::InternalError(format!("Invalid request: {}", e))
    } else if e.is_timeout() {
        DomainError::Transport(format!("Request timed out: {}", e))
    } else {
        DomainError::Transport(format!("Failed to reach backend: {}", e))
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, DomainError> {
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    Ok(envelope.into_inner())
}
