//! Low-level HTTP transport — `DocuSignHttp`.
//!
//! One authenticated client against the environment-selected base URL, with
//! every resource path scoped under the account prefix. Returns raw
//! `serde_json::Value` vendor payloads (shaping to and from domain types
//! happens in the sub-clients). Internal to the SDK — the high-level client
//! wraps this.

use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};

use async_lock::RwLock;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Low-level HTTP client for the DocuSign REST API.
pub struct DocuSignHttp {
    /// `{base_url}/accounts/{account_id}` — every resource path appends here.
    account_base: String,
    client: Client,
    /// OAuth access token. NEVER exposed publicly.
    access_token: Arc<RwLock<Option<String>>>,
}

impl DocuSignHttp {
    pub fn new(base_url: &str, account_id: &str, access_token: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            account_base: format!("{}/accounts/{}", base_url.trim_end_matches('/'), account_id),
            client,
            access_token: Arc::new(RwLock::new(access_token)),
        }
    }

    /// The account-scoped URL prefix requests are issued against.
    pub fn account_base(&self) -> &str {
        &self.account_base
    }

    /// Set the OAuth access token used for subsequent requests.
    pub(crate) async fn set_access_token(&self, token: Option<String>) {
        *self.access_token.write().await = token;
    }

    pub(crate) async fn clear_access_token(&self) {
        *self.access_token.write().await = None;
    }

    /// Join the account prefix, resource path, and query string. `path` may
    /// already carry a query (`?resend_envelope=true`); extra parameters are
    /// appended with `&` in that case.
    pub(crate) fn build_url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.account_base, path);
        if !query.is_empty() {
            let qs = query
                .iter()
                .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            let sep = if path.contains('?') { '&' } else { '?' };
            url = format!("{url}{sep}{qs}");
        }
        url
    }

    // ── Verb wrappers ────────────────────────────────────────────────────

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, HttpError> {
        let url = self.build_url(path, query);
        self.request_with_retry(reqwest::Method::GET, &url, None::<&()>, None, RetryPolicy::Idempotent)
            .await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        let url = self.build_url(path, &[]);
        self.request_with_retry(reqwest::Method::POST, &url, Some(body), None, RetryPolicy::None)
            .await
    }

    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        let url = self.build_url(path, &[]);
        self.request_with_retry(reqwest::Method::PUT, &url, Some(body), None, RetryPolicy::None)
            .await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let url = self.build_url(path, &[]);
        self.request_with_retry(reqwest::Method::DELETE, &url, None::<&()>, None, RetryPolicy::None)
            .await
    }

    /// PUT carrying an envelope-lock token in the `X-DocuSign-Edit` header.
    pub(crate) async fn put_json_locked<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        lock_token: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        let url = self.build_url(path, &[]);
        self.request_with_retry(
            reqwest::Method::PUT,
            &url,
            Some(body),
            Some(lock_token),
            RetryPolicy::None,
        )
        .await
    }

    /// DELETE carrying an envelope-lock token in the `X-DocuSign-Edit` header.
    pub(crate) async fn delete_json_locked<T: DeserializeOwned>(
        &self,
        path: &str,
        lock_token: &str,
    ) -> Result<T, HttpError> {
        let url = self.build_url(path, &[]);
        self.request_with_retry(
            reqwest::Method::DELETE,
            &url,
            None::<&()>,
            Some(lock_token),
            RetryPolicy::None,
        )
        .await
    }

    /// GET a binary payload (document download). Returns the raw bytes and
    /// the response `Content-Type`, not JSON.
    pub(crate) async fn get_bytes(
        &self,
        path: &str,
    ) -> Result<(Vec<u8>, Option<String>), HttpError> {
        let url = self.build_url(path, &[]);
        let mut req = self.client.get(&url);
        if let Some(token) = self.access_token.read().await.as_ref() {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Self::status_error(status.as_u16(), body, None));
        }

        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let bytes = resp.bytes().await?;
        Ok((bytes.to_vec(), content_type))
    }

    // ── Core request path ────────────────────────────────────────────────

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        lock_token: Option<&str>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match retry {
            RetryPolicy::None => {
                return self.do_request(&method, url, body, lock_token).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c,
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T, B>(&method, url, body, lock_token).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::Api { status, .. } => config.retryable_statuses.contains(status),
                        HttpError::RateLimited { retry_after_secs } => {
                            if let Some(secs) = retry_after_secs {
                                futures_timer::Delay::new(Duration::from_secs(*secs)).await;
                            }
                            config.retryable_statuses.contains(&429)
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
        lock_token: Option<&str>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method.clone(), url);

        if let Some(token) = self.access_token.read().await.as_ref() {
            req = req.bearer_auth(token);
        }
        if let Some(token) = lock_token {
            req = req.header("X-DocuSign-Edit", format!("{{\"lockToken\":\"{token}\"}}"));
        }
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            // DELETE endpoints respond with an empty body on success.
            let text = resp.text().await?;
            let parsed = if text.trim().is_empty() {
                serde_json::from_str::<T>("null")
            } else {
                serde_json::from_str::<T>(&text)
            };
            return parsed.map_err(|e| HttpError::Api {
                status: status.as_u16(),
                body: format!("unparseable response body: {e}"),
            });
        }

        let retry_after = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());
        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        Err(Self::status_error(status_code, body_text, retry_after))
    }

    fn status_error(status: u16, body: String, retry_after_secs: Option<u64>) -> HttpError {
        match status {
            401 => HttpError::Unauthorized(body),
            404 => HttpError::NotFound(body),
            408 => HttpError::Timeout,
            429 => HttpError::RateLimited { retry_after_secs },
            400..=499 => HttpError::BadRequest(body),
            _ => HttpError::Api { status, body },
        }
    }
}

impl Clone for DocuSignHttp {
    fn clone(&self) -> Self {
        Self {
            account_base: self.account_base.clone(),
            client: self.client.clone(),
            access_token: self.access_token.clone(),
        }
    }
}
