//! Catalog provider fetching the published document over HTTP using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderValue, RETRY_AFTER};
use url::Url;

use crate::domain::{AppError, ComponentDescriptor, parse_catalog_document};
use crate::ports::CatalogProvider;

const DEFAULT_STATUS_MESSAGE: &str = "Catalog request failed";

/// HTTP transport for the component catalog.
///
/// This provider performs a single request per call. Retry behavior is implemented
/// by `RetryingCatalogProvider`.
#[derive(Debug, Clone)]
pub struct HttpCatalogProvider {
    url: Url,
    client: Client,
}

impl HttpCatalogProvider {
    /// Create a provider for `url` with the given request timeout.
    pub fn new(url: Url, timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("sdkc/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                AppError::catalog_unavailable(
                    url.as_str(),
                    format!("Failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self { url, client })
    }

    fn send_request(&self) -> Result<String, AppError> {
        let origin = self.url.as_str();
        let response = self
            .client
            .get(self.url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| {
                let transient = e.is_timeout() || e.is_connect();
                let kind = if e.is_timeout() {
                    "timed out"
                } else if e.is_connect() {
                    "connection failed"
                } else {
                    "failed"
                };
                AppError::CatalogUnavailable {
                    origin: origin.to_string(),
                    message: format!("HTTP request {}: {}", kind, e),
                    status: None,
                    transient,
                    retry_after: None,
                }
            })?;

        let status = response.status();
        let retry_after = response.headers().get(RETRY_AFTER).and_then(parse_retry_after);
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            return Ok(body_text);
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if status == StatusCode::TOO_MANY_REQUESTS {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::CatalogUnavailable {
            origin: origin.to_string(),
            message,
            status: Some(status.as_u16()),
            transient: is_transient_status(status),
            retry_after,
        })
    }
}

/// Statuses where the same request may succeed later.
fn is_transient_status(status: StatusCode) -> bool {
    status == StatusCode::REQUEST_TIMEOUT
        || status == StatusCode::TOO_MANY_REQUESTS
        || status.is_server_error()
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

/// `Retry-After` in delta-seconds form. HTTP dates are ignored.
fn parse_retry_after(value: &HeaderValue) -> Option<Duration> {
    value.to_str().ok()?.trim().parse::<u64>().ok().map(Duration::from_secs)
}

impl CatalogProvider for HttpCatalogProvider {
    fn fetch_catalog(&self) -> Result<Vec<ComponentDescriptor>, AppError> {
        let body = self.send_request()?;
        let document = parse_catalog_document(&body, self.url.as_str())?;
        tracing::debug!(
            url = %self.url,
            revision = document.revision.as_deref().unwrap_or("-"),
            components = document.components.len(),
            "fetched component catalog"
        );
        Ok(document.components)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
