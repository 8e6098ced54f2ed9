//! HTTP client for the Serper scrape endpoint

use crate::error::ScrapeError;
use crate::types::{ScrapePayload, ScrapeRequest, ScrapeSuccess};
use crate::{API_KEY_HEADER, SERPER_ENDPOINT};
use std::time::Duration;
use tracing::{debug, warn};

/// Default timeout for the outbound request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Options for one scrape call
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// API credential; absence yields a missing-credential failure
    pub api_key: Option<String>,
    /// Endpoint override, mainly for tests
    pub endpoint: Option<String>,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Apply the default secure scheme if the URL carries none
///
/// Idempotent: a URL already starting with `http://` or `https://` is
/// returned unchanged.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Perform one scrape call against the remote service
///
/// The credential is checked before anything else; no request is sent
/// when it is absent. Exactly one outbound POST is issued per call.
pub async fn scrape_with_options(
    req: ScrapeRequest,
    options: ScrapeOptions,
) -> Result<ScrapeSuccess, ScrapeError> {
    let api_key = options
        .api_key
        .as_deref()
        .filter(|k| !k.is_empty())
        .ok_or(ScrapeError::MissingCredential)?;

    let url = normalize_url(&req.url);
    let payload = ScrapePayload {
        url: url.clone(),
        include_markdown: req.wants_markdown(),
    };
    let endpoint = options.endpoint.as_deref().unwrap_or(SERPER_ENDPOINT);

    debug!(%url, endpoint, "sending scrape request");

    let client = reqwest::Client::builder()
        .timeout(options.timeout)
        .build()
        .map_err(|e| ScrapeError::Unexpected {
            url: url.clone(),
            detail: e.to_string(),
        })?;

    let response = client
        .post(endpoint)
        .header(API_KEY_HEADER, api_key)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .json(&payload)
        .send()
        .await
        .map_err(|e| ScrapeError::Network {
            url: url.clone(),
            detail: e.to_string(),
        })?;

    // Non-2xx statuses are classified as network failures, not parsed
    let response = response
        .error_for_status()
        .map_err(|e| ScrapeError::Network {
            url: url.clone(),
            detail: e.to_string(),
        })?;

    let body = response.text().await.map_err(|e| ScrapeError::Network {
        url: url.clone(),
        detail: e.to_string(),
    })?;

    let data: serde_json::Value =
        serde_json::from_str(&body).map_err(|e| ScrapeError::MalformedResponse {
            detail: e.to_string(),
        })?;

    match data.get("text").and_then(|t| t.as_str()) {
        Some(content) => Ok(ScrapeSuccess::new(
            url,
            payload.include_markdown,
            content.to_string(),
        )),
        None => {
            warn!(%url, "response carried no text field");
            Err(ScrapeError::EmptyResult { url, raw: data })
        }
    }
}
