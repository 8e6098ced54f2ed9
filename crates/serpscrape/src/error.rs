//! Error types for Serpscrape

use thiserror::Error;

/// Failure category for telemetry and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Credential absent, no request sent
    MissingCredential,
    /// Transport, connection, or HTTP-status failure
    Network,
    /// Response body is not valid JSON
    MalformedResponse,
    /// Response parsed but lacks the content field
    EmptyResult,
    /// Any other failure during processing
    Unexpected,
}

/// Classified failures of a scrape invocation
///
/// The `Display` rendering of each variant is the exact message the
/// caller receives; none of these propagate past the tool boundary as
/// errors.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// API credential absent at call time
    #[error("Error: SERPER_API_KEY not found in environment variables. Please add it to your .env file.")]
    MissingCredential,

    /// Request could not complete or returned a non-2xx status
    #[error("Network error while scraping {url}: {detail}")]
    Network { url: String, detail: String },

    /// Response body was not valid JSON
    #[error("JSON parsing error from Serper API: {detail}")]
    MalformedResponse { detail: String },

    /// Response parsed but carried no `text` field
    #[error("No content found for URL: {url}. Response: {raw}")]
    EmptyResult { url: String, raw: serde_json::Value },

    /// Catch-all for anything else
    #[error("Unexpected error while scraping {url}: {detail}")]
    Unexpected { url: String, detail: String },
}

impl ScrapeError {
    /// Failure category of this error
    pub fn kind(&self) -> FailureKind {
        match self {
            ScrapeError::MissingCredential => FailureKind::MissingCredential,
            ScrapeError::Network { .. } => FailureKind::Network,
            ScrapeError::MalformedResponse { .. } => FailureKind::MalformedResponse,
            ScrapeError::EmptyResult { .. } => FailureKind::EmptyResult,
            ScrapeError::Unexpected { .. } => FailureKind::Unexpected,
        }
    }
}
