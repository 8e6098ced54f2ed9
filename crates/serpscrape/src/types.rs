//! Core types for Serpscrape

use crate::error::ScrapeError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Request to scrape a URL
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ScrapeRequest {
    /// The URL to scrape content from
    pub url: String,

    /// Whether to include markdown formatting in the response (default true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_markdown: Option<bool>,
}

impl ScrapeRequest {
    /// Create a new request with the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set markdown formatting explicitly
    pub fn include_markdown(mut self, enable: bool) -> Self {
        self.include_markdown = Some(enable);
        self
    }

    /// Check if markdown formatting is requested (defaults to true)
    pub fn wants_markdown(&self) -> bool {
        self.include_markdown.unwrap_or(true)
    }
}

/// Wire body sent to the Serper scrape endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapePayload {
    /// Normalized URL to scrape
    pub url: String,
    /// Markdown formatting flag
    pub include_markdown: bool,
}

/// Successful scrape of a single page
#[derive(Debug, Clone)]
pub struct ScrapeSuccess {
    /// The normalized URL the content was scraped from
    pub source_url: String,
    /// Whether markdown formatting was requested
    pub markdown_enabled: bool,
    /// Content length in characters
    pub content_length: usize,
    /// The scraped content, verbatim
    pub content: String,
}

impl ScrapeSuccess {
    /// Build a success record from the extracted content
    pub fn new(source_url: String, markdown_enabled: bool, content: String) -> Self {
        Self {
            source_url,
            markdown_enabled,
            content_length: content.chars().count(),
            content,
        }
    }
}

/// Outcome of one scrape invocation
///
/// Exactly one variant is produced per call; both are rendered to a
/// single string at the tool boundary.
#[derive(Debug)]
pub enum ScrapeOutcome {
    /// The remote service returned extracted content
    Success(ScrapeSuccess),
    /// The call failed with a classified error
    Failure(ScrapeError),
}

impl ScrapeOutcome {
    /// True if the outcome is a success
    pub fn is_success(&self) -> bool {
        matches!(self, ScrapeOutcome::Success(_))
    }
}
