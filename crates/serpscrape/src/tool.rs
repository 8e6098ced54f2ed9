//! Tool builder and contract for the Serper web scraper

use crate::client::{scrape_with_options, ScrapeOptions, DEFAULT_TIMEOUT};
use crate::types::{ScrapeOutcome, ScrapeRequest};
use crate::{SERPER_API_KEY_VAR, TOOL_DESCRIPTION, TOOL_LLMTXT};
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Builder for configuring the scrape tool
#[derive(Debug, Clone)]
pub struct ToolBuilder {
    api_key: Option<String>,
    endpoint: Option<String>,
    timeout: Duration,
}

impl Default for ToolBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ToolBuilder {
    /// Create a new tool builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API credential
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the remote endpoint
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the tool
    pub fn build(self) -> Tool {
        Tool {
            api_key: self.api_key,
            endpoint: self.endpoint,
            timeout: self.timeout,
        }
    }
}

/// Configured Serper web scraper tool
#[derive(Debug, Clone)]
pub struct Tool {
    api_key: Option<String>,
    endpoint: Option<String>,
    timeout: Duration,
}

impl Default for Tool {
    fn default() -> Self {
        ToolBuilder::new().build()
    }
}

impl Tool {
    /// Create a new tool builder
    pub fn builder() -> ToolBuilder {
        ToolBuilder::new()
    }

    /// Build a tool with the credential taken from `SERPER_API_KEY`
    pub fn from_env() -> Self {
        let mut builder = Tool::builder();
        if let Ok(key) = std::env::var(SERPER_API_KEY_VAR) {
            builder = builder.api_key(key);
        }
        builder.build()
    }

    /// Tool name for discovery by an orchestrator
    pub fn name(&self) -> &'static str {
        "serper_web_scraper"
    }

    /// Get tool description
    pub fn description(&self) -> &'static str {
        TOOL_DESCRIPTION
    }

    /// Get full documentation (llmtxt)
    pub fn llmtxt(&self) -> &'static str {
        TOOL_LLMTXT
    }

    /// Get input schema as JSON
    pub fn input_schema(&self) -> serde_json::Value {
        let schema = schema_for!(ScrapeRequest);
        serde_json::to_value(schema).unwrap_or_default()
    }

    fn options(&self) -> ScrapeOptions {
        ScrapeOptions {
            api_key: self.api_key.clone(),
            endpoint: self.endpoint.clone(),
            timeout: self.timeout,
        }
    }

    /// Execute the tool with the given request, as a structured outcome
    pub async fn execute(&self, req: ScrapeRequest) -> ScrapeOutcome {
        match scrape_with_options(req, self.options()).await {
            Ok(success) => ScrapeOutcome::Success(success),
            Err(err) => ScrapeOutcome::Failure(err),
        }
    }

    /// Scrape a URL and return a single descriptive string
    ///
    /// Total: every failure is rendered into the returned string, so
    /// this never yields an error to the caller.
    pub async fn scrape(&self, url: impl Into<String>, include_markdown: bool) -> String {
        let req = ScrapeRequest::new(url).include_markdown(include_markdown);
        crate::format::render_outcome(&self.execute(req).await)
    }
}

/// Input schema for the retired scraper tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LegacyScrapeInput {
    /// Free-text argument; ignored
    pub input: String,
}

/// Fixed reply of the retired scraper tool
const LEGACY_REDIRECT: &str = "This tool has been retired and no longer scrapes pages. \
Use the serper_web_scraper tool to fetch web page content instead.";

/// Retired placeholder tool kept so old tool names still resolve
///
/// Performs no I/O and has no failure modes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyScrapeTool;

impl LegacyScrapeTool {
    /// Tool name for discovery by an orchestrator
    pub fn name(&self) -> &'static str {
        "web_scraper"
    }

    /// Get tool description
    pub fn description(&self) -> &'static str {
        "Retired web scraper. Always directs the caller to serper_web_scraper."
    }

    /// Get input schema as JSON
    pub fn input_schema(&self) -> serde_json::Value {
        let schema = schema_for!(LegacyScrapeInput);
        serde_json::to_value(schema).unwrap_or_default()
    }

    /// Return the fixed redirect string for any input
    pub fn run(&self, _input: &str) -> &'static str {
        LEGACY_REDIRECT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_builder() {
        let tool = Tool::builder()
            .api_key("test-key")
            .endpoint("http://127.0.0.1:8080")
            .timeout(Duration::from_secs(5))
            .build();

        assert_eq!(tool.api_key, Some("test-key".to_string()));
        assert_eq!(tool.endpoint, Some("http://127.0.0.1:8080".to_string()));
        assert_eq!(tool.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_tool_contract() {
        let tool = Tool::default();
        assert_eq!(tool.name(), "serper_web_scraper");
        assert!(!tool.description().is_empty());
        assert!(!tool.llmtxt().is_empty());
    }

    #[test]
    fn test_input_schema_shape() {
        let tool = Tool::default();
        let schema = tool.input_schema();

        assert!(schema["properties"]["url"].is_object());
        assert!(schema["properties"]["include_markdown"].is_object());
        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "url"));
        assert!(!required.iter().any(|v| v == "include_markdown"));
    }

    #[tokio::test]
    async fn test_scrape_without_credential_is_total() {
        let tool = Tool::builder().build();
        let out = tool.scrape("example.com", true).await;
        assert_eq!(
            out,
            "Error: SERPER_API_KEY not found in environment variables. Please add it to your .env file."
        );
    }

    #[test]
    fn test_from_env_picks_up_credential() {
        std::env::set_var(SERPER_API_KEY_VAR, "env-key");
        let tool = Tool::from_env();
        assert_eq!(tool.api_key, Some("env-key".to_string()));
        std::env::remove_var(SERPER_API_KEY_VAR);
    }

    #[test]
    fn test_legacy_tool_is_fixed() {
        let tool = LegacyScrapeTool;
        let first = tool.run("scrape https://example.com");
        let second = tool.run("");
        assert_eq!(first, second);
        assert!(first.contains("serper_web_scraper"));
    }

    #[test]
    fn test_legacy_schema_has_input_field() {
        let schema = LegacyScrapeTool.input_schema();
        assert!(schema["properties"]["input"].is_object());
    }
}
