//! Serpscrape - agent-friendly web scraping via the Serper API
//!
//! This crate provides a callable tool that fetches the textual/markdown
//! content of a web page by delegating the scraping work to the Serper
//! scrape endpoint. The tool always returns a single descriptive string:
//! either a formatted summary of the scraped content or a classified
//! error message.

mod client;
mod error;
mod format;
mod tool;
mod types;

pub use client::{normalize_url, scrape_with_options, ScrapeOptions, DEFAULT_TIMEOUT};
pub use error::{FailureKind, ScrapeError};
pub use format::{render_outcome, render_success};
pub use tool::{LegacyScrapeTool, Tool, ToolBuilder};
pub use types::{ScrapeOutcome, ScrapePayload, ScrapeRequest, ScrapeSuccess};

/// Remote scraping endpoint
pub const SERPER_ENDPOINT: &str = "https://scrape.serper.dev";

/// Header carrying the API credential
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Environment variable holding the API credential
pub const SERPER_API_KEY_VAR: &str = "SERPER_API_KEY";

/// Tool description for LLM consumption
pub const TOOL_DESCRIPTION: &str = "Scrapes web content from any URL using the Serper API. \
Extracts clean, readable content with optional markdown formatting. \
Use this tool when you need to get the full content of a webpage for analysis.";

/// Extended documentation for LLM consumption (llmtxt)
pub const TOOL_LLMTXT: &str = r#"# Serper Web Scraper Tool

Scrapes web content from any URL using the Serper API and returns the
extracted content as a single string.

## Capabilities
- Fetches the full textual content of a web page
- Optional markdown formatting of the extracted content
- Scheme-less URLs are normalized with https://
- All failures are returned as readable error strings, never raised

## Input Parameters
- `url` (required): The URL to scrape content from
- `include_markdown` (optional): Whether to include markdown formatting
  in the response (default: true)

## Output
A single string. On success:

```
**Scraped from:** <url>
**Markdown formatting:** Enabled|Disabled
**Content length:** <n> characters

**Content:**
<content>
```

On failure, a one-line classified error message (missing credential,
network error, JSON parsing error, empty result, or unexpected error).

## Examples

### Scrape a webpage with markdown
```json
{"url": "https://example.com", "include_markdown": true}
```

### Scrape without markdown formatting
```json
{"url": "example.com", "include_markdown": false}
```

## Requirements
The SERPER_API_KEY credential must be configured; without it the tool
returns an error string and sends no request.
"#;
