//! Boundary rendering of scrape outcomes

use crate::types::{ScrapeOutcome, ScrapeSuccess};

/// Render an outcome to the single string the caller receives
pub fn render_outcome(outcome: &ScrapeOutcome) -> String {
    match outcome {
        ScrapeOutcome::Success(success) => render_success(success),
        ScrapeOutcome::Failure(err) => err.to_string(),
    }
}

/// Render the success summary: four labeled lines, a blank line, then
/// the content verbatim
pub fn render_success(success: &ScrapeSuccess) -> String {
    format!(
        "**Scraped from:** {}\n\
         **Markdown formatting:** {}\n\
         **Content length:** {} characters\n\n\
         **Content:**\n{}",
        success.source_url,
        if success.markdown_enabled {
            "Enabled"
        } else {
            "Disabled"
        },
        success.content_length,
        success.content
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;

    #[test]
    fn test_render_success_layout() {
        let success = ScrapeSuccess::new(
            "https://example.com".to_string(),
            true,
            "Hello World".to_string(),
        );
        let out = render_success(&success);

        assert_eq!(
            out,
            "**Scraped from:** https://example.com\n\
             **Markdown formatting:** Enabled\n\
             **Content length:** 11 characters\n\n\
             **Content:**\nHello World"
        );
    }

    #[test]
    fn test_render_success_markdown_disabled() {
        let success =
            ScrapeSuccess::new("https://example.com".to_string(), false, "x".to_string());
        let out = render_success(&success);
        assert!(out.contains("**Markdown formatting:** Disabled"));
    }

    #[test]
    fn test_content_is_verbatim() {
        let content = "line one\n\n\n   spaced\tand raw";
        let success = ScrapeSuccess::new(
            "https://example.com".to_string(),
            true,
            content.to_string(),
        );
        let out = render_success(&success);
        assert!(out.ends_with(&format!("**Content:**\n{content}")));
    }

    #[test]
    fn test_render_outcome_failure_uses_error_display() {
        let outcome = ScrapeOutcome::Failure(ScrapeError::MissingCredential);
        assert!(render_outcome(&outcome).contains("SERPER_API_KEY not found"));
    }
}
