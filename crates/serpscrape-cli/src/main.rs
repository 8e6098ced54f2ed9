//! Serpscrape CLI - scrape a web page via the Serper API

use clap::Parser;
use serpscrape::{Tool, TOOL_LLMTXT};
use std::io::{self, Write};
use std::time::Duration;

/// Serpscrape - scrape web page content through the Serper API
#[derive(Parser, Debug)]
#[command(name = "serpscrape")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URL to scrape; https:// is assumed when no scheme is given
    #[arg(required_unless_present = "llmtxt")]
    url: Option<String>,

    /// Disable markdown formatting in the scraped content
    #[arg(long)]
    no_markdown: bool,

    /// API key; defaults to the SERPER_API_KEY environment variable
    #[arg(long)]
    api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Print full help with examples (llmtxt)
    #[arg(long)]
    llmtxt: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.llmtxt {
        writeln_safe(TOOL_LLMTXT);
        return;
    }

    let url = cli.url.unwrap_or_default();

    let mut builder = Tool::builder().timeout(Duration::from_secs(cli.timeout));
    if let Some(key) = cli.api_key {
        builder = builder.api_key(key);
    } else if let Ok(key) = std::env::var(serpscrape::SERPER_API_KEY_VAR) {
        builder = builder.api_key(key);
    }
    let tool = builder.build();

    // The tool is total: failures come back as a readable string
    let out = tool.scrape(url, !cli.no_markdown).await;
    writeln_safe(&out);
}

/// Write to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from(["serpscrape", "example.com", "--no-markdown"]);
        assert_eq!(cli.url.as_deref(), Some("example.com"));
        assert!(cli.no_markdown);
        assert_eq!(cli.timeout, 30);
    }

    #[test]
    fn test_cli_llmtxt_without_url() {
        let cli = Cli::parse_from(["serpscrape", "--llmtxt"]);
        assert!(cli.llmtxt);
        assert!(cli.url.is_none());
    }
}
