//! Command-line interface definitions for Headline Sentiment.
//!
//! The article URL is fixed; the options here only tune how the page is
//! fetched and how much is logged. Every option can also come from an
//! environment variable.

use clap::Parser;

/// Command-line arguments for the Headline Sentiment application.
///
/// # Examples
///
/// ```sh
/// # Defaults: 30s timeout, built-in user agent
/// headline_sentiment
///
/// # Shorter timeout and a config file
/// headline_sentiment --timeout-secs 10 --config ./headline_sentiment.yaml
///
/// # Verbose logging (logs go to stderr)
/// headline_sentiment --log-level debug
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long, env = "HEADLINE_SENTIMENT_CONFIG")]
    pub config: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(short, long, env = "HEADLINE_SENTIMENT_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with the request (overrides the config file)
    #[arg(short, long, env = "HEADLINE_SENTIMENT_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["headline_sentiment"]);

        assert!(cli.config.is_none());
        assert!(cli.timeout_secs.is_none());
        assert!(cli.user_agent.is_none());
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_cli_long_flags() {
        let cli = Cli::parse_from([
            "headline_sentiment",
            "--config",
            "./conf.yaml",
            "--timeout-secs",
            "5",
            "--user-agent",
            "probe/1.0",
            "--log-level",
            "debug",
        ]);

        assert_eq!(cli.config.as_deref(), Some("./conf.yaml"));
        assert_eq!(cli.timeout_secs, Some(5));
        assert_eq!(cli.user_agent.as_deref(), Some("probe/1.0"));
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["headline_sentiment", "-c", "/tmp/c.yaml", "-t", "12"]);

        assert_eq!(cli.config.as_deref(), Some("/tmp/c.yaml"));
        assert_eq!(cli.timeout_secs, Some(12));
    }

    #[test]
    fn test_cli_rejects_non_numeric_timeout() {
        let result = Cli::try_parse_from(["headline_sentiment", "--timeout-secs", "soon"]);
        assert!(result.is_err());
    }
}
