//! Straight-line driver: fetch → extract → score → print.
//!
//! Output is written only after every step has succeeded, so a failed run
//! never leaves a title without a score.

use crate::cli::Cli;
use crate::config::FetchConfig;
use crate::error::AppError;
use crate::models::{Article, SentimentScore};
use crate::scrapers::fetch::{FetchPage, HttpFetcher};
use crate::sentiment;
use std::io::Write;
use std::time::Instant;
use tracing::{info, instrument};

/// The article scored by a normal run.
pub const ARTICLE_URL: &str =
    "https://www.cnbc.com/2023/09/12/decongestant-phenylephrine-ineffective.html";

/// What one run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub score: SentimentScore,
}

/// Resolve configuration from the CLI and build the HTTP fetcher.
///
/// # Errors
///
/// - [`AppError::Config`] if the config file is unreadable or a value is invalid.
/// - [`AppError::Network`] if the HTTP client cannot be constructed.
pub fn build_fetcher(cli: &Cli) -> Result<HttpFetcher, AppError> {
    let config = FetchConfig::resolve(cli)?;
    Ok(HttpFetcher::new(&config)?)
}

/// Fetch `url`, extract the headline, score it, and write two lines to `out`.
///
/// # Errors
///
/// - [`AppError::Network`] if the page cannot be downloaded.
/// - [`AppError::Parse`] if the body is not a document.
/// - [`AppError::Output`] if writing to `out` fails.
///
/// Nothing is written to `out` unless fetching and parsing both succeed.
#[instrument(level = "info", skip(fetcher, out))]
pub async fn run<F, W>(fetcher: &F, url: &str, out: &mut W) -> Result<Report, AppError>
where
    F: FetchPage,
    W: Write,
{
    let t0 = Instant::now();

    let page = fetcher.fetch(url).await?;
    let article = Article::parse(&page)?;
    let score = sentiment::polarity(&article.title);

    let report = Report {
        title: article.title,
        score,
    };
    write_report(out, &report)?;

    info!(
        title = %report.title,
        score = report.score.value(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "Run complete"
    );
    Ok(report)
}

/// Title on the first line, polarity on the second.
pub fn write_report<W: Write>(out: &mut W, report: &Report) -> std::io::Result<()> {
    writeln!(out, "{}", report.title)?;
    writeln!(out, "{}", report.score)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, NetworkError, ParseError};
    use crate::models::RawPage;
    use clap::Parser;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Serves one canned body for any URL.
    struct StaticPage(&'static str);

    impl FetchPage for StaticPage {
        async fn fetch(&self, url: &str) -> Result<RawPage, NetworkError> {
            Ok(RawPage {
                url: url.to_string(),
                status: 200,
                content_type: Some("text/html".to_string()),
                body: self.0.to_string(),
            })
        }
    }

    fn test_fetcher() -> HttpFetcher {
        let config = FetchConfig {
            timeout_secs: 5,
            ..FetchConfig::default()
        };
        HttpFetcher::new(&config).expect("failed to build test HttpFetcher")
    }

    fn lines(out: &[u8]) -> Vec<String> {
        String::from_utf8(out.to_vec())
            .expect("output is UTF-8")
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[tokio::test]
    async fn hello_world_fixture_prints_title_then_score() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/hello.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "<html><head><title>Hello World</title></head><body><p>Hi.</p></body></html>",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let mut out = Vec::new();
        let report = run(&test_fetcher(), &format!("{}/hello.html", server.uri()), &mut out)
            .await
            .expect("run should succeed");

        assert_eq!(lines(&out), vec!["Hello World", "0.0"]);
        assert_eq!(report.title, "Hello World");
        assert_eq!(report.score, SentimentScore::NEUTRAL);
    }

    #[tokio::test]
    async fn positive_headline_scores_positive() {
        let fetcher = StaticPage(
            "<html><head><title>A wonderful, great day for markets</title></head></html>",
        );
        let mut out = Vec::new();
        let report = run(&fetcher, "https://example.com/a", &mut out).await.unwrap();

        let printed = lines(&out);
        assert_eq!(printed.len(), 2);
        assert_eq!(printed[0], "A wonderful, great day for markets");
        assert_eq!(printed[1], report.score.to_string());
        assert!(report.score.value() > 0.0);
    }

    #[tokio::test]
    async fn unreachable_host_prints_nothing() {
        let mut out = Vec::new();
        let err = run(&test_fetcher(), "http://127.0.0.1:9/", &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Network(_)), "got {err:?}");
        assert!(out.is_empty(), "nothing should be printed on failure");
    }

    #[tokio::test]
    async fn malformed_url_prints_nothing() {
        let mut out = Vec::new();
        let err = run(&test_fetcher(), "ht!tp:/nope", &mut out).await.unwrap_err();

        assert!(
            matches!(
                err,
                AppError::Network(NetworkError::InvalidUrl { .. } | NetworkError::UnsupportedScheme { .. })
            ),
            "got {err:?}"
        );
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn server_error_prints_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut out = Vec::new();
        let err = run(&test_fetcher(), &server.uri(), &mut out).await.unwrap_err();

        assert!(
            matches!(err, AppError::Network(NetworkError::UnexpectedStatus { status: 500, .. })),
            "got {err:?}"
        );
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn empty_body_is_parse_error_and_prints_nothing() {
        let mut out = Vec::new();
        let err = run(&StaticPage(""), "https://example.com/empty", &mut out)
            .await
            .unwrap_err();

        assert!(
            matches!(err, AppError::Parse(ParseError::EmptyDocument { .. })),
            "got {err:?}"
        );
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn page_without_title_prints_empty_line_and_neutral_score() {
        let mut out = Vec::new();
        run(&StaticPage("<div>no headline</div>"), "https://example.com/", &mut out)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "\n0.0\n");
    }

    #[test]
    fn write_report_formats_negative_score() {
        let report = Report {
            title: "Bad news".to_string(),
            score: SentimentScore::new(-0.7),
        };
        let mut out = Vec::new();
        write_report(&mut out, &report).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Bad news\n-0.7\n");
    }

    #[test]
    fn build_fetcher_reports_invalid_config() {
        let cli = Cli::parse_from(["headline_sentiment", "--timeout-secs", "0"]);
        let err = build_fetcher(&cli).unwrap_err();
        assert!(
            matches!(err, AppError::Config(ConfigError::Invalid { field: "timeout_secs", .. })),
            "got {err:?}"
        );
    }

    #[test]
    fn build_fetcher_reports_missing_config_file() {
        let cli = Cli::parse_from(["headline_sentiment", "--config", "/definitely/not/here.yaml"]);
        let err = build_fetcher(&cli).unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::Read { .. })), "got {err:?}");
    }

    #[test]
    fn build_fetcher_accepts_defaults() {
        let cli = Cli::parse_from(["headline_sentiment"]);
        assert!(build_fetcher(&cli).is_ok());
    }

    #[test]
    fn article_url_is_valid() {
        assert!(crate::scrapers::fetch::parse_http_url(ARTICLE_URL).is_ok());
    }
}
