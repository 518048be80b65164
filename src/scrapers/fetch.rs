//! HTTP page fetcher.
//!
//! One GET per call, no retries. Any transport failure or non-2xx status is
//! returned as a [`NetworkError`] and ends the run.

use crate::config::FetchConfig;
use crate::error::NetworkError;
use crate::models::RawPage;
use reqwest::{Client, header};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Something that can download a page.
///
/// [`HttpFetcher`] is the only production implementation; the driver is
/// generic over this so it can run against canned pages.
pub trait FetchPage {
    /// Download `url` and return the decoded body.
    async fn fetch(&self, url: &str) -> Result<RawPage, NetworkError>;
}

/// [`FetchPage`] backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client with the configured timeouts and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Request`] if the underlying client cannot be
    /// constructed (e.g. TLS backend initialisation fails).
    pub fn new(config: &FetchConfig) -> Result<Self, NetworkError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }
}

/// Parse `raw` and accept only absolute http(s) URLs.
pub fn parse_http_url(raw: &str) -> Result<Url, NetworkError> {
    let url = Url::parse(raw.trim()).map_err(|e| NetworkError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(NetworkError::UnsupportedScheme {
                scheme: other.to_string(),
                url: raw.to_string(),
            });
        }
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(NetworkError::InvalidUrl {
            url: raw.to_string(),
            reason: "missing host".to_string(),
        });
    }
    Ok(url)
}

impl FetchPage for HttpFetcher {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch(&self, url: &str) -> Result<RawPage, NetworkError> {
        let parsed = parse_http_url(url)?;
        let t0 = Instant::now();

        let response = self
            .client
            .get(parsed)
            .header(
                header::ACCEPT,
                "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await
            .inspect_err(|e| warn!(error = %e, "Request failed"))?;

        let status = response.status();
        let final_url = response.url().to_string();
        if !status.is_success() {
            warn!(status = status.as_u16(), %final_url, "Non-success status");
            return Err(NetworkError::UnexpectedStatus {
                status: status.as_u16(),
                url: final_url,
            });
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await?;

        info!(
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched page"
        );
        debug!(%final_url, ?content_type, "Response metadata");

        Ok(RawPage {
            url: final_url,
            status: status.as_u16(),
            content_type,
            body,
        })
    }
}
