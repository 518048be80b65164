//! Error types for each stage of the run.
//!
//! Every stage owns its error enum; [`AppError`] wraps them so the driver can
//! propagate any failure with `?`. Nothing here is recovered from locally: an
//! error aborts the run before anything is written to stdout.

use thiserror::Error;

/// Failures while downloading the article page.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unsupported URL scheme \"{scheme}\" in {url}")]
    UnsupportedScheme { scheme: String, url: String },

    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}

/// Failures while turning a downloaded page into an [`Article`](crate::models::Article).
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("document from {url} is empty")]
    EmptyDocument { url: String },

    #[error("document from {url} contains no markup")]
    NoMarkup { url: String },
}

/// Failures while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Top-level error for a single run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_converts_into_app_error() {
        let err: AppError = NetworkError::UnexpectedStatus {
            status: 503,
            url: "https://example.com/".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Network(_)));
        assert_eq!(
            err.to_string(),
            "network error: unexpected HTTP status 503 from https://example.com/"
        );
    }

    #[test]
    fn parse_error_message_names_url() {
        let err = ParseError::EmptyDocument {
            url: "https://example.com/a".to_string(),
        };
        assert_eq!(err.to_string(), "document from https://example.com/a is empty");
    }
}
