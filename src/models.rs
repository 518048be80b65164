//! Data models for downloaded pages, parsed articles and sentiment scores.
//!
//! - [`RawPage`]: what the fetcher hands to the extractor
//! - [`Article`]: structured fields parsed out of a page
//! - [`SentimentScore`]: the polarity computed for a piece of text

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::fmt;

/// A downloaded page, before any parsing.
#[derive(Debug, Clone)]
pub struct RawPage {
    /// The URL the body was served from, after redirects.
    pub url: String,
    /// HTTP status code of the final response.
    pub status: u16,
    /// `Content-Type` header, if the server sent one.
    pub content_type: Option<String>,
    /// Response body decoded to text.
    pub body: String,
}

/// A news article parsed from a [`RawPage`].
///
/// Only `title` is consumed downstream; the remaining fields are what a
/// complete article parse produces and are logged at debug level.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    /// The source URL of the article.
    pub source: String,
    /// Raw downloaded markup.
    #[serde(skip)]
    pub html: String,
    /// The article headline. Empty when no title could be found.
    pub title: String,
    /// Byline names, deduplicated in document order.
    pub authors: Vec<String>,
    /// Publication timestamp when the page declares one.
    pub publish_date: Option<DateTime<FixedOffset>>,
    /// `<meta name="description">` or its Open Graph equivalent.
    pub meta_description: String,
    /// `<meta name="keywords">`, split on commas.
    pub meta_keywords: Vec<String>,
    /// Absolute canonical URL.
    pub canonical_link: Option<String>,
    /// Absolute URL of the lead image.
    pub top_image: Option<String>,
    /// Paragraph text of the article body.
    pub text: String,
}

/// Sentiment polarity of a text, always within `[-1.0, 1.0]`.
///
/// Negative values mean negative sentiment, positive values positive
/// sentiment, and `0.0` is neutral.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
pub struct SentimentScore(f64);

impl SentimentScore {
    pub const NEUTRAL: Self = Self(0.0);

    /// Clamp into range; anything non-finite becomes neutral.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(-1.0, 1.0))
        } else {
            Self::NEUTRAL
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for SentimentScore {
    /// Shortest round-trip form, always with a decimal point (`0.0`, `-0.25`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Normalize -0.0 so a neutral score never prints as "-0.0".
        let v = if self.0 == 0.0 { 0.0 } else { self.0 };
        write!(f, "{v:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_clamps_out_of_range() {
        assert_eq!(SentimentScore::new(1.7).value(), 1.0);
        assert_eq!(SentimentScore::new(-3.0).value(), -1.0);
        assert_eq!(SentimentScore::new(0.25).value(), 0.25);
    }

    #[test]
    fn test_score_non_finite_is_neutral() {
        assert_eq!(SentimentScore::new(f64::NAN), SentimentScore::NEUTRAL);
        assert_eq!(SentimentScore::new(f64::INFINITY), SentimentScore::NEUTRAL);
    }

    #[test]
    fn test_score_display_keeps_decimal_point() {
        assert_eq!(SentimentScore::new(0.0).to_string(), "0.0");
        assert_eq!(SentimentScore::new(-0.0).to_string(), "0.0");
        assert_eq!(SentimentScore::new(1.0).to_string(), "1.0");
        assert_eq!(SentimentScore::new(-0.25).to_string(), "-0.25");
    }
}
