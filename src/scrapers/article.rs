//! Article extraction from downloaded markup.
//!
//! Turns a [`RawPage`] into an [`Article`]. The headline comes from
//! [`title::extract_title`](super::title::extract_title); the other fields
//! are read from meta tags, JSON-LD blocks and the body paragraphs.

use super::title::extract_title;
use crate::error::ParseError;
use crate::models::{Article, RawPage};
use crate::utils::{collapse_whitespace, truncate_for_log};
use chrono::{DateTime, FixedOffset, NaiveDate};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;
use tracing::{debug, info, instrument};
use url::Url;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

static ANY_ELEMENT: Lazy<Selector> = Lazy::new(|| selector("*"));
static META: Lazy<Selector> = Lazy::new(|| selector("meta[content]"));
static JSON_LD: Lazy<Selector> = Lazy::new(|| selector(r#"script[type="application/ld+json"]"#));
static CANONICAL: Lazy<Selector> = Lazy::new(|| selector(r#"link[rel="canonical"][href]"#));
static BYLINE: Lazy<Selector> = Lazy::new(|| {
    selector(r#"[rel="author"], [itemprop="author"], .byline, .author, .author-name"#)
});
static ARTICLE_PARAGRAPHS: Lazy<Selector> = Lazy::new(|| selector("article p"));
static BODY_PARAGRAPHS: Lazy<Selector> = Lazy::new(|| selector("body p"));

static URL_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/((?:19|20)\d{2})/(0[1-9]|1[0-2])/(0[1-9]|[12]\d|3[01])/").expect("valid date regex")
});
static BY_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*by[:\s]+").expect("valid byline regex"));
static AUTHOR_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+and\s+|\s*[,;&]\s*").expect("valid author split regex"));

/// Elements html5ever creates on its own for any input, markup or not.
const SYNTHESIZED: &[&str] = &["html", "head", "body"];

/// Meta keys that carry a publish date, highest priority first.
const DATE_KEYS: &[&str] = &[
    "article:published_time",
    "og:published_time",
    "datepublished",
    "pubdate",
    "publishdate",
    "parsely-pub-date",
    "sailthru.date",
    "date",
];

/// Longest byline text considered a name rather than a paragraph.
const MAX_AUTHOR_LEN: usize = 80;

impl Article {
    /// Parse a downloaded page.
    ///
    /// # Errors
    ///
    /// - [`ParseError::EmptyDocument`] when the body is empty or whitespace.
    /// - [`ParseError::NoMarkup`] when the body contains no HTML elements.
    #[instrument(level = "info", skip_all, fields(url = %page.url))]
    pub fn parse(page: &RawPage) -> Result<Self, ParseError> {
        if page.body.trim().is_empty() {
            return Err(ParseError::EmptyDocument {
                url: page.url.clone(),
            });
        }

        debug!(status = page.status, content_type = ?page.content_type, "Parsing page");
        let document = Html::parse_document(&page.body);
        let has_markup = document
            .select(&ANY_ELEMENT)
            .any(|el| !SYNTHESIZED.contains(&el.value().name()));
        if !has_markup {
            debug!(preview = %truncate_for_log(&page.body, 120), "Body has no markup");
            return Err(ParseError::NoMarkup {
                url: page.url.clone(),
            });
        }

        let base = Url::parse(&page.url).ok();
        let metas = MetaTags::collect(&document);
        let json_ld = json_ld_objects(&document);

        let article = Article {
            source: page.url.clone(),
            html: page.body.clone(),
            title: extract_title(&document),
            authors: extract_authors(&document, &metas, &json_ld),
            publish_date: extract_publish_date(&page.url, &metas, &json_ld),
            meta_description: metas
                .first(&["description", "og:description"])
                .unwrap_or_default()
                .to_string(),
            meta_keywords: metas
                .first(&["keywords"])
                .map(|k| {
                    k.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_owned)
                        .collect()
                })
                .unwrap_or_default(),
            canonical_link: extract_canonical(&document, &metas, base.as_ref()),
            top_image: metas
                .first(&["og:image", "og:image:url", "twitter:image"])
                .and_then(|src| resolve(base.as_ref(), src)),
            text: extract_text(&document),
        };

        info!(
            title = %article.title,
            html_bytes = article.html.len(),
            authors = article.authors.len(),
            text_bytes = article.text.len(),
            "Parsed article"
        );
        debug!(
            article = %serde_json::to_string(&article).unwrap_or_default(),
            "Article fields"
        );
        Ok(article)
    }
}

/// `<meta>` key/value pairs, keyed by `property`, `name` or `itemprop` (lowercased).
struct MetaTags(Vec<(String, String)>);

impl MetaTags {
    fn collect(document: &Html) -> Self {
        let pairs = document
            .select(&META)
            .filter_map(|el| {
                let attrs = el.value();
                let key = attrs
                    .attr("property")
                    .or_else(|| attrs.attr("name"))
                    .or_else(|| attrs.attr("itemprop"))?;
                let content = collapse_whitespace(attrs.attr("content")?);
                (!content.is_empty()).then(|| (key.trim().to_lowercase(), content))
            })
            .collect();
        Self(pairs)
    }

    /// Value of the first key in `keys` that is present.
    fn first(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.get(key).next())
    }

    fn get<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a str> {
        self.0
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Every JSON-LD object on the page, with `@graph` arrays flattened.
fn json_ld_objects(document: &Html) -> Vec<Value> {
    let mut out = Vec::new();
    for script in document.select(&JSON_LD) {
        let raw = script.text().collect::<String>();
        let Ok(value) = serde_json::from_str::<Value>(raw.trim()) else {
            debug!("Skipping unparseable JSON-LD block");
            continue;
        };
        flatten_json_ld(value, &mut out);
    }
    out
}

fn flatten_json_ld(value: Value, out: &mut Vec<Value>) {
    match value {
        Value::Array(items) => items.into_iter().for_each(|v| flatten_json_ld(v, out)),
        Value::Object(mut map) => {
            if let Some(graph) = map.remove("@graph") {
                flatten_json_ld(graph, out);
            }
            out.push(Value::Object(map));
        }
        _ => {}
    }
}

fn extract_authors(document: &Html, metas: &MetaTags, json_ld: &[Value]) -> Vec<String> {
    let mut raw: Vec<String> = Vec::new();

    raw.extend(metas.get("author").map(str::to_owned));
    raw.extend(
        metas
            .get("article:author")
            .filter(|v| !v.starts_with("http"))
            .map(str::to_owned),
    );
    for obj in json_ld {
        if let Some(author) = obj.get("author") {
            collect_json_ld_names(author, &mut raw);
        }
    }
    raw.extend(
        document
            .select(&BYLINE)
            .filter(|el| el.value().name() != "meta")
            .map(element_text)
            .filter(|t| !t.is_empty() && t.len() <= MAX_AUTHOR_LEN),
    );

    raw.iter()
        .flat_map(|entry| {
            let stripped = BY_PREFIX.replace(entry, "");
            AUTHOR_SPLIT
                .split(&stripped)
                .map(collapse_whitespace)
                .filter(|name| !name.is_empty() && name.chars().any(char::is_alphabetic))
                .collect::<Vec<_>>()
        })
        .unique_by(|name| name.to_lowercase())
        .collect()
}

fn collect_json_ld_names(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(name) => out.push(name.clone()),
        Value::Object(map) => {
            if let Some(Value::String(name)) = map.get("name") {
                out.push(name.clone());
            }
        }
        Value::Array(items) => items.iter().for_each(|v| collect_json_ld_names(v, out)),
        _ => {}
    }
}

fn extract_publish_date(
    url: &str,
    metas: &MetaTags,
    json_ld: &[Value],
) -> Option<DateTime<FixedOffset>> {
    DATE_KEYS
        .iter()
        .flat_map(|key| metas.get(key))
        .chain(
            json_ld
                .iter()
                .filter_map(|obj| obj.get("datePublished").and_then(Value::as_str)),
        )
        .find_map(parse_date)
        .or_else(|| date_from_url(url))
}

/// RFC 3339 first, then a bare `YYYY-MM-DD` (optionally followed by more text) as UTC midnight.
pub(crate) fn parse_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    let day = raw.get(..10)?;
    let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().fixed_offset())
}

fn date_from_url(url: &str) -> Option<DateTime<FixedOffset>> {
    let caps = URL_DATE.captures(url)?;
    let date = NaiveDate::from_ymd_opt(
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
        caps[3].parse().ok()?,
    )?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().fixed_offset())
}

fn extract_canonical(document: &Html, metas: &MetaTags, base: Option<&Url>) -> Option<String> {
    document
        .select(&CANONICAL)
        .filter_map(|el| el.value().attr("href"))
        .chain(metas.get("og:url"))
        .find_map(|href| resolve(base, href))
}

fn resolve(base: Option<&Url>, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    match base {
        Some(base) => base.join(href).ok().map(|u| u.to_string()),
        None => Url::parse(href).ok().map(|u| u.to_string()),
    }
}

fn extract_text(document: &Html) -> String {
    let in_article: Vec<String> = document
        .select(&ARTICLE_PARAGRAPHS)
        .map(element_text)
        .filter(|t| !t.is_empty())
        .collect();
    let paragraphs = if in_article.is_empty() {
        document
            .select(&BODY_PARAGRAPHS)
            .map(element_text)
            .filter(|t| !t.is_empty())
            .collect()
    } else {
        in_article
    };
    paragraphs.join("\n\n")
}

fn element_text(el: ElementRef<'_>) -> String {
    collapse_whitespace(&el.text().collect::<Vec<_>>().join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> RawPage {
        RawPage {
            url: "https://news.example.com/2023/09/12/story.html".to_string(),
            status: 200,
            content_type: Some("text/html".to_string()),
            body: body.to_string(),
        }
    }

    const FULL_PAGE: &str = r#"<!doctype html>
<html>
<head>
  <title>Popular decongestant doesn't work, FDA advisors say | Example News</title>
  <meta name="description" content="  An advisory panel voted unanimously.  ">
  <meta name="keywords" content="health, FDA , ,drugs">
  <meta property="og:image" content="/img/lead.jpg">
  <meta name="author" content="By Jane Doe and John Roe">
  <meta property="article:author" content="https://www.facebook.com/example">
  <link rel="canonical" href="/2023/09/12/story.html">
  <script type="application/ld+json">
    {"@context": "https://schema.org", "@graph": [
      {"@type": "NewsArticle", "datePublished": "2023-09-12T14:30:00-04:00",
       "author": [{"@type": "Person", "name": "Jane Doe"}, {"@type": "Person", "name": "Ann Lee"}]}
    ]}
  </script>
</head>
<body>
  <nav><p>Menu</p></nav>
  <article>
    <h1>Popular decongestant doesn't work, FDA advisors say</h1>
    <span class="byline">By  John Roe</span>
    <p>First   paragraph.</p>
    <p></p>
    <p>Second <b>bold</b> paragraph.</p>
  </article>
</body>
</html>"#;

    #[test]
    fn parses_full_article() {
        let article = Article::parse(&page(FULL_PAGE)).expect("should parse");

        assert_eq!(
            article.title,
            "Popular decongestant doesn't work, FDA advisors say"
        );
        assert_eq!(article.authors, vec!["Jane Doe", "John Roe", "Ann Lee"]);
        assert_eq!(
            article.publish_date.map(|d| d.to_rfc3339()),
            Some("2023-09-12T14:30:00-04:00".to_string())
        );
        assert_eq!(article.meta_description, "An advisory panel voted unanimously.");
        assert_eq!(article.meta_keywords, vec!["health", "FDA", "drugs"]);
        assert_eq!(
            article.canonical_link.as_deref(),
            Some("https://news.example.com/2023/09/12/story.html")
        );
        assert_eq!(
            article.top_image.as_deref(),
            Some("https://news.example.com/img/lead.jpg")
        );
        assert_eq!(article.text, "First paragraph.\n\nSecond bold paragraph.");
        assert_eq!(article.source, "https://news.example.com/2023/09/12/story.html");
    }

    #[test]
    fn hello_world_fixture() {
        let body = "<html><head><title>Hello World</title></head><body><p>hi</p></body></html>";
        let article = Article::parse(&page(body)).unwrap();
        assert_eq!(article.title, "Hello World");
        assert_eq!(article.text, "hi");
        assert_eq!(article.html, body);
    }

    #[test]
    fn empty_body_is_parse_error() {
        let err = Article::parse(&page("  \n ")).unwrap_err();
        assert!(matches!(err, ParseError::EmptyDocument { .. }), "got {err:?}");
    }

    #[test]
    fn plain_text_body_is_parse_error() {
        let err = Article::parse(&page("just some words, no tags at all")).unwrap_err();
        assert!(matches!(err, ParseError::NoMarkup { .. }), "got {err:?}");
    }

    #[test]
    fn page_without_title_yields_empty_title() {
        let article = Article::parse(&page("<div><p>No headline anywhere</p></div>")).unwrap();
        assert_eq!(article.title, "");
        assert_eq!(article.text, "No headline anywhere");
    }

    #[test]
    fn publish_date_falls_back_to_url() {
        let article = Article::parse(&page("<title>x</title>")).unwrap();
        assert_eq!(
            article.publish_date.map(|d| d.to_rfc3339()),
            Some("2023-09-12T00:00:00+00:00".to_string())
        );
    }

    #[test]
    fn publish_date_meta_beats_url() {
        let article = Article::parse(&page(
            r#"<head><meta name="pubdate" content="2024-01-05"></head>"#,
        ))
        .unwrap();
        assert_eq!(
            article.publish_date.map(|d| d.date_naive().to_string()),
            Some("2024-01-05".to_string())
        );
    }

    #[test]
    fn parse_date_formats() {
        assert!(parse_date("2023-09-12T10:00:00Z").is_some());
        assert_eq!(
            parse_date("2023-09-12 10:00").map(|d| d.to_rfc3339()),
            Some("2023-09-12T00:00:00+00:00".to_string())
        );
        assert!(parse_date("yesterday").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn invalid_json_ld_is_ignored() {
        let article = Article::parse(&page(
            r#"<head><title>t</title><script type="application/ld+json">{not json</script></head>"#,
        ))
        .unwrap();
        assert_eq!(article.title, "t");
        assert!(article.authors.is_empty());
    }

    #[test]
    fn json_ld_string_author() {
        let article = Article::parse(&page(
            r#"<script type="application/ld+json">{"author": "Sam Poe"}</script>"#,
        ))
        .unwrap();
        assert_eq!(article.authors, vec!["Sam Poe"]);
    }
}
