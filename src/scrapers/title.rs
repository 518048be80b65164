//! Headline selection.
//!
//! Pages usually carry their headline in three places: `<title>` (often
//! decorated with the site name), the main `<h1>`, and `og:title`. The rules
//! below pick the cleanest of them, falling back to splitting the `<title>`
//! on a site-name delimiter.

use crate::utils::{collapse_whitespace, comparable};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;

static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").expect("valid selector"));
static H1: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").expect("valid selector"));
static META_TITLE: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(
        r#"meta[property="og:title"], meta[name="og:title"], meta[name="twitter:title"], meta[property="twitter:title"], meta[name="headline"]"#,
    )
    .expect("valid selector")
});

/// Site-name delimiters, tried in order. Only the first one present is used.
const DELIMITERS: &[&str] = &["|", " - ", "_", "/", " » ", " : "];

/// An `<h1>` with this many words or fewer is treated as a section label, not a headline.
const MIN_H1_WORDS: usize = 3;

/// Pick the article headline from a parsed document. Returns `""` when none is found.
pub fn extract_title(document: &Html) -> String {
    let title_tag = document
        .select(&TITLE)
        .next()
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .unwrap_or_default();
    let h1 = longest_h1(document);
    let meta = meta_title(document);

    let chosen = choose_title(&title_tag, &h1, &meta);
    debug!(%title_tag, %h1, %meta, %chosen, "Selected headline");
    chosen
}

fn longest_h1(document: &Html) -> String {
    document
        .select(&H1)
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .max_by_key(|text| text.len())
        .filter(|text| text.split_whitespace().count() >= MIN_H1_WORDS)
        .unwrap_or_default()
}

/// First non-empty `og:title`-style meta value, in selector priority order.
fn meta_title(document: &Html) -> String {
    // Selector groups match in document order, so rank by attribute instead.
    let ranked = ["og:title", "twitter:title", "headline"];
    let mut found: Vec<(usize, String)> = document
        .select(&META_TITLE)
        .filter_map(|el| {
            let key = el
                .value()
                .attr("property")
                .or_else(|| el.value().attr("name"))?;
            let rank = ranked.iter().position(|r| *r == key)?;
            let content = collapse_whitespace(el.value().attr("content")?);
            (!content.is_empty()).then_some((rank, content))
        })
        .collect();
    found.sort_by_key(|(rank, _)| *rank);
    found.into_iter().map(|(_, c)| c).next().unwrap_or_default()
}

/// Headline choice given the three candidates (any of which may be empty).
pub(crate) fn choose_title(title_tag: &str, h1: &str, meta: &str) -> String {
    if title_tag.is_empty() {
        let fallback = if meta.is_empty() { h1 } else { meta };
        return fallback.to_string();
    }

    let cmp_title = comparable(title_tag);
    let cmp_h1 = comparable(h1);
    let cmp_meta = comparable(meta);

    let title = if h1 == title_tag {
        title_tag.to_string()
    } else if !cmp_h1.is_empty() && cmp_h1 == cmp_meta {
        h1.to_string()
    } else if !cmp_meta.is_empty() && cmp_meta != cmp_title && cmp_title.starts_with(&cmp_meta) {
        meta.to_string()
    } else {
        match DELIMITERS.iter().find(|d| title_tag.contains(**d)) {
            Some(delimiter) => split_title(title_tag, delimiter, &cmp_h1),
            None => title_tag.to_string(),
        }
    };

    if !cmp_h1.is_empty() && comparable(&title) == cmp_h1 {
        h1.to_string()
    } else {
        title
    }
}

/// Keep the piece that contains the h1 hint, otherwise the longest piece.
fn split_title(title: &str, delimiter: &str, cmp_hint: &str) -> String {
    let pieces: Vec<&str> = title
        .split(delimiter)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let hinted = (!cmp_hint.is_empty())
        .then(|| pieces.iter().find(|p| comparable(p).contains(cmp_hint)))
        .flatten();

    hinted
        .or_else(|| pieces.iter().max_by_key(|p| p.len()))
        .map(|p| p.to_string())
        .unwrap_or_else(|| title.trim().to_string())
}
