//! Page download and article extraction.
//!
//! Scraping happens in two phases:
//!
//! 1. **Fetching** ([`fetch`]): download the page over HTTP
//! 2. **Extracting** ([`article`], [`title`]): parse the markup into an
//!    [`Article`](crate::models::Article)
//!
//! Both phases fail fast with typed errors; there is no retry or fallback.

pub mod article;
pub mod fetch;
pub mod title;
