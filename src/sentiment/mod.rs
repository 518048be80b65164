//! Lexicon-based sentiment scoring.
//!
//! - [`lexicon`]: word, intensifier, negation and emoticon tables
//! - [`scorer`]: turns text into a [`SentimentScore`](crate::models::SentimentScore)

pub mod lexicon;
pub mod scorer;

pub use scorer::polarity;
