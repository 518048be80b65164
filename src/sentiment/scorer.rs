//! Lexicon polarity scorer.
//!
//! Each token found in the lexicon becomes an assessment. An intensifier
//! directly before a sentiment word multiplies it; a negation anywhere earlier
//! in the same clause multiplies it by [`NEGATION_FACTOR`]. The polarity is the
//! mean of all assessments, clamped to `[-1.0, 1.0]`, or `0.0` when there are none.

use super::lexicon::{emoticon, is_negation, modifier, word_polarity};
use crate::models::SentimentScore;
use tracing::{debug, instrument, trace};

/// Multiplier applied to a negated sentiment word ("not good" is mildly negative).
pub const NEGATION_FACTOR: f64 = -0.5;

/// One scored token.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    /// The token as it appeared (lowercased, punctuation trimmed).
    pub token: String,
    /// Polarity after intensifiers and negation.
    pub polarity: f64,
}

/// Score the polarity of `text`.
///
/// Deterministic and total: any input, including the empty string, yields a
/// finite value in `[-1.0, 1.0]`.
#[instrument(level = "debug", skip_all, fields(bytes = text.len()))]
pub fn polarity(text: &str) -> SentimentScore {
    let found = assessments(text);
    if found.is_empty() {
        debug!("No sentiment words found");
        return SentimentScore::NEUTRAL;
    }
    let mean = found.iter().map(|a| a.polarity).sum::<f64>() / found.len() as f64;
    let score = SentimentScore::new(mean);
    debug!(assessments = found.len(), score = score.value(), "Scored text");
    score
}

/// Every assessment in `text`, in order.
pub fn assessments(text: &str) -> Vec<Assessment> {
    let mut out = Vec::new();
    let mut negated = false;
    let mut intensity: Option<f64> = None;

    for raw in text.split_whitespace() {
        if let Some(p) = emoticon(raw) {
            out.push(Assessment {
                token: raw.to_string(),
                polarity: p,
            });
            negated = false;
            intensity = None;
            continue;
        }

        let word = normalize(raw);
        if word.is_empty() {
            // bare punctuation
        } else if is_negation(&word) {
            negated = true;
        } else if let Some(m) = modifier(&word) {
            intensity = Some(intensity.unwrap_or(1.0) * m);
        } else if let Some(p) = word_polarity(&word) {
            let mut value = p * intensity.take().unwrap_or(1.0);
            if negated {
                value *= NEGATION_FACTOR;
                negated = false;
            }
            let value = value.clamp(-1.0, 1.0);
            trace!(token = %word, polarity = value, "Assessment");
            out.push(Assessment {
                token: word,
                polarity: value,
            });
        } else {
            intensity = None;
        }

        if ends_clause(raw) {
            negated = false;
            intensity = None;
        }
    }
    out
}

/// Lowercase, ASCII apostrophes, surrounding punctuation removed.
fn normalize(raw: &str) -> String {
    raw.replace(['\u{2019}', '\u{2018}'], "'")
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

fn ends_clause(raw: &str) -> bool {
    raw.trim_end_matches(['"', '\'', ')', ']', '\u{201d}', '\u{2019}'])
        .ends_with([',', '.', ';', ':', '!', '?'])
}
