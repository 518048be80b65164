//! Word tables for the polarity scorer.
//!
//! Polarity values are in `[-1.0, 1.0]`. Keys are lowercase; apostrophes are
//! ASCII (`'`) because the tokenizer normalizes curly quotes first.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Word polarities.
pub(crate) const WORDS: &[(&str, f64)] = &[
    // Positive
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("wonderful", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("fantastic", 0.4),
    ("superb", 1.0),
    ("outstanding", 0.5),
    ("brilliant", 0.9),
    ("perfect", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("nice", 0.6),
    ("fine", 0.4),
    ("happy", 0.8),
    ("glad", 0.5),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("like", 0.2),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("beautiful", 0.85),
    ("pleasant", 0.73),
    ("delightful", 1.0),
    ("impressive", 1.0),
    ("remarkable", 0.75),
    ("success", 0.3),
    ("successful", 0.75),
    ("win", 0.8),
    ("wins", 0.8),
    ("winning", 0.5),
    ("gain", 0.2),
    ("gains", 0.2),
    ("boost", 0.3),
    ("boosts", 0.3),
    ("rally", 0.3),
    ("rallies", 0.3),
    ("surge", 0.2),
    ("surges", 0.2),
    ("record", 0.1),
    ("strong", 0.43),
    ("stronger", 0.4),
    ("robust", 0.4),
    ("healthy", 0.5),
    ("safe", 0.5),
    ("safer", 0.5),
    ("effective", 0.6),
    ("effectively", 0.4),
    ("helpful", 0.5),
    ("useful", 0.3),
    ("valuable", 0.4),
    ("popular", 0.6),
    ("favorite", 0.5),
    ("favourite", 0.5),
    ("hope", 0.3),
    ("hopeful", 0.5),
    ("optimistic", 0.5),
    ("positive", 0.23),
    ("benefit", 0.3),
    ("benefits", 0.3),
    ("improve", 0.3),
    ("improved", 0.4),
    ("improves", 0.3),
    ("recover", 0.2),
    ("recovery", 0.2),
    ("approve", 0.3),
    ("approved", 0.3),
    ("easy", 0.43),
    ("clear", 0.1),
    ("fair", 0.7),
    ("fun", 0.3),
    ("funny", 0.25),
    ("interesting", 0.5),
    ("exciting", 0.3),
    ("excited", 0.38),
    ("smart", 0.21),
    ("wise", 0.7),
    ("kind", 0.6),
    ("generous", 0.4),
    ("friendly", 0.38),
    ("honest", 0.6),
    ("proud", 0.8),
    ("calm", 0.3),
    ("fresh", 0.3),
    ("free", 0.4),
    ("rich", 0.38),
    ("top", 0.5),
    ("thank", 0.2),
    ("thanks", 0.2),
    ("breakthrough", 0.5),
    ("innovative", 0.5),
    ("celebrate", 0.5),
    ("celebrates", 0.5),
    ("praise", 0.5),
    ("praised", 0.5),
    ("welcome", 0.8),
    ("cheap", 0.4),
    ("affordable", 0.3),
    ("right", 0.29),
    ("correct", 0.3),
    ("true", 0.35),
    ("new", 0.14),
    // Negative
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("horrific", -1.0),
    ("dreadful", -0.8),
    ("poor", -0.4),
    ("sad", -0.5),
    ("unhappy", -0.6),
    ("angry", -0.5),
    ("hate", -0.8),
    ("hated", -0.9),
    ("dislike", -0.4),
    ("ugly", -0.7),
    ("boring", -1.0),
    ("disappointing", -0.6),
    ("disappointed", -0.75),
    ("annoying", -0.8),
    ("stupid", -0.8),
    ("wrong", -0.5),
    ("false", -0.35),
    ("fail", -0.5),
    ("fails", -0.5),
    ("failed", -0.5),
    ("failure", -0.32),
    ("fake", -0.5),
    ("useless", -0.5),
    ("ineffective", -0.2),
    ("worthless", -0.8),
    ("dangerous", -0.6),
    ("risky", -0.4),
    ("unsafe", -0.5),
    ("harmful", -0.6),
    ("toxic", -0.5),
    ("deadly", -0.2),
    ("dead", -0.2),
    ("death", -0.3),
    ("kill", -0.4),
    ("killed", -0.2),
    ("crisis", -0.4),
    ("disaster", -0.7),
    ("catastrophic", -0.8),
    ("crash", -0.4),
    ("crashes", -0.4),
    ("plunge", -0.4),
    ("plunges", -0.4),
    ("slump", -0.4),
    ("drop", -0.1),
    ("drops", -0.1),
    ("fall", -0.1),
    ("falls", -0.1),
    ("loss", -0.3),
    ("losses", -0.3),
    ("lose", -0.3),
    ("lost", -0.2),
    ("weak", -0.38),
    ("weaker", -0.4),
    ("sick", -0.71),
    ("ill", -0.5),
    ("pain", -0.3),
    ("painful", -0.7),
    ("hurt", -0.5),
    ("afraid", -0.6),
    ("fear", -0.4),
    ("fears", -0.4),
    ("scary", -0.5),
    ("worried", -0.5),
    ("worry", -0.3),
    ("concern", -0.2),
    ("concerns", -0.2),
    ("problem", -0.3),
    ("problems", -0.3),
    ("trouble", -0.2),
    ("difficult", -0.5),
    ("hard", -0.29),
    ("negative", -0.3),
    ("recall", -0.3),
    ("recalls", -0.3),
    ("ban", -0.4),
    ("banned", -0.4),
    ("illegal", -0.5),
    ("lawsuit", -0.3),
    ("fraud", -0.6),
    ("scandal", -0.5),
    ("corrupt", -0.5),
    ("guilty", -0.5),
    ("warning", -0.2),
    ("warn", -0.2),
    ("warns", -0.2),
    ("threat", -0.4),
    ("threatens", -0.4),
    ("violent", -0.8),
    ("war", -0.4),
    ("attack", -0.4),
    ("broken", -0.4),
    ("expensive", -0.5),
    ("mess", -0.5),
    ("chaos", -0.6),
    ("cruel", -1.0),
    ("evil", -1.0),
    ("nasty", -1.0),
    ("pathetic", -1.0),
    ("ridiculous", -0.33),
    ("shocking", -0.7),
    ("unfair", -0.5),
    ("unfortunately", -0.5),
    ("miserable", -1.0),
    ("lonely", -0.5),
    ("tired", -0.4),
    ("slow", -0.3),
];

/// Intensifiers and their multipliers, applied to the next sentiment word.
pub(crate) const MODIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("highly", 1.3),
    ("so", 1.2),
    ("too", 1.2),
    ("totally", 1.3),
    ("completely", 1.3),
    ("absolutely", 1.5),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("most", 1.2),
    ("more", 1.1),
    ("slightly", 0.6),
    ("somewhat", 0.7),
    ("barely", 0.5),
    ("little", 0.6),
];

/// Words that flip the next sentiment word. Any `...n't` contraction also counts.
pub(crate) const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "nobody", "nothing", "without", "cannot",
    "hardly",
];

/// Emoticons matched as whole whitespace-separated tokens.
pub(crate) const EMOTICONS: &[(&str, f64)] = &[
    (":)", 0.5),
    (":-)", 0.5),
    ("(:", 0.5),
    (":d", 1.0),
    (":-d", 1.0),
    (";)", 0.5),
    ("<3", 1.0),
    (":(", -0.75),
    (":-(", -0.75),
    ("):", -0.75),
    (":'(", -1.0),
    (":/", -0.25),
    (":|", 0.0),
];

static WORD_TABLE: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| WORDS.iter().copied().collect());
static MODIFIER_TABLE: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| MODIFIERS.iter().copied().collect());
static EMOTICON_TABLE: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| EMOTICONS.iter().copied().collect());

pub(crate) fn word_polarity(word: &str) -> Option<f64> {
    WORD_TABLE.get(word).copied()
}

pub(crate) fn modifier(word: &str) -> Option<f64> {
    MODIFIER_TABLE.get(word).copied()
}

pub(crate) fn emoticon(token: &str) -> Option<f64> {
    EMOTICON_TABLE.get(token.to_lowercase().as_str()).copied()
}

pub(crate) fn is_negation(word: &str) -> bool {
    word.ends_with("n't") || NEGATIONS.contains(&word)
}
