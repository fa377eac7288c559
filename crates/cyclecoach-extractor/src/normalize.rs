//! Text normalization and tokenization

use regex::Regex;
use std::sync::LazyLock;

// ASCII word characters only, so accented letters act as delimiters
static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_]+").expect("non-word regex is valid"));

/// Lower-case and trim raw input
pub fn normalize(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

/// Split normalized text on runs of non-word characters
///
/// Leading or trailing delimiters produce empty tokens, which never match a
/// lexicon word.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    NON_WORD_RE.split(normalized).collect()
}
