//! Text normalization for titles and article bodies.
//!
//! The steps run in a fixed order and the result feeds straight into the
//! content hash, so any change here changes every emitted `docId`.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\\(),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+")
        .expect("valid regex")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+").expect("valid regex"));

static DISALLOWED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_\s.,!?;:()\-]").expect("valid regex"));

/// Normalize a raw cell into indexable text.
///
/// Collapses whitespace, drops http(s) URLs and e-mail-like tokens, then
/// removes every character that is not a letter, number, underscore,
/// whitespace or basic punctuation. Combining marks count as disallowed, so
/// decomposed accents are dropped rather than kept.
pub fn clean_text(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let text = WHITESPACE_RE.replace_all(raw.trim(), " ");
    let text = URL_RE.replace_all(&text, "");
    let text = EMAIL_RE.replace_all(&text, "");
    let text = DISALLOWED_RE.replace_all(&text, "");

    text.trim().to_string()
}

/// Length in characters, the unit every threshold is expressed in
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
