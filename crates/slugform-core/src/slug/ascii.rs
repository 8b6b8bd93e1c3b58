//! Transliterating slugifier for record names.

use once_cell::sync::Lazy;
use regex::Regex;

/// Separators between words: tab, space and ASCII punctuation except `+ : ; ~`.
static PUNCTUATION_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r##"[\t !"#$%&'()*\-/<=>?@\[\\\]^_`{|},.]+"##).unwrap());

/// Generates an ASCII-only slug, joining words with `delim`.
///
/// Text is lowercased and split on punctuation; every piece is transliterated
/// to ASCII (`"café"` → `"cafe"`) and split into words.
/// Characters that survive neither step are dropped, so the words are always
/// `[a-z0-9]+`.
///
/// # Examples
///
/// - `slugify_ascii("Café Society", "-")` → `"cafe-society"`
/// - `slugify_ascii("my_app.web", "_")` → `"my_app_web"`
pub fn slugify_ascii(text: &str, delim: &str) -> String {
    let lower = text.to_lowercase();
    let mut words: Vec<String> = Vec::new();
    for piece in PUNCTUATION_RUN.split(&lower) {
        words.extend(transliterate_words(piece));
    }
    words.join(delim)
}

fn transliterate_words(piece: &str) -> Vec<String> {
    ::slug::slugify(piece)
        .split('-')
        .filter(|w| !w.is_empty())
        .map(str::to_owned)
        .collect()
}
