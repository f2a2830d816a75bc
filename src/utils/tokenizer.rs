//! Whitespace tokenization for file contents.
//!
//! A word is any maximal run of non-whitespace characters; every word
//! is lowercased before it reaches the index, which is what makes
//! search case-insensitive end to end.

use std::borrow::Cow;

/// Decode arbitrary file bytes as UTF-8, replacing invalid sequences.
///
/// Binary files are not detected up front; their garbage "words" are
/// simply indexed and never searched for, which matches the best-effort
/// contract for non-text input.
pub fn decode_lossy(content: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(content)
}

/// Split `text` into lowercased words on runs of whitespace.
///
/// Empty input (or all-whitespace input) yields no tokens.
pub fn extract_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_lowercase)
}
