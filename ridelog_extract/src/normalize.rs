//! Punctuation stripping and tokenization shared by the place stages.

/// Lowercase and keep only letters, digits and whitespace.
///
/// Lowercasing happens first so characters whose lowercase form expands
/// into combining marks are stripped in the same pass.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Split already-normalized text on whitespace.
#[must_use]
pub fn tokens(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

/// Whether `word` appears as a whole token of normalized text.
#[must_use]
pub fn has_word(normalized: &str, word: &str) -> bool {
    normalized.split_whitespace().any(|t| t == word)
}
