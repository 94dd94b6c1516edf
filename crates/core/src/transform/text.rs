//! Text-derived metrics for free-form expense fields.

/// Character count of `text`.
#[must_use]
pub fn char_length(text: &str) -> i32 {
    i32::try_from(text.chars().count()).unwrap_or(i32::MAX)
}

/// Whitespace-separated word count of `text`.
#[must_use]
pub fn word_count(text: &str) -> i32 {
    i32::try_from(text.split_whitespace().count()).unwrap_or(i32::MAX)
}

/// Lowercased, trimmed form of a free-text categorical value.
#[must_use]
pub fn standardize(text: &str) -> String {
    text.trim().to_lowercase()
}
