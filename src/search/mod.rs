//! Text matching against the annotation store's search indexes.
//!
//! Both matchers compare strings through [`normalize`], so matching is
//! insensitive to case and to leading/trailing whitespace only.

pub mod exact;
pub mod fuzzy;

pub use exact::exact_match;
pub use fuzzy::{ratio, rank, suggest, Suggestion, DEFAULT_THRESHOLD, MAX_SUGGESTIONS};

/// Lower-case and trim. Internal whitespace is kept as is.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Con Chó \n"), "con chó");
        assert_eq!(normalize(""), "");
        // Internal runs of spaces are significant.
        assert_ne!(normalize("con  chó"), normalize("con chó"));
    }
}
