//! Whitespace tokenizer and punctuation helpers.
//!
//! Tokens are whitespace-delimited words; punctuation stays attached to its
//! word (`"Hello,"` is one token). The punctuation helpers back the
//! cosmetic-change filter in the classifier.

/// Split `text` into whitespace-delimited tokens, preserving order.
///
/// Empty input yields an empty vector — never an error.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Count the whitespace-delimited tokens in `text`.
///
/// This is the scoring denominator (`EditTally::total_original_tokens`).
/// It is computed straight from the source text, independently of the
/// aligned sequences, so it stays the source of truth even if tokens are
/// merged or split elsewhere.
pub fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Remove every ASCII punctuation character from `token`.
pub fn strip_punctuation(token: &str) -> String {
    token.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// `true` when `token` is non-empty and consists entirely of ASCII
/// punctuation characters (e.g. `","`, `"..."`).
pub fn is_punctuation_only(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_punctuation())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_any_whitespace() {
        assert_eq!(tokenize("I  am\tgoing\nhome"), vec!["I", "am", "going", "home"]);
    }

    #[test]
    fn tokenize_empty_input_is_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
    }

    #[test]
    fn token_count_matches_tokenize() {
        let text = "the quick,  brown fox";
        assert_eq!(token_count(text), tokenize(text).len());
        assert_eq!(token_count(""), 0);
    }

    #[test]
    fn punctuation_stays_attached() {
        assert_eq!(tokenize("Hello, world!"), vec!["Hello,", "world!"]);
    }

    #[test]
    fn strip_punctuation_keeps_letters_and_digits() {
        assert_eq!(strip_punctuation("Hello,"), "Hello");
        assert_eq!(strip_punctuation("it's"), "its");
        assert_eq!(strip_punctuation("140/90"), "14090");
        assert_eq!(strip_punctuation("..."), "");
    }

    #[test]
    fn punctuation_only_detection() {
        assert!(is_punctuation_only(","));
        assert!(is_punctuation_only("..."));
        assert!(!is_punctuation_only("Hello,"));
        assert!(!is_punctuation_only(""));
    }
}
