//! Word-level tokenization
//!
//! Splits page text into candidate word tokens using UAX-29 word
//! segmentation (`unicode-segmentation`). Punctuation and whitespace act as
//! delimiters; contraction and hyphen handling follow the segmenter's
//! language rules. Only fully-alphanumeric tokens survive.

use unicode_segmentation::UnicodeSegmentation;

/// Split `text` into lowercase, fully-alphanumeric word tokens.
///
/// Tokens containing any non-alphanumeric character (apostrophes, embedded
/// punctuation) are rejected, matching the counting pipeline's contract.
/// Empty or whitespace-only input yields an empty vector.
pub fn word_tokens(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .unicode_words()
        .filter(|w| w.chars().all(char::is_alphanumeric))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        let tokens = word_tokens("Machine learning, in practice.");
        assert_eq!(tokens, vec!["machine", "learning", "in", "practice"]);
    }

    #[test]
    fn test_rejects_tokens_with_punctuation() {
        let tokens = word_tokens("don't panic");
        // "don't" carries an apostrophe through UAX-29 and is dropped.
        assert_eq!(tokens, vec!["panic"]);
    }

    #[test]
    fn test_numbers_are_kept() {
        let tokens = word_tokens("published in 2021");
        assert_eq!(tokens, vec!["published", "in", "2021"]);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(word_tokens("").is_empty());
        assert!(word_tokens("   \n\t  ").is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let tokens = word_tokens("alpha beta gamma alpha");
        assert_eq!(tokens, vec!["alpha", "beta", "gamma", "alpha"]);
    }
}
