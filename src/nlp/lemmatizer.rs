//! Lemmatization
//!
//! A word and its morphological variants should count as one key, so the
//! normalizer reduces every surviving token to a base form through the
//! [`Lemmatizer`] seam.
//!
//! Two real implementations are provided: [`EnglishLemmatizer`], a
//! rule-based plural reducer that returns dictionary forms ("apples" →
//! "apple"), and [`SnowballLemmatizer`], which wraps `rust-stemmers` for
//! aggressive conflation at the cost of non-dictionary stems ("apple" →
//! "appl").

use rust_stemmers::{Algorithm, Stemmer};
use rustc_hash::FxHashMap;

/// Reduces a word to a canonical base form.
///
/// Input is expected lowercase. Implementations must be pure: the same
/// word always maps to the same lemma.
pub trait Lemmatizer: Send + Sync {
    fn lemma(&self, word: &str) -> String;
}

/// Identity lemmatizer: every word is its own lemma.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLemmatizer;

impl Lemmatizer for NoopLemmatizer {
    fn lemma(&self, word: &str) -> String {
        word.to_string()
    }
}

/// Rule-based English noun lemmatizer.
///
/// Handles irregular plurals through a lookup table and regular plurals
/// through suffix rules. Deliberately conservative: a word that matches no
/// rule passes through unchanged, and short words are never truncated.
pub struct EnglishLemmatizer {
    irregular: FxHashMap<&'static str, &'static str>,
}

impl Default for EnglishLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EnglishLemmatizer {
    pub fn new() -> Self {
        let irregular: FxHashMap<&'static str, &'static str> = [
            ("children", "child"),
            ("men", "man"),
            ("women", "woman"),
            ("people", "person"),
            ("feet", "foot"),
            ("teeth", "tooth"),
            ("geese", "goose"),
            ("mice", "mouse"),
            ("indices", "index"),
            ("matrices", "matrix"),
            ("vertices", "vertex"),
            ("analyses", "analysis"),
            ("hypotheses", "hypothesis"),
            ("theses", "thesis"),
            ("criteria", "criterion"),
            ("phenomena", "phenomenon"),
            ("data", "datum"),
            ("corpora", "corpus"),
        ]
        .into_iter()
        .collect();
        Self { irregular }
    }
}

impl Lemmatizer for EnglishLemmatizer {
    fn lemma(&self, word: &str) -> String {
        if let Some(base) = self.irregular.get(word) {
            return (*base).to_string();
        }

        let n = word.len();
        // "studies" -> "study"
        if n > 4 && word.ends_with("ies") {
            return format!("{}y", &word[..n - 3]);
        }
        // "classes" -> "class", "boxes" -> "box", "matches" -> "match"
        if n > 3 && word.ends_with("es") {
            let stem = &word[..n - 2];
            if stem.ends_with("ss")
                || stem.ends_with('x')
                || stem.ends_with('z')
                || stem.ends_with("ch")
                || stem.ends_with("sh")
            {
                return stem.to_string();
            }
        }
        // "apples" -> "apple"; leave "class", "bus", "axis" alone
        if n > 3
            && word.ends_with('s')
            && !word.ends_with("ss")
            && !word.ends_with("us")
            && !word.ends_with("is")
        {
            return word[..n - 1].to_string();
        }

        word.to_string()
    }
}

/// Snowball-stemmer-backed lemmatizer.
///
/// Conflates more variants than the rule-based lemmatizer but produces
/// stems rather than dictionary forms.
pub struct SnowballLemmatizer {
    stemmer: Stemmer,
}

impl Default for SnowballLemmatizer {
    fn default() -> Self {
        Self::new(Algorithm::English)
    }
}

impl SnowballLemmatizer {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            stemmer: Stemmer::create(algorithm),
        }
    }
}

impl Lemmatizer for SnowballLemmatizer {
    fn lemma(&self, word: &str) -> String {
        self.stemmer.stem(word).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        let lem = EnglishLemmatizer::new();
        assert_eq!(lem.lemma("apples"), "apple");
        assert_eq!(lem.lemma("papers"), "paper");
        assert_eq!(lem.lemma("studies"), "study");
        assert_eq!(lem.lemma("boxes"), "box");
        assert_eq!(lem.lemma("classes"), "class");
        assert_eq!(lem.lemma("matches"), "match");
    }

    #[test]
    fn test_irregular_plurals() {
        let lem = EnglishLemmatizer::new();
        assert_eq!(lem.lemma("children"), "child");
        assert_eq!(lem.lemma("matrices"), "matrix");
        assert_eq!(lem.lemma("corpora"), "corpus");
    }

    #[test]
    fn test_singulars_pass_through() {
        let lem = EnglishLemmatizer::new();
        assert_eq!(lem.lemma("apple"), "apple");
        assert_eq!(lem.lemma("class"), "class");
        assert_eq!(lem.lemma("analysis"), "analysis");
        assert_eq!(lem.lemma("bus"), "bus");
    }

    #[test]
    fn test_short_words_untouched() {
        let lem = EnglishLemmatizer::new();
        assert_eq!(lem.lemma("is"), "is");
        assert_eq!(lem.lemma("gas"), "gas");
    }

    #[test]
    fn test_lemmatizer_is_pure() {
        let lem = EnglishLemmatizer::new();
        assert_eq!(lem.lemma("apples"), lem.lemma("apples"));
    }

    #[test]
    fn test_snowball_conflates_variants() {
        let lem = SnowballLemmatizer::default();
        assert_eq!(lem.lemma("running"), lem.lemma("runs"));
    }

    #[test]
    fn test_noop_is_identity() {
        assert_eq!(NoopLemmatizer.lemma("apples"), "apples");
    }
}
