//! Text normalization
//!
//! Turns raw page text into the filtered, lemmatized token sequence the
//! counter consumes. Steps, in order: lowercase, word-segment, keep only
//! fully-alphanumeric tokens, drop stop-words and ignore-words (tested on
//! the surface form, before lemmatization), lemmatize survivors. Token
//! order is preserved for adjacent-pair bigram construction.

use rustc_hash::FxHashSet;

use crate::nlp::lemmatizer::Lemmatizer;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::word_tokens;
use crate::types::Token;

/// Normalizes one page of raw text into candidate tokens.
pub struct TextNormalizer {
    stopwords: StopwordFilter,
    ignore_words: FxHashSet<String>,
    lemmatizer: Box<dyn Lemmatizer>,
}

impl TextNormalizer {
    pub fn new(
        stopwords: StopwordFilter,
        ignore_words: FxHashSet<String>,
        lemmatizer: Box<dyn Lemmatizer>,
    ) -> Self {
        Self {
            stopwords,
            ignore_words,
            lemmatizer,
        }
    }

    /// The ignore-word set, shared with the bigram counting guard.
    pub fn ignore_words(&self) -> &FxHashSet<String> {
        &self.ignore_words
    }

    /// Normalize one page of text into an ordered token sequence.
    ///
    /// Empty or whitespace-only pages produce an empty vector.
    pub fn normalize(&self, page_text: &str) -> Vec<Token> {
        word_tokens(page_text)
            .into_iter()
            .filter(|w| !self.stopwords.contains(w) && !self.ignore_words.contains(w))
            .map(|w| self.lemmatizer.lemma(&w))
            .collect()
    }
}
