//! Core domain types shared across the crate.

use serde::Serialize;

/// A normalized word: lowercase, alphanumeric-only, stop-word-filtered,
/// lemmatized to its base form.
pub type Token = String;

/// An ordered pair of adjacent tokens from the same page.
///
/// Order matters: `("design", "pattern")` and `("pattern", "design")` are
/// distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Bigram {
    pub first: Token,
    pub second: Token,
}

impl Bigram {
    pub fn new(first: impl Into<Token>, second: impl Into<Token>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Render as a space-joined phrase, the form used in combined rankings.
    pub fn joined(&self) -> String {
        format!("{} {}", self.first, self.second)
    }

    /// Both member words, in order.
    pub fn members(&self) -> [&str; 2] {
        [&self.first, &self.second]
    }
}

impl std::fmt::Display for Bigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}

/// An ordered sequence of `(key, count)` pairs, descending by count,
/// truncated to a configured cap.
///
/// Produced by [`crate::freq::FrequencyTable::top`]; ties are broken by
/// first-insertion order, so the same table always yields the same list.
pub type RankedList<K> = Vec<(K, u64)>;

/// Per-document analysis output: top-N lists plus the accepted page indices.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentAnalysis {
    /// Document identifier (typically the file name).
    pub doc_id: String,
    /// Top-N unigrams, adjusted when adjustment is enabled.
    pub unigrams: RankedList<Token>,
    /// Top-N bigrams.
    pub bigrams: RankedList<Bigram>,
    /// Indices of pages that were not classified as reference pages,
    /// in page order.
    pub pages_used: Vec<usize>,
}
