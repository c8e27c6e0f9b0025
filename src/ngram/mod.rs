//! Unigram and bigram counting
//!
//! Builds per-page frequency tables from a normalized token sequence and
//! accumulates them into a per-document [`DocumentCounter`]. Bigrams are
//! adjacent pairs within one page; they never span page boundaries.

use rustc_hash::FxHashSet;

use crate::freq::FrequencyTable;
use crate::types::{Bigram, RankedList, Token};

/// Count one page's tokens into fresh unigram and bigram tables.
///
/// Every token counts as a unigram. Every adjacent pair is a bigram
/// candidate, discarded if either member is in `ignore_words` — an extra
/// guard beyond the normalizer's per-token filter, relevant if the ignore
/// set changes between calls.
pub fn count_page(
    tokens: &[Token],
    ignore_words: &FxHashSet<String>,
) -> (FrequencyTable<Token>, FrequencyTable<Bigram>) {
    let mut unigrams = FrequencyTable::new();
    let mut bigrams = FrequencyTable::new();

    for token in tokens {
        unigrams.increment(token.clone());
    }

    for pair in tokens.windows(2) {
        if ignore_words.contains(&pair[0]) || ignore_words.contains(&pair[1]) {
            continue;
        }
        bigrams.increment(Bigram::new(pair[0].clone(), pair[1].clone()));
    }

    (unigrams, bigrams)
}

/// Running unigram/bigram tables for one document.
///
/// Lives only for the document's processing scope: accepted pages are
/// absorbed one at a time, the top-N lists are extracted, and the counter
/// is dropped.
#[derive(Debug, Default)]
pub struct DocumentCounter {
    unigrams: FrequencyTable<Token>,
    bigrams: FrequencyTable<Bigram>,
    pages_used: Vec<usize>,
}

impl DocumentCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an accepted page into the document tables and record its
    /// index in the page-usage sequence.
    pub fn absorb_page(
        &mut self,
        page_index: usize,
        tokens: &[Token],
        ignore_words: &FxHashSet<String>,
    ) {
        let (page_unigrams, page_bigrams) = count_page(tokens, ignore_words);
        self.unigrams.merge(&page_unigrams);
        self.bigrams.merge(&page_bigrams);
        self.pages_used.push(page_index);
    }

    /// Indices of pages absorbed so far, in page order.
    pub fn pages_used(&self) -> &[usize] {
        &self.pages_used
    }

    pub fn unigrams(&self) -> &FrequencyTable<Token> {
        &self.unigrams
    }

    pub fn bigrams(&self) -> &FrequencyTable<Bigram> {
        &self.bigrams
    }

    /// Extract the document's top-`n` unigram and bigram lists.
    pub fn top(&self, n: usize) -> (RankedList<Token>, RankedList<Bigram>) {
        (self.unigrams.top(n), self.bigrams.top(n))
    }
}
