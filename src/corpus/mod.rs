//! Corpus-wide aggregation
//!
//! Folds every document's top-N lists into cumulative unigram, bigram, and
//! combined tables, records per-document page provenance, and extracts the
//! corpus-wide top-N rankings. The aggregator is the only state that
//! outlives a single document's processing; it is owned by the batch run
//! and discarded after finalization.

use serde::Serialize;

use crate::freq::FrequencyTable;
use crate::types::{Bigram, RankedList, Token};

/// Per-document record of which page indices contributed to the counts.
///
/// Entries are kept in document arrival order; the log is immutable once
/// the batch finishes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageUsageLog {
    entries: Vec<(String, Vec<usize>)>,
}

impl PageUsageLog {
    pub fn record(&mut self, doc_id: impl Into<String>, pages_used: Vec<usize>) {
        self.entries.push((doc_id.into(), pages_used));
    }

    /// Accepted pages for a document, if it was processed.
    pub fn pages_for(&self, doc_id: &str) -> Option<&[usize]> {
        self.entries
            .iter()
            .find(|(id, _)| id == doc_id)
            .map(|(_, pages)| pages.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.entries
            .iter()
            .map(|(id, pages)| (id.as_str(), pages.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Finalized corpus-wide result, handed to rendering as read-only data.
#[derive(Debug, Clone, Serialize)]
pub struct CorpusSummary {
    pub unigrams: RankedList<Token>,
    pub bigrams: RankedList<Bigram>,
    /// Unigrams and bigrams competing on raw count under a flattened
    /// string identity (bigrams space-joined).
    pub combined: RankedList<String>,
    pub log: PageUsageLog,
}

/// Accumulates per-document rankings into corpus-wide cumulative tables.
#[derive(Debug, Default)]
pub struct CorpusAggregator {
    unigrams: FrequencyTable<Token>,
    bigrams: FrequencyTable<Bigram>,
    combined: FrequencyTable<String>,
    log: PageUsageLog,
}

impl CorpusAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one document's (possibly adjusted) top-N lists into the
    /// cumulative tables and record its page usage.
    ///
    /// This is the batch's single serialization point: one call per
    /// document, atomic with respect to the cumulative tables.
    pub fn accumulate(
        &mut self,
        doc_unigrams: &RankedList<Token>,
        doc_bigrams: &RankedList<Bigram>,
        doc_id: &str,
        pages_used: &[usize],
    ) {
        for (word, count) in doc_unigrams {
            self.unigrams.add(word.clone(), *count);
            self.combined.add(word.clone(), *count);
        }
        for (bigram, count) in doc_bigrams {
            self.bigrams.add(bigram.clone(), *count);
            self.combined.add(bigram.joined(), *count);
        }
        self.log.record(doc_id, pages_used.to_vec());
    }

    /// Extract corpus-wide top-`n_total` rankings and the page-usage log.
    ///
    /// Entries whose final count is zero are dropped from all three lists
    /// before the result is considered ready for output.
    pub fn finalize(self, n_total: usize) -> CorpusSummary {
        CorpusSummary {
            unigrams: drop_zero(self.unigrams.top(n_total)),
            bigrams: drop_zero(self.bigrams.top(n_total)),
            combined: drop_zero(self.combined.top(n_total)),
            log: self.log,
        }
    }
}

fn drop_zero<K>(list: RankedList<K>) -> RankedList<K> {
    list.into_iter().filter(|(_, count)| *count > 0).collect()
}
