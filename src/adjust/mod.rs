//! Unigram frequency adjustment
//!
//! A word that is frequent mostly because it belongs to a frequent bigram
//! should not be over-represented as a standalone unigram. For every bigram
//! `(w1, w2)` with count f, f is subtracted from each member's unigram
//! count independently; counts saturate at zero and zeroed entries are
//! dropped. The adjusted sum is therefore never larger than the original
//! sum.
//!
//! Operates on a document's top-N lists only, so the work is bounded by N.

use rustc_hash::FxHashMap;

use crate::types::{Bigram, RankedList, Token};

/// Adjust a unigram ranking against the overlapping bigram ranking.
///
/// Words absent from the unigram list contribute no subtraction; an empty
/// bigram list returns the input unchanged. The result is re-sorted by
/// count descending with a stable sort, so entries tied after adjustment
/// keep their previous relative order.
pub fn adjust_unigrams(
    unigrams: RankedList<Token>,
    bigrams: &RankedList<Bigram>,
) -> RankedList<Token> {
    if bigrams.is_empty() {
        return unigrams;
    }

    let mut reductions: FxHashMap<&str, u64> = FxHashMap::default();
    for (bigram, count) in bigrams {
        for member in bigram.members() {
            *reductions.entry(member).or_insert(0) += count;
        }
    }

    let mut adjusted: RankedList<Token> = unigrams
        .into_iter()
        .filter_map(|(word, count)| {
            let reduced = count.saturating_sub(reductions.get(word.as_str()).copied().unwrap_or(0));
            (reduced > 0).then_some((word, reduced))
        })
        .collect();

    adjusted.sort_by(|a, b| b.1.cmp(&a.1));
    adjusted
}
