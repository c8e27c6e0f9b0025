//! keygram — corpus keyword extraction.
//!
//! Extracts the most frequent unigrams and bigrams from a corpus of
//! documents, suppressing bibliographic reference pages, and aggregates
//! the statistics corpus-wide with deterministic top-N selection.
//!
//! # Pipeline
//!
//! Per document, each page's raw text flows through:
//!
//! 1. [`classify::ReferencePageClassifier`] — reject citation-heavy pages
//! 2. [`nlp::TextNormalizer`] — lowercase, segment, filter, lemmatize
//! 3. [`ngram`] — unigram/bigram counting into per-document tables
//!
//! After a document's pages are exhausted its top-N lists are extracted,
//! optionally corrected by [`adjust::adjust_unigrams`] so words that are
//! frequent mainly as bigram members are not double-credited, and folded
//! into the [`corpus::CorpusAggregator`]. Finalization yields corpus-wide
//! unigram, bigram, and combined rankings plus a page-usage log.
//!
//! # Example
//!
//! ```no_run
//! use keygram::{BatchRunner, ExtractorConfig, PlainTextReader};
//! use std::path::PathBuf;
//!
//! let config = ExtractorConfig::default();
//! let runner = BatchRunner::new(config)?;
//! let docs = vec![PathBuf::from("corpus/paper.txt")];
//! let summary = runner.run(&PlainTextReader, &docs);
//! for (word, count) in &summary.unigrams {
//!     println!("{word}: {count}");
//! }
//! # Ok::<(), keygram::Error>(())
//! ```

pub mod adjust;
pub mod classify;
pub mod config;
pub mod corpus;
pub mod error;
pub mod freq;
pub mod ngram;
pub mod nlp;
pub mod pipeline;
pub mod report;
pub mod types;

pub use classify::ReferencePageClassifier;
pub use config::ExtractorConfig;
pub use corpus::{CorpusAggregator, CorpusSummary, PageUsageLog};
pub use error::{Error, Result};
pub use freq::FrequencyTable;
pub use nlp::{EnglishLemmatizer, Lemmatizer, SnowballLemmatizer, TextNormalizer};
pub use pipeline::{BatchRunner, DocumentReader, PlainTextReader};
pub use types::{Bigram, DocumentAnalysis, RankedList, Token};
