//! Batch runner — drives the per-page and per-document stages.
//!
//! For each document, each page passes through the reference-page
//! classifier (reject or keep), the normalizer (keep produces tokens), and
//! the n-gram counter. When the document's pages are exhausted its top-N
//! lists are extracted, adjusted if configured, and folded into the corpus
//! aggregator in a single accumulation call. Documents are independent up
//! to that merge point, which is what makes the parallel path safe.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::adjust::adjust_unigrams;
use crate::classify::ReferencePageClassifier;
use crate::config::ExtractorConfig;
use crate::corpus::{CorpusAggregator, CorpusSummary};
use crate::error::Result;
use crate::ngram::DocumentCounter;
use crate::nlp::{EnglishLemmatizer, Lemmatizer, StopwordFilter, TextNormalizer};
use crate::pipeline::DocumentReader;
use crate::types::DocumentAnalysis;

/// Owns the configured stages and runs document batches through them.
pub struct BatchRunner {
    config: ExtractorConfig,
    normalizer: TextNormalizer,
    classifier: ReferencePageClassifier,
}

impl BatchRunner {
    /// Build a runner from a validated configuration, with the rule-based
    /// English lemmatizer.
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        Self::with_lemmatizer(config, Box::new(EnglishLemmatizer::new()))
    }

    /// Build a runner with a caller-chosen lemmatizer.
    ///
    /// Fails fast on configuration errors; nothing is processed until the
    /// config passes validation.
    pub fn with_lemmatizer(
        config: ExtractorConfig,
        lemmatizer: Box<dyn Lemmatizer>,
    ) -> Result<Self> {
        config.validate()?;
        let stopwords = StopwordFilter::for_language(&config.language);
        let ignore_words = config
            .ignore_words
            .iter()
            .map(|w| w.to_lowercase())
            .collect();
        let normalizer = TextNormalizer::new(stopwords, ignore_words, lemmatizer);
        Ok(Self {
            config,
            normalizer,
            classifier: ReferencePageClassifier::new(),
        })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Analyze one document's pages into its top-N lists.
    ///
    /// Reference pages are rejected; accepted page indices are recorded in
    /// order. A document where every page is rejected yields empty lists —
    /// a degenerate input, not an error.
    pub fn analyze_pages(&self, doc_id: &str, pages: &[String]) -> DocumentAnalysis {
        let mut counter = DocumentCounter::new();

        for (index, page) in pages.iter().enumerate() {
            if self.classifier.classify(page) {
                debug!(doc_id, page = index, "rejected reference page");
                continue;
            }
            let tokens = self.normalizer.normalize(page);
            counter.absorb_page(index, &tokens, self.normalizer.ignore_words());
        }

        let (unigrams, bigrams) = counter.top(self.config.num_keywords_per_file);
        let unigrams = if self.config.adjust_unigrams_based_on_bigrams {
            adjust_unigrams(unigrams, &bigrams)
        } else {
            unigrams
        };

        info!(
            doc_id,
            pages = pages.len(),
            pages_used = counter.pages_used().len(),
            "analyzed document"
        );

        DocumentAnalysis {
            doc_id: doc_id.to_string(),
            unigrams,
            bigrams,
            pages_used: counter.pages_used().to_vec(),
        }
    }

    /// Process documents one at a time and aggregate corpus-wide.
    ///
    /// Unreadable documents are skipped with a warning; the batch
    /// continues. Documents are accumulated in input order.
    pub fn run<R: DocumentReader>(&self, reader: &R, documents: &[PathBuf]) -> CorpusSummary {
        let mut aggregator = CorpusAggregator::new();
        for path in documents {
            match reader.read_pages(path) {
                Ok(pages) => {
                    let analysis = self.analyze_pages(&doc_id_of(path), &pages);
                    fold(&mut aggregator, &analysis);
                }
                Err(err) => warn!(path = %path.display(), %err, "skipping unreadable document"),
            }
        }
        aggregator.finalize(self.config.num_keywords_total)
    }

    /// Like [`run`](Self::run), with per-document analysis on the rayon
    /// pool. Accumulation stays sequential and in input order, so the
    /// output is identical to the sequential path.
    pub fn run_parallel<R: DocumentReader>(
        &self,
        reader: &R,
        documents: &[PathBuf],
    ) -> CorpusSummary {
        let analyses: Vec<Option<DocumentAnalysis>> = documents
            .par_iter()
            .map(|path| match reader.read_pages(path) {
                Ok(pages) => Some(self.analyze_pages(&doc_id_of(path), &pages)),
                Err(err) => {
                    warn!(path = %path.display(), %err, "skipping unreadable document");
                    None
                }
            })
            .collect();

        let mut aggregator = CorpusAggregator::new();
        for analysis in analyses.iter().flatten() {
            fold(&mut aggregator, analysis);
        }
        aggregator.finalize(self.config.num_keywords_total)
    }
}

fn fold(aggregator: &mut CorpusAggregator, analysis: &DocumentAnalysis) {
    aggregator.accumulate(
        &analysis.unigrams,
        &analysis.bigrams,
        &analysis.doc_id,
        &analysis.pages_used,
    );
}

fn doc_id_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::Bigram;
    use rustc_hash::FxHashMap;

    /// In-memory reader keyed by file name.
    struct MapReader {
        docs: FxHashMap<String, Vec<String>>,
    }

    impl MapReader {
        fn new(docs: &[(&str, &[&str])]) -> Self {
            Self {
                docs: docs
                    .iter()
                    .map(|(id, pages)| {
                        (
                            id.to_string(),
                            pages.iter().map(|p| p.to_string()).collect(),
                        )
                    })
                    .collect(),
            }
        }
    }

    impl DocumentReader for MapReader {
        fn read_pages(&self, path: &Path) -> Result<Vec<String>> {
            self.docs
                .get(&doc_id_of(path))
                .cloned()
                .ok_or_else(|| Error::DocumentRead {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such doc"),
                })
        }
    }

    fn runner(ignore: &[&str], adjust: bool) -> BatchRunner {
        let config = ExtractorConfig {
            num_keywords_per_file: 10,
            num_keywords_total: 10,
            ignore_words: ignore.iter().map(|s| s.to_string()).collect(),
            adjust_unigrams_based_on_bigrams: adjust,
            language: "en".to_string(),
        };
        BatchRunner::new(config).unwrap()
    }

    fn reference_page() -> String {
        "1999 2001 2003 2004 2005 2006 doi: doi: doi: doi: doi: doi:".to_string()
    }

    #[test]
    fn test_invalid_config_rejected_before_processing() {
        let config = ExtractorConfig {
            num_keywords_total: 0,
            ..Default::default()
        };
        assert!(BatchRunner::new(config).is_err());
    }

    #[test]
    fn test_analyze_pages_counts_and_logs_pages() {
        let r = runner(&[], false);
        let pages = vec![
            "graph theory and graph coloring".to_string(),
            reference_page(),
            "graph theory again".to_string(),
        ];
        let analysis = r.analyze_pages("doc.txt", &pages);

        assert_eq!(analysis.pages_used, vec![0, 2]);
        let graph = analysis
            .unigrams
            .iter()
            .find(|(w, _)| w == "graph")
            .unwrap();
        assert_eq!(graph.1, 3);
        let gt = analysis
            .bigrams
            .iter()
            .find(|(b, _)| *b == Bigram::new("graph", "theory"))
            .unwrap();
        assert_eq!(gt.1, 2);
    }

    #[test]
    fn test_all_pages_rejected_yields_empty_analysis() {
        let r = runner(&[], false);
        let pages = vec![reference_page(), reference_page()];
        let analysis = r.analyze_pages("refs.txt", &pages);
        assert!(analysis.unigrams.is_empty());
        assert!(analysis.bigrams.is_empty());
        assert!(analysis.pages_used.is_empty());
    }

    #[test]
    fn test_adjustment_applies_per_document() {
        let r = runner(&[], true);
        let pages = vec!["design pattern design pattern design".to_string()];
        let analysis = r.analyze_pages("doc.txt", &pages);

        // design:3, pattern:2; pairs (design,pattern):2 and
        // (pattern,design):2 subtract 4 from each member, so both
        // unigrams clamp to zero and drop out.
        assert!(analysis.unigrams.is_empty());
        assert_eq!(analysis.bigrams.len(), 2);
    }

    #[test]
    fn test_run_skips_unreadable_documents() {
        let reader = MapReader::new(&[("a.txt", &["alpha beta alpha"])]);
        let r = runner(&[], false);
        let docs = vec![PathBuf::from("a.txt"), PathBuf::from("missing.txt")];
        let summary = r.run(&reader, &docs);

        assert_eq!(summary.log.len(), 1);
        assert!(summary.log.pages_for("missing.txt").is_none());
        assert_eq!(summary.unigrams[0], ("alpha".to_string(), 2));
    }

    #[test]
    fn test_parallel_run_matches_sequential() {
        let reader = MapReader::new(&[
            ("a.txt", &["graph theory graph"]),
            ("b.txt", &["graph coloring proof"]),
            ("c.txt", &["proof theory"]),
        ]);
        let r = runner(&[], false);
        let docs = vec![
            PathBuf::from("a.txt"),
            PathBuf::from("b.txt"),
            PathBuf::from("c.txt"),
        ];

        let sequential = r.run(&reader, &docs);
        let parallel = r.run_parallel(&reader, &docs);

        assert_eq!(sequential.unigrams, parallel.unigrams);
        assert_eq!(sequential.bigrams, parallel.bigrams);
        assert_eq!(sequential.combined, parallel.combined);
    }

    #[test]
    fn test_ignore_words_excluded_everywhere() {
        let r = runner(&["figure"], false);
        let pages = vec!["figure one shows figure two".to_string()];
        let analysis = r.analyze_pages("doc.txt", &pages);
        assert!(analysis.unigrams.iter().all(|(w, _)| w != "figure"));
        assert!(analysis
            .bigrams
            .iter()
            .all(|(b, _)| b.first != "figure" && b.second != "figure"));
    }
}
