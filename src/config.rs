//! Extractor configuration.
//!
//! [`ExtractorConfig`] holds the values the core consumes: top-N caps, the
//! ignore list, the adjustment toggle, and the stop-word language. It is
//! `serde`-deserializable so callers can load it straight from JSON.
//!
//! Validation runs once, before the batch starts, and collects every
//! problem instead of stopping at the first — a bad config is fatal, so the
//! user should see the whole list at once.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Configuration values consumed by the extraction core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Per-document top-N cap.
    pub num_keywords_per_file: usize,

    /// Corpus-wide top-N cap.
    pub num_keywords_total: usize,

    /// User-excluded tokens, matched against the lowercased surface form.
    #[serde(default)]
    pub ignore_words: Vec<String>,

    /// Enable the bigram-overlap unigram correction pass.
    #[serde(default)]
    pub adjust_unigrams_based_on_bigrams: bool,

    /// Stop-word language code (e.g. "en", "de").
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            num_keywords_per_file: 20,
            num_keywords_total: 30,
            ignore_words: Vec::new(),
            adjust_unigrams_based_on_bigrams: false,
            language: default_language(),
        }
    }
}

impl ExtractorConfig {
    /// Validate the configuration, returning every violation at once.
    ///
    /// Must be called before processing starts; violations are fatal.
    pub fn validate(&self) -> Result<(), Error> {
        let mut problems = Vec::new();

        if self.num_keywords_per_file == 0 {
            problems.push("num_keywords_per_file must be at least 1".to_string());
        }
        if self.num_keywords_total == 0 {
            problems.push("num_keywords_total must be at least 1".to_string());
        }
        for word in &self.ignore_words {
            if word.trim().is_empty() {
                problems.push("ignore_words must not contain blank entries".to_string());
            } else if word.chars().any(char::is_whitespace) {
                problems.push(format!(
                    "ignore word {word:?} contains whitespace; ignore words are single tokens"
                ));
            }
        }
        if self.language.trim().is_empty() {
            problems.push("language must not be empty".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::Config(problems.join("; ")))
        }
    }
}
