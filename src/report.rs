//! Plain-text report rendering.
//!
//! The core hands over a read-only [`CorpusSummary`]; these helpers render
//! it into the keywords file and the analysis log the CLI writes. Word
//! clouds and charts are out of scope.

use std::fmt::Write as _;

use crate::corpus::{CorpusSummary, PageUsageLog};

/// Render the three rankings as a sectioned keywords report.
pub fn render_keywords(summary: &CorpusSummary) -> String {
    let mut out = String::new();

    out.push_str("Unigram Frequency\n\n");
    for (word, count) in &summary.unigrams {
        let _ = writeln!(out, "{word}: {count}");
    }
    out.push('\n');

    out.push_str("Bigram Frequency\n\n");
    for (bigram, count) in &summary.bigrams {
        let _ = writeln!(out, "{bigram}: {count}");
    }
    out.push('\n');

    out.push_str("Combined Keyword Frequency\n\n");
    for (keyword, count) in &summary.combined {
        let _ = writeln!(out, "{keyword}: {count}");
    }
    out.push('\n');

    out
}

/// Render the per-document page-usage log, one document per line.
pub fn render_analysis_log(log: &PageUsageLog) -> String {
    let mut out = String::new();
    for (doc_id, pages) in log.iter() {
        let _ = writeln!(out, "{doc_id}: Pages used for analysis - {pages:?}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusAggregator;
    use crate::types::Bigram;

    fn sample_summary() -> CorpusSummary {
        let mut agg = CorpusAggregator::new();
        agg.accumulate(
            &vec![("graph".to_string(), 5)],
            &vec![(Bigram::new("graph", "theory"), 3)],
            "paper.txt",
            &[0, 2],
        );
        agg.finalize(10)
    }

    #[test]
    fn test_keywords_report_sections() {
        let report = render_keywords(&sample_summary());
        assert!(report.contains("Unigram Frequency\n\ngraph: 5\n"));
        assert!(report.contains("Bigram Frequency\n\ngraph theory: 3\n"));
        assert!(report.contains("Combined Keyword Frequency\n\ngraph: 5\ngraph theory: 3\n"));
    }

    #[test]
    fn test_analysis_log_lines() {
        let summary = sample_summary();
        let log = render_analysis_log(&summary.log);
        assert_eq!(log, "paper.txt: Pages used for analysis - [0, 2]\n");
    }

    #[test]
    fn test_empty_summary_renders_headers_only() {
        let summary = CorpusAggregator::new().finalize(10);
        let report = render_keywords(&summary);
        assert!(report.contains("Unigram Frequency"));
        assert!(render_analysis_log(&summary.log).is_empty());
    }
}
