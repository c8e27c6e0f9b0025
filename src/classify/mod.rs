//! Reference-page detection
//!
//! A page dominated by bibliographic patterns (publication years, DOIs,
//! arXiv ids, URLs) is excluded from keyword counting. The heuristic runs
//! on the raw page text, before any normalization: the doi/arXiv/http
//! markers are case-sensitive literals and years are standalone 4-digit
//! runs.
//!
//! Known limitation, preserved on purpose: a page that is half narrative
//! and half citations is classified whole — there is no partial retention.

use regex::Regex;
use std::sync::LazyLock;

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{4}\b").expect("year pattern"));
static DOI: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"doi:").expect("doi pattern"));
static ARXIV: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"arXiv").expect("arxiv pattern"));
static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?:").expect("url pattern"));

/// Occurrence threshold: an indicator counts only when seen strictly more
/// than this many times.
const THRESHOLD: usize = 5;

/// Decides whether a page is reference/bibliography matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferencePageClassifier;

impl ReferencePageClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Returns `true` if the page should be excluded from counting.
    ///
    /// A page is a reference page iff it contains more than five 4-digit
    /// year tokens and more than five of at least one secondary indicator
    /// (`doi:`, `arXiv`, or a URL scheme prefix). Pure function of the
    /// text.
    pub fn classify(&self, page_text: &str) -> bool {
        let years = YEAR.find_iter(page_text).count();
        if years <= THRESHOLD {
            return false;
        }
        let dois = DOI.find_iter(page_text).count();
        let arxivs = ARXIV.find_iter(page_text).count();
        let urls = URL.find_iter(page_text).count();
        dois > THRESHOLD || arxivs > THRESHOLD || urls > THRESHOLD
    }
}
