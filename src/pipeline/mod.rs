//! Batch pipeline: document reading boundary and the batch runner.
//!
//! The [`DocumentReader`] trait is the seam to the external page-extraction
//! collaborator; [`runner::BatchRunner`] drives classification,
//! normalization, counting, adjustment, and corpus aggregation.

pub mod runner;

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

pub use runner::BatchRunner;

/// Yields one text blob per physical page of a document.
///
/// Implementations wrap whatever binary format the corpus uses (PDF,
/// OCR output, plain text). A failed read means "skip this document";
/// the runner never aborts the batch over a single document.
pub trait DocumentReader: Sync {
    fn read_pages(&self, path: &Path) -> Result<Vec<String>>;
}

/// Reads plain-text documents, one file per document, pages separated by
/// form feed. A file without form feeds is a single page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextReader;

impl DocumentReader for PlainTextReader {
    fn read_pages(&self, path: &Path) -> Result<Vec<String>> {
        let content = fs::read_to_string(path).map_err(|source| Error::DocumentRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(content.split('\u{0C}').map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_plain_text_reader_splits_pages() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "page one\u{0C}page two\u{0C}page three").unwrap();

        let pages = PlainTextReader.read_pages(file.path()).unwrap();
        assert_eq!(pages, vec!["page one", "page two", "page three"]);
    }

    #[test]
    fn test_plain_text_reader_single_page() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "just one page").unwrap();

        let pages = PlainTextReader.read_pages(file.path()).unwrap();
        assert_eq!(pages, vec!["just one page"]);
    }

    #[test]
    fn test_missing_file_is_document_read_error() {
        let err = PlainTextReader
            .read_pages(Path::new("/nonexistent/doc.txt"))
            .unwrap_err();
        assert!(matches!(err, Error::DocumentRead { .. }));
    }
}
