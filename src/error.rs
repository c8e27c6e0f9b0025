//! Crate-wide error type.
//!
//! Configuration problems are fatal and surface before any document is
//! processed; per-document read failures are recoverable at the batch level
//! (the runner skips the document and continues).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration, detected by up-front validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A document could not be read or split into pages.
    #[error("failed to read document {}: {source}", .path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// General I/O failure outside of per-document reads (e.g. writing
    /// a report file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
