//! Typed error variants for the fontswap-document crate.

use thiserror::Error;

/// Errors that can occur when loading, saving, or addressing a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// An I/O error occurred reading or writing the document file.
    #[error("I/O error reading document: {0}")]
    Io(#[from] std::io::Error),

    /// The document file contained JSON that could not be parsed, or the
    /// document could not be encoded.
    #[error("JSON error in document: {0}")]
    Json(#[from] serde_json::Error),

    /// A page index outside the document was requested.
    #[error("page index {0} out of range")]
    UnknownPage(usize),
}
