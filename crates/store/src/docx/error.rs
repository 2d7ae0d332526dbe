//! Error types for DOCX packaging

use thiserror::Error;

/// Errors that can occur while packaging a DOCX file
#[derive(Debug, Error)]
pub enum DocxError {
    /// IO error while writing the package
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The element sequence was empty; packagers reject empty documents
    #[error("Refusing to package an empty document")]
    EmptyDocument,
}

/// Result type for DOCX operations
pub type DocxResult<T> = std::result::Result<T, DocxError>;
