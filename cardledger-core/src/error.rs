use std::path::PathBuf;

/// Conditions that abort a run
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Missing file: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("No transactions found.")]
    NoTransactions,

    #[error("PDF extraction failed: {0}")]
    PdfExtraction(String),

    #[error("invalid keyword map {}: {reason}", path.display())]
    Mapping { path: PathBuf, reason: String },

    #[error("invalid config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

/// Abort with [`LedgerError::MissingFile`] unless `path` exists
pub fn require_file(path: &std::path::Path) -> Result<(), LedgerError> {
    if path.exists() {
        Ok(())
    } else {
        Err(LedgerError::MissingFile {
            path: path.to_path_buf(),
        })
    }
}
