use thiserror::Error;
use uuid::Uuid;

/// Error type that captures common ledger and store failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Section index {index} out of range (have {len} sections)")]
    SectionOutOfRange { index: usize, len: usize },
    #[error("Item index {index} out of range (section has {len} items)")]
    ItemOutOfRange { index: usize, len: usize },
    #[error("Document not found: {0}")]
    DocumentNotFound(Uuid),
}
