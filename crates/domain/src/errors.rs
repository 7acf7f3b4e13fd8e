use crate::backup::BackupSection;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid list type: {0}")]
    InvalidListType(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Failures of the backup export and import flows.
///
/// Every variant is recovered into a plain success/failure outcome at the
/// orchestration boundary; the detail is only meant for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackupError {
    #[error("Backup destination unavailable: {0}")]
    DestinationUnavailable(String),

    #[error("Backup source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Failed to encode backup: {0}")]
    Encoding(String),

    #[error("Failed to decode backup: {0}")]
    Decoding(String),

    #[error("Backup is missing the '{section}' section")]
    MissingSection { section: BackupSection },

    #[error("Backup section '{section}' is not a list")]
    MalformedSection { section: BackupSection },

    #[error("Invalid field '{field}' in {section}[{index}]: {reason}")]
    Field {
        section: BackupSection,
        index: usize,
        field: &'static str,
        reason: String,
    },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Failed to write backup: {0}")]
    Io(String),
}

impl From<DomainError> for BackupError {
    fn from(error: DomainError) -> Self {
        BackupError::Storage(error.to_string())
    }
}
