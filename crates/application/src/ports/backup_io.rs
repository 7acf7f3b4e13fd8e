use async_trait::async_trait;
use hostkeep_domain::BackupError;

/// Target medium of an export.
#[async_trait]
pub trait BackupDestination: Send + Sync {
    /// Acquires a write handle on the destination.
    ///
    /// # Errors
    ///
    /// * `BackupError::DestinationUnavailable` - If the medium cannot be written
    async fn open(&self) -> Result<Box<dyn BackupWriter>, BackupError>;

    /// Human readable location, used in logs
    fn describe(&self) -> String;
}

/// Scoped write handle returned by [`BackupDestination::open`].
///
/// `write_all` consumes the handle: it is closed once the call returns,
/// whether the write succeeded or not.
#[async_trait]
pub trait BackupWriter: Send {
    async fn write_all(self: Box<Self>, contents: &[u8]) -> Result<(), BackupError>;
}

/// Origin of an import.
#[async_trait]
pub trait BackupSource: Send + Sync {
    /// Reads the whole content behind `location` into memory.
    ///
    /// # Errors
    ///
    /// * `BackupError::SourceUnavailable` - If the location cannot be opened or read
    async fn read_backup(&self, location: &str) -> Result<Vec<u8>, BackupError>;
}
