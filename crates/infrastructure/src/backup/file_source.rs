use async_trait::async_trait;
use hostkeep_application::ports::BackupSource;
use hostkeep_domain::BackupError;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::{debug, instrument};

/// Reads backups from the filesystem; the location is a file path.
#[derive(Debug, Default)]
pub struct FileBackupSource;

impl FileBackupSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BackupSource for FileBackupSource {
    #[instrument(skip(self))]
    async fn read_backup(&self, location: &str) -> Result<Vec<u8>, BackupError> {
        let unavailable = |e: std::io::Error| {
            BackupError::SourceUnavailable(format!("{}: {}", location, e))
        };

        let mut file = File::open(location).await.map_err(unavailable)?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).await.map_err(unavailable)?;

        debug!(bytes = contents.len(), "Backup read");
        Ok(contents)
    }
}
