use async_trait::async_trait;
use hostkeep_application::ports::{BackupDestination, BackupWriter};
use hostkeep_domain::BackupError;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument, warn};

/// Writes backups as a file inside a directory.
///
/// The content is first written to a hidden `.partial` sibling and renamed
/// over the target once synced. The partial file is removed whenever the
/// writer ends without a successful rename.
pub struct FileBackupDestination {
    directory: PathBuf,
    file_name: String,
}

impl FileBackupDestination {
    pub fn new(directory: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_name: file_name.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    fn partial_path(&self) -> PathBuf {
        self.directory.join(format!(".{}.partial", self.file_name))
    }

    fn unavailable(&self, reason: impl std::fmt::Display) -> BackupError {
        BackupError::DestinationUnavailable(format!("{}: {}", self.directory.display(), reason))
    }
}

#[async_trait]
impl BackupDestination for FileBackupDestination {
    /// Creating the partial file is the writability check: a destination
    /// that cannot hold it is unavailable before anything is read.
    #[instrument(skip(self), fields(directory = %self.directory.display()))]
    async fn open(&self) -> Result<Box<dyn BackupWriter>, BackupError> {
        let metadata = tokio::fs::metadata(&self.directory)
            .await
            .map_err(|e| self.unavailable(e))?;
        if !metadata.is_dir() {
            return Err(self.unavailable("not a directory"));
        }

        let partial = self.partial_path();
        let file = File::create(&partial)
            .await
            .map_err(|e| self.unavailable(e))?;

        debug!("Backup destination acquired");
        Ok(Box::new(FileBackupWriter {
            file: Some(file),
            target: self.path(),
            partial,
            committed: false,
        }))
    }

    fn describe(&self) -> String {
        self.path().display().to_string()
    }
}

struct FileBackupWriter {
    file: Option<File>,
    target: PathBuf,
    partial: PathBuf,
    committed: bool,
}

impl FileBackupWriter {
    async fn write_and_replace(&mut self, contents: &[u8]) -> Result<(), BackupError> {
        let mut file = self
            .file
            .take()
            .ok_or_else(|| io_error(&self.partial, "backup file already written"))?;
        write_synced(&mut file, &self.partial, contents).await?;
        drop(file);

        tokio::fs::rename(&self.partial, &self.target)
            .await
            .map_err(|e| io_error(&self.target, e))
    }
}

#[async_trait]
impl BackupWriter for FileBackupWriter {
    async fn write_all(self: Box<Self>, contents: &[u8]) -> Result<(), BackupError> {
        let mut writer = self;
        writer.write_and_replace(contents).await?;
        writer.committed = true;
        Ok(())
    }
}

impl Drop for FileBackupWriter {
    // Runs on every failure path, including a writer dropped unused.
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        self.file = None;
        if let Err(e) = std::fs::remove_file(&self.partial) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(
                    error = %e,
                    path = %self.partial.display(),
                    "Failed to remove partial backup"
                );
            }
        }
    }
}

async fn write_synced(file: &mut File, path: &Path, contents: &[u8]) -> Result<(), BackupError> {
    file.write_all(contents)
        .await
        .map_err(|e| io_error(path, e))?;
    file.flush().await.map_err(|e| io_error(path, e))?;
    file.sync_all().await.map_err(|e| io_error(path, e))?;
    Ok(())
}

fn io_error(path: &Path, e: impl std::fmt::Display) -> BackupError {
    BackupError::Io(format!("{}: {}", path.display(), e))
}
