use hostkeep_domain::{BackupError, BackupSummary};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::{BackupDestination, HostListItemRepository, HostsSourceRepository};
use crate::services::{build_backup, render_document};

/// Use case writing every hosts source and host list item to a backup.
pub struct ExportBackupUseCase {
    source_repo: Arc<dyn HostsSourceRepository>,
    item_repo: Arc<dyn HostListItemRepository>,
    destination: Arc<dyn BackupDestination>,
}

impl ExportBackupUseCase {
    pub fn new(
        source_repo: Arc<dyn HostsSourceRepository>,
        item_repo: Arc<dyn HostListItemRepository>,
        destination: Arc<dyn BackupDestination>,
    ) -> Self {
        Self {
            source_repo,
            item_repo,
            destination,
        }
    }

    /// Exports the backup.
    ///
    /// The destination is acquired first; nothing is read from storage when
    /// it is not writable.
    ///
    /// # Errors
    ///
    /// * `BackupError::DestinationUnavailable` - If the destination cannot be written
    /// * `BackupError::Storage` - If the stored lists cannot be read
    /// * `BackupError::Encoding` - If a stored entity is malformed
    /// * `BackupError::Io` - If writing the rendered backup fails
    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<BackupSummary, BackupError> {
        let writer = self.destination.open().await?;

        let sources = self.source_repo.get_all().await?;
        let items = self.item_repo.get_all().await?;
        debug!(
            sources = sources.len(),
            items = items.len(),
            "Loaded hosts lists for export"
        );

        let document = build_backup(&sources, &items)?;
        let contents = render_document(&document)?;
        writer.write_all(&contents).await?;

        let summary = document.summary();
        info!(
            destination = %self.destination.describe(),
            sources = summary.sources,
            blocked = summary.blocked,
            allowed = summary.allowed,
            redirected = summary.redirected,
            bytes = contents.len(),
            "Backup exported successfully"
        );

        Ok(summary)
    }
}
