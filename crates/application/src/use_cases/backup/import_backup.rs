use hostkeep_domain::{BackupError, BackupSummary, ImportMode};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::ports::{
    BackupImportStore, BackupSource, HostListItemRepository, HostsSourceRepository,
};
use crate::services::{decode_document, parse_backup, ParsedBackup};

/// Use case restoring hosts sources and host list items from a backup.
///
/// Import only appends: existing records are never updated, deleted or
/// compared against the imported ones.
pub struct ImportBackupUseCase {
    source_repo: Arc<dyn HostsSourceRepository>,
    item_repo: Arc<dyn HostListItemRepository>,
    backup_source: Arc<dyn BackupSource>,
    import_store: Option<Arc<dyn BackupImportStore>>,
}

impl ImportBackupUseCase {
    pub fn new(
        source_repo: Arc<dyn HostsSourceRepository>,
        item_repo: Arc<dyn HostListItemRepository>,
        backup_source: Arc<dyn BackupSource>,
    ) -> Self {
        Self {
            source_repo,
            item_repo,
            backup_source,
            import_store: None,
        }
    }

    /// Switches to [`ImportMode::Atomic`]: records are written through
    /// `store` in a single unit of work.
    pub fn with_import_store(mut self, store: Arc<dyn BackupImportStore>) -> Self {
        self.import_store = Some(store);
        self
    }

    pub fn mode(&self) -> ImportMode {
        if self.import_store.is_some() {
            ImportMode::Atomic
        } else {
            ImportMode::BestEffort
        }
    }

    /// Imports the backup found at `location`.
    ///
    /// The whole document is read and parsed before the first insert, so a
    /// read or parse failure leaves storage untouched. In best effort mode an
    /// insert failure stops the import and keeps what was already inserted.
    #[instrument(skip(self))]
    pub async fn execute(&self, location: &str) -> Result<BackupSummary, BackupError> {
        let contents = self.backup_source.read_backup(location).await?;
        let document = decode_document(&contents)?;
        let parsed = parse_backup(&document)?;

        let summary = parsed.summary();
        debug!(
            sources = summary.sources,
            items = summary.total_items(),
            mode = ?self.mode(),
            "Backup parsed"
        );

        match &self.import_store {
            Some(store) => store.insert_all(&parsed.sources, &parsed.items).await?,
            None => self.insert_each(&parsed).await?,
        }

        info!(
            location = %location,
            sources = summary.sources,
            blocked = summary.blocked,
            allowed = summary.allowed,
            redirected = summary.redirected,
            "Backup imported successfully"
        );

        Ok(summary)
    }

    async fn insert_each(&self, parsed: &ParsedBackup) -> Result<(), BackupError> {
        let mut inserted = 0usize;

        for source in &parsed.sources {
            if let Err(e) = self.source_repo.insert(source).await {
                warn!(
                    inserted,
                    url = %source.url,
                    error = %e,
                    "Hosts source insert failed, import stopped"
                );
                return Err(BackupError::Storage(format!(
                    "{} ({} records already inserted)",
                    e, inserted
                )));
            }
            inserted += 1;
        }

        for item in &parsed.items {
            if let Err(e) = self.item_repo.insert(item).await {
                warn!(
                    inserted,
                    host = %item.host,
                    error = %e,
                    "Host list item insert failed, import stopped"
                );
                return Err(BackupError::Storage(format!(
                    "{} ({} records already inserted)",
                    e, inserted
                )));
            }
            inserted += 1;
        }

        Ok(())
    }
}
