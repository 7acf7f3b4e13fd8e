use async_trait::async_trait;
use hostkeep_domain::{DomainError, HostListItem, HostsSource};

/// Store able to append a whole imported backup as one unit of work.
#[async_trait]
pub trait BackupImportStore: Send + Sync {
    /// Inserts all sources then all items. Either every record is stored or,
    /// on error, none is.
    async fn insert_all(
        &self,
        sources: &[HostsSource],
        items: &[HostListItem],
    ) -> Result<(), DomainError>;
}
