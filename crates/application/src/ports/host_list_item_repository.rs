use async_trait::async_trait;
use hostkeep_domain::{DomainError, HostListItem};

/// Repository interface for user host rules of every list type.
#[async_trait]
pub trait HostListItemRepository: Send + Sync {
    /// Retrieves every stored item, in storage order, whatever its list type.
    async fn get_all(&self) -> Result<Vec<HostListItem>, DomainError>;

    /// Appends an item. The item's `list_type` is stored as given.
    async fn insert(&self, item: &HostListItem) -> Result<HostListItem, DomainError>;
}
