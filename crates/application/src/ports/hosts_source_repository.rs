use async_trait::async_trait;
use hostkeep_domain::{DomainError, HostsSource};

/// Repository interface for subscribed hosts sources.
#[async_trait]
pub trait HostsSourceRepository: Send + Sync {
    /// Retrieves every stored hosts source, in storage order.
    async fn get_all(&self) -> Result<Vec<HostsSource>, DomainError>;

    /// Appends a hosts source.
    ///
    /// # Returns
    ///
    /// * `Ok(HostsSource)` - The stored source with its generated ID
    /// * `Err(DomainError)` - If the store rejects the record
    async fn insert(&self, source: &HostsSource) -> Result<HostsSource, DomainError>;
}
