use hostkeep_domain::{DomainError, HostListItem, HostsSource, ListType};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::{HostListItemRepository, HostsSourceRepository};

#[derive(Debug, Clone, Default)]
pub struct HostLists {
    pub sources: Vec<HostsSource>,
    pub items: Vec<HostListItem>,
}

impl HostLists {
    pub fn items_of(&self, list_type: ListType) -> impl Iterator<Item = &HostListItem> {
        self.items
            .iter()
            .filter(move |item| item.list_type == list_type)
    }
}

pub struct GetHostListsUseCase {
    source_repo: Arc<dyn HostsSourceRepository>,
    item_repo: Arc<dyn HostListItemRepository>,
}

impl GetHostListsUseCase {
    pub fn new(
        source_repo: Arc<dyn HostsSourceRepository>,
        item_repo: Arc<dyn HostListItemRepository>,
    ) -> Self {
        Self {
            source_repo,
            item_repo,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<HostLists, DomainError> {
        Ok(HostLists {
            sources: self.source_repo.get_all().await?,
            items: self.item_repo.get_all().await?,
        })
    }
}
