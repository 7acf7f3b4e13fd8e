#![allow(dead_code)]

use async_trait::async_trait;
use hostkeep_application::ports::{
    BackupDestination, BackupSource, BackupWriter, HostListItemRepository, HostsSourceRepository,
};
use hostkeep_application::use_cases::{ExportBackupUseCase, ImportBackupUseCase};
use hostkeep_domain::{BackupError, DomainError, HostListItem, HostsSource, ListType};
use hostkeep_jobs::BackupRunner;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Notify, RwLock};

// ============================================================================
// In-memory storage
// ============================================================================

#[derive(Clone, Default)]
pub struct MockStore {
    sources: Arc<RwLock<Vec<HostsSource>>>,
    items: Arc<RwLock<Vec<HostListItem>>>,
}

impl MockStore {
    pub async fn seeded() -> Self {
        let store = Self::default();
        store
            .sources
            .write()
            .await
            .push(HostsSource::new("https://example.com/hosts", true));
        store.items.write().await.extend([
            HostListItem::new("ads.example.com", ListType::Block, true),
            HostListItem::new("good.example.com", ListType::Allow, false),
            HostListItem::redirected("track.example.com", "0.0.0.0", true),
        ]);
        store
    }

    pub async fn counts(&self) -> (usize, usize) {
        (self.sources.read().await.len(), self.items.read().await.len())
    }
}

#[async_trait]
impl HostsSourceRepository for MockStore {
    async fn get_all(&self) -> Result<Vec<HostsSource>, DomainError> {
        Ok(self.sources.read().await.clone())
    }

    async fn insert(&self, source: &HostsSource) -> Result<HostsSource, DomainError> {
        self.sources.write().await.push(source.clone());
        Ok(source.clone())
    }
}

#[async_trait]
impl HostListItemRepository for MockStore {
    async fn get_all(&self) -> Result<Vec<HostListItem>, DomainError> {
        Ok(self.items.read().await.clone())
    }

    async fn insert(&self, item: &HostListItem) -> Result<HostListItem, DomainError> {
        self.items.write().await.push(item.clone());
        Ok(item.clone())
    }
}

// ============================================================================
// In-memory backup medium
// ============================================================================

/// Backup medium shared by export and import. When `gate` is set, writes
/// wait until it is notified.
#[derive(Clone, Default)]
pub struct MockMedium {
    files: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    read_only: bool,
    panics: bool,
    gate: Option<Arc<Notify>>,
}

pub const EXPORT_LOCATION: &str = "memory://backup.json";

impl MockMedium {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Medium whose writer panics mid-export
    pub fn panicking() -> Self {
        Self {
            panics: true,
            ..Self::default()
        }
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub async fn put(&self, location: &str, contents: &str) {
        self.files
            .write()
            .await
            .insert(location.to_string(), contents.as_bytes().to_vec());
    }

    pub async fn get(&self, location: &str) -> Option<Vec<u8>> {
        self.files.read().await.get(location).cloned()
    }
}

struct MockWriter {
    medium: MockMedium,
}

#[async_trait]
impl BackupWriter for MockWriter {
    async fn write_all(self: Box<Self>, contents: &[u8]) -> Result<(), BackupError> {
        if let Some(gate) = &self.medium.gate {
            gate.notified().await;
        }
        if self.medium.panics {
            panic!("medium failure");
        }
        self.medium
            .files
            .write()
            .await
            .insert(EXPORT_LOCATION.to_string(), contents.to_vec());
        Ok(())
    }
}

#[async_trait]
impl BackupDestination for MockMedium {
    async fn open(&self) -> Result<Box<dyn BackupWriter>, BackupError> {
        if self.read_only {
            return Err(BackupError::DestinationUnavailable("read-only".to_string()));
        }
        Ok(Box::new(MockWriter {
            medium: self.clone(),
        }))
    }

    fn describe(&self) -> String {
        EXPORT_LOCATION.to_string()
    }
}

#[async_trait]
impl BackupSource for MockMedium {
    async fn read_backup(&self, location: &str) -> Result<Vec<u8>, BackupError> {
        self.get(location)
            .await
            .ok_or_else(|| BackupError::SourceUnavailable(location.to_string()))
    }
}

pub fn make_runner(store: &MockStore, medium: &MockMedium) -> BackupRunner {
    let export = ExportBackupUseCase::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(medium.clone()),
    );
    let import = ImportBackupUseCase::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(medium.clone()),
    );
    BackupRunner::new(Arc::new(export), Arc::new(import))
}
