#![allow(dead_code)]

use async_trait::async_trait;
use hostkeep_application::ports::{
    BackupDestination, BackupImportStore, BackupSource, BackupWriter, HostListItemRepository,
    HostsSourceRepository,
};
use hostkeep_domain::{BackupError, DomainError, HostListItem, HostsSource, ListType};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Fixtures
// ============================================================================

pub fn make_source(url: &str, enabled: bool) -> HostsSource {
    HostsSource::new(url, enabled)
}

pub fn make_item(host: &str, list_type: ListType, enabled: bool) -> HostListItem {
    HostListItem::new(host, list_type, enabled)
}

/// The three-item example: one blocked, one allowed, one redirected host.
pub fn sample_lists() -> (Vec<HostsSource>, Vec<HostListItem>) {
    (
        vec![make_source("https://example.com/hosts", true)],
        vec![
            make_item("ads.example.com", ListType::Block, true),
            make_item("good.example.com", ListType::Allow, false),
            HostListItem::redirected("track.example.com", "0.0.0.0", true),
        ],
    )
}

// ============================================================================
// Mock HostsSourceRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockHostsSourceRepository {
    sources: Arc<RwLock<Vec<HostsSource>>>,
    fail_on_insert: Arc<RwLock<Option<u64>>>,
    fail_get_all: Arc<RwLock<bool>>,
    insert_calls: Arc<AtomicU64>,
}

impl MockHostsSourceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_sources(sources: Vec<HostsSource>) -> Self {
        let repo = Self::new();
        *repo.sources.write().await = sources;
        repo
    }

    /// Makes the n-th insert call (1-based) fail
    pub async fn fail_on_insert(&self, call: u64) {
        *self.fail_on_insert.write().await = Some(call);
    }

    pub async fn set_fail_get_all(&self, fail: bool) {
        *self.fail_get_all.write().await = fail;
    }

    pub fn insert_calls(&self) -> u64 {
        self.insert_calls.load(Ordering::Relaxed)
    }

    pub async fn stored(&self) -> Vec<HostsSource> {
        self.sources.read().await.clone()
    }
}

#[async_trait]
impl HostsSourceRepository for MockHostsSourceRepository {
    async fn get_all(&self) -> Result<Vec<HostsSource>, DomainError> {
        if *self.fail_get_all.read().await {
            return Err(DomainError::DatabaseError("mock get_all failure".to_string()));
        }
        Ok(self.sources.read().await.clone())
    }

    async fn insert(&self, source: &HostsSource) -> Result<HostsSource, DomainError> {
        let call = self.insert_calls.fetch_add(1, Ordering::Relaxed) + 1;
        if *self.fail_on_insert.read().await == Some(call) {
            return Err(DomainError::DatabaseError("mock insert failure".to_string()));
        }

        let mut sources = self.sources.write().await;
        let mut stored = source.clone();
        stored.id = Some(sources.len() as i64 + 1);
        sources.push(stored.clone());
        Ok(stored)
    }
}

// ============================================================================
// Mock HostListItemRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockHostListItemRepository {
    items: Arc<RwLock<Vec<HostListItem>>>,
    fail_on_insert: Arc<RwLock<Option<u64>>>,
    insert_calls: Arc<AtomicU64>,
}

impl MockHostListItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_items(items: Vec<HostListItem>) -> Self {
        let repo = Self::new();
        *repo.items.write().await = items;
        repo
    }

    pub async fn fail_on_insert(&self, call: u64) {
        *self.fail_on_insert.write().await = Some(call);
    }

    pub fn insert_calls(&self) -> u64 {
        self.insert_calls.load(Ordering::Relaxed)
    }

    pub async fn stored(&self) -> Vec<HostListItem> {
        self.items.read().await.clone()
    }
}

#[async_trait]
impl HostListItemRepository for MockHostListItemRepository {
    async fn get_all(&self) -> Result<Vec<HostListItem>, DomainError> {
        Ok(self.items.read().await.clone())
    }

    async fn insert(&self, item: &HostListItem) -> Result<HostListItem, DomainError> {
        let call = self.insert_calls.fetch_add(1, Ordering::Relaxed) + 1;
        if *self.fail_on_insert.read().await == Some(call) {
            return Err(DomainError::DatabaseError("mock insert failure".to_string()));
        }

        let mut items = self.items.write().await;
        let mut stored = item.clone();
        stored.id = Some(items.len() as i64 + 1);
        items.push(stored.clone());
        Ok(stored)
    }
}

// ============================================================================
// Mock BackupImportStore
// ============================================================================

#[derive(Clone, Default)]
pub struct MockBackupImportStore {
    sources: Arc<RwLock<Vec<HostsSource>>>,
    items: Arc<RwLock<Vec<HostListItem>>>,
    should_fail: Arc<RwLock<bool>>,
    calls: Arc<AtomicU64>,
}

impl MockBackupImportStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    pub async fn stored(&self) -> (Vec<HostsSource>, Vec<HostListItem>) {
        (
            self.sources.read().await.clone(),
            self.items.read().await.clone(),
        )
    }
}

#[async_trait]
impl BackupImportStore for MockBackupImportStore {
    async fn insert_all(
        &self,
        sources: &[HostsSource],
        items: &[HostListItem],
    ) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("mock transaction rolled back".to_string()));
        }
        self.sources.write().await.extend_from_slice(sources);
        self.items.write().await.extend_from_slice(items);
        Ok(())
    }
}

// ============================================================================
// Mock BackupDestination
// ============================================================================

#[derive(Clone)]
pub struct MockBackupDestination {
    written: Arc<RwLock<Option<Vec<u8>>>>,
    writable: bool,
    fail_write: bool,
}

impl MockBackupDestination {
    pub fn new() -> Self {
        Self {
            written: Arc::new(RwLock::new(None)),
            writable: true,
            fail_write: false,
        }
    }

    pub fn unwritable() -> Self {
        Self {
            writable: false,
            ..Self::new()
        }
    }

    pub fn failing_write() -> Self {
        Self {
            fail_write: true,
            ..Self::new()
        }
    }

    pub async fn written(&self) -> Option<Vec<u8>> {
        self.written.read().await.clone()
    }
}

struct MockBackupWriter {
    written: Arc<RwLock<Option<Vec<u8>>>>,
    fail_write: bool,
}

#[async_trait]
impl BackupWriter for MockBackupWriter {
    async fn write_all(self: Box<Self>, contents: &[u8]) -> Result<(), BackupError> {
        if self.fail_write {
            return Err(BackupError::Io("mock write failure".to_string()));
        }
        *self.written.write().await = Some(contents.to_vec());
        Ok(())
    }
}

#[async_trait]
impl BackupDestination for MockBackupDestination {
    async fn open(&self) -> Result<Box<dyn BackupWriter>, BackupError> {
        if !self.writable {
            return Err(BackupError::DestinationUnavailable(
                "mock medium is read-only".to_string(),
            ));
        }
        Ok(Box::new(MockBackupWriter {
            written: self.written.clone(),
            fail_write: self.fail_write,
        }))
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

// ============================================================================
// Mock BackupSource
// ============================================================================

#[derive(Clone, Default)]
pub struct MockBackupSource {
    files: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MockBackupSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_file(location: &str, contents: impl Into<Vec<u8>>) -> Self {
        let source = Self::new();
        source
            .files
            .write()
            .await
            .insert(location.to_string(), contents.into());
        source
    }
}

#[async_trait]
impl BackupSource for MockBackupSource {
    async fn read_backup(&self, location: &str) -> Result<Vec<u8>, BackupError> {
        self.files
            .read()
            .await
            .get(location)
            .cloned()
            .ok_or_else(|| BackupError::SourceUnavailable(format!("{} not found", location)))
    }
}
