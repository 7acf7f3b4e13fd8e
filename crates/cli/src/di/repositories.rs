use hostkeep_infrastructure::repositories::{
    SqliteBackupImportStore, SqliteHostListItemRepository, SqliteHostsSourceRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub hosts_source: Arc<SqliteHostsSourceRepository>,
    pub host_list_item: Arc<SqliteHostListItemRepository>,
    pub backup_import_store: Arc<SqliteBackupImportStore>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            hosts_source: Arc::new(SqliteHostsSourceRepository::new(pool.clone())),
            host_list_item: Arc::new(SqliteHostListItemRepository::new(pool.clone())),
            backup_import_store: Arc::new(SqliteBackupImportStore::new(pool)),
        }
    }
}
