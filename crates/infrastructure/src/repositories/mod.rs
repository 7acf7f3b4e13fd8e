pub mod backup_import_store;
pub mod host_list_item_repository;
pub mod hosts_source_repository;

pub use backup_import_store::SqliteBackupImportStore;
pub use host_list_item_repository::SqliteHostListItemRepository;
pub use hosts_source_repository::SqliteHostsSourceRepository;
