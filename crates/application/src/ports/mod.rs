mod backup_import_store;
mod backup_io;
mod host_list_item_repository;
mod hosts_source_repository;

pub use backup_import_store::BackupImportStore;
pub use backup_io::{BackupDestination, BackupSource, BackupWriter};
pub use host_list_item_repository::HostListItemRepository;
pub use hosts_source_repository::HostsSourceRepository;
