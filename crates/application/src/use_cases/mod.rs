pub mod backup;
pub mod lists;

// Re-export use cases
pub use backup::{ExportBackupUseCase, ImportBackupUseCase};
pub use lists::{GetHostListsUseCase, HostLists};
