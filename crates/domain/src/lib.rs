//! Hostkeep Domain Layer
pub mod backup;
pub mod config;
pub mod errors;
pub mod host_list_item;
pub mod hosts_source;
pub mod list_type;
pub mod validators;

pub use backup::{BackupDocument, BackupSection, BackupSummary, HostEntry, SourceEntry};
pub use config::{BackupConfig, CliOverrides, Config, ConfigError, ImportMode};
pub use errors::{BackupError, DomainError};
pub use host_list_item::HostListItem;
pub use hosts_source::HostsSource;
pub use list_type::ListType;
