//! Configuration module for Hostkeep
//!
//! - `root`: Main configuration and CLI overrides
//! - `database`: SQLite store settings
//! - `logging`: Logging settings
//! - `backup`: Backup file location and import policy
//! - `errors`: Configuration errors

pub mod backup;
pub mod database;
pub mod errors;
pub mod logging;
pub mod root;

pub use backup::{BackupConfig, ImportMode};
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
