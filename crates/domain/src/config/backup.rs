use serde::{Deserialize, Serialize};

use crate::backup::DEFAULT_BACKUP_FILE_NAME;

/// How imported records are written to the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportMode {
    /// One insert per record; a failing insert stops the import and keeps
    /// the records inserted before it
    #[default]
    BestEffort,
    /// All records are inserted in a single transaction
    Atomic,
}

/// Backup export/import configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackupConfig {
    /// Directory receiving exported backups (default: ".")
    #[serde(default = "default_directory")]
    pub directory: String,

    /// Name of the exported backup file (default: "hostkeep-backup.json")
    #[serde(default = "default_file_name")]
    pub file_name: String,

    #[serde(default)]
    pub import_mode: ImportMode,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            file_name: default_file_name(),
            import_mode: ImportMode::default(),
        }
    }
}

fn default_directory() -> String {
    ".".to_string()
}

fn default_file_name() -> String {
    DEFAULT_BACKUP_FILE_NAME.to_string()
}
