use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{BackupConfig, ConfigError, DatabaseConfig, ImportMode, LoggingConfig};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub backup: BackupConfig,
}

/// Values given on the command line, applied on top of the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub database_path: Option<String>,
    pub log_level: Option<String>,
    pub backup_directory: Option<String>,
    pub backup_file_name: Option<String>,
    pub import_mode: Option<ImportMode>,
}

impl Config {
    /// Loads the configuration file when one is given, falling back to
    /// defaults otherwise, then applies the CLI overrides.
    pub fn load(
        config_path: Option<&str>,
        cli_overrides: CliOverrides,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(Path::new(path))?,
            None => Self::default(),
        };
        config.apply_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(path) = overrides.database_path {
            self.database.path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(directory) = overrides.backup_directory {
            self.backup.directory = directory;
        }
        if let Some(file_name) = overrides.backup_file_name {
            self.backup.file_name = file_name;
        }
        if let Some(mode) = overrides.import_mode {
            self.backup.import_mode = mode;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.is_empty() {
            return Err(ConfigError::Validation(
                "database.path cannot be empty".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of {:?}",
                self.logging.level, LOG_LEVELS
            )));
        }
        if self.backup.file_name.is_empty() || self.backup.file_name.contains(['/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "backup.file_name '{}' must be a plain file name",
                self.backup.file_name
            )));
        }
        Ok(())
    }
}
