//! # Hostkeep
//!
//! Backup and restore of hosts sources and user host lists

mod bootstrap;
mod commands;
mod di;

use clap::{Parser, Subcommand};
use hostkeep_domain::{CliOverrides, ImportMode};
use hostkeep_jobs::BackupRunner;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

use di::{Repositories, UseCases};

#[derive(Parser)]
#[command(name = "hostkeep")]
#[command(version)]
#[command(about = "Backup and restore of hosts sources and host lists")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// SQLite database path (overrides config)
    #[arg(short = 'd', long)]
    database: Option<String>,

    /// Log level: trace, debug, info, warn, error (overrides config)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write every hosts source and host list item to a backup file
    Export {
        /// Directory receiving the backup file
        #[arg(short = 'o', long)]
        output_dir: Option<String>,

        /// Backup file name
        #[arg(short = 'f', long)]
        file_name: Option<String>,
    },
    /// Append the records of a backup file to the database
    Import {
        /// Backup file to read
        path: String,

        /// Insert all records in a single transaction
        #[arg(long)]
        atomic: bool,
    },
    /// Print the stored hosts sources and host lists
    List,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let mut overrides = CliOverrides {
            database_path: self.database.clone(),
            log_level: self.log_level.clone(),
            ..Default::default()
        };
        match &self.command {
            Command::Export {
                output_dir,
                file_name,
            } => {
                overrides.backup_directory = output_dir.clone();
                overrides.backup_file_name = file_name.clone();
            }
            Command::Import { atomic: true, .. } => {
                overrides.import_mode = Some(ImportMode::Atomic);
            }
            _ => {}
        }
        overrides
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);
    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        database = %config.database.path,
        backup_directory = %config.backup.directory,
        "Configuration loaded"
    );

    let pool = bootstrap::init_database(&config.database).await?;
    let repos = Repositories::new(pool);
    let use_cases = UseCases::new(&repos, &config.backup);
    let runner = BackupRunner::new(
        use_cases.export_backup.clone(),
        use_cases.import_backup.clone(),
    );

    let ok = match &cli.command {
        Command::Export { .. } => {
            let destination = Path::new(&config.backup.directory).join(&config.backup.file_name);
            commands::run_export(&runner, &destination.display().to_string()).await
        }
        Command::Import { path, .. } => {
            info!(mode = ?use_cases.import_backup.mode(), "Starting import");
            commands::run_import(&runner, path).await
        }
        Command::List => {
            commands::run_list(&use_cases.get_host_lists).await?;
            true
        }
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
