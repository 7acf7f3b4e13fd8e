mod export_backup;
mod import_backup;

pub use export_backup::ExportBackupUseCase;
pub use import_backup::ImportBackupUseCase;
