use hostkeep_application::use_cases::{
    ExportBackupUseCase, GetHostListsUseCase, ImportBackupUseCase,
};
use hostkeep_domain::{BackupConfig, ImportMode};
use hostkeep_infrastructure::backup::{FileBackupDestination, FileBackupSource};
use std::sync::Arc;

use super::Repositories;

pub struct UseCases {
    pub export_backup: Arc<ExportBackupUseCase>,
    pub import_backup: Arc<ImportBackupUseCase>,
    pub get_host_lists: Arc<GetHostListsUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, backup: &BackupConfig) -> Self {
        let destination = Arc::new(FileBackupDestination::new(
            backup.directory.as_str(),
            backup.file_name.as_str(),
        ));

        let import_backup = ImportBackupUseCase::new(
            repos.hosts_source.clone(),
            repos.host_list_item.clone(),
            Arc::new(FileBackupSource::new()),
        );
        let import_backup = match backup.import_mode {
            ImportMode::Atomic => {
                import_backup.with_import_store(repos.backup_import_store.clone())
            }
            ImportMode::BestEffort => import_backup,
        };

        Self {
            export_backup: Arc::new(ExportBackupUseCase::new(
                repos.hosts_source.clone(),
                repos.host_list_item.clone(),
                destination,
            )),
            import_backup: Arc::new(import_backup),
            get_host_lists: Arc::new(GetHostListsUseCase::new(
                repos.hosts_source.clone(),
                repos.host_list_item.clone(),
            )),
        }
    }
}
