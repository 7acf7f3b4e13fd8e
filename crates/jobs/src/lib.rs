pub mod backup_job;
pub mod runner;

pub use backup_job::{BackupFlow, BackupHandle, FlowState};
pub use runner::BackupRunner;
