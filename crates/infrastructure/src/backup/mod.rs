pub mod file_destination;
pub mod file_source;

pub use file_destination::FileBackupDestination;
pub use file_source::FileBackupSource;
