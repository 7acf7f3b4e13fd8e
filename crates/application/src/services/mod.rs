pub mod backup_codec;
pub mod backup_deserializer;
pub mod backup_serializer;

pub use backup_codec::{decode_document, render_document};
pub use backup_deserializer::{parse_backup, ParsedBackup};
pub use backup_serializer::build_backup;
