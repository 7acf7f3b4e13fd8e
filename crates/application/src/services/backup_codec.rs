use hostkeep_domain::{BackupDocument, BackupError};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

const INDENT: &[u8] = b"    ";

/// Renders a document as UTF-8 JSON indented by four spaces.
pub fn render_document(document: &BackupDocument) -> Result<Vec<u8>, BackupError> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    document
        .serialize(&mut serializer)
        .map_err(|e| BackupError::Encoding(e.to_string()))?;
    Ok(buffer)
}

/// Parses backup bytes, pretty printed or compact, into a JSON value.
pub fn decode_document(contents: &[u8]) -> Result<Value, BackupError> {
    serde_json::from_slice(contents).map_err(|e| BackupError::Decoding(e.to_string()))
}
