use hostkeep_domain::backup::keys;
use hostkeep_domain::{
    BackupError, BackupSection, BackupSummary, HostListItem, HostsSource, ListType,
};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Entities read back from a backup document.
///
/// `items` holds the blocked, then allowed, then redirected entries, each
/// section in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBackup {
    pub sources: Vec<HostsSource>,
    pub items: Vec<HostListItem>,
}

impl ParsedBackup {
    pub fn summary(&self) -> BackupSummary {
        let mut summary = BackupSummary {
            sources: self.sources.len(),
            ..Default::default()
        };
        for item in &self.items {
            summary.count_item(item.list_type);
        }
        summary
    }
}

/// Rebuilds sources and items from a decoded backup document.
///
/// Every section must be present before any entry is read. The list type of
/// an item comes from the section it is listed in. The first invalid entry
/// fails the whole document.
pub fn parse_backup(document: &Value) -> Result<ParsedBackup, BackupError> {
    let root = document
        .as_object()
        .ok_or_else(|| BackupError::Decoding("backup root is not an object".to_string()))?;

    let mut sections = Vec::with_capacity(BackupSection::ALL.len());
    for section in BackupSection::ALL {
        sections.push((section, section_entries(root, section)?));
    }

    let mut parsed = ParsedBackup::default();
    for (section, entries) in sections {
        match section.list_type() {
            None => {
                for (index, value) in entries.iter().enumerate() {
                    parsed.sources.push(decode_source(index, value)?);
                }
            }
            Some(list_type) => {
                for (index, value) in entries.iter().enumerate() {
                    parsed
                        .items
                        .push(decode_host(section, list_type, index, value)?);
                }
            }
        }
    }

    Ok(parsed)
}

fn section_entries(
    root: &Map<String, Value>,
    section: BackupSection,
) -> Result<&Vec<Value>, BackupError> {
    root.get(section.key())
        .ok_or(BackupError::MissingSection { section })?
        .as_array()
        .ok_or(BackupError::MalformedSection { section })
}

fn decode_source(index: usize, value: &Value) -> Result<HostsSource, BackupError> {
    let entry = EntryReader::new(BackupSection::Sources, index, value)?;

    let url = entry.required_str(keys::URL)?;
    HostsSource::validate_url(url).map_err(|reason| entry.error(keys::URL, reason))?;
    let enabled = entry.required_bool(keys::ENABLED)?;

    Ok(HostsSource::new(url, enabled))
}

fn decode_host(
    section: BackupSection,
    list_type: ListType,
    index: usize,
    value: &Value,
) -> Result<HostListItem, BackupError> {
    let entry = EntryReader::new(section, index, value)?;

    let host = entry.required_str(keys::HOST)?;
    HostListItem::validate_host(host).map_err(|reason| entry.error(keys::HOST, reason))?;
    let redirection = entry.optional_str(keys::REDIRECT)?;
    let enabled = entry.required_bool(keys::ENABLED)?;

    Ok(HostListItem {
        id: None,
        host: Arc::from(host),
        list_type,
        redirection: redirection.map(Arc::from),
        enabled,
    })
}

/// Field access on one entry object, reporting errors with their position.
struct EntryReader<'a> {
    section: BackupSection,
    index: usize,
    object: &'a Map<String, Value>,
}

impl<'a> EntryReader<'a> {
    fn new(section: BackupSection, index: usize, value: &'a Value) -> Result<Self, BackupError> {
        let object = value.as_object().ok_or_else(|| BackupError::Field {
            section,
            index,
            field: keys::ENTRY,
            reason: "expected an object".to_string(),
        })?;
        Ok(Self {
            section,
            index,
            object,
        })
    }

    fn error(&self, field: &'static str, reason: impl Into<String>) -> BackupError {
        BackupError::Field {
            section: self.section,
            index: self.index,
            field,
            reason: reason.into(),
        }
    }

    fn required(&self, field: &'static str) -> Result<&'a Value, BackupError> {
        self.object
            .get(field)
            .ok_or_else(|| self.error(field, "missing"))
    }

    fn required_str(&self, field: &'static str) -> Result<&'a str, BackupError> {
        self.required(field)?
            .as_str()
            .ok_or_else(|| self.error(field, "expected a string"))
    }

    fn required_bool(&self, field: &'static str) -> Result<bool, BackupError> {
        self.required(field)?
            .as_bool()
            .ok_or_else(|| self.error(field, "expected a boolean"))
    }

    fn optional_str(&self, field: &'static str) -> Result<Option<&'a str>, BackupError> {
        match self.object.get(field) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| self.error(field, "expected a string")),
        }
    }
}
