//! Backup document schema
//!
//! The document holds four top-level lists, always in this order:
//! `sources`, `blocked`, `allowed`, `redirected`. A host entry does not carry
//! its category; the list it appears in decides it.

use serde::Serialize;
use std::fmt;

use crate::list_type::ListType;

pub const DEFAULT_BACKUP_FILE_NAME: &str = "hostkeep-backup.json";

/// Object keys used inside the entries of each section
pub mod keys {
    pub const URL: &str = "url";
    pub const ENABLED: &str = "enabled";
    pub const HOST: &str = "host";
    pub const REDIRECT: &str = "redirect";
    /// Pseudo-key reported when a list element is not an object
    pub const ENTRY: &str = "entry";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackupSection {
    Sources,
    Blocked,
    Allowed,
    Redirected,
}

impl BackupSection {
    /// All sections in document order
    pub const ALL: [BackupSection; 4] = [
        BackupSection::Sources,
        BackupSection::Blocked,
        BackupSection::Allowed,
        BackupSection::Redirected,
    ];

    /// Host sections in import order
    pub const HOSTS: [BackupSection; 3] = [
        BackupSection::Blocked,
        BackupSection::Allowed,
        BackupSection::Redirected,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            BackupSection::Sources => "sources",
            BackupSection::Blocked => "blocked",
            BackupSection::Allowed => "allowed",
            BackupSection::Redirected => "redirected",
        }
    }

    /// Category assigned to the items read from this section
    pub fn list_type(&self) -> Option<ListType> {
        match self {
            BackupSection::Sources => None,
            BackupSection::Blocked => Some(ListType::Block),
            BackupSection::Allowed => Some(ListType::Allow),
            BackupSection::Redirected => Some(ListType::Redirect),
        }
    }

    pub fn for_list_type(list_type: ListType) -> Self {
        match list_type {
            ListType::Block => BackupSection::Blocked,
            ListType::Allow => BackupSection::Allowed,
            ListType::Redirect => BackupSection::Redirected,
        }
    }
}

impl fmt::Display for BackupSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceEntry {
    pub url: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostEntry {
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    pub enabled: bool,
}

/// Root of a backup. Field order here is the serialized key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BackupDocument {
    pub sources: Vec<SourceEntry>,
    pub blocked: Vec<HostEntry>,
    pub allowed: Vec<HostEntry>,
    pub redirected: Vec<HostEntry>,
}

impl BackupDocument {
    pub fn hosts(&self, section: BackupSection) -> &[HostEntry] {
        match section {
            BackupSection::Sources => &[],
            BackupSection::Blocked => &self.blocked,
            BackupSection::Allowed => &self.allowed,
            BackupSection::Redirected => &self.redirected,
        }
    }

    pub fn summary(&self) -> BackupSummary {
        BackupSummary {
            sources: self.sources.len(),
            blocked: self.blocked.len(),
            allowed: self.allowed.len(),
            redirected: self.redirected.len(),
        }
    }
}

/// Entry counts of an exported or imported backup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BackupSummary {
    pub sources: usize,
    pub blocked: usize,
    pub allowed: usize,
    pub redirected: usize,
}

impl BackupSummary {
    pub fn total_items(&self) -> usize {
        self.blocked + self.allowed + self.redirected
    }

    pub fn count_item(&mut self, list_type: ListType) {
        match list_type {
            ListType::Block => self.blocked += 1,
            ListType::Allow => self.allowed += 1,
            ListType::Redirect => self.redirected += 1,
        }
    }
}
