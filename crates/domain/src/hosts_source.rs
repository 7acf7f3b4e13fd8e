use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A subscribed remote hosts list.
///
/// Backups identify a source by its `url` only; `id` is the storage identity
/// and is never carried across an export/import cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostsSource {
    pub id: Option<i64>,
    pub url: Arc<str>,
    pub enabled: bool,
}

impl HostsSource {
    pub fn new(url: &str, enabled: bool) -> Self {
        Self {
            id: None,
            url: Arc::from(url),
            enabled,
        }
    }

    pub fn validate_url(url: &str) -> Result<(), String> {
        crate::validators::validate_url(url)
    }
}
