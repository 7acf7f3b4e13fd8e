use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::list_type::ListType;

/// A single user rule: a host pattern, its category and enabled flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostListItem {
    pub id: Option<i64>,
    pub host: Arc<str>,
    pub list_type: ListType,
    /// Redirection target. `None` means no target at all, which is kept
    /// distinct from `Some("")`.
    pub redirection: Option<Arc<str>>,
    pub enabled: bool,
}

impl HostListItem {
    pub fn new(host: &str, list_type: ListType, enabled: bool) -> Self {
        Self {
            id: None,
            host: Arc::from(host),
            list_type,
            redirection: None,
            enabled,
        }
    }

    pub fn redirected(host: &str, target: &str, enabled: bool) -> Self {
        Self::new(host, ListType::Redirect, enabled).with_redirection(target)
    }

    pub fn with_redirection(mut self, target: &str) -> Self {
        self.redirection = Some(Arc::from(target));
        self
    }

    /// Returns the redirection target only when it is set and non-empty.
    pub fn redirect_target(&self) -> Option<&str> {
        self.redirection.as_deref().filter(|target| !target.is_empty())
    }

    pub fn validate_host(host: &str) -> Result<(), String> {
        crate::validators::validate_host(host)
    }
}
