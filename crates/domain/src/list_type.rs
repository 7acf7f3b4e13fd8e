use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Category of a user host rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    /// Host is answered with a blocked response
    Block,
    /// Host is let through even when a hosts source blocks it
    Allow,
    /// Host resolves to a user supplied redirection target
    Redirect,
}

impl ListType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListType::Block => "block",
            ListType::Allow => "allow",
            ListType::Redirect => "redirect",
        }
    }

    /// Integer code used by the SQLite store
    pub fn as_code(&self) -> i64 {
        match self {
            ListType::Block => 0,
            ListType::Allow => 1,
            ListType::Redirect => 2,
        }
    }

    pub fn from_code(code: i64) -> Result<Self, DomainError> {
        match code {
            0 => Ok(ListType::Block),
            1 => Ok(ListType::Allow),
            2 => Ok(ListType::Redirect),
            other => Err(DomainError::InvalidListType(format!(
                "unknown list type code {}",
                other
            ))),
        }
    }

    pub fn all() -> &'static [ListType] {
        &[ListType::Block, ListType::Allow, ListType::Redirect]
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ListType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "block" => Ok(ListType::Block),
            "allow" => Ok(ListType::Allow),
            "redirect" => Ok(ListType::Redirect),
            _ => Err(DomainError::InvalidListType(s.to_string())),
        }
    }
}
