use std::fmt;
use serde::{Deserialize, Serialize};

/// Kind of cluster occurrence a watched resource can produce.
///
/// `All` is a wildcard used in resource watch configuration to select every
/// type; it is never attached to a real occurrence.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
pub enum EventType {
    #[serde(rename = "create")]
    Create,
    #[serde(rename = "update")]
    Update,
    #[serde(rename = "delete")]
    Delete,
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "warning")]
    Warning,
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "all")]
    All,
}

impl Default for EventType {
    fn default() -> Self {
        EventType::Normal
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventType::Create => "create",
            EventType::Update => "update",
            EventType::Delete => "delete",
            EventType::Error => "error",
            EventType::Warning => "warning",
            EventType::Normal => "normal",
            EventType::Info => "info",
            EventType::All => "all",
        };
        write!(f, "{}", name)
    }
}
