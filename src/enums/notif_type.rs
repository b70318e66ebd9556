use serde::{Deserialize, Serialize};

/// Payload shape a channel renders: compact one-liner or full detail.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, PartialEq)]
pub enum NotifType {
    #[serde(rename = "short")]
    Short,
    #[serde(rename = "long")]
    Long,
}

impl Default for NotifType {
    fn default() -> Self {
        NotifType::Short
    }
}
