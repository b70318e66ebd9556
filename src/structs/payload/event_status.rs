use serde::{Deserialize, Serialize};
use crate::enums::event_type::EventType;
use crate::enums::level::Level;

/// Status section of the full payload shape.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct EventStatus {
    #[serde(rename = "type")]
    pub event_type: EventType,

    pub level: Level,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
}
