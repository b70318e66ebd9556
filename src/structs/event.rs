use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::event_type::EventType;
use crate::enums::level::Level;

/// One discrete cluster occurrence carried through the dispatch pipeline.
///
/// Produced by a watcher, mutated exactly once by a notifier (cluster name
/// injection) right before formatting, and discarded after delivery.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Event {
    #[serde(default)]
    pub kind: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub namespace: String,

    /// Always overwritten from local configuration before formatting; the
    /// value supplied by the event source is never trusted.
    #[serde(default)]
    pub cluster: String,

    #[serde(rename = "type", default)]
    pub event_type: EventType,

    #[serde(default)]
    pub level: Level,

    #[serde(default)]
    pub reason: String,

    #[serde(default)]
    pub error: String,

    #[serde(default)]
    pub messages: Vec<String>,

    #[serde(rename = "timestamp", default = "Utc::now")]
    pub time_stamp: DateTime<Utc>,

    #[serde(default)]
    pub recommendations: Vec<String>,

    #[serde(default)]
    pub warnings: Vec<String>,
}

impl Default for Event {
    fn default() -> Self {
        Self {
            kind: String::new(),
            name: String::new(),
            namespace: String::new(),
            cluster: String::new(),
            event_type: EventType::default(),
            level: Level::default(),
            reason: String::new(),
            error: String::new(),
            messages: vec![],
            time_stamp: Utc::now(),
            recommendations: vec![],
            warnings: vec![],
        }
    }
}
