use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::structs::payload::event_meta::EventMeta;
use crate::structs::payload::event_status::EventStatus;

/// Full payload shape posted to a webhook listener.
///
/// Empty recommendation and warning lists are omitted from the serialized
/// output entirely, never emitted as empty arrays.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WebhookPayload {
    pub meta: EventMeta,

    pub status: EventStatus,

    pub summary: String,

    pub timestamp: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}
