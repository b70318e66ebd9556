use serde::{Deserialize, Serialize};

/// Compact payload shape: a single summary line.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ShortWebhookPayload {
    #[serde(rename = "text")]
    pub event_summary: String,
}
