use serde::{Deserialize, Serialize};

/// Field filters applied to update events.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct UpdateSetting {
    #[serde(default)]
    pub fields: Vec<String>,

    #[serde(rename = "includeDiff", default)]
    pub include_diff: bool,
}
