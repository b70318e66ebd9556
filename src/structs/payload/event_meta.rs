use serde::{Deserialize, Serialize};

/// Identifying section of the full payload shape.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct EventMeta {
    pub kind: String,

    pub name: String,

    pub namespace: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cluster: String,
}
