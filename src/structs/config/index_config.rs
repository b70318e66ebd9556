use serde::{Deserialize, Serialize};

/// Index settings for the ElasticSearch channel.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct IndexConfig {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub index_type: String,

    #[serde(default)]
    pub shards: i32,

    #[serde(default)]
    pub replicas: i32,
}
