use serde::{Deserialize, Serialize};
use crate::structs::config::aws_signing::AwsSigning;
use crate::structs::config::index_config::IndexConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ElasticSearchConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub username: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,

    #[serde(default)]
    pub server: String,

    #[serde(rename = "awsSigning", default)]
    pub aws_signing: AwsSigning,

    #[serde(default)]
    pub index: IndexConfig,
}
