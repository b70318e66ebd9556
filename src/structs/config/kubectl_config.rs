use serde::{Deserialize, Serialize};
use crate::structs::config::commands_config::CommandsConfig;

/// Policy for executing commands inside the cluster.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct KubectlConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub commands: CommandsConfig,

    #[serde(rename = "defaultnamespace", default)]
    pub default_namespace: String,

    #[serde(rename = "restrictAccess", default)]
    pub restrict_access: bool,
}
