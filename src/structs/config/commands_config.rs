use serde::{Deserialize, Serialize};

/// Whitelisted kubectl verbs and resources.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CommandsConfig {
    #[serde(default)]
    pub verbs: Vec<String>,

    #[serde(default)]
    pub resources: Vec<String>,
}
