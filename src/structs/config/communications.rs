use serde::{Deserialize, Serialize};
use crate::structs::config::elasticsearch_config::ElasticSearchConfig;
use crate::structs::config::mattermost_config::MattermostConfig;
use crate::structs::config::slack_config::SlackConfig;
use crate::structs::config::webhook_config::WebhookConfig;

/// Channels events can be sent to, one sub-config per channel.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Communications {
    #[serde(default)]
    pub slack: SlackConfig,

    #[serde(default)]
    pub elasticsearch: ElasticSearchConfig,

    #[serde(default)]
    pub mattermost: MattermostConfig,

    #[serde(default)]
    pub webhook: WebhookConfig,
}
