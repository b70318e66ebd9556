use serde::{Deserialize, Serialize};
use crate::enums::notif_type::NotifType;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct MattermostConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub token: String,

    #[serde(default)]
    pub team: String,

    #[serde(default)]
    pub channel: String,

    #[serde(rename = "notiftype", default, skip_serializing_if = "Option::is_none")]
    pub notif_type: Option<NotifType>,
}
