use serde::{Deserialize, Serialize};
use crate::enums::notif_type::NotifType;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SlackConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub channel: String,

    #[serde(rename = "notiftype", default, skip_serializing_if = "Option::is_none")]
    pub notif_type: Option<NotifType>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token: String,
}
