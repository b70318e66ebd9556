use serde::{Deserialize, Serialize};
use crate::enums::delivery_error_policy::DeliveryErrorPolicy;
use crate::enums::notif_type::NotifType;

/// Webhook channel configuration.
///
/// An absent `notiftype` selects the full payload shape; only an explicit
/// `short` selects the compact one.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct WebhookConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub url: String,

    #[serde(rename = "notiftype", default, skip_serializing_if = "Option::is_none")]
    pub notif_type: Option<NotifType>,

    #[serde(rename = "deliveryErrorPolicy", default)]
    pub delivery_error_policy: DeliveryErrorPolicy,
}
