use serde::{Deserialize, Serialize};
use crate::enums::event_type::EventType;
use crate::structs::config::namespaces::Namespaces;
use crate::structs::config::update_setting::UpdateSetting;

/// One watched resource kind and the event types to report for it.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Resource {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub namespaces: Namespaces,

    #[serde(default)]
    pub events: Vec<EventType>,

    #[serde(rename = "updateSetting", default)]
    pub update_setting: UpdateSetting,
}
