use serde::{Deserialize, Serialize};
use crate::structs::config::kubectl_config::KubectlConfig;

/// Cluster-wide settings shared by every channel.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Settings {
    #[serde(rename = "clustername", default)]
    pub cluster_name: String,

    #[serde(default)]
    pub kubectl: KubectlConfig,

    #[serde(rename = "configwatcher", default)]
    pub config_watcher: bool,

    #[serde(rename = "upgradeNotifier", default)]
    pub upgrade_notifier: bool,
}
