use std::env;
use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::config::constants::{COMM_CONFIG_FILE_NAME, CONFIG_PATH_ENV, RESOURCE_CONFIG_FILE_NAME};
use crate::errors::{NotifyError, NotifyResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    /// Loads the merged configuration from the directory named by `CONFIG_PATH`.
    pub fn load() -> NotifyResult<Config> {
        let config_path = env::var(CONFIG_PATH_ENV).unwrap_or_default();
        Self::load_from_dir(Path::new(&config_path))
    }

    /// Reads `resource_config.yaml` then `comm_config.yaml` from `dir` and
    /// merges the second document over the first. A missing resource file
    /// fails before the communication file is touched.
    pub fn load_from_dir(dir: &Path) -> NotifyResult<Config> {
        let mut merged = Value::Null;

        let resource_path = dir.join(RESOURCE_CONFIG_FILE_NAME);
        Self::merge_file(&resource_path, &mut merged)?;

        let comm_path = dir.join(COMM_CONFIG_FILE_NAME);
        Self::merge_file(&comm_path, &mut merged)?;

        if merged.is_null() {
            // Both files were empty.
            return Ok(Config::default());
        }

        serde_yaml::from_value(merged).map_err(|e| NotifyError::ConfigParse {
            path: dir.display().to_string(),
            source: e,
        })
    }

    /// Merges one YAML document into the accumulated value. An empty file
    /// contributes nothing and is not a parse error.
    fn merge_file(path: &Path, merged: &mut Value) -> NotifyResult<()> {
        let content = fs::read_to_string(path).map_err(|e| NotifyError::ConfigFile {
            path: path.display().to_string(),
            source: e,
        })?;

        if content.is_empty() {
            return Ok(());
        }

        let document: Value = serde_yaml::from_str(&content).map_err(|e| NotifyError::ConfigParse {
            path: path.display().to_string(),
            source: e,
        })?;

        // Check the document against the schema on its own, so a bad value is
        // attributed to the file that carries it rather than the merged whole.
        serde_yaml::from_value::<Config>(document.clone()).map_err(|e| NotifyError::ConfigParse {
            path: path.display().to_string(),
            source: e,
        })?;

        merge_values(merged, document);
        Ok(())
    }

    /// Sanity checks beyond field presence: every enabled channel must carry
    /// the fields it needs to deliver anything.
    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let comms = &config.communications;

        if comms.webhook.enabled && comms.webhook.url.is_empty() {
            errors.push("webhook channel is enabled but has no url".to_string());
        }
        if comms.slack.enabled && comms.slack.channel.is_empty() {
            errors.push("slack channel is enabled but has no channel".to_string());
        }
        if comms.mattermost.enabled && comms.mattermost.url.is_empty() {
            errors.push("mattermost channel is enabled but has no url".to_string());
        }
        if comms.elasticsearch.enabled && comms.elasticsearch.server.is_empty() {
            errors.push("elasticsearch channel is enabled but has no server".to_string());
        }

        let any_enabled = comms.webhook.enabled
            || comms.slack.enabled
            || comms.mattermost.enabled
            || comms.elasticsearch.enabled;
        if any_enabled && config.settings.cluster_name.is_empty() {
            errors.push("settings.clustername must be set when a channel is enabled".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}

/// Deep merge: keys present in `incoming` override `base`, nested mappings
/// recurse, everything else is replaced wholesale.
fn merge_values(base: &mut Value, incoming: Value) {
    match (base, incoming) {
        (Value::Mapping(base_map), Value::Mapping(incoming_map)) => {
            for (key, value) in incoming_map {
                if let Some(existing) = base_map.get_mut(&key) {
                    merge_values(existing, value);
                } else {
                    base_map.insert(key, value);
                }
            }
        }
        (slot, incoming) => *slot = incoming,
    }
}
