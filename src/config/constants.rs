use std::time::Duration;

pub const RESOURCE_CONFIG_FILE_NAME: &str = "resource_config.yaml";
pub const COMM_CONFIG_FILE_NAME: &str = "comm_config.yaml";
pub const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 30;

pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

pub fn webhook_timeout() -> Duration {
    Duration::from_secs(DEFAULT_WEBHOOK_TIMEOUT_SECS)
}
