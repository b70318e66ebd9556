use std::fs;
use std::time::Instant;

use crate::config::config_manager::ConfigManager;
use crate::config::constants::{COMM_CONFIG_FILE_NAME, CONFIG_PATH_ENV, RESOURCE_CONFIG_FILE_NAME};
use crate::enums::commands::Commands;
use crate::errors::{NotifyError, NotifyResult};
use crate::services::dispatcher::Dispatcher;
use crate::structs::config::config::Config;
use crate::structs::event::Event;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> NotifyResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Validate => self.validate_command().await,
            Commands::Send { file } => self.send_command(&file).await,
            Commands::Message { text } => self.message_command(&text).await,
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    async fn validate_command(&self) -> NotifyResult<()> {
        log::info!("🔍 Validating configuration...");
        let config = self.load_config()?;

        if let Err(errors) = ConfigManager::validate_config(&config) {
            for error in &errors {
                log::error!("❌ {}", error);
            }
            return Err(NotifyError::InvalidConfig(format!(
                "{} problem(s) found",
                errors.len()
            )));
        }

        let dispatcher = Dispatcher::from_config(&config);
        log::info!("✅ Configuration is valid");
        log::info!("   cluster: {}", config.settings.cluster_name);
        log::info!("   watched resources: {}", config.resources.len());
        log::info!("   enabled channels: {}", dispatcher.channel_count());
        Ok(())
    }

    async fn send_command(&self, file: &str) -> NotifyResult<()> {
        let config = self.load_config()?;

        let content = fs::read_to_string(file).map_err(|e| NotifyError::EventFile {
            path: file.to_string(),
            reason: e.to_string(),
        })?;
        let event: Event = serde_json::from_str(&content)?;

        let dispatcher = Dispatcher::from_config(&config);
        dispatcher.dispatch_event(&event).await?;
        log::info!("✅ Event dispatched to {} channel(s)", dispatcher.channel_count());
        Ok(())
    }

    async fn message_command(&self, text: &str) -> NotifyResult<()> {
        let config = self.load_config()?;

        let dispatcher = Dispatcher::from_config(&config);
        dispatcher.dispatch_message(text).await?;
        log::info!("✅ Message dispatched to {} channel(s)", dispatcher.channel_count());
        Ok(())
    }

    fn load_config(&self) -> NotifyResult<Config> {
        match ConfigManager::load() {
            Ok(config) => Ok(config),
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!(
                    "💡 Set {} to the directory holding {} and {}",
                    CONFIG_PATH_ENV,
                    RESOURCE_CONFIG_FILE_NAME,
                    COMM_CONFIG_FILE_NAME
                );
                Err(e)
            }
        }
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
