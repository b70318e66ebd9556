pub mod aws_signing;
pub mod commands_config;
pub mod communications;
pub mod config;
pub mod elasticsearch_config;
pub mod index_config;
pub mod kubectl_config;
pub mod mattermost_config;
pub mod namespaces;
pub mod resource;
pub mod settings;
pub mod slack_config;
pub mod update_setting;
pub mod webhook_config;
