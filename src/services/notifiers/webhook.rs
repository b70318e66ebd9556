use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::config::constants::webhook_timeout;
use crate::enums::delivery_error_policy::DeliveryErrorPolicy;
use crate::enums::notif_type::NotifType;
use crate::errors::{NotifyError, NotifyResult};
use crate::services::formatter;
use crate::structs::config::config::Config;
use crate::structs::event::Event;
use crate::traits::notifier::Notifier;

/// Posts events as JSON to a configured listener URL.
pub struct WebhookNotifier {
    url: String,
    cluster_name: String,
    notif_type: Option<NotifType>,
    delivery_error_policy: DeliveryErrorPolicy,
    client: Option<Client>,
}

impl WebhookNotifier {
    /// Construction always succeeds, even for a disabled channel; a client
    /// that could not be built turns into a delivery-time error instead.
    pub fn new(config: &Config) -> Self {
        let webhook = &config.communications.webhook;
        let client = match Client::builder().timeout(webhook_timeout()).build() {
            Ok(client) => Some(client),
            Err(e) => {
                log::error!("❌ Failed to build webhook HTTP client: {}", e);
                None
            }
        };

        Self {
            url: webhook.url.clone(),
            cluster_name: config.settings.cluster_name.clone(),
            notif_type: webhook.notif_type,
            delivery_error_policy: webhook.delivery_error_policy,
            client,
        }
    }

    /// Posts the serialized payload to the configured listener. Any transport
    /// failure or non-200 response is returned as an error; the response body
    /// is not inspected.
    pub async fn post_webhook(&self, message: Vec<u8>) -> NotifyResult<()> {
        let client = self.client.as_ref().ok_or_else(|| {
            NotifyError::ClientInit("webhook client was never initialized".to_string())
        })?;

        let response = client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .body(message)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(NotifyError::DeliveryStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {

    /// Renders the event into the configured payload shape and posts it.
    /// Serialization failures always propagate; what happens to a delivery
    /// failure depends on the channel's delivery error policy.
    async fn send_event(&self, mut event: Event) -> NotifyResult<()> {
        // Cluster identity is authoritative from local config, never trusted
        // from the event source.
        event.cluster = self.cluster_name.clone();

        let message = if self.notif_type == Some(NotifType::Short) {
            log::debug!("Posting short message for {}/{}", event.kind, event.name);
            serde_json::to_vec(&formatter::short_payload(&event))?
        } else {
            serde_json::to_vec(&formatter::full_payload(&event))?
        };

        match self.post_webhook(message).await {
            Ok(()) => {
                log::debug!("Event successfully sent to webhook at {}", self.url);
                Ok(())
            }
            Err(e) => match self.delivery_error_policy {
                DeliveryErrorPolicy::Propagate => Err(e),
                DeliveryErrorPolicy::Log => {
                    log::error!("❌ Event not sent to webhook at {}: {}", self.url, e);
                    Ok(())
                }
            },
        }
    }

    /// Plain-text messages have no payload shape for this channel, so they
    /// are accepted and dropped.
    async fn send_message(&self, _msg: &str) -> NotifyResult<()> {
        Ok(())
    }
}
