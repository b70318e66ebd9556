use crate::errors::NotifyResult;
use crate::services::notifiers::webhook::WebhookNotifier;
use crate::structs::config::config::Config;
use crate::structs::event::Event;
use crate::traits::notifier::Notifier;

/// Routes each event to every enabled channel.
///
/// Whether notifications are delivered at all is an instance field, not
/// process-global state; instances in one process stay independent.
pub struct Dispatcher {
    notifiers: Vec<Box<dyn Notifier>>,
    notify: bool,
}

impl Dispatcher {

    /// Builds one notifier per enabled channel. Channels whose implementation
    /// lives outside this build are logged and skipped.
    pub fn from_config(config: &Config) -> Self {
        let mut notifiers: Vec<Box<dyn Notifier>> = Vec::new();
        let comms = &config.communications;

        if comms.webhook.enabled {
            notifiers.push(Box::new(WebhookNotifier::new(config)));
        }

        for (channel, enabled) in [
            ("slack", comms.slack.enabled),
            ("mattermost", comms.mattermost.enabled),
            ("elasticsearch", comms.elasticsearch.enabled),
        ] {
            if enabled {
                log::warn!("⚠️ Channel '{}' is not available in this build, skipping", channel);
            }
        }

        Self {
            notifiers,
            notify: true,
        }
    }

    /// Toggles delivery without tearing the dispatcher down.
    pub fn with_notifications(mut self, notify: bool) -> Self {
        self.notify = notify;
        self
    }

    pub fn channel_count(&self) -> usize {
        self.notifiers.len()
    }

    /// Sends the event to every channel. Every channel is attempted even when
    /// an earlier one fails; the first failure is returned afterwards.
    pub async fn dispatch_event(&self, event: &Event) -> NotifyResult<()> {
        if !self.notify {
            log::debug!(
                "Notifications are disabled, dropping {} event for {}/{}",
                event.event_type,
                event.kind,
                event.name
            );
            return Ok(());
        }

        let mut first_error = None;
        for notifier in &self.notifiers {
            if let Err(e) = notifier.send_event(event.clone()).await {
                log::error!("❌ Failed to notify channel: {}", e);
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Sends a free-text message to every channel.
    pub async fn dispatch_message(&self, msg: &str) -> NotifyResult<()> {
        if !self.notify {
            log::debug!("Notifications are disabled, dropping message");
            return Ok(());
        }

        let mut first_error = None;
        for notifier in &self.notifiers {
            if let Err(e) = notifier.send_message(msg).await {
                log::error!("❌ Failed to send message to channel: {}", e);
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
