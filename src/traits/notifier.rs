use async_trait::async_trait;
use crate::errors::NotifyResult;
use crate::structs::event::Event;

/// Contract every notification channel implements.
///
/// Constructors take the process `Config` and extract only their own channel's
/// sub-config plus the cluster name; a disabled channel's constructor still
/// succeeds, the enable/disable decision belongs to the dispatcher.
/// `send_message` may be a no-op for channels with no free-text delivery mode.
#[async_trait]
pub trait Notifier: Send + Sync {

    async fn send_event(&self, event: Event) -> NotifyResult<()>;

    async fn send_message(&self, msg: &str) -> NotifyResult<()>;
}
