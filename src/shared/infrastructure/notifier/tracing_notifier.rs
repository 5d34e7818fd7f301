use crate::shared::core::notification::{Notification, NotificationKind};
use crate::shared::infrastructure::notifier::Notifier;
use tracing::{info, warn};

/// Emits each toast as a structured log event. Used when no UI surface is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

#[async_trait::async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => info!(text = %notification.message, "toast"),
            NotificationKind::Failure => warn!(text = %notification.message, "toast"),
        }
    }
}
