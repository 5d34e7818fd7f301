// Port for the toast surface.
//
// Boundaries
// - Fire and forget. The pipeline never inspects what the surface does with a notification.

pub mod in_memory;
pub mod tracing_notifier;

use crate::shared::core::notification::Notification;
use async_trait::async_trait;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: Notification);
}
