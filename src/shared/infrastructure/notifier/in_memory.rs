use crate::shared::core::notification::Notification;
use crate::shared::infrastructure::notifier::Notifier;
use tokio::sync::Mutex;

/// Collects notifications so tests can assert on what the user would have seen.
#[derive(Default)]
pub struct InMemoryNotifier {
    pub shown: Mutex<Vec<Notification>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn messages(&self) -> Vec<String> {
        self.shown
            .lock()
            .await
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    pub async fn last(&self) -> Option<Notification> {
        self.shown.lock().await.last().cloned()
    }
}

#[async_trait::async_trait]
impl Notifier for InMemoryNotifier {
    async fn notify(&self, notification: Notification) {
        self.shown.lock().await.push(notification);
    }
}
