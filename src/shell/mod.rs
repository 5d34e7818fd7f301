// Composition root for the salon forms.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete submitters and the notifier.
// - Wire them into one submit handler per flow.

pub mod config;
pub mod http;
pub mod state;

use crate::modules::profile::adapters::in_memory_profile_store::InMemoryProfileStore;
use crate::shared::infrastructure::notifier::tracing_notifier::TracingNotifier;
use crate::shared::infrastructure::submitter::Submitter;
use crate::shared::infrastructure::submitter::http::{HttpSubmitter, HttpSubmitterConfig};
use crate::shell::config::{Config, ProfileMode};
use crate::shell::state::AppState;
use std::sync::Arc;

pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let api: Arc<dyn Submitter> = Arc::new(HttpSubmitter::new(HttpSubmitterConfig {
        base_url: config.api_base_url.clone(),
        timeout: config.api_timeout,
    })?);

    let profile_store: Arc<dyn Submitter> = match config.profile_mode {
        ProfileMode::Local => Arc::new(InMemoryProfileStore::new()),
        ProfileMode::Remote => api.clone(),
    };

    Ok(AppState::new(api, profile_store, Arc::new(TracingNotifier)))
}
