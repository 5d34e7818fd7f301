// Local profile store implementing the Submitter port.
//
// Purpose
// - Back the profile flows when profile changes are kept locally instead of
//   being sent to the remote API.
//
// Responsibilities
// - Upsert profiles keyed by user id on "profile-update".
// - Check the current password on "change-password" when one is recorded.
// - Reject any other endpoint.

use crate::modules::profile::change_password::ChangePassword;
use crate::modules::profile::update_profile::UpdateProfile;
use crate::shared::core::user_context::UserContext;
use crate::shared::infrastructure::submitter::{Endpoint, SubmissionError, Submitter};
use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::RwLock;

pub const PROFILE_UPDATE_ENDPOINT: &str = "profile-update";
pub const CHANGE_PASSWORD_ENDPOINT: &str = "change-password";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProfile {
    pub user_id: String,
    pub email: String,
    pub username: String,
    pub full_name: String,
    #[serde(skip)]
    pub password: Option<String>,
}

#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<String, StoredProfile>>,
    is_offline: bool,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn seed(&self, user: &UserContext, password: Option<&str>) {
        let profile = StoredProfile {
            user_id: user.user_id.clone(),
            email: user.email.clone(),
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            password: password.map(str::to_string),
        };
        self.profiles
            .write()
            .await
            .insert(profile.user_id.clone(), profile);
    }

    pub async fn get(&self, user_id: &str) -> Option<StoredProfile> {
        self.profiles.read().await.get(user_id).cloned()
    }

    async fn update_profile(&self, update: UpdateProfile) -> StoredProfile {
        let mut guard = self.profiles.write().await;
        let entry = guard.entry(update.user_id.clone()).or_default();
        entry.user_id = update.user_id;
        entry.email = update.email;
        entry.username = update.username;
        entry.full_name = update.full_name;
        entry.clone()
    }

    async fn change_password(&self, change: ChangePassword) -> Result<(), SubmissionError> {
        let mut guard = self.profiles.write().await;
        let entry = guard.entry(change.user_id.clone()).or_insert_with(|| StoredProfile {
            user_id: change.user_id.clone(),
            ..StoredProfile::default()
        });
        if entry
            .password
            .as_deref()
            .is_some_and(|current| current != change.current_password)
        {
            return Err(SubmissionError::Rejected(
                "current password does not match".to_string(),
            ));
        }
        entry.password = Some(change.new_password);
        Ok(())
    }
}

fn decode<T: serde::de::DeserializeOwned>(payload: &serde_json::Value) -> Result<T, SubmissionError> {
    serde_json::from_value(payload.clone())
        .map_err(|err| SubmissionError::Rejected(format!("malformed payload: {err}")))
}

#[async_trait::async_trait]
impl Submitter for InMemoryProfileStore {
    async fn submit(
        &self,
        endpoint: &Endpoint,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, SubmissionError> {
        if self.is_offline {
            return Err(SubmissionError::Offline);
        }
        match endpoint.name.as_str() {
            PROFILE_UPDATE_ENDPOINT => {
                let profile = self.update_profile(decode(payload)?).await;
                serde_json::to_value(profile)
                    .map_err(|err| SubmissionError::Rejected(err.to_string()))
            }
            CHANGE_PASSWORD_ENDPOINT => {
                self.change_password(decode(payload)?).await?;
                Ok(serde_json::json!({ "changed": true }))
            }
            other => Err(SubmissionError::Rejected(format!("unknown endpoint {other}"))),
        }
    }
}
