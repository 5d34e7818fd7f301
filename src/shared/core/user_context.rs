// Identity of the user on whose behalf a form is submitted.
//
// Purpose
// - Carry the authenticated user explicitly into the form pipeline instead of
//   reading it from ambient state.
//
// Boundaries
// - Authentication itself happens elsewhere. This is only the resolved identity.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserContext {
    pub user_id: String,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: String,
}

impl UserContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_anonymous(&self) -> bool {
        self.user_id.is_empty()
    }

    /// Value of a context attribute addressed by its camelCase name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        let value = match name {
            "userId" => &self.user_id,
            "username" => &self.username,
            "fullName" => &self.full_name,
            "email" => &self.email,
            "role" => &self.role,
            _ => return None,
        };
        Some(value.as_str()).filter(|v| !v.is_empty())
    }
}
