//! User profile model and registration DTO.

use epicdict_core::plans::Plan;
use epicdict_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    /// Stored role name; use [`User::plan`] for the typed value.
    pub role: String,
    pub created_at: Timestamp,
}

impl User {
    /// The subscription plan for this profile. Unknown roles resolve to free.
    pub fn plan(&self) -> Plan {
        Plan::from_role(Some(&self.role))
    }
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    #[validate(length(min = 1, message = "uid is required"))]
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}
