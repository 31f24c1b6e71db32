//! Dictionary model and DTOs.

use epicdict_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::null_as_default;

/// A row from the `dictionaries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dictionary {
    pub id: DbId,
    #[serde(skip_serializing)]
    pub owner_uid: String,
    pub title: String,
    pub description: String,
    pub genre: String,
    pub tags: Vec<String>,
    /// Fixed at creation from the owner's plan.
    pub max_characters: i32,
    pub character_count: i32,
    pub created_at: Timestamp,
}

impl Dictionary {
    pub fn is_full(&self) -> bool {
        self.character_count >= self.max_characters
    }
}

/// Body of `POST /dictionaries`. Every field may be absent or `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateDictionary {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub genre: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}
