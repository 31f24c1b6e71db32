//! Character model, DTO, and the outcome of a quota-gated insert.

use epicdict_core::catalog::{Facets, Searchable};
use epicdict_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::null_as_default;

/// A row from the `characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: DbId,
    #[serde(skip_serializing)]
    pub dictionary_id: DbId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_description: Option<String>,
    pub personality_traits: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub powers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backstory: Option<String>,
    pub created_at: Timestamp,
}

impl Searchable for Character {
    fn facets(&self) -> Facets<'_> {
        Facets {
            name: &self.name,
            race: self.race.as_deref(),
            occupation: self.occupation.as_deref(),
            personality_traits: &self.personality_traits,
        }
    }
}

/// Body of `POST /characters/{dictionary_id}`. Only `name` is required; a
/// missing or `null` name fails validation rather than deserialization.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacter {
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub race: Option<String>,
    pub occupation: Option<String>,
    pub alignment: Option<String>,
    pub physical_description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub personality_traits: Vec<String>,
    pub powers: Option<String>,
    pub backstory: Option<String>,
}

/// Result of inserting a character behind the dictionary's quota.
#[derive(Debug)]
pub enum AddCharacterOutcome {
    /// The character was stored and the counter incremented.
    Added(Character),
    /// The dictionary is already at `max_characters`; nothing was written.
    LimitReached { max_characters: i32 },
    /// No dictionary with that id belongs to the caller.
    DictionaryNotFound,
}
