//! Request and response bodies as they appear on the wire (camelCase).

use chrono::{DateTime, Utc};
use epicdict_core::catalog::{Facets, Searchable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dictionary {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub genre: String,
    pub tags: Vec<String>,
    pub max_characters: i32,
    pub character_count: i32,
    pub created_at: DateTime<Utc>,
}

impl Dictionary {
    /// Slots left before the quota is reached.
    pub fn remaining(&self) -> i32 {
        (self.max_characters - self.character_count).max(0)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewDictionary {
    pub title: String,
    pub description: String,
    pub genre: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub race: Option<String>,
    pub occupation: Option<String>,
    pub alignment: Option<String>,
    pub physical_description: Option<String>,
    #[serde(default)]
    pub personality_traits: Vec<String>,
    pub powers: Option<String>,
    pub backstory: Option<String>,
    pub created_at: DateTime<Utc>,
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

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCharacter {
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
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub name: String,
    pub role: String,
    pub max_characters: i32,
    pub price: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub role: String,
    pub plan: PlanSummary,
    pub usage: Usage,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Usage {
    pub used: i64,
    pub total: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Created {
    pub id: i64,
}
