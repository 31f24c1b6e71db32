//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! JSON field names are camelCase to match the browser client.

use serde::{Deserialize, Deserializer};

pub mod character;
pub mod dictionary;
pub mod user;

/// Read an explicit JSON `null` the same as an absent key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::character::CreateCharacter;
    use super::dictionary::CreateDictionary;

    #[test]
    fn null_dictionary_fields_become_empty() {
        let input: CreateDictionary = serde_json::from_value(serde_json::json!({
            "title": "Heroes",
            "description": null,
            "genre": null,
            "tags": null,
        }))
        .unwrap();

        assert_eq!(input.title, "Heroes");
        assert_eq!(input.description, "");
        assert_eq!(input.genre, "");
        assert!(input.tags.is_empty());
    }

    #[test]
    fn null_character_name_and_traits_become_empty() {
        let input: CreateCharacter = serde_json::from_value(serde_json::json!({
            "name": null,
            "personalityTraits": null,
            "race": null,
        }))
        .unwrap();

        assert_eq!(input.name, "");
        assert!(input.personality_traits.is_empty());
        assert_eq!(input.race, None);
    }
}
