//! The new-character form.
//!
//! Every field is free text as typed. Traits are one comma-separated string
//! and age is a string that may be blank.

use epicdict_core::character_form::{non_blank, parse_age, parse_traits};
use epicdict_core::error::CoreError;

use crate::types::NewCharacter;

#[derive(Debug, Clone, Default)]
pub struct CharacterForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub race: String,
    pub occupation: String,
    pub alignment: String,
    pub physical_description: String,
    pub personality_traits: String,
    pub powers: String,
    pub backstory: String,
}

impl CharacterForm {
    /// Build the request body. Blank optional fields are left out.
    pub fn into_new_character(self) -> Result<NewCharacter, CoreError> {
        let name = non_blank(&self.name)
            .ok_or_else(|| CoreError::Validation("name is required".into()))?;

        Ok(NewCharacter {
            name,
            age: parse_age(&self.age)?,
            gender: non_blank(&self.gender),
            race: non_blank(&self.race),
            occupation: non_blank(&self.occupation),
            alignment: non_blank(&self.alignment),
            physical_description: non_blank(&self.physical_description),
            personality_traits: parse_traits(&self.personality_traits),
            powers: non_blank(&self.powers),
            backstory: non_blank(&self.backstory),
        })
    }
}
