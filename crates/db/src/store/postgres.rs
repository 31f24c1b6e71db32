//! PostgreSQL-backed [`DocumentStore`].

use async_trait::async_trait;
use epicdict_core::types::DbId;

use super::{DocumentStore, StoreResult};
use crate::models::character::{AddCharacterOutcome, Character, CreateCharacter};
use crate::models::dictionary::{CreateDictionary, Dictionary};
use crate::models::user::{RegisterUser, User};
use crate::repositories::{CharacterRepo, DictionaryRepo, UserRepo};
use crate::DbPool;

/// Thin adapter from the store trait to the repositories.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn register_user(&self, input: &RegisterUser) -> StoreResult<User> {
        Ok(UserRepo::upsert(&self.pool, input).await?)
    }

    async fn find_user(&self, uid: &str) -> StoreResult<Option<User>> {
        Ok(UserRepo::find_by_uid(&self.pool, uid).await?)
    }

    async fn create_dictionary(
        &self,
        owner_uid: &str,
        input: &CreateDictionary,
        max_characters: i32,
    ) -> StoreResult<Dictionary> {
        Ok(DictionaryRepo::create(&self.pool, owner_uid, input, max_characters).await?)
    }

    async fn list_dictionaries(&self, owner_uid: &str) -> StoreResult<Vec<Dictionary>> {
        Ok(DictionaryRepo::list_by_owner(&self.pool, owner_uid).await?)
    }

    async fn find_dictionary(&self, owner_uid: &str, id: DbId) -> StoreResult<Option<Dictionary>> {
        Ok(DictionaryRepo::find_for_owner(&self.pool, owner_uid, id).await?)
    }

    async fn delete_dictionary(&self, owner_uid: &str, id: DbId) -> StoreResult<bool> {
        Ok(DictionaryRepo::delete_for_owner(&self.pool, owner_uid, id).await?)
    }

    async fn add_character_within_quota(
        &self,
        owner_uid: &str,
        dictionary_id: DbId,
        input: &CreateCharacter,
    ) -> StoreResult<AddCharacterOutcome> {
        Ok(CharacterRepo::create_within_quota(&self.pool, owner_uid, dictionary_id, input).await?)
    }

    async fn list_characters(
        &self,
        owner_uid: &str,
        dictionary_id: DbId,
    ) -> StoreResult<Vec<Character>> {
        Ok(CharacterRepo::list_by_dictionary(&self.pool, owner_uid, dictionary_id).await?)
    }

    async fn find_character(
        &self,
        owner_uid: &str,
        dictionary_id: DbId,
        id: DbId,
    ) -> StoreResult<Option<Character>> {
        Ok(CharacterRepo::find_in_dictionary(&self.pool, owner_uid, dictionary_id, id).await?)
    }

    async fn delete_character(
        &self,
        owner_uid: &str,
        dictionary_id: DbId,
        id: DbId,
    ) -> StoreResult<bool> {
        Ok(CharacterRepo::delete_in_dictionary(&self.pool, owner_uid, dictionary_id, id).await?)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
