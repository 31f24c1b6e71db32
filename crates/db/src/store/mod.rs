//! The document store seam.
//!
//! Handlers depend on [`DocumentStore`] only. [`PgStore`] is the production
//! backend; [`MemoryStore`] keeps everything in process for local development
//! and tests. Both honour the same ownership scoping and the same atomic
//! quota gate.

use async_trait::async_trait;
use epicdict_core::types::DbId;

use crate::models::character::{AddCharacterOutcome, Character, CreateCharacter};
use crate::models::dictionary::{CreateDictionary, Dictionary};
use crate::models::user::{RegisterUser, User};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors raised by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Hierarchical storage of users, their dictionaries, and the characters in
/// each dictionary.
///
/// Every dictionary and character operation is scoped by the owner's uid.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create or refresh a user profile. New profiles start on the free plan;
    /// existing profiles keep their role.
    async fn register_user(&self, input: &RegisterUser) -> StoreResult<User>;

    async fn find_user(&self, uid: &str) -> StoreResult<Option<User>>;

    /// Create a dictionary with `character_count = 0`.
    async fn create_dictionary(
        &self,
        owner_uid: &str,
        input: &CreateDictionary,
        max_characters: i32,
    ) -> StoreResult<Dictionary>;

    async fn list_dictionaries(&self, owner_uid: &str) -> StoreResult<Vec<Dictionary>>;

    async fn find_dictionary(&self, owner_uid: &str, id: DbId) -> StoreResult<Option<Dictionary>>;

    /// Delete a dictionary with all of its characters.
    async fn delete_dictionary(&self, owner_uid: &str, id: DbId) -> StoreResult<bool>;

    /// Insert a character if, and only if, the dictionary is below its quota.
    /// The check and the counter increment happen atomically.
    async fn add_character_within_quota(
        &self,
        owner_uid: &str,
        dictionary_id: DbId,
        input: &CreateCharacter,
    ) -> StoreResult<AddCharacterOutcome>;

    /// Characters of a dictionary; empty when the dictionary does not exist.
    async fn list_characters(
        &self,
        owner_uid: &str,
        dictionary_id: DbId,
    ) -> StoreResult<Vec<Character>>;

    async fn find_character(
        &self,
        owner_uid: &str,
        dictionary_id: DbId,
        id: DbId,
    ) -> StoreResult<Option<Character>>;

    /// Delete a character and decrement the dictionary's counter.
    async fn delete_character(
        &self,
        owner_uid: &str,
        dictionary_id: DbId,
        id: DbId,
    ) -> StoreResult<bool>;

    /// Confirm the backend is reachable.
    async fn health_check(&self) -> StoreResult<()>;
}
