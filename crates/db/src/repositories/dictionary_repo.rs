//! Repository for the `dictionaries` table.
//!
//! Every lookup is scoped by `owner_uid`; a dictionary owned by someone else
//! is indistinguishable from one that does not exist.

use epicdict_core::types::DbId;
use sqlx::PgPool;

use crate::models::dictionary::{CreateDictionary, Dictionary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_uid, title, description, genre, tags, \
                       max_characters, character_count, created_at";

/// Provides CRUD operations for dictionaries.
pub struct DictionaryRepo;

impl DictionaryRepo {
    /// Insert a new dictionary with an empty character counter.
    pub async fn create(
        pool: &PgPool,
        owner_uid: &str,
        input: &CreateDictionary,
        max_characters: i32,
    ) -> Result<Dictionary, sqlx::Error> {
        let query = format!(
            "INSERT INTO dictionaries
                (owner_uid, title, description, genre, tags, max_characters, character_count)
             VALUES ($1, $2, $3, $4, $5, $6, 0)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dictionary>(&query)
            .bind(owner_uid)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.genre)
            .bind(&input.tags)
            .bind(max_characters)
            .fetch_one(pool)
            .await
    }

    /// List all dictionaries owned by `owner_uid`, oldest first.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_uid: &str,
    ) -> Result<Vec<Dictionary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM dictionaries
             WHERE owner_uid = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Dictionary>(&query)
            .bind(owner_uid)
            .fetch_all(pool)
            .await
    }

    /// Find one of the owner's dictionaries by id.
    pub async fn find_for_owner(
        pool: &PgPool,
        owner_uid: &str,
        id: DbId,
    ) -> Result<Option<Dictionary>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dictionaries WHERE id = $1 AND owner_uid = $2");
        sqlx::query_as::<_, Dictionary>(&query)
            .bind(id)
            .bind(owner_uid)
            .fetch_optional(pool)
            .await
    }

    /// Delete a dictionary and, through the foreign key cascade, its
    /// characters. Returns `true` if a row was removed.
    pub async fn delete_for_owner(
        pool: &PgPool,
        owner_uid: &str,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM dictionaries WHERE id = $1 AND owner_uid = $2")
            .bind(id)
            .bind(owner_uid)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
