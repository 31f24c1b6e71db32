//! Repository for the `characters` table.
//!
//! Inserts and deletes keep `dictionaries.character_count` in step with the
//! number of character rows inside a single transaction.

use epicdict_core::types::DbId;
use sqlx::PgPool;

use crate::models::character::{AddCharacterOutcome, Character, CreateCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, dictionary_id, name, age, gender, race, occupation, alignment, \
                       physical_description, personality_traits, powers, backstory, created_at";

/// Provides quota-gated creation and lookups for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a character if the owner's dictionary still has room.
    ///
    /// The counter is bumped with a conditional `UPDATE` that only matches
    /// while `character_count < max_characters`. The row lock it takes
    /// serialises concurrent inserts into the same dictionary, so the quota
    /// can never be overrun and the counter always equals the row count.
    pub async fn create_within_quota(
        pool: &PgPool,
        owner_uid: &str,
        dictionary_id: DbId,
        input: &CreateCharacter,
    ) -> Result<AddCharacterOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let bumped: Option<i32> = sqlx::query_scalar(
            "UPDATE dictionaries SET character_count = character_count + 1
             WHERE id = $1 AND owner_uid = $2 AND character_count < max_characters
             RETURNING character_count",
        )
        .bind(dictionary_id)
        .bind(owner_uid)
        .fetch_optional(&mut *tx)
        .await?;

        if bumped.is_none() {
            let max_characters: Option<i32> = sqlx::query_scalar(
                "SELECT max_characters FROM dictionaries WHERE id = $1 AND owner_uid = $2",
            )
            .bind(dictionary_id)
            .bind(owner_uid)
            .fetch_optional(&mut *tx)
            .await?;
            tx.rollback().await?;

            return Ok(match max_characters {
                Some(max_characters) => {
                    tracing::debug!(dictionary_id, max_characters, "Character quota exhausted");
                    AddCharacterOutcome::LimitReached { max_characters }
                }
                None => AddCharacterOutcome::DictionaryNotFound,
            });
        }

        let query = format!(
            "INSERT INTO characters
                (dictionary_id, name, age, gender, race, occupation, alignment,
                 physical_description, personality_traits, powers, backstory)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        let character = sqlx::query_as::<_, Character>(&query)
            .bind(dictionary_id)
            .bind(&input.name)
            .bind(input.age)
            .bind(&input.gender)
            .bind(&input.race)
            .bind(&input.occupation)
            .bind(&input.alignment)
            .bind(&input.physical_description)
            .bind(&input.personality_traits)
            .bind(&input.powers)
            .bind(&input.backstory)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(AddCharacterOutcome::Added(character))
    }

    /// List the characters of one of the owner's dictionaries, oldest first.
    ///
    /// A missing (or foreign) dictionary simply yields an empty list.
    pub async fn list_by_dictionary(
        pool: &PgPool,
        owner_uid: &str,
        dictionary_id: DbId,
    ) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM characters
             WHERE dictionary_id = $1
               AND EXISTS (SELECT 1 FROM dictionaries d WHERE d.id = $1 AND d.owner_uid = $2)
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(dictionary_id)
            .bind(owner_uid)
            .fetch_all(pool)
            .await
    }

    /// Find a single character inside one of the owner's dictionaries.
    pub async fn find_in_dictionary(
        pool: &PgPool,
        owner_uid: &str,
        dictionary_id: DbId,
        id: DbId,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM characters
             WHERE id = $1 AND dictionary_id = $2
               AND EXISTS (SELECT 1 FROM dictionaries d WHERE d.id = $2 AND d.owner_uid = $3)"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(dictionary_id)
            .bind(owner_uid)
            .fetch_optional(pool)
            .await
    }

    /// Delete a character and release its slot in the dictionary's quota.
    /// Returns `true` if a row was removed.
    pub async fn delete_in_dictionary(
        pool: &PgPool,
        owner_uid: &str,
        dictionary_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "DELETE FROM characters
             WHERE id = $1 AND dictionary_id = $2
               AND EXISTS (SELECT 1 FROM dictionaries d WHERE d.id = $2 AND d.owner_uid = $3)",
        )
        .bind(id)
        .bind(dictionary_id)
        .bind(owner_uid)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query(
            "UPDATE dictionaries SET character_count = character_count - 1
             WHERE id = $1 AND character_count > 0",
        )
        .bind(dictionary_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }
}
