//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{RegisterUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "uid, email, display_name, role, created_at";

/// Provides profile lookups and registration for users.
pub struct UserRepo;

impl UserRepo {
    /// Create the profile for `input.uid`, or refresh its email and display
    /// name if it already exists. The stored role and `created_at` of an
    /// existing profile are left untouched.
    pub async fn upsert(pool: &PgPool, input: &RegisterUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (uid, email, display_name)
             VALUES ($1, $2, $3)
             ON CONFLICT (uid) DO UPDATE SET
                email = EXCLUDED.email,
                display_name = EXCLUDED.display_name
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.uid)
            .bind(&input.email)
            .bind(&input.display_name)
            .fetch_one(pool)
            .await
    }

    /// Find a profile by uid.
    pub async fn find_by_uid(pool: &PgPool, uid: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE uid = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(uid)
            .fetch_optional(pool)
            .await
    }
}
