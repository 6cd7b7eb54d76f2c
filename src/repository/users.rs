//! User and API key domain methods on Repository

use super::Repository;
use crate::{error::AppResult, models::User};

impl Repository {
    /// Get user by ID
    pub async fn users_get_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, first_name, last_name FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Get the user owning API key `key`, if `username` matches
    pub async fn users_get_by_api_key(&self, username: &str, key: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.username, u.first_name, u.last_name
            FROM users u
            JOIN api_keys k ON k.user_id = u.id
            WHERE u.username = $1 AND k.key = $2
            "#,
        )
        .bind(username)
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Store `candidate` as the user's API key unless one exists, and return
    /// whichever key is stored. The unique constraint on `user_id` makes
    /// concurrent first calls converge on a single key.
    pub async fn api_keys_get_or_create(&self, user_id: i32, candidate: &str) -> AppResult<String> {
        let key: String = sqlx::query_scalar(
            r#"
            INSERT INTO api_keys (user_id, key)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
            RETURNING key
            "#,
        )
        .bind(user_id)
        .bind(candidate)
        .fetch_one(&self.pool)
        .await?;
        Ok(key)
    }
}
