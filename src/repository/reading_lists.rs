//! Reading list domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult, RejectReason},
    models::ReadingList,
};

impl Repository {
    /// Create a reading list owned by `owner_id`
    pub async fn reading_lists_create(&self, owner_id: i32, private: bool) -> AppResult<ReadingList> {
        let row = sqlx::query_as::<_, ReadingList>(
            r#"
            INSERT INTO reading_lists (owner_id, private)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(owner_id)
        .bind(private)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Get reading list by ID, whoever owns it
    pub async fn reading_lists_get(&self, id: i32) -> AppResult<Option<ReadingList>> {
        let row = sqlx::query_as::<_, ReadingList>("SELECT * FROM reading_lists WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Public lists plus, when `owner_id` is given, that user's own lists.
    /// Each list appears once, in id order.
    pub async fn reading_lists_visible_to(&self, owner_id: Option<i32>) -> AppResult<Vec<ReadingList>> {
        let rows = sqlx::query_as::<_, ReadingList>(
            r#"
            SELECT * FROM reading_lists
            WHERE private = FALSE OR owner_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Delete `owner_id`'s list and its books in one transaction.
    /// Returns the number of books removed along with the list; a list that
    /// is already gone rolls the transaction back as a bad id.
    pub async fn reading_lists_delete(&self, id: i32, owner_id: i32) -> AppResult<u64> {
        let mut tx = self.pool.begin().await?;

        let books = sqlx::query(
            r#"
            DELETE FROM books
            WHERE reading_list_id = (SELECT id FROM reading_lists WHERE id = $1 AND owner_id = $2)
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let lists = sqlx::query("DELETE FROM reading_lists WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if lists == 0 {
            return Err(AppError::BadReadingListId(RejectReason::Missing));
        }

        tx.commit().await?;
        Ok(books)
    }
}
