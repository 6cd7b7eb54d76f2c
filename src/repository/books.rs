//! Book domain methods on Repository

use super::Repository;
use crate::{
    error::AppResult,
    models::{Book, BookFields},
};

impl Repository {
    /// Create a book in `reading_list_id`
    pub async fn books_create(&self, reading_list_id: i32, fields: &BookFields) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (reading_list_id, isbn, title, author, category, cover_url, summary)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(reading_list_id)
        .bind(&fields.isbn)
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.category)
        .bind(&fields.cover_url)
        .bind(&fields.summary)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Get book by ID
    pub async fn books_get(&self, id: i32) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Overwrite all six fields of a book still in `reading_list_id`.
    /// `None` fields are written as NULL.
    pub async fn books_replace(
        &self,
        reading_list_id: i32,
        id: i32,
        fields: &BookFields,
    ) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET isbn = $3, title = $4, author = $5, category = $6, cover_url = $7, summary = $8
            WHERE id = $1 AND reading_list_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(reading_list_id)
        .bind(&fields.isbn)
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.category)
        .bind(&fields.cover_url)
        .bind(&fields.summary)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a book still in `reading_list_id`, returns false if it is gone
    pub async fn books_delete(&self, reading_list_id: i32, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1 AND reading_list_id = $2")
            .bind(id)
            .bind(reading_list_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// `(reading_list_id, title)` of every book in the given lists, ordered by list then book id
    pub async fn books_titles_for_lists(&self, reading_list_ids: &[i32]) -> AppResult<Vec<(i32, Option<String>)>> {
        let rows = sqlx::query_as::<_, (i32, Option<String>)>(
            r#"
            SELECT reading_list_id, title FROM books
            WHERE reading_list_id = ANY($1)
            ORDER BY reading_list_id, id
            "#,
        )
        .bind(reading_list_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
