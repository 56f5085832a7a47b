//! Repository for the `genre` table.

use filmoteka_core::types::DbId;

use crate::models::genre::{CreateGenre, Genre, UpdateGenre};
use crate::DbPool;

/// Column list for genre queries.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// List all genres.
    pub async fn list(pool: &DbPool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genre ORDER BY id");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }

    /// Find a genre by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genre WHERE id = ?");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a genre, returning the created row with its assigned ID.
    pub async fn create(pool: &DbPool, input: &CreateGenre) -> Result<Genre, sqlx::Error> {
        let query = format!("INSERT INTO genre (name) VALUES (?) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Genre>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Fully replace a genre by ID, returning the updated row.
    pub async fn replace(
        pool: &DbPool,
        id: DbId,
        input: &UpdateGenre,
    ) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("UPDATE genre SET name = ? WHERE id = ? RETURNING {COLUMNS}");
        sqlx::query_as::<_, Genre>(&query)
            .bind(&input.name)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a genre by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM genre WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
