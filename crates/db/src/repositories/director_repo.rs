//! Repository for the `director` table.

use filmoteka_core::types::DbId;

use crate::models::director::{CreateDirector, Director, UpdateDirector};
use crate::DbPool;

/// Column list for director queries.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// List all directors.
    pub async fn list(pool: &DbPool) -> Result<Vec<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM director ORDER BY id");
        sqlx::query_as::<_, Director>(&query).fetch_all(pool).await
    }

    /// Find a director by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM director WHERE id = ?");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a director, returning the created row with its assigned ID.
    pub async fn create(pool: &DbPool, input: &CreateDirector) -> Result<Director, sqlx::Error> {
        let query = format!("INSERT INTO director (name) VALUES (?) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Director>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Fully replace a director by ID, returning the updated row.
    pub async fn replace(
        pool: &DbPool,
        id: DbId,
        input: &UpdateDirector,
    ) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("UPDATE director SET name = ? WHERE id = ? RETURNING {COLUMNS}");
        sqlx::query_as::<_, Director>(&query)
            .bind(&input.name)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a director by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM director WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
