//! Repository for the `movie` table.

use filmoteka_core::types::DbId;

use crate::models::movie::{CreateMovie, Movie, MovieFilter, UpdateMovie};
use crate::DbPool;

/// Column list for movie queries.
const COLUMNS: &str = "id, title, description, trailer, year, rating, genre_id, director_id";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// List movies, optionally filtered by director and/or genre.
    ///
    /// Filters are conjunctive equality predicates; rows with a NULL
    /// foreign key never match an active filter.
    pub async fn list(pool: &DbPool, filter: &MovieFilter) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movie
             WHERE (? IS NULL OR director_id = ?)
               AND (? IS NULL OR genre_id = ?)
             ORDER BY id"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(filter.director_id)
            .bind(filter.director_id)
            .bind(filter.genre_id)
            .bind(filter.genre_id)
            .fetch_all(pool)
            .await
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie WHERE id = ?");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a movie, returning the created row with its assigned ID.
    pub async fn create(pool: &DbPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie (title, description, trailer, year, rating, genre_id, director_id)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.trailer)
            .bind(input.year)
            .bind(input.rating)
            .bind(input.genre_id)
            .bind(input.director_id)
            .fetch_one(pool)
            .await
    }

    /// Fully replace a movie by ID, returning the updated row.
    ///
    /// Overwrites every field except `id`, which is immutable.
    pub async fn replace(
        pool: &DbPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movie SET
                title = ?,
                description = ?,
                trailer = ?,
                year = ?,
                rating = ?,
                genre_id = ?,
                director_id = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.trailer)
            .bind(input.year)
            .bind(input.rating)
            .bind(input.genre_id)
            .bind(input.director_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
