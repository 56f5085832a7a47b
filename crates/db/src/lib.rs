//! SQLite persistence for the filmoteka catalog.
//!
//! Exposes the connection pool constructor, schema bootstrap, and the
//! per-entity repositories in [`repositories`].

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL, creating the database
/// file if it does not exist yet.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(20)
        .connect_with(options)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the catalog tables if they do not exist.
///
/// `movie.genre_id` / `movie.director_id` are plain integer columns
/// with no foreign-key constraints, so a movie may reference a genre
/// or director row that no longer exists.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS genre (
            id   INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS director (
            id   INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS movie (
            id          INTEGER PRIMARY KEY,
            title       TEXT NOT NULL,
            description TEXT NOT NULL,
            trailer     TEXT NOT NULL,
            year        INTEGER NOT NULL,
            rating      REAL NOT NULL,
            genre_id    INTEGER,
            director_id INTEGER
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
