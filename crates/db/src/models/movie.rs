//! Movie model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use filmoteka_core::types::DbId;

/// A row from the `movie` table.
///
/// `genre_id` / `director_id` are nullable and not enforced to
/// reference live rows.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub trailer: String,
    pub year: i64,
    pub rating: f64,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}

/// DTO for creating a movie. The primary key is output-only: a caller-
/// supplied `id` is ignored and the store assigns one.
#[derive(Debug, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub description: String,
    pub trailer: String,
    pub year: i64,
    pub rating: f64,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}

/// DTO for a full replace. Every field is required; the row keeps its
/// original `id` even if the request body carries one.
#[derive(Debug, Deserialize)]
pub struct UpdateMovie {
    pub title: String,
    pub description: String,
    pub trailer: String,
    pub year: i64,
    pub rating: f64,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}

/// Optional conjunctive equality filters for movie listings.
///
/// An empty query value (`?director_id=`) means no filter, the same as
/// an absent parameter.
#[derive(Debug, Default, Deserialize)]
pub struct MovieFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub director_id: Option<DbId>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub genre_id: Option<DbId>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<DbId>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
