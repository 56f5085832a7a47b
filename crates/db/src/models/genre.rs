//! Genre model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use filmoteka_core::types::DbId;

/// A row from the `genre` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a genre.
#[derive(Debug, Deserialize)]
pub struct CreateGenre {
    pub name: String,
}

/// DTO for a full replace of a genre.
#[derive(Debug, Deserialize)]
pub struct UpdateGenre {
    pub name: String,
}
