//! Director model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use filmoteka_core::types::DbId;

/// A row from the `director` table.
///
/// Derives `Deserialize` as well so an encoded row decodes back
/// field-for-field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Director {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a director.
#[derive(Debug, Deserialize)]
pub struct CreateDirector {
    pub name: String,
}

/// DTO for a full replace of a director.
#[derive(Debug, Deserialize)]
pub struct UpdateDirector {
    pub name: String,
}
