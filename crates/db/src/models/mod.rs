//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts (never declares `id`)
//! - A `Deserialize` update DTO with every field required (full replace)

pub mod director;
pub mod genre;
pub mod movie;
