//! Request handlers for the catalog resources.
//!
//! Each submodule provides async handler functions (list, create,
//! get_by_id, replace, delete) for a single entity kind. Handlers
//! delegate to the corresponding repository in `filmoteka_db` and map
//! errors via [`AppError`](crate::error::AppError).
//!
//! Mutation responses are JSON string literals with localized Russian
//! messages; single-item GETs return a one-element array. Both are
//! contractual behaviors inherited from the original service.

pub mod directors;
pub mod genres;
pub mod movies;
