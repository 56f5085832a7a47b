//! Per-entity repositories over the SQLite pool.
//!
//! Repositories are stateless unit structs; every operation takes the
//! pool explicitly, so there is no shared session handle anywhere.

pub mod director_repo;
pub mod genre_repo;
pub mod movie_repo;

pub use director_repo::DirectorRepo;
pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;
