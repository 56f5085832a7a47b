use crate::types::DbId;

/// Domain-level errors shared by all crates.
///
/// `NotFound` carries the entity noun in genitive case («фильма»,
/// «режиссера», «жанра») because the rendered message is part of the
/// public API contract.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Нет {entity} с id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Внутренняя ошибка: {0}")]
    Internal(String),
}
